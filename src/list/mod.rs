use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests;

/// The `List` is a singly-linked list with owned nodes, anchored by a ghost link.
/// It allows inserting and removing elements right after any position in constant
/// time. In compromise, reaching a position takes *O*(*n*) time, and the list can
/// only be traversed front to back.
///
/// The `List` contains:
/// - a boxed `ghost` link that owns the first node (or nothing, if the list is
///   empty). It never holds an element, and cursors use it as the position
///   "before the first element";
/// - a length field `len`, which always equals the number of nodes reachable
///   from the ghost link.
///
/// # Naming Conventions
///
/// - `link`: the `next` slot of either the ghost or a node. Positions of cursors
///   are links, so that "insert after" and "erase after" work the same way on
///   the ghost and on real nodes;
/// - `front`/`back`: the first and the last node of the list.
pub struct List<T> {
    ghost: Box<Link<T>>,
    /// the length of the list
    pub(crate) len: usize,
}

#[repr(C)]
pub(crate) struct Node<T> {
    // `link` must stay the first field, links of nodes are cast back to nodes.
    pub(crate) link: Link<T>,
    pub(crate) element: T,
}

pub(crate) struct Link<T> {
    pub(crate) next: Option<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_link(&self) -> NonNull<Link<T>> {
        NonNull::from(self.ghost.as_ref())
    }
    pub(crate) fn ghost_link_mut(&mut self) -> NonNull<Link<T>> {
        NonNull::from(self.ghost.as_mut())
    }
    pub(crate) fn front_link(&self) -> Option<NonNull<Link<T>>> {
        self.ghost.next.as_deref().map(Node::link)
    }
    pub(crate) fn front_link_mut(&mut self) -> Option<NonNull<Link<T>>> {
        self.ghost.next.as_deref_mut().map(Node::link_mut)
    }

    /// Return the link of the back node, or the ghost link if the list is empty.
    pub(crate) fn back_link_mut(&mut self) -> NonNull<Link<T>> {
        let mut link = self.ghost_link_mut();
        // SAFETY: every link reached here is owned by the list, which is
        // mutably borrowed for the whole walk.
        while let Some(node) = unsafe { link.as_mut() }.next.as_deref_mut() {
            link = Node::link_mut(node);
        }
        link
    }

    /// Attach a new node holding `element` right after `link`, and return the
    /// link of the new node.
    ///
    /// It is unsafe because it does not check whether `link` belongs to the list.
    ///
    /// If `link` does not belong to the list, this function call will make
    /// the length of the list wrong.
    pub(crate) unsafe fn attach_after(
        &mut self,
        mut link: NonNull<Link<T>>,
        element: T,
    ) -> NonNull<Link<T>> {
        let mut node = Box::new(Node::new(element));
        let link = link.as_mut();
        node.link.next = link.next.take();
        self.len += 1;
        Node::link_mut(&mut **link.next.insert(node))
    }

    /// Detach the node right after `link` from the list, and return it as a box,
    /// or return `None` if `link` is the last one.
    ///
    /// It is unsafe because it does not check whether `link` belongs to the list.
    ///
    /// If `link` does not belong to the list, this function call will make
    /// the length of the list wrong.
    pub(crate) unsafe fn detach_after(&mut self, mut link: NonNull<Link<T>>) -> Option<Box<Node<T>>> {
        let link = link.as_mut();
        let mut node = link.next.take()?;
        link.next = node.link.next.take();
        debug_assert!(self.len > 0, "Cannot detach a node from an empty list");
        self.len -= 1;
        Some(node)
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = Box::new(Link { next: None });
        Self { ghost, len: 0 }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ghost.next.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.begin().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.ghost.next.as_deref_mut().map(|node| &mut node.element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.before_begin_mut().insert_after(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.before_begin_mut().remove_after().ok()
    }

    /// Swaps the contents of two lists.
    ///
    /// Only the ghost links and the lengths are exchanged: nodes stay where they
    /// are, and elements are neither moved nor copied.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list1 = List::from([1, 2, 3]);
    /// let mut list2 = List::from([4]);
    ///
    /// list1.swap(&mut list2);
    /// assert_eq!(list1, List::from([4]));
    /// assert_eq!(list2, List::from([1, 2, 3]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.ghost.next, &mut other.ghost.next);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Provides a cursor at the ghost link, i.e. the position before the first
    /// element.
    ///
    /// The cursor has no element, but it has a successor: the first element,
    /// or the end marker if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.before_begin();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.peek_next(), Some(&1));
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor, list.begin());
    /// ```
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.ghost_link()))
    }

    /// Provides a cursor at the first node, or the end marker if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.begin().current(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.begin(), empty.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_link())
    }

    /// Provides a cursor at the end marker, i.e. the position after the last
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1]);
    /// let mut cursor = list.begin();
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor, list.end());
    /// assert_eq!(list.end().current(), None);
    /// ```
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Provides a cursor with editing operations at the ghost link.
    ///
    /// This is the position to use for inserting or removing the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 3]);
    /// let mut cursor = list.before_begin_mut();
    /// cursor.insert_after(1);
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost_link_mut();
        CursorMut::new(self, Some(ghost))
    }

    /// Provides a cursor with editing operations at the first node, or the end
    /// marker if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_link_mut();
        CursorMut::new(self, front)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            link: Link { next: None },
            element,
        }
    }

    /// The link of `node`, pointing at the start of the node.
    pub(crate) fn link(node: &Node<T>) -> NonNull<Link<T>> {
        NonNull::from(node).cast()
    }

    /// Like [`Node::link`], but the link may be written through.
    pub(crate) fn link_mut(node: &mut Node<T>) -> NonNull<Link<T>> {
        NonNull::from(node).cast()
    }

    /// Return the element of the node that owns `link`.
    ///
    /// It is unsafe because `link` must be the link of a live node (obtained by
    /// [`Node::link`] or [`Node::link_mut`]), never the ghost link.
    pub(crate) unsafe fn element<'a>(link: NonNull<Link<T>>) -> &'a T {
        &link.cast::<Node<T>>().as_ref().element
    }

    /// Like [`Node::element`], but `link` must come from [`Node::link_mut`].
    pub(crate) unsafe fn element_mut<'a>(link: NonNull<Link<T>>) -> &'a mut T {
        let mut node = link.cast::<Node<T>>();
        &mut node.as_mut().element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::{Cell, RefCell};
    use std::iter::FromIterator;

    #[derive(Debug, Default)]
    struct DeletionSpy<'a> {
        deletion_counter: Option<&'a Cell<usize>>,
    }

    impl Drop for DeletionSpy<'_> {
        fn drop(&mut self) {
            if let Some(counter) = self.deletion_counter {
                counter.set(counter.get() + 1);
            }
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.len(), 1);
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_front(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(2, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert!(list.is_empty());

        // popping an empty list changes nothing
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_push_then_pop_restores() {
        let snapshot = List::from([3, 14, 15, 92, 6]);
        let mut list = snapshot.clone();
        list.push_front(42);
        assert_eq!(list.len(), snapshot.len() + 1);
        assert_eq!(list.pop_front(), Some(42));
        assert_eq!(list, snapshot);
        assert_eq!(list.len(), snapshot.len());
    }

    #[test]
    fn list_pop_front() {
        let mut numbers = List::from([3, 14, 15, 92, 6]);
        numbers.pop_front();
        assert_eq!(numbers, List::from([14, 15, 92, 6]));

        let deletion_counter = Cell::new(0);
        let mut list = List::new();
        list.push_front(DeletionSpy::default());
        if let Some(spy) = list.front_mut() {
            spy.deletion_counter = Some(&deletion_counter);
        }
        assert_eq!(deletion_counter.get(), 0);
        list.pop_front();
        assert_eq!(deletion_counter.get(), 1);
    }

    #[test]
    fn list_clear() {
        let deletion_counter = Cell::new(0);
        let mut list = List::from_iter((0..5).map(|_| DeletionSpy {
            deletion_counter: Some(&deletion_counter),
        }));
        assert_eq!(list.len(), 5);

        list.clear();
        assert_eq!(deletion_counter.get(), 5);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        // clearing an empty list is fine
        list.clear();
        assert_eq!(deletion_counter.get(), 5);

        list.push_front(DeletionSpy {
            deletion_counter: Some(&deletion_counter),
        });
        drop(list);
        assert_eq!(deletion_counter.get(), 6);
    }

    #[test]
    fn list_drop_long_chain() {
        // dropping must not recurse once per node
        let list = List::from_iter(0..1_000_000);
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[test]
    fn list_swap() {
        let mut list1 = List::from([1, 2, 3]);
        let mut list2 = List::from([4, 5]);
        let front1 = list1.front().map(|x| x as *const i32);
        let front2 = list2.front().map(|x| x as *const i32);

        list1.swap(&mut list2);
        assert_eq!(list1, List::from([4, 5]));
        assert_eq!(list2, List::from([1, 2, 3]));
        assert_eq!(list1.len(), 2);
        assert_eq!(list2.len(), 3);

        // nodes are not touched by swapping
        assert_eq!(list1.front().map(|x| x as *const i32), front2);
        assert_eq!(list2.front().map(|x| x as *const i32), front1);

        let mut empty = List::new();
        list1.swap(&mut empty);
        assert!(list1.is_empty());
        assert_eq!(empty, List::from([4, 5]));
    }

    #[test]
    fn list_front_mut() {
        let mut list = List::from([1, 2]);
        *list.front_mut().unwrap() = 10;
        assert_eq!(list, List::from([10, 2]));

        let mut empty: List<i32> = List::new();
        assert_eq!(empty.front_mut(), None);
    }

    #[test]
    fn list_debug() {
        let list = List::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }

    #[test]
    fn list_is_send_and_sync() {
        fn send_sync<S: Send + Sync>(_: S) {}
        send_sync(List::from([1, 2, 3]));
    }
}
