use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of a `List`.
///
/// It walks the nodes front to back, starting from the node owned by the
/// ghost link, and knows how many elements remain.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    head: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            head: list.ghost.next.as_deref(),
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        self.clone().for_each(|element| {
            f.field(element);
        });
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Step to the successor of the head node and return the head's element,
    /// or return `None` if all nodes are visited.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.head?;
        self.head = current.link.next.as_deref();
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
///
/// // Won't compile, because list is already borrowed mutably.
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    head: Option<&'a mut Node<T>>,
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let len = list.len();
        Self {
            head: list.ghost.next.as_deref_mut(),
            len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            f.field(&current.element);
            node = current.link.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.head.take()?;
        self.head = current.link.next.as_deref_mut();
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Append elements at the back of the list.
///
/// The back link is found once, then every element is attached after the
/// previous one, so appending *k* elements takes *O*(*n* + *k*) time.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let mut list = List::from([1, 2]);
/// list.extend(vec![3, 4]);
/// list.extend(&[5]);
/// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
/// ```
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut back = self.back_link_mut();
        for item in iter {
            // SAFETY: `back` is the last link of the list, and the list is
            // only changed here while appending.
            back = unsafe { self.attach_after(back, item) };
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

/// Build a list holding the array's elements in order.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// ```
impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

/// Build a list holding clones of the slice's elements in order.
///
/// If a `clone` panics, the nodes built so far are released and no list is
/// produced.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let words = vec![String::from("a"), String::from("b")];
/// let list = List::from(words.as_slice());
/// assert_eq!(list, List::from([String::from("a"), String::from("b")]));
/// ```
impl<T: Clone> From<&[T]> for List<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::Cell;
    use std::fmt::Debug;
    use std::iter::FromIterator;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER();
                    assert_eq!(iter.len(), len);
                    for (i, item) in vec.$ITER().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = list.$ITER();
                    for item in vec.$ITER().take(mid) {
                        assert_eq!(iter.next(), Some(item));
                    }
                    assert_eq!(iter.len(), len - mid);
                    assert_eq!(iter.count(), len - mid);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input, mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 0);
        test_case(0..2, 1);
        test_case(0..1, 1);
        test_case(0..0, 0);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from([1, 2, 3]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);

        let mut list = List::from([1, 2, 3]);
        for x in &mut list {
            *x *= 2;
        }
        let mut sum = 0;
        for x in &list {
            sum += x;
        }
        assert_eq!(sum, 12);
    }

    #[test]
    fn test_iter_debug() {
        let mut list = List::from([1, 2, 3]);
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(2, 3)");
        let mut iter = list.iter_mut();
        iter.next();
        assert_eq!(format!("{:?}", iter), "IterMut(2, 3)");
        let mut iter = list.into_iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "IntoIter { list: [2, 3] }");
    }

    #[test]
    fn test_from_and_extend() {
        let list = List::from_iter(vec![1, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        let list: List<i32> = List::from([]);
        assert!(list.is_empty());

        let mut list = List::from(&[1, 2][..]);
        list.extend(3..5);
        list.extend(&[5, 6]);
        assert_eq!(list.len(), 6);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);

        let mut empty = List::new();
        empty.extend(Vec::<i32>::new());
        assert!(empty.is_empty());
        empty.extend(vec![7]);
        assert_eq!(empty, List::from([7]));
    }

    #[test]
    fn test_from_slice_strong_guarantee() {
        #[derive(Debug)]
        struct Tracked<'a> {
            countdown: &'a Cell<usize>,
            alive: &'a Cell<usize>,
        }
        impl Clone for Tracked<'_> {
            fn clone(&self) -> Self {
                if self.countdown.get() == 0 {
                    panic!("copy budget exhausted");
                }
                self.countdown.set(self.countdown.get() - 1);
                self.alive.set(self.alive.get() + 1);
                Self {
                    countdown: self.countdown,
                    alive: self.alive,
                }
            }
        }
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.alive.set(self.alive.get() - 1);
            }
        }

        let countdown = Cell::new(usize::MAX);
        let alive = Cell::new(0);
        let source: Vec<_> = (0..4)
            .map(|_| {
                alive.set(alive.get() + 1);
                Tracked {
                    countdown: &countdown,
                    alive: &alive,
                }
            })
            .collect();

        for budget in 0..source.len() {
            countdown.set(budget);
            let result = panic::catch_unwind(AssertUnwindSafe(|| List::from(source.as_slice())));
            assert!(result.is_err());
            // every clone made before the panic was released again
            assert_eq!(alive.get(), source.len());
        }

        countdown.set(source.len());
        let list = List::from(source.as_slice());
        assert_eq!(list.len(), source.len());
        assert_eq!(alive.get(), 2 * source.len());
    }

    #[test]
    fn test_iter_is_send_and_sync() {
        fn send_sync<S: Send + Sync>(_: S) {}
        let mut list = List::from([1, 2, 3]);
        send_sync(list.iter());
        send_sync(list.iter_mut());
        send_sync(list.into_iter());
    }
}
