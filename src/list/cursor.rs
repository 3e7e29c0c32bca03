use crate::error::{contract_violation, CursorError};
use crate::list::{Link, List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it stops at positions instead of
/// yielding elements, and it can also stand before the first element.
///
/// In a list with length *n*, there are *n* + 2 valid locations for the cursor:
/// the ghost link (before the first element), the *n* nodes, and the end marker
/// (after the last element). The cursor only moves forward.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost link of the
/// list is denoted by `#`, and the end marker by `$`).
/// ```
/// use forward_list::List;
///
/// // Create a list: [# A B C $]
/// let list = List::from(['A', 'B', 'C']);
///
/// // Create a cursor before the start: [|# A B C $]
/// let mut cursor = list.before_begin();
/// assert!(cursor.is_before_begin());
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.peek_next(), Some(&'A'));
///
/// // Move cursor forward: [# |A B C $]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor to the end: [# A B C |$]
/// assert!(cursor.seek_forward(3).is_ok());
/// assert!(cursor.is_end());
/// assert_eq!(cursor, list.end());
///
/// // There is nothing after the end marker
/// assert!(cursor.move_next().is_err());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Link<T>>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by their positions.
///
/// Cursors at the same node are equal, as are cursors at the end marker.
/// Cursors track nodes, not lists: the end markers of two different lists
/// are equal too.
///
/// # Examples
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.begin();
/// let mut cursor2 = cursor1;
/// // The same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // Different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// // Different nodes.
/// assert_ne!(list.begin(), another_list.begin());
/// // Both are end markers.
/// assert_eq!(list.end(), another_list.end());
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like a [`Cursor`], except that it can safely mutate the list
/// during traversal. This is because the lifetime of its yielded references is
/// tied to its own lifetime, instead of just the underlying list. This means
/// cursors cannot yield multiple elements at once.
///
/// Insertion and removal happen *after* the cursor's position, so a cursor at the
/// ghost link ([`List::before_begin_mut`]) edits the front of the list.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor. See the documents for details.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.begin_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: Option<NonNull<Link<T>>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_link(&self) -> bool {
                self.current == Some(self.list.ghost_link())
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the cursor is at the end marker.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list: List<i32> = List::new();
            /// assert!(list.begin().is_end());
            /// assert!(!list.before_begin().is_end());
            /// ```
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Returns `true` if the cursor is at the ghost link, before the
            /// first element.
            pub fn is_before_begin(&self) -> bool {
                self.is_ghost_link()
            }

            /// Move the cursor to the next position, or return an error
            /// if the cursor is at the end marker.
            ///
            /// Moving from the last element reaches the end marker.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::{CursorError, List};
            ///
            /// let list = List::from([1]);
            /// let mut cursor = list.before_begin();
            ///
            /// assert_eq!(cursor.move_next(), Ok(()));
            /// assert_eq!(cursor.current(), Some(&1));
            /// assert_eq!(cursor.move_next(), Ok(()));
            /// assert!(cursor.is_end());
            ///
            /// // Forbid to move past the end marker
            /// assert_eq!(cursor.move_next(), Err(CursorError::PastEnd));
            /// assert!(cursor.is_end());
            /// ```
            pub fn move_next(&mut self) -> Result<(), CursorError> {
                if self.is_end() {
                    return Err(CursorError::PastEnd);
                }
                self.current = self.next_link();
                Ok(())
            }

            /// Move forward the cursor by given steps, or return the steps
            /// actually taken when the end marker stops it.
            ///
            /// If an error occurs, the cursor will stay at the end marker.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.begin();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Only one step remains before the end marker
            /// assert_eq!(cursor.seek_forward(5), Err(1));
            /// assert!(cursor.is_end());
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("before_begin", &self.is_before_begin())
                    .field("current", &self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<NonNull<Link<T>>>) -> Self {
        Self { current, list }
    }

    fn next_link(&self) -> Option<NonNull<Link<T>>> {
        let link = self.current?;
        // SAFETY: the cursor borrows the list, so every link it reaches is alive.
        unsafe { link.as_ref() }.next.as_deref().map(Node::link)
    }

    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost link or the end marker.
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost_link() {
            return None;
        }
        // SAFETY: it is safe because a non-ghost link is the first field of
        // a live node.
        self.current.map(|link| unsafe { Node::element(link) })
    }

    /// Provides a reference to the element after the cursor, or `None` if
    /// there is none.
    pub fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: the successor of a link is never the ghost link.
        self.next_link().map(|link| unsafe { Node::element(link) })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Option<NonNull<Link<T>>>) -> Self {
        Self { current, list }
    }

    fn next_link(&mut self) -> Option<NonNull<Link<T>>> {
        let mut link = self.current?;
        // SAFETY: `link` was derived from the list that the cursor mutably
        // borrows, and no other reference into the list is alive.
        unsafe { link.as_mut() }.next.as_deref_mut().map(Node::link_mut)
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost link or the end marker.
    pub fn current(&self) -> Option<&T> {
        if self.is_ghost_link() {
            return None;
        }
        // SAFETY: it is safe because a non-ghost link is the first field of
        // a live node.
        self.current.map(|link| unsafe { Node::element(link) })
    }

    /// Provides a mutable reference to the element at the cursor, or `None` if
    /// the cursor is at the ghost link or the end marker.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost_link() {
            return None;
        }
        // SAFETY: it is safe because a non-ghost link is the first field of
        // a live node, and the cursor borrows the list mutably.
        self.current.map(|link| unsafe { Node::element_mut(link) })
    }

    /// Provides a reference to the element after the cursor, or `None` if
    /// there is none.
    pub fn peek_next(&self) -> Option<&T> {
        let link = self.current?;
        // SAFETY: the cursor borrows the list, so every link it reaches is alive.
        let node = unsafe { link.as_ref() }.next.as_deref()?;
        Some(&node.element)
    }

    /// Provides a mutable reference to the element after the cursor, or `None`
    /// if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.before_begin_mut();
    /// if let Some(x) = cursor.peek_next_mut() {
    ///     *x = 10;
    /// }
    /// assert_eq!(list, List::from([10, 2]));
    /// ```
    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the successor of a link is never the ghost link.
        self.next_link().map(|link| unsafe { Node::element_mut(link) })
    }

    /// Provides a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Converts into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily borrows the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.before_begin_mut();
    /// cursor.erase_after();
    /// assert_eq!(cursor.view(), &List::from([2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Inserts `item` right after the cursor, and returns a cursor at the new
    /// element. The cursor itself stays put.
    ///
    /// The cursor must not be at the end marker. Violating it panics in debug
    /// builds, and in release builds it is logged, the list is left unchanged
    /// and the end cursor is returned.
    ///
    /// `item` is moved into the list, so a failure while producing it (e.g. a
    /// panicking `clone`) leaves the list exactly as it was.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut cursor = list.begin_mut();
    ///
    /// let inserted = cursor.insert_after(2);
    /// assert_eq!(inserted.current(), Some(&2));
    ///
    /// // The cursor is still at the first element
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(cursor.view(), &List::from([1, 2, 3]));
    /// ```
    pub fn insert_after(&mut self, item: T) -> CursorMut<'_, T> {
        let inserted = match self.current {
            // SAFETY: `link` is a position of the list this cursor borrows.
            Some(link) => Some(unsafe { self.list.attach_after(link, item) }),
            None => {
                contract_violation("insert_after", CursorError::PastEnd);
                None
            }
        };
        CursorMut::new(self.list, inserted)
    }

    /// Removes the element right after the cursor and returns it.
    ///
    /// Returns [`CursorError::PastEnd`] if the cursor is at the end marker, and
    /// [`CursorError::NoSuccessor`] if the cursor is at the last position.
    /// The list is unchanged on error.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{CursorError, List};
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.begin_mut();
    ///
    /// assert_eq!(cursor.remove_after(), Ok(2));
    /// assert_eq!(cursor.remove_after(), Err(CursorError::NoSuccessor));
    /// assert_eq!(list, List::from([1]));
    /// ```
    pub fn remove_after(&mut self) -> Result<T, CursorError> {
        let link = self.current.ok_or(CursorError::PastEnd)?;
        // SAFETY: `link` is a position of the list this cursor borrows.
        let node = unsafe { self.list.detach_after(link) }.ok_or(CursorError::NoSuccessor)?;
        let Node { element, .. } = *node;
        Ok(element)
    }

    /// Destroys the element right after the cursor, and returns a cursor at the
    /// new successor of the cursor's position (or the end marker if none
    /// remains). The cursor itself stays put.
    ///
    /// The cursor must have a successor. Violating it panics in debug builds,
    /// and in release builds it is logged and the list is left unchanged.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// let mut cursor = list.begin_mut();
    ///
    /// let next = cursor.erase_after();
    /// assert_eq!(next.current(), Some(&3));
    /// assert_eq!(cursor.view(), &List::from([1, 3, 4]));
    /// ```
    pub fn erase_after(&mut self) -> CursorMut<'_, T> {
        if let Err(err) = self.remove_after() {
            contract_violation("erase_after", err);
        }
        let successor = self.next_link();
        CursorMut::new(self.list, successor)
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
