use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Lists are ordered lexicographically over their elements.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// assert!(List::from([1, 2, 3]) < List::from([1, 2, 4]));
/// assert!(List::from([1, 2]) < List::from([1, 2, 3]));
/// assert!(List::from([2]) > List::from([1, 9, 9]));
/// ```
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copy of a list.
///
/// `clone_from` builds a complete copy of the source first, then swaps it in,
/// so a panicking element `clone` leaves the receiving list untouched.
///
/// Assigning a list to itself is rejected by the borrow checker:
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// list.clone_from(&list);
/// ```
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut copy = other.clone();
        self.swap(&mut copy);
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// list.push_front(0);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::panic::{self, AssertUnwindSafe};

    #[derive(Debug, PartialEq)]
    struct ThrowOnCopy<'a> {
        value: i32,
        countdown: &'a Cell<usize>,
    }

    impl Clone for ThrowOnCopy<'_> {
        fn clone(&self) -> Self {
            if self.countdown.get() == 0 {
                panic!("copy budget exhausted");
            }
            self.countdown.set(self.countdown.get() - 1);
            Self {
                value: self.value,
                countdown: self.countdown,
            }
        }
    }

    fn throw_on_copy<const N: usize>(
        countdown: &Cell<usize>,
        values: [i32; N],
    ) -> List<ThrowOnCopy<'_>> {
        IntoIterator::into_iter(values)
            .map(|value| ThrowOnCopy { value, countdown })
            .collect()
    }

    fn hash_of<T: Hash>(list: &List<T>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq() {
        let list = List::from([1, 2, 3]);
        assert_eq!(list, list);
        assert_eq!(list, List::from([1, 2, 3]));
        assert_ne!(list, List::from([1, 2]));
        assert_ne!(list, List::from([1, 2, 4]));
        assert_eq!(List::<i32>::new(), List::new());
        assert_ne!(List::new(), list);
    }

    #[test]
    fn test_ord() {
        let less = List::from([1, 2, 3]);
        let greater = List::from([1, 2, 4]);
        assert!(less < greater);
        assert!(less <= greater);
        assert!(greater > less);
        assert!(greater >= less);
        assert!(less <= less.clone());
        assert!(less >= less.clone());

        let prefix = List::from([1, 2]);
        assert!(prefix < less);
        assert!(List::new() < prefix);
        assert_eq!(prefix.cmp(&prefix.clone()), std::cmp::Ordering::Equal);

        let floats = List::from([1.0, f64::NAN]);
        assert_eq!(floats.partial_cmp(&floats), None);
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash_of(&List::from([1, 2, 3])), hash_of(&List::from([1, 2, 3])));
        assert_ne!(hash_of(&List::from([1, 2, 3])), hash_of(&List::from([3, 2, 1])));
        assert_ne!(hash_of(&List::<i32>::new()), hash_of(&List::from([0])));
    }

    #[test]
    fn test_contains() {
        let list = List::from(["a", "b"]);
        assert!(list.contains(&"a"));
        assert!(!list.contains(&"c"));
        assert!(!List::new().contains(&"a"));
    }

    #[test]
    fn test_clone() {
        let list = List::from([String::from("a"), String::from("b")]);
        let mut copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.len(), list.len());

        // the copy owns its own nodes
        copy.front_mut().unwrap().push('!');
        assert_eq!(list.front().map(String::as_str), Some("a"));
        assert_eq!(copy.front().map(String::as_str), Some("a!"));
        assert_ne!(
            list.front().map(|x| x as *const String),
            copy.front().map(|x| x as *const String)
        );

        assert!(List::<String>::new().clone().is_empty());
    }

    #[test]
    fn test_clone_from() {
        let mut list = List::from([1, 2, 3]);
        list.clone_from(&List::from([4, 5]));
        assert_eq!(list, List::from([4, 5]));
        assert_eq!(list.len(), 2);

        list.clone_from(&List::new());
        assert!(list.is_empty());

        let source = List::from([6, 7, 8, 9]);
        list.clone_from(&source);
        assert_eq!(list, source);
    }

    #[test]
    fn test_clone_strong_guarantee() {
        let countdown = Cell::new(usize::MAX);
        let source = throw_on_copy(&countdown, [1, 2, 3, 4]);
        let mut target = throw_on_copy(&countdown, [9, 9]);

        for budget in 0..source.len() {
            countdown.set(budget);
            let result = panic::catch_unwind(AssertUnwindSafe(|| source.clone()));
            assert!(result.is_err());

            countdown.set(budget);
            let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
            assert!(result.is_err());
            assert_eq!(target.len(), 2);
            assert!(target.iter().all(|x| x.value == 9));
        }

        countdown.set(source.len());
        target.clone_from(&source);
        assert_eq!(target, source);
    }
}
