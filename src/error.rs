//! Error types for cursor operations.

use std::fmt;

/// A cursor operation that cannot be carried out from the cursor's position.
///
/// # Examples
///
/// ```
/// use forward_list::{CursorError, List};
///
/// let list = List::from([1]);
/// let mut cursor = list.begin();
/// assert_eq!(cursor.move_next(), Ok(()));
/// assert!(cursor.is_end());
/// assert_eq!(cursor.move_next(), Err(CursorError::PastEnd));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The cursor is at the end marker, which has no element and no successor.
    PastEnd,
    /// The cursor's position is the last one in the list.
    NoSuccessor,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::PastEnd => f.write_str("cursor is past the end of the list"),
            CursorError::NoSuccessor => f.write_str("cursor position has no successor"),
        }
    }
}

impl std::error::Error for CursorError {}

/// Report a broken precondition of `op`.
///
/// Debug builds stop at the violating call. Release builds log the violation
/// and let the caller leave the list untouched.
#[track_caller]
pub(crate) fn contract_violation(op: &'static str, err: CursorError) {
    if cfg!(debug_assertions) {
        panic!("`{}` called with a broken precondition: {}", op, err);
    }
    log::error!("`{}` called with a broken precondition: {}", op, err);
}
