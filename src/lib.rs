//! This crate provides a singly-linked list with owned nodes, anchored by a
//! ghost link that stands before the first element.
//!
//! The [`List`] allows inserting and removing elements right after any given
//! position in constant time. In compromise, reaching a position takes *O*(*n*)
//! time, and the list can only be walked front to back.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.before_begin_mut();
//!
//! cursor.insert_after(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 3, 4]));
//!
//! assert!(cursor.seek_forward(3).is_ok()); // move the cursor to 2, and erase 3 after it
//! assert_eq!(cursor.current(), Some(&2));
//! cursor.erase_after();
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   (Ghost) Link
//!  ┌───────────┐         ╔═══════════╗         ╔═══════════╗
//!  │   next    │ ──────→ ║   next    ║ ──────→ ║   next    ║ ──────→ ┄┄ ──→ None
//!  └───────────┘         ╟───────────╢         ╟───────────╢
//!        ↑               ║ payload T ║         ║ payload T ║   Node 2, 3, ...
//!        │               ╚═══════════╝         ╚═══════════╝
//!        │                   Node 0                Node 1
//! ╔═══════════╗
//! ║   ghost   ║
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a box `ghost` holding the ghost link, whose `next` owns the first node;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the link `next` that owns the next node (or `None` if it is the last
//!   element in the list);
//! - the actual payload `T`.
//!
//! Note that the ghost link has *NO* payload.
//!
//! Every node is owned by exactly one link, so the chain is a strict line of
//! ownership from the ghost link to the last node. Dropping the list releases
//! the nodes front to back in a loop.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! forward iterators that know their exact length. [`IterMut`] provides
//! mutability of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! In a list with length *n*, there are *n* + 2 valid locations for the cursor:
//! the ghost link ([`List::before_begin`]), the *n* nodes (starting from
//! [`List::begin`]), and the end marker ([`List::end`]). Cursors only move forward.
//! The end marker has no element and no successor.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let list = List::from([1, 2, 3]);
//!
//! let mut cursor = list.before_begin();
//! assert_eq!(cursor.current(), None);
//! assert!(cursor.move_next().is_ok());
//! assert_eq!(cursor, list.begin());
//!
//! assert_eq!(cursor.seek_forward(5), Err(3)); // stops at the end marker
//! assert_eq!(cursor, list.end());
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] mutates the list right after its position.
//! - [`insert_after`]: insert a new item after the cursor;
//! - [`erase_after`]: destroy the item after the cursor;
//! - [`remove_after`]: take the item after the cursor out of the list.
//!
//! Breaking a precondition (inserting after the end marker, or erasing where
//! there is no successor) panics in debug builds. In release builds the call is
//! logged through the [`log`] facade and leaves the list unchanged.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.begin_mut();
//!
//! let inserted = cursor.insert_after(5); // becomes [1, 5, 2, 3, 4]
//! assert_eq!(inserted.current(), Some(&5));
//! assert_eq!(cursor.current(), Some(&1)); // the cursor stays put
//!
//! let successor = cursor.erase_after(); // becomes [1, 2, 3, 4]
//! assert_eq!(successor.current(), Some(&2));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove_after(), Ok(4)); // becomes [1, 2, 3]
//!
//! assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`erase_after`]: crate::list::cursor::CursorMut::erase_after
//! [`remove_after`]: crate::list::cursor::CursorMut::remove_after

#[doc(inline)]
pub use error::CursorError;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
