//! Pull-based cursors and their combinators
//!
//! Every type in this module implements [`Seq`]. Sources and combinators are
//! concrete types; they are shared and type-erased through [`SeqRef`], which
//! is what lets one parent cursor feed several derived cursors.

pub mod core;
pub mod constructors;
pub mod transform;
pub mod flatten;
pub mod group;
pub mod iter;

// Re-export core types
pub use self::core::{KeyedSeq, Seq, SeqExt, SeqRef};

// Re-export constructors
pub use constructors::{
    empty, from_fn, from_iter, from_vec, once,
    Empty, FromFn, IterSeq, Once, VecSeq,
};

// Re-export combinators
pub use transform::{Filter, Map};
pub use flatten::Flatten;
pub use group::{Group, GroupRef, Grouper};
pub use iter::SeqIter;
