//! rs2-seq: lazily evaluated, pull-based sequences with LINQ-style combinators.
//!
//! ```
//! use rs2_seq::prelude::*;
//!
//! let evens = from_vec(vec![1, 2, 3, 4, 5, 6])
//!     .into_pipeline()
//!     .filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6]);
//! assert_eq!(evens.count(), 3);
//! ```

pub mod error;
pub mod seq;
pub mod pipeline;

pub mod seq_configuration;
pub mod seq_metrics;

pub use error::{SeqError, SeqResult};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use seq::{KeyedSeq, Seq, SeqExt, SeqIter, SeqRef};

pub mod prelude {
    pub use crate::error::{SeqError, SeqResult};
    pub use crate::pipeline::{Pipeline, PipelineBuilder};
    pub use crate::seq::{
        empty, from_fn, from_iter, from_vec, once, GroupRef, KeyedSeq, Seq, SeqExt, SeqIter,
        SeqRef,
    };
    pub use crate::seq_configuration::PipelineConfig;
}
