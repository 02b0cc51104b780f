//! Resource model types for the transformer provider
//!
//! Leaf module: everything else in the crate depends on these types, they
//! depend on nothing.

pub mod tag;
pub mod transformer;

pub use tag::Tag;
pub use transformer::{EdiType, TransformerModel, X12Details};
