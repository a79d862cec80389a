//! Lexical Features Module
//!
//! Hand-crafted surface features over the raw URL string. The layout module
//! is the single source of truth for feature order and width.

pub mod layout;
pub mod lexical;


pub use layout::{layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use lexical::LexicalFeatures;
