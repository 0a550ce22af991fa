//! Design tree normalization.
//!
//! - [`flatten`] - nested Figma nodes to a flat, pre-order element list
//! - [`extract_style`] - per-node font/fill/opacity record
//! - [`build_structure`] - elements + page size + identity, ready to store

pub mod element;
pub mod flatten;
pub mod structure;
pub mod style;

#[cfg(test)]
mod tests;

pub use element::{Element, ElementKind, ElementStyle};
pub use flatten::flatten;
pub use structure::{
    build_structure, build_structure_with_page, DesignStructure, PageSize, DEFAULT_PAGE_HEIGHT,
    DEFAULT_PAGE_WIDTH,
};
pub use style::extract_style;
