//! Core data model for the segmentation engine

mod book;
mod chapter;
mod document;
mod nav;
mod result;
mod spine;

pub use book::Book;
pub use chapter::Chapter;
pub use document::DocumentRecord;
pub use nav::{flatten_nav, NavEntry};
pub use result::ExtractionResult;
pub use spine::SpineEntry;
