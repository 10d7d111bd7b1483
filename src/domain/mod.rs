//! Registrable domain extraction.
//!
//! Turns a page URL into the cache key used by the score store: the
//! registrable part of its host, with multi-label public suffixes such as
//! `co.uk` kept attached.

mod extractor;
mod suffixes;

pub use extractor::{DomainExtractor, SuffixSet};
pub use suffixes::SECOND_LEVEL_SUFFIXES;
