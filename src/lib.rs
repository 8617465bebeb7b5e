//! Turns syndicated feed entries into SEO-scored blog drafts.
//!
//! Three independent pieces, composed by [`pipeline`]:
//!
//! - [`feed`] - validate, fetch and normalize RSS/Atom; named feed registry
//! - [`content`] - the generative text/image service boundary
//! - [`seo`] - word count, keyword density and readability scoring

pub mod config;
pub mod content;
pub mod feed;
pub mod pipeline;
pub mod seo;
pub mod util;
