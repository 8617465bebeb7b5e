//! Utility functions for common operations.
//!
//! This module provides reusable utilities for:
//!
//! - **URL validation**: scheme + host checks for feed URLs
//! - **Text processing**: char-safe truncation and keyword list parsing
//!
//! # Examples
//!
//! ```
//! use seoforge::util::{is_valid_url, split_keywords, truncate_chars};
//!
//! assert!(is_valid_url("https://example.com/feed.xml"));
//!
//! let keywords = split_keywords("rust, seo");
//! assert_eq!(keywords.len(), 2);
//!
//! let summary = truncate_chars("A long article body", 6);
//! assert_eq!(summary, "A long");
//! ```

mod text;
mod url_validator;

pub use text::{split_keywords, truncate_chars};
pub use url_validator::{is_valid_url, validate_url, UrlValidationError};
