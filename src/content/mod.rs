//! Generative-service boundary.
//!
//! The rest of the crate only sees the [`ContentProducer`] trait:
//!
//! - [`ArticleDraft`] - the structured article a producer returns
//! - [`OpenAiProducer`] - chat-completion / image-generation implementation
//! - [`prompts`] - request text shared by implementations

mod draft;
mod openai;
mod producer;
pub mod prompts;

pub use draft::ArticleDraft;
pub use openai::{OpenAiProducer, OpenAiSettings, DEFAULT_BASE_URL};
pub use producer::{ContentProducer, ProducerError};
