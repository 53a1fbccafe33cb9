//! # Prompt Templates
//!
//! This module holds the prompt builders used by the assistant. They are pure
//! functions of their inputs: no I/O, no shared state.

pub mod faq;

pub use faq::{
    build_faq_digest, build_faq_digest_with_options, build_system_prompt,
    build_system_prompt_with_options,
};
