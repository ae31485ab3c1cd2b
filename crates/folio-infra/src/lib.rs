//! Infrastructure layer for Folio.
//!
//! Contains implementations of the traits defined in `folio-core`: the
//! Gemini and OpenAI-compatible generation clients, environment credential
//! lookup, and the loaders for `folio.toml` and portfolio content.

pub mod config;
pub mod content;
pub mod llm;
pub mod secret;
