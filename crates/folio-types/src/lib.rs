//! Shared domain types for Folio.
//!
//! This crate contains the types used across the Folio workspace: the
//! portfolio content model, chat conversation types, provider-agnostic LLM
//! request/response shapes, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod llm;
