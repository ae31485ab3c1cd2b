//! Business logic and provider trait definitions for Folio.
//!
//! This crate defines the "ports" (the `LlmProvider` trait) that the
//! infrastructure layer implements, plus the logic that is independent of
//! any transport: the grounding context, the system instruction and the
//! chat exchange. It depends only on `folio-types` -- never on
//! `folio-infra` or any HTTP crate.

pub mod chat;
pub mod context;
pub mod llm;
