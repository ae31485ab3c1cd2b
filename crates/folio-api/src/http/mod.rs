//! HTTP layer for Folio.
//!
//! Serves the page shell at `/`, static assets under `/assets`, and a JSON
//! API at `/api/v1/` using the envelope response format.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
