//! Request handlers, grouped by resource.

pub mod conversation;
pub mod page;
pub mod portfolio;
