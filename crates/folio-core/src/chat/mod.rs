//! Chat widget logic: the exchange state machine and the live
//! conversation registry.

pub mod exchange;
pub mod registry;
