//! Interactive terminal chat.
//!
//! Same exchange semantics as the web widget: greeting first, blank lines
//! ignored, one request per accepted line. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod loop_runner;
