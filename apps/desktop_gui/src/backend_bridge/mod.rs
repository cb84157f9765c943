//! Backend bridge: command queue into the async worker thread.

pub mod commands;
pub mod runtime;
