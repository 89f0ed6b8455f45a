//! Command socket.
//!
//! The daemon listens on a Unix socket for newline-delimited JSON commands;
//! compositor key binds reach it through the `--send` client.

pub mod client;
pub mod listener;
