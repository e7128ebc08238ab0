//! Core Elm Architecture implementation
//!
//! - Messages and raw messages
//! - Application state
//! - Update logic and command execution
//! - Translation from terminal input to messages

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
