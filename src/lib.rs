//! # claimdesk
//!
//! A terminal console for reviewing a single retail claim: content tabs,
//! a notes pane, detail panels and an image lightbox.
//!
//! The crate follows an Elm-like architecture:
//!
//! - **Model** (`core::state`, `model`): application state, changed only
//!   through `update(Message)`
//! - **Message** (`core::msg`): what the reviewer asked for
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): side effects such as clipboard writes
//! - **View** (`presentation`): rendering from the current state
//!
//! ```rust
//! use claimdesk::core::{
//!     msg::{notes::NotesMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 3, 4)
//!     .and_then(|date| date.and_hms_opt(10, 0, 0))
//!     .unwrap();
//! let (state, _cmds) = update(
//!     Msg::Notes(NotesMsg::Add { content: "Follow up needed".into(), at }),
//!     AppState::default(),
//! );
//! assert_eq!(state.notes.len(), 2);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;
