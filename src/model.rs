//! Component models
//!
//! Each model owns its state privately and changes only through
//! `update(Message)`.

pub mod editor;
pub mod lightbox;
pub mod notes;
pub mod panels;
pub mod selection;
pub mod status_bar;
pub mod tabs;
