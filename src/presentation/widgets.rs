//! Reusable widgets
//!
//! Widgets render borrowed data and hold no state between frames.

pub mod fields;
pub mod image_list;
pub mod note_list;
pub mod overlay;
pub mod status_bar;
pub mod tab_bar;
