//! Wiring between the terminal host and the Elm core

pub mod app_runner;
