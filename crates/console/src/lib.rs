//! `cineweb-console` library crate.
//!
//! Pages own their fetched lists and form controllers; [`app::App`]
//! routes parsed console commands to them. The binary entrypoint lives
//! in `main.rs`.

pub mod app;
pub mod command;
pub mod forms;
pub mod mocks;
pub mod notifier;
pub mod pages;
pub mod views;
