//! UI layer for the screening app: form, result panel, and event pump.

pub mod app;

pub use app::ScreeningApp;
