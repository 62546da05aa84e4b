//! CLI layer: argument parsing and command implementations

mod app;
mod commands;

pub use app::run;
