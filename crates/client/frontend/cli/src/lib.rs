//! Terminal front end for the investigation game.
//!
//! [`ConsoleInterface`] is the line-based input collaborator the turn loop
//! talks to; [`CliApp`] wires it to session construction and the save store.
mod app;
mod console;
pub mod logging;
mod theme;

pub use app::CliApp;
pub use console::ConsoleInterface;
