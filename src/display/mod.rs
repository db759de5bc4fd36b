//! Text formatting shared by the dashboard and the `ls` command.

pub mod data_formatting;

pub use data_formatting::*;
