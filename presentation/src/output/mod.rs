//! Output formatting for comparison rounds

pub mod console;
pub mod formatter;
