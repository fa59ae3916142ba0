//! Interactive chat module
//!
//! Provides a reedline-based REPL that keeps both conversations open.

mod repl;

pub use repl::ChatRepl;
