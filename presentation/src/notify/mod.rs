//! User-facing notifications

pub mod console;
