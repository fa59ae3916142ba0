//! Credential entry

pub mod form;
