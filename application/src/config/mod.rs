//! Application-level configuration.
//!
//! Configuration objects built once at startup and passed explicitly into
//! use cases.

mod credentials;

pub use credentials::Credentials;
