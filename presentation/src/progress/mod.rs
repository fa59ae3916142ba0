//! Progress reporting while providers are answering

pub mod reporter;
