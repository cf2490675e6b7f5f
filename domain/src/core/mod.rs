//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the local model a session talks to

pub mod model;
