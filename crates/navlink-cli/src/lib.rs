//! Caller layer around `navlink_core`: env config, CLI input parsing,
//! Alfred feedback and service JSON envelopes.

pub mod config;
pub mod error;
pub mod feedback;
pub mod input;
pub mod service;
