//! Application-facing configuration

pub mod config;
pub mod input;
