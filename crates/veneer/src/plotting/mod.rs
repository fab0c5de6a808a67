//! Plot wrappers.

pub mod hist;
