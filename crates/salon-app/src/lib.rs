//! Command-line front end for the salon calendar.

pub mod cli;
pub mod error;
pub mod render;
pub mod seed;
