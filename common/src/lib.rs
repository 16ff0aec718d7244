//! Pieces shared by the exercise models and the command-line front end.

pub mod config;
pub mod utils;
