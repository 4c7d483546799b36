//! Products

pub mod api;
mod controller;
pub mod errors;
pub mod records;
pub mod render;

pub use controller::*;
pub use errors::SubmissionError;
