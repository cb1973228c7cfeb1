//! Core abstractions for class diagram processing
//!
//! This module defines the storage and generation traits shared by the
//! class diagram model, along with common types and errors.

mod database;
mod error;
mod generator;
pub mod logging;
mod types;

pub use database::*;
pub use error::*;
pub use generator::*;
pub use logging::*;
pub use types::*;
