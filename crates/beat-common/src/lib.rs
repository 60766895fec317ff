#![doc = "Common types shared across the Internet Time workspace."]

pub mod config;
pub mod error;
pub mod precision;
pub mod time;

pub use config::*;
pub use error::*;
pub use precision::*;
pub use time::*;
