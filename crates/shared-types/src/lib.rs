pub mod common;
pub mod config;
pub mod employee;
pub mod error;
pub mod models;

pub use common::*;
pub use config::*;
pub use employee::*;
pub use error::*;
pub use models::*;
