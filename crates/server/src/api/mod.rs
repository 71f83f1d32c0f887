#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod employee;
pub use employee::*;

mod settings;
pub use settings::*;
