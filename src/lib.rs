pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use core::factorial::{factorial, factorial_recursive, FactorialStrategy};
pub use core::tour::TourEngine;
pub use utils::error::{Result, TourError};
