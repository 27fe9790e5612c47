//! Policy-driven password generation on top of the operating system's secure
//! random source, with a command line and (feature `gui`) a desktop front end.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

#[cfg(feature = "gui")]
pub mod gui;

pub use crate::generators::{generate_many, generate_password, GeneratorError, PasswordGenerator};
pub use crate::models::{CharacterClass, PasswordPolicy};
