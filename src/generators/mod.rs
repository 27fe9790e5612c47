// src/generators/mod.rs
use thiserror::Error;

use crate::models::PasswordPolicy;

mod password;

pub use password::PasswordGenerator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate one password from the operating system's secure random source.
pub fn generate_password(policy: &PasswordPolicy) -> Result<String> {
    PasswordGenerator::new().generate_password(policy)
}

/// Generate `count` independent passwords from the operating system's secure random source.
pub fn generate_many(count: usize, policy: &PasswordPolicy) -> Result<Vec<String>> {
    PasswordGenerator::new().generate_many(count, policy)
}
