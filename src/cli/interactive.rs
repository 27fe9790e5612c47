// src/cli/interactive.rs
use inquire::{Confirm, InquireError, Text};

use crate::models::PasswordPolicy;

// Ask for each policy field, starting from the flag values
pub fn prompt_policy(defaults: &PasswordPolicy) -> Result<PasswordPolicy, InquireError> {
    let default_length = defaults.length.to_string();
    let length: usize = Text::new("Password length:")
        .with_default(&default_length)
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| InquireError::Custom("Invalid number".into())))?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(defaults.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(defaults.include_lowercase)
        .prompt()?;

    let include_digits = Confirm::new("Include digits?")
        .with_default(defaults.include_digits)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(defaults.include_symbols)
        .prompt()?;

    Ok(PasswordPolicy {
        length,
        include_uppercase,
        include_lowercase,
        include_digits,
        include_symbols,
    })
}
