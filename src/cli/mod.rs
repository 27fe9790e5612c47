// src/cli/mod.rs
use std::ffi::OsString;
use std::path::PathBuf;
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::core::Config;
use crate::models::PasswordPolicy;

pub mod handlers;
pub mod interactive;

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about = "Secure Password Generator", long_about = None)]
pub struct Args {
    /// Length of each password (default: 12)
    #[arg(short, long, env = "PASSGEN_LENGTH")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short = 'n', long, env = "PASSGEN_COUNT", default_value_t = 1)]
    pub number: usize,

    /// Disable uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Disable lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Disable digits
    #[arg(long)]
    pub no_digits: bool,

    /// Disable symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Write passwords to a file (one per line)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the passwords as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Prompt for the policy instead of reading it from flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Policy described by the flags, with `config` filling in the length default.
    pub fn policy(&self, config: &Config) -> PasswordPolicy {
        PasswordPolicy {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: !self.no_upper,
            include_lowercase: !self.no_lower,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
        }
    }

    /// Parse `argv` without consulting the `PASSGEN_*` environment defaults.
    pub fn try_parse_without_env<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .mut_arg("length", |arg| arg.env(None::<&'static str>))
            .mut_arg("number", |arg| arg.env(None::<&'static str>))
            .try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }
}
