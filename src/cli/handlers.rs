// src/cli/handlers.rs
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use console::style;

use super::{interactive, Args};
use crate::core::Config;
use crate::generators::{self, GeneratorError};
use crate::models::{GeneratedBatch, PasswordPolicy};
use crate::utils;

/// Run the command line front end, writing everything to stdout.
pub fn run(args: &Args, config: &Config) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, config, &mut out)
}

pub fn run_with_output<W: Write>(args: &Args, config: &Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mut policy = args.policy(config);
    if args.interactive {
        policy = interactive::prompt_policy(&policy)?;
    }
    log::debug!("Using policy {:?}", policy);

    handle_generate(&policy, args.number, args.output.as_deref(), args.json, out)
}

/// Generate `count` passwords and print or save them.
///
/// An invalid policy is reported on `out` and is not an error of the command.
pub fn handle_generate<W: Write>(
    policy: &PasswordPolicy,
    count: usize,
    output: Option<&Path>,
    json: bool,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let passwords = match generators::generate_many(count, policy) {
        Ok(passwords) => passwords,
        Err(e @ GeneratorError::InvalidPolicy(_)) => {
            log::debug!("Rejected policy {:?}: {}", policy, e);
            writeln!(out, "{} {}", style("Error:").red().bold(), e)?;
            return Ok(());
        }
    };

    if let Some(path) = output {
        let written = utils::write_passwords(path, &passwords)?;
        writeln!(
            out,
            "{}",
            style(format!("Wrote {} password(s) to {}", written, path.display())).green()
        )?;
    } else if json {
        let batch = GeneratedBatch {
            policy: policy.clone(),
            passwords,
        };
        writeln!(out, "{}", utils::to_json(&batch)?)?;
    } else {
        utils::print_numbered(out, &passwords)?;
    }

    Ok(())
}
