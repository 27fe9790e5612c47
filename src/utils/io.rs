// src/utils/io.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write one password per line to `path`, replacing any existing file.
///
/// Returns the number of passwords written.
pub fn write_passwords(path: &Path, passwords: &[String]) -> io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    for password in passwords {
        writeln!(writer, "{}", password)?;
    }
    writer.flush()?;

    log::info!("Wrote {} password(s) to {}", passwords.len(), path.display());
    Ok(passwords.len())
}
