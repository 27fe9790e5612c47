// src/utils/format.rs
use std::io::{self, Write};

use crate::models::GeneratedBatch;

// Print passwords as "1: ...", "2: ..." lines
pub fn print_numbered<W: Write>(out: &mut W, passwords: &[String]) -> io::Result<()> {
    for (i, password) in passwords.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, password)?;
    }
    Ok(())
}

// Render a batch and its policy as pretty JSON
pub fn to_json(batch: &GeneratedBatch) -> serde_json::Result<String> {
    serde_json::to_string_pretty(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PasswordPolicy;

    #[test]
    fn numbering_starts_at_one() {
        let mut out = Vec::new();
        print_numbered(&mut out, &["abc".to_string(), "XYZ".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: abc\n2: XYZ\n");
    }

    #[test]
    fn json_carries_policy_and_passwords() {
        let batch = GeneratedBatch {
            policy: PasswordPolicy::with_length(3),
            passwords: vec!["a#1".to_string()],
        };
        let json = to_json(&batch).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["policy"]["length"], 3);
        assert_eq!(value["policy"]["include_symbols"], true);
        assert_eq!(value["passwords"][0], "a#1");

        let parsed: GeneratedBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, batch);
    }
}
