use clap::Parser;
use std::path::PathBuf;

/// Replace a value in one column of a CSV file, atomically.
#[derive(Parser, Debug)]
#[command(name = "csv-replace", version, about)]
pub struct ReplaceArgs {
    /// Path of the CSV file to update in place
    pub file: PathBuf,

    /// Name of the column to search (exact, case-sensitive)
    pub column: String,

    /// Value a field must equal, in full, to be replaced
    pub old_value: String,

    /// Replacement value
    pub new_value: String,

    /// Field delimiter (single ASCII character; use '\t' for tabs)
    #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Report what would change without writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    if value == "\\t" {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        &[byte] if byte.is_ascii() => Ok(byte),
        _ => Err(format!("must be a single ASCII character, not '{value}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiter_is_comma() {
        let args = ReplaceArgs::parse_from(["csv-replace", "f.csv", "bar", "apple", "lime"]);
        assert_eq!(args.delimiter, b',');
        assert!(!args.dry_run);
        assert!(!args.quiet);
    }

    #[test]
    fn test_delimiter_accepts_single_character() {
        let args = ReplaceArgs::parse_from([
            "csv-replace",
            "f.csv",
            "bar",
            "apple",
            "lime",
            "--delimiter",
            ";",
        ]);
        assert_eq!(args.delimiter, b';');
    }

    #[test]
    fn test_delimiter_accepts_tab_escape() {
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
    }

    #[test]
    fn test_delimiter_rejects_multiple_characters() {
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("é").is_err());
    }
}
