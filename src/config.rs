//! Table format options shared by the CLI and the table I/O helpers.

use clap::Args;

/// How tables are laid out on disk.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Field delimiter: a single ASCII character, or "tab"
    #[arg(
        long,
        env = "RECORDS_DELIMITER",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Trim leading and trailing whitespace from every field when reading
    #[arg(long, env = "RECORDS_TRIM")]
    pub trim: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl TableOptions {
    /// Options with a custom delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Options that trim fields on read.
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }
}

/// Parse a delimiter argument like ",", ";", "\t" or "tab" into a byte.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(_), None) => Err(format!("Delimiter must be an ASCII character, got '{s}'")),
        _ => Err(format!(
            "Delimiter must be a single character or \"tab\", got '{s}'"
        )),
    }
}
