//! Output formatting for CLI

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use authorship_engine::AuthorshipStatus;

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a serializable value as JSON or YAML.
///
/// Returns `false` for [`OutputFormat::Table`] so the caller renders its own
/// view.
pub fn print_structured<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<bool> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
        OutputFormat::Table => return Ok(false),
    }
    Ok(true)
}

/// Print a section header
pub fn print_header(title: &str) {
    println!("{}", title.bold().cyan());
    println!("{}", "=".repeat(60));
}

/// Status label colored by how much it permits
pub fn status_label(status: AuthorshipStatus) -> String {
    let label = status.label();
    match status {
        AuthorshipStatus::VerifiedOriginal => label.green().bold().to_string(),
        AuthorshipStatus::DeclaredByUser => label.yellow().bold().to_string(),
        AuthorshipStatus::Unverified => label.dimmed().bold().to_string(),
        AuthorshipStatus::SyntheticAi => label.magenta().bold().to_string(),
    }
}

/// Check mark or cross
pub fn flag(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a blocked/failed message
pub fn print_blocked(message: &str) {
    println!("{} {}", "✗".red(), message.red());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn format_parses_from_config_spelling() {
        #[derive(Deserialize)]
        struct Wrapper {
            output: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str("output = \"yaml\"").unwrap();
        assert_eq!(parsed.output, OutputFormat::Yaml);
    }

    #[test]
    fn table_is_not_structured() {
        assert!(!print_structured(&1u8, OutputFormat::Table).unwrap());
    }
}
