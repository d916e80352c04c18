use clap::Parser;

use crate::generator::DEFAULT_LENGTH;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(version)]
pub struct Cli {
    /// Length of each generated string
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Number of strings to print, one per line
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Replace the default A-Za-z alphabet with these symbols
    #[arg(long, value_name = "SYMBOLS")]
    pub alphabet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let cli = Cli::parse_from(["randstr"]);
        assert_eq!(cli.length, 40);
        assert_eq!(cli.count, 1);
        assert!(cli.alphabet.is_none());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let cli = Cli::parse_from(["randstr", "--length", "8", "-n", "3", "--alphabet", "abc"]);
        assert_eq!(cli.length, 8);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.alphabet.as_deref(), Some("abc"));
    }
}
