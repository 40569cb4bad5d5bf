use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SOURCE: &str = "ca_chain.crt";
pub const DEFAULT_DEST: &str = "ca_chain_oneline.txt";

/// Source and destination of a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE.into(),
            dest_path: DEFAULT_DEST.into(),
        }
    }
}

/// Flatten a PEM certificate chain into one line with escaped newlines.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// PEM chain to read (relative paths resolve against the working directory)
    #[arg(long, env = "CERTLINE_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// File to write the one-line chain to (created or overwritten)
    #[arg(long, env = "CERTLINE_DEST", default_value = DEFAULT_DEST)]
    pub dest: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> ConvertConfig {
        ConvertConfig {
            source_path: self.source,
            dest_path: self.dest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_historical_paths() {
        let cli = Cli::try_parse_from(["certline"]).unwrap();
        assert_eq!(cli.into_config(), ConvertConfig::default());
    }

    #[test]
    fn overrides_both_paths() {
        let cli = Cli::try_parse_from([
            "certline",
            "--source",
            "chain.pem",
            "--dest",
            "out/chain.txt",
        ])
        .unwrap();
        let config = cli.into_config();

        assert_eq!(config.source_path, PathBuf::from("chain.pem"));
        assert_eq!(config.dest_path, PathBuf::from("out/chain.txt"));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["certline", "chain.pem"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
