use anyhow::Context;
use dashflag_core::{Flag, FlagKind, FlagRegistry, ParseOptions};

/// Command line flags for the dashflag demo
#[derive(Debug, Default)]
pub struct Cli {
    /// Print more
    pub verbose: Flag,

    /// Message to echo back
    pub message: Flag,

    /// Output the parsed flags as JSON
    pub json: Flag,

    /// Enable verbose debug output
    pub debug: Flag,

    /// Path to a TOML file with parse options
    pub config: Flag,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// The first pass uses default options. If `--config` names a file, the
    /// arguments are parsed again with the options it holds.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut cli = Self::default();
        cli.parse_with(args, &ParseOptions::default())?;

        if let Some(path) = cli.config.as_str().map(str::to_owned) {
            let options = ParseOptions::load(&path)
                .with_context(|| format!("Failed to load parse options from {}", path))?;
            cli.parse_with(args, &options)?;
        }

        Ok(cli)
    }

    fn parse_with(&mut self, args: &[String], options: &ParseOptions) -> dashflag_core::Result<()> {
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut self.verbose, Some("verbose"), Some('v'), FlagKind::Bool);
        registry.add_flag(&mut self.message, None, Some('m'), FlagKind::String);
        registry.add_flag(&mut self.json, Some("json"), None, FlagKind::Bool);
        registry.add_flag(&mut self.debug, Some("debug"), None, FlagKind::Bool);
        registry.add_flag(&mut self.config, Some("config"), None, FlagKind::String);
        registry.parse_with(args, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_usage_example() {
        let cli = Cli::parse(&args(&["dashflag", "--verbose", "-m", "Hello, World!"])).unwrap();
        assert!(cli.verbose.as_bool());
        assert_eq!(cli.message.as_str(), Some("Hello, World!"));
        assert!(!cli.json.as_bool());
    }

    #[test]
    fn test_missing_message_fails() {
        let err = Cli::parse(&args(&["dashflag", "-m"])).unwrap_err();
        assert!(err.to_string().contains("-m"));
    }

    #[test]
    fn test_config_enables_strict_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unknown_flags = \"reject\"").unwrap();
        let path = file.path().to_str().unwrap();

        let ok = Cli::parse(&args(&["dashflag", "--config", path, "-v"])).unwrap();
        assert!(ok.verbose.as_bool());
        assert_eq!(ok.config.as_str(), Some(path));

        assert!(Cli::parse(&args(&["dashflag", "--config", path, "--nope"])).is_err());
    }

    #[test]
    fn test_unknown_flag_ignored_without_config() {
        let cli = Cli::parse(&args(&["dashflag", "--nope", "-v"])).unwrap();
        assert!(cli.verbose.as_bool());
    }

    #[test]
    fn test_bad_config_path() {
        let err = Cli::parse(&args(&["dashflag", "--config", "/nonexistent/dashflag.toml"])).unwrap_err();
        assert!(err.to_string().contains("Failed to load parse options"));
    }
}
