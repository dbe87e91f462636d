//! Parser for command line flags.
//!
//! A single left-to-right pass over the arguments. Position 0 (the program
//! name) is always skipped. Each dash-prefixed token is looked up in the
//! registry and the matching flag is updated in place:
//! - Boolean flags: `--flag` or `-f` sets the value to `true`
//! - String flags: `--name value` or `-n value` stores the next argument verbatim
//! - Short tokens only look at the first character, so `-verbose` is `-v`
//! - Anything not starting with `-` is skipped

use tracing::{debug, trace, warn};

use crate::error::{FlagError, Result};
use crate::flag::FlagKind;
use crate::options::{ParseOptions, UnknownFlagPolicy};
use crate::registry::FlagRegistry;
use crate::token::Token;

impl FlagRegistry<'_> {
    /// Parse `args` with default options.
    ///
    /// Unknown flags are ignored, so this only fails when a string flag is
    /// the last argument; see [`parse_with`](Self::parse_with).
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.parse_with(args, &ParseOptions::default())
    }

    /// Parse `args`, updating matched flags in place.
    ///
    /// # Errors
    /// * [`FlagError::MissingValue`] if a string flag has no following
    ///   argument. The flag keeps its previous value and scanning stops.
    /// * [`FlagError::UnknownFlag`] for an unmatched flag token when
    ///   `options.unknown_flags` is [`UnknownFlagPolicy::Reject`].
    pub fn parse_with<S: AsRef<str>>(&mut self, args: &[S], options: &ParseOptions) -> Result<()> {
        let mut i = 1;

        while i < args.len() {
            let arg = args[i].as_ref();

            let token = Token::classify(arg);
            if !token.is_flag() {
                trace!(index = i, "skipping non-flag argument");
                i += 1;
                continue;
            }

            let flag = match token {
                Token::Long(name) => self.find_long(name),
                Token::Short(c) => self.find_short(c),
                Token::LoneDash | Token::Plain => None,
            };

            match flag {
                Some(flag) => match flag.kind() {
                    FlagKind::Bool => {
                        flag.set_bool();
                        debug!(flag = arg, "set boolean flag");
                    }
                    FlagKind::String => {
                        let Some(value) = args.get(i + 1) else {
                            warn!(flag = arg, "string flag is missing its value");
                            return Err(FlagError::MissingValue(arg.to_string()));
                        };
                        flag.set_string(value.as_ref());
                        debug!(flag = arg, "set string flag");
                        // the value is consumed with the flag
                        i += 1;
                    }
                },
                None => match options.unknown_flags {
                    UnknownFlagPolicy::Ignore => debug!(flag = arg, "ignoring unknown flag"),
                    UnknownFlagPolicy::Reject => return Err(FlagError::UnknownFlag(arg.to_string())),
                },
            }

            i += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::{Flag, FlagValue};

    #[test]
    fn test_empty_args() {
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut verbose, Some("verbose"), None, FlagKind::Bool);

        let args: [&str; 0] = [];
        registry.parse(&args).unwrap();
        assert!(!verbose.as_bool());
    }

    #[test]
    fn test_program_name_is_skipped() {
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut verbose, Some("verbose"), None, FlagKind::Bool);

        registry.parse(&["--verbose"]).unwrap();
        assert!(!verbose.as_bool());
    }

    #[test]
    fn test_string_value_consumed() {
        let mut message = Flag::default();
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut message, None, Some('m'), FlagKind::String);
        registry.add_flag(&mut verbose, Some("verbose"), None, FlagKind::Bool);

        // the value looks like a flag but is taken verbatim
        registry.parse(&["prog", "-m", "--verbose"]).unwrap();
        assert_eq!(message.as_str(), Some("--verbose"));
        assert!(!verbose.as_bool());
    }

    #[test]
    fn test_missing_value_keeps_previous() {
        let mut message = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut message, Some("message"), None, FlagKind::String);

        registry.parse(&["prog", "--message", "first"]).unwrap();
        let err = registry.parse(&["prog", "--message"]).unwrap_err();
        assert_eq!(err, FlagError::MissingValue("--message".to_string()));
        drop(registry);
        assert_eq!(message.value(), &FlagValue::String(Some("first".to_string())));
    }

    #[test]
    fn test_missing_value_stops_scan() {
        let mut message = Flag::default();
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut verbose, Some("verbose"), None, FlagKind::Bool);
        registry.add_flag(&mut message, None, Some('m'), FlagKind::String);

        assert!(registry.parse(&["prog", "--verbose", "-m"]).is_err());
        assert!(verbose.as_bool());
        assert_eq!(message.as_str(), None);
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut verbose, Some("verbose"), None, FlagKind::Bool);

        let err = registry
            .parse_with(&["prog", "--nope", "--verbose"], &ParseOptions::strict())
            .unwrap_err();
        assert_eq!(err, FlagError::UnknownFlag("--nope".to_string()));
        assert!(!verbose.as_bool());
    }

    #[test]
    fn test_strict_still_skips_plain() {
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut verbose, Some("verbose"), None, FlagKind::Bool);

        registry
            .parse_with(&["prog", "file.txt", "--verbose"], &ParseOptions::strict())
            .unwrap();
        assert!(verbose.as_bool());
    }

    #[test]
    fn test_lone_dash_is_unknown() {
        let mut registry = FlagRegistry::new();
        assert!(registry.parse(&["prog", "-"]).is_ok());
        assert_eq!(
            registry.parse_with(&["prog", "-"], &ParseOptions::strict()),
            Err(FlagError::UnknownFlag("-".to_string()))
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let mut verbose = Flag::default();
        let mut registry = FlagRegistry::new();
        registry.add_flag(&mut verbose, None, Some('v'), FlagKind::Bool);

        let args: Vec<String> = vec!["prog".into(), "-v".into()];
        registry.parse(&args).unwrap();
        assert!(verbose.as_bool());
    }
}
