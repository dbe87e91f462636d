//! Classification of raw arguments.

/// What a single argument looks like to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--name`, with everything after the two dashes as the name
    Long(&'a str),
    /// `-c...`, only the first character after the dash counts
    Short(char),
    /// `-` on its own
    LoneDash,
    /// Anything not starting with `-`
    Plain,
}

impl<'a> Token<'a> {
    pub fn classify(arg: &'a str) -> Self {
        let Some(rest) = arg.strip_prefix('-') else {
            return Token::Plain;
        };

        if let Some(name) = rest.strip_prefix('-') {
            return Token::Long(name);
        }

        match rest.chars().next() {
            Some(c) => Token::Short(c),
            None => Token::LoneDash,
        }
    }

    pub fn is_flag(&self) -> bool {
        !matches!(self, Token::Plain)
    }
}
