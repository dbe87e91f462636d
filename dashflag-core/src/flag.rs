//! Flag descriptors.
//!
//! A [`Flag`] is owned by the calling code. Registering it with a
//! [`FlagRegistry`](crate::FlagRegistry) binds its names and kind; parsing
//! writes the value back into it.

use serde::{Deserialize, Serialize};

/// The kind of value a flag carries, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Present or absent, no value token
    Bool,
    /// Takes the following argument verbatim
    String,
}

/// The current value of a flag. The variant always agrees with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    String(Option<String>),
}

impl FlagValue {
    /// The default value for a kind: `false`, or no string.
    pub fn default_for(kind: FlagKind) -> Self {
        match kind {
            FlagKind::Bool => FlagValue::Bool(false),
            FlagKind::String => FlagValue::String(None),
        }
    }

    /// The kind this value belongs to
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::String(_) => FlagKind::String,
        }
    }
}

impl Default for FlagValue {
    fn default() -> Self {
        FlagValue::Bool(false)
    }
}

/// A registrable flag with an optional long name (`--name`) and an optional
/// short name (`-c`).
///
/// `Flag::default()` is an unbound descriptor with no names, so no token can
/// reach it until it is registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    long_name: Option<String>,
    short_name: Option<char>,
    value: FlagValue,
}

impl Flag {
    /// Binds names and kind, resetting the value to the kind's default.
    pub(crate) fn bind(&mut self, long_name: Option<&str>, short_name: Option<char>, kind: FlagKind) {
        self.long_name = long_name.map(str::to_string);
        self.short_name = short_name;
        self.value = FlagValue::default_for(kind);
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn kind(&self) -> FlagKind {
        self.value.kind()
    }

    pub fn value(&self) -> &FlagValue {
        &self.value
    }

    /// Returns the boolean value, or `false` for a string flag.
    pub fn as_bool(&self) -> bool {
        matches!(self.value, FlagValue::Bool(true))
    }

    /// Returns the string value if one was parsed. Always `None` for a
    /// boolean flag.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            FlagValue::String(value) => value.as_deref(),
            FlagValue::Bool(_) => None,
        }
    }

    /// Whether parsing has given this flag a non-default value.
    pub fn is_set(&self) -> bool {
        match &self.value {
            FlagValue::Bool(set) => *set,
            FlagValue::String(value) => value.is_some(),
        }
    }

    /// Exact comparison against the long name. An absent name never matches.
    pub fn matches_long(&self, name: &str) -> bool {
        self.long_name.as_deref() == Some(name)
    }

    /// Exact comparison against the short name. An absent name never matches.
    pub fn matches_short(&self, c: char) -> bool {
        self.short_name == Some(c)
    }

    pub(crate) fn set_bool(&mut self) {
        self.value = FlagValue::Bool(true);
    }

    pub(crate) fn set_string(&mut self, value: &str) {
        self.value = FlagValue::String(Some(value.to_string()));
    }
}
