//! Flag registry.
//!
//! The registry borrows caller-owned [`Flag`]s mutably for as long as it is
//! in use. It never allocates or drops a descriptor; once the registry is
//! done the caller reads results straight from its own flags.
//!
//! Because every descriptor is held by `&mut`, the borrow checker rules out
//! reading or registering on another thread while a parse is running. The
//! registry itself carries no synchronization.

use crate::flag::{Flag, FlagKind};

/// Ordered set of registered flags. Lookups go most-recent first, so a name
/// registered twice resolves to the later registration.
#[derive(Debug, Default)]
pub struct FlagRegistry<'a> {
    // registration order; lookups walk it backwards
    flags: Vec<&'a mut Flag>,
}

impl<'a> FlagRegistry<'a> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Bind `flag` to the given names and kind and register it.
    ///
    /// No validation happens here. A flag with neither name is accepted but
    /// can never be matched, and a name that is already taken shadows the
    /// earlier registration.
    pub fn add_flag(
        &mut self,
        flag: &'a mut Flag,
        long_name: Option<&str>,
        short_name: Option<char>,
        kind: FlagKind,
    ) {
        flag.bind(long_name, short_name, kind);
        self.flags.push(flag);
    }

    /// Find the most recently registered flag with this long name
    pub fn find_long(&mut self, name: &str) -> Option<&mut Flag> {
        self.flags
            .iter_mut()
            .rev()
            .find(|flag| flag.matches_long(name))
            .map(|flag| &mut **flag)
    }

    /// Find the most recently registered flag with this short name
    pub fn find_short(&mut self, c: char) -> Option<&mut Flag> {
        self.flags
            .iter_mut()
            .rev()
            .find(|flag| flag.matches_short(c))
            .map(|flag| &mut **flag)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over registered flags in lookup order (most recent first).
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter().rev().map(|flag| &**flag)
    }
}
