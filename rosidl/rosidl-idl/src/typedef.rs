//! Lexically scoped typedef aliases.

use std::collections::HashMap;

/// Aliases visible at one nesting level.
///
/// A scope only records the aliases declared at its own level and falls back
/// to its parent for lookups, so a nested module can shadow an alias without
/// the parent or later siblings ever seeing it.
#[derive(Debug, Default)]
pub struct TypedefScope<'p> {
    parent: Option<&'p TypedefScope<'p>>,
    aliases: HashMap<String, String>,
}

impl TypedefScope<'static> {
    /// Empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root scope holding the IDL integer aliases.
    pub fn builtin() -> Self {
        let mut scope = Self::new();
        for (alias, ty) in [
            ("short", "int16"),
            ("unsigned short", "uint16"),
            ("long", "int32"),
            ("unsigned long", "uint32"),
            ("long long", "int64"),
            ("unsigned long long", "uint64"),
        ] {
            scope.insert(alias, ty);
        }
        scope
    }
}

impl<'p> TypedefScope<'p> {
    /// Open a nested scope on top of this one.
    pub fn child(&self) -> TypedefScope<'_> {
        TypedefScope {
            parent: Some(self),
            aliases: HashMap::new(),
        }
    }

    /// Declare or overwrite an alias at this level.
    pub fn insert(&mut self, alias: impl Into<String>, ty: impl Into<String>) {
        self.aliases.insert(alias.into(), ty.into());
    }

    /// Raw type text of `alias`, searching enclosing scopes outward.
    pub fn get(&self, alias: &str) -> Option<&str> {
        match self.aliases.get(alias) {
            Some(ty) => Some(ty.as_str()),
            None => self.parent.and_then(|parent| parent.get(alias)),
        }
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.get(alias).is_some()
    }
}
