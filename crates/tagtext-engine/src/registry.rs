//! Mutable name → handler registry, the default [`TagResolver`].
//!
//! Tag names form an open set: third parties register new names at runtime.
//! Each entry also records whether the tag is safe to offer to untrusted
//! authors, so a restricted copy can be derived with [`TagRegistry::safe_only`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::handlers;
use crate::resolver::{TagHandler, TagResolver};

static GLOBAL: LazyLock<TagRegistry> = LazyLock::new(TagRegistry::with_builtins);

#[derive(Clone)]
struct TagEntry {
    handler: Arc<dyn TagHandler>,
    safe: bool,
}

#[derive(Clone, Default)]
pub struct TagRegistry {
    entries: HashMap<String, TagEntry>,
    /// alias → primary name
    aliases: HashMap<String, String>,
}

impl TagRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in handler.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        handlers::register_builtins(&mut registry);
        registry
    }

    /// The process-wide built-in registry, fixed after first use.
    pub fn global() -> &'static TagRegistry {
        &GLOBAL
    }

    /// Registers a handler that is not offered to untrusted authors.
    pub fn register(&mut self, name: &str, handler: impl TagHandler + 'static) -> &mut Self {
        self.insert(name, Arc::new(handler), false)
    }

    /// Registers a handler that is safe for untrusted authors.
    pub fn register_safe(&mut self, name: &str, handler: impl TagHandler + 'static) -> &mut Self {
        self.insert(name, Arc::new(handler), true)
    }

    fn insert(&mut self, name: &str, handler: Arc<dyn TagHandler>, safe: bool) -> &mut Self {
        let name = name.to_lowercase();
        self.aliases.remove(&name);
        self.entries.insert(name, TagEntry { handler, safe });
        self
    }

    /// Makes `alias` resolve to the handler registered as `target`.
    pub fn alias(&mut self, alias: &str, target: &str) -> &mut Self {
        let alias = alias.to_lowercase();
        let target = target.to_lowercase();
        self.entries.remove(&alias);
        self.aliases.insert(alias, target);
        self
    }

    /// Removes a tag or alias. Aliases pointing at a removed tag go with it.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.to_lowercase();
        if self.aliases.remove(&name).is_some() {
            return true;
        }
        let removed = self.entries.remove(&name).is_some();
        if removed {
            self.aliases.retain(|_, target| *target != name);
        }
        removed
    }

    /// Primary tag names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Aliases resolving to `name`, sorted.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn is_safe(&self, name: &str) -> bool {
        self.entry(name).is_some_and(|e| e.safe)
    }

    /// A copy restricted to tags marked safe.
    pub fn safe_only(&self) -> Self {
        let entries: HashMap<String, TagEntry> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.safe)
            .map(|(name, entry)| (name.clone(), entry.clone()))
            .collect();
        let aliases = self
            .aliases
            .iter()
            .filter(|(_, target)| entries.contains_key(*target))
            .map(|(alias, target)| (alias.clone(), target.clone()))
            .collect();
        Self { entries, aliases }
    }

    fn entry(&self, name: &str) -> Option<&TagEntry> {
        let primary = self.aliases.get(name).map_or(name, String::as_str);
        self.entries.get(primary)
    }
}

impl TagResolver for TagRegistry {
    fn tag_handler(&self, name: &str) -> Option<&dyn TagHandler> {
        self.entry(name).map(|e| e.handler.as_ref())
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &self.names())
            .field("aliases", &self.aliases)
            .finish()
    }
}
