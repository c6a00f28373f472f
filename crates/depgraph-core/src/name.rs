//! Hierarchical module names.
//!
//! A [`ModuleName`] is a dot-separated identifier describing a module's
//! position in the package containment tree, e.g. `pkg.sub.mod`. Names are
//! canonical once built: no empty segments, no leading or trailing dots.

use std::fmt;
use std::path::{Component, Path};

/// A canonical dotted module name.
///
/// Ordering is plain lexicographic order on the serialized form, which is
/// what the renderer relies on for deterministic cluster nesting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Build a name from a raw dotted string, dropping empty segments.
    ///
    /// Returns `None` when nothing remains, e.g. for `"."` (a bare relative
    /// import target) or the empty string.
    pub fn from_dotted(raw: &str) -> Option<Self> {
        let segments: Vec<&str> = raw.split('.').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments.join(".")))
        }
    }

    /// Normalize a relative file path into a module name.
    ///
    /// Path separators become dots, a trailing `.py` extension is stripped,
    /// and a trailing `__init__` segment collapses into its package
    /// (`pkg/__init__.py` names the package `pkg` itself).
    pub fn from_path(rel: &Path) -> Option<Self> {
        let mut segments: Vec<String> = Vec::new();
        for component in rel.components() {
            if let Component::Normal(part) = component {
                segments.push(part.to_string_lossy().into_owned());
            }
        }
        if let Some(last) = segments.last_mut() {
            if let Some(stem) = last.strip_suffix(".py") {
                *last = stem.to_string();
            }
        }
        if segments.len() > 1 && segments.last().is_some_and(|s| s == "__init__") {
            segments.pop();
        }
        Self::from_dotted(&segments.join("."))
    }

    /// The serialized dotted form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the name's segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.0.bytes().filter(|b| *b == b'.').count() + 1
    }

    /// The ancestor formed by the first `depth` segments (clamped to self).
    pub fn prefix(&self, depth: usize) -> ModuleName {
        let segments: Vec<&str> = self.segments().take(depth.max(1)).collect();
        ModuleName(segments.join("."))
    }

    /// Containment relation: `self` lies within `ancestor` iff the names are
    /// equal or `self` extends `ancestor` by one or more segments.
    pub fn is_within(&self, ancestor: &ModuleName) -> bool {
        let outer = ancestor.0.as_str();
        self.0 == *outer
            || (self.0.len() > outer.len()
                && self.0.starts_with(outer)
                && self.0.as_bytes()[outer.len()] == b'.')
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
