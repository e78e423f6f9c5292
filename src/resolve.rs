//! Name resolution: canonical type reference in, spelling for the current
//! position out, with every referenced top-level name recorded for the
//! surrounding file's import block.
//!
//! A resolver is owned by exactly one in-progress emission pass. Calls are
//! plain blocking calls; for a fixed resolver state the answer is
//! deterministic, and two distinct canonical names never share a spelling.

use indexmap::{IndexMap, IndexSet};

use crate::error::EmitError;
use crate::name::TypeRef;

pub trait NameResolver {
    /// Spelling to use for `ty` at the current position. Records the
    /// referenced top-level canonical name as a side effect.
    fn resolve(&mut self, ty: &TypeRef) -> String;

    /// Referenced top-level canonical names, in first-reference order.
    fn referenced(&self) -> &IndexSet<String>;
}

// ------------------------------ Qualified --------------------------------- //

/// Always spells the full canonical name. Backs `Display` and structural
/// equality of finalized specs, where the text must not depend on any file
/// scope.
#[derive(Debug, Default)]
pub struct Qualified {
    referenced: IndexSet<String>,
}

impl NameResolver for Qualified {
    fn resolve(&mut self, ty: &TypeRef) -> String {
        self.referenced.insert(ty.top_level().canonical());
        ty.canonical()
    }

    fn referenced(&self) -> &IndexSet<String> {
        &self.referenced
    }
}

// ------------------------------ FileScope --------------------------------- //

/// Import-tracking resolver for one file. The first type to claim a
/// top-level simple name gets the short spelling; a later type with the
/// same simple name but a different canonical name is spelled fully
/// qualified instead. Explicit aliases are registered up front and win
/// over claiming.
#[derive(Debug, Default)]
pub struct FileScope {
    /// simple spelling -> owning top-level canonical name
    claimed: IndexMap<String, String>,
    /// top-level canonical name -> alias spelling
    aliases: IndexMap<String, String>,
    referenced: IndexSet<String>,
}

impl FileScope {
    pub fn new() -> FileScope {
        FileScope::default()
    }

    /// Register an import alias for a top-level canonical name. Fails with
    /// `UnresolvableReference` when the alias spelling is already taken by
    /// a different canonical name, either by another alias or by a claimed
    /// import.
    pub fn alias(
        &mut self,
        canonical: impl Into<String>,
        as_name: impl Into<String>,
    ) -> Result<(), EmitError> {
        let canonical = canonical.into();
        let as_name = as_name.into();

        let taken_by = self
            .aliases
            .iter()
            .find(|(c, a)| **a == as_name && **c != canonical)
            .map(|(c, _)| c.clone())
            .or_else(|| {
                self.claimed
                    .get(&as_name)
                    .filter(|c| **c != canonical)
                    .cloned()
            });
        if let Some(other) = taken_by {
            return Err(EmitError::UnresolvableReference {
                canonical,
                detail: format!("alias `{as_name}` already names `{other}`"),
            });
        }
        self.aliases.insert(canonical, as_name);
        Ok(())
    }

    /// Canonical name plus the alias it was imported under, if any, in
    /// first-reference order. Input for the file's import block.
    pub fn imports(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.referenced
            .iter()
            .map(|c| (c.as_str(), self.aliases.get(c).map(String::as_str)))
    }
}

impl NameResolver for FileScope {
    fn resolve(&mut self, ty: &TypeRef) -> String {
        let top = ty.top_level();
        let top_canonical = top.canonical();
        self.referenced.insert(top_canonical.clone());

        if let Some(alias) = self.aliases.get(&top_canonical) {
            let mut spelling = alias.clone();
            for segment in ty.spelled_names().split('.').skip(1) {
                spelling.push('.');
                spelling.push_str(segment);
            }
            return spelling;
        }

        let simple = top.simple_name().to_string();
        if let Some(owner) = self.claimed.get(&simple) {
            return if *owner == top_canonical {
                ty.spelled_names()
            } else {
                ty.canonical()
            };
        }
        // an alias may already occupy this spelling for another type
        if self.aliases.values().any(|a| *a == simple) {
            return ty.canonical();
        }
        self.claimed.insert(simple, top_canonical);
        ty.spelled_names()
    }

    fn referenced(&self) -> &IndexSet<String> {
        &self.referenced
    }
}
