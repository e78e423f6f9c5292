// Canonical type names. No resolution policy here; see `resolve`.

use std::fmt;

/// A fully qualified reference to a (possibly nested) type: a dot-separated
/// package, which may be empty, plus one or more class simple names from the
/// top-level class inward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef {
    package: String,
    names: Vec<String>,
}

impl TypeRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> TypeRef {
        let name = name.into();
        assert!(!name.is_empty(), "type name must be non-empty");
        TypeRef { package: package.into(), names: vec![name] }
    }

    /// A class nested one level inside `self`.
    pub fn nested(&self, name: impl Into<String>) -> TypeRef {
        let name = name.into();
        assert!(!name.is_empty(), "nested type name must be non-empty");
        let mut names = self.names.clone();
        names.push(name);
        TypeRef { package: self.package.clone(), names }
    }

    /// Split a dotted name into package and class chain: leading segments
    /// starting with a lowercase letter belong to the package, the rest are
    /// class simple names. A name with no capitalized segment is treated as
    /// a bare top-level class in the default package tail.
    pub fn best_guess(text: &str) -> TypeRef {
        let segments: Vec<&str> = text.split('.').filter(|s| !s.is_empty()).collect();
        assert!(!segments.is_empty(), "type name must be non-empty");

        let split = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(|c| c.is_uppercase()))
            .unwrap_or(segments.len() - 1);

        TypeRef {
            package: segments[..split].join("."),
            names: segments[split..].iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// The enclosing top-level class (identity for top-level types).
    pub fn top_level(&self) -> TypeRef {
        TypeRef { package: self.package.clone(), names: vec![self.names[0].clone()] }
    }

    /// Class chain without the package: `Outer.Inner`.
    pub fn spelled_names(&self) -> String {
        self.names.join(".")
    }

    pub fn canonical(&self) -> String {
        if self.package.is_empty() {
            self.spelled_names()
        } else {
            format!("{}.{}", self.package, self.spelled_names())
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
