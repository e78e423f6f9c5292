use thiserror::Error;

/// Failures are structural (malformed input), synchronous, and fatal.
/// There is no partial-success mode anywhere in this crate: either a spec
/// renders completely or the operation that discovered the problem fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// Placeholder/argument count or kind mismatch in a format template.
    /// Raised at template construction, never during rendering.
    #[error("template `{template}`: {detail}")]
    TemplateMismatch { template: String, detail: String },

    /// A value source handed the normalizer something outside the
    /// renderable kinds (e.g. a non-constant expression).
    #[error("member `{member}` has no constant rendering: {value}")]
    InvalidMemberValue { member: String, value: String },

    /// The resolver cannot give a canonical name a unique spelling in the
    /// current file scope.
    #[error("no unique spelling for `{canonical}`: {detail}")]
    UnresolvableReference { canonical: String, detail: String },
}
