//! Annotation source-emission core.
//!
//! Turn annotation values discovered through two very different channels
//! (a live reflective instance, or a compiler mirror seen during separate
//! compilation) into one canonical, renderable `AnnotationSpec`, then emit
//! it as source text that compiles unmodified.
//!
//! Design goals:
//! - One closed `Value` model; both adapters converge on it.
//! - Templates are fully bound and arity/kind checked at construction;
//!   a built template cannot produce partially-wrong text.
//! - Name spelling is delegated to a `NameResolver` that records every
//!   referenced canonical name for the surrounding file's import block.
//! - Finalized specs are immutable, structurally comparable, and safe to
//!   share across threads.

pub mod error;
pub mod name;
pub mod escape;
pub mod value;
pub mod template;
pub mod resolve;
pub mod spec;
pub mod emit;
pub mod source;
pub mod normalize;

pub use error::EmitError;
pub use name::TypeRef;
pub use value::Value;
pub use template::{Arg, Template};
pub use resolve::{FileScope, NameResolver, Qualified};
pub use spec::{AnnotationSpec, Builder, Member, UseSiteTarget};
pub use emit::{Emitter, Position};
pub use source::{
    AnnotationNode, AnnotationValueSource, MirrorAnnotation, MirrorBinding, RawValue,
    ReflectedAnnotation, ReflectedMember, SourceMember,
};
pub use normalize::{spec_from_instance, spec_from_mirror, spec_from_source};
