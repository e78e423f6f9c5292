//! `AnnotationSpec`: one renderable annotation use-site, assembled from a
//! type reference, an optional use-site qualifier, and an ordered member
//! list. Built incrementally, finalized into an immutable value.
//!
//! Equality is structural over the rendered representation: two specs are
//! equal iff their target type and their canonically rendered text are
//! equal. The canonical text (inline layout, fully qualified spellings) is
//! rendered once at `build()` and cached, which also makes re-rendering
//! trivially idempotent.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::emit::{Emitter, Position};
use crate::error::EmitError;
use crate::name::TypeRef;
use crate::resolve::Qualified;
use crate::template::{Arg, Template};

/// Which underlying generated element the annotation attaches to when the
/// surrounding declaration produces more than one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseSiteTarget {
    File,
    Property,
    Field,
    Get,
    Set,
    Receiver,
    Param,
    SetParam,
    Delegate,
}

impl UseSiteTarget {
    pub fn keyword(self) -> &'static str {
        match self {
            UseSiteTarget::File => "file",
            UseSiteTarget::Property => "property",
            UseSiteTarget::Field => "field",
            UseSiteTarget::Get => "get",
            UseSiteTarget::Set => "set",
            UseSiteTarget::Receiver => "receiver",
            UseSiteTarget::Param => "param",
            UseSiteTarget::SetParam => "setparam",
            UseSiteTarget::Delegate => "delegate",
        }
    }
}

/// One named member entry. The value is a template, not a single node: a
/// member may carry a multi-token rendering such as `Wrap("x")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: String,
    pub value: Template,
}

#[derive(Debug, Clone)]
pub struct AnnotationSpec {
    ty: TypeRef,
    use_site: Option<UseSiteTarget>,
    members: Vec<Member>,
    canonical: String,
}

impl AnnotationSpec {
    pub fn builder(ty: TypeRef) -> Builder {
        Builder { ty, use_site: None, members: Vec::new() }
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn use_site_target(&self) -> Option<UseSiteTarget> {
        self.use_site
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// A fresh builder seeded from this spec's state, for rebuild-style
    /// modification.
    pub fn to_builder(&self) -> Builder {
        Builder {
            ty: self.ty.clone(),
            use_site: self.use_site,
            members: self.members.clone(),
        }
    }
}

impl fmt::Display for AnnotationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl PartialEq for AnnotationSpec {
    fn eq(&self, other: &AnnotationSpec) -> bool {
        self.ty == other.ty && self.canonical == other.canonical
    }
}

impl Eq for AnnotationSpec {}

impl Hash for AnnotationSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
        self.canonical.hash(state);
    }
}

/// Accumulates members in call order. Single logical owner during
/// construction; `build()` takes a defensive copy, so built specs never see
/// later mutation.
#[derive(Debug, Clone)]
pub struct Builder {
    ty: TypeRef,
    use_site: Option<UseSiteTarget>,
    /// Directly editable before `build()`: insert, remove, and replace
    /// entries by position.
    pub members: Vec<Member>,
}

impl Builder {
    pub fn add_member(&mut self, name: impl Into<String>, value: Template) -> &mut Builder {
        self.members.push(Member { name: name.into(), value });
        self
    }

    /// Parse-and-add convenience over `Template::of`.
    pub fn add_member_fmt<I>(
        &mut self,
        name: impl Into<String>,
        fmt: &str,
        args: I,
    ) -> Result<&mut Builder, EmitError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let template = Template::of(fmt, args)?;
        Ok(self.add_member(name, template))
    }

    /// Set or clear the use-site qualifier. Idempotent.
    pub fn use_site_target(&mut self, target: Option<UseSiteTarget>) -> &mut Builder {
        self.use_site = target;
        self
    }

    pub fn build(&self) -> AnnotationSpec {
        let mut spec = AnnotationSpec {
            ty: self.ty.clone(),
            use_site: self.use_site,
            members: self.members.clone(),
            canonical: String::new(),
        };
        let mut resolver = Qualified::default();
        let mut emitter = Emitter::new(&mut resolver);
        emitter.emit_annotation(&spec, Position::Inline);
        spec.canonical = emitter.into_string();
        spec
    }
}
