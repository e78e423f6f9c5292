//! Annotation value sources: the two collaborator shapes the normalizer
//! accepts, behind one narrow capability interface.
//!
//! A reflective source knows the annotation type's full declaration:
//! every member in declaration order, each with its runtime value and its
//! declared default. A mirror source only knows what was explicitly
//! written at one use site; absent members simply do not exist on this
//! path, and no defaults are ever synthesized for them.

use crate::name::TypeRef;

/// A constant value as handed over by a collaborator, before conversion
/// into the renderable model. `Opaque` carries the source text of anything
/// outside the recognized kinds and is rejected during normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Class(TypeRef),
    EnumConst(TypeRef, String),
    Nested(AnnotationNode),
    Array(Vec<RawValue>),
    Opaque(String),
}

/// A nested annotation value recurses through the adapter that produced
/// its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationNode {
    Reflected(ReflectedAnnotation),
    Mirror(MirrorAnnotation),
}

/// A live annotation instance plus its type's declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedAnnotation {
    pub ty: TypeRef,
    /// Declaration order of the annotation type, not field layout.
    pub members: Vec<ReflectedMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReflectedMember {
    pub name: String,
    pub value: RawValue,
    pub default: Option<RawValue>,
    pub vararg: bool,
}

impl ReflectedMember {
    pub fn new(name: impl Into<String>, value: RawValue) -> ReflectedMember {
        ReflectedMember { name: name.into(), value, default: None, vararg: false }
    }

    pub fn with_default(mut self, default: RawValue) -> ReflectedMember {
        self.default = Some(default);
        self
    }

    pub fn vararg(mut self) -> ReflectedMember {
        self.vararg = true;
        self
    }
}

/// A compile-time annotation mirror: the explicit bindings present at one
/// use site, in the order the mirror presents them.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorAnnotation {
    pub ty: TypeRef,
    pub bindings: Vec<MirrorBinding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MirrorBinding {
    pub name: String,
    pub value: RawValue,
    /// The member is declared as a variable-argument list; the stored
    /// value may arrive as a scalar even then.
    pub vararg: bool,
}

impl MirrorBinding {
    pub fn new(name: impl Into<String>, value: RawValue) -> MirrorBinding {
        MirrorBinding { name: name.into(), value, vararg: false }
    }

    pub fn vararg(mut self) -> MirrorBinding {
        self.vararg = true;
        self
    }
}

/// One member as seen by the normalizer, borrowed from whichever source
/// shape produced it.
#[derive(Debug, Clone, Copy)]
pub struct SourceMember<'a> {
    pub name: &'a str,
    pub value: &'a RawValue,
    pub default: Option<&'a RawValue>,
    pub vararg: bool,
}

/// The one capability both sources implement. Member order is whatever the
/// source dictates: declaration order for reflection, presentation order
/// for mirrors. Default-suppression policy lives with the caller, not here.
pub trait AnnotationValueSource {
    fn annotation_type(&self) -> &TypeRef;
    fn members(&self) -> Vec<SourceMember<'_>>;
}

impl AnnotationValueSource for ReflectedAnnotation {
    fn annotation_type(&self) -> &TypeRef {
        &self.ty
    }

    fn members(&self) -> Vec<SourceMember<'_>> {
        self.members
            .iter()
            .map(|m| SourceMember {
                name: &m.name,
                value: &m.value,
                default: m.default.as_ref(),
                vararg: m.vararg,
            })
            .collect()
    }
}

impl AnnotationValueSource for MirrorAnnotation {
    fn annotation_type(&self) -> &TypeRef {
        &self.ty
    }

    fn members(&self) -> Vec<SourceMember<'_>> {
        self.bindings
            .iter()
            .map(|b| SourceMember {
                name: &b.name,
                value: &b.value,
                default: None,
                vararg: b.vararg,
            })
            .collect()
    }
}
