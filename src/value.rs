// Closed model of every form an annotation member value can take.
// Immutable once constructed; composite kinds own their children.

use ordered_float::OrderedFloat;

use crate::name::TypeRef;
use crate::spec::AnnotationSpec;

/// One annotation member value. Arrays may hold heterogeneous kinds; the
/// source language permits it, so no cross-kind validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(OrderedFloat<f32>),
    F64(OrderedFloat<f64>),
    Bool(bool),
    Char(char),
    Str(String),
    /// A class reference; renders as `Type::class`.
    Type(TypeRef),
    /// An enum constant; renders as `Type.CONSTANT`.
    EnumConst { ty: TypeRef, name: String },
    /// A nested annotation instance; renders without the leading `@` and
    /// always parenthesized.
    Annotation(Box<AnnotationSpec>),
    Array(Vec<Value>),
    /// Pre-rendered text, spliced verbatim.
    Raw(String),
}

impl Value {
    pub fn f32(v: f32) -> Value {
        Value::F32(OrderedFloat(v))
    }

    pub fn f64(v: f64) -> Value {
        Value::F64(OrderedFloat(v))
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    pub fn enum_const(ty: TypeRef, name: impl Into<String>) -> Value {
        let name = name.into();
        assert!(!name.is_empty(), "enum constant name must be non-empty");
        Value::EnumConst { ty, name }
    }

    pub fn annotation(spec: AnnotationSpec) -> Value {
        Value::Annotation(Box::new(spec))
    }

    pub fn raw(text: impl Into<String>) -> Value {
        Value::Raw(text.into())
    }
}
