//! The dual Annotation Value Normalizer: one generic walk over
//! `AnnotationValueSource`, so the reflective and mirror adapters apply
//! identical conversion, default-suppression, and vararg policy and
//! converge on the same ordered member mapping.

use crate::error::EmitError;
use crate::source::{
    AnnotationNode, AnnotationValueSource, MirrorAnnotation, RawValue, ReflectedAnnotation,
    SourceMember,
};
use crate::spec::AnnotationSpec;
use crate::template::Template;
use crate::value::Value;

/// Build a spec from a live annotation instance. Members whose value
/// equals their declared default are omitted unless `include_defaults`;
/// with it, every declared member appears in declaration order.
pub fn spec_from_instance(
    annotation: &ReflectedAnnotation,
    include_defaults: bool,
) -> Result<AnnotationSpec, EmitError> {
    spec_from_source(annotation, include_defaults)
}

/// Build a spec from a compile-time mirror: exactly the explicit bindings,
/// in the order the mirror presents them. A sole member named `value` is
/// still spelled out; shorthand elision is not implemented.
pub fn spec_from_mirror(mirror: &MirrorAnnotation) -> Result<AnnotationSpec, EmitError> {
    // a mirror carries no defaults, so there is nothing to include
    spec_from_source(mirror, false)
}

pub fn spec_from_source<S>(
    source: &S,
    include_defaults: bool,
) -> Result<AnnotationSpec, EmitError>
where
    S: AnnotationValueSource,
{
    let mut builder = AnnotationSpec::builder(source.annotation_type().clone());
    for member in source.members() {
        let value = member_value(&member, member.value)?;
        if !include_defaults {
            if let Some(default) = member.default {
                if member_value(&member, default)? == value {
                    continue;
                }
            }
        }
        builder.add_member(member.name, Template::from_value(&value));
    }
    Ok(builder.build())
}

// Vararg members invoked positionally arrive as a scalar; normalize to an
// array so both call shapes render identically. Defaults go through the
// same wrapping so suppression compares like with like.
fn member_value(member: &SourceMember<'_>, raw: &RawValue) -> Result<Value, EmitError> {
    let value = convert(member.name, raw)?;
    if member.vararg && !matches!(value, Value::Array(_)) {
        Ok(Value::Array(vec![value]))
    } else {
        Ok(value)
    }
}

fn convert(member: &str, raw: &RawValue) -> Result<Value, EmitError> {
    Ok(match raw {
        RawValue::I8(v) => Value::I8(*v),
        RawValue::I16(v) => Value::I16(*v),
        RawValue::I32(v) => Value::I32(*v),
        RawValue::I64(v) => Value::I64(*v),
        RawValue::F32(v) => Value::f32(*v),
        RawValue::F64(v) => Value::f64(*v),
        RawValue::Bool(v) => Value::Bool(*v),
        RawValue::Char(v) => Value::Char(*v),
        RawValue::Str(v) => Value::Str(v.clone()),
        RawValue::Class(ty) => Value::Type(ty.clone()),
        RawValue::EnumConst(ty, name) => Value::enum_const(ty.clone(), name.clone()),
        RawValue::Nested(node) => Value::Annotation(Box::new(match node {
            AnnotationNode::Reflected(nested) => spec_from_instance(nested, false)?,
            AnnotationNode::Mirror(nested) => spec_from_mirror(nested)?,
        })),
        RawValue::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert(member, item))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        RawValue::Opaque(text) => {
            return Err(EmitError::InvalidMemberValue {
                member: member.to_string(),
                value: text.clone(),
            });
        }
    })
}
