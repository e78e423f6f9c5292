//! Format Engine: a small fixed-grammar template language.
//!
//! A template is literal text interleaved with typed placeholders, bound to
//! its arguments at construction. Five forms are recognized:
//!
//! - `%L` takes a nested template and splices it in; type references inside
//!   the nested template still reach the resolver.
//! - `%S` takes a string and emits it escaped and double-quoted.
//! - `%T` takes a type reference, spelled by the resolver and recorded.
//! - `%N` takes a bare identifier, inserted unescaped.
//! - `%%` emits a literal percent and consumes no argument.
//!
//! Arity or kind mismatches are programmer errors and abort construction
//! with `TemplateMismatch`; a successfully built template renders the same
//! text every time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::EmitError;
use crate::escape;
use crate::name::TypeRef;
use crate::spec::AnnotationSpec;
use crate::value::Value;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("%[%LSTN]").expect("placeholder grammar is a valid pattern")
});

// ----------------------------- Types ------------------------------------ //

/// An argument supplied for one placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arg {
    /// For `%L`: an already-built template to splice in.
    Lit(Template),
    /// For `%S`: text to escape and quote.
    Str(String),
    /// For `%T`: a type reference.
    Type(TypeRef),
    /// For `%N`: a bare identifier, caller-validated.
    Name(String),
}

impl Arg {
    pub fn lit(template: Template) -> Arg {
        Arg::Lit(template)
    }

    /// Raw text through `%L`, verbatim.
    pub fn raw(text: impl Into<String>) -> Arg {
        Arg::Lit(Template::raw(text))
    }

    /// A value-model node through `%L`, rendered by its kind.
    pub fn value(value: &Value) -> Arg {
        Arg::Lit(Template::from_value(value))
    }

    pub fn str(text: impl Into<String>) -> Arg {
        Arg::Str(text.into())
    }

    pub fn ty(ty: TypeRef) -> Arg {
        Arg::Type(ty)
    }

    pub fn name(name: impl Into<String>) -> Arg {
        Arg::Name(name.into())
    }

    fn kind(&self) -> &'static str {
        match self {
            Arg::Lit(_) => "literal",
            Arg::Str(_) => "string",
            Arg::Type(_) => "type",
            Arg::Name(_) => "name",
        }
    }
}

/// A fully bound segment. The emitter walks these; text never changes after
/// construction, only type spellings vary by resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Seg {
    Text(String),
    Str(String),
    Type(TypeRef),
    Name(String),
    Nested(Template),
    Annotation(Box<AnnotationSpec>),
}

/// An immutable sequence of bound segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Template {
    segs: Vec<Seg>,
}

// -------------------------- Construction --------------------------------- //

impl Template {
    /// Parse `fmt` and bind `args` to its placeholders, left to right.
    pub fn of<I>(fmt: &str, args: I) -> Result<Template, EmitError>
    where
        I: IntoIterator<Item = Arg>,
    {
        let args: Vec<Arg> = args.into_iter().collect();
        let given = args.len();
        let mut args = args.into_iter();
        let mut segs = Vec::new();
        let mut last = 0;

        for m in PLACEHOLDER.find_iter(fmt) {
            push_checked_text(&mut segs, fmt, &fmt[last..m.start()])?;
            last = m.end();

            if m.as_str() == "%%" {
                push_text(&mut segs, "%");
                continue;
            }
            let arg = args.next().ok_or_else(|| mismatch(fmt, format!(
                "placeholder {} has no argument ({given} given)",
                m.as_str(),
            )))?;
            match (m.as_str(), arg) {
                ("%L", Arg::Lit(t)) => segs.push(Seg::Nested(t)),
                ("%S", Arg::Str(s)) => segs.push(Seg::Str(s)),
                ("%T", Arg::Type(t)) => segs.push(Seg::Type(t)),
                ("%N", Arg::Name(n)) => segs.push(Seg::Name(n)),
                (ph, arg) => {
                    return Err(mismatch(fmt, format!(
                        "placeholder {ph} given a {} argument",
                        arg.kind(),
                    )));
                }
            }
        }
        push_checked_text(&mut segs, fmt, &fmt[last..])?;

        let leftover = args.count();
        if leftover > 0 {
            return Err(mismatch(fmt, format!(
                "{given} arguments for {} placeholders",
                given - leftover,
            )));
        }
        Ok(Template { segs })
    }

    /// Pre-rendered text, no parsing, no placeholders.
    pub fn raw(text: impl Into<String>) -> Template {
        Template { segs: vec![Seg::Text(text.into())] }
    }

    /// Join templates with a separator, no trailing separator. Zero items
    /// produce an empty template.
    pub fn joined<I>(items: I, separator: &str) -> Template
    where
        I: IntoIterator<Item = Template>,
    {
        let mut segs = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                push_text(&mut segs, separator);
            }
            segs.push(Seg::Nested(item));
        }
        Template { segs }
    }

    /// Render a value-model node into a bound template. This is where each
    /// kind's literal syntax lives.
    pub fn from_value(value: &Value) -> Template {
        let mut segs = Vec::new();
        push_value(&mut segs, value);
        Template { segs }
    }

    pub(crate) fn segs(&self) -> &[Seg] {
        &self.segs
    }
}

fn mismatch(fmt: &str, detail: String) -> EmitError {
    EmitError::TemplateMismatch { template: fmt.to_string(), detail }
}

fn push_text(segs: &mut Vec<Seg>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Seg::Text(prev)) = segs.last_mut() {
        prev.push_str(text);
    } else {
        segs.push(Seg::Text(text.to_string()));
    }
}

// A `%` in literal text is either an unknown placeholder or a trailing
// stray; both abort construction.
fn push_checked_text(segs: &mut Vec<Seg>, fmt: &str, text: &str) -> Result<(), EmitError> {
    if text.contains('%') {
        return Err(mismatch(fmt, "stray `%` outside a known placeholder".to_string()));
    }
    push_text(segs, text);
    Ok(())
}

// ------------------------- Value rendering -------------------------------- //

fn push_value(segs: &mut Vec<Seg>, value: &Value) {
    match value {
        Value::I8(v) => push_text(segs, &v.to_string()),
        Value::I16(v) => push_text(segs, &v.to_string()),
        Value::I32(v) => push_text(segs, &v.to_string()),
        Value::I64(v) => push_text(segs, &v.to_string()),
        Value::F32(v) => push_text(segs, &format!("{}f", decimal_text(v.0.to_string()))),
        Value::F64(v) => push_text(segs, &decimal_text(v.0.to_string())),
        Value::Bool(v) => push_text(segs, &v.to_string()),
        Value::Char(c) => push_text(segs, &escape::char_literal(*c)),
        Value::Str(s) => segs.push(Seg::Str(s.clone())),
        Value::Type(ty) => {
            segs.push(Seg::Type(ty.clone()));
            push_text(segs, "::class");
        }
        Value::EnumConst { ty, name } => {
            segs.push(Seg::Type(ty.clone()));
            push_text(segs, &format!(".{name}"));
        }
        Value::Annotation(spec) => segs.push(Seg::Annotation(spec.clone())),
        Value::Array(items) => {
            push_text(segs, "[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    push_text(segs, ", ");
                }
                push_value(segs, item);
            }
            push_text(segs, "]");
        }
        Value::Raw(text) => push_text(segs, text),
    }
}

// Floating literals always carry a decimal point so the two widths stay
// distinguishable in source.
fn decimal_text(s: String) -> String {
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}
