//! End-to-end: an 18-member annotation type with mixed primitive, array,
//! enum, class, and nested-annotation members, rendered from both a
//! reflective instance and a compiler mirror of the same use site.

use anyhow::Result;

use anno_emit::{
    AnnotationNode, Emitter, FileScope, MirrorAnnotation, MirrorBinding, NameResolver, Position,
    RawValue, ReflectedAnnotation, ReflectedMember, TypeRef, spec_from_instance, spec_from_mirror,
};

fn schema(name: &str) -> TypeRef {
    TypeRef::new("com.acme.schema", name)
}

fn season(constant: &str) -> RawValue {
    RawValue::EnumConst(schema("Season"), constant.to_string())
}

fn meta() -> RawValue {
    RawValue::Nested(AnnotationNode::Reflected(ReflectedAnnotation {
        ty: schema("Meta"),
        members: vec![],
    }))
}

fn note(text: &str) -> RawValue {
    RawValue::Nested(AnnotationNode::Mirror(MirrorAnnotation {
        ty: schema("Note"),
        bindings: vec![MirrorBinding::new("value", RawValue::Str(text.to_string()))],
    }))
}

fn classes(names: &[&str]) -> RawValue {
    RawValue::Array(
        names
            .iter()
            .map(|n| RawValue::Class(TypeRef::best_guess(n)))
            .collect(),
    )
}

fn glyphs() -> RawValue {
    RawValue::Array(
        ['\u{0000}', 'z', '€', 'ℕ', '"', '\'', '\t', '\n']
            .into_iter()
            .map(RawValue::Char)
            .collect(),
    )
}

fn ints(values: &[i32]) -> RawValue {
    RawValue::Array(values.iter().map(|v| RawValue::I32(*v)).collect())
}

/// The annotation instance: explicit (non-default) values for a strict
/// subset of members, everything else left at its declared default.
fn field_hints_instance() -> ReflectedAnnotation {
    ReflectedAnnotation {
        ty: schema("FieldHints"),
        members: vec![
            ReflectedMember::new("bits", RawValue::I8(5)).with_default(RawValue::I8(5)),
            ReflectedMember::new("span", RawValue::I16(6)).with_default(RawValue::I16(6)),
            ReflectedMember::new("count", RawValue::I32(7)).with_default(RawValue::I32(7)),
            ReflectedMember::new("total", RawValue::I64(8)).with_default(RawValue::I64(8)),
            ReflectedMember::new("ratio", RawValue::F32(9.0)).with_default(RawValue::F32(9.0)),
            ReflectedMember::new("scale", RawValue::F64(2.5)).with_default(RawValue::F64(10.0)),
            ReflectedMember::new("glyphs", glyphs()).with_default(glyphs()),
            ReflectedMember::new("enabled", RawValue::Bool(true))
                .with_default(RawValue::Bool(true)),
            ReflectedMember::new("season", season("SUMMER")).with_default(season("SUMMER")),
            ReflectedMember::new("meta", meta()).with_default(meta()),
            ReflectedMember::new("label", RawValue::Str("plain".to_string()))
                .with_default(RawValue::Str("plain".to_string())),
            ReflectedMember::new("handler", RawValue::Class(TypeRef::best_guess("com.acme.handler.Retry")))
                .with_default(RawValue::Class(TypeRef::best_guess("com.acme.handler.Fallback"))),
            ReflectedMember::new("ids", ints(&[9, 8, 1])).with_default(ints(&[1, 2, 3])),
            ReflectedMember::new(
                "seasons",
                RawValue::Array(vec![season("SUMMER"), season("WINTER")]),
            )
            .with_default(RawValue::Array(vec![season("SUMMER"), season("WINTER")])),
            ReflectedMember::new("mode", RawValue::EnumConst(schema("Mode"), "STRICT".to_string())),
            ReflectedMember::new("rank", RawValue::I32(1701)),
            ReflectedMember::new("note", note("bar")).with_default(note("foo")),
            ReflectedMember::new("kinds", classes(&["kotlin.Float", "kotlin.Double"]))
                .with_default(classes(&["kotlin.Byte", "kotlin.Short", "kotlin.Int", "kotlin.Long"])),
        ],
    }
}

/// The same use site as a mirror: only the written bindings, in written
/// order, including one binding that happens to equal its declared default.
fn field_hints_mirror() -> MirrorAnnotation {
    MirrorAnnotation {
        ty: schema("FieldHints"),
        bindings: vec![
            MirrorBinding::new("mode", RawValue::EnumConst(schema("Mode"), "STRICT".to_string())),
            MirrorBinding::new("rank", RawValue::I32(1701)),
            MirrorBinding::new("scale", RawValue::F64(2.5)),
            MirrorBinding::new("ids", ints(&[9, 8, 1])),
            MirrorBinding::new(
                "handler",
                RawValue::Class(TypeRef::best_guess("com.acme.handler.Retry")),
            ),
            MirrorBinding::new("meta", meta()),
            MirrorBinding::new("note", note("bar")),
            MirrorBinding::new("kinds", classes(&["kotlin.Float", "kotlin.Double"])),
        ],
    }
}

fn declaration_text(resolver: &mut FileScope, spec: &anno_emit::AnnotationSpec) -> String {
    let mut emitter = Emitter::new(resolver);
    emitter.emit_annotation(spec, Position::Declaration);
    emitter.into_string()
}

#[test]
fn reflected_instance_renders_non_default_members_in_declaration_order() -> Result<()> {
    let spec = spec_from_instance(&field_hints_instance(), false)?;
    assert_eq!(
        spec.to_string(),
        "@com.acme.schema.FieldHints(\
         scale = 2.5, \
         handler = com.acme.handler.Retry::class, \
         ids = [9, 8, 1], \
         mode = com.acme.schema.Mode.STRICT, \
         rank = 1701, \
         note = com.acme.schema.Note(value = \"bar\"), \
         kinds = [kotlin.Float::class, kotlin.Double::class])"
    );
    Ok(())
}

#[test]
fn reflected_instance_with_defaults_renders_all_members() -> Result<()> {
    let spec = spec_from_instance(&field_hints_instance(), true)?;
    let mut resolver = FileScope::new();
    assert_eq!(
        declaration_text(&mut resolver, &spec),
        "@FieldHints(\n\
         \u{20} bits = 5,\n\
         \u{20} span = 6,\n\
         \u{20} count = 7,\n\
         \u{20} total = 8,\n\
         \u{20} ratio = 9.0f,\n\
         \u{20} scale = 2.5,\n\
         \u{20} glyphs = ['\\u0000', 'z', '€', 'ℕ', '\"', '\\'', '\\t', '\\n'],\n\
         \u{20} enabled = true,\n\
         \u{20} season = Season.SUMMER,\n\
         \u{20} meta = Meta(),\n\
         \u{20} label = \"plain\",\n\
         \u{20} handler = Retry::class,\n\
         \u{20} ids = [9, 8, 1],\n\
         \u{20} seasons = [Season.SUMMER, Season.WINTER],\n\
         \u{20} mode = Mode.STRICT,\n\
         \u{20} rank = 1701,\n\
         \u{20} note = Note(value = \"bar\"),\n\
         \u{20} kinds = [Float::class, Double::class]\n\
         )"
    );
    Ok(())
}

#[test]
fn file_scope_emission_shortens_and_records_references() -> Result<()> {
    let spec = spec_from_instance(&field_hints_instance(), false)?;
    let mut resolver = FileScope::new();
    assert_eq!(
        declaration_text(&mut resolver, &spec),
        "@FieldHints(\n\
         \u{20} scale = 2.5,\n\
         \u{20} handler = Retry::class,\n\
         \u{20} ids = [9, 8, 1],\n\
         \u{20} mode = Mode.STRICT,\n\
         \u{20} rank = 1701,\n\
         \u{20} note = Note(value = \"bar\"),\n\
         \u{20} kinds = [Float::class, Double::class]\n\
         )"
    );
    let referenced: Vec<&str> = resolver.referenced().iter().map(String::as_str).collect();
    assert_eq!(
        referenced,
        vec![
            "com.acme.schema.FieldHints",
            "com.acme.handler.Retry",
            "com.acme.schema.Mode",
            "com.acme.schema.Note",
            "kotlin.Float",
            "kotlin.Double",
        ]
    );
    assert!(resolver.imports().all(|(_, alias)| alias.is_none()));
    Ok(())
}

#[test]
fn mirror_renders_written_bindings_in_written_order() -> Result<()> {
    let spec = spec_from_mirror(&field_hints_mirror())?;
    let mut resolver = FileScope::new();
    assert_eq!(
        declaration_text(&mut resolver, &spec),
        "@FieldHints(\n\
         \u{20} mode = Mode.STRICT,\n\
         \u{20} rank = 1701,\n\
         \u{20} scale = 2.5,\n\
         \u{20} ids = [9, 8, 1],\n\
         \u{20} handler = Retry::class,\n\
         \u{20} meta = Meta(),\n\
         \u{20} note = Note(value = \"bar\"),\n\
         \u{20} kinds = [Float::class, Double::class]\n\
         )"
    );
    Ok(())
}

#[test]
fn both_sources_agree_on_shared_members() -> Result<()> {
    let reflected = spec_from_instance(&field_hints_instance(), false)?;
    let mirrored = spec_from_mirror(&field_hints_mirror())?;

    // same member set modulo the explicitly written default, different order
    let from_reflection: Vec<&str> =
        reflected.members().iter().map(|m| m.name.as_str()).collect();
    let mut from_mirror: Vec<&str> =
        mirrored.members().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        from_reflection,
        vec!["scale", "handler", "ids", "mode", "rank", "note", "kinds"]
    );
    assert_eq!(
        from_mirror,
        vec!["mode", "rank", "scale", "ids", "handler", "meta", "note", "kinds"]
    );

    // the shared members carry byte-identical rendered values
    from_mirror.retain(|n| from_reflection.contains(n));
    for name in from_mirror {
        let a = reflected.members().iter().find(|m| m.name == name).unwrap();
        let b = mirrored.members().iter().find(|m| m.name == name).unwrap();
        assert_eq!(a.value, b.value, "member `{name}` diverged");
    }
    Ok(())
}

#[test]
fn identically_sourced_specs_are_equal_and_rerender_identically() -> Result<()> {
    let a = spec_from_instance(&field_hints_instance(), false)?;
    let b = spec_from_instance(&field_hints_instance(), false)?;
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());

    let mut first = FileScope::new();
    let mut second = FileScope::new();
    assert_eq!(declaration_text(&mut first, &a), declaration_text(&mut second, &a));
    Ok(())
}
