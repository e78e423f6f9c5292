// Text emission. One emitter per resolver session; output is plain UTF-8
// source fragments, never files.

use crate::resolve::NameResolver;
use crate::spec::{AnnotationSpec, Member};
use crate::template::{Seg, Template};

const INDENT: &str = "  ";

/// Where the emitted annotation lands in the surrounding declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Statement position: everything on one line.
    Inline,
    /// Standalone declaration: members wrap onto indented lines.
    Declaration,
}

pub struct Emitter<'r> {
    out: String,
    resolver: &'r mut dyn NameResolver,
    level: usize,
}

impl<'r> Emitter<'r> {
    pub fn new(resolver: &'r mut dyn NameResolver) -> Emitter<'r> {
        Emitter { out: String::new(), resolver, level: 0 }
    }

    pub fn emit_template(&mut self, template: &Template) {
        for seg in template.segs() {
            match seg {
                Seg::Text(text) => self.out.push_str(text),
                Seg::Str(text) => self.out.push_str(&crate::escape::string_literal(text)),
                Seg::Type(ty) => {
                    let spelling = self.resolver.resolve(ty);
                    self.out.push_str(&spelling);
                }
                Seg::Name(name) => self.out.push_str(name),
                Seg::Nested(template) => self.emit_template(template),
                Seg::Annotation(spec) => self.annotation_value(spec),
            }
        }
    }

    pub fn emit_annotation(&mut self, spec: &AnnotationSpec, position: Position) {
        self.out.push('@');
        if let Some(target) = spec.use_site_target() {
            self.out.push_str(target.keyword());
            self.out.push(':');
        }
        let spelling = self.resolver.resolve(spec.ty());
        self.out.push_str(&spelling);

        let members = spec.members();
        if members.is_empty() {
            return;
        }
        // a single member stays inline even in declaration position
        if position == Position::Inline || members.len() == 1 {
            self.out.push('(');
            self.member_list(members);
            self.out.push(')');
        } else {
            self.out.push_str("(\n");
            self.level += 1;
            for (i, member) in members.iter().enumerate() {
                self.indent();
                self.member(member);
                if i + 1 < members.len() {
                    self.out.push(',');
                }
                self.out.push('\n');
            }
            self.level -= 1;
            self.indent();
            self.out.push(')');
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    // Nested annotation in value position: no `@`, always parenthesized,
    // always inline.
    fn annotation_value(&mut self, spec: &AnnotationSpec) {
        let spelling = self.resolver.resolve(spec.ty());
        self.out.push_str(&spelling);
        self.out.push('(');
        self.member_list(spec.members());
        self.out.push(')');
    }

    fn member_list(&mut self, members: &[Member]) {
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.member(member);
        }
    }

    fn member(&mut self, member: &Member) {
        self.out.push_str(&member.name);
        self.out.push_str(" = ");
        self.emit_template(&member.value);
    }

    fn indent(&mut self) {
        for _ in 0..self.level {
            self.out.push_str(INDENT);
        }
    }
}
