use crate::core::{DeclarationBlock, FieldDecl};
use crate::utils::error::{Result, ScaffoldError};
use regex::Regex;
use std::sync::LazyLock;

static FIELD_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<ty>(?:[A-Za-z_][A-Za-z0-9_]*\s+)*?[A-Za-z_][A-Za-z0-9_]*)",
        r"(?P<sep>\s*\*+\s*|\s+)",
        r"(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*;?\s*$",
    ))
    .expect("field declaration pattern is valid")
});

const C_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "char", "const", "continue", "default", "do", "double",
    "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

/// Parses `int user_id` or `cord_strbuf_t *id` into type and name. The type is one or
/// more identifier tokens, optionally followed by `*`s.
pub fn parse_field_decl(decl: &str) -> Result<FieldDecl> {
    let caps = FIELD_DECL.captures(decl).ok_or_else(|| {
        ScaffoldError::invalid_value("field", decl, "expected '<type> <name>'")
    })?;

    let ty = caps["ty"].split_whitespace().collect::<Vec<_>>().join(" ");
    let stars = caps["sep"].trim();
    let ty = if stars.is_empty() {
        ty
    } else {
        format!("{ty} {stars}")
    };

    Ok(FieldDecl::new(ty, &caps["name"]))
}

pub fn parse_field_decls<S: AsRef<str>>(decls: &[S]) -> Result<Vec<FieldDecl>> {
    decls.iter().map(|d| parse_field_decl(d.as_ref())).collect()
}

/// `void cord_user_init(cord_user_t *user, cord_bump_t *allocator);`
///
/// The parameter falls back to `value` when the base is empty or a C keyword.
pub fn init_prototype(block: &DeclarationBlock) -> String {
    let id = &block.identifier;
    let base = id.base();
    let param = if base.is_empty() || C_KEYWORDS.contains(&base) {
        "value"
    } else {
        base
    };
    format!(
        "void {}_init({} *{}, cord_bump_t *allocator);",
        id.stem(),
        id.as_str(),
        param
    )
}

/// Renders the opening line, one line per field, the closing line, an optional init
/// prototype, and the blank separator.
pub fn render_block(block: &DeclarationBlock) -> String {
    let id = block.identifier.as_str();
    let mut text = format!("typedef struct {id} {{\n");

    for field in &block.fields {
        text.push_str(&format!("    {field};\n"));
    }
    text.push_str(&format!("}} {id};\n"));

    if block.init_function {
        text.push('\n');
        text.push_str(&init_prototype(block));
        text.push('\n');
    }

    text.push('\n');
    text
}
