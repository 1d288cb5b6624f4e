//! Template resolution for scenario steps
//!
//! Step commands and working directories are templates referring to
//! configuration fields with a `{{.Field}}` placeholder. Resolution is pure:
//! the same template and context always produce the same output, and a
//! reference to an unknown field is a hard error rather than a silent empty
//! substitution.

use std::collections::BTreeMap;

use crate::common::{Error, Result};

/// Read-only set of named values available to templates
///
/// Built once per run from the configuration and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Context {
    fields: BTreeMap<String, String>,
}

impl Context {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Expand every `{{.Field}}` placeholder in `template` against `context`
///
/// Text outside placeholders passes through unchanged, including a stray
/// `}}`. An unclosed `{{` or a placeholder body that is not a dotted field
/// reference is a parse error.
pub fn resolve(template: &str, context: &Context) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        let end = body
            .find("}}")
            .ok_or_else(|| Error::template(template, "unclosed '{{'"))?;

        let field = parse_field(template, body[..end].trim())?;
        match context.get(field) {
            Some(value) => out.push_str(value),
            None => return Err(Error::resolution(field)),
        }

        rest = &body[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

/// A placeholder body must be a dotted field reference: `.Name`
fn parse_field<'a>(template: &str, body: &'a str) -> Result<&'a str> {
    let name = body.strip_prefix('.').ok_or_else(|| {
        Error::template(template, format!("expected a '.Field' reference, found {body:?}"))
    })?;

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::template(
            template,
            format!("invalid field name {name:?}"),
        ));
    }

    Ok(name)
}
