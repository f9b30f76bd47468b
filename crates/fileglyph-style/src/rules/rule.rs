//! Synthesized icon rule definition.

use std::fmt;

use crate::icon_theme::{IconDefinition, IconKey};
use crate::parser::{css_identifier, css_string};

/// Which keyspace produced a resolution, and so which bucket its rule goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTarget {
    /// Exact file name match.
    FileName,
    /// Language id fallback match.
    LanguageId,
    /// Extension (bare or dotted composite) match.
    Extension,
}

/// A presentation rule for one resolved lookup name.
///
/// Each rule has:
/// - A selector list targeting the tree entries the name applies to
/// - A declaration body rendering the icon definition
/// - The key it was resolved to, which also names the `file_id_<key>` class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    /// The keyspace the rule belongs to.
    pub target: RuleTarget,
    /// The lookup name (file name, extension or language id).
    pub name: String,
    /// The resolved icon key.
    pub key: IconKey,
    /// Comma-separated selector list.
    pub selector: String,
    /// Declarations without the surrounding braces.
    pub declarations: String,
}

impl IconRule {
    /// Build the rule for `name` resolved to `key` through `target`.
    pub fn new(
        target: RuleTarget,
        name: &str,
        key: IconKey,
        file_type: &str,
        definition: &IconDefinition,
        root_url: Option<&str>,
    ) -> Self {
        Self {
            target,
            name: name.to_string(),
            key,
            selector: build_selector(target, name, key, file_type),
            declarations: build_declarations(definition, root_url),
        }
    }

    /// Whether this is an extension rule for a bare (dot-free) extension.
    pub fn is_bare_extension(&self) -> bool {
        self.target == RuleTarget::Extension && !self.name.contains('.')
    }

    /// The complete rule text.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IconRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}", self.selector, self.declarations)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn build_declarations(definition: &IconDefinition, root_url: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(glyph) = present(&definition.font_character) {
        // Glyphs are stored in CSS escape form already, so they go in verbatim.
        body.push_str(&format!("content:\"{}\"!important;", glyph));
    } else if let Some(icon_path) = present(&definition.icon_path) {
        let url = match root_url {
            Some(root) => format!("{}/{}", root.trim_end_matches('/'), icon_path),
            None => icon_path.to_string(),
        };
        body.push_str(&format!(
            "content:\"\"!important;background-image:url({});",
            css_string(&url)
        ));
    }

    if let Some(color) = present(&definition.font_color) {
        body.push_str(&format!("color:{};", color));
    }
    if let Some(font_id) = present(&definition.font_id) {
        body.push_str(&format!("font-family:\"{}\"!important;", font_id));
    }
    if let Some(size) = present(&definition.font_size) {
        body.push_str(&format!("font-size:{};", size));
    }

    body
}

fn build_selector(target: RuleTarget, name: &str, key: IconKey, file_type: &str) -> String {
    let id_selector = format!(".{}::before", css_identifier(&key.class_name()));
    let type_selector = if file_type.is_empty() {
        String::new()
    } else {
        format!(
            ",.{}::before",
            css_identifier(&format!("file_type_{}", file_type))
        )
    };

    match target {
        RuleTarget::LanguageId => format!(
            ".{}::before,{}{}",
            css_identifier(&format!("file_type_{}", name)),
            id_selector,
            type_selector
        ),
        RuleTarget::FileName | RuleTarget::Extension => {
            let op = if target == RuleTarget::FileName { "=" } else { "$=" };
            let value = css_string(name);
            format!(
                "*[data-name{op}{value}i][data-type=\"file\"]>.file::before,\
                 *[name{op}{value}i][type=\"file\"]>.file::before,\
                 {id_selector}{type_selector}"
            )
        }
    }
}
