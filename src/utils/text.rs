use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<.*?>").expect("valid tag pattern");
    static ref PARENTHETICAL: Regex = Regex::new(r"\(.*?\)").expect("valid parenthetical pattern");
}

/// Text as returned by the texts API: strings nested to any depth
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Fragment(String),
    Nested(Vec<RawText>),
    /// Anything that is neither a string nor an array (nulls, numbers)
    Ignored(serde::de::IgnoredAny),
}

/// Flatten nested fragments depth-first, preserving order
pub fn flatten(nodes: &[RawText]) -> Vec<&str> {
    let mut out = Vec::new();
    for node in nodes {
        push_fragments(node, &mut out);
    }
    out
}

fn push_fragments<'a>(node: &'a RawText, out: &mut Vec<&'a str>) {
    match node {
        RawText::Fragment(text) => out.push(text),
        RawText::Nested(children) => {
            for child in children {
                push_fragments(child, out);
            }
        }
        RawText::Ignored(_) => {}
    }
}

/// Remove HTML tags and parenthetical spans, then trim.
///
/// The parenthetical pattern is non-greedy but still drops anything between
/// the first `(` and the next `)`, citations included.
pub fn strip_markup(text: &str) -> String {
    let without_tags = HTML_TAG.replace_all(text, "");
    let without_parens = PARENTHETICAL.replace_all(&without_tags, "");
    without_parens.trim().to_string()
}

/// Flatten, join with spaces and strip markup
pub fn clean_text(nodes: &[RawText]) -> String {
    strip_markup(&flatten(nodes).join(" "))
}
