//! Translation of presentational HTML tags into reST substitutions.
//!
//! Plugin descriptions and help texts use a handful of HTML tags. Each is
//! rewritten into the `|name|` substitution references declared in the
//! document preamble.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

/// HTML tags understood by the translator, in substitution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlTag {
    /// `<br>`
    LineBreak,
    /// `<br/>`
    SelfClosingLineBreak,
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<li>`
    ListItem,
    /// `<ul>`
    UnorderedList,
    /// `<p>`
    Paragraph,
}

impl HtmlTag {
    /// Every tag, in the order the substitutions are applied.
    pub const ALL: [HtmlTag; 7] = [
        HtmlTag::LineBreak,
        HtmlTag::SelfClosingLineBreak,
        HtmlTag::Bold,
        HtmlTag::Italic,
        HtmlTag::ListItem,
        HtmlTag::UnorderedList,
        HtmlTag::Paragraph,
    ];

    /// Tag name as written between the angle brackets.
    pub fn name(self) -> &'static str {
        match self {
            HtmlTag::LineBreak => "br",
            HtmlTag::SelfClosingLineBreak => "br/",
            HtmlTag::Bold => "b",
            HtmlTag::Italic => "i",
            HtmlTag::ListItem => "li",
            HtmlTag::UnorderedList => "ul",
            HtmlTag::Paragraph => "p",
        }
    }

    /// Substitution names for the opening and the closing tag.
    pub fn substitutions(self) -> (&'static str, &'static str) {
        match self {
            HtmlTag::LineBreak | HtmlTag::SelfClosingLineBreak => ("br", "br"),
            HtmlTag::Bold => ("bstart", "bend"),
            HtmlTag::Italic => ("istart", "iend"),
            HtmlTag::ListItem => ("listart", "liend"),
            HtmlTag::UnorderedList => ("ulstart", "ulend"),
            HtmlTag::Paragraph => ("pstart", "pend"),
        }
    }

    fn pattern(self) -> String {
        format!("(?i)<(/?){}>", regex::escape(self.name()))
    }
}

#[allow(clippy::expect_used)]
static TAG_PATTERNS: LazyLock<Vec<(HtmlTag, Regex)>> = LazyLock::new(|| {
    HtmlTag::ALL
        .iter()
        .map(|&tag| {
            let regex = Regex::new(&tag.pattern()).expect("tag patterns are valid regexes");
            (tag, regex)
        })
        .collect()
});

/// Translates presentational HTML into reST substitution references.
///
/// Leading and trailing newlines are dropped first. A tag opening the
/// text becomes `|sub| `, any other occurrence ` |sub| `. Unknown tags
/// are left as they are.
pub fn translate_markup(text: &str) -> String {
    let mut doc = text.trim_matches('\n').to_string();

    for (tag, regex) in TAG_PATTERNS.iter() {
        doc = replace_tag(&doc, *tag, regex).into_owned();
    }

    doc
}

fn replace_tag<'a>(doc: &'a str, tag: HtmlTag, regex: &Regex) -> Cow<'a, str> {
    let (start, end) = tag.substitutions();

    regex.replace_all(doc, |caps: &Captures<'_>| {
        let substitution = if caps[1].is_empty() { start } else { end };
        let at_text_start = caps.get(0).is_some_and(|m| m.start() == 0);

        if at_text_start {
            format!("|{substitution}| ")
        } else {
            format!(" |{substitution}| ")
        }
    })
}
