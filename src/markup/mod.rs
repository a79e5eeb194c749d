//! Trivial inline markup: `**bold**`, `*italic*` and `` `code` ``.
//!
//! Markup never spans lines. Bold is matched before italic so `**x**`
//! is never read as two empty italics.

use std::sync::LazyLock;

use regex::Regex;

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(?P<bold>.*?)\*\*|\*(?P<italic>.*?)\*|`(?P<code>.*?)`")
        .unwrap_or_else(|err| unreachable!("inline markup pattern is valid: {err}"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Plain,
    Bold,
    Italic,
    Code,
}

/// A run of text sharing one markup kind. Markers are not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: MarkupKind,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    const fn new(kind: MarkupKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Split one line into styled segments.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in INLINE.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            out.push(Segment::new(MarkupKind::Plain, &line[last..whole.start()]));
        }
        let (kind, inner) = if let Some(m) = caps.name("bold") {
            (MarkupKind::Bold, m.as_str())
        } else if let Some(m) = caps.name("italic") {
            (MarkupKind::Italic, m.as_str())
        } else if let Some(m) = caps.name("code") {
            (MarkupKind::Code, m.as_str())
        } else {
            (MarkupKind::Plain, whole.as_str())
        };
        if !inner.is_empty() {
            out.push(Segment::new(kind, inner));
        }
        last = whole.end();
    }
    if last < line.len() {
        out.push(Segment::new(MarkupKind::Plain, &line[last..]));
    }
    out
}
