//! Reading `export default { ... }` module text back.
//!
//! The inverse of [`render_module`](crate::export::render_module). Module
//! text is handled one line at a time, with at most one message value per
//! line:
//!
//! - [`value_span`] locates the double-quoted value on a line. Lines with
//!   no quote, or whose value quote is never closed, have no value.
//! - [`rewrite_values`] passes every value through a caller-supplied
//!   function and leaves all other text untouched. This is the hook an
//!   external translator plugs into.
//! - [`parse_module`] reads the text into owned sections for comparison
//!   against a [`MessageCatalog`](crate::catalog::MessageCatalog).

use std::fmt;
use std::ops::Range;

use crate::export::escape;
use crate::path::MessagePath;

/// Byte range of the message value on `line`, without its quotes.
///
/// A line that opens with a quoted key (`"odd-key": "value",`) skips the
/// key and uses the next quoted string. Backslash escapes inside a value do
/// not end it. Returns `None` when the line has no value or the closing
/// quote is missing.
#[must_use]
pub fn value_span(line: &str) -> Option<Range<usize>> {
    let mut open = line.find('"')?;
    if line[..open].trim().is_empty() {
        let key_close = closing_quote(line, open)?;
        open = key_close + 1 + line[key_close + 1..].find('"')?;
    }
    let close = closing_quote(line, open)?;
    Some(open + 1..close)
}

/// Index of the `"` closing the string opened at `open`.
fn closing_quote(line: &str, open: usize) -> Option<usize> {
    let mut bytes = line.bytes().enumerate().skip(open + 1);
    while let Some((i, b)) = bytes.next() {
        match b {
            b'\\' => {
                bytes.next();
            }
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Replace every message value in `source` with `rewrite(value)`.
///
/// The function sees unescaped text and its result is escaped again, so it
/// may return quotes or newlines freely. Lines without a value, including
/// lines with an unmatched quote, pass through byte for byte. The first
/// error from `rewrite` aborts the pass.
pub fn rewrite_values<F, E>(source: &str, mut rewrite: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut out = String::with_capacity(source.len());
    let mut rewritten = 0usize;
    for line in source.split_inclusive('\n') {
        match value_span(line) {
            Some(span) => {
                let replacement = rewrite(&unescape(&line[span.clone()]))?;
                out.push_str(&line[..span.start]);
                out.push_str(&escape(&replacement));
                out.push_str(&line[span.end..]);
                rewritten += 1;
            }
            None => out.push_str(line),
        }
    }
    tracing::debug!(values = rewritten, "module values rewritten");
    Ok(out)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// One section read from module text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    pub name: String,
    /// `(key, text)` pairs in file order.
    pub messages: Vec<(String, String)>,
}

/// Sections read from module text, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedModule {
    pub sections: Vec<ParsedSection>,
}

impl ParsedModule {
    /// First value for `(section, key)`, if present.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .filter(|s| s.name == section)
            .flat_map(|s| s.messages.iter())
            .find(|(k, _)| k == key)
            .map(|(_, text)| text.as_str())
    }

    /// Every `section.key` path in file order.
    #[must_use]
    pub fn paths(&self) -> Vec<MessagePath> {
        self.sections
            .iter()
            .flat_map(|s| {
                s.messages
                    .iter()
                    .map(move |(key, _)| MessagePath::new(s.name.as_str(), key.as_str()))
            })
            .collect()
    }
}

/// Module text that does not have the `export default` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleParseError {
    /// 1-based line number.
    pub line: usize,
    pub reason: &'static str,
}

impl fmt::Display for ModuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

impl std::error::Error for ModuleParseError {}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Body,
    Section,
    Done,
}

/// Parse module text in the layout [`render_module`](crate::export::render_module)
/// writes: one section header, message or closing brace per line. Blank
/// lines and `//` comments are skipped.
pub fn parse_module(source: &str) -> Result<ParsedModule, ModuleParseError> {
    let mut module = ParsedModule::default();
    let mut state = State::Header;
    let mut last_line = 0;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let err = |reason| ModuleParseError {
            line: line_no,
            reason,
        };
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        state = match state {
            State::Header if line == "export default {" => State::Body,
            State::Header => return Err(err("expected 'export default {'")),
            State::Body if line == "};" => State::Done,
            State::Body => {
                let head = line
                    .strip_suffix('{')
                    .ok_or_else(|| err("expected a section or '};'"))?;
                let (name, rest) = split_key(head).ok_or_else(|| err("malformed section name"))?;
                if !rest.trim().is_empty() {
                    return Err(err("malformed section name"));
                }
                module.sections.push(ParsedSection {
                    name,
                    messages: Vec::new(),
                });
                State::Section
            }
            State::Section if line == "}," || line == "}" => State::Body,
            State::Section => {
                let (key, rest) = split_key(line).ok_or_else(|| err("malformed message key"))?;
                let rest = rest.trim_start();
                if !rest.starts_with('"') {
                    return Err(err("expected a quoted message value"));
                }
                let close = closing_quote(rest, 0).ok_or_else(|| err("unterminated message value"))?;
                let tail = rest[close + 1..].trim();
                if !(tail.is_empty() || tail == ",") {
                    return Err(err("unexpected text after message value"));
                }
                let text = unescape(&rest[1..close]);
                if let Some(section) = module.sections.last_mut() {
                    section.messages.push((key, text));
                }
                State::Section
            }
            State::Done => return Err(err("unexpected text after '};'")),
        };
    }

    if state != State::Done {
        return Err(ModuleParseError {
            line: last_line,
            reason: "unexpected end of module",
        });
    }
    tracing::debug!(
        sections = module.sections.len(),
        messages = module.sections.iter().map(|s| s.messages.len()).sum::<usize>(),
        "module text parsed"
    );
    Ok(module)
}

/// Split `key: rest` where the key is bare or double-quoted.
fn split_key(line: &str) -> Option<(String, &str)> {
    let line = line.trim_start();
    if line.starts_with('"') {
        let close = closing_quote(line, 0)?;
        let rest = line[close + 1..].trim_start().strip_prefix(':')?;
        return Some((unescape(&line[1..close]), rest));
    }
    let (key, rest) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), rest))
}
