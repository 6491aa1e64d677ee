//! Argument and value parsing for statement lines
//!
//! The text between the parentheses of a call is scanned character by
//! character with a quote flag and a bracket depth counter, split on
//! top-level commas, and coerced one chunk at a time. Coercion is
//! permissive: anything that is not a quoted string, a boolean, `None`,
//! a bracketed literal, or a number falls back to a raw string rather
//! than erroring, so `add_text(hello there)` still works.

use std::fmt;

/// A parsed argument value.
///
/// Mappings preserve insertion order and allow non-string keys, so they
/// are stored as entry pairs rather than a hash map.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Whether the value counts as "set" when used as a flag.
    ///
    /// Zero, empty strings, empty containers, `False` and `None` are all
    /// treated as unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Str(s) => !s.is_empty(),
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Bool(b) => *b,
            Value::None => false,
            Value::List(items) => !items.is_empty(),
            Value::Map(entries) => !entries.is_empty(),
        }
    }

    /// The elements of a value used where a list is expected.
    ///
    /// Lists yield their elements, strings yield one value per character,
    /// and mappings yield their keys. Scalars are not iterable and return
    /// `None`.
    pub fn items(&self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items.clone()),
            Value::Str(s) => Some(s.chars().map(|c| Value::Str(c.to_string())).collect()),
            Value::Map(entries) => Some(entries.iter().map(|(k, _)| k.clone()).collect()),
            _ => None,
        }
    }

    /// Look up a string key in a mapping value.
    pub fn entry(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| matches!(k, Value::Str(s) if s == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Numeric view of the value, if it has one. Booleans count as 0 or 1.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Integer view of the value, if it has one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }
}

/// Render a float so that whole numbers keep their decimal point
/// (`3.0`, not `3`).
pub(crate) fn format_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}

/// Render a value as it appears inside a list or mapping literal:
/// strings are quoted, everything else renders as usual.
fn literal(value: &Value) -> String {
    match value {
        // Single quotes by default, double when the text itself contains
        // a single quote.
        Value::Str(s) => {
            if s.contains('\'') && !s.contains('"') {
                format!("\"{}\"", s)
            } else {
                format!("'{}'", s)
            }
        }
        other => other.to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", format_float(*x)),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::None => write!(f, "None"),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(literal).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Map(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", literal(k), literal(v)))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

/// Split `input` on top-level commas.
///
/// A comma splits only when the scan is outside a quoted run and the
/// bracket depth is zero. Quotes close only on the character that opened
/// them; the other quote kind is literal inside. Every comma produces a
/// chunk (consecutive commas yield empty chunks), but a blank trailing
/// chunk is dropped.
fn split_top_level(input: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth: usize = 0;

    for ch in input.chars() {
        match ch {
            '"' | '\'' => {
                match quote {
                    None => quote = Some(ch),
                    Some(q) if q == ch => quote = None,
                    Some(_) => {}
                }
                current.push(ch);
            }
            '[' | '{' if quote.is_none() => {
                depth += 1;
                current.push(ch);
            }
            ']' | '}' if quote.is_none() => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if quote.is_none() && depth == 0 => {
                chunks.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Byte index of the first top-level occurrence of `target` in `input`,
/// using the same quote and bracket rules as [`split_top_level`].
fn find_top_level(input: &str, target: char) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut depth: usize = 0;

    for (idx, ch) in input.char_indices() {
        if ch == target && quote.is_none() && depth == 0 {
            return Some(idx);
        }
        match ch {
            '"' | '\'' => match quote {
                None => quote = Some(ch),
                Some(q) if q == ch => quote = None,
                Some(_) => {}
            },
            '[' | '{' if quote.is_none() => depth += 1,
            ']' | '}' if quote.is_none() => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Parse the argument text of a call into positional and named values.
///
/// Chunks are split on top-level commas. A chunk containing a top-level
/// `=` becomes a named argument (split once on the first `=`), unless it
/// begins with `[` or `{`, which keeps list and mapping literals with
/// `=` inside them positional. Named arguments keep insertion order and
/// a repeated name overwrites the earlier value in place.
///
/// # Examples
///
/// `"Hello, world", 42, size=3.5` yields two positional values and one
/// named value.
pub fn parse_arguments(input: &str) -> (Vec<Value>, Vec<(String, Value)>) {
    let mut positional = Vec::new();
    let mut named = Vec::new();
    for chunk in split_top_level(input) {
        push_argument(chunk.trim(), &mut positional, &mut named);
    }
    (positional, named)
}

fn push_argument(chunk: &str, positional: &mut Vec<Value>, named: &mut Vec<(String, Value)>) {
    if !chunk.starts_with('[') && !chunk.starts_with('{') {
        if let Some(idx) = find_top_level(chunk, '=') {
            let key = chunk[..idx].trim().to_string();
            let value = parse_value(chunk[idx + 1..].trim());
            if let Some(existing) = named.iter_mut().find(|(k, _)| *k == key) {
                existing.1 = value;
            } else {
                named.push((key, value));
            }
            return;
        }
    }
    positional.push(parse_value(chunk));
}

/// Coerce one chunk of argument text into a [`Value`].
///
/// The arms are tried in order: quoted string, booleans and `None`,
/// list literal, mapping literal, number. Anything else is kept verbatim
/// as a string, including chunks with unbalanced quotes or brackets.
pub fn parse_value(text: &str) -> Value {
    let text = text.trim();

    // Quoted string: strip the matching outer quotes, nothing inside is
    // processed. A lone quote character is not a pair.
    if text.len() >= 2 {
        for q in ['"', '\''] {
            if text.starts_with(q) && text.ends_with(q) {
                return Value::Str(text[1..text.len() - 1].to_string());
            }
        }
    }

    match text {
        "True" => return Value::Bool(true),
        "False" => return Value::Bool(false),
        "None" => return Value::None,
        _ => {}
    }

    // List literal: split the interior on top-level commas and coerce
    // each element recursively.
    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        let inner = &text[1..text.len() - 1];
        if inner.trim().is_empty() {
            return Value::List(Vec::new());
        }
        let items = split_top_level(inner)
            .iter()
            .map(|chunk| parse_value(chunk))
            .collect();
        return Value::List(items);
    }

    // Mapping literal: entries split on top-level commas, each entry on
    // its first top-level colon. Entries without a colon are skipped.
    if text.len() >= 2 && text.starts_with('{') && text.ends_with('}') {
        let inner = &text[1..text.len() - 1];
        if inner.trim().is_empty() {
            return Value::Map(Vec::new());
        }
        let mut entries: Vec<(Value, Value)> = Vec::new();
        for item in split_top_level(inner) {
            let item = item.trim();
            if let Some(idx) = find_top_level(item, ':') {
                let key = parse_value(item[..idx].trim());
                let value = parse_value(item[idx + 1..].trim());
                if let Some(existing) = entries.iter_mut().find(|(k, _)| *k == key) {
                    existing.1 = value;
                } else {
                    entries.push((key, value));
                }
            }
        }
        return Value::Map(entries);
    }

    // Numbers: a dot means float, otherwise integer. A failed parse falls
    // through to the raw string arm.
    if text.contains('.') {
        if let Ok(x) = text.parse::<f64>() {
            return Value::Float(x);
        }
    } else if let Ok(n) = text.parse::<i64>() {
        return Value::Int(n);
    }

    Value::Str(text.to_string())
}
