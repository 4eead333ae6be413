use std::collections::BTreeMap;
use std::path::Path;

use pubgate_util::errors::PubgateError;

/// Loads a `gradle.properties` file (Java properties format).
///
/// A missing file yields an empty map.
pub fn load_properties_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(PubgateError::Io)?;
    Ok(parse_properties(&content))
}

/// Parse properties text into a map, the way `java.util.Properties` reads it.
///
/// Keys end at the first unescaped `=`, `:` or whitespace. Lines starting
/// with `#` or `!` are comments. A line ending in an odd number of
/// backslashes continues onto the next one, whose leading whitespace is
/// dropped. Escapes (`\t`, `\uXXXX`, `\:` ...) are decoded in keys and
/// values. Later duplicates win.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let mut logical = String::new();
    let mut continuing = false;

    for line in content.lines() {
        let line = line.trim_start_matches(is_blank);
        if !continuing && (line.is_empty() || line.starts_with(['#', '!'])) {
            continue;
        }
        if trailing_backslashes(line) % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continuing = true;
            continue;
        }
        logical.push_str(line);
        continuing = false;
        let (key, value) = split_pair(&logical);
        map.insert(key, value);
        logical.clear();
    }
    if continuing {
        let (key, value) = split_pair(&logical);
        map.insert(key, value);
    }
    map
}

/// Whitespace as the properties format defines it.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn trailing_backslashes(line: &str) -> usize {
    line.chars().rev().take_while(|&c| c == '\\').count()
}

fn split_pair(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = idx;
            break;
        }
    }

    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest
        .strip_prefix(['=', ':'])
        .map(|r| r.trim_start_matches(is_blank))
        .unwrap_or(rest);
    (unescape(&line[..key_end]), unescape(rest))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Parse a `-P key=value` command-line override.
pub fn parse_override(raw: &str) -> miette::Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(PubgateError::Config {
            message: format!("Invalid property override '{raw}', expected key=value"),
        }
        .into()),
    }
}

/// Project properties as a stack of layers; later layers shadow earlier ones.
///
/// A module's view is typically: workspace `gradle.properties`, then the
/// module's own `gradle.properties`, then `-P` overrides.
#[derive(Debug, Clone, Default)]
pub struct ProjectProperties {
    layers: Vec<BTreeMap<String, String>>,
}

impl ProjectProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a layer that shadows all existing ones.
    pub fn with_layer(mut self, layer: BTreeMap<String, String>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Look up a property, returning `None` when no layer defines it.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(key))
            .map(String::as_str)
    }

    /// Owned variant of [`find`](Self::find).
    pub fn find_owned(&self, key: &str) -> Option<String> {
        self.find(key).map(str::to_string)
    }
}
