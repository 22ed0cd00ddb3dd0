//! Unused CSS removal.
//!
//! A selector is kept when every class and id it names was seen in a
//! rendered page or registered with [`Purger::keep_classes`]. Type,
//! universal and attribute selectors never reference markup tokens and are
//! always kept. `@media` and `@supports` blocks are purged recursively;
//! other at-rules pass through untouched.

use std::collections::HashSet;

use regex::Regex;

use super::minify::strip_css_comments;

/// Collects used classes and ids, then filters stylesheets against them.
pub struct Purger {
    class_attr: Regex,
    id_attr: Regex,
    classes: HashSet<String>,
    ids: HashSet<String>,
}

impl Purger {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            class_attr: Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?,
            id_attr: Regex::new(r#"(?i)\bid\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?,
            classes: HashSet::new(),
            ids: HashSet::new(),
        })
    }

    /// Record the classes and ids used by a page.
    pub fn scan_html(&mut self, html: &str) {
        for caps in self.class_attr.captures_iter(html) {
            if let Some(value) = caps.get(1).or_else(|| caps.get(2)) {
                self.classes
                    .extend(value.as_str().split_whitespace().map(str::to_string));
            }
        }
        for caps in self.id_attr.captures_iter(html) {
            if let Some(value) = caps.get(1).or_else(|| caps.get(2)) {
                self.ids.insert(value.as_str().trim().to_string());
            }
        }
    }

    /// Treat classes as used even if no page contains them.
    pub fn keep_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
    }

    /// Remove rules no recorded markup can match.
    pub fn purge(&self, css: &str) -> String {
        self.purge_blocks(&strip_css_comments(css))
    }

    fn purge_blocks(&self, css: &str) -> String {
        let mut out = String::new();

        for block in split_blocks(css) {
            match block {
                Block::Statement(statement) => {
                    out.push_str(statement);
                    out.push('\n');
                }
                Block::Rule { prelude, body } if is_conditional(prelude) => {
                    let inner = self.purge_blocks(body);
                    if !inner.trim().is_empty() {
                        out.push_str(&format!("{} {{\n{}}}\n", prelude, inner));
                    }
                }
                Block::Rule { prelude, body } if prelude.starts_with('@') => {
                    out.push_str(&format!("{} {{{}}}\n", prelude, body));
                }
                Block::Rule { prelude, body } => {
                    let kept: Vec<&str> = split_selectors(prelude)
                        .into_iter()
                        .filter(|selector| self.selector_used(selector))
                        .collect();
                    if kept.is_empty() {
                        tracing::debug!(selector = prelude, "purged rule");
                    } else {
                        out.push_str(&format!("{} {{{}}}\n", kept.join(", "), body));
                    }
                }
            }
        }
        out
    }

    fn selector_used(&self, selector: &str) -> bool {
        self.tokens_used(&selector_tokens(selector))
    }

    fn tokens_used(&self, tokens: &[Token]) -> bool {
        tokens.iter().all(|token| match token {
            Token::Class(name) => self.classes.contains(name),
            Token::Id(name) => self.ids.contains(name),
            Token::AnyOf(alternatives) => {
                alternatives.is_empty() || alternatives.iter().any(|alt| self.tokens_used(alt))
            }
        })
    }
}

fn is_conditional(prelude: &str) -> bool {
    prelude.starts_with("@media") || prelude.starts_with("@supports")
}

#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    /// A `;`-terminated at-rule such as `@import`, or trailing text.
    Statement(&'a str),
    Rule { prelude: &'a str, body: &'a str },
}

/// Split top-level CSS into statements and braced rules.
fn split_blocks(css: &str) -> Vec<Block<'_>> {
    let bytes = css.as_bytes();
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let mut quote: Option<u8> = None;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }

        match b {
            b'"' | b'\'' => quote = Some(b),
            b';' => {
                let statement = css[start..=i].trim();
                if !statement.is_empty() {
                    blocks.push(Block::Statement(statement));
                }
                start = i + 1;
            }
            b'{' => {
                let close = matching_brace(bytes, i).unwrap_or(bytes.len());
                blocks.push(Block::Rule {
                    prelude: css[start..i].trim(),
                    body: &css[i + 1..close],
                });
                i = close;
                start = close + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < css.len() {
        let rest = css[start..].trim();
        if !rest.is_empty() {
            blocks.push(Block::Statement(rest));
        }
    }
    blocks
}

/// Index of the `}` closing the `{` at `open`.
fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;

    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(_) if b == b'\\' => i += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}

/// Split a selector list on commas outside parentheses and brackets.
fn split_selectors(prelude: &str) -> Vec<&str> {
    let mut selectors = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in prelude.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            ',' if depth == 0 => {
                selectors.push(prelude[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    selectors.push(prelude[start..].trim());
    selectors.retain(|s| !s.is_empty());
    selectors
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Class(String),
    Id(String),
    /// `:is()`, `:where()`, `:has()` or `:matches()`: one alternative is enough.
    AnyOf(Vec<Vec<Token>>),
}

/// Pseudo-classes taking a selector list that matches when any member does.
const ANY_OF_PSEUDOS: [&str; 4] = ["is(", "where(", "has(", "matches("];

/// Classes and ids a selector requires. Attribute selectors and `:not(...)`
/// arguments are skipped; `:is(...)` and friends become [`Token::AnyOf`].
fn selector_tokens(selector: &str) -> Vec<Token> {
    let chars: Vec<char> = selector.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => i = skip_group(&chars, i, '[', ']'),
            ':' => {
                if chars[i + 1..].starts_with(&['n', 'o', 't', '(']) {
                    i = skip_group(&chars, i + 4, '(', ')');
                } else if let Some(len) = any_of_pseudo(&chars[i + 1..]) {
                    let open = i + len;
                    let close = skip_group(&chars, open, '(', ')');
                    let inner: String = chars[open + 1..close].iter().collect();
                    tokens.push(Token::AnyOf(
                        split_selectors(&inner).into_iter().map(selector_tokens).collect(),
                    ));
                    i = close;
                }
            }
            marker @ ('.' | '#') => {
                let (name, next) = read_ident(&chars, i + 1);
                if !name.is_empty() {
                    tokens.push(if marker == '.' {
                        Token::Class(name)
                    } else {
                        Token::Id(name)
                    });
                }
                i = next;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    tokens
}

/// Length of the `is(`-style prefix starting `rest`, if any.
fn any_of_pseudo(rest: &[char]) -> Option<usize> {
    ANY_OF_PSEUDOS.iter().find_map(|name| {
        let name: Vec<char> = name.chars().collect();
        rest.starts_with(&name).then_some(name.len())
    })
}

/// Position of the closer matching the opener at `open`.
fn skip_group(chars: &[char], open: usize, opener: char, closer: char) -> usize {
    let mut depth = 0;
    for (offset, &c) in chars[open..].iter().enumerate() {
        if c == opener {
            depth += 1;
        } else if c == closer {
            depth -= 1;
            if depth == 0 {
                return open + offset;
            }
        }
    }
    chars.len()
}

fn read_ident(chars: &[char], mut i: usize) -> (String, usize) {
    let mut name = String::new();
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' && i + 1 < chars.len() {
            name.push(chars[i + 1]);
            i += 2;
        } else if c.is_alphanumeric() || c == '-' || c == '_' {
            name.push(c);
            i += 1;
        } else {
            break;
        }
    }
    (name, i)
}
