//! Whitespace and comment minification for pages and stylesheets.

/// Elements whose content is copied verbatim.
const RAW_ELEMENTS: [&str; 3] = ["pre", "textarea", "script"];

/// Remove `/* ... */` comments outside string literals.
pub fn strip_css_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                out.push(c);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Minify a stylesheet: drop comments and collapse whitespace. Spaces
/// around `{ } ; ,` and after `:` are removed; a space before `:` is kept
/// since it separates a descendant pseudo-class.
pub fn minify_css(css: &str) -> String {
    let css = strip_css_comments(css);
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        let tight = matches!(c, '{' | '}' | ';' | ',');
        let after_tight = out.ends_with(['{', '}', ';', ',', ':']);
        if pending_space && !out.is_empty() && !tight && !after_tight {
            out.push(' ');
        }
        pending_space = false;

        if c == '}' && out.ends_with(';') {
            out.pop();
        }
        if matches!(c, '"' | '\'') {
            quote = Some(c);
        }
        out.push(c);
    }
    out
}

/// Minify a page: drop comments and collapse whitespace. Whitespace between
/// tags disappears when it spans a line break and shrinks to a single space
/// otherwise. `<pre>`, `<textarea>` and `<script>` contents are untouched.
pub fn minify_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = match after.find("-->") {
                Some(end) => &after[end + 3..],
                None => "",
            };
            continue;
        }

        if rest.starts_with('<') {
            if let Some(raw) = raw_element(rest) {
                out.push_str(raw);
                rest = &rest[raw.len()..];
                continue;
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };

        if c.is_whitespace() {
            let run_len = rest
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(rest.len());
            let run = &rest[..run_len];
            rest = &rest[run_len..];

            let between_tags = (out.is_empty() || out.ends_with('>'))
                && (rest.is_empty() || rest.starts_with('<'));
            if !(between_tags && run.contains('\n')) {
                out.push(' ');
            }
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// The full raw element (open tag through closing tag) starting `input`.
fn raw_element(input: &str) -> Option<&str> {
    let tag = RAW_ELEMENTS.iter().find(|tag| {
        let open = format!("<{tag}");
        input.len() > open.len()
            && input.is_char_boundary(open.len())
            && input[..open.len()].eq_ignore_ascii_case(&open)
            && input[open.len()..]
                .starts_with(|c: char| c == '>' || c.is_whitespace())
    })?;

    let close = format!("</{tag}>");
    let lower = input.to_ascii_lowercase();
    let end = lower.find(&close).map_or(input.len(), |i| i + close.len());
    Some(&input[..end])
}
