//! Root-relative URL rewriting for deployment under a base path.

use std::collections::HashMap;

use regex::{Captures, Regex};

/// Rewrites `href`/`src` attributes that start with `/`, in either quote
/// style. Attributes that merely end in `src`, such as `data-src`, are not
/// touched.
///
/// Mapped assets are redirected to their output location first; every
/// root-relative URL is then prefixed with the base path. Protocol-relative
/// (`//cdn...`), absolute and fragment URLs are left alone.
pub struct UrlRewriter {
    attr: Regex,
    base: String,
    assets: HashMap<String, String>,
}

impl UrlRewriter {
    pub fn new(base: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            attr: Regex::new(
                r#"(^|\s)(href|src)\s*=\s*(?:"(/(?:[^/"][^"]*)?)"|'(/(?:[^/'][^']*)?)')"#,
            )?,
            base: normalize_base(base),
            assets: HashMap::new(),
        })
    }

    /// Redirect references to `from` (a site-root URL such as
    /// `/styles/main.css`) to `to` (relative to the output root).
    pub fn map_asset(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.assets.insert(from.into(), to.into());
    }

    pub fn rewrite(&self, html: &str) -> String {
        self.attr
            .replace_all(html, |caps: &Captures<'_>| {
                let (url, quote) = match (caps.get(3), caps.get(4)) {
                    (Some(url), _) => (url.as_str(), '"'),
                    (None, Some(url)) => (url.as_str(), '\''),
                    (None, None) => return caps[0].to_string(),
                };
                let target = self
                    .assets
                    .get(url)
                    .map(String::as_str)
                    .unwrap_or_else(|| url.trim_start_matches('/'));
                format!("{}{}={quote}{}{target}{quote}", &caps[1], &caps[2], self.base)
            })
            .into_owned()
    }
}

/// `/Partes_PC` and `Partes_PC/` both become `/Partes_PC/`; empty is `/`.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
