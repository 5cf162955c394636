use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

use crate::error::Error;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

thread_local! {
    static THEME_SET: ThemeSet = ThemeSet::load_defaults();
    static SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
}

fn syntax_for<'a>(ss: &'a SyntaxSet, language: Option<&str>) -> &'a SyntaxReference {
    match language {
        Some(token) => ss.find_syntax_by_token(token).unwrap_or_else(|| {
            warn!("no syntax available for language hint: {}", token);
            ss.find_syntax_plain_text()
        }),
        None => ss.find_syntax_plain_text(),
    }
}

/// Code colorizer bound to one theme.
#[derive(Debug, Clone)]
pub struct Highlighter {
    theme: Theme,
}

impl Highlighter {
    /// Unknown theme names fall back to `DEFAULT_THEME`.
    pub fn new(theme_name: &str) -> Highlighter {
        let theme = THEME_SET.with(|ts| match ts.themes.get(theme_name) {
            Some(theme) => theme.clone(),
            None => {
                let known: Vec<&str> = ts.themes.keys().map(String::as_str).collect();
                warn!(
                    "unknown theme {}, using {} (known themes: {})",
                    theme_name,
                    DEFAULT_THEME,
                    known.join(", ")
                );
                ts.themes[DEFAULT_THEME].clone()
            }
        });
        Highlighter { theme: theme }
    }

    /// `<pre>` block with inline styles.
    pub fn html(&self, code: &str, language: Option<&str>) -> Result<String, Error> {
        SYNTAX_SET.with(|ss| {
            let syntax = syntax_for(ss, language);
            Ok(highlighted_html_for_string(code, ss, syntax, &self.theme)?)
        })
    }

    /// 24-bit ANSI escaped text, colors reset at the end.
    pub fn ansi(&self, code: &str, language: Option<&str>) -> Result<String, Error> {
        SYNTAX_SET.with(|ss| {
            let syntax = syntax_for(ss, language);
            let mut lines = HighlightLines::new(syntax, &self.theme);
            let mut out = String::with_capacity(code.len() * 2);
            for line in LinesWithEndings::from(code) {
                let ranges = lines.highlight_line(line, ss)?;
                out.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
            }
            out.push_str("\x1b[0m");
            Ok(out)
        })
    }
}

impl Default for Highlighter {
    fn default() -> Highlighter {
        Highlighter::new(DEFAULT_THEME)
    }
}
