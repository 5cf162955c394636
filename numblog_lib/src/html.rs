use std::io::Write;

use hoedown::renderer::html::Flags;
use hoedown::{Html, Markdown, Render};
use maud::html;
use regex::Regex;

use crate::block::HeadingLevel;
use crate::error::Error;
use crate::highlight::Highlighter;
use crate::surface::OutputSurface;
use crate::templates::classic::{self, RenderedBlock};

pub const DEFAULT_PAGE_TITLE: &str = "numblog";

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"https?://[^\s<>]+").unwrap();
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Escapes `text` and turns bare urls into links.
fn linkify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in URL_RE.find_iter(text) {
        out.push_str(&escape(&text[last..m.start()]));
        out.push_str(&html! { a href=(m.as_str()) { (m.as_str()) } }.into_string());
        last = m.end();
    }
    out.push_str(&escape(&text[last..]));
    out
}

fn markdown_to_html(text: &str) -> Result<String, Error> {
    let mut md_html = Html::new(Flags::empty(), 0);
    let md_doc = Markdown::new(text);
    let buffer = md_html.render(&md_doc);
    Ok(buffer.to_str()?.to_owned())
}

/// Surface producing one html page.
///
/// Blocks are collected as they come; nothing reaches `out` until `finish`.
pub struct HtmlSurface<W: Write> {
    out: W,
    highlighter: Highlighter,
    css_path: String,
    title: Option<String>,
    blocks: Vec<RenderedBlock>,
}

impl<W: Write> HtmlSurface<W> {
    pub fn new(out: W, highlighter: Highlighter, css_path: &str) -> HtmlSurface<W> {
        HtmlSurface {
            out: out,
            highlighter: highlighter,
            css_path: css_path.to_owned(),
            title: None,
            blocks: Vec::new(),
        }
    }

    pub fn rendered(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Lays the collected blocks out and writes the page. Returns the writer.
    pub fn finish(mut self) -> Result<W, Error> {
        let title = self
            .title
            .as_ref()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PAGE_TITLE);
        let page = classic::render(title, &self.css_path, &self.blocks);
        self.out.write_all(page.as_bytes())?;
        self.out.flush()?;
        debug!("wrote html page ({} bytes)", page.len());
        Ok(self.out)
    }
}

impl<W: Write> OutputSurface for HtmlSurface<W> {
    type Error = Error;

    fn show_title(&mut self, text: &str) -> Result<(), Error> {
        if self.title.is_none() {
            self.title = Some(text.to_owned());
        }
        self.blocks.push(RenderedBlock::Title(text.to_owned()));
        Ok(())
    }

    fn show_heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), Error> {
        self.blocks
            .push(RenderedBlock::Heading(level.get(), text.to_owned()));
        Ok(())
    }

    fn show_paragraph(&mut self, text: &str) -> Result<(), Error> {
        let doc = html! { p { (text) } }.into_string();
        self.blocks.push(RenderedBlock::Doc(doc));
        Ok(())
    }

    fn show_markdown(&mut self, text: &str) -> Result<(), Error> {
        let doc = markdown_to_html(text)?;
        self.blocks.push(RenderedBlock::Doc(doc));
        Ok(())
    }

    fn show_plain_text(&mut self, text: &str) -> Result<(), Error> {
        self.blocks
            .push(RenderedBlock::Doc(format!("<p class=\"text\">{}</p>", linkify(text))));
        Ok(())
    }

    fn show_code(&mut self, text: &str, language: Option<&str>) -> Result<(), Error> {
        let code = self.highlighter.html(text.trim_start_matches('\n').trim_end(), language)?;
        self.blocks.push(RenderedBlock::Code(code));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linkify_escapes_and_links() {
        let out = linkify("see <https://numpy.org/doc/stable/> & more");
        assert_eq!(
            out,
            "see &lt;<a href=\"https://numpy.org/doc/stable/\">https://numpy.org/doc/stable/</a>&gt; &amp; more"
        );
        assert_eq!(linkify("no links"), "no links");
    }

    #[test]
    fn markdown_lists() {
        let out = markdown_to_html("### Arrays\n- one\n- two\n").unwrap();
        assert!(out.contains("<h3>Arrays</h3>"));
        assert!(out.contains("<li>one</li>"));
    }

    #[test]
    fn first_title_wins() {
        let mut surface = HtmlSurface::new(Vec::new(), Highlighter::default(), "classic.css");
        surface.show_title("One").unwrap();
        surface.show_title("Two").unwrap();
        let page = String::from_utf8(surface.finish().unwrap()).unwrap();
        assert!(page.contains("<title>One</title>"));
        assert!(page.contains("<h1>Two</h1>"));
    }

    #[test]
    fn untitled_page() {
        let surface = HtmlSurface::new(Vec::new(), Highlighter::default(), "classic.css");
        let page = String::from_utf8(surface.finish().unwrap()).unwrap();
        assert!(page.contains("<title>numblog</title>"));
    }
}
