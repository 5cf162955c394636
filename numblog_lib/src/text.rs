use std::io::Write;

use crate::block::HeadingLevel;
use crate::error::Error;
use crate::highlight::Highlighter;
use crate::surface::OutputSurface;

const CODE_INDENT: &str = "    ";

/// Surface writing straight to a terminal (or anything `Write`).
///
/// Code samples are ANSI-colored when a highlighter is given.
pub struct TextSurface<W: Write> {
    out: W,
    highlighter: Option<Highlighter>,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> TextSurface<W> {
        TextSurface {
            out: out,
            highlighter: None,
        }
    }

    pub fn colored(out: W, highlighter: Highlighter) -> TextSurface<W> {
        TextSurface {
            out: out,
            highlighter: Some(highlighter),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn block(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.out, "{}", text.trim_end())?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> OutputSurface for TextSurface<W> {
    type Error = Error;

    fn show_title(&mut self, text: &str) -> Result<(), Error> {
        let underline = "=".repeat(text.chars().count());
        writeln!(self.out, "{}\n{}", text, underline)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn show_heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), Error> {
        let marks = "#".repeat(level.get() as usize);
        self.block(&format!("{} {}", marks, text))
    }

    fn show_paragraph(&mut self, text: &str) -> Result<(), Error> {
        self.block(text)
    }

    fn show_markdown(&mut self, text: &str) -> Result<(), Error> {
        self.block(text.trim_start_matches('\n'))
    }

    fn show_plain_text(&mut self, text: &str) -> Result<(), Error> {
        self.block(text)
    }

    fn show_code(&mut self, text: &str, language: Option<&str>) -> Result<(), Error> {
        let code = text.trim_start_matches('\n').trim_end();
        let code = match self.highlighter {
            Some(ref h) => h.ansi(code, language)?,
            None => code.to_owned(),
        };
        for line in code.lines() {
            writeln!(self.out, "{}{}", CODE_INDENT, line.trim_end())?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn written(surface: TextSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn title_is_underlined() {
        let mut s = TextSurface::new(Vec::new());
        s.show_title("Numpy Blog").unwrap();
        assert_eq!(written(s), "Numpy Blog\n==========\n\n");
    }

    #[test]
    fn heading_marks_follow_level() {
        let mut s = TextSurface::new(Vec::new());
        s.show_heading("dtype", HeadingLevel::Three).unwrap();
        assert_eq!(written(s), "### dtype\n\n");
    }

    #[test]
    fn code_is_indented() {
        let mut s = TextSurface::new(Vec::new());
        s.show_code("\nx = 1\nprint(x)\n        ", Some("python")).unwrap();
        assert_eq!(written(s), "    x = 1\n    print(x)\n\n");
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_is_unavailable() {
        let mut s = TextSurface::new(Closed);
        match s.show_paragraph("p") {
            Err(Error::SurfaceUnavailable(ref e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
