use std::convert::Infallible;

use crate::block::HeadingLevel;

/// Something that can display content blocks, one primitive per block kind.
///
/// The renderer never inspects or recovers from `Self::Error`; whatever a
/// primitive returns goes straight back to the caller of `render`.
pub trait OutputSurface {
    type Error;

    fn show_title(&mut self, text: &str) -> Result<(), Self::Error>;
    fn show_heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), Self::Error>;
    fn show_paragraph(&mut self, text: &str) -> Result<(), Self::Error>;
    fn show_markdown(&mut self, text: &str) -> Result<(), Self::Error>;
    fn show_plain_text(&mut self, text: &str) -> Result<(), Self::Error>;
    fn show_code(&mut self, text: &str, language: Option<&str>) -> Result<(), Self::Error>;
}

impl<'a, S: OutputSurface + ?Sized> OutputSurface for &'a mut S {
    type Error = S::Error;

    fn show_title(&mut self, text: &str) -> Result<(), S::Error> {
        (**self).show_title(text)
    }

    fn show_heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), S::Error> {
        (**self).show_heading(text, level)
    }

    fn show_paragraph(&mut self, text: &str) -> Result<(), S::Error> {
        (**self).show_paragraph(text)
    }

    fn show_markdown(&mut self, text: &str) -> Result<(), S::Error> {
        (**self).show_markdown(text)
    }

    fn show_plain_text(&mut self, text: &str) -> Result<(), S::Error> {
        (**self).show_plain_text(text)
    }

    fn show_code(&mut self, text: &str, language: Option<&str>) -> Result<(), S::Error> {
        (**self).show_code(text, language)
    }
}

/// A primitive invocation, as seen by a `Recorder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Title(String),
    Heading(String, u8),
    Paragraph(String),
    Markdown(String),
    PlainText(String),
    Code(String, Option<String>),
}

/// In-memory surface keeping every call it receives, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<Call> {
        self.calls
    }
}

impl OutputSurface for Recorder {
    type Error = Infallible;

    fn show_title(&mut self, text: &str) -> Result<(), Infallible> {
        self.calls.push(Call::Title(text.to_owned()));
        Ok(())
    }

    fn show_heading(&mut self, text: &str, level: HeadingLevel) -> Result<(), Infallible> {
        self.calls.push(Call::Heading(text.to_owned(), level.get()));
        Ok(())
    }

    fn show_paragraph(&mut self, text: &str) -> Result<(), Infallible> {
        self.calls.push(Call::Paragraph(text.to_owned()));
        Ok(())
    }

    fn show_markdown(&mut self, text: &str) -> Result<(), Infallible> {
        self.calls.push(Call::Markdown(text.to_owned()));
        Ok(())
    }

    fn show_plain_text(&mut self, text: &str) -> Result<(), Infallible> {
        self.calls.push(Call::PlainText(text.to_owned()));
        Ok(())
    }

    fn show_code(&mut self, text: &str, language: Option<&str>) -> Result<(), Infallible> {
        self.calls
            .push(Call::Code(text.to_owned(), language.map(str::to_owned)));
        Ok(())
    }
}
