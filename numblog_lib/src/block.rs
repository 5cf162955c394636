use std::convert::TryFrom;
use std::slice;

use crate::error::Error;

/// Heading depth, mirrors h1..h3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    pub fn get(self) -> u8 {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<HeadingLevel, Error> {
        match level {
            1 => Ok(HeadingLevel::One),
            2 => Ok(HeadingLevel::Two),
            3 => Ok(HeadingLevel::Three),
            other => Err(Error::InvalidHeadingLevel(other)),
        }
    }
}

/// One displayable unit of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Title(String),
    Heading(String, HeadingLevel),
    Paragraph(String),
    /// Block-level markup, rendered by the surface.
    Markdown(String),
    PlainText(String),
    /// Code and an optional language hint ("python", "rs", ...).
    CodeSample(String, Option<String>),
}

impl ContentBlock {
    pub fn title<S: Into<String>>(text: S) -> ContentBlock {
        ContentBlock::Title(text.into())
    }

    pub fn heading<S: Into<String>>(text: S, level: HeadingLevel) -> ContentBlock {
        ContentBlock::Heading(text.into(), level)
    }

    /// Same as `Heading` but checks a raw level coming from outside the crate.
    pub fn heading_at<S: Into<String>>(text: S, level: u8) -> Result<ContentBlock, Error> {
        Ok(ContentBlock::Heading(text.into(), HeadingLevel::try_from(level)?))
    }

    pub fn paragraph<S: Into<String>>(text: S) -> ContentBlock {
        ContentBlock::Paragraph(text.into())
    }

    pub fn markdown<S: Into<String>>(text: S) -> ContentBlock {
        ContentBlock::Markdown(text.into())
    }

    pub fn plain_text<S: Into<String>>(text: S) -> ContentBlock {
        ContentBlock::PlainText(text.into())
    }

    pub fn code<S: Into<String>>(text: S, language: Option<&str>) -> ContentBlock {
        ContentBlock::CodeSample(text.into(), language.map(str::to_owned))
    }

    /// Short variant name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match *self {
            ContentBlock::Title(_) => "title",
            ContentBlock::Heading(..) => "heading",
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Markdown(_) => "markdown",
            ContentBlock::PlainText(_) => "plain_text",
            ContentBlock::CodeSample(..) => "code",
        }
    }
}

/// An ordered, read-only list of blocks. Position is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<ContentBlock>,
}

impl Document {
    pub fn new(blocks: Vec<ContentBlock>) -> Document {
        Document { blocks: blocks }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn iter(&self) -> slice::Iter<'_, ContentBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of the first `Title` block, if any.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match *b {
            ContentBlock::Title(ref t) => Some(t.as_str()),
            _ => None,
        })
    }
}

impl From<Vec<ContentBlock>> for Document {
    fn from(blocks: Vec<ContentBlock>) -> Document {
        Document::new(blocks)
    }
}

impl std::iter::FromIterator<ContentBlock> for Document {
    fn from_iter<I: IntoIterator<Item = ContentBlock>>(iter: I) -> Document {
        Document::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a ContentBlock;
    type IntoIter = slice::Iter<'a, ContentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_bounds() {
        assert_eq!(HeadingLevel::try_from(1).unwrap(), HeadingLevel::One);
        assert_eq!(HeadingLevel::try_from(3).unwrap().get(), 3);
        match HeadingLevel::try_from(4) {
            Err(Error::InvalidHeadingLevel(4)) => {}
            other => panic!("unexpected: {:?}", other),
        }
        assert!(ContentBlock::heading_at("x", 0).is_err());
    }

    #[test]
    fn document_keeps_insertion_order() {
        let doc: Document = vec![
            ContentBlock::paragraph("a"),
            ContentBlock::title("T"),
            ContentBlock::title("U"),
        ]
        .into_iter()
        .collect();
        let kinds: Vec<&str> = doc.iter().map(|b| b.kind()).collect();
        assert_eq!(kinds, vec!["paragraph", "title", "title"]);
        assert_eq!(doc.title(), Some("T"));
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.title(), None);
    }
}
