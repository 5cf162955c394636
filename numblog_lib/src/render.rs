use crate::block::{ContentBlock, Document};
use crate::surface::OutputSurface;

/// ----------------------------------------------------------------------------
/// Rendering a block

fn render_block<S>(block: &ContentBlock, surface: &mut S) -> Result<(), S::Error>
where
    S: OutputSurface + ?Sized,
{
    match *block {
        ContentBlock::Title(ref text) => surface.show_title(text),
        ContentBlock::Heading(ref text, level) => surface.show_heading(text, level),
        ContentBlock::Paragraph(ref text) => surface.show_paragraph(text),
        ContentBlock::Markdown(ref text) => surface.show_markdown(text),
        ContentBlock::PlainText(ref text) => surface.show_plain_text(text),
        ContentBlock::CodeSample(ref text, ref language) => {
            surface.show_code(text, language.as_ref().map(String::as_str))
        }
    }
}

/// ----------------------------------------------------------------------------
/// Rendering a document

/// Emits every block of `document` to `surface`, in order, once.
///
/// Stops at the first surface error and hands it back untouched. The document
/// is only borrowed, so the same one can be rendered again afterwards.
pub fn render<S>(document: &Document, surface: &mut S) -> Result<(), S::Error>
where
    S: OutputSurface + ?Sized,
{
    for (i, block) in document.iter().enumerate() {
        trace!("section-{}: {}", i, block.kind());
        render_block(block, surface)?;
    }
    debug!("rendered {} blocks", document.len());
    Ok(())
}
