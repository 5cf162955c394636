//! # numblog
//! A NumPy primer page kept as plain data, and the renderer that walks it
//! onto a surface (terminal text, html page, or an in-memory recorder).

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod block;
pub mod config;
pub mod content;
pub mod error;
pub mod highlight;
pub mod html;
pub mod render;
pub mod surface;
pub mod templates;
pub mod text;

pub use block::{ContentBlock, Document, HeadingLevel};
pub use config::{Config, Format};
pub use error::Error;
pub use highlight::Highlighter;
pub use html::HtmlSurface;
pub use render::render;
pub use surface::{Call, OutputSurface, Recorder};
pub use text::TextSurface;
