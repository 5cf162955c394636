use maud::{html, PreEscaped, DOCTYPE};

/// A block once turned into html, waiting to be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Title(String),
    Heading(u8, String),
    /// Already escaped or rendered markup.
    Doc(String),
    /// Highlighted `<pre>` block.
    Code(String),
}


pub fn render(title: &str, css_path: &str, blocks: &[RenderedBlock]) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                title { (title) }
                meta http-equiv="content-type" content="text/html; charset=UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" media="all" href=(css_path);
            }
            body {
                div #container {
                    div #background {}
                    ul.sections {
                        @for (i, block) in blocks.iter().enumerate() {
                            li id={ "section-" (i) } {
                                @match *block {
                                    RenderedBlock::Title(ref text) => {
                                        div.annotation {
                                            h1 { (text) }
                                        }
                                        div.content {}
                                    },
                                    RenderedBlock::Heading(level, ref text) => {
                                        div.annotation {
                                            div class={ "pilwrap for-h" (level) } {
                                                a.pilcrow href={ "#section-" (i) } { "¶" }
                                            }
                                            @match level {
                                                1 => { h1 { (text) } },
                                                2 => { h2 { (text) } },
                                                _ => { h3 { (text) } },
                                            }
                                        }
                                        div.content {}
                                    },
                                    RenderedBlock::Doc(ref doc) => {
                                        div.annotation {
                                            (PreEscaped(doc.as_str()))
                                        }
                                        div.content {}
                                    },
                                    RenderedBlock::Code(ref code) => {
                                        div.annotation {}
                                        div.content {
                                            (PreEscaped(code.as_str()))
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
