use crate::domain::MarkdownRenderer;
use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

/// GitHub-flavoured extensions, all on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub footnotes: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            footnotes: true,
        }
    }
}

impl MarkdownOptions {
    fn to_parser_options(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options
    }
}

#[derive(Debug, Clone, Default)]
pub struct PulldownRenderer {
    options: MarkdownOptions,
}

impl PulldownRenderer {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, input: &[u8]) -> Vec<u8> {
        // Invalid UTF-8 becomes U+FFFD rather than failing the whole document.
        let text = String::from_utf8_lossy(input);
        let parser = Parser::new_ext(&text, self.options.to_parser_options());

        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        String::from_utf8(PulldownRenderer::default().render(input.as_bytes())).unwrap()
    }

    #[test]
    fn test_heading() {
        assert_eq!(render("# Title"), "<h1>Title</h1>\n");
    }

    #[test]
    fn test_gfm_extensions_enabled_by_default() {
        assert!(render("~~gone~~").contains("<del>gone</del>"));
        assert!(render("| a | b |\n|---|---|\n| 1 | 2 |\n").contains("<table>"));
        assert!(render("- [x] done\n").contains("checkbox"));
    }

    #[test]
    fn test_disabled_extension_renders_plain_text() {
        let renderer = PulldownRenderer::new(MarkdownOptions {
            strikethrough: false,
            ..MarkdownOptions::default()
        });
        let html = String::from_utf8(renderer.render(b"~~kept~~")).unwrap();
        assert!(!html.contains("<del>"));
    }

    #[test]
    fn test_invalid_utf8_is_rendered_lossily() {
        let html = PulldownRenderer::default().render(b"caf\xE9");
        assert_eq!(String::from_utf8(html).unwrap(), "<p>caf\u{FFFD}</p>\n");
    }
}
