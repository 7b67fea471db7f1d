//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::toc::heading_slug;
use crate::config::HighlightConfig;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(highlight: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: highlight.theme.clone(),
            line_numbers: highlight.line_number,
        }
    }

    /// Render processed post content to HTML
    ///
    /// Headings get an `id` and a self-link so table-of-contents entries resolve.
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Footnotes are rewritten before rendering, so the extension stays off
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;
        let mut heading: Option<(usize, Vec<Event>, String)> = None;

        for (event, range) in parser.into_offset_iter() {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    let slug = heading_slug(heading_source(&markdown[range]));
                    heading = Some((level as usize, Vec::new(), slug));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, inner, slug)) = heading.take() {
                        events.push(Event::Html(CowStr::from(format!(
                            r##"<h{level} id="{slug}"><a href="#{slug}" class="anchor"></a>"##,
                            level = level,
                            slug = slug
                        ))));
                        events.extend(inner);
                        events.push(Event::Html(CowStr::from(format!("</h{}>\n", level))));
                    }
                }
                event => match heading.as_mut() {
                    Some((_, inner, _)) => inner.push(event),
                    None => events.push(event),
                },
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        // Try to find syntax for the language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted = theme.and_then(|theme| {
            highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
        });

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, lang),
            Some(highlighted) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang, highlighted
            ),
            None => {
                // Fallback to plain code block
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
            lang,
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Heading text as written, without ATX markers or a setext underline
///
/// Slugging the source keeps ids identical to the table-of-contents links,
/// which are built from the raw `## ` line.
fn heading_source(source: &str) -> &str {
    let first_line = source.lines().next().unwrap_or_default();
    first_line.trim().trim_start_matches('#').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Intro paragraph.\n\nThis is a test.").unwrap();
        assert!(html.contains("<p>Intro paragraph.</p>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_heading_anchors_match_toc() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## 2. Getting *Started*").unwrap();
        assert!(html.contains(r##"<h2 id="getting-started"><a href="#getting-started" class="anchor"></a>"##));
        assert!(html.contains("<em>Started</em></h2>"));
    }

    #[test]
    fn test_heading_anchor_with_inline_markup_matches_toc() {
        let renderer = MarkdownRenderer::new();
        let source = "## See [docs](https://x.y) and `cfg`";
        let toc_slug = &crate::content::toc::extract_headings(source)[0].slug;
        assert_eq!(toc_slug, "see-docshttpsxy-and-cfg");

        let html = renderer.render(source).unwrap();
        assert!(html.contains(&format!(r#"<h2 id="{}">"#, toc_slug)));
        assert!(html.contains(r#"<a href="https://x.y">docs</a>"#));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains("<pre"));
        assert!(html.contains("language-rust"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_render_code_block_with_line_numbers() {
        let renderer = MarkdownRenderer::with_options(&HighlightConfig {
            line_number: true,
            ..Default::default()
        });
        let html = renderer.render("```rust\nlet a = 1;\nlet b = 2;\n```").unwrap();
        assert!(html.contains("highlight rust"));
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }

    #[test]
    fn test_render_footnote_section() {
        let renderer = MarkdownRenderer::new();
        let processed = crate::content::process_content("Claim[^1].\n\n[^1]: A *source*.");
        let html = renderer.render(&processed).unwrap();
        assert!(html.contains(r##"<sup id="fnref-1"><a href="#fn-1">1</a></sup>"##));
        assert!(html.contains("<em>source</em>"));
        assert!(html.contains(r##"<a href="#fnref-1">↩</a>"##));
    }
}
