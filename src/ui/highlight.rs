use colored::*;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};
use terminal_size::{terminal_size, Width};

const THEME: &str = "Solarized (dark)";
const RESET: &str = "\x1b[0m";

/// Renders a complete markdown answer for the terminal.
///
/// Fenced code blocks are syntax highlighted inside a dimmed frame and
/// headings are shown in bold; all other text passes through unchanged.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    width: usize,
}

struct CodeBlock {
    lang: Option<String>,
    content: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let width = terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(60);
        Self::with_width(width)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            width: width.clamp(20, 100),
        }
    }

    pub fn render(&self, markdown: &str) -> String {
        let mut output = String::new();
        let mut code_block: Option<CodeBlock> = None;

        for line in markdown.lines() {
            let fence = line.trim_start().strip_prefix("```");

            match (code_block.take(), fence) {
                (Some(block), Some(_)) => {
                    output.push_str(&self.render_code_block(&block));
                }
                (Some(mut block), None) => {
                    block.content.push_str(line);
                    block.content.push('\n');
                    code_block = Some(block);
                }
                (None, Some(lang)) => {
                    let lang = lang.trim();
                    code_block = Some(CodeBlock {
                        lang: (!lang.is_empty()).then(|| lang.to_string()),
                        content: String::new(),
                    });
                }
                (None, None) => {
                    output.push_str(&render_text_line(line));
                    output.push('\n');
                }
            }
        }

        // Unterminated code block
        if let Some(block) = code_block {
            output.push_str(&self.render_code_block(&block));
        }

        output
    }

    fn render_code_block(&self, block: &CodeBlock) -> String {
        let label = block.lang.as_deref().unwrap_or("code");
        let header_rule = "─".repeat(self.width.saturating_sub(label.chars().count() + 4));

        let footer_rule = format!("└{}", "─".repeat(self.width - 1));

        let mut output = format!(
            "{}[{}]{}\n",
            "┌─".dimmed(),
            label.cyan(),
            header_rule.dimmed()
        );
        output.push_str(&self.highlight_code(&block.content, block.lang.as_deref()));
        output.push_str(&format!("{}\n", footer_rule.dimmed()));
        output
    }

    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let Some(theme) = self.theme_set.themes.get(THEME) else {
            return code.to_string();
        };

        let syntax = lang
            .and_then(|lang| {
                self.syntax_set
                    .find_syntax_by_token(lang)
                    .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            })
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    let ranges: Vec<(Style, &str)> = ranges;
                    output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
                }
                Err(_) => output.push_str(line),
            }
        }

        output.push_str(RESET);
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_text_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let level = trimmed.chars().take_while(|&c| c == '#').count();

    if (1..=6).contains(&level) && trimmed[level..].starts_with(' ') {
        trimmed[level..].trim().bold().to_string()
    } else {
        line.to_string()
    }
}

