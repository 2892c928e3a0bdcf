use docqa::ui::MarkdownRenderer;

fn plain(rendered: &str) -> String {
    let escape = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    escape.replace_all(rendered, "").into_owned()
}

#[test]
fn test_plain_text_passes_through() {
    let renderer = MarkdownRenderer::with_width(40);
    assert_eq!(renderer.render("Hello\nworld"), "Hello\nworld\n");
}

#[test]
fn test_heading_marker_is_removed() {
    let renderer = MarkdownRenderer::with_width(40);
    assert_eq!(plain(&renderer.render("## Summary")), "Summary\n");
    assert_eq!(plain(&renderer.render("#hashtag")), "#hashtag\n");
}

#[test]
fn test_code_block_is_framed() {
    let renderer = MarkdownRenderer::with_width(40);
    let rendered = plain(&renderer.render("Before\n```rust\nfn main() {}\n```\nAfter"));

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Before");
    assert!(lines[1].starts_with("┌─[rust]"));
    assert_eq!(lines[2], "fn main() {}");
    assert!(lines[3].starts_with('└'));
    assert_eq!(lines[4], "After");
}

#[test]
fn test_unterminated_code_block_is_closed() {
    let renderer = MarkdownRenderer::with_width(40);
    let rendered = plain(&renderer.render("```\nlet x = 1;"));

    assert!(rendered.starts_with("┌─[code]"));
    assert!(rendered.contains("let x = 1;"));
    assert!(rendered.trim_end().ends_with('─'));
}
