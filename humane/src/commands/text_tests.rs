use super::*;
use crate::context::VerbosityLevel;
use std::io::Cursor;

fn test_context() -> AppContext {
    AppContext {
        config: crate::config::Config::default(),
        verbosity: VerbosityLevel::Normal,
    }
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

#[test]
fn test_render_title_joins_words() {
    let ctx = test_context();
    let rendered = render_text(&ctx, Transform::Title, &words("the lord of the rings"));
    assert_eq!(rendered.input, "the lord of the rings");
    assert_eq!(rendered.output, "The Lord of the Rings");
}

#[test]
fn test_render_widont() {
    let ctx = test_context();
    let rendered = render_text(&ctx, Transform::Widont, &words("Hello big world"));
    assert_eq!(rendered.output, "Hello big&nbsp;world");
}

#[test]
fn test_render_slug() {
    let ctx = test_context();
    let rendered = render_text(&ctx, Transform::Slug, &words("Hello, World!"));
    assert_eq!(rendered.output, "hello-world");
}

#[test]
fn test_render_lines_transforms_each_line() {
    let ctx = test_context();
    let input = Cursor::new("Hello, World!\nRust & You\n");
    let rendered = render_lines(&ctx, Transform::Slug, input).unwrap();
    assert_eq!(
        rendered,
        vec![
            Rendered::new("Hello, World!", "hello-world"),
            Rendered::new("Rust & You", "rust-you"),
        ]
    );
}

#[test]
fn test_render_lines_empty_input() {
    let ctx = test_context();
    let rendered = render_lines(&ctx, Transform::Title, Cursor::new("")).unwrap();
    assert!(rendered.is_empty());
}
