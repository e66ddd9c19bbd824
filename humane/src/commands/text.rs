use super::Rendered;
use crate::context::AppContext;
use crate::format::{self, OutputFormat};
use std::io::{self, BufRead};

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

/// Text transforms exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// English title case
    Title,
    /// Bind the last two words with a non-breaking space
    Widont,
    /// URL slug
    Slug,
}

impl Transform {
    /// Apply the transform to one piece of text
    pub fn apply(self, ctx: &AppContext, input: &str) -> String {
        let humane = ctx.humane();
        match self {
            Transform::Title => humane.title_case(input),
            Transform::Widont => humane.widont(input),
            Transform::Slug => humane.slugged(input),
        }
    }
}

/// Transform each input, treating the words given on the command line as one text
pub fn render_text(ctx: &AppContext, transform: Transform, words: &[String]) -> Rendered {
    let input = words.join(" ");
    let output = transform.apply(ctx, &input);
    Rendered::new(input, output)
}

/// Transform every line read from `reader`
pub fn render_lines<R: BufRead>(
    ctx: &AppContext,
    transform: Transform,
    reader: R,
) -> io::Result<Vec<Rendered>> {
    reader
        .lines()
        .map(|line| {
            line.map(|input| {
                let output = transform.apply(ctx, &input);
                Rendered::new(input, output)
            })
        })
        .collect()
}

/// Handle the title, widont and slug subcommands
///
/// With no words on the command line, each line of stdin is transformed.
pub fn handle_text(ctx: &AppContext, transform: Transform, words: &[String], fmt: OutputFormat) {
    if !words.is_empty() {
        format::emit(ctx, &render_text(ctx, transform, words), fmt);
        return;
    }

    match render_lines(ctx, transform, io::stdin().lock()) {
        Ok(rendered) => format::emit_vec(ctx, &rendered, fmt),
        Err(e) => format::fail(ctx, &format!("reading stdin: {}", e)),
    }
}
