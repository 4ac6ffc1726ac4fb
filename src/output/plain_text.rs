//! Markdown to plain text conversion
//!
//! A fixed sequence of whole-document regex rewrites. Order matters: the
//! double-emphasis passes run before the single-emphasis ones, and fenced
//! code blocks are dropped before inline code is unwrapped.

use once_cell::sync::Lazy;
use regex::Regex;

struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

fn rewrite(pattern: &str, replacement: &'static str) -> Rewrite {
    Rewrite {
        pattern: Regex::new(pattern).unwrap(),
        replacement,
    }
}

static REWRITES: Lazy<Vec<Rewrite>> = Lazy::new(|| {
    vec![
        // headers
        rewrite(r"(?m)^#{1,6}\s+", ""),
        // emphasis
        rewrite(r"\*\*(.*?)\*\*", "${1}"),
        rewrite(r"__(.*?)__", "${1}"),
        rewrite(r"\*(.*?)\*", "${1}"),
        rewrite(r"_(.*?)_", "${1}"),
        // code
        rewrite(r"```[\s\S]*?```", ""),
        rewrite(r"`(.*?)`", "${1}"),
        // links, then images
        rewrite(r"\[([^\]]+)\]\([^\)]+\)", "${1}"),
        rewrite(r"!\[([^\]]*)\]\([^\)]+\)", "${1}"),
        // lists
        rewrite(r"(?m)^[\s]*[-\*\+]\s+", "• "),
        rewrite(r"(?m)^[\s]*\d+\.\s+", ""),
        // horizontal rules
        rewrite(r"(?m)^[\s]*[-=]{3,}[\s]*$", ""),
        rewrite(r"\n{3,}", "\n\n"),
    ]
});

/// Convert a markdown document to plain text
pub fn markdown_to_text(markdown: &str) -> String {
    let text = REWRITES.iter().fold(markdown.to_string(), |text, step| {
        step.pattern
            .replace_all(&text, step.replacement)
            .into_owned()
    });
    text.trim().to_string()
}
