//! Markdown to plain text conversion of whole documents

use readmegen::markdown_to_text;

const README: &str = "# Demo

A tool for **fast** scans.

## Install

```sh
cargo install demo
```

## Usage

- Run `demo`
- See [docs](https://example.com)

---

MIT";

#[test]
fn test_inline_markup_example() {
    assert_eq!(
        markdown_to_text("## Title\n**Bold** and *italic* and `code`"),
        "Title\nBold and italic and code"
    );
}

#[test]
fn test_full_readme() {
    let text = markdown_to_text(README);

    assert_eq!(
        text,
        "Demo\n\nA tool for fast scans.\n\nInstall\n\nUsage\n• Run demo\n• See docs\n\nMIT"
    );
    assert!(!text.contains("cargo install"));
    assert!(!text.contains("https://"));
}

#[test]
fn test_converted_output_is_stable() {
    let once = markdown_to_text(README);
    assert_eq!(markdown_to_text(&once), once);
}

#[test]
fn test_no_triple_newlines_survive() {
    let text = markdown_to_text("one\n\n\n\n\ntwo\n\n\n\nthree");
    assert_eq!(text, "one\n\ntwo\n\nthree");
}

#[test]
fn test_empty_document() {
    assert_eq!(markdown_to_text(""), "");
    assert_eq!(markdown_to_text("\n\n   \n"), "");
}
