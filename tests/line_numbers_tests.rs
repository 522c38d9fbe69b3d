// Host-side tests for code block line counting.

use enhance_core::line_numbers::*;
use std::cell::RefCell;

#[test]
fn trailing_newline_is_not_a_line() {
    assert_eq!(gutter_text("a\nb\nc\n").as_deref(), Some("1\n2\n3"));
}

#[test]
fn single_line_block_gets_no_gutter() {
    assert_eq!(gutter_text("print('hi')"), None);
    assert_eq!(gutter_text("print('hi')\n"), None);
}

#[test]
fn windows_line_endings_are_normalised() {
    assert_eq!(gutter_text("x = 1\r\ny = 2\r\n").as_deref(), Some("1\n2"));
}

#[test]
fn interior_blank_lines_count() {
    assert_eq!(line_count("fn main() {\n\n}\n"), 3);
}

#[test]
fn gutter_is_stable_for_same_text() {
    let text = "a\nb\n";
    assert_eq!(gutter_text(text), gutter_text(text));
}

#[test]
fn selectors_describe_decoration_state() {
    assert!(UNDECORATED_SELECTOR.contains(DECORATED_CLASS));
    assert!(ALREADY_NUMBERED_SELECTOR.contains(&format!(".{}", GUTTER_CLASS)));
    assert_eq!(CODE_BLOCK_SELECTOR, format!(".{}", CODE_BLOCK_CLASS));
}

#[test]
fn gutter_does_not_intercept_pointer() {
    let css = gutter_css();
    assert!(css.contains("pointer-events: none"));
    assert!(css.contains("user-select: none"));
    assert!(css.contains("white-space: pre"));
}

/// Code block stand-in that records attached gutters.
struct FakeBlock {
    highlighter_numbered: bool,
    text: Option<&'static str>,
    gutters: RefCell<Vec<String>>,
    fail: bool,
}

impl FakeBlock {
    fn new(text: Option<&'static str>) -> Self {
        Self {
            highlighter_numbered: false,
            text,
            gutters: RefCell::new(Vec::new()),
            fail: false,
        }
    }
}

impl CodeBlock for FakeBlock {
    type Error = &'static str;

    fn is_numbered(&self) -> bool {
        self.highlighter_numbered || !self.gutters.borrow().is_empty()
    }
    fn code_text(&self) -> Option<String> {
        self.text.map(str::to_string)
    }
    fn attach_gutter(&self, content: &str) -> Result<(), Self::Error> {
        if self.fail {
            return Err("detached");
        }
        self.gutters.borrow_mut().push(content.to_string());
        Ok(())
    }
}

#[test]
fn should_decorate_skips_numbered_empty_and_single_line_blocks() {
    assert_eq!(should_decorate(true, Some("a\nb\n")), None);
    assert_eq!(should_decorate(false, None), None);
    assert_eq!(should_decorate(false, Some("one line\n")), None);
    assert_eq!(should_decorate(false, Some("a\nb\n")).as_deref(), Some("1\n2"));
}

#[test]
fn decorating_twice_adds_one_gutter() {
    let block = FakeBlock::new(Some("a\nb\nc\n"));
    assert!(decorate(&block));
    // The observer can report a block the initial pass already handled.
    assert!(!decorate(&block));
    assert_eq!(*block.gutters.borrow(), vec!["1\n2\n3".to_string()]);
}

#[test]
fn highlighter_numbering_is_left_alone() {
    let block = FakeBlock {
        highlighter_numbered: true,
        ..FakeBlock::new(Some("a\nb\n"))
    };
    assert!(!decorate(&block));
    assert!(block.gutters.borrow().is_empty());
}

#[test]
fn block_without_pre_is_skipped() {
    let block = FakeBlock::new(None);
    assert!(!decorate(&block));
}

#[test]
fn failed_attach_reports_undecorated() {
    let block = FakeBlock {
        fail: true,
        ..FakeBlock::new(Some("a\nb\n"))
    };
    assert!(!decorate(&block));
    assert!(!block.is_numbered());
}
