pub const CODE_BLOCK_CLASS: &str = "highlight";
pub const DECORATED_CLASS: &str = "has-line-numbers";
pub const GUTTER_CLASS: &str = "line-numbers";
pub const CODE_BLOCK_SELECTOR: &str = ".highlight";
pub const UNDECORATED_SELECTOR: &str = ".highlight:not(.has-line-numbers)";
/// Markup that means a block already carries numbering of some kind.
pub const ALREADY_NUMBERED_SELECTOR: &str =
    ".linenodiv, .linenos, table.highlighttable, .line-numbers";

/// Number of displayed lines in `text`.
///
/// Line endings are normalised first. A single trailing blank line (the
/// newline most code blocks end with) is not counted.
pub fn line_count(text: &str) -> usize {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<&str> = normalized.split('\n').collect();
    if lines.len() > 1 && lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines.len()
}

/// Gutter content for `text`, or `None` when the block is a single line.
pub fn gutter_text(text: &str) -> Option<String> {
    let n = line_count(text);
    if n <= 1 {
        return None;
    }
    let numbers: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    Some(numbers.join("\n"))
}

/// Gutter content for a block, or `None` when it must be left alone: it
/// already carries numbering, has no code text, or holds a single line.
pub fn should_decorate(already_numbered: bool, text: Option<&str>) -> Option<String> {
    if already_numbered {
        return None;
    }
    gutter_text(text?)
}

/// The DOM operations decoration needs from a code block.
pub trait CodeBlock {
    type Error: std::fmt::Debug;

    /// Decorated by us earlier, or numbered by the highlighter.
    fn is_numbered(&self) -> bool;
    /// Text of the block's code, `None` when it has no `<pre>`.
    fn code_text(&self) -> Option<String>;
    /// Insert the gutter and mark the block as decorated.
    fn attach_gutter(&self, content: &str) -> Result<(), Self::Error>;
}

/// Add a line-number gutter to `block`. Returns true if a gutter was added;
/// calling it again on the same block does nothing.
pub fn decorate<B: CodeBlock>(block: &B) -> bool {
    let text = block.code_text();
    let Some(content) = should_decorate(block.is_numbered(), text.as_deref()) else {
        return false;
    };
    match block.attach_gutter(&content) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[lines] gutter not attached: {:?}", e);
            false
        }
    }
}

pub fn gutter_css() -> &'static str {
    "position: absolute; left: 0; top: 0; width: 3.5rem; height: 100%; \
     background: rgba(13, 17, 23, 0.9); border-right: 2px solid rgba(199,0,11, 0.3); \
     padding: 1.5rem 0.5rem; font-size: 12px; line-height: 1.4; color: #7d8590; \
     text-align: right; user-select: none; pointer-events: none; z-index: 1; \
     overflow: hidden; font-family: 'Consolas', 'Monaco', 'Lucida Console', \
     'Liberation Mono', 'DejaVu Sans Mono', 'Bitstream Vera Sans Mono', 'Courier New', monospace; \
     white-space: pre; box-sizing: border-box;"
}
