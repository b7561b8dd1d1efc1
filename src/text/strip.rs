//! Boilerplate stripping for Project Gutenberg texts
//!
//! Every Gutenberg plain-text file is framed by a license header and footer.
//! The body is located with fixed marker strings: the content starts on the
//! line after the first start marker and stops right before the first end
//! marker.

/// Start markers, in priority order
pub const START_MARKERS: &[&str] = &[
    "*** START OF THIS PROJECT GUTENBERG",
    "*** START OF THE PROJECT GUTENBERG",
    "*END*THE SMALL PRINT",
];

/// End markers, in priority order
pub const END_MARKERS: &[&str] = &[
    "*** END OF THIS PROJECT GUTENBERG",
    "*** END OF THE PROJECT GUTENBERG",
    "End of the Project Gutenberg",
    "End of Project Gutenberg",
];

/// Strips the Gutenberg header and footer using the built-in markers
///
/// Texts without markers are returned unchanged.
///
/// # Example
///
/// ```
/// use gutenberg_freq::strip_boilerplate;
///
/// let raw = "license\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\nbody\n*** END OF THE PROJECT GUTENBERG EBOOK X ***";
/// assert_eq!(strip_boilerplate(raw), "body\n");
/// ```
pub fn strip_boilerplate(text: &str) -> &str {
    strip_with_markers(text, START_MARKERS, END_MARKERS)
}

/// Strips `text` down to the region between the given markers
///
/// The start and end searches are independent. Each picks the first marker,
/// in list order, that occurs anywhere in the text. When the detected end lies
/// before the detected start the result is empty.
///
/// A start marker on the last line with no trailing newline also yields an
/// empty result, since there is no following line to start from. This differs
/// from the older `find('\n') + 1` behaviour, where the failed search wrapped
/// to offset 0 and the whole text was kept, license header included.
pub fn strip_with_markers<'a>(text: &'a str, start_markers: &[&str], end_markers: &[&str]) -> &'a str {
    let start = content_start(text, start_markers);
    let end = content_end(text, end_markers);

    if end < start {
        return "";
    }
    &text[start..end]
}

/// Offset of the line following the first matching start marker
fn content_start(text: &str, markers: &[&str]) -> usize {
    let Some(idx) = markers.iter().find_map(|m| text.find(m)) else {
        return 0;
    };

    // Unterminated marker line: nothing follows, so content starts at the end
    // rather than wrapping back to offset 0.
    match text[idx..].find('\n') {
        Some(newline) => idx + newline + 1,
        None => text.len(),
    }
}

/// Offset of the first matching end marker
fn content_end(text: &str, markers: &[&str]) -> usize {
    markers
        .iter()
        .find_map(|m| text.find(m))
        .unwrap_or(text.len())
}
