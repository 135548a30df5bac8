//! Greedy word wrap against measured pixel widths.

use heapless::{String, Vec};

use crate::surface::TextMetrics;

/// Byte capacity of one wrapped line.
pub const LINE_BYTES: usize = 128;
/// Maximum number of lines a single wrap call can yield.
pub const MAX_WRAP_LINES: usize = 24;

pub type WrappedLines = Vec<String<LINE_BYTES>, MAX_WRAP_LINES>;

/// Single-pass, no-backtracking line breaking.
///
/// A space or newline commits the pending word: if the current line plus the
/// word (plus a trailing space) measures wider than `max_width`, the line is
/// emitted and the word starts the next one. An explicit newline always emits
/// the current line after trimming whitespace. A word that alone exceeds
/// `max_width` is never split mid-word. Empty input yields no lines.
pub fn word_wrap<M: TextMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    max_width: i32,
) -> WrappedLines {
    let mut lines = WrappedLines::new();
    if text.is_empty() {
        return lines;
    }

    let mut line: String<LINE_BYTES> = String::new();
    let mut word: String<LINE_BYTES> = String::new();

    for ch in text.chars() {
        if ch == ' ' || ch == '\n' {
            if !line.is_empty() && measure_joined(metrics, &line, &word, true) > max_width {
                push_line(&mut lines, line.as_str());
                line.clear();
            }
            append(&mut line, word.as_str());
            let _ = line.push(' ');
            word.clear();

            if ch == '\n' {
                push_line(&mut lines, line.trim());
                line.clear();
            }
        } else {
            let _ = word.push(ch);
        }
    }

    if !word.is_empty() {
        if !line.is_empty() && measure_joined(metrics, &line, &word, false) > max_width {
            push_line(&mut lines, line.as_str());
            line.clear();
        }
        append(&mut line, word.as_str());
    }

    if !line.is_empty() {
        push_line(&mut lines, line.trim());
    }

    lines
}

/// Width of `line + word [+ space]`, measured as one string so the metrics
/// implementation sees exactly what would be drawn.
fn measure_joined<M: TextMetrics + ?Sized>(
    metrics: &M,
    line: &str,
    word: &str,
    trailing_space: bool,
) -> i32 {
    let mut joined: String<{ 2 * LINE_BYTES }> = String::new();
    let _ = joined.push_str(line);
    let _ = joined.push_str(word);
    if trailing_space {
        let _ = joined.push(' ');
    }
    metrics.text_width(joined.as_str())
}

fn append(line: &mut String<LINE_BYTES>, word: &str) {
    for ch in word.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
}

fn push_line(lines: &mut WrappedLines, text: &str) {
    let mut owned: String<LINE_BYTES> = String::new();
    let _ = owned.push_str(text);
    let _ = lines.push(owned);
}
