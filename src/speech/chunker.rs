//! Text segmentation for the hosted synthesis service
//!
//! The endpoint rejects long inputs, so text is split into chunks of at
//! most [`MAX_CHUNK_CHARS`] characters before upload. Splits prefer clause
//! punctuation, then word boundaries; only a single over-long word is ever
//! cut mid-token. Lengths are counted in characters, never bytes, so
//! multi-byte text is never split inside a code point.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum characters the synthesis endpoint accepts per request
pub const MAX_CHUNK_CHARS: usize = 100;

/// Clause boundaries where a split reads naturally
static CLAUSE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?;:,\n]+\s*").expect("clause break pattern"));

/// Split `text` into chunks of at most `max_chars` characters
///
/// Whitespace-only input yields no chunks.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for segment in clause_segments(text) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        if char_len(segment) > max_chars {
            flush(&mut chunks, &mut current);
            split_long_segment(segment, max_chars, &mut chunks);
            continue;
        }

        if !current.is_empty() && char_len(&current) + 1 + char_len(segment) > max_chars {
            flush(&mut chunks, &mut current);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(segment);
    }

    flush(&mut chunks, &mut current);
    chunks
}

/// Cut `text` at clause punctuation, keeping the punctuation with the
/// preceding clause
fn clause_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in CLAUSE_BREAK.find_iter(text) {
        segments.push(&text[last..m.end()]);
        last = m.end();
    }
    if last < text.len() {
        segments.push(&text[last..]);
    }

    segments
}

/// Break a single over-long clause at word boundaries
fn split_long_segment(segment: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut current = String::new();

    for word in segment.split_whitespace() {
        if char_len(word) > max_chars {
            flush(chunks, &mut current);
            hard_split(word, max_chars, chunks);
            continue;
        }

        if !current.is_empty() && char_len(&current) + 1 + char_len(word) > max_chars {
            flush(chunks, &mut current);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    flush(chunks, &mut current);
}

/// Last resort: cut a single word into fixed-size character runs
fn hard_split(word: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let chars: Vec<char> = word.chars().collect();
    for piece in chars.chunks(max_chars) {
        chunks.push(piece.iter().collect());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }
}
