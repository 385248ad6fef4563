//! Terminal front end
//!
//! Renders the status panel and surfaces notifications. The terminal runs
//! in raw mode for the whole session, so every line break is an explicit
//! `\r\n` and prompts flush without a newline.

use crate::speech::VoiceDescriptor;
use crate::state::State;
use crate::term;
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use unicode_width::UnicodeWidthChar;

/// Draw the status panel: text preview, voice, rate, last saved path
pub fn draw_screen(state: &State) {
    let cols = usize::from(term::terminal_width(io::stdout().as_raw_fd()));

    let text = &state.session.text;
    let preview = if text.is_empty() {
        "(empty)".to_string()
    } else {
        // First line only; the panel is a summary, not an editor
        truncate_display(text.lines().next().unwrap_or(""), cols.saturating_sub(20))
    };
    let lines = text.lines().count();
    let chars = text.chars().count();

    let voice = if state.session.voice_name.is_empty() {
        "(engine default)".to_string()
    } else {
        state.session.voice_name.clone()
    };

    let saved = match &state.session.last_saved {
        Some(path) => path.display().to_string(),
        None => "(none)".to_string(),
    };

    print!("\r\n");
    print!("Text to Speech Converter {}\r\n", crate::VERSION);
    print!("text:  {}  ({} lines, {} chars)\r\n", preview, lines, chars);
    print!("voice: {}\r\n", voice);
    print!("rate:  {} wpm\r\n", state.session.rate);
    print!("saved: {}\r\n", saved);
    print!("keys:  s speak  w save  p play  t text  a append  y paste  c clear  v voice  r rate  h help  q quit\r\n");
    let _ = io::stdout().flush();
}

/// Print the key help summary
pub fn print_help() {
    print!("\r\n");
    print!("t  enter text (replaces the buffer)\r\n");
    print!("a  append a line to the buffer\r\n");
    print!("y  paste text from the clipboard\r\n");
    print!("c  clear the buffer\r\n");
    print!("v  choose a voice\r\n");
    print!("r  set speech rate (50-300 words per minute)\r\n");
    print!("s  speak the text aloud\r\n");
    print!("w  save the text as an MP3 file (needs network)\r\n");
    print!("p  play the last saved file\r\n");
    print!("q  quit\r\n");
    print!("During line entry: Enter accepts, Escape cancels, Backspace edits.\r\n");
    let _ = io::stdout().flush();
}

/// Print the numbered voice menu
pub fn print_voice_menu(voices: &[VoiceDescriptor], current: &str) {
    print!("\r\n");
    for (i, voice) in voices.iter().enumerate() {
        let marker = if voice.name == current { "*" } else { " " };
        print!("{} {:>3}. {}\r\n", marker, i + 1, voice.name);
    }
    let _ = io::stdout().flush();
}

/// Surface a success/status notification
pub fn notify_info(message: &str) {
    print!("\r\nNotice: {}\r\n", message.replace('\n', "\r\n"));
    let _ = io::stdout().flush();
}

/// Surface an error notification
pub fn notify_error(message: &str) {
    print!("\r\nError: {}\r\n", message.replace('\n', "\r\n"));
    let _ = io::stdout().flush();
}

/// Open a line-input prompt (no trailing newline)
pub fn prompt(label: &str) {
    print!("\r\n{}: ", label);
    let _ = io::stdout().flush();
}

/// Close a line-input prompt
pub fn end_prompt() {
    print!("\r\n");
    let _ = io::stdout().flush();
}

/// Echo typed characters during line input
pub fn echo(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

/// Erase the last echoed character during line input
pub fn echo_backspace() {
    print!("\x08 \x08");
    let _ = io::stdout().flush();
}

/// Truncate `text` to at most `max_cols` display columns, appending "..."
/// when anything was cut
fn truncate_display(text: &str, max_cols: usize) -> String {
    let total: usize = text
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    if total <= max_cols {
        return text.to_string();
    }

    let budget = max_cols.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}
