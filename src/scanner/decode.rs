//! Best-effort text decoding for file contents
//!
//! Files are read as raw bytes and turned into text without ever failing.
//! This is lossy on purpose: byte sequences that are not valid UTF-8 are
//! dropped from the output, so a non-UTF-8 file comes back with only its
//! decodable parts. Line endings are translated the way text-mode reads do,
//! `\r\n` and lone `\r` both become `\n`.

/// Decode bytes as UTF-8, dropping invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode file bytes into the text stored on a file node.
pub fn decode_text(bytes: &[u8]) -> String {
    normalize_newlines(&decode_lossy(bytes))
}
