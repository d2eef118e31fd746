use regex::Regex;
use std::sync::OnceLock;

fn sentence_boundary() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("valid sentence pattern"))
}

/// Split text into batches of at most `max_chars` characters.
///
/// Batches break at sentence boundaries where possible, then at word
/// boundaries, and only cut inside a word when a single word is longer than
/// `max_chars`. Whitespace between pieces is collapsed to one space.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() || max_chars == 0 {
        return Vec::new();
    }
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();

    for sentence in sentences(text) {
        for piece in fit_piece(sentence, max_chars) {
            push_piece(&mut batches, &mut current_batch, &piece, max_chars);
        }
    }

    if !current_batch.is_empty() {
        batches.push(current_batch);
    }

    batches
}

/// Sentences of `text`, punctuation kept, surrounding whitespace removed
fn sentences(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut last_end = 0;

    for mat in sentence_boundary().find_iter(text) {
        result.push(text[last_end..mat.end()].trim());
        last_end = mat.end();
    }
    if last_end < text.len() {
        result.push(text[last_end..].trim());
    }

    result.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Break a sentence that is too long into word groups, and words that are
/// too long into raw character chunks
fn fit_piece(sentence: &str, max_chars: usize) -> Vec<String> {
    if sentence.chars().count() <= max_chars {
        return vec![sentence.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > max_chars {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                pieces.push(chunk.iter().collect());
            }
            continue;
        }

        push_piece(&mut pieces, &mut current, word, max_chars);
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Append `piece` to `current`, flushing `current` into `out` first when the
/// combined length would exceed `max_chars`
fn push_piece(out: &mut Vec<String>, current: &mut String, piece: &str, max_chars: usize) {
    let current_len = current.chars().count();
    let piece_len = piece.chars().count();

    if !current.is_empty() && current_len + 1 + piece_len > max_chars {
        out.push(std::mem::take(current));
    }
    if !current.is_empty() {
        current.push(' ');
    }
    current.push_str(piece);
}
