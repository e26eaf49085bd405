//! Greedy word wrap.
//!
//! Each embedded line break starts a new paragraph. Within a paragraph, words
//! are packed onto a line while the line still fits `max_width`; the next word
//! that does not fit starts a new line. Runs of whitespace collapse to a single
//! space. A blank paragraph becomes an empty line.
//!
//! Words are never split, with one exception: a single word wider than
//! `max_width` on its own is cut at character boundaries, because no placement
//! of it would otherwise fit.

/// Wraps `text` so that `measure(line) <= max_width` for every returned line.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        wrap_paragraph(paragraph, max_width, &measure, &mut lines);
    }
    lines
}

fn wrap_paragraph<F>(paragraph: &str, max_width: f32, measure: &F, out: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    let mut current = String::new();
    let mut any_word = false;

    for word in paragraph.split_whitespace() {
        any_word = true;

        if current.is_empty() {
            current = fit_word(word, max_width, measure, out);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            out.push(std::mem::take(&mut current));
            current = fit_word(word, max_width, measure, out);
        }
    }

    if !current.is_empty() {
        out.push(current);
    } else if !any_word {
        out.push(String::new());
    }
}

/// Returns the word itself when it fits; otherwise pushes full-width chunks
/// to `out` and returns the trailing remainder.
fn fit_word<F>(word: &str, max_width: f32, measure: &F, out: &mut Vec<String>) -> String
where
    F: Fn(&str) -> f32,
{
    if measure(word) <= max_width {
        return word.to_string();
    }

    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if measure(&chunk) > max_width && chunk.chars().count() > 1 {
            chunk.pop();
            out.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}

#[cfg(test)]
mod tests {
    use super::*;

    // One unit per char keeps the expectations readable.
    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_packs_words_greedily() {
        let lines = wrap_text("the quick brown fox jumps", 10.0, chars);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_never_exceeds_width() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do";
        for width in 5..30 {
            for line in wrap_text(text, width as f32, chars) {
                assert!(chars(&line) <= width as f32, "{:?} at {}", line, width);
            }
        }
    }

    #[test]
    fn test_rejoin_reconstructs_normalized_text() {
        let text = "  alpha   beta\tgamma delta  epsilon ";
        let lines = wrap_text(text, 11.0, chars);
        assert_eq!(lines.join(" "), "alpha beta gamma delta epsilon");
    }

    #[test]
    fn test_embedded_line_breaks_start_new_lines() {
        let lines = wrap_text("first line\nsecond\n\nfourth", 100.0, chars);
        assert_eq!(lines, vec!["first line", "second", "", "fourth"]);
    }

    #[test]
    fn test_crlf_is_a_line_break() {
        let lines = wrap_text("one\r\ntwo", 100.0, chars);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_empty_content_has_no_lines() {
        assert!(wrap_text("   \n  ", 10.0, chars).is_empty());
    }

    #[test]
    fn test_overlong_word_is_cut() {
        let lines = wrap_text("ab abcdefghij cd", 4.0, chars);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij", "cd"]);
    }

    #[test]
    fn test_word_exactly_at_width_fits() {
        let lines = wrap_text("abcd ef", 4.0, chars);
        assert_eq!(lines, vec!["abcd", "ef"]);
    }
}
