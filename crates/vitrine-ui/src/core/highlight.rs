//! Split a label into matched and unmatched runs for search highlighting.

use serde::Serialize;

/// Run of text, marked when it matches the search term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Original text of the run.
    pub text: String,
    /// Whether the run matches the search term.
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` around every case-insensitive, non-overlapping occurrence of `needle`.
///
/// A blank needle yields the whole text unmatched; any other needle is matched
/// as given, surrounding spaces included.
/// Joining the segments always gives back `text`.
#[must_use]
pub fn highlight(text: &str, needle: &str) -> Vec<Segment> {
    if needle.trim().is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;
    while cursor < text.len() {
        if let Some(len) = match_len(&text[cursor..], &needle) {
            if plain_start < cursor {
                segments.push(Segment::plain(&text[plain_start..cursor]));
            }
            segments.push(Segment::marked(&text[cursor..cursor + len]));
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `haystack` matching `needle` (already lowercased).
fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn marks_every_occurrence_ignoring_case() {
        assert_eq!(render(&highlight("Banana", "an")), "B[an][an]a");
        assert_eq!(render(&highlight("Paris", "PAR")), "[Par]is");
        assert_eq!(render(&highlight("Lyon", "x")), "Lyon");
    }

    #[test]
    fn needles_keep_their_surrounding_spaces() {
        assert_eq!(render(&highlight("Le Mans", "le ")), "[Le ]Mans");
        assert_eq!(render(&highlight("Marseille", "le ")), "Marseille");
    }

    #[test]
    fn blank_needles_leave_text_untouched() {
        assert_eq!(highlight("Nice", "  "), vec![Segment::plain("Nice")]);
        assert_eq!(highlight("", "a"), vec![Segment::plain("")]);
    }

    #[test]
    fn segments_rebuild_the_original_text() {
        for (text, needle) in [("Saint-Étienne", "éti"), ("aaaa", "aa"), ("Évry", "É")] {
            let joined: String = highlight(text, needle)
                .into_iter()
                .map(|s| s.text)
                .collect();
            assert_eq!(joined, text);
        }
        assert_eq!(render(&highlight("Saint-Étienne", "éti")), "Saint-[Éti]enne");
        assert_eq!(render(&highlight("aaaa", "aa")), "[aa][aa]");
    }
}
