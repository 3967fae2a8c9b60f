/// Search-term highlighting for card titles
use iced::font::{self, Font};
use iced::widget::text::Span;
use iced::widget::{rich_text, span};
use iced::Element;

use crate::Message;

/// A run of the display string, emphasized when it equals the search term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Split `text` on case-insensitive, non-overlapping occurrences of `term`.
///
/// The term is matched literally. An empty term yields the text unsplit.
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    // Lowercase the term as a whole, the same way the search filter does
    let needle: Vec<char> = term.to_lowercase().chars().map(fold_sigma).collect();
    let mut segments = Vec::new();

    if needle.is_empty() {
        if !text.is_empty() {
            segments.push(Segment { text, emphasized: false });
        }
        return segments;
    }

    let mut plain_start = 0;
    let mut cursor = 0;
    while cursor < text.len() {
        if let Some(len) = match_len(&text[cursor..], &needle) {
            if plain_start < cursor {
                segments.push(Segment {
                    text: &text[plain_start..cursor],
                    emphasized: false,
                });
            }
            segments.push(Segment {
                text: &text[cursor..cursor + len],
                emphasized: true,
            });
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            emphasized: false,
        });
    }
    segments
}

/// Byte length of the prefix of `rest` that lowercases to `needle`
fn match_len(rest: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in rest.char_indices() {
        for lower in ch.to_lowercase().map(fold_sigma) {
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

/// Word-final sigma depends on context in whole-string lowercasing but not
/// per character, so both forms compare equal here
fn fold_sigma(ch: char) -> char {
    if ch == 'ς' {
        'σ'
    } else {
        ch
    }
}

/// Render `text` with occurrences of `term` in bold
pub fn highlighted<'a>(text: &'a str, term: &str, size: u16) -> Element<'a, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    let spans: Vec<Span<'a, Message>> = highlight(text, term)
        .into_iter()
        .map(|segment| {
            let part = span(segment.text).size(size);
            if segment.emphasized {
                part.font(bold)
            } else {
                part
            }
        })
        .collect();

    rich_text(spans).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| if s.emphasized { format!("[{}]", s.text) } else { s.text.to_string() })
            .collect()
    }

    #[test]
    fn test_suffix_match() {
        assert_eq!(render(&highlight("Backpack", "pack")), "Back[pack]");
    }

    #[test]
    fn test_case_insensitive_keeps_original_casing() {
        assert_eq!(render(&highlight("Red Shirt", "RED")), "[Red] Shirt");
    }

    #[test]
    fn test_multiple_occurrences_non_overlapping() {
        assert_eq!(render(&highlight("aaa", "aa")), "[aa]a");
        assert_eq!(render(&highlight("Pack a pack", "pack")), "[Pack] a [pack]");
    }

    #[test]
    fn test_empty_term_is_plain() {
        let segments = highlight("Blue Hat", "");
        assert_eq!(segments, vec![Segment { text: "Blue Hat", emphasized: false }]);
        assert!(highlight("", "").is_empty());
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        assert_eq!(render(&highlight("Size (XL) shirt", "(xl)")), "Size [(XL)] shirt");
        assert_eq!(render(&highlight("abc", ".")), "abc");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(render(&highlight("Café Crème", "CRÈ")), "Café [Crè]me");
    }

    #[test]
    fn test_final_sigma_highlighted_when_search_matches() {
        let search = crate::state::filter::SearchText::new("ΟΔΟΣ");
        assert!(search.matches("ΟΔΟΣ ΚΑΙ ΔΡΟΜΟΣ"));
        assert_eq!(
            render(&highlight("ΟΔΟΣ ΚΑΙ ΔΡΟΜΟΣ", search.as_str())),
            "[ΟΔΟΣ] ΚΑΙ ΔΡΟΜΟΣ"
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(render(&highlight("Blue Hat", "shirt")), "Blue Hat");
    }
}
