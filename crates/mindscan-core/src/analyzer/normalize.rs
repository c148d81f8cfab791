//! Text normalization shared by rule terms and analyzed text.

/// Normalizes text for matching.
///
/// Lowercases (Unicode-aware), folds typographic apostrophes to `'` and
/// collapses every run of whitespace into a single space. Leading and
/// trailing whitespace is dropped.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());

    for word in lower.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().map(fold_apostrophe));
    }

    out
}

fn fold_apostrophe(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_text() {
        assert_eq!(normalize("I Feel SAD"), "i feel sad");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  give \t\n up  "), "give up");
    }

    #[test]
    fn folds_curly_apostrophes() {
        assert_eq!(normalize("I can\u{2019}t stand it"), "i can't stand it");
        assert_eq!(normalize("don\u{02BC}t feel"), "don't feel");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(normalize("ÜBER Straße"), "über straße");
    }
}
