// Character classification for business name text

/// Check whether a character belongs to the separator set that
/// normalization turns into a single space.
///
/// The set is `. , - _ ' " ! @ # $ % ^ & * ( ) + = [ ] { } | \ : ; < > ? / ~` and
/// the backtick.
pub fn is_name_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '-'
            | '_'
            | '\''
            | '"'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | '('
            | ')'
            | '+'
            | '='
            | '['
            | ']'
            | '{'
            | '}'
            | '|'
            | '\\'
            | ':'
            | ';'
            | '<'
            | '>'
            | '?'
            | '/'
            | '~'
            | '`'
    )
}

/// Check whether a character is whitespace.
///
/// Covers the ASCII control whitespace, the Latin-1 and general
/// punctuation spaces, and the line/paragraph separators that show up
/// in text scraped from HTML.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Check whether a character is removed or replaced by normalization.
pub fn is_separator(c: char) -> bool {
    is_whitespace(c) || is_name_punctuation(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_punctuation_set() {
        for c in ".,-_'\"!@#$%^&*()+=[]{}|\\:;<>?/~`".chars() {
            assert!(is_name_punctuation(c), "{c:?}");
        }
    }

    #[test]
    fn typographic_marks_are_kept() {
        // curly quotes, dashes and symbols outside the set survive
        assert!(!is_separator('\u{2019}'));
        assert!(!is_separator('\u{2013}'));
        assert!(!is_separator('\u{00A7}')); // §
    }

    #[test]
    fn whitespace_variants() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\u{00A0}')); // NO-BREAK SPACE
        assert!(!is_whitespace('_'));
    }

    #[test]
    fn separators() {
        assert!(is_separator(' '));
        assert!(is_separator('&'));
        assert!(is_separator('\u{3000}')); // IDEOGRAPHIC SPACE
        assert!(!is_separator('a'));
        assert!(!is_separator('7'));
    }
}
