//! Parser for the delimiter-separated classification reply
//!
//! The classify call is asked to answer as `<INTRO>*&$<CODE>!@^<OTHER>`.
//! This module recovers the three fields, falling back to a fixed intro
//! when the reply does not follow the layout.

use crate::llm::prompts::markers::{DELIMITER_A, DELIMITER_B};
use crate::llm::prompts::PARSE_FAILURE_INTRO;

/// The three panels of a classified reply
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifiedResponse {
    /// Short introduction, displayed and spoken
    pub intro: String,

    /// Program or code content
    pub code: String,

    /// Everything that is neither spoken nor code
    pub other: String,

    /// Whether the reply followed the delimiter layout
    pub parsed: bool,
}

impl ClassifiedResponse {
    /// Create a response from three already-split fields
    pub fn new(intro: impl Into<String>, code: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
            code: code.into(),
            other: other.into(),
            parsed: true,
        }
    }

    /// Response for text that did not follow the layout
    pub fn unparsed(text: impl Into<String>) -> Self {
        Self {
            intro: PARSE_FAILURE_INTRO.to_string(),
            code: String::new(),
            other: text.into(),
            parsed: false,
        }
    }

    /// Whether the reply was split successfully
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }
}

/// Split a classified reply into intro, code and other
///
/// Splits on the first `*&$`, then splits what follows on the first
/// `!@^`. Each field is trimmed. If either split finds no delimiter the
/// whole text lands in `other`, unchanged, with the failure intro.
pub fn parse_classified(text: &str) -> ClassifiedResponse {
    let Some((intro, remainder)) = text.split_once(DELIMITER_A) else {
        return ClassifiedResponse::unparsed(text);
    };

    // A `!@^` that only occurs before `*&$` does not count
    let Some((code, other)) = remainder.split_once(DELIMITER_B) else {
        return ClassifiedResponse::unparsed(text);
    };

    ClassifiedResponse::new(intro.trim(), code.trim(), other.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let response = parse_classified("Hi*&$print('hi')!@^done");
        assert_eq!(response.intro, "Hi");
        assert_eq!(response.code, "print('hi')");
        assert_eq!(response.other, "done");
        assert!(response.is_parsed());
    }

    #[test]
    fn test_parse_trims_each_field() {
        let response = parse_classified("  Hello!  \n*&$\nfn main() {}\n!@^\n  Notes here \n");
        assert_eq!(response.intro, "Hello!");
        assert_eq!(response.code, "fn main() {}");
        assert_eq!(response.other, "Notes here");
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let response = parse_classified("Intro*&$def f():\n    return 1\n!@^a  b");
        assert_eq!(response.code, "def f():\n    return 1");
        assert_eq!(response.other, "a  b");
    }

    #[test]
    fn test_parse_empty_fields() {
        let response = parse_classified("Just an intro*&$!@^");
        assert_eq!(response.intro, "Just an intro");
        assert_eq!(response.code, "");
        assert_eq!(response.other, "");
    }

    #[test]
    fn test_parse_splits_on_first_occurrence() {
        let response = parse_classified("a*&$b!@^c*&$d!@^e");
        assert_eq!(response.intro, "a");
        assert_eq!(response.code, "b");
        assert_eq!(response.other, "c*&$d!@^e");
    }

    #[test]
    fn test_parse_without_delimiters() {
        let response = parse_classified("just text");
        assert_eq!(response.intro, PARSE_FAILURE_INTRO);
        assert_eq!(response.code, "");
        assert_eq!(response.other, "just text");
        assert!(!response.is_parsed());
    }

    #[test]
    fn test_parse_missing_second_delimiter() {
        let text = "intro*&$code without other";
        assert_eq!(parse_classified(text), ClassifiedResponse::unparsed(text));
    }

    #[test]
    fn test_parse_missing_first_delimiter() {
        let text = "intro code!@^other";
        assert_eq!(parse_classified(text), ClassifiedResponse::unparsed(text));
    }

    #[test]
    fn test_parse_delimiters_out_of_order() {
        let text = "other!@^code*&$intro";
        assert_eq!(parse_classified(text), ClassifiedResponse::unparsed(text));
    }

    #[test]
    fn test_fallback_keeps_text_unchanged() {
        let text = "  padded \n";
        assert_eq!(parse_classified(text).other, text);
    }

    #[test]
    fn test_error_strings_fall_back() {
        let response = parse_classified("API call failed: connection refused");
        assert_eq!(response.intro, PARSE_FAILURE_INTRO);
        assert_eq!(response.code, "");
        assert_eq!(response.other, "API call failed: connection refused");
    }

    #[test]
    fn test_no_characters_lost_outside_delimiters() {
        let intro = "One";
        let code = "let x = 1;";
        let other = "Three words here";
        let response = parse_classified(&format!("{intro}*&${code}!@^{other}"));
        assert_eq!(
            format!("{}{}{}", response.intro, response.code, response.other),
            format!("{intro}{code}{other}")
        );
    }
}
