//! Classification prompt and delimiter definitions

use crate::llm::prompts::markers::{DELIMITER_A, DELIMITER_B};

/// Intro shown (and spoken) when the classified reply cannot be split
pub const PARSE_FAILURE_INTRO: &str = "Could not parse result.";

/// Instruction prepended to the generated answer for the classify call
pub const CLASSIFY_INSTRUCTION: &str = r#"You have to split the following text into the following categories in this format:
1st category is the intro or mostly the first line of the text and it is to be spoken
2nd category is the program or code content in the text
3rd category is to give all other content in the text that is not spoken or code content
and all these categories should be given in the following format (EXACTLY THIS FORMAT):
<INTRO>*&$<CODE>!@^<OTHER>
Text: "#;

/// Build the prompt for the classify call
///
/// The instruction is followed by the trimmed generated text. Nothing in
/// the generated text is escaped, so delimiters it already contains reach
/// the model unchanged.
pub fn build_classification_prompt(generated: &str) -> String {
    let mut prompt = String::with_capacity(CLASSIFY_INSTRUCTION.len() + generated.len());
    prompt.push_str(CLASSIFY_INSTRUCTION);
    prompt.push_str(generated.trim());
    prompt
}

/// Describe the layout the model must follow, e.g. for tooltips
pub fn layout_hint() -> String {
    format!("<INTRO>{DELIMITER_A}<CODE>{DELIMITER_B}<OTHER>")
}

/// Delimiter constants
pub mod markers {
    /// Separates the intro from the code block
    pub const DELIMITER_A: &str = "*&$";

    /// Separates the code block from the other content
    pub const DELIMITER_B: &str = "!@^";

    /// Check if text contains both delimiters (in any order)
    pub fn contains_markers(text: &str) -> bool {
        text.contains(DELIMITER_A) && text.contains(DELIMITER_B)
    }
}
