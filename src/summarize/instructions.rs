//! Built-in instruction blocks for the remote summarizer.
//!
//! These travel as the system message of each chat-completion request; the
//! normalized chunk text goes in the user message.  Keeping them `const`
//! makes every run reproducible for a given model and temperature.

// ---------------------------------------------------------------------------
// Instruction blocks
// ---------------------------------------------------------------------------

/// Per-excerpt analysis instructions.
///
/// The chunks were normalized (lowercased, stopwords removed), so the
/// instructions warn the model not to expect natural prose.
pub const EXCERPT_INSTRUCTIONS: &str = "\
You are analyzing an excerpt from a transcript of a producer narrating a
timed music-production session.  The text was machine-cleaned: lowercase,
no punctuation, common words removed.

Briefly identify the most interesting aspects of the artist's process in:
1. Time management
2. Sound design
3. Rhythm construction
4. Workflow optimization
5. Creative problem-solving

Be concise and specific.  Reply with the analysis only.";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_instructions_cover_the_five_aspects() {
        assert!(EXCERPT_INSTRUCTIONS.contains("Time management"));
        assert!(EXCERPT_INSTRUCTIONS.contains("Sound design"));
        assert!(EXCERPT_INSTRUCTIONS.contains("Rhythm construction"));
        assert!(EXCERPT_INSTRUCTIONS.contains("Workflow optimization"));
        assert!(EXCERPT_INSTRUCTIONS.contains("Creative problem-solving"));
    }

    #[test]
    fn excerpt_instructions_mention_the_cleaned_form() {
        // The model needs to know the text is not natural prose
        assert!(EXCERPT_INSTRUCTIONS.contains("machine-cleaned"));
    }
}
