//! Prompt template steering the model toward narrative output.

/// Fixed instructional prefix prepended to every user prompt.
const STORY_PREFIX: &str = "Write a creative, engaging, and narrative-rich story imagining:";

/// Composes the prompt sent to the model (Value Object)
///
/// Pure concatenation: the instructional prefix followed by the trimmed
/// user input. No length or content validation — an empty input produces a
/// prefix-only prompt and is sent as-is.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    prefix: &'static str,
}

impl PromptTemplate {
    pub fn new() -> Self {
        Self {
            prefix: STORY_PREFIX,
        }
    }

    pub fn render(&self, raw: &str) -> String {
        format!("{}{}", self.prefix, raw.trim())
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prepends_prefix() {
        let template = PromptTemplate::new();
        assert_eq!(
            template.render("a robot who learns empathy"),
            "Write a creative, engaging, and narrative-rich story imagining:a robot who learns empathy"
        );
    }

    #[test]
    fn render_trims_input() {
        let template = PromptTemplate::new();
        assert_eq!(
            template.render("  a haunted lighthouse \n"),
            "Write a creative, engaging, and narrative-rich story imagining:a haunted lighthouse"
        );
    }

    #[test]
    fn empty_input_yields_prefix_only() {
        let template = PromptTemplate::new();
        assert_eq!(
            template.render(""),
            "Write a creative, engaging, and narrative-rich story imagining:"
        );
    }
}
