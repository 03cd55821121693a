use crate::domain::model::{ConvertedOutput, RawInput};

/// Turns Markdown into HTML. Implementations must be pure: the same input
/// always renders to the same output.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, input: &[u8]) -> Vec<u8>;

    fn convert(&self, input: &RawInput) -> ConvertedOutput {
        ConvertedOutput(self.render(input.as_bytes()))
    }
}
