/// Acknowledgement sent as soon as a photo arrives
pub const IMAGE_RECEIVED: &str = "Processing image... 📷";

/// Question text used for photos until OCR exists
pub const IMAGE_OCR_PLACEHOLDER: &str =
    "Image OCR not implemented yet. Please type your question.";

/// Payload of a message received while waiting for a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionInput {
    /// Typed question
    Text(String),
    /// Photo of a question
    Image,
}

/// Turn a question message into question text.
///
/// Text is returned verbatim; photos resolve to [`IMAGE_OCR_PLACEHOLDER`].
#[must_use]
pub fn extract_question(input: QuestionInput) -> String {
    match input {
        QuestionInput::Text(text) => text,
        QuestionInput::Image => IMAGE_OCR_PLACEHOLDER.to_string(),
    }
}
