//! Composition of the final answer message.

use crate::llm::LlmError;

/// Prefix of the answer field when the model call failed
pub const ANSWER_ERROR_PREFIX: &str = "❌ Error fetching answer: ";

/// Text shown in the answer field for a model result.
#[must_use]
pub fn render_answer(answer: &Result<String, LlmError>) -> String {
    match answer {
        Ok(text) => text.clone(),
        Err(e) => format!("{ANSWER_ERROR_PREFIX}{e}"),
    }
}

/// Promotional footer for the selected standard and subject.
///
/// Only the last two characters of the standard are used ("Class 10" → "10").
/// Shorter standards are used whole.
#[must_use]
pub fn sponsored_line(standard: &str, subject: &str) -> String {
    format!(
        "Sponsored: Join XYZ Coaching for Class {} {subject} 🔥",
        last_chars(standard, 2)
    )
}

/// Compose the reply to a question.
///
/// # Examples
///
/// ```
/// use board_prep_bot::flow::format::format_reply;
///
/// let reply = format_reply("Class 10", "Maths", "What is 6*7?", "½ or 1 mark", "42");
/// assert!(reply.ends_with("Sponsored: Join XYZ Coaching for Class 10 Maths 🔥"));
/// ```
#[must_use]
pub fn format_reply(
    standard: &str,
    subject: &str,
    question: &str,
    marks: &str,
    answer: &str,
) -> String {
    format!(
        "📘 Standard: {standard}\n\
         📚 Subject: {subject}\n\
         📝 Question: {question}\n\
         🔍 Estimated Marks: {marks}\n\n\
         ✅ Step-by-step solution:\n{answer}\n\n\
         {}",
        sponsored_line(standard, subject)
    )
}

fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    s.char_indices()
        .nth(count - n)
        .map_or(s, |(pos, _)| &s[pos..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_field_order() {
        let reply = format_reply("Class 10", "Maths", "What is 6*7?", "½ or 1 mark", "42");
        let expected = "📘 Standard: Class 10\n\
                        📚 Subject: Maths\n\
                        📝 Question: What is 6*7?\n\
                        🔍 Estimated Marks: ½ or 1 mark\n\n\
                        ✅ Step-by-step solution:\n42\n\n\
                        Sponsored: Join XYZ Coaching for Class 10 Maths 🔥";
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_sponsored_line_slices_standard() {
        assert_eq!(
            sponsored_line("Class 9", "Science"),
            "Sponsored: Join XYZ Coaching for Class  9 Science 🔥"
        );
        assert_eq!(
            sponsored_line("Class 12", "English"),
            "Sponsored: Join XYZ Coaching for Class 12 English 🔥"
        );
    }

    #[test]
    fn test_sponsored_line_short_standard() {
        assert_eq!(
            sponsored_line("9", "Maths"),
            "Sponsored: Join XYZ Coaching for Class 9 Maths 🔥"
        );
        assert_eq!(
            sponsored_line("", "Maths"),
            "Sponsored: Join XYZ Coaching for Class  Maths 🔥"
        );
    }

    #[test]
    fn test_last_chars_multibyte() {
        assert_eq!(last_chars("Класс 10", 2), "10");
        assert_eq!(last_chars("Klasse ü1", 2), "ü1");
        assert_eq!(last_chars("ü", 2), "ü");
    }

    #[test]
    fn test_render_answer() {
        assert_eq!(render_answer(&Ok("42".to_string())), "42");

        let failed = render_answer(&Err(LlmError::NetworkError("timed out".to_string())));
        assert!(failed.starts_with(ANSWER_ERROR_PREFIX));
        assert!(failed.contains("timed out"));
    }
}
