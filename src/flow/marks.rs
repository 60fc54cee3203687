//! Coarse mark estimate derived from question length.

/// Estimate how many marks a question is worth from its word count.
///
/// Words are whitespace-separated tokens.
///
/// # Examples
///
/// ```
/// use board_prep_bot::flow::marks::estimate_marks;
///
/// assert_eq!(estimate_marks("What is 6*7?"), "½ or 1 mark");
/// ```
#[must_use]
pub fn estimate_marks(text: &str) -> &'static str {
    match text.split_whitespace().count() {
        0..=5 => "½ or 1 mark",
        6..=15 => "2 marks",
        16..=30 => "3 marks",
        31..=50 => "4 marks",
        _ => "5 marks",
    }
}
