//! User-facing texts of the conversation flow.

/// Greeting shown with the standards menu
pub const WELCOME: &str = "Welcome to EasyBoardPrepBot! 👋\nPlease select your standard:";

/// Acknowledgement of `/cancel`
pub const CANCELLED: &str = "Session cancelled. Type /start to begin again.";

/// Reply to messages outside an active conversation
pub const NOT_STARTED: &str = "Type /start to begin.";

/// Prefix used when re-prompting for a selection
pub const PICK_FROM_MENU: &str = "Please choose one of the options below.";

/// Command overview for `/help`
pub const HELP: &str = "/start - choose your standard and subject, then ask questions\n\
                        /cancel - end the current session\n\
                        /help - show this message";

/// Confirmation of the chosen standard with the subjects prompt
#[must_use]
pub fn standard_selected(standard: &str) -> String {
    format!("Selected: {standard}\nNow choose your subject:")
}

/// Confirmation of the chosen subject with the question prompt
#[must_use]
pub fn subject_selected(subject: &str) -> String {
    format!("Subject: {subject}\nNow send your question or image 📷")
}

/// Re-prompt for the standard
#[must_use]
pub fn repeat_standard() -> String {
    format!("{PICK_FROM_MENU}\nPlease select your standard:")
}

/// Re-prompt for the subject, reminding the user of their standard
#[must_use]
pub fn repeat_subject(standard: &str) -> String {
    format!("{PICK_FROM_MENU}\n{}", standard_selected(standard))
}
