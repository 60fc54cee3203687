/// Conversation driver executing flow effects
pub mod conversation;
/// Command and message handlers
pub mod handlers;
/// Common messaging utilities (split long messages, keyboards)
pub mod messaging;
/// Per-chat session storage
pub mod session;
/// Outbound transport abstraction and its Telegram implementation
pub mod transport;

pub use conversation::Conversation;
pub use session::SessionStore;
