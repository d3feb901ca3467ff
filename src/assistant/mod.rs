//! Rule-based security assistant: responder, transcript and delayed delivery.

pub mod responder;
pub mod scheduler;
pub mod session;

pub use responder::{KeywordResponder, ResponseRule, FALLBACK_RESPONSE, GREETING, QUICK_QUESTIONS};
pub use scheduler::{DeliveryError, RequestToken, ResponseDelay, ResponseScheduler};
pub use session::{ChatError, ChatMessage, ChatSession, Sender};
