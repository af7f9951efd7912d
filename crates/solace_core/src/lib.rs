pub mod mood;
pub mod recommend;
pub mod session;
pub mod survey;
pub mod tone;

pub use mood::{MoodPattern, MoodSymbol, PatternCode};
pub use recommend::{recommendations, Recommendation};
pub use session::{ChatMessage, ConversationSession, Role};
pub use survey::{survey, SurveyPrompt};
pub use tone::resolve_tone;
