use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "User".to_string()
}

fn default_time_of_day() -> String {
    "evening".to_string()
}

/// Inbound payload for `POST /chatbot-response`.
///
/// Missing fields default rather than reject: an anonymous caller is
/// still a caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_time_of_day")]
    pub time_of_day: String,
}

/// Outbound payload for `POST /chatbot-response`.
///
/// `song_titles`/`song_links` are always empty on the opening turn;
/// `mood_pattern` is the canonical code the client echoes back on
/// follow-ups.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub chatbot_response: String,
    pub survey_question: String,
    pub survey_options: Vec<String>,
    pub song_links: Vec<String>,
    pub song_titles: Vec<String>,
    pub mood_pattern: String,
}

/// Inbound payload for `POST /chatbot-followup`.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowupRequest {
    #[serde(default)]
    pub message: String,
    /// Free text containing "Good"/"Bad" tokens, or the bare code from
    /// the opening response.
    #[serde(default)]
    pub mood_pattern: String,
    #[serde(default)]
    pub survey_completed: bool,
}

/// Outbound payload for `POST /chatbot-followup`.
#[derive(Debug, Clone, Serialize)]
pub struct FollowupResponse {
    pub chatbot_response: String,
    pub song_titles: Vec<String>,
    pub song_links: Vec<String>,
}

/// Uniform failure shape for both endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
