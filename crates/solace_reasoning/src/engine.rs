//! Conversation flow engine: the two request/response transitions that
//! orchestrate encoding, tables, prompt building and the completion
//! call.

use crate::llm::{ChatClient, CompletionParams};
use crate::prompts;
use anyhow::Result;
use regex::Regex;
use solace_core::{recommendations, survey, ConversationSession, MoodPattern, Recommendation};
use std::sync::{Arc, LazyLock};
use tracing::debug;

static RE_PERSONA_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Solace:|AI:)?\s*").unwrap());

/// Phrases that count as an explicit request for songs.
const SONG_TRIGGERS: &[&str] = &["song", "music", "listen", "recommend", "suggest"];

/// Payload of the opening turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening {
    pub reply: String,
    pub survey_question: String,
    pub survey_options: Vec<String>,
    /// Canonical pattern code for the client to echo back on follow-ups.
    pub mood_pattern: String,
}

/// Payload of a follow-up turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followup {
    pub reply: String,
    pub song_titles: Vec<String>,
    pub song_links: Vec<String>,
}

pub struct ConversationEngine {
    client: Arc<dyn ChatClient>,
}

impl ConversationEngine {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// Start a conversation from raw mood samples.
    ///
    /// The survey prompt is always returned. Recommendations are looked
    /// up but never disclosed on the opening turn: surfacing music
    /// before any emotional context is established would anchor the
    /// whole conversation to it.
    pub async fn start(&self, moods: &[String], name: &str, time_of_day: &str) -> Result<Opening> {
        let pattern = MoodPattern::encode(moods);
        let code = pattern.code();
        debug!(%pattern, name, time_of_day, "opening conversation");

        let session = ConversationSession::opening(prompts::opening_prompt(&pattern));
        let raw = self
            .client
            .complete(&session, CompletionParams::opening())
            .await?;
        let reply = clean_prefix(&raw);

        let prompt = survey(code);
        let staged = recommendations(code);
        debug!(staged_songs = staged.len(), "withholding songs on opening turn");

        Ok(Opening {
            reply,
            survey_question: prompt.question.to_string(),
            survey_options: prompt.options.iter().map(|s| s.to_string()).collect(),
            mood_pattern: pattern.to_string(),
        })
    }

    /// Continue a conversation from an echoed pattern rendering.
    ///
    /// Songs are disclosed iff the survey is completed or the message
    /// contains a song-request trigger phrase. That disjunction is
    /// computed once, after the completion call, and is authoritative.
    pub async fn followup(
        &self,
        message: &str,
        pattern_text: &str,
        survey_completed: bool,
    ) -> Result<Followup> {
        let pattern = MoodPattern::from_tagged_text(pattern_text);
        let code = pattern.code();
        let songs = recommendations(code);
        debug!(%pattern, survey_completed, candidate_songs = songs.len(), "follow-up turn");

        let session = ConversationSession::followup(
            prompts::followup_system_prompt(&pattern, survey_completed),
            message,
        );
        let raw = self
            .client
            .complete(&session, CompletionParams::default())
            .await?;
        let reply = clean_prefix(&raw);

        let disclose = survey_completed || wants_songs(message);
        let (song_titles, song_links) = if disclose {
            split_songs(songs)
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Followup {
            reply,
            song_titles,
            song_links,
        })
    }
}

/// Strip a leading self-identifying label ("Solace:" or "AI:") from the
/// model's reply. Pure text normalization.
fn clean_prefix(raw: &str) -> String {
    RE_PERSONA_PREFIX.replace(raw.trim(), "").to_string()
}

fn wants_songs(message: &str) -> bool {
    let lower = message.to_lowercase();
    SONG_TRIGGERS.iter().any(|t| lower.contains(t))
}

fn split_songs(songs: &[Recommendation]) -> (Vec<String>, Vec<String>) {
    songs
        .iter()
        .map(|s| (s.title.to_string(), s.link.to_string()))
        .unzip()
}
