//! Prompt assembly for the completion provider.
//!
//! The opening prompt has a fixed four-section layout — persona, tone,
//! context, closing instruction — joined by blank lines. The layout is
//! positional: an empty context section still renders as an empty line.

use solace_core::{resolve_tone, MoodPattern};

const PERSONA: &str = "You are Solace, a caring and emotionally-aware AI companion.";

/// Build the tone-calibrated instruction string.
///
/// `reason` (if recognized) overrides the pattern-derived tone and adds
/// a context line; otherwise a non-empty `user_msg` is quoted as
/// context instead.
pub fn tone_prompt(pattern: &MoodPattern, reason: Option<&str>, user_msg: &str) -> String {
    let tone = resolve_tone(pattern.code(), reason);
    let tone_line = format!("Speak in a {tone} tone.");

    let context = match reason {
        Some(r) => format!(
            "The user might be feeling this way due to {}.",
            r.to_lowercase()
        ),
        None if !user_msg.is_empty() => {
            format!("The user said: \"{user_msg}\". Be mindful and adaptive.")
        }
        None => String::new(),
    };

    let outro = "Start with a short, comforting message. \
        Avoid mentioning mood patterns directly. \
        Do not suggest any songs in this message.";

    format!("{PERSONA}\n\n{tone_line}\n\n{context}\n\n{outro}")
}

/// Instruction for the opening turn: tone only, no reason, no user
/// context, songs suppressed.
pub fn opening_prompt(pattern: &MoodPattern) -> String {
    tone_prompt(pattern, None, "")
}

/// System instruction for follow-up turns.
///
/// Before the survey is completed the model gives emotional support
/// only; afterwards it continues naturally, with songs — if any —
/// delivered out-of-band by the orchestrator, never by the model.
pub fn followup_system_prompt(pattern: &MoodPattern, survey_completed: bool) -> String {
    if survey_completed {
        "You are Solace, an emotionally supportive chatbot. \
            Continue conversation. If the user asks for songs, \
            songs will be sent separately."
            .to_string()
    } else {
        format!(
            "You are Solace, an emotionally supportive chatbot. \
                The user has the mood pattern '{pattern}'. \
                Do NOT suggest songs yet. Focus only on emotional support."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(code: &str) -> MoodPattern {
        MoodPattern::from_tagged_text(code)
    }

    #[test]
    fn test_opening_prompt_has_four_positional_sections() {
        let prompt = opening_prompt(&pattern("GGG"));
        let sections: Vec<&str> = prompt.split("\n\n").collect();
        assert_eq!(sections.len(), 4);
        assert!(sections[0].starts_with("You are Solace"));
        assert_eq!(sections[1], "Speak in a joyful and playful tone.");
        assert_eq!(sections[2], "", "empty context still occupies its slot");
        assert!(sections[3].contains("short, comforting message"));
    }

    #[test]
    fn test_opening_prompt_suppresses_songs() {
        let prompt = opening_prompt(&pattern("BBB"));
        assert!(prompt.contains("Do not suggest any songs"));
    }

    #[test]
    fn test_reason_context_line() {
        let prompt = tone_prompt(&pattern("GGG"), Some("Loneliness"), "");
        assert!(prompt.contains("Speak in a warm and soothing tone."));
        assert!(prompt.contains("due to loneliness."));
    }

    #[test]
    fn test_user_message_context_line() {
        let prompt = tone_prompt(&pattern("GGG"), None, "rough day");
        assert!(prompt.contains("The user said: \"rough day\"."));
    }

    #[test]
    fn test_followup_prompt_before_survey() {
        let prompt = followup_system_prompt(&pattern("GBB"), false);
        assert!(prompt.contains("'GBB'"));
        assert!(prompt.contains("Do NOT suggest songs yet"));
    }

    #[test]
    fn test_followup_prompt_after_survey() {
        let prompt = followup_system_prompt(&pattern("GBB"), true);
        assert!(prompt.contains("songs will be sent separately"));
        assert!(!prompt.contains("GBB"));
    }
}
