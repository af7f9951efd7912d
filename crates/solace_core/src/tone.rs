//! Tone table: pattern code → emotional register for the model.

use crate::mood::PatternCode;

/// Descriptor used whenever the pattern has no dedicated entry.
pub const FALLBACK_TONE: &str = "empathetic and supportive";

/// Resolve the tone descriptor for a pattern, with an optional
/// reason-based override.
///
/// A recognized reason replaces the pattern tone entirely; an unknown
/// reason leaves it untouched.
pub fn resolve_tone(code: PatternCode, reason: Option<&str>) -> &'static str {
    let by_pattern = match code {
        PatternCode::Bbb => "gentle and calming",
        PatternCode::Gbb => "cautious but supportive",
        PatternCode::Bgb => "balanced and encouraging",
        PatternCode::Bbg => "lightly optimistic",
        PatternCode::Ggb => "uplifting and hopeful",
        PatternCode::Bgg => "reassuring and optimistic",
        PatternCode::Gbg => "positive and empathetic",
        PatternCode::Ggg => "joyful and playful",
        PatternCode::Other => FALLBACK_TONE,
    };

    match reason.and_then(reason_tone) {
        Some(tone) => tone,
        None => by_pattern,
    }
}

fn reason_tone(reason: &str) -> Option<&'static str> {
    Some(match reason {
        "Academic stress" => "encouraging and empowering",
        "Loneliness" => "warm and soothing",
        "Relationship issues" => "compassionate and understanding",
        "Career pressure" => "motivational and focused",
        "Health issues" => "gentle and caring",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodPattern;

    #[test]
    fn test_pattern_tone() {
        assert_eq!(resolve_tone(PatternCode::Ggg, None), "joyful and playful");
        assert_eq!(resolve_tone(PatternCode::Bbb, None), "gentle and calming");
    }

    #[test]
    fn test_reason_overrides_pattern() {
        assert_eq!(
            resolve_tone(PatternCode::Ggg, Some("Loneliness")),
            "warm and soothing"
        );
    }

    #[test]
    fn test_unknown_reason_keeps_pattern_tone() {
        assert_eq!(
            resolve_tone(PatternCode::Ggg, Some("Weather")),
            "joyful and playful"
        );
    }

    #[test]
    fn test_unmatched_pattern_falls_back() {
        let code = MoodPattern::from_tagged_text("ZZZ").code();
        assert_eq!(resolve_tone(code, None), FALLBACK_TONE);
    }

    #[test]
    fn test_idempotent() {
        let first = resolve_tone(PatternCode::Gbb, Some("Career pressure"));
        let second = resolve_tone(PatternCode::Gbb, Some("Career pressure"));
        assert_eq!(first, second);
    }
}
