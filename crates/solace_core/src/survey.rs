//! Diagnostic survey table: one clarifying question per pattern code.

use crate::mood::PatternCode;

/// A single multiple-choice survey prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyPrompt {
    pub question: &'static str,
    pub options: &'static [&'static str],
}

/// Prompt shown for any pattern without a dedicated entry.
pub const FALLBACK_SURVEY: SurveyPrompt = SurveyPrompt {
    question: "Would you like to tell me more?",
    options: &["Tell me more"],
};

/// Look up the survey prompt for a pattern.
pub fn survey(code: PatternCode) -> SurveyPrompt {
    match code {
        PatternCode::Bbb => SurveyPrompt {
            question: "What’s been weighing on your mind?",
            options: &["Loneliness", "Lack of motivation", "Anxiety"],
        },
        PatternCode::Gbb => SurveyPrompt {
            question: "Please share what’s affecting your mood:",
            options: &["Feeling ignored", "Low energy", "Stressful deadlines"],
        },
        PatternCode::Bgb => SurveyPrompt {
            question: "Are your emotions shifting often?",
            options: &["Mood swings", "Mixed feelings", "Unstable energy"],
        },
        PatternCode::Bbg => SurveyPrompt {
            question: "What type of support would help right now?",
            options: &["Encouraging words", "A friendly chat", "Just some calm"],
        },
        PatternCode::Ggb => SurveyPrompt {
            question: "Is something challenging your optimism lately?",
            options: &["Fatigue", "Minor setbacks", "Need encouragement"],
        },
        PatternCode::Gbg => SurveyPrompt {
            question: "Do you feel emotionally balanced?",
            options: &["A bit unsure", "Ups and downs", "Doing okay"],
        },
        PatternCode::Bgg => SurveyPrompt {
            question: "What recently helped uplift you?",
            options: &["Supportive friend", "Good news", "New routine"],
        },
        PatternCode::Ggg => SurveyPrompt {
            question: "What’s keeping your spirits high today?",
            options: &["Achievement", "Time with friends", "Just vibing"],
        },
        PatternCode::Other => FALLBACK_SURVEY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodPattern;

    #[test]
    fn test_ggg_survey() {
        let prompt = survey(PatternCode::Ggg);
        assert_eq!(prompt.question, "What’s keeping your spirits high today?");
        assert_eq!(
            prompt.options,
            ["Achievement", "Time with friends", "Just vibing"]
        );
    }

    #[test]
    fn test_unmatched_pattern_gets_fallback() {
        let code = MoodPattern::from_tagged_text("ZZZ").code();
        assert_eq!(survey(code), FALLBACK_SURVEY);
    }

    #[test]
    fn test_every_code_has_three_options_except_fallback() {
        let codes = [
            PatternCode::Ggg,
            PatternCode::Ggb,
            PatternCode::Gbg,
            PatternCode::Gbb,
            PatternCode::Bgg,
            PatternCode::Bgb,
            PatternCode::Bbg,
            PatternCode::Bbb,
        ];
        for code in codes {
            assert_eq!(survey(code).options.len(), 3, "{code:?}");
        }
        assert_eq!(survey(PatternCode::Other).options.len(), 1);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(survey(PatternCode::Bgb), survey(PatternCode::Bgb));
    }
}
