//! Curated song recommendations per pattern code.
//!
//! The lists are static and presentation-ordered; the orchestrator
//! decides when they may actually be shown.

use crate::mood::PatternCode;

/// One curated (title, link) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub title: &'static str,
    pub link: &'static str,
}

/// Look up the curated list for a pattern. Unmatched patterns get no
/// songs at all, not a fallback list.
pub fn recommendations(code: PatternCode) -> &'static [Recommendation] {
    match code {
        PatternCode::Bbb => &[
            Recommendation {
                title: "Relaxing Krishna Flute",
                link: "https://www.youtube.com/watch?v=1kIFrf5OPxE",
            },
            Recommendation {
                title: "Hanuman Chalisa",
                link: "https://www.youtube.com/watch?v=BLlTFapgvOo",
            },
        ],
        PatternCode::Gbb => &[Recommendation {
            title: "Believer – Imagine Dragons",
            link: "https://www.youtube.com/watch?v=7wtfhZwyrcc",
        }],
        PatternCode::Bgb => &[Recommendation {
            title: "Uptown Funk",
            link: "https://www.youtube.com/watch?v=OPf0YbXqDm0",
        }],
        PatternCode::Bbg => &[Recommendation {
            title: "Count on Me - Bruno Mars",
            link: "https://www.youtube.com/watch?v=6k8cpUkKK4c",
        }],
        PatternCode::Ggb => &[Recommendation {
            title: "Don't Stop Me Now",
            link: "https://www.youtube.com/watch?v=HgzGwKwLmgM",
        }],
        PatternCode::Gbg => &[Recommendation {
            title: "Something Just Like This",
            link: "https://www.youtube.com/watch?v=FM7MFYoylVs",
        }],
        PatternCode::Bgg => &[Recommendation {
            title: "Despacito",
            link: "https://www.youtube.com/watch?v=kJQP7kiw5Fk",
        }],
        PatternCode::Ggg => &[
            Recommendation {
                title: "Happy – Pharrell",
                link: "https://www.youtube.com/watch?v=ZbZSe6N_BXs",
            },
            Recommendation {
                title: "On Top of the World",
                link: "https://www.youtube.com/watch?v=w5tWYmIOWGk",
            },
        ],
        PatternCode::Other => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodPattern;

    #[test]
    fn test_bbb_has_two_entries_in_order() {
        let songs = recommendations(PatternCode::Bbb);
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title, "Relaxing Krishna Flute");
        assert_eq!(songs[1].title, "Hanuman Chalisa");
    }

    #[test]
    fn test_unmatched_pattern_is_empty() {
        let code = MoodPattern::from_tagged_text("ZZZ").code();
        assert!(recommendations(code).is_empty());
    }

    #[test]
    fn test_all_eight_codes_are_curated() {
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
            assert!(!recommendations(code).is_empty(), "{code:?} has no songs");
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            recommendations(PatternCode::Ggg),
            recommendations(PatternCode::Ggg)
        );
    }
}
