use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Emotional state reported on the mood selection screen
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Stressed,
    Neutral,
    Happy,
}

impl Mood {
    /// Lowercase identifier shown next to the user on the connect screen
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Stressed => "stressed",
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stressed => "Overloaded",
            Mood::Neutral => "Stable",
            Mood::Happy => "Optimized",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Stressed => "(>_<)",
            Mood::Neutral => "(-_-)",
            Mood::Happy => "(*o*)",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_mood_order_matches_buttons() {
        let moods: Vec<Mood> = Mood::iter().collect();
        assert_eq!(moods, vec![Mood::Stressed, Mood::Neutral, Mood::Happy]);
    }

    #[test]
    fn test_mood_display_is_lowercase_identifier() {
        for mood in Mood::iter() {
            assert_eq!(mood.to_string(), mood.as_str());
        }
    }

    #[test]
    fn test_mood_labels() {
        assert_eq!(Mood::Stressed.label(), "Overloaded");
        assert_eq!(Mood::Neutral.label(), "Stable");
        assert_eq!(Mood::Happy.label(), "Optimized");
    }

    #[test]
    fn test_mood_serde_uses_lowercase() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&Mood::Happy)?, "\"happy\"");
        let mood: Mood = serde_json::from_str("\"stressed\"")?;
        assert_eq!(mood, Mood::Stressed);
        Ok(())
    }
}
