//! Big Five trait names
//!
//! Inventories disagree on how they label the fifth factor: the TIPI scores
//! "Emotional Stability" while the BFI-44 scores its inverse, "Neuroticism".
//! Both are kept as distinct traits so a narrative table keyed by one never
//! silently matches items keyed by the other.

use serde::{Deserialize, Serialize};

/// A personality dimension measured by an inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Trait {
    Extraversion,
    Agreeableness,
    Conscientiousness,
    #[serde(rename = "Emotional Stability")]
    EmotionalStability,
    Neuroticism,
    Openness,
}

impl Trait {
    /// The label shown to users and used as the narrative table key
    pub fn label(&self) -> &'static str {
        match self {
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::EmotionalStability => "Emotional Stability",
            Trait::Neuroticism => "Neuroticism",
            Trait::Openness => "Openness",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "extraversion" => Ok(Trait::Extraversion),
            "agreeableness" => Ok(Trait::Agreeableness),
            "conscientiousness" => Ok(Trait::Conscientiousness),
            "emotional stability" | "emotionalstability" => Ok(Trait::EmotionalStability),
            "neuroticism" => Ok(Trait::Neuroticism),
            "openness" => Ok(Trait::Openness),
            _ => Err(format!("Unknown trait: {}", s)),
        }
    }
}

impl TryFrom<String> for Trait {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_from_str() {
        assert_eq!("openness".parse::<Trait>().unwrap(), Trait::Openness);
        assert_eq!("EXTRAVERSION".parse::<Trait>().unwrap(), Trait::Extraversion);
        assert_eq!("Emotional Stability".parse::<Trait>().unwrap(), Trait::EmotionalStability);
        assert_eq!("emotional-stability".parse::<Trait>().unwrap(), Trait::EmotionalStability);
        assert_eq!("emotional_stability".parse::<Trait>().unwrap(), Trait::EmotionalStability);
        assert!("honesty".parse::<Trait>().is_err());
    }

    #[test]
    fn test_trait_display() {
        assert_eq!(Trait::EmotionalStability.to_string(), "Emotional Stability");
        assert_eq!(Trait::Neuroticism.to_string(), "Neuroticism");
    }

    #[test]
    fn test_trait_serde_uses_labels() {
        let yaml = serde_yaml::to_string(&Trait::EmotionalStability).unwrap();
        assert_eq!(yaml.trim(), "Emotional Stability");

        let parsed: Trait = serde_yaml::from_str("Emotional Stability").unwrap();
        assert_eq!(parsed, Trait::EmotionalStability);

        let parsed: Trait = serde_yaml::from_str("Conscientiousness").unwrap();
        assert_eq!(parsed, Trait::Conscientiousness);
    }

    #[test]
    fn test_trait_deserialize_is_lenient() {
        for (input, expected) in [
            ("openness", Trait::Openness),
            ("NEUROTICISM", Trait::Neuroticism),
            ("emotional-stability", Trait::EmotionalStability),
            ("emotional_stability", Trait::EmotionalStability),
            ("EmotionalStability", Trait::EmotionalStability),
        ] {
            let parsed: Trait = serde_yaml::from_str(input).unwrap();
            assert_eq!(parsed, expected, "{}", input);
        }

        let err = serde_yaml::from_str::<Trait>("honesty").unwrap_err();
        assert!(err.to_string().contains("Unknown trait: honesty"));
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        let all = [
            Trait::Extraversion,
            Trait::Agreeableness,
            Trait::Conscientiousness,
            Trait::EmotionalStability,
            Trait::Neuroticism,
            Trait::Openness,
        ];
        for t in all {
            assert_eq!(t.label().parse::<Trait>().unwrap(), t);
        }
    }
}
