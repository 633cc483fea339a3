//! Classification buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated topic a chat message resolves to. `Default` is the fallback and has no triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Greetings,
    Services,
    Software,
    Mobile,
    Coaching,
    Assignment,
    Cloud,
    Security,
    Contact,
    Pricing,
    Location,
    About,
    Default,
}

impl Topic {
    /// Every topic, keyed ones first, `Default` last.
    pub const ALL: [Topic; 13] = [
        Topic::Greetings,
        Topic::Services,
        Topic::Software,
        Topic::Mobile,
        Topic::Coaching,
        Topic::Assignment,
        Topic::Cloud,
        Topic::Security,
        Topic::Contact,
        Topic::Pricing,
        Topic::Location,
        Topic::About,
        Topic::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Greetings => "greetings",
            Topic::Services => "services",
            Topic::Software => "software",
            Topic::Mobile => "mobile",
            Topic::Coaching => "coaching",
            Topic::Assignment => "assignment",
            Topic::Cloud => "cloud",
            Topic::Security => "security",
            Topic::Contact => "contact",
            Topic::Pricing => "pricing",
            Topic::Location => "location",
            Topic::About => "about",
            Topic::Default => "default",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown topic: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_name_round_trips() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
        }
        assert!("weather".parse::<Topic>().is_err());
    }

    #[test]
    fn test_topic_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Topic::Pricing).unwrap(),
            "\"pricing\""
        );
    }
}
