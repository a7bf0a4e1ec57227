use std::fmt;

use serde::{Deserialize, Serialize};

/// Who the series is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    #[serde(rename = "Middle School")]
    MiddleSchool,
    #[default]
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    #[serde(rename = "Mixed")]
    Mixed,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::MiddleSchool,
        Audience::HighSchool,
        Audience::YoungAdult,
        Audience::Mixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Audience::MiddleSchool => "Middle School",
            Audience::HighSchool => "High School",
            Audience::YoungAdult => "Young Adult",
            Audience::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A submitted generation request. Only built by `GeneratorForm::submit`, so
/// `topic` is non-empty and `duration` is within bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub audience: Audience,
    pub duration: u8,
    pub tone: String,
}
