use serde::Serialize;
use std::fmt;

/// Decision boundary on P(sad). Scores at the boundary resolve to sad.
pub const THRESHOLD: f32 = 0.5;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Happy,
    Sad,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Happy => "happy",
            Label::Sad => "sad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Label::Happy => "😄",
            Label::Sad => "🥺",
        }
    }

    /// Label as shown on the page, e.g. `Sad 🥺` or `sad 🥺`.
    pub fn display(&self, capitalize: bool) -> String {
        let name = if capitalize {
            match self {
                Label::Happy => "Happy",
                Label::Sad => "Sad",
            }
        } else {
            self.as_str()
        };
        format!("{} {}", name, self.emoji())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and confidence derived together from one classifier score.
#[derive(Serialize, Clone, Copy, PartialEq, Debug)]
pub struct Prediction {
    pub label: Label,
    pub confidence: f32,
    pub score: f32,
}

impl Prediction {
    /// `score` is the classifier's P(sad).
    pub fn from_score(score: f32) -> Self {
        if score >= THRESHOLD {
            Self {
                label: Label::Sad,
                confidence: score,
                score,
            }
        } else {
            Self {
                label: Label::Happy,
                confidence: 1.0 - score,
                score,
            }
        }
    }

    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}
