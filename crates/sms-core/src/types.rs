use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw class value produced by a classifier. `1` is spam, `0` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub i64);

impl Label {
    pub const NOT_SPAM: Label = Label(0);
    pub const SPAM: Label = Label(1);

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Only the exact value `1` counts as spam.
    pub fn is_spam(&self) -> bool {
        self.0 == 1
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from(*self)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display-level outcome of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Spam")]
    Spam,
    #[serde(rename = "Not Spam")]
    NotSpam,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spam => "Spam",
            Self::NotSpam => "Not Spam",
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        if label.is_spam() {
            Self::Spam
        } else {
            Self::NotSpam
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_one_is_spam() {
        assert_eq!(Label::SPAM.verdict(), Verdict::Spam);
        assert_eq!(Label(1).verdict().to_string(), "Spam");
    }

    #[test]
    fn test_any_other_label_is_not_spam() {
        for raw in [0, -1, 2, 42, i64::MIN] {
            assert_eq!(Label(raw).verdict(), Verdict::NotSpam);
        }
        assert_eq!(Label::NOT_SPAM.verdict().as_str(), "Not Spam");
    }

    #[test]
    fn test_verdict_serializes_display_string() {
        assert_eq!(serde_json::to_string(&Verdict::NotSpam).unwrap(), "\"Not Spam\"");
        assert_eq!(serde_json::to_string(&Label(1)).unwrap(), "1");
    }
}
