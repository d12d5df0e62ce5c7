//! Importance level of a task.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Importance は重要度を表現
///
/// - 表示上のグルーピングとソート順（High が先頭）に使う
/// - 通知本文の絵文字マーカーにも使う
///
/// Design note: Using an enum ensures exhaustive matching and prevents
/// invalid levels from entering the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
}

impl Importance {
    /// Sort rank: High (0) before Medium (1) before Low (2).
    pub fn severity_rank(self) -> u8 {
        match self {
            Importance::High => 0,
            Importance::Medium => 1,
            Importance::Low => 2,
        }
    }

    /// Emoji marker used in notification bodies.
    pub fn emoji(self) -> &'static str {
        match self {
            Importance::Low => "🔵",
            Importance::Medium => "🟠",
            Importance::High => "🔴",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Importance::Low => "low",
            Importance::Medium => "medium",
            Importance::High => "high",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Importance::Low),
            "medium" => Ok(Importance::Medium),
            "high" => Ok(Importance::High),
            other => Err(format!("unknown importance: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::high(Importance::High, 0)]
    #[case::medium(Importance::Medium, 1)]
    #[case::low(Importance::Low, 2)]
    fn severity_rank_orders_high_first(#[case] importance: Importance, #[case] rank: u8) {
        assert_eq!(importance.severity_rank(), rank);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Importance::High).unwrap();
        assert_eq!(json, "\"high\"");

        let back: Importance = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(back, Importance::Low);
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Importance::default(), Importance::Medium);
    }

    #[test]
    fn round_trips_through_str() {
        for imp in [Importance::Low, Importance::Medium, Importance::High] {
            assert_eq!(imp.as_str().parse::<Importance>().unwrap(), imp);
        }
    }
}
