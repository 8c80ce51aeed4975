//! Presentation label for an overall trust score (badge colour in the UI).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrustLabel {
    #[serde(rename = "High Trust")]
    High,
    #[serde(rename = "Medium Trust")]
    Medium,
    #[serde(rename = "Low Trust")]
    Low,
}

impl TrustLabel {
    pub fn from_score(overall: u8) -> Self {
        match overall {
            80.. => TrustLabel::High,
            60..=79 => TrustLabel::Medium,
            _ => TrustLabel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrustLabel::High => "High Trust",
            TrustLabel::Medium => "Medium Trust",
            TrustLabel::Low => "Low Trust",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_bands() {
        assert_eq!(TrustLabel::from_score(100), TrustLabel::High);
        assert_eq!(TrustLabel::from_score(80), TrustLabel::High);
        assert_eq!(TrustLabel::from_score(79), TrustLabel::Medium);
        assert_eq!(TrustLabel::from_score(60), TrustLabel::Medium);
        assert_eq!(TrustLabel::from_score(59), TrustLabel::Low);
        assert_eq!(TrustLabel::from_score(0), TrustLabel::Low);
    }

    #[test]
    fn serializes_display_text() {
        let s = serde_json::to_string(&TrustLabel::Medium).unwrap();
        assert_eq!(s, "\"Medium Trust\"");
        assert_eq!(TrustLabel::Low.as_str(), "Low Trust");
    }
}
