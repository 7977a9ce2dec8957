use serde::{Deserialize, Serialize};

/// Ratios accepted by the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "9:16")]
    TallPortrait,
    #[serde(rename = "16:9")]
    Widescreen,
}

impl AspectRatio {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Square => "1:1",
            Self::Portrait => "3:4",
            Self::Landscape => "4:3",
            Self::TallPortrait => "9:16",
            Self::Widescreen => "16:9",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_ratio_string() {
        let json = serde_json::to_string(&AspectRatio::TallPortrait).unwrap();
        assert_eq!(json, "\"9:16\"");

        let ratio: AspectRatio = serde_json::from_str("\"4:3\"").unwrap();
        assert_eq!(ratio, AspectRatio::Landscape);
        assert_eq!(ratio.value(), "4:3");
    }
}
