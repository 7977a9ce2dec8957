use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeField {
    Subject,
    Physique,
    Hair,
    Features,
    Clothing,
    Environment,
    Action,
    Style,
}

impl AttributeField {
    pub const ALL: [AttributeField; 8] = [
        Self::Subject,
        Self::Physique,
        Self::Hair,
        Self::Features,
        Self::Clothing,
        Self::Environment,
        Self::Action,
        Self::Style,
    ];

    /// Fields that must be filled before a generation may start.
    pub const REQUIRED: [AttributeField; 3] = [Self::Subject, Self::Clothing, Self::Environment];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Subject => "subject",
            Self::Physique => "physique",
            Self::Hair => "hair",
            Self::Features => "features",
            Self::Clothing => "clothing",
            Self::Environment => "environment",
            Self::Action => "action",
            Self::Style => "style",
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Subject => "Sex/Age",
            Self::Physique => "Physique",
            Self::Hair => "Hair",
            Self::Features => "Extras (features)",
            Self::Clothing => "Clothing",
            Self::Environment => "Environment",
            Self::Action => "Action",
            Self::Style => "General style",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.value() == value)
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_matches_every_field() {
        for field in AttributeField::ALL {
            assert_eq!(AttributeField::from_value(field.value()), Some(field));
        }
        assert_eq!(AttributeField::from_value("sexAge"), None);
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = AttributeField::ALL
            .into_iter()
            .filter(AttributeField::is_required)
            .collect();

        assert_eq!(
            required,
            vec![
                AttributeField::Subject,
                AttributeField::Clothing,
                AttributeField::Environment
            ]
        );
    }
}
