use serde::{Deserialize, Serialize};

use crate::generations::{enums::shot_kind::ShotKind, errors::GenerationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PromptSet {
    pub full_body: String,
    pub extreme_close_up: String,
    pub view_from_behind: String,
    pub side_profile: String,
    pub action_shot: String,
}

impl PromptSet {
    /// Parses the drafted json. All five prompts must be present and non blank.
    pub fn parse(text: &str) -> Result<Self, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        let prompts: PromptSet = match serde_json::from_str(text) {
            Ok(prompts) => prompts,
            Err(e) => return Err(GenerationError::SchemaViolation(e.to_string())),
        };

        if let Some(kind) = ShotKind::ALL
            .into_iter()
            .find(|kind| prompts.get(*kind).trim().is_empty())
        {
            return Err(GenerationError::SchemaViolation(format!(
                "{} is blank",
                kind.wire_name()
            )));
        }

        Ok(prompts)
    }

    pub fn get(&self, kind: ShotKind) -> &str {
        match kind {
            ShotKind::FullBody => &self.full_body,
            ShotKind::ExtremeCloseUp => &self.extreme_close_up,
            ShotKind::ViewFromBehind => &self.view_from_behind,
            ShotKind::SideProfile => &self.side_profile,
            ShotKind::ActionShot => &self.action_shot,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn full_payload() -> serde_json::Value {
        json!({
            "fullBody": "full body prompt",
            "extremeCloseUp": "close up prompt",
            "viewFromBehind": "behind prompt",
            "sideProfile": "profile prompt",
            "actionShot": "action prompt",
        })
    }

    #[test]
    fn test_parse_complete_payload() {
        let prompts = PromptSet::parse(&full_payload().to_string()).unwrap();

        assert_eq!(prompts.get(ShotKind::FullBody), "full body prompt");
        assert_eq!(prompts.get(ShotKind::ActionShot), "action prompt");
    }

    #[test]
    fn test_parse_missing_field_is_schema_violation() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("sideProfile");

        assert_matches!(
            PromptSet::parse(&payload.to_string()),
            Err(GenerationError::SchemaViolation(_))
        );
    }

    #[test]
    fn test_parse_extra_field_is_schema_violation() {
        let mut payload = full_payload();
        payload["portrait"] = json!("extra");

        assert_matches!(
            PromptSet::parse(&payload.to_string()),
            Err(GenerationError::SchemaViolation(_))
        );
    }

    #[test]
    fn test_parse_blank_prompt_is_schema_violation() {
        let mut payload = full_payload();
        payload["actionShot"] = json!("  ");

        assert_eq!(
            PromptSet::parse(&payload.to_string()),
            Err(GenerationError::SchemaViolation("actionShot is blank".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_text_is_empty_response() {
        assert_eq!(PromptSet::parse(""), Err(GenerationError::EmptyResponse));
        assert_eq!(PromptSet::parse(" \n"), Err(GenerationError::EmptyResponse));
    }

    #[test]
    fn test_parse_non_json_is_schema_violation() {
        assert_matches!(
            PromptSet::parse("Here are your prompts!"),
            Err(GenerationError::SchemaViolation(_))
        );
    }
}
