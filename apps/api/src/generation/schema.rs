//! Response schema declared to the model.
//!
//! This is a versioned contract: any field added or renamed here must be
//! mirrored in `models::curriculum` in the same change, and `SCHEMA_VERSION`
//! bumped.

use serde_json::{json, Value};

pub const SCHEMA_VERSION: u32 = 1;

pub const SERIES_FIELDS: &[&str] = &["title", "description", "weeks", "target_audience"];

pub const WEEK_FIELDS: &[&str] = &[
    "week_number",
    "title",
    "scripture_reference",
    "key_verse",
    "main_idea",
    "learning_objective",
    "hook",
    "teaching_points",
    "discussion_questions",
    "application_challenge",
    "activity_idea",
];

pub const TEACHING_POINT_FIELDS: &[&str] = &["point", "description"];

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn described(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

/// Builds the OpenAPI-subset schema for a `CurriculumSeries`.
pub fn curriculum_schema() -> Value {
    let teaching_point = json!({
        "type": "OBJECT",
        "properties": {
            "point": described("The headline"),
            "description": described("Full teaching paragraph (100+ words)"),
        },
        "required": TEACHING_POINT_FIELDS,
    });

    let week = json!({
        "type": "OBJECT",
        "properties": {
            "week_number": { "type": "INTEGER" },
            "title": string(),
            "scripture_reference": string(),
            "key_verse": string(),
            "main_idea": string(),
            "learning_objective": string(),
            "hook": described("Full opening story/hook text"),
            "teaching_points": { "type": "ARRAY", "items": teaching_point },
            "discussion_questions": { "type": "ARRAY", "items": string() },
            "application_challenge": string(),
            "activity_idea": string(),
        },
        "required": WEEK_FIELDS,
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": described("Series Title"),
            "description": described("Series Overview (approx 50 words)"),
            "target_audience": string(),
            "weeks": { "type": "ARRAY", "items": week },
        },
        "required": SERIES_FIELDS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curriculum::fixtures;

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    fn sorted(fields: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_every_declared_property_is_required() {
        let schema = curriculum_schema();
        assert_eq!(keys(&schema["properties"]), sorted(SERIES_FIELDS));

        let week = &schema["properties"]["weeks"]["items"];
        assert_eq!(keys(&week["properties"]), sorted(WEEK_FIELDS));

        let point = &week["properties"]["teaching_points"]["items"];
        assert_eq!(keys(&point["properties"]), sorted(TEACHING_POINT_FIELDS));
    }

    #[test]
    fn test_schema_matches_typed_structures() {
        // Field names serialized by the typed tree must equal the schema's.
        let series = serde_json::to_value(fixtures::series(1)).unwrap();
        assert_eq!(keys(&series), sorted(SERIES_FIELDS));
        assert_eq!(keys(&series["weeks"][0]), sorted(WEEK_FIELDS));
        assert_eq!(
            keys(&series["weeks"][0]["teaching_points"][0]),
            sorted(TEACHING_POINT_FIELDS)
        );
    }
}
