use serde::{Deserialize, Serialize};

/// One headline + paragraph pair in a week's teaching guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingPoint {
    pub point: String,
    pub description: String,
}

/// A full lesson plan for a single week of the series.
///
/// `week_number` is whatever the model returned. The renderer numbers pages by
/// array position, not by this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekContent {
    pub week_number: i64,
    pub title: String,
    pub scripture_reference: String,
    pub key_verse: String,
    pub main_idea: String,
    pub learning_objective: String,
    pub hook: String,
    /// Expected length 3.
    pub teaching_points: Vec<TeachingPoint>,
    /// Expected length 5, ordered observation -> interpretation -> application.
    pub discussion_questions: Vec<String>,
    pub application_challenge: String,
    pub activity_idea: String,
}

/// The generated document tree. Read-only once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumSeries {
    pub title: String,
    pub description: String,
    pub target_audience: String,
    pub weeks: Vec<WeekContent>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn week(n: i64) -> WeekContent {
        WeekContent {
            week_number: n,
            title: format!("The Lost Sheep {n}"),
            scripture_reference: "Luke 15:1-7".to_string(),
            key_verse: "Rejoice with me; I have found my lost sheep.".to_string(),
            main_idea: "God pursues the one who wandered.".to_string(),
            learning_objective: "Students will see themselves as sought.".to_string(),
            hook: "Think about the last time you lost your phone.".to_string(),
            teaching_points: (1..=3)
                .map(|i| TeachingPoint {
                    point: format!("Point {i}"),
                    description: format!("Teaching paragraph {i}."),
                })
                .collect(),
            discussion_questions: (1..=5).map(|i| format!("Question {i}?")).collect(),
            application_challenge: "Reach out to someone on the margins.".to_string(),
            activity_idea: "Hide-and-seek with a stuffed sheep.".to_string(),
        }
    }

    pub fn series(weeks: usize) -> CurriculumSeries {
        CurriculumSeries {
            title: "Found".to_string(),
            description: "A series on the parables of Luke 15.".to_string(),
            target_audience: "High School".to_string(),
            weeks: (1..=weeks as i64).map(week).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_deserializes_from_model_reply() {
        let json = serde_json::to_string(&fixtures::series(2)).unwrap();
        let series: CurriculumSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series.weeks.len(), 2);
        assert_eq!(series.weeks[1].week_number, 2);
        assert_eq!(series.weeks[0].teaching_points.len(), 3);
    }

    #[test]
    fn test_week_missing_field_fails_deserialization() {
        // No activity_idea
        let bad = r#"{
            "week_number": 1, "title": "t", "scripture_reference": "s",
            "key_verse": "k", "main_idea": "m", "learning_objective": "l",
            "hook": "h", "teaching_points": [], "discussion_questions": [],
            "application_challenge": "a"
        }"#;
        let result: Result<WeekContent, _> = serde_json::from_str(bad);
        assert!(result.is_err(), "missing activity_idea must fail");
    }

    #[test]
    fn test_teaching_point_requires_description() {
        let result: Result<TeachingPoint, _> = serde_json::from_str(r#"{"point": "p"}"#);
        assert!(result.is_err());
    }
}
