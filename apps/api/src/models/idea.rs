use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Closed input enums
// ────────────────────────────────────────────────────────────────────────────

/// A closed enum whose wire form is a fixed human-readable label.
pub trait Labelled: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Labelled for $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum!(SkillLevel {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
});

labelled_enum!(Domain {
    Aiml => "AIML",
    WebDev => "Web Dev",
    DataScience => "Data Science",
    CyberSecurity => "Cyber Security",
    AppDev => "App Dev",
});

labelled_enum!(Language {
    Python => "Python",
    Java => "Java",
    JavaScript => "JavaScript",
    Cpp => "C++",
});

labelled_enum!(ProjectType {
    MiniProject => "Mini Project",
    MajorProject => "Major Project",
    StartupIdea => "Startup Idea",
});

/// The four user preferences that drive a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaInput {
    pub skill_level: SkillLevel,
    pub domain: Domain,
    pub language: Language,
    pub project_type: ProjectType,
}

impl IdeaInput {
    /// Validates a raw JSON request body.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported with its field name, so a caller sending several bad values
    /// only hears about `skillLevel` first.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let object = body.as_object().ok_or_else(|| {
            AppError::validation(
                format!("Expected object, received {}", json_type_name(body)),
                None,
            )
        })?;

        Ok(IdeaInput {
            skill_level: parse_label(object, "skillLevel")?,
            domain: parse_label(object, "domain")?,
            language: parse_label(object, "language")?,
            project_type: parse_label(object, "projectType")?,
        })
    }
}

/// Mirrors the schema validator the browser client shares: a missing field
/// is "Required", anything else outside the label set lists the choices.
fn parse_label<T: Labelled>(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<T, AppError> {
    let expected = || {
        T::ALL
            .iter()
            .map(|v| format!("'{}'", v.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    match object.get(field) {
        None => Err(AppError::validation("Required", Some(field))),
        Some(Value::String(raw)) => T::from_label(raw).ok_or_else(|| {
            AppError::validation(
                format!("Invalid enum value. Expected {}, received '{raw}'", expected()),
                Some(field),
            )
        }),
        Some(other) => Err(AppError::validation(
            format!("Expected {}, received {}", expected(), json_type_name(other)),
            Some(field),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub stage: String,
    pub details: String,
}

/// Extra guidance attached to Advanced-tier AIML ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedMetadata {
    pub optimization: String,
    pub explainability: String,
    pub scalability: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeTemplate {
    pub filename: String,
    pub language: String,
    pub content: String,
}

/// The generated project idea returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub title: String,
    pub problem_statement: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_suggestions: Option<Vec<DatasetEntry>>,
    pub roadmap: Vec<String>,
    pub folder_structure: String,
    pub future_enhancements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_pipeline: Option<Vec<PipelineStage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_metadata: Option<AdvancedMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_templates: Option<Vec<CodeTemplate>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "skillLevel": "Advanced",
            "domain": "Web Dev",
            "language": "C++",
            "projectType": "Startup Idea"
        })
    }

    fn expect_validation(result: Result<IdeaInput, AppError>) -> (String, Option<&'static str>) {
        match result {
            Err(AppError::Validation { message, field }) => (message, field),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_body_parses_labels() {
        let input = IdeaInput::from_json(&valid_body()).unwrap();
        assert_eq!(input.skill_level, SkillLevel::Advanced);
        assert_eq!(input.domain, Domain::WebDev);
        assert_eq!(input.language, Language::Cpp);
        assert_eq!(input.project_type, ProjectType::StartupIdea);
    }

    #[test]
    fn test_unknown_skill_level_names_field() {
        let mut body = valid_body();
        body["skillLevel"] = json!("Expert");
        let (message, field) = expect_validation(IdeaInput::from_json(&body));
        assert_eq!(field, Some("skillLevel"));
        assert!(message.contains("'Expert'"), "message was {message}");
        assert!(message.contains("'Beginner' | 'Intermediate' | 'Advanced'"));
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let body = json!({ "skillLevel": "Beginner", "domain": "Cooking", "language": 7 });
        let (_, field) = expect_validation(IdeaInput::from_json(&body));
        assert_eq!(field, Some("domain"));
    }

    #[test]
    fn test_missing_field_is_required() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("projectType");
        let (message, field) = expect_validation(IdeaInput::from_json(&body));
        assert_eq!(message, "Required");
        assert_eq!(field, Some("projectType"));
    }

    #[test]
    fn test_non_string_value_lists_choices_and_type() {
        let mut body = valid_body();
        body["language"] = json!(42);
        let (message, field) = expect_validation(IdeaInput::from_json(&body));
        assert_eq!(
            message,
            "Expected 'Python' | 'Java' | 'JavaScript' | 'C++', received number"
        );
        assert_eq!(field, Some("language"));
    }

    #[test]
    fn test_null_value_is_not_required_but_invalid() {
        let mut body = valid_body();
        body["skillLevel"] = Value::Null;
        let (message, field) = expect_validation(IdeaInput::from_json(&body));
        assert_eq!(
            message,
            "Expected 'Beginner' | 'Intermediate' | 'Advanced', received null"
        );
        assert_eq!(field, Some("skillLevel"));
    }

    #[test]
    fn test_non_object_body_has_no_field() {
        let (message, field) = expect_validation(IdeaInput::from_json(&json!(["AIML"])));
        assert_eq!(field, None);
        assert!(message.contains("array"));
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        let serialized = serde_json::to_value(Domain::CyberSecurity).unwrap();
        assert_eq!(serialized, json!("Cyber Security"));
        assert_eq!(Domain::from_label("App Dev"), Some(Domain::AppDev));
        assert_eq!(Language::from_label("Rust"), None);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let idea = ProjectIdea {
            title: "t".into(),
            problem_statement: "p".into(),
            description: "d".into(),
            key_features: vec!["f".into()],
            tech_stack: vec!["s".into()],
            dataset_suggestions: None,
            roadmap: vec!["r".into()],
            folder_structure: "x/".into(),
            future_enhancements: vec!["e".into()],
            model_name: None,
            learning_type: None,
            evaluation_metric: None,
            ml_pipeline: None,
            advanced_metadata: None,
            code_templates: None,
        };
        let value = serde_json::to_value(&idea).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("problemStatement"));
        assert!(!object.contains_key("modelName"));
        assert!(!object.contains_key("datasetSuggestions"));
    }
}
