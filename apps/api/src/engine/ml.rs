//! ML metadata for AIML-domain ideas: model, learning type, metric, pipeline.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::tables::ml_config;
use crate::models::idea::{AdvancedMetadata, PipelineStage, SkillLevel};

/// Model / learning type / metric chosen for one idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MlSelection {
    pub model_name: String,
    pub learning_type: String,
    pub evaluation_metric: String,
}

/// Problem family inferred from the title wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskFamily {
    Supervised,
    Vision,
    Language,
    Unmatched,
}

fn task_family(title: &str) -> TaskFamily {
    if title.contains("Predictor") || title.contains("Analyzer") {
        TaskFamily::Supervised
    } else if title.contains("Detector") || title.contains("Detection") {
        TaskFamily::Vision
    } else if title.contains("Engine") || title.contains("Assistant") {
        TaskFamily::Language
    } else {
        TaskFamily::Unmatched
    }
}

/// Picks the model triple for a title at the given tier.
pub fn select_ml<R: Rng + ?Sized>(
    title: &str,
    skill_level: SkillLevel,
    rng: &mut R,
) -> MlSelection {
    let config = ml_config(skill_level);
    let advanced = skill_level == SkillLevel::Advanced;
    let random_model = |rng: &mut R| {
        config
            .models
            .choose(rng)
            .copied()
            .unwrap_or(config.models[0])
            .to_string()
    };

    let (model_name, learning_type, evaluation_metric) = match task_family(title) {
        TaskFamily::Supervised => (
            random_model(rng),
            config.learning_type.to_string(),
            config.metrics[0].to_string(),
        ),
        TaskFamily::Vision => (
            if advanced {
                "CNN (Convolutional Neural Network)".to_string()
            } else {
                random_model(rng)
            },
            "Supervised Learning (Computer Vision)".to_string(),
            "F1 Score".to_string(),
        ),
        TaskFamily::Language => (
            if advanced {
                "Transformers (BERT)".to_string()
            } else {
                random_model(rng)
            },
            "Natural Language Processing".to_string(),
            "Precision".to_string(),
        ),
        TaskFamily::Unmatched => (
            config.models[0].to_string(),
            "Supervised Learning".to_string(),
            config.metrics[0].to_string(),
        ),
    };

    MlSelection {
        model_name,
        learning_type,
        evaluation_metric,
    }
}

pub fn pipeline(selection: &MlSelection) -> Vec<PipelineStage> {
    let stage = |stage: &str, details: String| PipelineStage {
        stage: stage.to_string(),
        details,
    };

    vec![
        stage(
            "Data Collection",
            "Gather raw data from public datasets, APIs or manual labeling.".to_string(),
        ),
        stage(
            "Data Preprocessing",
            "Handle missing values, normalize features and encode categorical columns.".to_string(),
        ),
        stage(
            "Exploratory Data Analysis",
            "Visualize distributions and correlations to understand the data.".to_string(),
        ),
        stage(
            "Feature Engineering",
            "Select and construct the features that carry the most signal.".to_string(),
        ),
        stage(
            "Model Training",
            format!(
                "Train a {} model with a held-out validation split.",
                selection.model_name
            ),
        ),
        stage(
            "Evaluation",
            format!(
                "Measure performance using {} and iterate on weak spots.",
                selection.evaluation_metric
            ),
        ),
    ]
}

/// Only the Advanced tier gets these notes.
pub fn advanced_metadata(skill_level: SkillLevel) -> Option<AdvancedMetadata> {
    (skill_level == SkillLevel::Advanced).then(|| AdvancedMetadata {
        optimization: "Tune hyperparameters with grid search or Bayesian optimization, \
                       and apply quantization before deployment."
            .to_string(),
        explainability: "Use SHAP or LIME to explain individual predictions to stakeholders."
            .to_string(),
        scalability: "Serve the model behind a containerized REST API with batch inference \
                      and horizontal autoscaling."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_predictor_uses_tier_config() {
        let selection = select_ml("Smart Disease Predictor", SkillLevel::Intermediate, &mut rng());
        let config = ml_config(SkillLevel::Intermediate);
        assert!(config.models.contains(&selection.model_name.as_str()));
        assert_eq!(selection.learning_type, config.learning_type);
        assert_eq!(selection.evaluation_metric, config.metrics[0]);
    }

    #[test]
    fn test_detector_forces_cnn_at_advanced() {
        let selection = select_ml("Lite Fake News Detector", SkillLevel::Advanced, &mut rng());
        assert!(selection.model_name.starts_with("CNN"));
        assert_eq!(selection.evaluation_metric, "F1 Score");
    }

    #[test]
    fn test_detection_below_advanced_draws_from_config() {
        let selection = select_ml("Face Mask Detection", SkillLevel::Beginner, &mut rng());
        assert!(ml_config(SkillLevel::Beginner)
            .models
            .contains(&selection.model_name.as_str()));
        assert_eq!(selection.evaluation_metric, "F1 Score");
    }

    #[test]
    fn test_assistant_forces_transformers_at_advanced() {
        let selection = select_ml("Intelligent Voice Assistant", SkillLevel::Advanced, &mut rng());
        assert_eq!(selection.model_name, "Transformers (BERT)");
        assert_eq!(selection.learning_type, "Natural Language Processing");
        assert_eq!(selection.evaluation_metric, "Precision");
    }

    #[test]
    fn test_unmatched_title_takes_first_config_entries() {
        let selection = select_ml("AI Traffic Management", SkillLevel::Beginner, &mut rng());
        assert_eq!(selection.model_name, "Linear Regression");
        assert_eq!(selection.learning_type, "Supervised Learning");
        assert_eq!(selection.evaluation_metric, "Accuracy");
    }

    #[test]
    fn test_pipeline_interpolates_model_and_metric() {
        let selection = MlSelection {
            model_name: "XGBoost".into(),
            learning_type: "Supervised Learning".into(),
            evaluation_metric: "ROC-AUC".into(),
        };
        let stages = pipeline(&selection);
        assert_eq!(stages.len(), 6);
        assert!(stages[4].details.contains("XGBoost"));
        assert!(stages[5].details.contains("ROC-AUC"));
    }

    #[test]
    fn test_advanced_notes_only_for_advanced() {
        assert!(advanced_metadata(SkillLevel::Advanced).is_some());
        assert!(advanced_metadata(SkillLevel::Intermediate).is_none());
        assert!(advanced_metadata(SkillLevel::Beginner).is_none());
    }
}
