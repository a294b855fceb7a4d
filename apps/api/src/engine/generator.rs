//! Idea Assembler — builds a `ProjectIdea` from the lookup tables.
//!
//! Randomness comes from the caller's `Rng`, so a seeded `StdRng` makes the
//! whole document reproducible. No I/O and no failure paths: every valid
//! `IdeaInput` produces a complete idea.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::ml::{advanced_metadata, pipeline, select_ml, MlSelection};
use crate::engine::scoring::relevance_score;
use crate::engine::stack::{folder_structure, tech_stack};
use crate::engine::tables::{
    self, AIML_DATASETS, BASE_FEATURES, DATA_SCIENCE_DATASET, FUTURE_ENHANCEMENTS,
    GENERIC_PROBLEMS, ROADMAP,
};
use crate::engine::templates::select_templates;
use crate::models::idea::{
    DatasetEntry, Domain, IdeaInput, Labelled, ProjectIdea, ProjectType, SkillLevel,
};

/// Number of random title draws competing on relevance.
const TITLE_CANDIDATES: usize = 3;
/// Base features every idea starts with.
const BASE_FEATURE_COUNT: usize = 2;
const AIML_DATASET_COUNT: usize = 2;

pub fn generate_project<R: Rng + ?Sized>(input: &IdeaInput, rng: &mut R) -> ProjectIdea {
    let base_title = pick_title(input.domain, rng);
    let title = customize_title(base_title, input.project_type);
    let problem = pick_problem(input.domain, rng);

    let ml = (input.domain == Domain::Aiml).then(|| select_ml(&title, input.skill_level, rng));
    let description = compose_description(input, problem, ml.as_ref());

    let key_features = select_features(input.domain, input.skill_level, rng);
    let dataset_suggestions = dataset_suggestions(input.domain, rng);
    let code_templates = select_templates(
        input.domain,
        input.language,
        input.skill_level,
        ml.as_ref().map(|m| m.model_name.as_str()),
    );

    let (ml_pipeline, advanced) = match &ml {
        Some(selection) => (Some(pipeline(selection)), advanced_metadata(input.skill_level)),
        None => (None, None),
    };

    ProjectIdea {
        title,
        problem_statement: problem.to_string(),
        description,
        key_features,
        tech_stack: to_strings(tech_stack(input.language, input.domain)),
        dataset_suggestions,
        roadmap: to_strings(ROADMAP),
        folder_structure: folder_structure(input.domain, input.language).to_string(),
        future_enhancements: to_strings(FUTURE_ENHANCEMENTS),
        model_name: ml.as_ref().map(|m| m.model_name.clone()),
        learning_type: ml.as_ref().map(|m| m.learning_type.clone()),
        evaluation_metric: ml.map(|m| m.evaluation_metric),
        ml_pipeline,
        advanced_metadata: advanced,
        code_templates: (!code_templates.is_empty()).then_some(code_templates),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Title
// ────────────────────────────────────────────────────────────────────────────

/// Draws three titles with replacement and keeps the one most relevant to
/// the domain name.
pub fn pick_title<R: Rng + ?Sized>(domain: Domain, rng: &mut R) -> &'static str {
    let titles = tables::titles(domain);
    let candidates: Vec<&'static str> = (0..TITLE_CANDIDATES)
        .map(|_| titles[rng.gen_range(0..titles.len())])
        .collect();

    most_relevant(&candidates, domain.as_str()).unwrap_or(titles[0])
}

/// Left fold over `candidates`: the running best survives unless a
/// challenger scores strictly higher, so ties go to the earlier entry.
pub fn most_relevant<'a>(candidates: &[&'a str], reference: &str) -> Option<&'a str> {
    candidates.iter().copied().reduce(|best, challenger| {
        if relevance_score(best, reference) >= relevance_score(challenger, reference) {
            best
        } else {
            challenger
        }
    })
}

pub fn customize_title(title: &str, project_type: ProjectType) -> String {
    match project_type {
        ProjectType::MiniProject => format!("Lite {title}"),
        ProjectType::MajorProject => format!("Advanced {title} System"),
        ProjectType::StartupIdea => format!("{title} Pro Platform"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Problem & description
// ────────────────────────────────────────────────────────────────────────────

fn pick_problem<R: Rng + ?Sized>(domain: Domain, rng: &mut R) -> &'static str {
    let problems = tables::problems(domain).unwrap_or(GENERIC_PROBLEMS);
    problems.choose(rng).copied().unwrap_or(GENERIC_PROBLEMS[0])
}

fn compose_description(input: &IdeaInput, problem: &str, ml: Option<&MlSelection>) -> String {
    let level = input.skill_level.as_str().to_lowercase();
    match ml {
        Some(ml) => format!(
            "This project aims to solve the problem of \"{problem}\" by building a {level} \
             level {} solution powered by a {} model. The system will leverage {} to train, \
             evaluate and serve predictions.",
            input.domain, ml.model_name, input.language
        ),
        None => format!(
            "This project aims to solve the problem of \"{problem}\" by building a {level} \
             level {} application. The system will leverage {} to provide a robust solution.",
            input.domain, input.language
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Features & datasets
// ────────────────────────────────────────────────────────────────────────────

/// First two base features, then a random subset of domain features sized
/// by tier and capped by what the domain offers.
pub fn select_features<R: Rng + ?Sized>(
    domain: Domain,
    skill_level: SkillLevel,
    rng: &mut R,
) -> Vec<String> {
    let mut specific = tables::domain_features(domain).to_vec();
    specific.shuffle(rng);
    specific.truncate(tables::feature_count(skill_level));

    BASE_FEATURES[..BASE_FEATURE_COUNT]
        .iter()
        .chain(specific.iter())
        .map(|f| f.to_string())
        .collect()
}

pub fn dataset_suggestions<R: Rng + ?Sized>(
    domain: Domain,
    rng: &mut R,
) -> Option<Vec<DatasetEntry>> {
    let entry = |(name, description): (&str, &str)| DatasetEntry {
        name: name.to_string(),
        description: description.to_string(),
    };

    match domain {
        Domain::Aiml => Some(
            AIML_DATASETS
                .choose_multiple(rng, AIML_DATASET_COUNT)
                .map(|d| entry(*d))
                .collect(),
        ),
        Domain::DataScience => Some(vec![entry(DATA_SCIENCE_DATASET)]),
        _ => None,
    }
}
