//! Static content tables the generator draws from.

use crate::models::idea::{Domain, SkillLevel};

pub fn titles(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Aiml => &[
            "Smart Disease Predictor",
            "Customer Churn Analyzer",
            "Fake News Detector",
            "Face Mask Detection",
            "Movie Recommendation Engine",
            "Intelligent Voice Assistant",
            "Crop Yield Predictor",
            "AI Traffic Management",
        ],
        Domain::WebDev => &[
            "E-Commerce Platform",
            "Task Management SaaS",
            "Real-time Chat App",
            "Portfolio Generator",
            "Crowdfunding Portal",
            "Online Learning Hub",
        ],
        Domain::DataScience => &[
            "Stock Market Visualizer",
            "Global Warming Trends Dashboard",
            "Sports Performance Analysis",
            "Crypto Price Tracker",
            "Housing Price Predictor",
            "Air Quality Data Explorer",
        ],
        Domain::CyberSecurity => &[
            "Packet Sniffer Tool",
            "Password Strength Analyzer",
            "Network Intrusion Detector",
            "Encrypted Chat System",
            "Malware Signature Scanner",
            "Phishing URL Checker",
        ],
        Domain::AppDev => &[
            "Fitness Tracker",
            "Budget Manager",
            "Recipe Finder",
            "Meditation Timer",
            "Local Event Finder",
            "Habit Builder App",
        ],
    }
}

/// Problem statements per domain. `None` means the domain uses
/// [`GENERIC_PROBLEMS`].
pub fn problems(domain: Domain) -> Option<&'static [&'static str]> {
    match domain {
        Domain::Aiml => Some(&[
            "Early disease detection is crucial but often delayed by a lack of accessible tools.",
            "Businesses lose revenue because they cannot predict when customers will leave.",
            "Misinformation spreads faster than manual fact-checkers can respond.",
            "Traffic congestion causes massive delays and pollution in urban areas.",
        ]),
        Domain::WebDev => Some(&[
            "Small businesses struggle to set up online stores quickly and affordably.",
            "Remote teams lack unified tools for managing tasks effectively.",
            "Existing communication tools are bloated and slow.",
        ]),
        Domain::CyberSecurity => Some(&[
            "Users often use weak passwords, making them vulnerable to hacks.",
            "Public networks are insecure, leading to data theft.",
            "Malware is evolving faster than traditional antivirus signatures.",
        ]),
        Domain::DataScience | Domain::AppDev => None,
    }
}

pub const GENERIC_PROBLEMS: &[&str] = &[
    "Manual processes are inefficient and prone to error.",
    "Data is scattered and hard to analyze.",
    "Users lack a centralized platform for this task.",
];

/// Every idea starts with the first two of these.
pub const BASE_FEATURES: &[&str] = &[
    "User Authentication",
    "Responsive Design",
    "Dashboard Analytics",
    "Export Reports (PDF/CSV)",
    "Dark Mode Support",
];

pub fn domain_features(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Aiml => &[
            "Model Training Interface",
            "Real-time Prediction",
            "Confusion Matrix Visualization",
            "Dataset Upload Support",
            "Model Export (.pkl/.h5)",
            "Hyperparameter Tuning Panel",
            "Prediction History Log",
        ],
        Domain::WebDev => &[
            "Payment Gateway Integration",
            "Real-time Notifications (WebSockets)",
            "CMS for Admin",
            "Social Media Login",
            "SEO Optimization",
            "Role-based Access Control",
            "REST API Documentation",
        ],
        Domain::DataScience => &[
            "Interactive Charts (D3/Plotly)",
            "Data Cleaning Pipeline",
            "Statistical Summary",
            "Predictive Modeling",
            "CSV/Excel Import",
            "Scheduled Data Refresh",
            "Correlation Heatmaps",
        ],
        Domain::CyberSecurity => &[
            "Packet Capture Engine",
            "Encryption (AES-256)",
            "Vulnerability Scanning",
            "Log Analysis",
            "IP Blocking",
            "Threat Alert Dashboard",
            "Two-Factor Authentication",
        ],
        Domain::AppDev => &[
            "Push Notifications",
            "Offline Mode",
            "GPS/Location Services",
            "Camera Integration",
            "App Store Optimization",
            "Cloud Sync",
            "Home Screen Widgets",
        ],
    }
}

/// How many domain-specific features each tier receives.
pub fn feature_count(skill_level: SkillLevel) -> usize {
    match skill_level {
        SkillLevel::Beginner => 2,
        SkillLevel::Intermediate => 4,
        SkillLevel::Advanced => 6,
    }
}

pub const ROADMAP: &[&str] = &[
    "Requirement Analysis & Planning",
    "Environment Setup & Installation",
    "Core Feature Implementation",
    "UI/UX Design & Integration",
    "Testing & Debugging",
    "Documentation & Deployment",
];

pub const FUTURE_ENHANCEMENTS: &[&str] = &[
    "Mobile App Integration",
    "AI-powered Insights",
    "Cloud Deployment (AWS/Azure)",
];

/// (name, description)
pub const AIML_DATASETS: &[(&str, &str)] = &[
    (
        "Kaggle Datasets",
        "Community-curated datasets covering health, finance and text classification.",
    ),
    (
        "UCI Machine Learning Repository",
        "Classic benchmark datasets for supervised learning experiments.",
    ),
    (
        "Google Dataset Search",
        "Search engine for publicly available datasets across domains.",
    ),
    (
        "Hugging Face Datasets",
        "Ready-to-load NLP and vision datasets with a Python API.",
    ),
    (
        "Open Images Dataset",
        "Millions of annotated images for detection and classification tasks.",
    ),
];

pub const DATA_SCIENCE_DATASET: (&str, &str) = (
    "Data.gov",
    "Open government data on economy, climate, health and public services.",
);

// ────────────────────────────────────────────────────────────────────────────
// ML configuration per tier
// ────────────────────────────────────────────────────────────────────────────

pub struct MlConfig {
    pub models: &'static [&'static str],
    pub learning_type: &'static str,
    pub metrics: &'static [&'static str],
}

pub fn ml_config(skill_level: SkillLevel) -> MlConfig {
    match skill_level {
        SkillLevel::Beginner => MlConfig {
            models: &["Linear Regression", "Logistic Regression", "Decision Tree"],
            learning_type: "Supervised Learning",
            metrics: &["Accuracy", "Mean Absolute Error"],
        },
        SkillLevel::Intermediate => MlConfig {
            models: &["Random Forest", "XGBoost", "Support Vector Machine"],
            learning_type: "Supervised Learning (Ensemble Methods)",
            metrics: &["F1 Score", "ROC-AUC"],
        },
        SkillLevel::Advanced => MlConfig {
            models: &["Gradient Boosted Trees", "Deep Neural Network", "LightGBM"],
            learning_type: "Deep Learning",
            metrics: &["ROC-AUC", "F1 Score", "Log Loss"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::idea::Labelled;

    #[test]
    fn test_aiml_has_eight_titles() {
        assert_eq!(titles(Domain::Aiml).len(), 8);
    }

    #[test]
    fn test_every_domain_covers_the_advanced_tier() {
        for domain in Domain::ALL {
            assert!(
                domain_features(*domain).len() >= feature_count(SkillLevel::Advanced),
                "{domain} has too few features"
            );
            assert!(!titles(*domain).is_empty());
        }
    }

    #[test]
    fn test_problem_fallback_domains() {
        assert!(problems(Domain::DataScience).is_none());
        assert!(problems(Domain::AppDev).is_none());
        assert_eq!(GENERIC_PROBLEMS.len(), 3);
    }

    #[test]
    fn test_ml_configs_are_populated() {
        for level in SkillLevel::ALL {
            let config = ml_config(*level);
            assert!(!config.models.is_empty());
            assert!(!config.metrics.is_empty());
        }
    }
}
