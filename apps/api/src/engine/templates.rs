//! Starter code stubs attached to an idea.
//!
//! Dispatch goes domain first, then language. Combinations without a
//! dedicated stub get a single generic entry point for the language.

use crate::models::idea::{CodeTemplate, Domain, Language, SkillLevel};

fn template(filename: &str, language: &str, content: impl Into<String>) -> CodeTemplate {
    CodeTemplate {
        filename: filename.to_string(),
        language: language.to_string(),
        content: content.into(),
    }
}

pub fn select_templates(
    domain: Domain,
    language: Language,
    skill_level: SkillLevel,
    model_name: Option<&str>,
) -> Vec<CodeTemplate> {
    let specific = match domain {
        Domain::Aiml => aiml_templates(language, skill_level, model_name.unwrap_or("baseline")),
        Domain::WebDev => web_templates(language),
        Domain::DataScience => data_science_templates(language),
        Domain::CyberSecurity => security_templates(language),
        Domain::AppDev => app_templates(language),
    };

    if specific.is_empty() {
        vec![generic_template(language)]
    } else {
        specific
    }
}

fn aiml_templates(language: Language, skill_level: SkillLevel, model: &str) -> Vec<CodeTemplate> {
    match language {
        Language::Python => {
            let mut templates = vec![
                template(
                    "train.py",
                    "python",
                    format!(
                        r#"import pandas as pd
from sklearn.model_selection import train_test_split

# Model: {model}
df = pd.read_csv("data/processed/dataset.csv")
X, y = df.drop(columns=["target"]), df["target"]
X_train, X_test, y_train, y_test = train_test_split(X, y, test_size=0.2)

model = build_model()  # {model}
model.fit(X_train, y_train)
save_model(model, "models/model.pkl")
"#
                    ),
                ),
                template(
                    "predict.py",
                    "python",
                    format!(
                        r#"import sys
from src.features import prepare

model = load_model("models/model.pkl")  # {model}

def predict(raw):
    return model.predict(prepare(raw))

if __name__ == "__main__":
    print(predict(sys.argv[1]))
"#
                    ),
                ),
            ];
            if skill_level == SkillLevel::Advanced {
                templates.push(template(
                    "evaluate.py",
                    "python",
                    format!(
                        r#"import shap
from sklearn.metrics import classification_report

model = load_model("models/model.pkl")  # {model}
print(classification_report(y_test, model.predict(X_test)))

explainer = shap.Explainer(model)
shap.summary_plot(explainer(X_test), X_test)
"#
                    ),
                ));
            }
            templates
        }
        Language::Java => vec![template(
            "ModelTrainer.java",
            "java",
            format!(
                r#"public class ModelTrainer {{
    // Model: {model}
    public static void main(String[] args) {{
        Dataset data = Dataset.load("data/train.csv");
        Model model = new Model("{model}");
        model.fit(data);
    }}
}}
"#
            ),
        )],
        Language::JavaScript => vec![template(
            "model.js",
            "javascript",
            format!(
                r#"import * as tf from "@tensorflow/tfjs";

// Model: {model}
export async function train(xs, ys) {{
  const model = tf.sequential();
  model.add(tf.layers.dense({{ units: 16, activation: "relu", inputShape: [xs.shape[1]] }}));
  model.add(tf.layers.dense({{ units: 1, activation: "sigmoid" }}));
  model.compile({{ optimizer: "adam", loss: "binaryCrossentropy" }});
  await model.fit(xs, ys, {{ epochs: 20 }});
  return model;
}}
"#
            ),
        )],
        Language::Cpp => vec![template(
            "model.cpp",
            "cpp",
            format!(
                r#"#include <iostream>

// Model: {model}
int main() {{
    auto data = load_csv("data/train.csv");
    auto model = train(data);
    std::cout << "Trained {model}" << std::endl;
    return 0;
}}
"#
            ),
        )],
    }
}

fn web_templates(language: Language) -> Vec<CodeTemplate> {
    match language {
        Language::JavaScript => vec![
            template(
                "server.js",
                "javascript",
                r#"const express = require("express");
const app = express();
app.use(express.json());

app.get("/api/health", (_req, res) => res.json({ status: "ok" }));

app.listen(3000, () => console.log("Server running on port 3000"));
"#,
            ),
            template(
                "App.jsx",
                "javascript",
                r#"export default function App() {
  return (
    <main>
      <h1>Welcome</h1>
    </main>
  );
}
"#,
            ),
        ],
        Language::Python => vec![template(
            "app.py",
            "python",
            r#"from fastapi import FastAPI

app = FastAPI()

@app.get("/api/health")
def health():
    return {"status": "ok"}
"#,
        )],
        Language::Java => vec![template(
            "HealthController.java",
            "java",
            r#"@RestController
public class HealthController {
    @GetMapping("/api/health")
    public Map<String, String> health() {
        return Map.of("status", "ok");
    }
}
"#,
        )],
        Language::Cpp => vec![],
    }
}

fn data_science_templates(language: Language) -> Vec<CodeTemplate> {
    match language {
        Language::Python => vec![template(
            "analysis.py",
            "python",
            r#"import pandas as pd
import plotly.express as px

df = pd.read_csv("data/dataset.csv").dropna()
print(df.describe())

fig = px.line(df, x="date", y="value")
fig.write_html("reports/trend.html")
"#,
        )],
        _ => vec![],
    }
}

fn security_templates(language: Language) -> Vec<CodeTemplate> {
    match language {
        Language::Python => vec![template(
            "scanner.py",
            "python",
            r#"import socket

def scan(host, ports):
    open_ports = []
    for port in ports:
        with socket.socket(socket.AF_INET, socket.SOCK_STREAM) as s:
            s.settimeout(0.5)
            if s.connect_ex((host, port)) == 0:
                open_ports.append(port)
    return open_ports
"#,
        )],
        Language::Cpp => vec![template(
            "sniffer.cpp",
            "cpp",
            r#"#include <pcap.h>
#include <iostream>

void on_packet(u_char*, const struct pcap_pkthdr* header, const u_char*) {
    std::cout << "Captured " << header->len << " bytes" << std::endl;
}

int main() {
    char errbuf[PCAP_ERRBUF_SIZE];
    pcap_t* handle = pcap_open_live("eth0", BUFSIZ, 1, 1000, errbuf);
    pcap_loop(handle, 0, on_packet, nullptr);
    return 0;
}
"#,
        )],
        _ => vec![],
    }
}

fn app_templates(language: Language) -> Vec<CodeTemplate> {
    match language {
        Language::Java => vec![template(
            "MainActivity.java",
            "java",
            r#"public class MainActivity extends AppCompatActivity {
    @Override
    protected void onCreate(Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
        setContentView(R.layout.activity_main);
    }
}
"#,
        )],
        _ => vec![],
    }
}

fn generic_template(language: Language) -> CodeTemplate {
    match language {
        Language::Python => template(
            "main.py",
            "python",
            r#"def main():
    print("Hello, project!")

if __name__ == "__main__":
    main()
"#,
        ),
        Language::JavaScript => template(
            "main.js",
            "javascript",
            r#"function main() {
  console.log("Hello, project!");
}

main();
"#,
        ),
        Language::Java => template(
            "Main.java",
            "java",
            r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, project!");
    }
}
"#,
        ),
        Language::Cpp => template(
            "main.cpp",
            "cpp",
            r#"#include <iostream>

int main() {
    std::cout << "Hello, project!" << std::endl;
    return 0;
}
"#,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::idea::Labelled;

    #[test]
    fn test_aiml_python_advanced_has_train_py_with_model() {
        let templates = select_templates(
            Domain::Aiml,
            Language::Python,
            SkillLevel::Advanced,
            Some("CNN (Convolutional Neural Network)"),
        );
        let names: Vec<_> = templates.iter().map(|t| t.filename.as_str()).collect();
        assert_eq!(names, vec!["train.py", "predict.py", "evaluate.py"]);
        assert!(templates[0].content.contains("CNN (Convolutional Neural Network)"));
        assert_eq!(templates[0].language, "python");
    }

    #[test]
    fn test_aiml_python_beginner_skips_evaluate() {
        let templates = select_templates(
            Domain::Aiml,
            Language::Python,
            SkillLevel::Beginner,
            Some("Decision Tree"),
        );
        assert_eq!(templates.len(), 2);
    }

    #[test]
    fn test_unmatched_combination_gets_generic_stub() {
        let templates = select_templates(Domain::AppDev, Language::Cpp, SkillLevel::Beginner, None);
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].filename, "main.cpp");
    }

    #[test]
    fn test_every_combination_returns_something() {
        for domain in Domain::ALL {
            for language in Language::ALL {
                for level in SkillLevel::ALL {
                    let templates = select_templates(*domain, *language, *level, Some("XGBoost"));
                    assert!(!templates.is_empty(), "{domain}/{language}/{level}");
                    assert!(templates.iter().all(|t| !t.content.is_empty()));
                }
            }
        }
    }

    #[test]
    fn test_java_aiml_stub_braces_render() {
        let templates = select_templates(
            Domain::Aiml,
            Language::Java,
            SkillLevel::Intermediate,
            Some("XGBoost"),
        );
        assert!(templates[0].content.starts_with("public class ModelTrainer {"));
        assert!(templates[0].content.contains("new Model(\"XGBoost\")"));
    }
}
