//! Tech stack and folder layout, keyed by (language, domain).

use crate::models::idea::{Domain, Language};

pub fn tech_stack(language: Language, domain: Domain) -> &'static [&'static str] {
    use Domain::*;
    use Language::*;

    match (language, domain) {
        (Python, Aiml) => &["Python", "Pandas", "Scikit-Learn", "TensorFlow", "PyTorch", "Jupyter"],
        (Python, DataScience) => &["Python", "Pandas", "NumPy", "Matplotlib", "Plotly", "Jupyter"],
        (Python, WebDev) => &["Python", "Django/FastAPI", "PostgreSQL", "HTML/CSS"],
        (Python, CyberSecurity) => &["Python", "Scapy", "Cryptography", "SQLite"],
        (Python, AppDev) => &["Python", "Kivy", "SQLite"],

        (JavaScript, WebDev) => &["React", "Node.js", "Express", "MongoDB", "TailwindCSS"],
        (JavaScript, AppDev) => &["React Native", "Expo", "Firebase"],
        (JavaScript, Aiml) => &["JavaScript", "TensorFlow.js", "Node.js", "Express"],
        (JavaScript, DataScience) => &["JavaScript", "D3.js", "Node.js", "PostgreSQL"],
        (JavaScript, CyberSecurity) => &["JavaScript", "Electron", "Node.js"],

        (Java, AppDev) => &["Java", "Android SDK", "Firebase", "XML Layouts"],
        (Java, Aiml) => &["Java", "Deeplearning4j", "Weka", "Spring Boot"],
        (Java, _) => &["Java", "Spring Boot", "MySQL", "Thymeleaf"],

        (Cpp, CyberSecurity) => &["C++", "OpenSSL", "libpcap", "Wireshark"],
        (Cpp, Aiml) => &["C++", "LibTorch", "OpenCV", "CMake"],
        (Cpp, _) => &["C++", "STL", "CMake", "Qt"],
    }
}

pub fn folder_structure(domain: Domain, language: Language) -> &'static str {
    match (domain, language) {
        (Domain::Aiml, Language::Python) => AIML_PYTHON_LAYOUT,
        (Domain::DataScience, Language::Python) => DATA_SCIENCE_PYTHON_LAYOUT,
        (_, Language::Python) => PYTHON_LAYOUT,
        (Domain::AppDev, Language::JavaScript) => REACT_NATIVE_LAYOUT,
        (_, Language::JavaScript) => JAVASCRIPT_LAYOUT,
        (Domain::AppDev, Language::Java) => ANDROID_LAYOUT,
        (_, Language::Java) => JAVA_LAYOUT,
        (_, Language::Cpp) => CPP_LAYOUT,
    }
}

const AIML_PYTHON_LAYOUT: &str = "\
project-root/
├── data/
│   ├── raw/
│   └── processed/
├── notebooks/
│   └── exploration.ipynb
├── models/
├── src/
│   ├── train.py
│   ├── predict.py
│   └── features.py
├── tests/
├── requirements.txt
└── README.md";

const DATA_SCIENCE_PYTHON_LAYOUT: &str = "\
project-root/
├── data/
├── notebooks/
├── src/
│   ├── analysis.py
│   ├── cleaning.py
│   └── charts.py
├── reports/
├── requirements.txt
└── README.md";

const PYTHON_LAYOUT: &str = "\
project-root/
├── main.py
├── requirements.txt
├── src/
│   ├── modules/
│   ├── utils/
│   └── data/
├── tests/
└── README.md";

const JAVASCRIPT_LAYOUT: &str = "\
project-root/
├── package.json
├── src/
│   ├── components/
│   ├── pages/
│   └── api/
├── public/
└── README.md";

const REACT_NATIVE_LAYOUT: &str = "\
project-root/
├── package.json
├── app.json
├── src/
│   ├── screens/
│   ├── components/
│   └── services/
├── assets/
└── README.md";

const ANDROID_LAYOUT: &str = "\
project-root/
├── app/
│   ├── src/main/java/
│   ├── src/main/res/layout/
│   └── build.gradle
├── gradle/
└── README.md";

const JAVA_LAYOUT: &str = "\
project-root/
├── pom.xml
├── src/
│   ├── main/java/
│   ├── main/resources/
│   └── test/java/
└── README.md";

const CPP_LAYOUT: &str = "\
project-root/
├── CMakeLists.txt
├── include/
├── src/
│   └── main.cpp
├── tests/
└── README.md";
