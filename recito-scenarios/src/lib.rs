//! Built-in practice scenario catalog
//!
//! Read-only lesson content for read-aloud practice: five everyday
//! scenarios, each with a target paragraph and a pronunciation guide in six
//! languages (Spanish, French, German, Hindi, Kannada, Tamil). The scoring
//! engine never owns or mutates this data; it only receives the paragraph
//! text for a selected scenario and language.
//!
//! # Example
//!
//! ```
//! use recito_scenarios::catalog;
//!
//! let scenario = catalog().find("introduction").unwrap();
//! let paragraph = scenario.paragraph("es-ES").unwrap();
//! assert!(paragraph.starts_with("Hola"));
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// A selectable language for practice content
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageOption {
    /// Human-readable name, e.g. "Spanish"
    pub label: String,
    /// BCP-47 style code, e.g. "es-ES"; also the code handed to the
    /// speech recognition provider
    pub code: String,
}

/// One practice scenario: a themed paragraph in every supported language
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Language code → target paragraph in original script
    paragraphs: HashMap<String, String>,
    /// Language code → syllable-level pronunciation guide
    transliterations: HashMap<String, String>,
}

impl Scenario {
    /// Target paragraph for a language code
    pub fn paragraph(&self, language_code: &str) -> Option<&str> {
        self.paragraphs.get(language_code).map(String::as_str)
    }

    /// Pronunciation guide for a language code
    pub fn transliteration(&self, language_code: &str) -> Option<&str> {
        self.transliterations.get(language_code).map(String::as_str)
    }

    /// Language codes this scenario has content for
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.keys().map(String::as_str)
    }
}

/// The full catalog: language options plus scenarios
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    languages: Vec<LanguageOption>,
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Selectable languages, in presentation order
    pub fn languages(&self) -> &[LanguageOption] {
        &self.languages
    }

    /// All scenarios, in presentation order
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Look up a scenario by id
    pub fn find(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The built-in catalog, parsed once on first access.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        serde_json::from_str(include_str!("../data/scenarios.json"))
            .expect("built-in scenario catalog is valid JSON")
    })
}
