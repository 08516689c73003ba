//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::{json, Map, Value};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Websites loaded into a default mock server.
pub struct DefaultScenario {
    pub websites: Vec<(String, Map<String, Value>)>,
}

impl Fixtures {
    /// Create a minimal website record with a title only.
    pub fn minimal_website(title: &str) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("title".to_string(), Value::from(title));
        record
    }

    /// Create a published landing-page website.
    pub fn landing_page(title: &str, owner_email: &str) -> Map<String, Value> {
        let record = json!({
            "title": title,
            "tagline": "Coming soon",
            "theme": "light",
            "published": true,
            "ownerEmail": owner_email,
            "sections": ["hero", "features", "contact"]
        });
        match record {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// The default scenario: a landing page and a draft site.
    pub fn default_scenario() -> DefaultScenario {
        let mut draft = Self::minimal_website("Draft Site");
        draft.insert("published".to_string(), Value::from(false));

        DefaultScenario {
            websites: vec![
                (
                    "site-1".to_string(),
                    Self::landing_page("Test Website", "owner@example.com"),
                ),
                ("site-2".to_string(), draft),
            ],
        }
    }
}
