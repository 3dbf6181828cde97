use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// A parsed candidate row as stored by the persistence collaborator.
/// Skills and experience arrive as JSON columns; every field defaults when
/// absent so a sparse record never fails scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub professional_specialty: String,
    #[serde(default)]
    pub total_years_experience: f64,
    /// Category name → ordered skill list.
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

impl CandidateRecord {
    /// Parses a single record from its stored JSON form.
    pub fn from_json(raw: &str) -> Result<Self, MatchError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The lower-cased text the scorer searches: name, specialty, every
    /// skill value in category order, then position/company/description of
    /// each experience entry, space-joined.
    pub fn profile_text(&self) -> String {
        let skills_text = self
            .skills
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        let experience_text = self
            .experience
            .iter()
            .map(|exp| format!("{} {} {}", exp.position, exp.company, exp.description))
            .collect::<Vec<_>>()
            .join(" ");

        [
            self.name.as_str(),
            self.professional_specialty.as_str(),
            skills_text.as_str(),
            experience_text.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
