use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct SkillReference {
    pub name: String,
    pub weight: f64,
    pub market_premium: f64,
}

/// `location_multiplier` may be unset; the policy default applies then.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct LocationReference {
    pub city: String,
    pub location_multiplier: Option<f64>,
}

/// `trend_percentage` may be unset; the policy default applies then.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct IndustryReference {
    pub industry: String,
    pub trend_percentage: Option<f64>,
}

/// Lookup key shared by all reference tables: trimmed and lowercased.
pub fn reference_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Reference tables keyed by normalised name/city/industry.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    skills: HashMap<String, SkillReference>,
    locations: HashMap<String, LocationReference>,
    industries: HashMap<String, IndustryReference>,
}

impl ReferenceData {
    pub fn new(
        skills: impl IntoIterator<Item = SkillReference>,
        locations: impl IntoIterator<Item = LocationReference>,
        industries: impl IntoIterator<Item = IndustryReference>,
    ) -> Self {
        Self {
            skills: skills
                .into_iter()
                .map(|s| (reference_key(&s.name), s))
                .collect(),
            locations: locations
                .into_iter()
                .map(|l| (reference_key(&l.city), l))
                .collect(),
            industries: industries
                .into_iter()
                .map(|i| (reference_key(&i.industry), i))
                .collect(),
        }
    }

    pub fn skill(&self, name: &str) -> Option<&SkillReference> {
        self.skills.get(&reference_key(name))
    }

    pub fn location(&self, city: &str) -> Option<&LocationReference> {
        self.locations.get(&reference_key(city))
    }

    pub fn industry(&self, industry: &str) -> Option<&IndustryReference> {
        self.industries.get(&reference_key(industry))
    }
}
