use serde::{Deserialize, Serialize};

use crate::render::catalog::display_name;

/// Ordered skill/language tokens. Membership is an exact, case-sensitive match.
///
/// Deserializes through `add`, so a stored list with blank or repeated tokens loads as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct SkillSet(Vec<String>);

/// A removable tag for one selected skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub token: String,
    pub label: String,
}

impl SkillSet {
    /// Appends `token` (trimmed). Returns false for empty or already present tokens.
    pub fn add(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.0.push(token.to_string());
        true
    }

    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s != token);
        self.0.len() != before
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|s| s == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chips(&self) -> Vec<Chip> {
        self.iter()
            .map(|token| Chip {
                token: token.to_string(),
                label: display_name(token).to_string(),
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SkillSet::default();
        for token in iter {
            set.add(token);
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(tokens: Vec<String>) -> Self {
        tokens.iter().map(String::as_str).collect()
    }
}
