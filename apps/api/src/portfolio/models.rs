use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::portfolio::skills::SkillSet;
use crate::render::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub website: String,
    pub profile_image: String,
    /// Hero line shown under the title in the classic template.
    pub introduction: String,
    /// Subtitle of the about section in the classic template.
    pub summary: String,
    pub resume_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

// Entries deserialized without an id (older blobs, hand-written JSON) get a fresh one.
impl Default for Project {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: String::new(),
        }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            website: String::new(),
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

/// Formats `"{start} - {end}"`, with an open end shown as `Present`.
pub fn date_range(start: &str, end: &str) -> String {
    let end = if end.trim().is_empty() { "Present" } else { end };
    format!("{start} - {end}")
}

impl Experience {
    pub fn years(&self) -> String {
        date_range(&self.start_date, &self.end_date)
    }
}

impl Education {
    pub fn years(&self) -> String {
        date_range(&self.start_date, &self.end_date)
    }
}

/// The single aggregate record behind the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub basics: Basics,
    pub social: SocialLinks,
    pub skills: SkillSet,
    #[serde(deserialize_with = "deserialize_entries")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "deserialize_entries")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "deserialize_entries")]
    pub education: Vec<Education>,
    pub theme: Theme,
}

/// A repeatable section entry addressed by id.
trait Entry {
    fn id_mut(&mut self) -> &mut Uuid;
}

impl Entry for Project {
    fn id_mut(&mut self) -> &mut Uuid {
        &mut self.id
    }
}

impl Entry for Experience {
    fn id_mut(&mut self) -> &mut Uuid {
        &mut self.id
    }
}

impl Entry for Education {
    fn id_mut(&mut self) -> &mut Uuid {
        &mut self.id
    }
}

// Ids stay unique within a section: a repeated id from a stored blob is reissued,
// keeping the first occurrence.
fn deserialize_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Entry,
{
    let mut entries = Vec::<T>::deserialize(deserializer)?;
    let mut seen = HashSet::new();
    for entry in &mut entries {
        let id = entry.id_mut();
        while !seen.insert(*id) {
            *id = Uuid::new_v4();
        }
    }
    Ok(entries)
}

impl Portfolio {
    pub fn update_basics(&mut self, basics: Basics) {
        self.basics = basics;
    }

    pub fn set_social(&mut self, social: SocialLinks) {
        self.social = social;
    }

    /// Appends a project under a fresh id and returns that id.
    pub fn add_project(&mut self, mut project: Project) -> Uuid {
        project.id = Uuid::new_v4();
        let id = project.id;
        self.projects.push(project);
        id
    }

    pub fn remove_project(&mut self, id: Uuid) -> bool {
        remove_by(&mut self.projects, |p| p.id == id)
    }

    pub fn remove_project_at(&mut self, index: usize) -> Option<Project> {
        remove_at(&mut self.projects, index)
    }

    pub fn add_experience(&mut self, mut experience: Experience) -> Uuid {
        experience.id = Uuid::new_v4();
        let id = experience.id;
        self.experience.push(experience);
        id
    }

    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        remove_by(&mut self.experience, |e| e.id == id)
    }

    pub fn remove_experience_at(&mut self, index: usize) -> Option<Experience> {
        remove_at(&mut self.experience, index)
    }

    pub fn add_education(&mut self, mut education: Education) -> Uuid {
        education.id = Uuid::new_v4();
        let id = education.id;
        self.education.push(education);
        id
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        remove_by(&mut self.education, |e| e.id == id)
    }

    pub fn remove_education_at(&mut self, index: usize) -> Option<Education> {
        remove_at(&mut self.education, index)
    }
}

fn remove_by<T>(entries: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    match entries.iter().position(matches) {
        Some(index) => {
            entries.remove(index);
            true
        }
        None => false,
    }
}

fn remove_at<T>(entries: &mut Vec<T>, index: usize) -> Option<T> {
    (index < entries.len()).then(|| entries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{title} description"),
            ..Default::default()
        }
    }

    #[test]
    fn test_stored_duplicate_ids_are_reissued() {
        let id = Uuid::new_v4();
        let blob = serde_json::json!({
            "projects": [
                { "id": id, "title": "Alpha", "description": "a" },
                { "id": id, "title": "Beta", "description": "b" }
            ],
            "skills": ["Go", "Go"]
        });
        let mut p: Portfolio = serde_json::from_value(blob).unwrap();
        assert_eq!(p.projects[0].id, id);
        assert_ne!(p.projects[1].id, id);
        assert_eq!(p.skills.len(), 1);

        assert!(p.remove_project(id));
        assert_eq!(p.projects.len(), 1);
        assert_eq!(p.projects[0].title, "Beta");
    }

    #[test]
    fn test_add_project_preserves_insertion_order() {
        let mut p = Portfolio::default();
        p.add_project(project("Alpha"));
        p.add_project(project("Beta"));
        p.add_project(project("Gamma"));
        let titles: Vec<_> = p.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_add_project_assigns_unique_ids() {
        let mut p = Portfolio::default();
        let a = p.add_project(project("Alpha"));
        let b = p.add_project(project("Alpha"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_project_by_id_keeps_others_in_order() {
        let mut p = Portfolio::default();
        p.add_project(project("Alpha"));
        let beta = p.add_project(project("Beta"));
        p.add_project(project("Gamma"));

        assert!(p.remove_project(beta));
        let titles: Vec<_> = p.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut p = Portfolio::default();
        p.add_project(project("Alpha"));
        assert!(!p.remove_project(Uuid::new_v4()));
        assert_eq!(p.projects.len(), 1);
    }

    #[test]
    fn test_remove_by_position() {
        let mut p = Portfolio::default();
        p.add_experience(Experience {
            company: "Acme".to_string(),
            ..Default::default()
        });
        p.add_experience(Experience {
            company: "Globex".to_string(),
            ..Default::default()
        });

        let removed = p.remove_experience_at(0).map(|e| e.company);
        assert_eq!(removed.as_deref(), Some("Acme"));
        assert_eq!(p.experience.len(), 1);
        assert!(p.remove_experience_at(5).is_none());
    }

    #[test]
    fn test_education_add_remove() {
        let mut p = Portfolio::default();
        let id = p.add_education(Education {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            ..Default::default()
        });
        assert!(p.remove_education(id));
        assert!(p.education.is_empty());
        assert!(p.remove_education_at(0).is_none());
    }

    #[test]
    fn test_date_range_defaults_end_to_present() {
        assert_eq!(date_range("2020", ""), "2020 - Present");
        assert_eq!(date_range("2019", "2022"), "2019 - 2022");
    }

    #[test]
    fn test_partial_blob_deserializes_with_defaults() {
        let json = r##"{"basics":{"name":"Ada"},"projects":[{"title":"Engine"}]}"##;
        let p: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(p.basics.name, "Ada");
        assert_eq!(p.projects[0].title, "Engine");
        assert!(p.skills.is_empty());
        assert_eq!(p.theme, Theme::default());
    }
}
