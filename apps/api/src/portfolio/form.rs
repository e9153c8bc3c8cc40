//! Collects a submitted builder form into the portfolio model.
//!
//! The form arrives as ordered `(name, value)` pairs, the way a browser encodes
//! `application/x-www-form-urlencoded`. Repeatable entries (projects, experience,
//! education) are parallel columns of repeated names, zipped by position.

use std::collections::HashMap;

use tracing::debug;

use crate::portfolio::models::{Education, Experience, Portfolio, Project};
use crate::portfolio::skills::SkillSet;
use crate::render::theme::Layout;

/// Multi-valued view over submitted fields. A trailing `[]` on a name is ignored.
#[derive(Debug, Default)]
pub struct FormFields {
    values: HashMap<String, Vec<String>>,
}

impl FormFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let name = name.strip_suffix("[]").unwrap_or(name);
            values.entry(name.to_string()).or_default().push(value.into());
        }
        Self { values }
    }

    /// First value of a field, or `None` when the field was not submitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value at `index` of a repeated field, `None` if the column is shorter.
    fn at(&self, name: &str, index: usize) -> Option<&str> {
        self.get_all(name).get(index).map(String::as_str)
    }

    fn at_or_empty(&self, name: &str, index: usize) -> String {
        self.at(name, index).unwrap_or_default().to_string()
    }

    fn rows(&self, columns: &[&str]) -> usize {
        columns
            .iter()
            .map(|c| self.get_all(c).len())
            .max()
            .unwrap_or(0)
    }
}

/// Splits a comma-separated list, trimming items and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Applies submitted fields onto `portfolio`.
///
/// Scalars overwrite only when submitted. Projects, experience and education are
/// replaced wholesale from the submitted rows. Skills are rebuilt only when the form
/// carries `skill` values, since they are otherwise edited as chips.
pub fn apply_form(portfolio: &mut Portfolio, form: &FormFields) {
    let basics = &mut portfolio.basics;
    for (field, target) in [
        ("name", &mut basics.name),
        ("title", &mut basics.title),
        ("bio", &mut basics.bio),
        ("email", &mut basics.email),
        ("website", &mut basics.website),
        ("profile_image", &mut basics.profile_image),
        ("introduction", &mut basics.introduction),
        ("summary", &mut basics.summary),
        ("resume", &mut basics.resume_url),
    ] {
        set_if_present(form, field, target);
    }

    let social = &mut portfolio.social;
    for (field, target) in [
        ("facebook", &mut social.facebook),
        ("instagram", &mut social.instagram),
        ("github", &mut social.github),
        ("linkedin", &mut social.linkedin),
    ] {
        set_if_present(form, field, target);
    }

    if form.contains("skill") {
        portfolio.skills = form
            .get_all("skill")
            .iter()
            .map(String::as_str)
            .collect::<SkillSet>();
    }

    portfolio.projects = collect_projects(form);
    portfolio.experience = collect_experience(form);
    portfolio.education = collect_education(form);

    let theme = &mut portfolio.theme;
    set_if_present(form, "primary_color", &mut theme.primary_color);
    set_if_present(form, "accent_color", &mut theme.accent_color);
    set_if_present(form, "font_family", &mut theme.font_family);
    if let Some(layout) = form.get("layout") {
        theme.layout = Layout::parse_or_default(layout);
    }

    debug!(
        "Collected form: {} skills, {} projects, {} experience, {} education",
        portfolio.skills.len(),
        portfolio.projects.len(),
        portfolio.experience.len(),
        portfolio.education.len()
    );
}

fn set_if_present(form: &FormFields, field: &str, target: &mut String) {
    if let Some(value) = form.get(field) {
        *target = value.to_string();
    }
}

fn collect_projects(form: &FormFields) -> Vec<Project> {
    const COLUMNS: &[&str] = &[
        "project_title",
        "project_description",
        "project_technologies",
        "project_link",
    ];
    (0..form.rows(COLUMNS))
        .filter_map(|i| {
            let title = form.at("project_title", i)?;
            let description = form.at("project_description", i)?;
            Some(Project {
                title: title.to_string(),
                description: description.to_string(),
                technologies: split_list(form.at("project_technologies", i).unwrap_or_default()),
                link: form.at_or_empty("project_link", i),
                ..Default::default()
            })
        })
        .collect()
}

fn collect_experience(form: &FormFields) -> Vec<Experience> {
    const COLUMNS: &[&str] = &[
        "experience_company",
        "experience_role",
        "experience_start",
        "experience_end",
        "experience_description",
        "experience_website",
    ];
    (0..form.rows(COLUMNS))
        .filter_map(|i| {
            let company = form.at("experience_company", i)?;
            let role = form.at("experience_role", i)?;
            Some(Experience {
                company: company.to_string(),
                role: role.to_string(),
                start_date: form.at_or_empty("experience_start", i),
                end_date: form.at_or_empty("experience_end", i),
                description: form.at_or_empty("experience_description", i),
                website: form.at_or_empty("experience_website", i),
                ..Default::default()
            })
        })
        .collect()
}

fn collect_education(form: &FormFields) -> Vec<Education> {
    const COLUMNS: &[&str] = &[
        "education_institution",
        "education_degree",
        "education_start",
        "education_end",
        "education_description",
    ];
    (0..form.rows(COLUMNS))
        .filter_map(|i| {
            let institution = form.at("education_institution", i)?;
            let degree = form.at("education_degree", i)?;
            Some(Education {
                institution: institution.to_string(),
                degree: degree.to_string(),
                start_date: form.at_or_empty("education_start", i),
                end_date: form.at_or_empty("education_end", i),
                description: form.at_or_empty("education_description", i),
                ..Default::default()
            })
        })
        .collect()
}
