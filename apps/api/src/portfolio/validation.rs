use serde::{Deserialize, Serialize};

use crate::portfolio::models::Portfolio;

/// A required field that is empty. `field` is a dotted path such as `projects[1].title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGap {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Present,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReadiness {
    pub section: String,
    pub entry_count: usize,
    pub status: SectionStatus,
}

/// Advisory report; export never depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub ready: bool,
    pub sections: Vec<SectionReadiness>,
    pub missing_sections: Vec<String>,
    pub gaps: Vec<FieldGap>,
}

fn require(gaps: &mut Vec<FieldGap>, field: String, value: &str) {
    if value.trim().is_empty() {
        gaps.push(FieldGap {
            message: format!("{field} is required"),
            field,
        });
    }
}

/// Reports every required field that is empty. Presence is the only rule.
pub fn check_required(portfolio: &Portfolio) -> Vec<FieldGap> {
    let mut gaps = Vec::new();

    require(&mut gaps, "basics.name".to_string(), &portfolio.basics.name);
    require(&mut gaps, "basics.title".to_string(), &portfolio.basics.title);

    for (i, p) in portfolio.projects.iter().enumerate() {
        require(&mut gaps, format!("projects[{i}].title"), &p.title);
        require(&mut gaps, format!("projects[{i}].description"), &p.description);
    }
    for (i, e) in portfolio.experience.iter().enumerate() {
        require(&mut gaps, format!("experience[{i}].company"), &e.company);
        require(&mut gaps, format!("experience[{i}].role"), &e.role);
    }
    for (i, e) in portfolio.education.iter().enumerate() {
        require(&mut gaps, format!("education[{i}].institution"), &e.institution);
        require(&mut gaps, format!("education[{i}].degree"), &e.degree);
    }

    gaps
}

pub fn readiness_report(portfolio: &Portfolio) -> ReadinessReport {
    let counts = [
        ("skills", portfolio.skills.len()),
        ("projects", portfolio.projects.len()),
        ("experience", portfolio.experience.len()),
        ("education", portfolio.education.len()),
    ];

    let mut sections = Vec::with_capacity(counts.len());
    let mut missing_sections = Vec::new();
    for (section, entry_count) in counts {
        let status = if entry_count == 0 {
            missing_sections.push(section.to_string());
            SectionStatus::Missing
        } else {
            SectionStatus::Present
        };
        sections.push(SectionReadiness {
            section: section.to_string(),
            entry_count,
            status,
        });
    }

    let gaps = check_required(portfolio);
    ReadinessReport {
        ready: gaps.is_empty(),
        sections,
        missing_sections,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::{Experience, Project};

    fn named() -> Portfolio {
        let mut p = Portfolio::default();
        p.basics.name = "Ada".to_string();
        p.basics.title = "Engineer".to_string();
        p
    }

    #[test]
    fn test_empty_portfolio_reports_name_and_title() {
        let gaps = check_required(&Portfolio::default());
        let fields: Vec<_> = gaps.iter().map(|g| g.field.as_str()).collect();
        assert_eq!(fields, vec!["basics.name", "basics.title"]);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut p = named();
        p.basics.title = "   ".to_string();
        assert_eq!(check_required(&p)[0].field, "basics.title");
    }

    #[test]
    fn test_entry_gaps_are_indexed() {
        let mut p = named();
        p.add_project(Project {
            title: "Alpha".to_string(),
            description: "ok".to_string(),
            ..Default::default()
        });
        p.add_project(Project {
            title: "Beta".to_string(),
            ..Default::default()
        });
        p.add_experience(Experience {
            role: "Dev".to_string(),
            ..Default::default()
        });
        let fields: Vec<_> = check_required(&p).into_iter().map(|g| g.field).collect();
        assert_eq!(
            fields,
            vec!["projects[1].description", "experience[0].company"]
        );
    }

    #[test]
    fn test_readiness_lists_missing_sections() {
        let mut p = named();
        p.skills.add("Rust");
        let report = readiness_report(&p);
        assert!(report.ready);
        assert_eq!(
            report.missing_sections,
            vec!["projects", "experience", "education"]
        );
        assert_eq!(report.sections[0].status, SectionStatus::Present);
        assert_eq!(report.sections[0].entry_count, 1);
    }

    #[test]
    fn test_readiness_not_ready_with_gaps() {
        let report = readiness_report(&Portfolio::default());
        assert!(!report.ready);
        assert_eq!(report.missing_sections.len(), 4);
    }
}
