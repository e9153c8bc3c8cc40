//! Portfolio rendering — turns the model into one self-contained HTML document.
//!
//! Flow: snapshot `Portfolio` → `RenderContext` (placeholders, theme fallbacks,
//! display names resolved) → mustache template → HTML string.
//!
//! Sections backed by a list are included only when the list is non-empty. All user
//! text goes through `{{...}}` and is HTML-escaped by the template engine. Theme values
//! inside `<style>` and `<script>` use `{{{...}}}` and are limited to plain CSS values by
//! `Theme::resolved`.

pub mod catalog;
pub mod handlers;
pub mod theme;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::portfolio::models::Portfolio;
use crate::render::theme::Layout;

pub const DEFAULT_EMPTY_SKILLS_MESSAGE: &str = "No current skills available.";

/// Output document variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// Utility-class document loading Tailwind from a CDN, header per theme layout.
    #[default]
    Modern,
    /// Fully inlined stylesheet, skill cards with icons and social links.
    Classic,
}

impl Template {
    fn source(self) -> &'static str {
        match self {
            Template::Modern => include_str!("templates/modern.html.mustache"),
            Template::Classic => include_str!("templates/classic.html.mustache"),
        }
    }

    pub fn download_filename(self) -> &'static str {
        match self {
            Template::Modern => "my-portfolio.html",
            Template::Classic => "portfolio.html",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub template: Template,
    /// Copyright year in the footer.
    pub year: i32,
    pub empty_skills_message: String,
}

impl RenderOptions {
    pub fn new(template: Template, year: i32) -> Self {
        Self {
            template,
            year,
            empty_skills_message: DEFAULT_EMPTY_SKILLS_MESSAGE.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template context
// ────────────────────────────────────────────────────────────────────────────
//
// Every template conditional is a plain bool (`has_*`, `layout_*`) or a list.

#[derive(Debug, Serialize)]
struct SkillView {
    token: String,
    label: String,
    icon_url: String,
}

#[derive(Debug, Serialize)]
struct TagView {
    name: String,
}

#[derive(Debug, Serialize)]
struct ProjectView {
    title: String,
    description: String,
    technologies: Vec<TagView>,
    has_technologies: bool,
    link: String,
    has_link: bool,
}

#[derive(Debug, Serialize)]
struct ExperienceView {
    company: String,
    role: String,
    years: String,
    description: String,
    has_description: bool,
    website: String,
    has_website: bool,
}

#[derive(Debug, Serialize)]
struct EducationView {
    institution: String,
    degree: String,
    years: String,
    description: String,
    has_description: bool,
}

#[derive(Debug, Serialize)]
struct SocialView {
    network: &'static str,
    url: String,
    icon: &'static str,
}

#[derive(Debug, Serialize)]
struct RenderContext {
    year: i32,

    name: String,
    title: String,
    page_title: String,
    header_name: String,
    header_title: String,
    footer_name: String,
    introduction: String,
    summary: String,
    bio: String,
    has_bio: bool,
    email: String,
    has_email: bool,
    website: String,
    website_display: String,
    has_website: bool,
    resume_url: String,
    has_resume: bool,

    primary_color: String,
    accent_color: String,
    font_family: String,
    layout_modern: bool,
    layout_minimal: bool,
    layout_creative: bool,

    skills: Vec<SkillView>,
    has_skills: bool,
    empty_skills_message: String,
    projects: Vec<ProjectView>,
    has_projects: bool,
    experience: Vec<ExperienceView>,
    has_experience: bool,
    education: Vec<EducationView>,
    has_education: bool,
    social: Vec<SocialView>,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

impl RenderContext {
    fn build(portfolio: &Portfolio, options: &RenderOptions) -> Self {
        let basics = &portfolio.basics;
        let theme = portfolio.theme.resolved();

        let skills: Vec<SkillView> = portfolio
            .skills
            .iter()
            .map(|token| SkillView {
                token: token.to_string(),
                label: catalog::display_name(token).to_string(),
                icon_url: catalog::icon_url(token),
            })
            .collect();

        let projects: Vec<ProjectView> = portfolio
            .projects
            .iter()
            .map(|p| ProjectView {
                title: or_placeholder(&p.title, "Untitled Project"),
                description: or_placeholder(&p.description, "No description provided."),
                technologies: p
                    .technologies
                    .iter()
                    .map(|t| TagView { name: t.clone() })
                    .collect(),
                has_technologies: !p.technologies.is_empty(),
                link: p.link.clone(),
                has_link: present(&p.link),
            })
            .collect();

        let experience: Vec<ExperienceView> = portfolio
            .experience
            .iter()
            .map(|e| ExperienceView {
                company: or_placeholder(&e.company, "Company"),
                role: or_placeholder(&e.role, "Position"),
                years: e.years(),
                description: e.description.clone(),
                has_description: present(&e.description),
                website: e.website.clone(),
                has_website: present(&e.website),
            })
            .collect();

        let education: Vec<EducationView> = portfolio
            .education
            .iter()
            .map(|e| EducationView {
                institution: or_placeholder(&e.institution, "Institution"),
                degree: or_placeholder(&e.degree, "Degree"),
                years: e.years(),
                description: e.description.clone(),
                has_description: present(&e.description),
            })
            .collect();

        let social = [
            (
                "Facebook",
                &portfolio.social.facebook,
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/facebook/facebook-original.svg",
            ),
            (
                "Instagram",
                &portfolio.social.instagram,
                "https://upload.wikimedia.org/wikipedia/commons/a/a5/Instagram_icon.png",
            ),
            (
                "GitHub",
                &portfolio.social.github,
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg",
            ),
            (
                "LinkedIn",
                &portfolio.social.linkedin,
                "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linkedin/linkedin-original.svg",
            ),
        ]
        .into_iter()
        .filter(|(_, url, _)| present(url))
        .map(|(network, url, icon)| SocialView {
            network,
            url: url.clone(),
            icon,
        })
        .collect();

        RenderContext {
            year: options.year,

            name: basics.name.clone(),
            title: basics.title.clone(),
            page_title: format!(
                "{} - {}",
                or_placeholder(&basics.name, "My Portfolio"),
                or_placeholder(&basics.title, "Professional Portfolio")
            ),
            header_name: or_placeholder(&basics.name, "Your Name"),
            header_title: or_placeholder(&basics.title, "Your Title"),
            footer_name: or_placeholder(&basics.name, "Portfolio Owner"),
            introduction: basics.introduction.clone(),
            summary: basics.summary.clone(),
            bio: basics.bio.clone(),
            has_bio: present(&basics.bio),
            email: basics.email.clone(),
            has_email: present(&basics.email),
            website: basics.website.clone(),
            website_display: strip_scheme(&basics.website).to_string(),
            has_website: present(&basics.website),
            resume_url: basics.resume_url.clone(),
            has_resume: present(&basics.resume_url),

            primary_color: theme.primary_color,
            accent_color: theme.accent_color,
            font_family: theme.font_family,
            layout_modern: theme.layout == Layout::Modern,
            layout_minimal: theme.layout == Layout::Minimal,
            layout_creative: theme.layout == Layout::Creative,

            has_skills: !skills.is_empty(),
            skills,
            empty_skills_message: options.empty_skills_message.clone(),
            has_projects: !projects.is_empty(),
            projects,
            has_experience: !experience.is_empty(),
            experience,
            has_education: !education.is_empty(),
            education,
            social,
        }
    }
}

/// Renders `portfolio` into a complete HTML document. Deterministic for a given
/// model and options.
pub fn render_portfolio(portfolio: &Portfolio, options: &RenderOptions) -> Result<String, AppError> {
    let context = RenderContext::build(portfolio, options);
    let template = mustache::compile_str(options.template.source())?;
    Ok(template.render_to_string(&context)?)
}
