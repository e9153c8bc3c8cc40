//! Display catalog for skill tokens.
//!
//! Tokens are the values a user picks from the language selector (`CPLUSPLUS`,
//! `Spring Boot`, ...). Each known token maps to a human label and a devicon slug.
//! Unknown tokens render as their raw text.

use serde::Serialize;

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";
const DEFAULT_ICON_VARIANT: &str = "-original";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillDisplay {
    pub token: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub variant: &'static str,
}

const fn entry(
    token: &'static str,
    label: &'static str,
    icon: &'static str,
    variant: &'static str,
) -> SkillDisplay {
    SkillDisplay {
        token,
        label,
        icon,
        variant,
    }
}

pub const SKILL_CATALOG: &[SkillDisplay] = &[
    entry("HTML5", "HTML5", "HTML5", "-original"),
    entry("CSS3", "CSS3", "CSS3", "-original"),
    entry("JavaScript", "Javascript", "Javascript", "-original"),
    entry("TypeScript", "Typescript", "Typescript", "-original"),
    entry("Python", "Python", "Python", "-original"),
    entry("Java", "Java", "Java", "-original"),
    entry("CPLUSPLUS", "C++", "CPLUSPLUS", "-original"),
    entry("CSHARP", "C#", "CSHARP", "-original"),
    entry("C", "C", "C", "-original"),
    entry("DotNetCore", ".NET Core", "DotNetCore", "-original"),
    entry("PHP", "PHP", "PHP", "-original"),
    entry("Ruby", "Ruby", "Ruby", "-original"),
    entry("Swift", "Swift", "Swift", "-original"),
    entry("Rust", "Rust", "Rust", "-original"),
    entry("Perl", "Perl", "Perl", "-original"),
    entry("Go", "Go", "Go", "-original"),
    entry("Node", "Node.js", "Nodejs", "-original"),
    entry("Vue", "Vue.js", "Vuejs", "-original"),
    entry("Angular", "AngularJS", "Angular", "-original"),
    entry("React", "React", "React", "-original"),
    entry("JQuery", "jQuery", "JQuery", "-original"),
    entry("Next", "Next.js", "NextJS", "-original"),
    entry("Laravel", "Laravel", "Laravel", "-original"),
    entry("Spring Boot", "Spring Boot", "Spring", "-original"),
    entry("Django", "Django", "Django", "-plain"),
    entry("Drupal", "Drupal", "Drupal", "-plain"),
    entry("Flask", "Flask", "Flask", "-original"),
    entry("Wordpress", "WordPress", "Wordpress", "-original"),
    entry("Codeigniter", "CodeIgniter", "Codeigniter", "-plain"),
    entry("TailwindCSS", "Tailwind CSS", "TailwindCSS", "-original"),
    entry("React Native", "React Native", "React", "-original"),
    entry("Vue Native", "Vue Native", "Vuejs", "-original"),
    entry("Flutter", "Flutter", "Flutter", "-original"),
    entry("MySQL", "MySQL", "MySQL", "-original"),
    entry("PostgreSQL", "PostgreSQL", "PostgreSQL", "-original"),
    entry("Cassandra", "Cassandra", "Cassandra", "-original"),
    entry("Supabase", "Supabase", "Supabase", "-original"),
    entry("MongoDB", "MongoDB", "MongoDB", "-original"),
];

pub fn lookup(token: &str) -> Option<&'static SkillDisplay> {
    SKILL_CATALOG.iter().find(|d| d.token == token)
}

/// Label for a token, or the token itself when the catalog has no entry.
pub fn display_name(token: &str) -> &str {
    lookup(token).map(|d| d.label).unwrap_or(token)
}

/// Devicon SVG url for a token. Unknown tokens use their lowercased text as the slug.
pub fn icon_url(token: &str) -> String {
    let (icon, variant) = match lookup(token) {
        Some(d) => (d.icon.to_lowercase(), d.variant),
        None => (token.to_lowercase(), DEFAULT_ICON_VARIANT),
    };
    format!("{DEVICON_BASE}/{icon}/{icon}{variant}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_token_maps_to_label() {
        assert_eq!(display_name("CSHARP"), "C#");
        assert_eq!(display_name("Node"), "Node.js");
        assert_eq!(display_name("Spring Boot"), "Spring Boot");
    }

    #[test]
    fn test_unknown_token_falls_back_to_raw_text() {
        assert_eq!(display_name("Elixir"), "Elixir");
        assert_eq!(display_name("cplusplus"), "cplusplus");
    }

    #[test]
    fn test_icon_url_uses_lowercased_slug_and_variant() {
        assert_eq!(
            icon_url("Django"),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg"
        );
        assert_eq!(
            icon_url("React Native"),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"
        );
    }

    #[test]
    fn test_icon_url_for_unknown_token() {
        assert_eq!(
            icon_url("Elixir"),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/elixir/elixir-original.svg"
        );
    }

    #[test]
    fn test_catalog_tokens_are_unique() {
        for (i, a) in SKILL_CATALOG.iter().enumerate() {
            assert!(
                SKILL_CATALOG[i + 1..].iter().all(|b| b.token != a.token),
                "duplicate token {}",
                a.token
            );
        }
    }
}
