use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#4F46E5";
pub const DEFAULT_ACCENT_COLOR: &str = "#F59E0B";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";

/// Header arrangement of the modern template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Modern,
    Minimal,
    Creative,
}

impl Layout {
    /// Parses a layout name; anything unrecognized is `Modern`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "minimal" => Layout::Minimal,
            "creative" => Layout::Creative,
            _ => Layout::Modern,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,
    #[serde(deserialize_with = "deserialize_layout")]
    pub layout: Layout,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            layout: Layout::Modern,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl Theme {
    pub fn reset(&mut self) {
        *self = Theme::default();
    }

    /// Theme as substituted into output.
    ///
    /// The values land unescaped inside `<style>` and `<script>` blocks, so each field
    /// falls back to its default when empty or not a plain CSS value.
    pub fn resolved(&self) -> Theme {
        Theme {
            primary_color: checked(&self.primary_color, DEFAULT_PRIMARY_COLOR, is_css_color),
            accent_color: checked(&self.accent_color, DEFAULT_ACCENT_COLOR, is_css_color),
            layout: self.layout,
            font_family: checked(&self.font_family, DEFAULT_FONT_FAMILY, is_font_list),
        }
    }
}

fn checked(value: &str, fallback: &str, valid: fn(&str) -> bool) -> String {
    let value = value.trim();
    if value.is_empty() || !valid(value) {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, or a named colour.
fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Comma-separated family names, optionally single-quoted.
fn is_font_list(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '-' | '_' | '\''))
}

fn deserialize_layout<'de, D>(deserializer: D) -> Result<Layout, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Layout::parse_or_default(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Theme::default();
        assert_eq!(t.primary_color, "#4F46E5");
        assert_eq!(t.accent_color, "#F59E0B");
        assert_eq!(t.layout, Layout::Modern);
        assert_eq!(t.font_family, "Inter, sans-serif");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut t = Theme {
            primary_color: "#000000".to_string(),
            accent_color: "#ffffff".to_string(),
            layout: Layout::Creative,
            font_family: "Poppins, sans-serif".to_string(),
        };
        t.reset();
        assert_eq!(t, Theme::default());
    }

    #[test]
    fn test_resolved_fills_empty_fields() {
        let t = Theme {
            primary_color: String::new(),
            accent_color: "#111111".to_string(),
            layout: Layout::Minimal,
            font_family: "  ".to_string(),
        };
        let r = t.resolved();
        assert_eq!(r.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(r.accent_color, "#111111");
        assert_eq!(r.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(r.layout, Layout::Minimal);
    }

    #[test]
    fn test_resolved_keeps_quoted_font_family() {
        let t = Theme {
            font_family: "'Playfair Display', serif".to_string(),
            ..Theme::default()
        };
        assert_eq!(t.resolved().font_family, "'Playfair Display', serif");
    }

    #[test]
    fn test_resolved_rejects_values_that_break_out_of_css() {
        let t = Theme {
            primary_color: "red; } body { display: none".to_string(),
            accent_color: "#12345G".to_string(),
            font_family: "Inter</style><script>alert(1)</script>".to_string(),
            ..Theme::default()
        };
        let r = t.resolved();
        assert_eq!(r.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(r.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(r.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_named_and_short_hex_colors_accepted() {
        let t = Theme {
            primary_color: "rebeccapurple".to_string(),
            accent_color: "#fa0".to_string(),
            ..Theme::default()
        };
        let r = t.resolved();
        assert_eq!(r.primary_color, "rebeccapurple");
        assert_eq!(r.accent_color, "#fa0");
    }

    #[test]
    fn test_unknown_layout_falls_back_to_modern() {
        assert_eq!(Layout::parse_or_default("Creative"), Layout::Creative);
        assert_eq!(Layout::parse_or_default("brutalist"), Layout::Modern);
        let t: Theme = serde_json::from_str(r#"{"layout":"brutalist"}"#).unwrap();
        assert_eq!(t.layout, Layout::Modern);
    }

    #[test]
    fn test_camel_case_blob() {
        let t: Theme =
            serde_json::from_str(r##"{"primaryColor":"#123456","layout":"minimal"}"##).unwrap();
        assert_eq!(t.primary_color, "#123456");
        assert_eq!(t.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(t.layout, Layout::Minimal);
    }
}
