use crate::artifacts::highlight::classed::CLASS_STYLE;
use anyhow::Context;
use syntect::highlighting::ThemeSet;
use syntect::html::css_for_theme_with_class_style;

pub const DEFAULT_THEME: &str = "base16-ocean.light";

/// Stylesheet for the markup produced by the classed highlighter.
pub fn theme_css(theme_name: &str) -> anyhow::Result<String> {
    let theme_set = ThemeSet::load_defaults();
    let theme = theme_set.themes.get(theme_name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown highlighting theme '{}' (available: {})",
            theme_name,
            theme_set
                .themes
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    css_for_theme_with_class_style(theme, CLASS_STYLE)
        .with_context(|| format!("failed to generate css for theme '{theme_name}'"))
}
