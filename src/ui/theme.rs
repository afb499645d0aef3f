use owo_colors::Style;
use std::sync::OnceLock;

static TERM_THEME: OnceLock<TermTheme> = OnceLock::new();

/// Terminal styles for CLI output (not to be confused with color themes)
#[derive(Debug, Clone)]
pub struct TermTheme {
    pub header: Style,
    pub success: Style,
    pub warn: Style,
    pub info: Style,
    /// Row labels in summaries
    pub label: Style,
    /// Identifiers and other secondary text
    pub muted: Style,
    /// Breadcrumbs that cannot be tapped
    pub disabled_crumb: Style,
    /// Whether color swatches can be drawn
    pub truecolor: bool,
}

impl TermTheme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() || !console::colors_enabled() {
            return Self::plain();
        }
        let truecolor = std::env::var("COLORTERM")
            .map(|v| v == "truecolor" || v == "24bit")
            .unwrap_or(false);
        Self { truecolor, ..Self::colored() }
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            info: Style::new().magenta(),
            label: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
            disabled_crumb: Style::new().bright_black().italic(),
            truecolor: true,
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            label: Style::new(),
            muted: Style::new(),
            disabled_crumb: Style::new(),
            truecolor: false,
        }
    }
}

pub fn term_theme() -> &'static TermTheme {
    TERM_THEME.get_or_init(TermTheme::detect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_draws_no_swatches() {
        let theme = TermTheme::plain();
        assert!(!theme.truecolor);
        assert!(TermTheme::colored().truecolor);
    }
}
