//! Colors and fonts for the dashboard page.

/// Color theme for the page and its charts (CSS color strings)
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: &'static str,
    pub fg: &'static str,
    pub plot_bg: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub font_family: &'static str,
    pub chart_colors: Vec<&'static str>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg: "#ffffff",
            fg: "#2a3f5f",
            plot_bg: "#e5ecf6",
            grid: "#ffffff",
            axis: "#506784",
            font_family: "\"Open Sans\", verdana, arial, sans-serif",
            // Plotly's default qualitative palette
            chart_colors: vec![
                "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692",
                "#b6e880",
            ],
        }
    }
}

impl Theme {
    /// Get a chart color by index (cycles through available colors)
    pub fn chart_color(&self, index: usize) -> &'static str {
        self.chart_colors[index % self.chart_colors.len()]
    }

    /// Inline stylesheet for the page body and heading
    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ margin: 0 auto; padding: 1em 2em; max-width: 960px; \
             background: {bg}; color: {fg}; font-family: {font}; }}\n\
             h1 {{ font-weight: 600; }}\n\
             .graph svg {{ width: 100%; height: auto; }}",
            bg = self.bg,
            fg = self.fg,
            font = self.font_family,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_colors_are_distinct() {
        let theme = Theme::default();
        let c0 = theme.chart_color(0);
        let c1 = theme.chart_color(1);
        let c2 = theme.chart_color(2);
        assert_ne!(c0, c1, "Colors 0 and 1 should be different");
        assert_ne!(c1, c2, "Colors 1 and 2 should be different");
        assert_ne!(c0, c2, "Colors 0 and 2 should be different");
    }

    #[test]
    fn test_chart_color_cycles() {
        let theme = Theme::default();
        let len = theme.chart_colors.len();
        assert_eq!(theme.chart_color(0), theme.chart_color(len));
        assert_eq!(theme.chart_color(1), theme.chart_color(len + 1));
    }

    #[test]
    fn test_stylesheet_uses_theme_colors() {
        let theme = Theme::default();
        let css = theme.stylesheet();
        assert!(css.contains(theme.bg));
        assert!(css.contains(theme.fg));
    }
}
