//! Line chart figure, rendered server-side as inline SVG.

use std::fmt::Write;

use serde::Serialize;

use super::theme::Theme;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 450.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// A single line trace through ordered (x, y) points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Plot-area bounds after padding
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl LineChart {
    /// Build a chart from paired coordinates; extra values on the longer side are ignored
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        let len = x.len().min(y.len());
        let mut chart = LineChart { x, y };
        chart.x.truncate(len);
        chart.y.truncate(len);
        chart
    }

    /// The (x, y) pairs in drawing order
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// Figure description in the shape plotly uses for a single line trace
    pub fn figure_json(&self) -> serde_json::Value {
        serde_json::json!({
            "data": [{
                "type": "scatter",
                "mode": "lines",
                "x": self.x,
                "y": self.y,
            }],
            "layout": {
                "xaxis": { "title": { "text": "x" } },
                "yaxis": { "title": { "text": "y" } },
            },
        })
    }

    fn bounds(&self) -> Bounds {
        let mut x_min = f64::MAX;
        let mut x_max = f64::MIN;
        let mut y_min = f64::MAX;
        let mut y_max = f64::MIN;

        for (x, y) in self.points() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if self.x.is_empty() {
            x_min = 0.0;
            y_min = 0.0;
        }
        if x_min >= x_max {
            x_max = x_min + 1.0;
        }
        if y_min >= y_max {
            y_max = y_min + 1.0;
        }

        // Some headroom on the y-axis
        let y_range = y_max - y_min;
        Bounds {
            x_min,
            x_max,
            y_min: y_min - y_range * 0.05,
            y_max: y_max + y_range * 0.05,
        }
    }

    /// Render as a standalone `<svg>` element
    pub fn to_svg(&self, theme: &Theme) -> String {
        let b = self.bounds();
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let px = |x: f64| MARGIN_LEFT + (x - b.x_min) / (b.x_max - b.x_min) * plot_w;
        let py = |y: f64| MARGIN_TOP + plot_h - (y - b.y_min) / (b.y_max - b.y_min) * plot_h;

        let mut svg = String::new();
        // Writing to a String cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" role="img">"#
        );
        let _ = write!(
            svg,
            r#"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{plot_w}" height="{plot_h}" fill="{}"/>"#,
            theme.plot_bg
        );

        let x_ticks = [b.x_min, (b.x_min + b.x_max) / 2.0, b.x_max];
        let y_ticks = [b.y_min, (b.y_min + b.y_max) / 2.0, b.y_max];

        for x in x_ticks {
            let sx = px(x);
            let _ = write!(
                svg,
                r#"<line x1="{sx:.2}" y1="{MARGIN_TOP}" x2="{sx:.2}" y2="{:.2}" stroke="{}"/>"#,
                MARGIN_TOP + plot_h,
                theme.grid
            );
            let _ = write!(
                svg,
                r#"<text x="{sx:.2}" y="{:.2}" text-anchor="middle" font-size="12" fill="{}">{}</text>"#,
                MARGIN_TOP + plot_h + 18.0,
                theme.axis,
                format_value(x)
            );
        }
        for y in y_ticks {
            let sy = py(y);
            let _ = write!(
                svg,
                r#"<line x1="{MARGIN_LEFT}" y1="{sy:.2}" x2="{:.2}" y2="{sy:.2}" stroke="{}"/>"#,
                MARGIN_LEFT + plot_w,
                theme.grid
            );
            let _ = write!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="12" fill="{}">{}</text>"#,
                MARGIN_LEFT - 6.0,
                sy + 4.0,
                theme.axis,
                format_value(y)
            );
        }

        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14" fill="{}">x</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 8.0,
            theme.axis
        );
        let _ = write!(
            svg,
            r#"<text x="16" y="{:.2}" text-anchor="middle" font-size="14" fill="{}" transform="rotate(-90 16 {:.2})">y</text>"#,
            MARGIN_TOP + plot_h / 2.0,
            theme.axis,
            MARGIN_TOP + plot_h / 2.0
        );

        let path: Vec<String> = self
            .points()
            .into_iter()
            .map(|(x, y)| format!("{:.2},{:.2}", px(x), py(y)))
            .collect();
        let _ = write!(
            svg,
            r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
            theme.chart_color(0),
            path.join(" ")
        );

        svg.push_str("</svg>");
        svg
    }
}

/// Format a value for display on axis labels
fn format_value(value: f64) -> String {
    if value.abs() < 0.001 && value != 0.0 {
        format!("{:.2e}", value)
    } else if value.abs() >= 1000.0 {
        format!("{:.2e}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> LineChart {
        LineChart::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0])
    }

    #[test]
    fn test_points_pair_up_in_order() {
        assert_eq!(
            diagonal().points(),
            vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]
        );
    }

    #[test]
    fn test_mismatched_lengths_are_truncated() {
        let chart = LineChart::new(vec![1.0, 2.0, 3.0], vec![5.0]);
        assert_eq!(chart.points(), vec![(1.0, 5.0)]);
    }

    #[test]
    fn test_bounds_pad_y_axis_only() {
        let b = diagonal().bounds();
        assert_eq!(b.x_min, 1.0);
        assert_eq!(b.x_max, 4.0);
        assert!((b.y_min - 0.85).abs() < 1e-9);
        assert!((b.y_max - 4.15).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_of_empty_chart_are_valid() {
        let b = LineChart::new(vec![], vec![]).bounds();
        assert!(b.x_min < b.x_max);
        assert!(b.y_min < b.y_max);
    }

    #[test]
    fn test_figure_json_carries_raw_arrays() {
        let fig = diagonal().figure_json();
        assert_eq!(fig["data"][0]["x"], serde_json::json!([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(fig["data"][0]["y"], serde_json::json!([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(fig["data"][0]["mode"], "lines");
    }

    #[test]
    fn test_svg_has_one_polyline_with_four_vertices() {
        let svg = diagonal().to_svg(&Theme::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 1);

        let start = svg.find(r#"points=""#).unwrap() + r#"points=""#.len();
        let end = start + svg[start..].find('"').unwrap();
        assert_eq!(svg[start..end].split(' ').count(), 4);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2.5), "2.50");
        assert_eq!(format_value(0.85), "0.8500");
        assert_eq!(format_value(12345.0), "1.23e4");
    }
}
