//! Page layout tree and its HTML rendering.

use super::chart::LineChart;
use super::theme::Theme;

/// One node of the page layout
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Div { children: Vec<Component> },
    H1(String),
    Graph { id: String, figure: LineChart },
}

impl Component {
    /// Render this node and its children as an HTML fragment
    pub fn render(&self, theme: &Theme) -> String {
        let mut out = String::new();
        self.render_into(theme, &mut out);
        out
    }

    fn render_into(&self, theme: &Theme, out: &mut String) {
        match self {
            Component::Div { children } => {
                out.push_str("<div>");
                for child in children {
                    child.render_into(theme, out);
                }
                out.push_str("</div>");
            }
            Component::H1(text) => {
                out.push_str("<h1>");
                out.push_str(&escape_html(text));
                out.push_str("</h1>");
            }
            Component::Graph { id, figure } => {
                out.push_str(&format!(
                    r#"<div id="{}" class="graph" data-figure="{}">"#,
                    escape_html(id),
                    escape_html(&figure.figure_json().to_string())
                ));
                out.push_str(&figure.to_svg(theme));
                out.push_str("</div>");
            }
        }
    }

    /// Depth-first search for a graph by element id
    pub fn find_graph(&self, wanted: &str) -> Option<&LineChart> {
        match self {
            Component::Graph { id, figure } if id == wanted => Some(figure),
            Component::Div { children } => children.iter().find_map(|c| c.find_graph(wanted)),
            _ => None,
        }
    }
}

/// Wrap a rendered layout in a complete HTML document
pub fn render_page(title: &str, layout: &Component, theme: &Theme) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <style>\n{}\n</style>\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        escape_html(title),
        theme.stylesheet(),
        layout.render(theme)
    )
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
