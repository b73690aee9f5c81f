//! Startup sequence: load the operations tables, build the page, serve it.

use tracing::{debug, info};

use crate::cli::AppConfig;
use crate::data::{load_operations_tables, OperationsData};
use crate::error::Result;
use crate::server::{self, SharedPage};
use crate::ui::{render_page, Component, LineChart, Theme};

pub const PAGE_TITLE: &str = "Dash";
pub const HEADING: &str = "OMG! It's a Dash app.";
pub const GRAPH_ID: &str = "line-plot";

/// Everything the server needs, built once at startup
pub struct App {
    /// Loaded for the dashboard but not shown on the page yet
    #[allow(dead_code)]
    pub data: OperationsData,
    pub layout: Component,
    page: SharedPage,
}

impl App {
    /// Load both tables, then build and render the page
    pub fn init(config: &AppConfig) -> Result<Self> {
        let data = load_operations_tables(&config.db_path)?;

        let figure = LineChart::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0]);
        debug!(points = ?figure.points(), "built line chart");

        let layout = Component::Div {
            children: vec![
                Component::H1(HEADING.to_string()),
                Component::Graph {
                    id: GRAPH_ID.to_string(),
                    figure,
                },
            ],
        };
        let page = render_page(PAGE_TITLE, &layout, &Theme::default());
        debug!(bytes = page.len(), "rendered page");

        Ok(App {
            data,
            layout,
            page: SharedPage::from(page),
        })
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    pub fn router(&self) -> axum::Router {
        server::router(self.page.clone())
    }
}

/// Run the dashboard until the process is stopped
pub async fn run(config: AppConfig) -> Result<()> {
    info!(db = %config.db_path.display(), "starting dashboard");
    let app = App::init(&config)?;
    let listener = server::bind(config.addr).await?;
    server::serve(listener, app.router()).await
}
