//! Lists the projects visible to an API token.
//!
//! ```text
//! cargo run -p list-projects -- <api-token> [page-limit]
//! RUST_LOG=lokalise=debug cargo run -p list-projects -- <api-token>
//! ```

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use lokalise::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let Some(token) = args.next() else {
        eprintln!("usage: list-projects <api-token> [page-limit]");
        return ExitCode::FAILURE;
    };
    let page_limit = args.next().and_then(|raw| raw.parse().ok()).unwrap_or(20);

    match run(token, page_limit).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "listing projects failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(token: String, page_limit: u32) -> Result<()> {
    let api = Api::builder(token).page_limit(page_limit).build()?;
    let projects = api.projects();

    let mut page = 1;
    loop {
        let response = projects
            .clone()
            .with_page_options(PageOptions::new(0, page))
            .list()
            .await?;

        for project in &response.projects {
            println!("{}\t{}", project.project_id, project.name);
        }

        let page_count = response.paged.page_count.unwrap_or(1);
        info!(page, page_count, total = ?response.paged.total_count, "page listed");
        if i64::from(page) >= page_count || response.projects.is_empty() {
            break;
        }
        page += 1;
    }

    Ok(())
}
