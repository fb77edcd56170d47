use anyhow::{Context, Result};
use clap::Parser;
use smarthome_landing::{
    cli::{Cli, Commands},
    config::Config,
    content::PageContent,
    menu::MenuState,
    page::render_page,
    server::{self, AppState},
    service::LandingService,
    storage::Store,
};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    for warning in config.validate() {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::Serve { addr, db } => {
            let service = open_service(&config, db.as_deref())?;
            service
                .initialize_default_data()
                .context("Failed to seed default content")?;

            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            let state = Arc::new(AppState {
                service,
                links: config.contact_links(),
            });
            server::serve(listener, state, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl-C: {}", e);
                    std::future::pending::<()>().await;
                }
            })
            .await?;
        }
        Commands::Render {
            output,
            menu_open,
            db,
        } => {
            let content = match db {
                Some(path) => open_service(&config, Some(path.as_path()))?.page_content(),
                None => PageContent::default(),
            };
            let menu = if menu_open {
                MenuState::open()
            } else {
                MenuState::closed()
            };
            let html = render_page(&content, &config.contact_links(), menu);

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote landing page to {}", path.display());
                }
                None => print!("{}", html),
            }
        }
        Commands::Links => {
            let links = config.contact_links();
            println!("{}", links.whatsapp.href);
            println!("{}", links.email.href);
        }
        Commands::Init { db } => {
            let service = open_service(&config, db.as_deref())?;
            service
                .initialize_default_data()
                .context("Failed to seed default content")?;
        }
        Commands::Version => {
            println!("smarthome-landing {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn open_service(config: &Config, db: Option<&Path>) -> Result<LandingService> {
    let path = config
        .database_path(db)
        .context("No database path given and no data directory available")?;
    info!("Using database {}", path.display());
    let store = Store::open(&path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    Ok(LandingService::new(store))
}
