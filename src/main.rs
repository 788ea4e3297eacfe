use anyhow::Result;
use clap::{Parser, Subcommand};

use messboard_menu::{MenuScreen, PageModel, SystemClock};

/// messboard - weekly mess-hall menu board
#[derive(Parser)]
#[command(name = "messboard")]
#[command(about = "Weekly mess-hall menu board", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server hosting the board
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch the menu and print it, offline when the cache allows
    Show {
        /// Day to display instead of the automatic choice
        #[arg(long)]
        day: Option<String>,

        /// Menu JSON URL (overrides config file)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = messboard::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    messboard::observability::init_observability(
        "messboard",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Show { day, url } => show_command(config, day, url).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: messboard::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting messboard server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let app = messboard::create_app(config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn show_command(
    config: messboard::Config,
    day_override: Option<String>,
    url_override: Option<String>,
) -> Result<()> {
    let url = url_override.unwrap_or_else(|| config.menu.url.clone());
    let transport = messboard::net::connect_transport(&config).await?;

    let mut screen = MenuScreen::new(PageModel::default(), SystemClock);
    screen.boot();

    let outcome = messboard_menu::load(&transport, &url).await;
    screen.apply(outcome, &url);

    if let Some(day) = day_override {
        if screen.loaded() {
            screen.select_day(&day);
        }
    }

    print_board(screen.surface());
    Ok(())
}

/// Writes the recorded page to stdout, mirroring the board's regions.
fn print_board(page: &PageModel) {
    println!("{}", page.meals_title);
    println!("{}", page.meals_subtitle);
    if page.error_visible {
        println!();
        println!("! {}", page.error_message);
    }
    println!("Current day: {}", page.current_day);
    if page.today_badge {
        println!("{}", page.today_text);
    }

    if !page.day_controls.is_empty() {
        println!();
        for control in &page.day_controls {
            let marker = if control.active { ">" } else { " " };
            println!("{marker} {} ({})", control.day, control.hint);
        }
    }

    for card in &page.meal_cards {
        println!();
        println!("{} [{}]", card.name, card.time_tag);
        match &card.empty_note {
            Some(note) => println!("  {note}"),
            None => {
                for item in &card.items {
                    println!("  - {item}");
                }
            }
        }
    }

    println!();
    println!("{}", page.data_status);
    if !page.last_updated.is_empty() {
        println!("{}", page.last_updated);
    }
}
