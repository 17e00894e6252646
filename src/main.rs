use clap::{Parser, Subcommand};
use nav_playground::location::Location;
use nav_playground::navigation::{self, DEFAULT_WINDOW_RADIUS};
use nav_playground::pages::PageView;
use nav_playground::server::Server;
use nav_playground::{config, output, render};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("PLAYGROUND_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("PLAYGROUND_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Shared flag for commands that read the site config.
#[derive(clap::Args, Clone)]
struct ConfigArgs {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Parser)]
#[command(name = "nav-playground")]
#[command(about = "URL-driven pagination, infinite scroll, and carousel demos")]
#[command(long_about = "\
URL-driven pagination, infinite scroll, and carousel demos

Every page keeps its state in the query string, so links, reloads, and
bookmarks always land on the same view:

  /                          Home, links to each demo
  /pagination?page=N         Numbered pages with ellipses
  /infinite-scroll?page=N    Posts from page 1 through N
  /carousel?slide=N          One slide, wrapping prev/next

Positions are clamped: missing, non-numeric, or zero means 1; anything past
the end means the last page.

Run 'nav-playground gen-config' to generate a documented playground.toml.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the playground over HTTP
    Serve {
        #[command(flatten)]
        config: ConfigArgs,
        /// Override server.host
        #[arg(long)]
        host: Option<String>,
        /// Override server.port (0 = any free port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Render one request target (e.g. "/carousel?slide=3") to stdout
    Render {
        target: String,
        /// Print the page model as JSON instead of HTML
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the pagination window for a page
    Window {
        /// Current page (clamped into 1..=total)
        #[arg(long)]
        current: i64,
        /// Total number of pages
        #[arg(long)]
        total: i64,
        /// Pages shown on each side of the current one
        #[arg(long, default_value_t = DEFAULT_WINDOW_RADIUS, value_parser = clap::value_parser!(i64).range(0..))]
        radius: i64,
        /// Print the markers as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock playground.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config: config_args,
            host,
            port,
        } => {
            let mut site_config = config::load_config(&config_args.config)?;
            if let Some(host) = host {
                site_config.server.host = host;
            }
            if let Some(port) = port {
                site_config.server.port = port;
            }
            let server = Server::bind(site_config)?;
            let address = server.local_addr()?;
            output::print_serve_banner(&address.to_string(), server.config());
            server.run()?;
        }
        Command::Render {
            target,
            json,
            config: config_args,
        } => {
            let site_config = config::load_config(&config_args.config)?;
            let location = Location::parse(&target);
            let view = PageView::resolve(&site_config, &location);
            match (view, json) {
                (Some(view), true) => {
                    println!("{}", serde_json::to_string_pretty(&view)?);
                }
                (Some(view), false) => {
                    println!(
                        "{}",
                        render::render_page(&site_config, &view, &location).into_string()
                    );
                }
                (None, true) => {
                    return Err(format!("no page at '{}'", location.path()).into());
                }
                (None, false) => {
                    println!(
                        "{}",
                        render::render_not_found(&site_config, location.path()).into_string()
                    );
                }
            }
        }
        Command::Window {
            current,
            total,
            radius,
            json,
        } => {
            let current = navigation::clamp(current, 1, total);
            let markers = navigation::build_window(current, total, radius);
            if json {
                println!("{}", serde_json::to_string(&markers)?);
            } else {
                output::print_window(&markers, current);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
