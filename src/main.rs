use anyhow::{anyhow, Result};
use clap::Parser;
use wayfinder::{
    sdk::app::resolver::Resolver,
    sdk::app::shell::{Shell, Tab},
    sdk::config::Endpoints,
    sdk::map::view::{MapView, Viewport},
    sdk::routing::provider::HttpNavProvider,
    sdk::util::{log::init_logging, rate_limit::Limiter},
};

/// A CLI tool to plan a driving route between two addresses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The origin address (e.g., "Dallas, TX")
    #[arg(short, long)]
    from: String,

    /// The destination address (e.g., "Fort Worth, TX")
    #[arg(short, long)]
    to: String,

    /// Which view to print: "map" or "directions"
    #[arg(long, default_value = "directions")]
    view: String,
}

fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // --- Dependency initialization ---
    let endpoints = Endpoints::from_env();
    let limiter = Limiter::new();
    let provider = HttpNavProvider::new(endpoints, limiter);

    let mut shell = Shell::new();
    shell.set_origin(cli.from);
    shell.set_destination(cli.to);
    shell.select_tab(match cli.view.as_str() {
        "map" => Tab::Map,
        _ => Tab::Directions,
    });

    // clap requires both flags, but empty strings still arrive here.
    if shell.submit().is_err() {
        return Err(anyhow!("{}", shell.error().unwrap_or_default()));
    }

    let mut resolver = Resolver::new(provider);
    let mut map = MapView::new();

    if resolver.resolve(&mut shell, &mut map).is_none() {
        let banner = shell.error().unwrap_or("resolution failed").to_string();
        return Err(anyhow!(banner));
    }

    match shell.active_tab() {
        Tab::Directions => {
            for line in shell.render_directions() {
                println!("{line}");
            }
        }
        Tab::Map => {
            for marker in &map.applied().markers {
                println!("* {} at {}", marker.popup, marker.position);
            }
            println!("Route polyline: {} points", map.applied().polyline.len());
            match map.viewport() {
                Viewport::Fitted { bounds, padding_px } => println!(
                    "Viewport: fitted to [{}] .. [{}] with {}px padding",
                    bounds.south_west, bounds.north_east, padding_px
                ),
                Viewport::Centered { center, zoom } => {
                    println!("Viewport: centered on [{}] at zoom {}", center, zoom)
                }
            }
        }
    }

    Ok(())
}
