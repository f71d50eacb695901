use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn};

use point_me::{
    calc_qibla,
    config::{Config, DEFAULT_CONFIG_FILE},
    heading_to_dir,
    magnetic::{to_magnetic_bearing, MagneticData},
    orientation::HeadingReading,
    platform::lines::LineOrientation,
    rose::{build_compass_rose_ticks, ticks_group_id, SvgDocument},
    start_compass, CompassHandlers, Coordinate,
};

#[derive(Parser, Debug)]
#[command(version, about = "Compass and Qibla direction tools")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compass point for a heading in degrees
    Direction {
        #[arg(allow_hyphen_values = true)]
        heading: f64,
    },
    /// Qibla bearing from a location (defaults to the configured observer)
    Qibla {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Bearing against magnetic north
        #[arg(long)]
        magnetic: bool,
    },
    /// Print the compass rose tick group as SVG
    Rose {
        #[arg(long)]
        id: Option<String>,
    },
    /// Follow orientation events (JSON lines on stdin) and print headings
    Compass,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Direction { heading } => println!("{}", heading_to_dir(heading)),
        Command::Qibla { lat, lon, magnetic } => {
            handle_qibla(&config, lat, lon, magnetic || config.compass.magnetic)
        }
        Command::Rose { id } => handle_rose(id.as_deref().unwrap_or(&config.compass.rose_id)),
        Command::Compass => handle_compass().await?,
    }
    Ok(())
}

fn handle_qibla(config: &Config, lat: Option<f64>, lon: Option<f64>, magnetic: bool) {
    let observer = config.observer.position();
    let position = Coordinate::new(
        lat.unwrap_or(observer.latitude),
        lon.unwrap_or(observer.longitude),
    );
    let mut bearing = calc_qibla(position.latitude, position.longitude);
    let mut reference = "true";

    if magnetic {
        let today = chrono::Utc::now().date_naive();
        match MagneticData::at(position, config.observer.altitude, today) {
            Ok(field) => {
                info!("declination {:.2}°", field.declination);
                bearing = to_magnetic_bearing(bearing, f64::from(field.declination));
                reference = "magnetic";
            }
            Err(e) => warn!("no magnetic correction: {e}"),
        }
    }

    println!(
        "{:.1}° {} ({reference} north) from {:.4}, {:.4}",
        bearing,
        heading_to_dir(bearing),
        position.latitude,
        position.longitude
    );
}

fn handle_rose(svg_id: &str) {
    let mut doc = SvgDocument::with_dial(svg_id);
    build_compass_rose_ticks(&mut doc, svg_id);
    if let Some(group) = doc.group(&ticks_group_id(svg_id)) {
        println!("{}", group.to_markup());
    }
}

async fn handle_compass() -> anyhow::Result<()> {
    let mut host = LineOrientation::new(tokio::io::stdin());
    let handlers = CompassHandlers::new()
        .on_status(|message| eprintln!("{message}"))
        .on_heading(|heading| match serde_json::to_string(&HeadingReading::now(heading)) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("cannot encode heading: {e}"),
        });

    start_compass(&mut host, handlers)
        .await
        .context("compass session")?;
    let delivered = host.run().await?;
    info!("orientation input closed after {delivered} events");
    Ok(())
}
