use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, info, warn};
use suncalc_core::AzimuthCoordinate;
use suncalc_riseset::{
    Location, MoonIllumination, RiseSetConfig, moon_illumination, moon_position,
    moon_times_with_config, solar_events_for_day, sun_position,
};
use suncalc_time::{Epoch, TimeError, UtcTime};

#[derive(Parser)]
#[command(name = "suncalc", about = "Sun and Moon positions, rise/set times and phases")]
struct Cli {
    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset, twilight and golden hour for a day
    Sun {
        /// UTC date or datetime (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ); now if omitted
        #[arg(long)]
        date: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Sun azimuth and altitude at an instant
    SunPosition {
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Moonrise, moonset, position and illumination
    Moon {
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Refracted altitude of the Moon's center at rise/set, degrees
        #[arg(long, default_value = "0.133", allow_hyphen_values = true)]
        horizon: f64,
    },
    /// Illuminated fraction and phase of the Moon
    Illumination {
        #[arg(long)]
        date: Option<String>,
    },
}

// stderr is the default sink; stdout stays clean for results
fn setup_logging(level: &str) -> LoggerHandle {
    Logger::try_with_str(level)
        .and_then(|logger| logger.start())
        .unwrap_or_else(|e| {
            eprintln!("Logger initialization failed: {e}");
            std::process::exit(1);
        })
}

fn parse_date(s: &str) -> Result<Epoch, TimeError> {
    s.parse::<UtcTime>().map(Epoch::from)
}

fn parse_epoch(date: Option<&str>) -> Epoch {
    match date {
        None => {
            let now = Epoch::now();
            debug!("no --date given, using {now}");
            now
        }
        Some(s) => parse_date(s).unwrap_or_else(|e| {
            eprintln!("Invalid date: {e}");
            std::process::exit(1);
        }),
    }
}

fn require_location(lat: f64, lon: f64) -> Location {
    Location::checked(lat, lon).unwrap_or_else(|e| {
        eprintln!("Invalid location: {e}");
        std::process::exit(1);
    })
}

fn print_azimuth(label: &str, pos: &AzimuthCoordinate) {
    println!(
        "{label}: azimuth {:.4} deg, altitude {:.4} deg",
        pos.azimuth.to_degrees(),
        pos.altitude.to_degrees()
    );
}

fn phase_name(ill: &MoonIllumination) -> &'static str {
    // distance from full moon, in phase units
    let from_full = (ill.phase - 0.5).abs();
    match (ill.is_waxing(), from_full) {
        (_, d) if d > 0.48 => "new moon",
        (_, d) if d < 0.02 => "full moon",
        (true, d) if d > 0.27 => "waxing crescent",
        (true, d) if d > 0.23 => "first quarter",
        (true, _) => "waxing gibbous",
        (false, d) if d > 0.27 => "waning crescent",
        (false, d) if d > 0.23 => "last quarter",
        (false, _) => "waning gibbous",
    }
}

fn print_illumination(ill: &MoonIllumination) {
    println!(
        "Illumination: {:.1}% ({}), phase {:.4}, limb angle {:.2} deg",
        ill.fraction * 100.0,
        phase_name(ill),
        ill.phase,
        ill.angle.to_degrees()
    );
}

fn main() {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_level);

    match cli.command {
        Commands::Sun { date, lat, lon } => {
            let epoch = parse_epoch(date.as_deref());
            let location = require_location(lat, lon);
            info!("solar events for {epoch} at {lat}, {lon}");

            println!("Solar events near {epoch} at {lat:.4}°N, {lon:.4}°E (UTC):\n");
            for (event, result) in solar_events_for_day(epoch, &location) {
                match result {
                    Ok(t) => println!("  {:15} {}", event.name(), t),
                    Err(e) => {
                        warn!("{}: {e}", event.name());
                        println!("  {:15} ({e})", event.name());
                    }
                }
            }
        }

        Commands::SunPosition { date, lat, lon } => {
            let epoch = parse_epoch(date.as_deref());
            let location = require_location(lat, lon);
            info!("sun position for {epoch} at {lat}, {lon}");
            print_azimuth("Sun", &sun_position(epoch, &location));
        }

        Commands::Moon {
            date,
            lat,
            lon,
            horizon,
        } => {
            let epoch = parse_epoch(date.as_deref());
            let location = require_location(lat, lon);
            let config = RiseSetConfig {
                moon_horizon_correction_deg: horizon,
            };
            info!("moon times for {epoch} at {lat}, {lon}, horizon {horizon} deg");

            match moon_times_with_config(epoch, &location, &config) {
                Ok(times) => {
                    println!("Moonrise: {}", times.rise);
                    println!("Moonset:  {}", times.set);
                }
                Err(e) => {
                    warn!("moon times: {e}");
                    println!("Moonrise/moonset: {e}");
                }
            }

            let pos = moon_position(epoch, &location);
            debug!("moon position {pos:?}");
            println!(
                "Moon at {epoch}: azimuth {:.4} deg, altitude {:.4} deg, distance {:.0} km",
                pos.azimuth.to_degrees(),
                pos.altitude.to_degrees(),
                pos.distance_km
            );
            println!(
                "Parallactic angle: {:.4} deg",
                pos.parallactic_angle.to_degrees()
            );
            print_illumination(&moon_illumination(epoch));
        }

        Commands::Illumination { date } => {
            let epoch = parse_epoch(date.as_deref());
            info!("moon illumination for {epoch}");
            print_illumination(&moon_illumination(epoch));
        }
    }
}
