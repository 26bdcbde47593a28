// Hotel Room Allocator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-room-allocator --book 3 --book 2
// ```
//
// Or with seeded random occupancy:
//
// ```console
// $ ./target/release/hotel-room-allocator --occupancy-probability 0.35 --seed 42 --book 4 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use hotel_room_allocator::booking::{render_grid, BookingRecord, FrontDesk, LoggingConfig};
use hotel_room_allocator::hotel::{floor_width, HotelLayout, OccupancyGenerator};
use hotel_room_allocator::types::{CliArgs, DemoConfig, OutputFormat};
use std::process;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = DemoConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags; the guard keeps the file writer
    // alive until the process exits
    let _logging_guard: Option<WorkerGuard> = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting hotel room allocator");

    // Load configuration from CLI arguments and optional config file
    let config = match DemoConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no bookings will be made.");
        print_configuration_summary(&config);
        return;
    }

    // Print startup banner and configuration
    print_startup_banner(&config);

    // Run the booking demo
    if let Err(e) = run_demo(&config) {
        error!("Demo run failed: {}", e);
        process::exit(1);
    }

    info!("Hotel room allocator completed successfully");
}

/// Initialize logging from the CLI flags, honoring `--log-dir`
fn init_logging(
    args: &CliArgs,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(log_dir) = &args.log_dir {
        let mut logging = LoggingConfig::new().with_file_logging(log_dir);
        if args.debug {
            logging = logging.with_level(tracing::Level::DEBUG).with_span_events();
        } else if args.verbose {
            logging = logging.with_span_events();
        } else {
            logging = logging.with_level(tracing::Level::WARN);
        }
        logging.init()
    } else if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    }
}

/// Run the booking demo over one freshly drawn occupancy state
fn run_demo(config: &DemoConfig) -> anyhow::Result<()> {
    let format = config.get_output_format().map_err(anyhow::Error::msg)?;

    let mut desk =
        FrontDesk::new(HotelLayout::new()).context("Failed to set up the front desk")?;

    let mut generator = match config.seed {
        Some(seed) => OccupancyGenerator::with_seed(seed),
        None => OccupancyGenerator::new(),
    };
    desk.randomize_occupancy(&mut generator, config.occupancy_probability);

    if format == OutputFormat::Text {
        eprintln!(
            "Initial occupancy: {} of {} rooms occupied (p = {:.2})",
            desk.occupied().len(),
            desk.layout().room_count(),
            config.occupancy_probability
        );
        if config.show_grid {
            println!("{}", render_grid(desk.layout(), desk.occupied(), &[]));
        }
    }

    for (index, &party_size) in config.bookings.iter().enumerate() {
        match desk.book(party_size) {
            Ok(record) => print_booking(config, format, index, &record, &desk)?,
            Err(e) => {
                // A failed booking leaves occupancy untouched, so later
                // requests still run against the same state
                warn!("Booking #{} for a party of {} failed: {}", index + 1, party_size, e);
                eprintln!("Booking #{}: {}", index + 1, e);
            }
        }
    }

    if format == OutputFormat::Text {
        print_remaining_availability(&desk);
    }

    Ok(())
}

/// Print one successful booking in the configured output format
fn print_booking(
    config: &DemoConfig,
    format: OutputFormat,
    index: usize,
    record: &BookingRecord,
    desk: &FrontDesk,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Booking #{}: party of {}", index + 1, record.rooms.len());
            println!("  Rooms: {}", format_room_list(record));
            println!("  Travel time: {} min", record.travel_minutes);
            if config.show_grid {
                println!("{}", render_grid(desk.layout(), desk.occupied(), &record.rooms));
            }
        }
        OutputFormat::Json => {
            let line = record.to_json().context("Failed to serialize booking record")?;
            println!("{}", line);
        }
    }
    Ok(())
}

/// Comma-separated display numbers of a booking
fn format_room_list(record: &BookingRecord) -> String {
    record
        .room_numbers()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the closing availability summary for text output
fn print_remaining_availability(desk: &FrontDesk) {
    let mut summary = String::from("Remaining availability:");
    for (floor, free) in desk.availability_by_floor() {
        summary.push_str(&format!(" F{} {}/{}", floor, free, floor_width(floor)));
    }
    println!("{}", summary);
    println!(
        "Total available: {}/{}",
        desk.available_rooms().len(),
        desk.layout().room_count()
    );
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &DemoConfig) {
    eprintln!("Hotel Room Allocator");
    eprintln!("====================");
    eprintln!("Walking-distance-aware room assignment over a fixed 97-room hotel");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &DemoConfig) {
    eprintln!("Configuration:");
    eprintln!("  Bookings: {:?}", config.bookings);
    eprintln!("  Occupancy Probability: {:.2}", config.occupancy_probability);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Show Grid: {}", config.show_grid);
    eprintln!();
}
