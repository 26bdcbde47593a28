//! Configuration structures for the hotel room allocator
//!
//! This module contains the demo configuration structure and validation logic
//! used to control the booking demo: starting occupancy, the booking plan,
//! and output options.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-room-allocator",
    version = "0.1.0",
    about = "Hotel Room Allocator - books the closest group of free rooms for each party",
    long_about = "Books groups of rooms in a fixed 97-room hotel. Parties get adjacent rooms on a single floor whenever one floor has enough availability; otherwise a cross-floor pick minimizes the longest walk between any two rooms of the group.

EXAMPLES:
    # Book three rooms in an empty hotel
    hotel-room-allocator --book 3

    # Seeded random occupancy, then two bookings in sequence
    hotel-room-allocator --occupancy-probability 0.35 --seed 42 --book 2 --book 4

    # Use a configuration file
    hotel-room-allocator --config demo.json

    # Generate configuration template
    hotel-room-allocator --print-config > my-config.json

    # Validate configuration without booking
    hotel-room-allocator --config my-config.json --dry-run

    # Machine-readable booking outcomes
    hotel-room-allocator --book 3 --output-format json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Party sizes to book, in order
    #[arg(
        short = 'b',
        long = "book",
        value_name = "N",
        help = "Book a party of N rooms (repeatable)",
        long_help = "Requests a booking for a party of N rooms. Repeat the flag to book several parties in sequence against the same occupancy state. Sizes outside 1-5 are passed through and rejected by the allocator."
    )]
    pub book: Vec<usize>,

    /// Probability that each room starts occupied
    #[arg(
        long,
        help = "Probability that each room starts occupied (0.0-1.0)",
        long_help = "Each room is independently occupied with this probability before any booking runs. Range: 0.0-1.0. Default: 0.35"
    )]
    pub occupancy_probability: Option<f64>,

    /// Random seed for reproducible occupancy
    #[arg(long, help = "Random seed for reproducible occupancy")]
    pub seed: Option<u64>,

    /// Output format for booking outcomes
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for booking outcomes. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Skip the floor grid in text output
    #[arg(long, help = "Skip the floor grid in text output")]
    pub no_grid: bool,

    /// Directory for daily-rolling log files
    #[arg(long, help = "Write logs to daily-rolling files in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without booking
    #[arg(long, help = "Validate configuration without booking")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Party sizes to book, in order
    pub bookings: Option<Vec<usize>>,

    /// Probability that each room starts occupied (0.0-1.0)
    pub occupancy_probability: Option<f64>,

    /// Random seed for reproducible occupancy
    pub seed: Option<u64>,

    /// Output format for booking outcomes
    pub output_format: Option<String>,

    /// Whether text output includes the floor grid
    pub show_grid: Option<bool>,
}

/// Configuration for the booking demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Party sizes to book, in order
    pub bookings: Vec<usize>,

    /// Probability that each room starts occupied (0.0-1.0)
    pub occupancy_probability: f64,

    /// Random seed for reproducible occupancy
    pub seed: Option<u64>,

    /// Output format for booking outcomes
    pub output_format: String,

    /// Whether text output includes the floor grid
    pub show_grid: bool,
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the demo configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Occupancy probability is out of range
    #[error("Occupancy probability must be between 0.0 and 1.0, got {0}")]
    InvalidProbability(f64),

    /// Output format string is not recognized
    #[error("Unknown output format: {0} (supported: text, json)")]
    UnknownOutputFormat(String),
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            occupancy_probability: 0.35,
            seed: None,
            output_format: "text".to_string(),
            show_grid: true,
        }
    }
}

impl DemoConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            bookings: config_file.bookings.unwrap_or(defaults.bookings),
            occupancy_probability: config_file
                .occupancy_probability
                .unwrap_or(defaults.occupancy_probability),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            show_grid: config_file.show_grid.unwrap_or(defaults.show_grid),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if !args.book.is_empty() {
            config.bookings = args.book;
        }
        if let Some(value) = args.occupancy_probability {
            config.occupancy_probability = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if args.no_grid {
            config.show_grid = false;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    ///
    /// Party sizes are deliberately not range-checked here; the allocator
    /// enforces its own 1..=5 limit, so oversized requests surface as
    /// booking failures rather than configuration errors.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.occupancy_probability) {
            return Err(ConfigValidationError::InvalidProbability(
                self.occupancy_probability,
            ));
        }

        if self.output_format.parse::<OutputFormat>().is_err() {
            return Err(ConfigValidationError::UnknownOutputFormat(
                self.output_format.clone(),
            ));
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
