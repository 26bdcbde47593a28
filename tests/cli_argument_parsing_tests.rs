//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! merged with configuration files, including the repeatable --book option.

use std::io::Write;

use clap::Parser;
use hotel_room_allocator::types::{CliArgs, DemoConfig, OutputFormat};
use tempfile::Builder;

/// Test parsing of the repeatable book argument
#[test]
fn test_book_argument_parsing() {
    // No bookings by default
    let args = vec!["test"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert!(cli_args.book.is_empty());

    // Single booking
    let args = vec!["test", "--book", "3"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.book, vec![3]);

    // Repeated flags accumulate in order
    let args = vec!["test", "--book", "5", "--book", "1", "--book", "2"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.book, vec![5, 1, 2]);

    // Short form
    let args = vec!["test", "-b", "4", "-b", "4"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.book, vec![4, 4]);
}

/// Test occupancy and seed argument parsing
#[test]
fn test_occupancy_arguments_parsing() {
    let args = vec![
        "test",
        "--occupancy-probability",
        "0.6",
        "--seed",
        "12345",
    ];
    let cli_args = CliArgs::try_parse_from(args).unwrap();

    assert_eq!(cli_args.occupancy_probability, Some(0.6));
    assert_eq!(cli_args.seed, Some(12345));
}

/// Test output control flags
#[test]
fn test_output_flags_parsing() {
    let args = vec!["test", "--output-format", "json", "--no-grid", "--verbose"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();

    assert_eq!(cli_args.output_format, Some("json".to_string()));
    assert!(cli_args.no_grid);
    assert!(cli_args.verbose);
    assert!(!cli_args.debug);
    assert!(!cli_args.dry_run);
}

/// Test configuration creation from CLI arguments alone
#[test]
fn test_config_from_cli_arguments() {
    let args = vec![
        "test",
        "--book",
        "2",
        "--book",
        "4",
        "--occupancy-probability",
        "0.2",
    ];
    let cli_args = CliArgs::try_parse_from(args).unwrap();

    let config = DemoConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.bookings, vec![2, 4]);
    assert_eq!(config.occupancy_probability, 0.2);

    // Untouched fields keep their defaults
    assert_eq!(config.output_format, "text");
    assert!(config.show_grid);
    assert!(config.seed.is_none());

    config.validate().unwrap();
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Text);
}

/// Test that CLI arguments override configuration file values
#[test]
fn test_cli_overrides_config_file() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    let config_json = r#"{
        "bookings": [1, 1],
        "occupancy_probability": 0.9,
        "seed": 11,
        "output_format": "json"
    }"#;
    temp_file.write_all(config_json.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let path = temp_file.path().display().to_string();
    let args = vec![
        "test",
        "--config",
        path.as_str(),
        "--occupancy-probability",
        "0.1",
        "--book",
        "5",
    ];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = DemoConfig::from_cli_args(cli_args).unwrap();

    // CLI wins where given
    assert_eq!(config.bookings, vec![5]);
    assert_eq!(config.occupancy_probability, 0.1);

    // File values survive where the CLI is silent
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.output_format, "json");
}

/// Test that a config file alone drives the booking plan
#[test]
fn test_config_file_without_cli_overrides() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    temp_file
        .write_all(br#"{"bookings": [3, 3, 3], "show_grid": false}"#)
        .unwrap();
    temp_file.flush().unwrap();

    let path = temp_file.path().display().to_string();
    let args = vec!["test", "--config", path.as_str()];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = DemoConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.bookings, vec![3, 3, 3]);
    assert!(!config.show_grid);
    assert_eq!(config.occupancy_probability, 0.35);
}

/// Test validation failures surface after merging
#[test]
fn test_merged_configuration_validation() {
    let args = vec!["test", "--occupancy-probability", "1.5"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = DemoConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());

    let args = vec!["test", "--output-format", "xml"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = DemoConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());
}

/// Test that oversized party sizes parse and validate; the allocator owns
/// the range check
#[test]
fn test_party_sizes_are_not_clamped() {
    let args = vec!["test", "--book", "9", "--book", "0"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = DemoConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.bookings, vec![9, 0]);
    config.validate().unwrap();
}

/// Test the default configuration template round-trips through JSON
#[test]
fn test_print_config_template_round_trip() {
    let template = DemoConfig::default().print_json().unwrap();
    let parsed: DemoConfig = serde_json::from_str(&template).unwrap();

    assert_eq!(parsed.bookings, Vec::<usize>::new());
    assert_eq!(parsed.occupancy_probability, 0.35);
    assert_eq!(parsed.output_format, "text");
    assert!(parsed.show_grid);
}
