//! Command line parsing and execution of the deployer.

use alloy_primitives::address;
use clap::Parser;
use deployer::{
    cli::{run, Cli, Command},
    config::OutputFormat,
    require::RequireError,
};
use environment::{NetworkId, Resource};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("deployer").chain(args.iter().copied()))
        .expect("valid arguments")
}

#[test]
fn test_show_with_options_after_subcommand() {
    let cli = parse(&["show", "--format", "toml", "--network", "97"]);
    assert_eq!(cli.command, Command::Show);
    assert_eq!(cli.format, Some(OutputFormat::Toml));
    assert_eq!(cli.network, Some(NetworkId::new("97")));

    let output = run(cli).unwrap();
    let value: toml::Value = toml::from_str(&output).unwrap();
    assert_eq!(
        value["WBNB"].as_str(),
        Some("0xae13d989dac2f0debff460ac112a837c89baa7cd")
    );
    assert_eq!(value["IS_VERIFY_SUPPORTED"].as_bool(), Some(true));
}

#[test]
fn test_show_with_options_before_subcommand() {
    let output = run(parse(&["-n", "56", "-f", "json", "show"])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["NETWORK"], "56");
    assert!(value["SUMMITSWAP_FACTORY"].is_null());
}

#[test]
fn test_networks_short_format_flag() {
    let output = run(parse(&["networks", "-f", "toml"])).unwrap();
    let value: toml::Value = toml::from_str(&output).unwrap();

    assert_eq!(value["networks"].as_array().unwrap().len(), 2);
}

#[test]
fn test_format_from_config_file() {
    let output = run(parse(&["networks", "--config", "tests/deployer-config.toml"])).unwrap();

    // config file selects toml
    assert!(toml::from_str::<toml::Value>(&output).is_ok());
    assert!(serde_json::from_str::<serde_json::Value>(&output).is_err());
}

#[test]
fn test_unknown_format_rejected() {
    let result = Cli::try_parse_from(["deployer", "show", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_resource_rejected() {
    let result = Cli::try_parse_from(["deployer", "get", "pair", "-n", "97"]);
    assert!(result.is_err());
}

#[test]
fn test_get_value() {
    let cli = parse(&["get", "router", "--network", "97"]);
    assert_eq!(
        cli.command,
        Command::Get {
            resource: Resource::Router,
            address: false,
        }
    );

    assert_eq!(run(cli).unwrap(), "0x1ebCD5e8a378F3b72900bF5BaEb073872f105B73");
}

#[test]
fn test_get_address() {
    let output = run(parse(&["get", "WBNB", "--address", "-n", "97"])).unwrap();

    assert_eq!(
        output,
        address!("0xae13d989dac2f0debff460ac112a837c89baa7cd").to_string()
    );
}

#[test]
fn test_get_missing_resource_fails() {
    let err = run(parse(&["get", "factory", "--network", "56"])).unwrap_err();

    let err = err.downcast_ref::<RequireError>().expect("require error");
    assert!(matches!(
        err,
        RequireError::Missing {
            resource: Resource::Factory,
            ..
        }
    ));
}

#[test]
fn test_get_rpc_url_as_address_fails() {
    let err = run(parse(&["get", "rpc-url", "--address", "-n", "56"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RequireError>(),
        Some(RequireError::InvalidAddress { .. })
    ));
}
