use clap::Parser;
use deployer::cli::{run, Cli};

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    println!("{}", run(cli)?);

    Ok(())
}
