use clap::Parser;
use echocat_core::cli::{Cli, OutputFormat};
use echocat_core::{render_plot, AgreementReport, Result, TextReport, ViewKey};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // View key resolution happens before any file is opened.
    let key = ViewKey::parse(&cli.view)?;
    info!("Analyzing view: {} ({})", key, key.title());

    let report = AgreementReport::from_files(&key, &cli.overreads, &cli.predictions)?;

    render_plot(&cli.out, &report.title, &report.stats)?;
    info!("Plot written to {}", cli.out.display());

    match cli.format {
        OutputFormat::Text => println!("{}", TextReport::new(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
