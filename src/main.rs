use clap::Parser;
use item_pipeline::utils::{logger, validation::Validate};
use item_pipeline::{Application, CliConfig, ItemStore, Result, Task};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.show_version {
        println!("{}", ItemStore::version());
        return;
    }

    tracing::info!("Starting item-pipeline {}", ItemStore::version());
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut app = match Application::from_config(&config, io::stdout()) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to load items: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if !config.strict {
        if let Err(e) = app.store().validate() {
            tracing::warn!("Loaded unvalidated items: {}", e);
        }
    }

    app.run();

    if config.json {
        if let Err(e) = write_snapshot(app) {
            tracing::error!("Failed to write snapshot: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

fn write_snapshot<W: Write>(app: Application<W>) -> Result<()> {
    let json = serde_json::to_string(app.store())?;
    let mut out = app.into_sink();
    writeln!(out, "{}", json)?;
    Ok(())
}
