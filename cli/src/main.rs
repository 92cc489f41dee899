use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::Path;
use symptom_core::{get_default_config_file, UiConfig};
use tracing::{info, warn};

mod app;
mod cli;
mod logging;
mod output;

use crate::app::{run_interactive, run_single_query, Page, Trigger};
use crate::cli::Args;
use crate::output::{print_presets, print_usage_instructions};

const APP_NAME: &str = "symptom-ui";

fn load_config(path: &Path) -> Result<UiConfig> {
    UiConfig::load_from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_path = get_default_config_file(APP_NAME).ok();
    let base = match &default_path {
        Some(path) => load_config(path)?,
        None => UiConfig::default(),
    };
    // An explicit --config file is layered over the user's default file.
    let config = match &args.config {
        Some(path) => base.merge(&load_config(path)?),
        None => base,
    };
    let config_path = args.config.clone().or(default_path);

    logging::init_logging(config.log_level.as_deref(), args.verbose);

    if args.init_config {
        let path = config_path.context("Could not determine a config path")?;
        UiConfig::default()
            .save_to_file(&path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Wrote default config to {}", path.display().to_string().green());
        return Ok(());
    }

    if args.list_presets {
        print_presets();
        return Ok(());
    }

    let page = Page::new(&config, args.html);

    if args.interactive {
        return run_interactive(&page).await;
    }

    let trigger = match (args.preset, args.symptoms) {
        (Some(preset), _) => Trigger::Preset(preset),
        (None, Some(symptoms)) => Trigger::Text(symptoms),
        (None, None) => {
            print_usage_instructions();
            return Ok(());
        }
    };

    let outcome = run_single_query(&page, trigger).await?;
    info!(?outcome, "Query finished");
    if outcome == symptom_ui::DispatchOutcome::Failed {
        warn!("Symptom check did not succeed");
        std::process::exit(1);
    }
    Ok(())
}
