use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use symptom_core::{SymptomClient, UiConfig};
use symptom_ui::{
    DispatchOutcome, MemoryField, MemoryResults, QueryDispatcher, SymptomForm, TextField,
    PRESET_SYMPTOMS,
};
use tracing::{debug, info};

use crate::output::{print_diagnosis, print_error, print_usage_instructions};

/// What started a query
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Text typed into the field, then the search action
    Text(String),
    /// A preset tag
    Preset(String),
}

/// The query half of the page, backed by in-memory elements
pub struct Page {
    form: SymptomForm,
    field: Arc<MemoryField>,
    results: Arc<MemoryResults>,
    html: bool,
}

impl Page {
    pub fn new(config: &UiConfig, html: bool) -> Self {
        let client = Arc::new(SymptomClient::from_config(config));
        info!("Using symptom endpoint {}", client.endpoint());

        let field = Arc::new(MemoryField::default());
        let results = Arc::new(MemoryResults::new());
        let dispatcher = Arc::new(QueryDispatcher::from_config(client, results.clone(), config));

        Self {
            form: SymptomForm::new(field.clone(), dispatcher),
            field,
            results,
            html,
        }
    }

    async fn trigger(&self, trigger: Trigger) -> DispatchOutcome {
        match trigger {
            Trigger::Text(text) => {
                self.field.set_value(&text);
                self.form.submit().await
            }
            Trigger::Preset(label) => self.form.activate_preset(&label).await,
        }
    }

    fn present(&self, outcome: &DispatchOutcome) {
        if self.html {
            println!("{}", self.results.html());
            return;
        }
        match outcome {
            DispatchOutcome::Rendered(result) => print_diagnosis(result),
            DispatchOutcome::Failed => print_error(),
            DispatchOutcome::Skipped | DispatchOutcome::Superseded => {}
        }
    }
}

fn searching_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}

/// Runs one query and prints its outcome
pub async fn run_single_query(page: &Page, trigger: Trigger) -> Result<DispatchOutcome> {
    debug!(?trigger, "Running single query");

    let spinner = searching_spinner()?;
    let outcome = page.trigger(trigger).await;
    spinner.finish_and_clear();

    if outcome == DispatchOutcome::Skipped {
        print_usage_instructions();
    } else {
        page.present(&outcome);
    }
    Ok(outcome)
}

/// Interactive input naming a preset, in any letter case, behaves like a
/// click on that preset tag; anything else is sent as typed text.
pub fn interactive_trigger(input: &str) -> Trigger {
    match PRESET_SYMPTOMS
        .iter()
        .find(|preset| preset.eq_ignore_ascii_case(input))
    {
        Some(preset) => Trigger::Preset(preset.to_string()),
        None => Trigger::Text(input.to_string()),
    }
}

/// Prompts for symptoms until the user types 'exit' or 'quit'
pub async fn run_interactive(page: &Page) -> Result<()> {
    println!("Describe your symptoms, or type a preset name.");
    println!("Type 'exit' or 'quit' to end the session.");
    println!();

    loop {
        print!("{}: ", "Symptoms".green().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye.");
            break;
        }

        let spinner = searching_spinner()?;
        let outcome = page.trigger(interactive_trigger(input)).await;
        spinner.finish_and_clear();
        page.present(&outcome);
        println!();
    }

    Ok(())
}
