use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;
use symptom_ui::PRESET_SYMPTOMS;

/// Describe your symptoms and get a possible condition from the checker backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Free-text description of the symptoms
    #[arg(index = 1)]
    pub symptoms: Option<String>,

    /// Search one of the preset symptoms instead of free text
    #[arg(short, long, value_parser = PossibleValuesParser::new(PRESET_SYMPTOMS))]
    pub preset: Option<String>,

    /// Print the preset symptoms and exit
    #[arg(long, default_value_t = false)]
    pub list_presets: bool,

    /// Keep prompting for symptoms until 'exit' or 'quit'
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Print the rendered HTML fragment instead of formatted text
    #[arg(long, default_value_t = false)]
    pub html: bool,

    /// Path to the config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the default config to the config path and exit
    #[arg(long, default_value_t = false)]
    pub init_config: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
