use colored::*;
use symptom_core::DiagnosisResult;
use symptom_ui::render::ERROR_MESSAGE;
use symptom_ui::PRESET_SYMPTOMS;

/// Print the two result blocks: condition first, then the recommendation
pub fn print_diagnosis(result: &DiagnosisResult) {
    println!(
        "{} {} {}",
        "Possible Condition:".blue().bold(),
        result.diagnosis.bold(),
        format!("(Confidence: {}%)", result.confidence_percent()).dimmed()
    );
    println!();
    println!("{}", "Recommendation:".green().bold());
    println!("  {}", result.recommendation);
}

pub fn print_error() {
    eprintln!("{}", ERROR_MESSAGE.red());
}

pub fn print_presets() {
    println!("{}", "Preset symptoms:".yellow().bold());
    for preset in PRESET_SYMPTOMS {
        println!("  {}", preset.cyan());
    }
}

/// Show usage instructions when no symptoms or action is provided
pub fn print_usage_instructions() {
    println!("{}", "Usage:".yellow().bold());
    println!("  {}", "symptom-cli \"your symptoms\"".green().bold());
    println!("    Check a free-text description of your symptoms");
    println!();
    println!("  {}", "symptom-cli --preset Fever".green().bold());
    println!("    Check one of the preset symptoms");
    println!();
    println!("  {}", "symptom-cli -i".green().bold());
    println!("    Keep asking for symptoms until 'exit'");
    println!();
    println!("{}", "Options:".cyan());
    println!("  --list-presets       Show the preset symptoms");
    println!("  --html               Print the rendered HTML fragment");
    println!("  --config <PATH>      Use a specific config file");
    println!("  --help               Show this help message");
    println!();
}
