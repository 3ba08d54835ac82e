//! Vitals Toolkit demo
//!
//! Runs each calculator once on sample readings and prints the results.

use tracing_subscriber::EnvFilter;

use vitals::build_info;
use vitals::hydration::calculate_hydration_needs;
use vitals::respiratory::{classify_breathing_frequency, classify_respiratory_status, Patient};
use vitals::temperature::{AnalysisOptions, ReportFormat, TemperatureAnalyzer, TemperatureUnit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (diagnostics go to stderr, results to stdout)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vitals=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let temp = 109.7;
    let age = 5;
    println!("Analyzing temperature: {}", temp);

    let mut analyzer = TemperatureAnalyzer::new(false, TemperatureUnit::Celsius);
    let options = AnalysisOptions {
        verbose: 3,
        log: true,
        unit: Some(TemperatureUnit::Celsius),
        ..Default::default()
    };

    let result = analyzer.analyze_patient(temp, age, &options)?;
    println!("Result: {}", result);

    let report = analyzer.get_status_report(true, ReportFormat::Long)?;
    println!("Status report: {}", serde_json::to_string(&report)?);

    let hydration = calculate_hydration_needs(70.0, 1.75, "mid")?;
    println!("Hydration: {}", serde_json::to_string(&hydration)?);

    let patient = Patient::new("Sample Patient", 72.0, None);
    let respiratory = classify_respiratory_status(&patient, 18, 95.0);
    let frequency = classify_breathing_frequency(&patient, 18)?;
    println!("Respiratory status: {} ({})", respiratory, frequency);

    Ok(())
}
