//! Temperature analyzer
//!
//! Converts readings to Celsius, detects fever and classifies a patient's
//! status using age-dependent thresholds. The analyzer remembers the last
//! converted reading and the last classification so a report can be built
//! afterwards. Failed calls leave both untouched.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::report::{ReportFormat, StatusReport};
use super::units::TemperatureUnit;
use crate::error::{HealthError, HealthResult};

/// Fever threshold used by `has_fever`
pub const LOW_FEVER_THRESHOLD: f64 = 38.0;
/// Fever threshold for patients aged 3 and over
pub const HIGH_FEVER_THRESHOLD: f64 = 39.4;
/// Fever threshold for babies under 3 years
pub const BABY_FEVER_THRESHOLD: f64 = 37.4;
/// Readings within this margin below the threshold are "almost fever"
pub const ALMOST_FEVER_MARGIN: f64 = 0.2;
/// Below this Celsius value emergency mode flags possible hypothermia
pub const HYPOTHERMIA_THRESHOLD: f64 = 30.0;
/// Age below which the baby threshold applies
pub const BABY_AGE_LIMIT: i32 = 3;

/// Default file for analysis log lines
pub const DEFAULT_LOG_FILE: &str = "temp_log.txt";

/// Classification of a patient's temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientStatus {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "ALMOST FEVER")]
    AlmostFever,
    #[serde(rename = "FEVER")]
    Fever,
    #[serde(rename = "HYPOTHERMIA?")]
    Hypothermia,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Normal => "NORMAL",
            PatientStatus::AlmostFever => "ALMOST FEVER",
            PatientStatus::Fever => "FEVER",
            PatientStatus::Hypothermia => "HYPOTHERMIA?",
        }
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single `analyze_patient` call
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// 0 = silent, 1+ = status line, 3+ = detailed line
    pub verbose: u8,
    /// Flag readings below 30C as possible hypothermia
    pub emergency_mode: bool,
    /// Append the result to `log_file`
    pub log: bool,
    pub log_file: PathBuf,
    /// Unit of the reading; the analyzer's default unit when `None`
    pub unit: Option<TemperatureUnit>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            verbose: 0,
            emergency_mode: false,
            log: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            unit: None,
        }
    }
}

/// Stateful temperature analyzer, one per session
#[derive(Debug, Clone, Default)]
pub struct TemperatureAnalyzer {
    last_status: Option<PatientStatus>,
    tmp_cache: Option<f64>,
    debug_mode: bool,
    default_unit: TemperatureUnit,
}

impl TemperatureAnalyzer {
    pub fn new(debug_mode: bool, default_unit: TemperatureUnit) -> Self {
        Self {
            last_status: None,
            tmp_cache: None,
            debug_mode,
            default_unit,
        }
    }

    pub fn last_status(&self) -> Option<PatientStatus> {
        self.last_status
    }

    /// Last successfully converted reading, in Celsius
    pub fn cached_celsius(&self) -> Option<f64> {
        self.tmp_cache
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn default_unit(&self) -> TemperatureUnit {
        self.default_unit
    }

    /// Validate the reading against its unit's realistic range and convert it to Celsius
    ///
    /// The converted value is cached on success.
    pub fn convert_to_celsius(
        &mut self,
        temp: f64,
        unit: Option<TemperatureUnit>,
    ) -> HealthResult<f64> {
        let unit = unit.unwrap_or(self.default_unit);

        if !unit.is_realistic(temp) {
            tracing::warn!("Unrealistic temperature detected: {}{}", temp, unit);
            return Err(HealthError::invalid("Unrealistic temperature detected"));
        }

        let celsius = unit.to_celsius(temp);
        if self.debug_mode {
            tracing::debug!("Converted {}{} to {}C", temp, unit, celsius);
        }

        self.tmp_cache = Some(celsius);
        Ok(celsius)
    }

    /// Check whether a reading is above the low fever threshold
    ///
    /// Celsius readings are compared directly; other units go through
    /// `convert_to_celsius` and update the cache.
    pub fn has_fever(&mut self, temp: f64, scale: TemperatureUnit) -> HealthResult<bool> {
        let celsius = match scale {
            TemperatureUnit::Celsius => temp,
            TemperatureUnit::Fahrenheit => self.convert_to_celsius(temp, Some(scale)).map_err(|e| {
                tracing::warn!("Error calculating fever status: {}", e);
                e
            })?,
        };

        Ok(celsius > LOW_FEVER_THRESHOLD)
    }

    /// Classify a patient's temperature
    ///
    /// # Arguments
    /// * `temp` - Reading in `options.unit` (or the default unit)
    /// * `age` - Patient age in years
    /// * `options` - Verbosity, emergency mode and logging settings
    ///
    /// In emergency mode a reading below 30C returns `Hypothermia` right away,
    /// without logging or verbose output.
    pub fn analyze_patient(
        &mut self,
        temp: f64,
        age: i32,
        options: &AnalysisOptions,
    ) -> HealthResult<PatientStatus> {
        if age < 0 {
            return Err(HealthError::invalid("Age cannot be negative"));
        }

        let celsius = self.convert_to_celsius(temp, options.unit)?;

        if options.emergency_mode && celsius < HYPOTHERMIA_THRESHOLD {
            self.last_status = Some(PatientStatus::Hypothermia);
            return Ok(PatientStatus::Hypothermia);
        }

        let threshold = fever_threshold(age);
        let status = classify(celsius, threshold);
        self.last_status = Some(status);

        if options.log {
            // Log failures are reported but never fail the analysis
            if let Err(e) = append_log_line(&options.log_file, celsius, age, status) {
                tracing::error!(
                    "Error opening and writing to log file {}: {}",
                    options.log_file.display(),
                    e
                );
            }
        }

        if options.verbose > 0 {
            tracing::info!("Patient status: {}", status);
        }

        if options.verbose > 2 {
            tracing::info!(
                "Detailed Analysis: Temp={:.2}C (Threshold={})",
                celsius,
                threshold
            );
        }

        Ok(status)
    }

    /// Build a report from the last analysis
    ///
    /// Fails with `NullState` until `analyze_patient` has succeeded once.
    pub fn get_status_report(
        &self,
        include_temp: bool,
        format: ReportFormat,
    ) -> HealthResult<StatusReport> {
        let status = self.last_status.ok_or(HealthError::NullState)?;
        Ok(StatusReport::build(status, self.tmp_cache, include_temp, format))
    }
}

/// Fever threshold for a patient of the given age
pub fn fever_threshold(age: i32) -> f64 {
    if age < BABY_AGE_LIMIT {
        BABY_FEVER_THRESHOLD
    } else {
        HIGH_FEVER_THRESHOLD
    }
}

fn classify(celsius: f64, threshold: f64) -> PatientStatus {
    if celsius > threshold {
        PatientStatus::Fever
    } else if celsius > threshold - ALMOST_FEVER_MARGIN {
        PatientStatus::AlmostFever
    } else {
        PatientStatus::Normal
    }
}

fn append_log_line(path: &Path, celsius: f64, age: i32, status: PatientStatus) -> HealthResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "TEMP={:?}, AGE={}, STATUS={}", celsius, age, status)?;
    Ok(())
}
