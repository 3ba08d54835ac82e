//! Status report model

use serde::{Deserialize, Serialize};

use super::analyzer::PatientStatus;

/// Output format for a status report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// "Current status: FEVER"
    #[default]
    Long,
    /// Two letter status code, e.g. "FE"
    Code,
}

/// Snapshot of the analyzer's last result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub raw_status: PatientStatus,
    pub format_used: ReportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_celsius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl StatusReport {
    /// Build a report, either carrying the cached temperature or a display text
    pub fn build(
        status: PatientStatus,
        cached_celsius: Option<f64>,
        include_temp: bool,
        format: ReportFormat,
    ) -> Self {
        let mut report = Self {
            raw_status: status,
            format_used: format,
            temp_celsius: None,
            display_text: None,
        };

        if include_temp {
            report.temp_celsius = cached_celsius;
        } else {
            report.display_text = Some(match format {
                ReportFormat::Code => status.as_str().chars().take(2).collect(),
                ReportFormat::Long => format!("Current status: {}", status),
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_format() {
        let report = StatusReport::build(PatientStatus::Fever, Some(40.0), false, ReportFormat::Long);
        assert_eq!(report.display_text.as_deref(), Some("Current status: FEVER"));
        assert_eq!(report.temp_celsius, None);
    }

    #[test]
    fn test_code_format() {
        let report =
            StatusReport::build(PatientStatus::AlmostFever, None, false, ReportFormat::Code);
        assert_eq!(report.display_text.as_deref(), Some("AL"));
    }

    #[test]
    fn test_include_temp_skips_display_text() {
        let report = StatusReport::build(PatientStatus::Normal, Some(36.6), true, ReportFormat::Code);
        assert_eq!(report.temp_celsius, Some(36.6));
        assert_eq!(report.display_text, None);
        assert_eq!(report.format_used, ReportFormat::Code);
    }

    #[test]
    fn test_serialized_shape() {
        let report = StatusReport::build(PatientStatus::Hypothermia, None, false, ReportFormat::Code);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["raw_status"], "HYPOTHERMIA?");
        assert_eq!(json["format_used"], "code");
        assert_eq!(json["display_text"], "HY");
        assert!(json.get("temp_celsius").is_none());
    }
}
