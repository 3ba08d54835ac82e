//! Crate identity shown by the demo binary

use serde::Serialize;

/// Name, version and summary of this toolkit, as declared in Cargo.toml
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolkitInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub summary: &'static str,
}

impl ToolkitInfo {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            summary: env!("CARGO_PKG_DESCRIPTION"),
        }
    }

    /// One-line banner, e.g. "vitals 1.0.0 | Vitals Toolkit - ..."
    pub fn banner(&self) -> String {
        format!("{} {} | {}", self.name, self.version, self.summary)
    }
}

/// Write the banner to stderr so stdout only carries results
pub fn print_startup_banner() {
    eprintln!("{}", ToolkitInfo::current().banner());
}
