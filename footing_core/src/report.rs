//! # Design Reports
//!
//! A `DesignReport` bundles the input, the results and who ran them. It renders
//! as a plain-text summary for the terminal or as pretty JSON for storage.
//!
//! ## Structure
//!
//! ```text
//! DesignReport
//! ├── meta: ReportMetadata (id, engineer, job, timestamp)
//! ├── input: FootingInput
//! └── design: FootingDesign
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::footing::{FootingDesign, FootingInput};
use crate::errors::CalcResult;

/// Current schema version for saved reports
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Who ran the design, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report schema version
    pub version: String,

    /// Unique report identifier
    pub id: Uuid,

    /// Responsible engineer
    pub engineer: String,

    /// Job/project number (e.g., "25-001")
    pub job_id: String,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,
}

/// A completed footing design ready to be printed or saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub meta: ReportMetadata,
    pub input: FootingInput,
    pub design: FootingDesign,
}

impl DesignReport {
    /// Wrap a design with fresh metadata.
    ///
    /// # Example
    ///
    /// ```rust
    /// use footing_core::calculations::{calculate, FootingInput};
    /// use footing_core::report::DesignReport;
    ///
    /// let input = FootingInput::default();
    /// let design = calculate(&input).unwrap();
    /// let report = DesignReport::new("Jane Engineer", "25-042", input, design);
    /// assert!(report.render_text().contains("Z-1"));
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        input: FootingInput,
        design: FootingDesign,
    ) -> Self {
        DesignReport {
            meta: ReportMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                created: Utc::now(),
            },
            input,
            design,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text summary, values to two decimals
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DesignReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.design;

        writeln!(f, "SPREAD FOOTING DESIGN  {}", self.input.label)?;
        writeln!(
            f,
            "Engineer: {}  Job: {}  Date: {}",
            self.meta.engineer,
            self.meta.job_id,
            self.meta.created.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(f)?;

        writeln!(f, "SERVICE (ASD)")?;
        writeln!(f, "  P  = {:.2} kgf", d.sizing.service_load_kgf)?;
        writeln!(f, "  M  = {:.2} kgf·cm", d.sizing.service_moment_kgf_cm)?;
        writeln!(f, "  q  = {:.2} kgf/cm²", d.sizing.overburden_pressure)?;
        writeln!(f, "  qn = {:.2} kgf/cm²", d.sizing.net_allowable_pressure)?;
        writeln!(f, "  L (raw) = {:.2} cm", d.sizing.raw_side_length_cm)?;
        writeln!(f, "  B x L   = {:.2} x {:.2} cm", d.sizing.width_cm, d.sizing.length_cm)?;
        writeln!(
            f,
            "  q1 = {:.2} kgf/cm²   q2 = {:.2} kgf/cm²",
            d.sizing.min_edge_pressure, d.sizing.max_edge_pressure
        )?;
        writeln!(f)?;

        writeln!(f, "ULTIMATE (USD)")?;
        writeln!(f, "  Pu = {:.2} kgf", d.ultimate.factored_load_kgf)?;
        writeln!(f, "  Mu = {:.2} kgf·cm", d.ultimate.factored_moment_kgf_cm)?;
        writeln!(
            f,
            "  qu1 = {:.2} kgf/cm²   qu2 = {:.2} kgf/cm²",
            d.ultimate.min_factored_pressure, d.ultimate.max_factored_pressure
        )?;
        writeln!(f)?;

        writeln!(f, "ONE-WAY SHEAR")?;
        writeln!(f, "  d (raw) = {:.2} cm", d.shear.raw_effective_depth_cm)?;
        writeln!(f, "  h = {:.2} cm   d = {:.2} cm", d.shear.thickness_cm, d.shear.effective_depth_cm)?;
        writeln!(f, "  qu3 = {:.2} kgf/cm²", d.shear.critical_pressure)?;
        writeln!(
            f,
            "  Vu = {:.2} kgf   φVc = {:.2} kgf",
            d.shear.factored_shear_kgf, d.shear.shear_capacity_kgf
        )?;
        writeln!(f, "  bo = {:.2} cm", d.shear.punching_perimeter_cm)?;
        writeln!(f)?;

        writeln!(f, "FLEXURE")?;
        writeln!(f, "  qu6 = {:.2} kgf/cm²", d.flexure.section_pressure)?;
        writeln!(f, "  Mu  = {:.2} kgf·cm", d.flexure.factored_moment_kgf_cm)?;
        writeln!(f, "  y   = {:.2} cm", d.flexure.compression_depth_cm)?;
        writeln!(f, "  Nc  = {:.2} kgf", d.flexure.compressive_force_kgf)?;
        writeln!(f, "  As  = {:.2} cm²", d.flexure.required_steel_area_cm2)?;
        writeln!(f)?;

        writeln!(f, "BAR SPACING")?;
        writeln!(f, "  {:<6}{:>10}{:>12}{:>12}", "Bar", "Ab (cm²)", "s (cm)", "adopted")?;
        for row in &d.bar_spacing {
            writeln!(
                f,
                "  {:<6}{:>10.2}{:>12.2}{:>12.2}",
                row.bar.display_name(),
                row.area_cm2,
                row.theoretical_spacing_cm,
                row.adopted_spacing_cm
            )?;
        }

        if !d.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "WARNINGS")?;
            for warning in &d.warnings {
                writeln!(f, "  - {}", warning)?;
            }
        }

        Ok(())
    }
}
