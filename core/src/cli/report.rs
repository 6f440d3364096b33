use crate::agreement::round2;
use crate::api::AgreementReport;
use std::fmt;

/// Text report formatter for an agreement analysis
pub struct TextReport<'a> {
    report: &'a AgreementReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a AgreementReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.report.stats;
        let (mean_min, mean_max) = stats.mean_range();

        writeln!(f, "Bland-Altman Agreement")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "View:           {}", self.report.title)?;
        writeln!(f, "Key:            {}", self.report.view)?;
        writeln!(f, "Samples:        {}", stats.n)?;
        writeln!(f, "Bias:           {:.2}", round2(stats.bias))?;
        writeln!(f, "SD of diff:     {:.2}", round2(stats.sd))?;
        writeln!(
            f,
            "Limits:         [{:.2}, {:.2}]",
            round2(stats.lower_limit),
            round2(stats.upper_limit)
        )?;
        writeln!(f)?;

        writeln!(f, "Axis Diagnostics")?;
        writeln!(f, "----------------")?;
        writeln!(f, "Min mean:       {:.2}", mean_min)?;
        writeln!(f, "Max mean:       {:.2}", mean_max)?;
        writeln!(f, "Max diff:       {:.2}", stats.max_diff())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agreement::{AgreementStats, PairedSamples};
    use crate::types::ViewKey;

    #[test]
    fn test_text_report_format() {
        let pairs = PairedSamples {
            predicted: vec![52.0, 48.0],
            reference: vec![50.0, 50.0],
        };
        let key = ViewKey::parse("plax_ef").unwrap();
        let report = AgreementReport {
            view: key.clone(),
            title: key.title().to_string(),
            stats: AgreementStats::from_pairs(&pairs).unwrap(),
        };

        let output = format!("{}", TextReport::new(&report));

        assert!(output.contains("Bland-Altman Agreement"));
        assert!(output.contains("View:           PLAX only"));
        assert!(output.contains("Key:            plax_ef"));
        assert!(output.contains("Samples:        2"));
        assert!(output.contains("Bias:           0.00"));
        assert!(output.contains("SD of diff:     2.00"));
        assert!(output.contains("Limits:         [-3.92, 3.92]"));
        assert!(output.contains("Max diff:       2.00"));
    }
}
