//! Output formatters for reports and statistics.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::core::{AnalysisReport, Result, Severity};
use crate::stats::{ComplexityDistribution, TimeSeries, UserMetricsSummary};

/// Anything the CLI prints. JSON comes from `Serialize`; the other formats
/// are written by hand.
pub trait Render: Serialize {
    fn markdown(&self, w: &mut dyn Write) -> Result<()>;
    fn text(&self, w: &mut dyn Write) -> Result<()>;
}

/// Write `data` in the requested format.
pub fn render<T: Render + ?Sized>(format: OutputFormat, data: &T, w: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, data)?;
            writeln!(w)?;
            Ok(())
        }
        OutputFormat::Markdown => data.markdown(w),
        OutputFormat::Text => data.text(w),
    }
}

/// Report for one analyzed input, labelled with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub language: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// Reports for every analyzed input, in argument order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReports(pub Vec<FileReport>);

impl Render for FileReport {
    fn markdown(&self, w: &mut dyn Write) -> Result<()> {
        let r = &self.report;
        writeln!(w, "## {} ({})\n", self.path, self.language)?;
        writeln!(w, "| Metric | Value |")?;
        writeln!(w, "| --- | --- |")?;
        writeln!(w, "| Quality score | {} |", number(r.quality_score))?;
        writeln!(w, "| Complexity | {} |", number(r.complexity))?;
        writeln!(w, "| Maintainability index | {} |", number(r.maintainability_index))?;
        writeln!(w, "| Halstead difficulty | {} |", number(r.halstead_difficulty))?;
        writeln!(w, "| Total lines | {} |", r.total_lines)?;
        writeln!(w, "| Code lines | {} |", r.code_lines)?;
        writeln!(w, "| Comment lines | {} |", r.comment_lines)?;
        writeln!(w)?;

        if r.issues.is_empty() {
            writeln!(w, "_No issues_\n")?;
            return Ok(());
        }
        writeln!(w, "### Issues ({})\n", r.issues_count)?;
        writeln!(w, "| Line | Severity | Message |")?;
        writeln!(w, "| --- | --- | --- |")?;
        for issue in &r.issues {
            writeln!(w, "| {} | {} | {} |", issue.line, issue.severity, issue.message)?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn text(&self, w: &mut dyn Write) -> Result<()> {
        let r = &self.report;
        writeln!(w, "{} [{}]", self.path, self.language)?;
        writeln!(w, "  Quality score:         {}", number(r.quality_score))?;
        writeln!(w, "  Complexity:            {}", number(r.complexity))?;
        writeln!(w, "  Maintainability index: {}", number(r.maintainability_index))?;
        writeln!(w, "  Halstead difficulty:   {}", number(r.halstead_difficulty))?;
        writeln!(
            w,
            "  Lines:                 {} total, {} code, {} comment",
            r.total_lines, r.code_lines, r.comment_lines
        )?;
        writeln!(
            w,
            "  Issues:                {} ({} high, {} medium, {} low)",
            r.issues_count,
            r.count_severity(Severity::High),
            r.count_severity(Severity::Medium),
            r.count_severity(Severity::Low)
        )?;
        for issue in &r.issues {
            writeln!(w, "    {:>5}  {:<6}  {}", issue.line, issue.severity, issue.message)?;
        }
        Ok(())
    }
}

impl Render for FileReports {
    fn markdown(&self, w: &mut dyn Write) -> Result<()> {
        writeln!(w, "# Code Quality Report\n")?;
        if self.0.is_empty() {
            writeln!(w, "_No inputs_")?;
        }
        for file in &self.0 {
            file.markdown(w)?;
        }
        Ok(())
    }

    fn text(&self, w: &mut dyn Write) -> Result<()> {
        for (i, file) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            file.text(w)?;
        }
        Ok(())
    }
}

impl Render for UserMetricsSummary {
    fn markdown(&self, w: &mut dyn Write) -> Result<()> {
        writeln!(w, "# Review Summary\n")?;
        writeln!(w, "**Total reviews**: {}\n", self.total_reviews)?;
        writeln!(w, "**Average quality score**: {}\n", number(self.avg_quality_score))?;
        writeln!(w, "**Total issues**: {}\n", self.total_issues)?;
        writeln!(w, "**Portfolio projects**: {}\n", self.portfolio_projects)?;
        writeln!(w, "**Improvement trend**: {}\n", self.improvement_trend)?;
        writeln!(
            w,
            "**Most used language**: {}\n",
            self.most_used_language.as_deref().unwrap_or("-")
        )?;
        if !self.languages.is_empty() {
            writeln!(w, "## Languages\n")?;
            writeln!(w, "| Language | Reviews |")?;
            writeln!(w, "| --- | --- |")?;
            for (lang, count) in &self.languages {
                writeln!(w, "| {lang} | {count} |")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn text(&self, w: &mut dyn Write) -> Result<()> {
        writeln!(w, "Total reviews:         {}", self.total_reviews)?;
        writeln!(w, "Average quality score: {}", number(self.avg_quality_score))?;
        writeln!(w, "Total issues:          {}", self.total_issues)?;
        writeln!(w, "Portfolio projects:    {}", self.portfolio_projects)?;
        writeln!(w, "Improvement trend:     {}", self.improvement_trend)?;
        writeln!(
            w,
            "Most used language:    {}",
            self.most_used_language.as_deref().unwrap_or("-")
        )?;
        if !self.languages.is_empty() {
            writeln!(w, "Languages:")?;
            for (lang, count) in &self.languages {
                writeln!(w, "  {lang}: {count}")?;
            }
        }
        Ok(())
    }
}

impl Render for TimeSeries {
    fn markdown(&self, w: &mut dyn Write) -> Result<()> {
        writeln!(w, "# Quality Over Time\n")?;
        if self.is_empty() {
            writeln!(w, "_No reviews in window_")?;
            return Ok(());
        }
        writeln!(w, "| Date | Mean score | Reviews | Issues |")?;
        writeln!(w, "| --- | --- | --- | --- |")?;
        for i in 0..self.len() {
            writeln!(
                w,
                "| {} | {} | {} | {} |",
                self.dates[i],
                number(self.scores[i]),
                self.review_counts[i],
                self.issue_counts[i]
            )?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn text(&self, w: &mut dyn Write) -> Result<()> {
        if self.is_empty() {
            writeln!(w, "No reviews in window")?;
            return Ok(());
        }
        for i in 0..self.len() {
            writeln!(
                w,
                "{}  score {:>6}  reviews {:>3}  issues {:>4}",
                self.dates[i],
                number(self.scores[i]),
                self.review_counts[i],
                self.issue_counts[i]
            )?;
        }
        Ok(())
    }
}

impl Render for ComplexityDistribution {
    fn markdown(&self, w: &mut dyn Write) -> Result<()> {
        writeln!(w, "# Complexity Distribution\n")?;
        writeln!(w, "| Bucket | Reviews |")?;
        writeln!(w, "| --- | --- |")?;
        for (label, count) in self.buckets() {
            writeln!(w, "| {label} | {count} |")?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn text(&self, w: &mut dyn Write) -> Result<()> {
        for (label, count) in self.buckets() {
            writeln!(w, "{label:<17} {count}")?;
        }
        Ok(())
    }
}

impl ComplexityDistribution {
    fn buckets(&self) -> [(&'static str, usize); 4] {
        [
            ("low (<5)", self.low),
            ("medium (5-10)", self.medium),
            ("high (10-15)", self.high),
            ("very high (>=15)", self.very_high),
        ]
    }
}

/// Whole numbers without a fraction, everything else to 2 places.
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
