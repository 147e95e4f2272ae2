//! Maintainability index.
//!
//! SEI formula with the comment term, rescaled to 0-100:
//!
//! MI = max(0, (171 - 5.2 * ln(V) - 0.23 * CC - 16.2 * ln(SLOC)
//!      + 50 * sin(sqrt(2.46 * rad(CM)))) * 100 / 171)
//!
//! where V is the Halstead volume, CC the total cyclomatic complexity, SLOC
//! the source lines and CM the comment percentage.

/// Inputs to the maintainability index.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaintainabilityInputs {
    /// Halstead volume of the unit.
    pub halstead_volume: f64,
    /// Total cyclomatic complexity over all functions.
    pub total_cyclomatic: f64,
    /// Source lines (code, without docstrings).
    pub sloc: usize,
    /// Comment percentage relative to `sloc` (may exceed 100).
    pub comment_percent: f64,
}

impl MaintainabilityInputs {
    /// Build inputs from line counts.
    ///
    /// Docstring lines are moved from code to comments: they count toward
    /// the comment percentage but not toward SLOC.
    pub fn from_lines(
        halstead_volume: f64,
        total_cyclomatic: f64,
        code_lines: usize,
        comment_lines: usize,
        docstring_lines: usize,
    ) -> Self {
        let sloc = code_lines.saturating_sub(docstring_lines);
        let comment_percent = if sloc > 0 {
            (comment_lines + docstring_lines) as f64 / sloc as f64 * 100.0
        } else {
            0.0
        };
        Self {
            halstead_volume,
            total_cyclomatic,
            sloc,
            comment_percent,
        }
    }
}

/// Compute the maintainability index.
///
/// Units with no volume or no source lines are trivially maintainable and
/// score 100.
pub fn compute_maintainability_index(inputs: &MaintainabilityInputs) -> f64 {
    if inputs.halstead_volume <= 0.0 || inputs.sloc == 0 {
        return 100.0;
    }

    let volume_scale = inputs.halstead_volume.ln();
    let sloc_scale = (inputs.sloc as f64).ln();
    let comments_scale = (2.46 * inputs.comment_percent.to_radians()).sqrt();

    let raw = 171.0 - 5.2 * volume_scale - 0.23 * inputs.total_cyclomatic - 16.2 * sloc_scale
        + 50.0 * comments_scale.sin();

    (raw * 100.0 / 171.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_units_score_full() {
        assert_eq!(
            compute_maintainability_index(&MaintainabilityInputs::default()),
            100.0
        );
        let no_lines = MaintainabilityInputs {
            halstead_volume: 40.0,
            ..Default::default()
        };
        assert_eq!(compute_maintainability_index(&no_lines), 100.0);
    }

    #[test]
    fn test_without_comments() {
        let inputs = MaintainabilityInputs::from_lines(100.0, 3.0, 20, 0, 0);
        let expected = (171.0 - 5.2 * 100f64.ln() - 0.23 * 3.0 - 16.2 * 20f64.ln()) * 100.0 / 171.0;
        assert!((compute_maintainability_index(&inputs) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_comments_raise_the_index() {
        let bare = MaintainabilityInputs::from_lines(500.0, 8.0, 40, 0, 0);
        let commented = MaintainabilityInputs::from_lines(500.0, 8.0, 40, 6, 0);
        assert!(compute_maintainability_index(&commented) > compute_maintainability_index(&bare));
    }

    #[test]
    fn test_large_units_clamp_to_zero() {
        let inputs = MaintainabilityInputs::from_lines(1e12, 400.0, 100_000, 0, 0);
        assert_eq!(compute_maintainability_index(&inputs), 0.0);
    }

    #[test]
    fn test_docstrings_move_to_comments() {
        let inputs = MaintainabilityInputs::from_lines(50.0, 1.0, 10, 1, 4);
        assert_eq!(inputs.sloc, 6);
        assert!((inputs.comment_percent - 500.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_index_stays_in_range() {
        for volume in [1.0, 10.0, 1_000.0, 100_000.0] {
            for sloc in [1, 10, 1_000] {
                let inputs = MaintainabilityInputs::from_lines(volume, 5.0, sloc, sloc / 3, 0);
                let mi = compute_maintainability_index(&inputs);
                assert!((0.0..=100.0).contains(&mi), "mi {mi} out of range");
            }
        }
    }
}
