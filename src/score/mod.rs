//! Quality score: one bounded 0-100 number per report.

/// Complexity above which each extra point costs score.
const COMPLEXITY_ALLOWANCE: f64 = 10.0;
/// Score lost per point of complexity above the allowance.
const COMPLEXITY_PENALTY: f64 = 2.0;
/// Score lost per issue when structural metrics are available.
const ISSUE_PENALTY: f64 = 3.0;
/// Score lost per issue on the heuristic path.
const GENERIC_ISSUE_PENALTY: f64 = 5.0;
/// Bonus for a comment ratio inside [`COMMENT_RATIO_BAND`].
const COMMENT_BONUS: f64 = 5.0;
/// Comment ratios rewarded with [`COMMENT_BONUS`], inclusive.
const COMMENT_RATIO_BAND: (f64, f64) = (0.05, 0.20);

/// Score a unit with structural metrics.
///
/// Starts from the maintainability index, charges complexity above 10 and
/// every issue, rewards moderate commenting, then clamps to `[0, 100]`.
pub fn quality_score(
    maintainability_index: f64,
    complexity: f64,
    issues_count: usize,
    comment_ratio: f64,
) -> f64 {
    let mut score = maintainability_index;

    if complexity > COMPLEXITY_ALLOWANCE {
        score -= (complexity - COMPLEXITY_ALLOWANCE) * COMPLEXITY_PENALTY;
    }

    score -= issues_count as f64 * ISSUE_PENALTY;

    let (low, high) = COMMENT_RATIO_BAND;
    if (low..=high).contains(&comment_ratio) {
        score += COMMENT_BONUS;
    }

    score.clamp(0.0, 100.0)
}

/// Score a unit analyzed without structural metrics.
pub fn generic_score(issues_count: usize) -> f64 {
    (100.0 - issues_count as f64 * GENERIC_ISSUE_PENALTY).max(0.0)
}

/// Comment lines over total lines, 0 for an empty unit.
pub fn comment_ratio(comment_lines: usize, total_lines: usize) -> f64 {
    if total_lines == 0 {
        0.0
    } else {
        comment_lines as f64 / total_lines as f64
    }
}
