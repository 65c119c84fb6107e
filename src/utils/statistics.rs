//! Grade statistics

use crate::models::Statistics;

/// Summarize a set of grades. An empty set yields all-zero statistics.
pub fn summarize(grades: &[f64]) -> Statistics {
    if grades.is_empty() {
        return Statistics::default();
    }

    let count = grades.len() as f64;
    let average = grades.iter().sum::<f64>() / count;

    let mut sorted = grades.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    // Population standard deviation
    let variance = grades
        .iter()
        .map(|grade| (grade - average).powi(2))
        .sum::<f64>()
        / count;

    Statistics {
        average,
        median,
        standard_deviation: variance.sqrt(),
    }
}
