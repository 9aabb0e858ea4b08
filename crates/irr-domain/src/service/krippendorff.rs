//! Krippendorff's alpha over the item x label rating matrix
//!
//! Nominal alpha in Gwet's formulation. Each cell r_ik counts how many
//! raters applied label k to item i. Multi-label items are handled by
//! counting every label application as a rating, so r_i is the number of
//! label applications on item i rather than the number of raters.
//!
//! Only items carrying at least two ratings take part (n' of them):
//!
//! ```text
//! r̄    = mean r_i over those items
//! p'_a = (1/n') Σ_i Σ_k r_ik (r_ik - 1) / (r̄ (r_i - 1))
//! p_a  = p'_a (1 - 1/(n' r̄)) + 1/(n' r̄)
//! π_k  = Σ_i r_ik / Σ_i r_i
//! p_e  = Σ_k π_k²
//! α    = (p_a - p_e) / (1 - p_e)
//! ```

use crate::service::agreement::Coefficient;

/// Compute alpha from rating counts (rows = items, columns = labels)
pub fn krippendorff_alpha(ratings: &[Vec<u8>]) -> Coefficient {
    let rated: Vec<(&Vec<u8>, u64)> = ratings
        .iter()
        .map(|row| (row, row.iter().map(|&r| r as u64).sum::<u64>()))
        .filter(|(_, r_i)| *r_i >= 2)
        .collect();

    if rated.is_empty() {
        return Coefficient::Undefined;
    }

    let columns = rated.iter().map(|(row, _)| row.len()).max().unwrap_or(0);
    let mut column_totals = vec![0u64; columns];
    let mut total_ratings = 0u64;
    for (row, r_i) in &rated {
        for (k, &r_ik) in row.iter().enumerate() {
            column_totals[k] += r_ik as u64;
        }
        total_ratings += r_i;
    }

    // A single label carries every rating: chance agreement is certain
    if column_totals.iter().filter(|&&t| t > 0).count() <= 1 {
        return Coefficient::Undefined;
    }

    let n = rated.len() as f64;
    let r_bar = total_ratings as f64 / n;

    let p_prime_a = rated
        .iter()
        .map(|(row, r_i)| {
            let pairs: u64 = row
                .iter()
                .map(|&r| r as u64 * (r as u64).saturating_sub(1))
                .sum();
            pairs as f64 / (r_bar * (*r_i - 1) as f64)
        })
        .sum::<f64>()
        / n;

    let epsilon = 1.0 / (n * r_bar);
    let p_a = p_prime_a * (1.0 - epsilon) + epsilon;

    let p_e: f64 = column_totals
        .iter()
        .map(|&t| {
            let pi_k = t as f64 / total_ratings as f64;
            pi_k * pi_k
        })
        .sum();

    Coefficient::Defined((p_a - p_e) / (1.0 - p_e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_perfect_single_label_agreement() {
        let alpha = krippendorff_alpha(&[vec![2, 0], vec![0, 2]]);
        assert!(approx_eq(alpha.value().unwrap(), 1.0));
    }

    #[test]
    fn test_total_disagreement() {
        // Each item: one rater said x, the other y
        let alpha = krippendorff_alpha(&[vec![1, 1], vec![1, 1]]);
        // p'_a = 0, p_a = 1/4, p_e = 1/2
        assert!(approx_eq(alpha.value().unwrap(), -0.5));
    }

    #[test]
    fn test_items_with_single_rating_are_skipped() {
        let with_sparse = krippendorff_alpha(&[vec![2, 0], vec![0, 2], vec![1, 0], vec![0, 0]]);
        let without = krippendorff_alpha(&[vec![2, 0], vec![0, 2]]);
        assert_eq!(with_sparse, without);
    }

    #[test]
    fn test_mixed_table() {
        // Rows: [2,0,0], [1,1,0], [0,2,1]
        // r_i = 2, 2, 3; r̄ = 7/3; n' = 3
        // p'_a = (2/(r̄·1) + 0 + 2/(r̄·2)) / 3 = (6/7 + 3/7) / 3 = 3/7
        // ε = 1/7; p_a = 3/7 · 6/7 + 1/7 = 25/49
        // π = 3/7, 3/7, 1/7; p_e = 19/49
        // α = (25/49 - 19/49) / (30/49) = 1/5
        let alpha = krippendorff_alpha(&[vec![2, 0, 0], vec![1, 1, 0], vec![0, 2, 1]]);
        assert!(approx_eq(alpha.value().unwrap(), 0.2));
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(krippendorff_alpha(&[]), Coefficient::Undefined);
        assert_eq!(
            krippendorff_alpha(&[vec![1, 0], vec![0, 1]]),
            Coefficient::Undefined
        );
        // Only one label ever used
        assert_eq!(
            krippendorff_alpha(&[vec![2, 0], vec![2, 0]]),
            Coefficient::Undefined
        );
    }
}
