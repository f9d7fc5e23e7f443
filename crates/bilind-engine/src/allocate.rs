//! Capped proportional allocation (water-filling).
//!
//! Distributes a scalar across weighted buckets without letting any bucket
//! exceed its capacity. Whatever cannot be placed is reported back as
//! `unallocated`; the allocator never invents capacity.

/// Convergence tolerance used when callers do not pass their own.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Result of one allocation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    /// One amount per bucket, in input order.
    pub amounts: Vec<f64>,
    /// Portion of the total that did not fit.
    pub unallocated: f64,
}

impl Allocation {
    #[must_use]
    pub fn placed(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

/// Allocate `total` over `caps.len()` buckets, proportionally to `weights`.
#[must_use]
pub fn allocate(total: f64, weights: &[f64], caps: &[f64]) -> Allocation {
    allocate_with(total, weights, caps, DEFAULT_EPSILON)
}

/// [`allocate`] with an explicit convergence tolerance.
///
/// Negative or non-finite inputs are treated as zero. Missing weights (when
/// `weights` is shorter than `caps`) count as zero; extra weights are ignored.
///
/// Each pass offers the remaining amount to the open buckets in proportion to
/// their weights. If no bucket would overflow, the shares are committed and the
/// run ends. Otherwise only the overflowing buckets are filled to capacity and
/// closed, and the smaller remainder is offered again to the rest. Every pass
/// either finishes or closes at least one bucket.
#[must_use]
pub fn allocate_with(total: f64, weights: &[f64], caps: &[f64], epsilon: f64) -> Allocation {
    let mut caps_left: Vec<f64> = caps.iter().map(|c| non_negative(*c)).collect();
    let mut weights: Vec<f64> = (0..caps_left.len())
        .map(|i| weights.get(i).copied().map_or(0.0, non_negative))
        .collect();
    let mut amounts = vec![0.0; caps_left.len()];
    let mut remaining = non_negative(total);
    let mut active: Vec<usize> = (0..caps_left.len()).filter(|&i| caps_left[i] > 0.0).collect();

    while remaining > epsilon && !active.is_empty() {
        let mut weight_sum: f64 = active.iter().map(|&i| weights[i]).sum();
        if weight_sum <= epsilon {
            for &i in &active {
                weights[i] = 1.0;
            }
            #[allow(clippy::cast_precision_loss)]
            let open = active.len() as f64;
            weight_sum = open;
        }

        let saturated: Vec<usize> = active
            .iter()
            .copied()
            .filter(|&i| remaining * weights[i] / weight_sum > caps_left[i] + epsilon)
            .collect();

        if saturated.is_empty() {
            for &i in &active {
                let share = remaining * weights[i] / weight_sum;
                amounts[i] += share;
                caps_left[i] -= share;
            }
            remaining = 0.0;
            break;
        }

        for &i in &saturated {
            amounts[i] += caps_left[i];
            remaining -= caps_left[i];
            caps_left[i] = 0.0;
        }
        active.retain(|&i| caps_left[i] > epsilon);
    }

    Allocation {
        amounts,
        unallocated: remaining.max(0.0),
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TOL: f64 = 1e-6;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOL, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn single_pass_is_proportional() {
        let result = allocate(6.0, &[1.0, 2.0], &[10.0, 10.0]);
        assert_close(&result.amounts, &[2.0, 4.0]);
        assert!(result.unallocated.abs() < TOL);
    }

    #[test]
    fn saturated_excess_flows_to_open_buckets() {
        let result = allocate(10.0, &[1.0, 1.0], &[2.0, 100.0]);
        assert_close(&result.amounts, &[2.0, 8.0]);
        assert!((result.placed() - 10.0).abs() < TOL);
    }

    #[test]
    fn zero_weights_fall_back_to_uniform() {
        let result = allocate(10.0, &[0.0, 0.0], &[5.0, 20.0]);
        assert_close(&result.amounts, &[5.0, 5.0]);
        assert!(result.unallocated.abs() < TOL);

        let uneven = allocate(16.0, &[0.0, 0.0], &[5.0, 20.0]);
        assert_close(&uneven.amounts, &[5.0, 11.0]);
    }

    #[test]
    fn insufficient_capacity_reports_leftover() {
        let result = allocate(30.0, &[3.0, 1.0, 0.0], &[4.0, 6.0, 5.0]);
        assert_close(&result.amounts, &[4.0, 6.0, 5.0]);
        assert!((result.unallocated - 15.0).abs() < TOL);
    }

    #[test]
    fn zero_cap_buckets_receive_nothing() {
        let result = allocate(4.0, &[5.0, 1.0], &[0.0, 10.0]);
        assert_close(&result.amounts, &[0.0, 4.0]);
    }

    #[test]
    fn negative_and_missing_inputs_are_clamped() {
        let result = allocate(-3.0, &[1.0], &[2.0]);
        assert_close(&result.amounts, &[0.0]);
        assert!(result.unallocated.abs() < TOL);

        let short_weights = allocate(3.0, &[1.0], &[-2.0, 4.0, 4.0]);
        assert_close(&short_weights.amounts, &[0.0, 1.5, 1.5]);

        let empty = allocate(5.0, &[], &[]);
        assert!(empty.amounts.is_empty());
        assert!((empty.unallocated - 5.0).abs() < TOL);
    }

    #[rstest]
    #[case(12.0, &[4.0, 6.0, 0.5], &[12.0, 18.0, 1.5])]
    #[case(30.0, &[4.0, 6.0, 0.5], &[12.0, 18.0, 1.5])]
    #[case(31.5, &[1.0, 1.0, 1.0], &[12.0, 18.0, 1.5])]
    #[case(7.25, &[0.0, 2.0, 9.0], &[1.0, 1.0, 8.0])]
    #[case(0.0, &[1.0, 2.0], &[3.0, 4.0])]
    fn conserves_total_within_capacity(
        #[case] total: f64,
        #[case] weights: &[f64],
        #[case] caps: &[f64],
    ) {
        let result = allocate(total, weights, caps);
        assert!(result.unallocated.abs() < TOL);
        assert!((result.placed() - total).abs() < TOL);
        for (amount, cap) in result.amounts.iter().zip(caps) {
            assert!(*amount <= cap + TOL);
            assert!(*amount >= 0.0);
        }
    }

    #[rstest]
    #[case(40.0, &[4.0, 6.0, 0.5], &[12.0, 18.0, 1.5])]
    #[case(3.0, &[0.0, 0.0], &[1.0, 1.0])]
    fn fills_every_bucket_when_short(
        #[case] total: f64,
        #[case] weights: &[f64],
        #[case] caps: &[f64],
    ) {
        let result = allocate(total, weights, caps);
        let capacity: f64 = caps.iter().sum();
        assert_close(&result.amounts, caps);
        assert!((result.unallocated - (total - capacity)).abs() < TOL);
    }
}
