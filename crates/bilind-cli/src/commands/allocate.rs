use bilind_config::BilindConfig;
use bilind_core::responses::AllocateResponse;
use bilind_engine::allocate_with;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AllocateArgs;
use crate::commands::shared::parse::{number, numbers};
use crate::output::output;

/// Handle `bilind allocate`.
pub fn handle(
    args: &AllocateArgs,
    config: &BilindConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = run(args, config.tolerance.epsilon);
    output(&response, flags.format)
}

fn run(args: &AllocateArgs, epsilon: f64) -> AllocateResponse {
    let total = number(&args.total);
    let weights = numbers(&args.weights);
    let caps = numbers(&args.caps);
    let allocation = allocate_with(total, &weights, &caps, epsilon);
    AllocateResponse {
        total,
        allocations: allocation.amounts,
        unallocated: allocation.unallocated,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(total: &str, weights: &[&str], caps: &[&str]) -> AllocateArgs {
        AllocateArgs {
            total: total.to_string(),
            weights: weights.iter().map(ToString::to_string).collect(),
            caps: caps.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn zero_weights_split_uniformly() {
        let response = run(&args("10", &["0", "0"], &["5", "11"]), 1e-9);
        assert_eq!(response.allocations, vec![5.0, 5.0]);
        assert_eq!(response.unallocated, 0.0);
    }

    #[test]
    fn comma_decimals_and_overflow() {
        let response = run(&args("7,5", &["1", "1"], &["2", "3"]), 1e-9);
        assert_eq!(response.total, 7.5);
        assert_eq!(response.allocations, vec![2.0, 3.0]);
        assert!((response.unallocated - 2.5).abs() < 1e-9);
    }
}
