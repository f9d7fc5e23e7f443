use bilind_core::numeric::to_float;

/// Read a command-line number through the lenient numeric normalizer.
pub fn number(value: &str) -> f64 {
    to_float(value, 0.0)
}

/// Read a list of command-line numbers; unparseable entries count as zero.
pub fn numbers(values: &[String]) -> Vec<f64> {
    values.iter().map(|value| number(value)).collect()
}
