////////////////////////////////////////////////////////////////////////////////

/// Returns the arithmetic mean of the sample, or NaN when it is empty.
pub fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Returns the sample standard deviation (divisor `len - 1`), or NaN when
/// the sample holds fewer than two values.
pub fn stddev(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(sample);
    let variance =
        sample.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (sample.len() - 1) as f64;
    variance.sqrt()
}
