//! Summary statistics of an energy trace.

/// Statistics of a Markov-chain energy trace.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStatistics {
    /// Mean energy over the trace
    pub mean: f64,
    /// Lowest energy visited
    pub minimum: f64,
    /// Integrated autocorrelation time, in steps
    pub autocorrelation_time: f64,
    /// Blocking estimate of the standard error of the mean
    pub error: f64,
}

impl TraceStatistics {
    /// Compute statistics for `energies`; an empty trace gives all zeros.
    pub fn from_trace(energies: &[f64]) -> Self {
        if energies.is_empty() {
            return Self::default();
        }
        let mean = energies.iter().sum::<f64>() / energies.len() as f64;
        let minimum = energies.iter().copied().fold(f64::INFINITY, f64::min);
        let autocorrelation_time = autocorrelation_time(energies, mean);
        let error = blocking_error(energies, autocorrelation_time);
        Self {
            mean,
            minimum,
            autocorrelation_time,
            error,
        }
    }
}

/// Integrated autocorrelation time `1 + 2 Σ ρ(lag)`, summing normalised
/// autocorrelations over lags below `n / 2` until the first negative one.
/// A constant trace has τ = 1.
fn autocorrelation_time(energies: &[f64], mean: f64) -> f64 {
    let deviations: Vec<f64> = energies.iter().map(|e| e - mean).collect();
    let n = deviations.len();
    let lag_product = |lag: usize| -> f64 {
        deviations[lag..]
            .iter()
            .zip(&deviations)
            .map(|(later, earlier)| later * earlier)
            .sum()
    };

    let c0 = lag_product(0) / n as f64;
    if c0 == 0.0 {
        return 1.0;
    }
    let correlations = (1..n / 2).map(|lag| lag_product(lag) / ((n - lag) as f64 * c0));
    1.0 + 2.0 * correlations.take_while(|&rho| rho >= 0.0).sum::<f64>()
}

/// Standard error from block means, block size `ceil(2τ)`.
fn blocking_error(energies: &[f64], autocorrelation_time: f64) -> f64 {
    let block_size = ((2.0 * autocorrelation_time).ceil() as usize).max(1);
    let n_blocks = energies.len() / block_size;

    if n_blocks < 2 {
        return 0.0;
    }

    let block_means: Vec<f64> = energies
        .chunks_exact(block_size)
        .map(|block| block.iter().sum::<f64>() / block_size as f64)
        .collect();

    let mean = block_means.iter().sum::<f64>() / n_blocks as f64;
    let variance = block_means
        .iter()
        .map(|&x| (x - mean).powi(2))
        .sum::<f64>()
        / (n_blocks - 1) as f64;

    (variance / n_blocks as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_trace() {
        assert_eq!(TraceStatistics::from_trace(&[]), TraceStatistics::default());
    }

    #[test]
    fn test_constant_trace() {
        let stats = TraceStatistics::from_trace(&[-3.0; 50]);
        assert_relative_eq!(stats.mean, -3.0);
        assert_relative_eq!(stats.minimum, -3.0);
        assert_relative_eq!(stats.autocorrelation_time, 1.0);
        assert_relative_eq!(stats.error, 0.0);
    }

    #[test]
    fn test_alternating_trace() {
        let trace: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let stats = TraceStatistics::from_trace(&trace);
        assert_relative_eq!(stats.mean, 0.0);
        assert_relative_eq!(stats.minimum, -1.0);
        // lag-1 correlation is negative, so no lags are added
        assert_relative_eq!(stats.autocorrelation_time, 1.0);
        // blocks of two average to exactly zero
        assert_relative_eq!(stats.error, 0.0);
    }

    #[test]
    fn test_autocorrelation_stops_at_first_negative_lag() {
        // lag 1: (1 - 1 + 1 - 1 + 1 - 1 + 1) / 7, lag 2 is negative
        let trace = [1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0];
        let stats = TraceStatistics::from_trace(&trace);
        assert_relative_eq!(stats.autocorrelation_time, 1.0 + 2.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlated_trace_has_longer_time() {
        let trace: Vec<f64> = (0..200).map(|i| if (i / 20) % 2 == 0 { 1.0 } else { 0.0 }).collect();
        let stats = TraceStatistics::from_trace(&trace);
        assert!(stats.autocorrelation_time > 5.0);
        assert!(stats.error > 0.0);
    }
}
