//! Additive Gaussian noise injection
//! Location: src/synth/noise.rs

use crate::config::constants::synthesis;
use crate::error::{SynthResult, SynthesisError};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Add independent per-sample Gaussian noise to a signal.
///
/// Each sample receives `epsilon * N(0, NOISE_SIGMA)` with no cross-sample
/// correlation. How `epsilon` is derived is the caller's business (the
/// composer ties it to the template amplitude); this function only requires
/// a non-negative finite scalar.
///
/// At `epsilon == 0` the input is returned unchanged and no draws are
/// consumed, so a silent signal stays bit-for-bit silent.
pub fn inject<R: Rng + ?Sized>(signal: &[f64], epsilon: f64, rng: &mut R) -> SynthResult<Vec<f64>> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(SynthesisError::invalid_parameter(
            "epsilon",
            format!("noise intensity {} must be finite and non-negative", epsilon),
        ));
    }

    if epsilon == 0.0 {
        return Ok(signal.to_vec());
    }

    let normal = Normal::new(0.0, synthesis::NOISE_SIGMA).map_err(|_| {
        SynthesisError::invalid_parameter("noise_sigma", "must be finite and non-negative")
    })?;

    Ok(signal
        .iter()
        .map(|&sample| sample + epsilon * normal.sample(rng))
        .collect())
}
