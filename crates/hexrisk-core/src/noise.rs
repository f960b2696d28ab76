//! Deterministic procedural noise over geographic coordinates.
//!
//! Value noise on an integer lattice, keyed by a 32-bit hash of the lattice
//! point, so every sample is a pure function of (seed, x, y) with no global
//! random state and no permutation tables. `Fbm` stacks octaves on top: each
//! octave halves amplitude and doubles frequency, and the sum is normalized
//! back into [0, 1] by the amplitude total.

use xxhash_rust::xxh32::xxh32;

/// Hash a lattice point into [0, 1].
fn lattice_value(seed: u32, xi: i64, yi: i64) -> f64 {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&xi.to_le_bytes());
    bytes[8..].copy_from_slice(&yi.to_le_bytes());
    f64::from(xxh32(&bytes, seed)) / f64::from(u32::MAX)
}

/// Hermite smoothstep for interpolation weights.
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Single-octave value noise keyed by `seed`.
#[derive(Debug, Clone, Copy)]
pub struct ValueNoise {
    seed: u32,
}

impl ValueNoise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Evaluate at `(x, y)` in lattice units. Returns a value in [0, 1].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = x0 as i64;
        let yi = y0 as i64;
        let tx = smoothstep(x - x0);
        let ty = smoothstep(y - y0);

        let v00 = lattice_value(self.seed, xi, yi);
        let v10 = lattice_value(self.seed, xi + 1, yi);
        let v01 = lattice_value(self.seed, xi, yi + 1);
        let v11 = lattice_value(self.seed, xi + 1, yi + 1);

        let top = v00 * (1.0 - tx) + v10 * tx;
        let bottom = v01 * (1.0 - tx) + v11 * tx;
        top * (1.0 - ty) + bottom * ty
    }
}

/// Fractional-sum sampler over `ValueNoise`: gain 0.5, lacunarity 2.
#[derive(Debug, Clone, Copy)]
pub struct Fbm {
    noise: ValueNoise,
    octaves: u32,
}

impl Fbm {
    /// Construct an fBm sampler with the given seed and octave count
    /// (at least one octave).
    pub fn new(seed: u32, octaves: u32) -> Self {
        Self {
            noise: ValueNoise::new(seed),
            octaves: octaves.max(1),
        }
    }

    /// Evaluate fBm at `(x, y)`, normalized to [0, 1] by the amplitude sum.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut value = 0.0f64;
        let mut amp = 1.0f64;
        let mut freq = 1.0f64;
        let mut amp_sum = 0.0f64;
        for _ in 0..self.octaves {
            value += amp * self.noise.sample(x * freq, y * freq);
            amp_sum += amp;
            amp *= 0.5;
            freq *= 2.0;
        }
        value / amp_sum
    }
}
