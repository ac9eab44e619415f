use std::f64::consts::PI;

const EPSILON: f64 = 1e-12;

/// Standard normal probability density.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes gamma of a European option (identical for calls and puts).
///
/// `s` spot, `k` strike, `t` years to expiry, `sigma` implied volatility,
/// `r` risk-free rate, `q` dividend yield. `s`, `k`, `t` and `sigma` are
/// floored at `1e-12` so expired or degenerate inputs never divide by zero.
pub fn bs_gamma(s: f64, k: f64, t: f64, sigma: f64, r: f64, q: f64) -> f64 {
    let s = s.max(EPSILON);
    let k = k.max(EPSILON);
    let t = t.max(EPSILON);
    let sigma = sigma.max(EPSILON);

    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / vol_sqrt_t;

    norm_pdf(d1) / (s * vol_sqrt_t)
}
