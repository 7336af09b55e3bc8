/// Kaiser window of `len` samples with shape parameter `beta`.
pub fn kaiser(len: usize, beta: f32) -> Vec<f32> {
    match len {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }
    let half = (len - 1) as f32 / 2.0;
    let norm = bessel_i0(beta);
    (0..len)
        .map(|n| {
            let x = (n as f32 - half) / half;
            bessel_i0(beta * (1.0 - x * x).max(0.0).sqrt()) / norm
        })
        .collect()
}

/// Kaiser `beta` for a stopband attenuation given in dB.
pub fn kaiser_beta(attenuation_db: f32) -> f32 {
    if attenuation_db > 50.0 {
        0.1102 * (attenuation_db - 8.7)
    } else if attenuation_db >= 21.0 {
        0.5842 * (attenuation_db - 21.0).powf(0.4) + 0.07886 * (attenuation_db - 21.0)
    } else {
        0.0
    }
}

/// Minimum filter order for a Kaiser design (`transition_width` normalized to fs).
pub fn kaiser_order(transition_width: f32, attenuation_db: f32) -> usize {
    let order = (attenuation_db - 7.95) / (14.36 * transition_width);
    (order.ceil() as usize).max(1)
}

/// Modified Bessel function of the first kind, order 0 (power series).
pub fn bessel_i0(x: f32) -> f32 {
    let half = 0.5 * x as f64;
    let mut sum = 1.0f64;
    let mut term = 1.0f64;
    for k in 1..64 {
        let r = half / k as f64;
        term *= r * r;
        sum += term;
        if term < 1e-12 * sum { break; }
    }
    sum as f32
}
