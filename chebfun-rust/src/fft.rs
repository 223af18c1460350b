//! Discrete Fourier transforms used by the Chebyshev transforms
//!
//! Power-of-two lengths run through an in-place Cooley-Tukey radix-2 kernel.
//! Other lengths (pruned interpolants) use Bluestein's chirp-z algorithm on
//! top of that kernel, or a direct sum when they are short.
//!
//! Conventions follow the usual unnormalized forward transform
//! `X_k = sum_j x_j exp(-2 pi i jk / n)`; `ifft` includes the `1/n` factor.

use num_complex::Complex;
use std::f64::consts::PI;

/// Longest non-power-of-two length summed directly
const DIRECT_DFT_MAX_LEN: usize = 32;

/// Forward DFT (unnormalized)
pub fn fft(data: &[Complex<f64>]) -> Vec<Complex<f64>> {
    transform(data, false)
}

/// Inverse DFT, scaled by `1/n`
pub fn ifft(data: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = data.len();
    let mut out = transform(data, true);
    if n > 0 {
        let inv_n = 1.0 / n as f64;
        for v in out.iter_mut() {
            *v = *v * inv_n;
        }
    }
    out
}

fn transform(data: &[Complex<f64>], inverse: bool) -> Vec<Complex<f64>> {
    let n = data.len();
    if n <= 1 {
        return data.to_vec();
    }
    if n.is_power_of_two() {
        let mut buf = data.to_vec();
        fft_radix2(&mut buf, inverse);
        buf
    } else if n <= DIRECT_DFT_MAX_LEN {
        dft_direct(data, inverse)
    } else {
        bluestein(data, inverse)
    }
}

/// In-place bit-reversal permutation
fn bit_reverse_permutation(buf: &mut [Complex<f64>]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// In-place radix-2 decimation-in-time FFT (no scaling)
fn fft_radix2(buf: &mut [Complex<f64>], inverse: bool) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    bit_reverse_permutation(buf);

    let sign = if inverse { 1.0 } else { -1.0 };
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        // One from_polar per twiddle, no recurrence
        let twiddles: Vec<Complex<f64>> = (0..half)
            .map(|k| Complex::from_polar(1.0, sign * PI * k as f64 / half as f64))
            .collect();
        let mut start = 0;
        while start < n {
            for k in 0..half {
                let even = start + k;
                let odd = even + half;
                let t = twiddles[k] * buf[odd];
                buf[odd] = buf[even] - t;
                buf[even] = buf[even] + t;
            }
            start += len;
        }
        len *= 2;
    }
}

/// Direct DFT for lengths that are not a power of two
fn dft_direct(data: &[Complex<f64>], inverse: bool) -> Vec<Complex<f64>> {
    let n = data.len();
    let sign = if inverse { 1.0 } else { -1.0 };
    // exp(+-2 pi i m / n) for m in 0..n; jk is reduced mod n before lookup
    let roots: Vec<Complex<f64>> = (0..n)
        .map(|m| Complex::from_polar(1.0, sign * 2.0 * PI * m as f64 / n as f64))
        .collect();
    (0..n)
        .map(|k| {
            data.iter()
                .enumerate()
                .fold(Complex::new(0.0, 0.0), |acc, (j, &x)| {
                    acc + x * roots[(j * k) % n]
                })
        })
        .collect()
}

/// DFT of any length as a circular convolution of power-of-two length
///
/// With `w_k = exp(-+ i pi k^2 / n)`, `jk = (k^2 + j^2 - (k - j)^2) / 2`
/// turns `X_k` into `w_k sum_j (x_j w_j) conj(w_{k-j})`.
fn bluestein(data: &[Complex<f64>], inverse: bool) -> Vec<Complex<f64>> {
    let n = data.len();
    let m = (2 * n - 1).next_power_of_two();
    let sign = if inverse { 1.0 } else { -1.0 };

    // k^2 is reduced mod 2n so the angle stays small
    let mut chirp = Vec::with_capacity(n);
    let mut k2 = 0usize;
    for k in 0..n {
        chirp.push(Complex::from_polar(1.0, sign * PI * k2 as f64 / n as f64));
        k2 = (k2 + 2 * k + 1) % (2 * n);
    }

    let mut a = vec![Complex::new(0.0, 0.0); m];
    for (slot, (&x, &w)) in a.iter_mut().zip(data.iter().zip(chirp.iter())) {
        *slot = x * w;
    }
    let mut b = vec![Complex::new(0.0, 0.0); m];
    b[0] = chirp[0].conj();
    for k in 1..n {
        b[k] = chirp[k].conj();
        b[m - k] = chirp[k].conj();
    }

    fft_radix2(&mut a, false);
    fft_radix2(&mut b, false);
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x = *x * y;
    }
    fft_radix2(&mut a, true);

    let inv_m = 1.0 / m as f64;
    chirp
        .iter()
        .zip(a.iter())
        .map(|(&w, &c)| w * c * inv_m)
        .collect()
}
