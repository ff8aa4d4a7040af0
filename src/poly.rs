//! Polynomial arithmetic over GF(2^8), operating on caller-provided slices.
//!
//! Every polynomial here is stored most-significant-coefficient first:
//! `poly[0]` is the leading term, matching the convention used throughout
//! the encoder and decoder. None of these functions allocate; callers pass
//! an output slice sized for the worst case and read back the length that
//! was actually used.

use crate::field;

/// `result[i] = p[i] * x` for each `i`. `result` and `p` must have equal
/// length.
pub fn scale(result: &mut [u8], p: &[u8], x: u8) {
    for (r, &c) in result.iter_mut().zip(p.iter()) {
        *r = field::mul(c, x);
    }
}

/// `result = p + q` (equivalently `p ^ q`, symbol-wise), aligning both
/// operands on their low-order (rightmost) end as is natural when adding
/// polynomials of differing degree. Returns the number of leading entries
/// of `result` that were written, `max(p.len(), q.len())`.
///
/// `result` must be at least that long.
pub fn add(result: &mut [u8], p: &[u8], q: &[u8]) -> usize {
    let size = p.len().max(q.len());
    for r in result[..size].iter_mut() {
        *r = 0;
    }
    let poff = size - p.len();
    for (i, &c) in p.iter().enumerate() {
        result[poff + i] = c;
    }
    let qoff = size - q.len();
    for (i, &c) in q.iter().enumerate() {
        result[qoff + i] ^= c;
    }
    size
}

/// `result = p * q`, the full convolution. Returns the number of entries
/// written, `p.len() + q.len() - 1`.
///
/// `result` must be at least that long.
pub fn mul(result: &mut [u8], p: &[u8], q: &[u8]) -> usize {
    let total = p.len() + q.len() - 1;
    for r in result[..total].iter_mut() {
        *r = 0;
    }
    for (i, &qi) in q.iter().enumerate() {
        for (j, &pj) in p.iter().enumerate() {
            result[i + j] ^= field::mul(pj, qi);
        }
    }
    total
}

/// Like [`mul`], but truncates the product to its `l` highest-order terms
/// instead of returning the full convolution. Used to compute the error
/// evaluator polynomial, where only a bounded number of leading terms of
/// `syndromes * sigma` are ever needed.
///
/// Hoists `gflog[p[i]]` once per outer iteration and multiplies via
/// [`field::mul_exp`], halving the table lookups against a plain `mul` per
/// inner step.
///
/// Returns `l`; `result` must be at least `l` long.
pub fn mul_len(result: &mut [u8], p: &[u8], q: &[u8], l: usize) -> usize {
    for r in result[..l].iter_mut() {
        *r = 0;
    }
    let psize = p.len().min(l);
    for (i, &pi) in p[..psize].iter().enumerate() {
        if pi == 0 {
            continue;
        }
        let logp = crate::tables::GFLOG[pi as usize];
        let qs = (l - i).min(q.len());
        for (j, &qj) in q[..qs].iter().enumerate() {
            if qj == 0 {
                continue;
            }
            result[i + j] ^= field::mul_exp(qj, logp);
        }
    }
    l
}

/// Evaluate `poly(x)` via Horner's method, `poly[0]` being the leading
/// coefficient.
pub fn eval(poly: &[u8], x: u8) -> u8 {
    let mut y = poly[0];
    for &c in &poly[1..] {
        y = field::mul(y, x) ^ c;
    }
    y
}
