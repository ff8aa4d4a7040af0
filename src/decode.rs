//! Syndrome computation, the modified Berlekamp-Massey recurrence, Chien
//! search, and Forney correction: the four stages of Reed-Solomon
//! decoding, wired together by [`RsContext::decode`].

use crate::context::{DecodeError, RsContext, MAX_ECC_LEN};
use crate::field;
use crate::poly;
use crate::tables::{GFEXP, GFLOG};

/// Field-element count of the multiplicative group, used as a modulus
/// throughout the Forney stage.
const NONZEROS: u16 = 255;

impl RsContext {
    /// Correct `codeword` in place and return the number of symbol errors
    /// that were found and fixed.
    ///
    /// `codeword` must be exactly as long as the block this context was
    /// built for: the systematic message followed by `self.t` parity
    /// symbols, both written by [`RsContext::encode`] (or an
    /// interoperable encoder).
    ///
    /// If more than `self.t / 2` symbols were corrupted, this returns
    /// [`DecodeError::Uncorrectable`]. When that happens `codeword` may
    /// already have been partially overwritten with incorrect "corrections"
    /// and must be discarded by the caller; there is no way to recover the
    /// original data from a block this damaged.
    ///
    /// # Panics
    ///
    /// Panics if `codeword` is not longer than `self.t`, or doesn't fit in
    /// a single block.
    pub fn decode(&mut self, codeword: &mut [u8]) -> Result<usize, DecodeError> {
        assert!(
            codeword.len() > self.t,
            "codeword must carry at least one data symbol"
        );
        assert!(
            codeword.len() <= crate::context::MAX_BLOCK_LEN,
            "codeword must fit in a single block"
        );

        let t = self.t;
        let has_error = find_syndromes(&mut self.syndromes[..t], codeword);
        if !has_error {
            return Ok(0);
        }

        let num_sigma = modified_berlekamp_massey(&mut self.sigma, &self.syndromes[..t])?;

        let size = codeword.len() as u8;
        let num_errors = chien_search(&mut self.error_positions, size, &self.sigma[..num_sigma])?;

        let num_omega = poly::mul_len(
            &mut self.omega,
            &self.syndromes[..t],
            &self.sigma[..num_sigma],
            num_sigma - 1,
        );

        forney_correct(
            codeword,
            &self.error_positions[..num_errors],
            &self.sigma[..num_sigma],
            &self.omega[..num_omega],
        );

        Ok(num_sigma - 1)
    }
}

/// Evaluate the received codeword at each root `alpha^i` of the generator
/// polynomial. A codeword with no transmission errors is a multiple of
/// the generator, so every syndrome is zero; returns whether any weren't.
fn find_syndromes(syndromes: &mut [u8], codeword: &[u8]) -> bool {
    let mut has_error = false;
    for (i, s) in syndromes.iter_mut().enumerate() {
        *s = poly::eval(codeword, GFEXP[i]);
        has_error |= *s != 0;
    }
    has_error
}

/// Solve for the error locator polynomial sigma via the modified
/// Berlekamp-Massey recurrence, writing it into `sigma` and returning its
/// length (`degree + 1`).
///
/// Two length-tracked candidate polynomials are kept and swapped in place
/// of the textbook algorithm's degree bookkeeping, following the buffer
/// layout of the reference this was ported from.
fn modified_berlekamp_massey(
    sigma: &mut [u8],
    syndromes: &[u8],
) -> Result<usize, DecodeError> {
    let num_syndromes = syndromes.len();

    let mut buf0 = [0u8; MAX_ECC_LEN + 1];
    let mut buf1 = [0u8; MAX_ECC_LEN + 1];
    let mut bufw = [0u8; MAX_ECC_LEN + 1];
    buf0[1] = 1;
    buf1[0] = 1;

    let mut sg0: &mut [u8] = &mut buf0;
    let mut sg1: &mut [u8] = &mut buf1;
    let mut work: &mut [u8] = &mut bufw;

    let mut s0: i32 = 1;
    let mut s1: i32 = 0;
    let mut k: i32 = -1;

    for i in 0..num_syndromes as i32 {
        let mut s = syndromes[i as usize];
        for j in 1..=s1 {
            s ^= field::mul(sg1[j as usize], syndromes[(i - j) as usize]);
        }
        if s != 0 {
            let l = GFLOG[s as usize];
            for j in 0..=i {
                work[j as usize] = sg1[j as usize] ^ field::mul_exp(sg0[j as usize], l);
            }
            let d = i - k;
            if s1 < d {
                for j in 0..=s0 {
                    sg0[j as usize] = field::div_exp(sg1[j as usize], l);
                }
                k = i - s1;
                s0 = d;
                s1 = d;
            }
            core::mem::swap(&mut sg1, &mut work);
        }
        for j in (0..s0).rev() {
            sg0[(j + 1) as usize] = sg0[j as usize];
        }
        sg0[0] = 0;
        s0 += 1;
    }

    if sg1[s1 as usize] == 0 {
        return Err(DecodeError::Uncorrectable);
    }
    let size = (s1 + 1) as usize;
    sigma[..size].copy_from_slice(&sg1[..size]);
    Ok(size)
}

/// Solve the degree-1 or degree-2 Chien search directly, rather than
/// sweeping every field element: `a + x = 0` for degree 1, and the
/// quadratic `a + b*x^-1 + x = 0` (after the substitution used by the
/// caller) for degree 2.
fn chien_search_two(result: &mut [u8], start: u8, end: u8, a: u8, b: u8) -> Result<(), DecodeError> {
    let mut i = start;
    while i < end {
        let z0 = GFEXP[i as usize];
        let z1 = a ^ z0;
        if b == field::mul_exp(z1, i) {
            let index = GFLOG[z1 as usize];
            if index <= i || end <= index {
                return Err(DecodeError::Uncorrectable);
            }
            result[0] = z1;
            result[1] = z0;
            return Ok(());
        }
        i += 1;
    }
    Err(DecodeError::Uncorrectable)
}

/// Find the roots of `sigma`, the error locator polynomial, among
/// `alpha^0 .. alpha^(size-1)`. Each root's exponent marks a corrupted
/// symbol's position from the end of the codeword.
///
/// Degrees 1 and 2 are solved in closed form by [`chien_search_two`]
/// (degree 1 trivially, degree 2 by substitution). Higher degrees fall
/// back to a brute-force sweep that peels roots off one at a time until
/// only a final quadratic factor remains, at which point the search hands
/// off to [`chien_search_two`] rather than searching for the last two
/// roots individually.
fn chien_search(result: &mut [u8], size: u8, sigma: &[u8]) -> Result<usize, DecodeError> {
    let num_sigma = sigma.len();
    let s0 = num_sigma - 1;
    let sum = sigma[1];
    let mul = sigma[s0];

    if s0 == 1 {
        if size <= GFLOG[sum as usize] {
            return Err(DecodeError::Uncorrectable);
        }
        result[0] = sum;
        return Ok(1);
    }
    if s0 == 2 {
        let mut two = [0u8; 2];
        chien_search_two(&mut two, 0, size, sum, mul)?;
        result[0] = two[0];
        result[1] = two[1];
        return Ok(2);
    }

    let mut sum = sum;
    let mut mul = mul;
    let mut index = s0 - 1;
    let mut z: u8 = (NONZEROS) as u8;
    for i in 0..size {
        let mut temp = 1u8;
        let mut wz = z;
        for j in 1..=s0 {
            temp ^= field::mul_exp(sigma[j], wz);
            wz = ((wz as u16 + z as u16) % NONZEROS) as u8;
        }
        z = z.wrapping_sub(1);
        if temp != 0 {
            continue;
        }
        let p = GFEXP[i as usize];
        sum ^= p;
        mul = field::div(mul, p);
        result[index] = p;
        index -= 1;
        if index == 1 {
            let mut two = [0u8; 2];
            chien_search_two(&mut two, i + 1, size, sum, mul)?;
            result[0] = two[0];
            result[1] = two[1];
            return Ok(s0);
        }
    }
    Err(DecodeError::Uncorrectable)
}

/// Evaluate the error evaluator polynomial `omega` at `alpha^-l`, where
/// `l` is an error position's discrete log.
fn omega_value(omega: &[u8], l: u8) -> u8 {
    let mut w = l;
    let mut o = omega[0];
    for &c in &omega[1..] {
        o ^= field::mul_exp(c, w);
        w = ((w as u16 + l as u16) % NONZEROS) as u8;
    }
    o
}

/// Evaluate the formal derivative of `sigma` at `alpha^-l`, using the
/// fact that in characteristic 2 a derivative keeps only the odd-degree
/// terms.
fn sigma_dash_value(sigma: &[u8], l: u8) -> u8 {
    let size = sigma.len() - 1;
    let l2 = ((2 * l as u16) % NONZEROS) as u8;
    let mut w = l2;
    let mut d = sigma[1];
    let mut i = 3;
    while i <= size {
        d ^= field::mul_exp(sigma[i], w);
        w = ((w as u16 + l2 as u16) % NONZEROS) as u8;
        i += 2;
    }
    d
}

/// Apply the Forney formula at each error position found by Chien search,
/// flipping the corrupted symbol in `codeword` by the computed error
/// magnitude.
fn forney_correct(codeword: &mut [u8], positions: &[u8], sigma: &[u8], omega: &[u8]) {
    let length = codeword.len();
    for &pos in positions {
        let log_pos = GFLOG[pos as usize];
        let l = (NONZEROS - log_pos as u16) as u8;
        let d = sigma_dash_value(sigma, l);
        let o = omega_value(omega, l);
        let p = length - 1 - log_pos as usize;
        codeword[p] ^= field::div_exp(field::div(o, d), l);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::context::RsContext;

    #[test]
    fn clean_codeword_reports_zero_errors() {
        let mut context = RsContext::new(10);
        let message = *b"0123456789012345";
        let mut parity = [0u8; 10];
        context.encode(&message, &mut parity);

        let mut codeword = [0u8; 26];
        codeword[..16].copy_from_slice(&message);
        codeword[16..].copy_from_slice(&parity);

        assert_eq!(context.decode(&mut codeword), Ok(0));
    }

    #[test]
    fn corrects_up_to_capacity() {
        let mut context = RsContext::new(10);
        let message = *b"0123456789012345";
        let mut parity = [0u8; 10];
        context.encode(&message, &mut parity);

        let mut codeword = [0u8; 26];
        codeword[..16].copy_from_slice(&message);
        codeword[16..].copy_from_slice(&parity);
        let original = codeword;

        for &i in &[0usize, 3, 7, 12, 20] {
            codeword[i] ^= 0xff;
        }

        let corrected = context.decode(&mut codeword).expect("within capacity");
        assert_eq!(corrected, 5);
        assert_eq!(codeword, original);
    }

    #[test]
    fn over_capacity_is_reported_or_detected() {
        let mut context = RsContext::new(10);
        let message = *b"0123456789012345";
        let mut parity = [0u8; 10];
        context.encode(&message, &mut parity);

        let mut codeword = [0u8; 26];
        codeword[..16].copy_from_slice(&message);
        codeword[16..].copy_from_slice(&parity);
        let original = codeword;

        for &i in &[0usize, 3, 7, 12, 20, 24] {
            codeword[i] ^= 0xff;
        }

        match context.decode(&mut codeword) {
            Err(DecodeError::Uncorrectable) => {}
            Ok(_) => assert_ne!(codeword, original, "miscorrection should not silently match"),
        }
    }

    #[test]
    fn max_block_with_erros_at_capacity() {
        let mut context = RsContext::new(52);
        let mut message = [0u8; 203];
        for (i, b) in message.iter_mut().enumerate() {
            *b = (i * 7 + 3) as u8;
        }
        let mut parity = [0u8; 52];
        context.encode(&message, &mut parity);

        let mut codeword = [0u8; 255];
        codeword[..203].copy_from_slice(&message);
        codeword[203..].copy_from_slice(&parity);
        let original = codeword;

        for i in 0..26 {
            codeword[i * 9] ^= 0x55;
        }

        let corrected = context.decode(&mut codeword).expect("within capacity");
        assert_eq!(corrected, 26);
        assert_eq!(codeword, original);
    }
}
