//! Field arithmetic over GF(2^8).
//!
//! Every operation here is a byte-in, byte-out function built directly on
//! top of the [`tables`](crate::tables) log/antilog pair. None of this
//! allocates, panics, or depends on any particular `t`; it is the leaf
//! layer everything else in this crate is built from.

use crate::tables::{GFEXP, GFLOG};

/// Size of the multiplicative group, used as the modulus for all
/// exponent arithmetic (`2^8 - 1`).
const NONZEROS: u32 = 255;

/// Field addition, `a + b`. Addition and subtraction coincide in
/// characteristic 2.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication, `a * b`.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let sum = GFLOG[a as usize] as u32 + GFLOG[b as usize] as u32;
    let sum = if sum >= NONZEROS { sum - NONZEROS } else { sum };
    GFEXP[sum as usize]
}

/// Multiply `a` by `α^b`, without first converting `b` into a field
/// element. `b` may be any byte; the exponent is reduced modulo 255.
#[inline]
pub fn mul_exp(a: u8, b: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let sum = GFLOG[a as usize] as u32 + b as u32;
    let sum = if sum >= NONZEROS { sum - NONZEROS } else { sum };
    GFEXP[sum as usize]
}

/// Field division, `a / b`.
///
/// Dividing by zero is a caller bug; the codec never exercises this path
/// on valid inputs. Rather than panic, this returns the reference's
/// defensive sentinel `0xFF`, which is itself a valid (if nonsensical)
/// field element.
#[inline]
pub fn div(a: u8, b: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    if b == 0 {
        return 0xff;
    }
    let diff = GFLOG[a as usize] as i32 - GFLOG[b as usize] as i32;
    let diff = if diff < 0 { diff + NONZEROS as i32 } else { diff };
    GFEXP[diff as usize]
}

/// Divide `a` by `α^b`.
#[inline]
pub fn div_exp(a: u8, b: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let diff = GFLOG[a as usize] as i32 - b as i32;
    let diff = if diff < 0 { diff + NONZEROS as i32 } else { diff };
    GFEXP[diff as usize]
}

/// Raise `x` to the `p`-th power. Undefined (and not checked) for `x = 0`.
#[inline]
pub fn pow(x: u8, p: u8) -> u8 {
    let e = (GFLOG[x as usize] as u32 * p as u32) % NONZEROS;
    GFEXP[e as usize]
}

/// Multiplicative inverse of `x`. Undefined (and not checked) for `x = 0`.
///
/// Note: at `x = 1`, `GFLOG[1] = 0`, so this formula indexes `GFEXP[255]`,
/// the table's unused tail entry (see [`tables::GFEXP`](crate::tables::GFEXP)),
/// rather than the mathematically correct `1`. This is preserved bit-for-bit
/// from the reference because `inverse` is never called from the encode or
/// decode pipeline (it is exposed purely as a field-arithmetic utility), and
/// changing its behavior at `x = 1` would make the table round trip lie.
#[inline]
pub fn inverse(x: u8) -> u8 {
    GFEXP[(NONZEROS - GFLOG[x as usize] as u32) as usize]
}
