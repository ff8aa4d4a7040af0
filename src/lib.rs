//! A systematic Reed-Solomon error-correcting codec over GF(2^8).
//!
//! This crate hard-wires the field to GF(2^8) with primitive polynomial
//! `0x11D` and generator `2`, and builds a classical RS(n, k) codec on top
//! of it: [`RsContext::encode`](context::RsContext::encode) appends parity
//! symbols to a message, and
//! [`RsContext::decode`](context::RsContext::decode) locates and repairs
//! up to `t / 2` corrupted symbols using the modified Berlekamp-Massey
//! algorithm, Chien search, and Forney's formula.
//!
//! All state lives in a caller-owned [`RsContext`], sized for the worst
//! case up front; nothing in this crate allocates, so it works as-is under
//! `#![no_std]`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod tables;
pub mod field;
pub mod poly;
pub mod context;
mod encode;
mod decode;

pub use context::{DecodeError, RsContext, MAX_BLOCK_LEN, MAX_ECC_LEN};
