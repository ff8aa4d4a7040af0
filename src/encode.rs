//! Systematic Reed-Solomon encoding.

use crate::context::RsContext;
use crate::field;

impl RsContext {
    /// Systematically encode `message`, writing `self.t` parity symbols
    /// into `parity`.
    ///
    /// `message.len() + self.t` must be at most 255, the widest codeword a
    /// single byte of field width can index.
    ///
    /// # Panics
    ///
    /// Panics if `parity.len() != self.t`, or if `message.len() + self.t`
    /// doesn't fit in a block.
    pub fn encode(&mut self, message: &[u8], parity: &mut [u8]) {
        assert_eq!(parity.len(), self.t, "parity buffer must be exactly t symbols long");
        assert!(
            message.len() + self.t <= crate::context::MAX_BLOCK_LEN,
            "message plus parity must fit in a single block"
        );

        let total = message.len() + self.t;
        let work = &mut self.scratch[..total];
        work[..message.len()].copy_from_slice(message);
        for b in work[message.len()..].iter_mut() {
            *b = 0;
        }

        for i in 0..message.len() {
            let lead = work[i];
            if lead == 0 {
                continue;
            }
            for j in 1..=self.t {
                work[i + j] ^= field::mul(self.generator[j], lead);
            }
        }

        parity.copy_from_slice(&work[message.len()..total]);
    }
}
