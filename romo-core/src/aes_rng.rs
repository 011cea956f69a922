//! RNG based on AES in CTR mode.
//!
//! This implementation is based on the implementation given in the
//! [scuttlebutt](https://github.com/GaloisInc/swanky/blob/4455754abadee07f168079ac45ef33535b0df27d/scuttlebutt/src/rand_aes.rs)
//! crate. Instead of using an own AES implementation, [`AesRng`](`AesRng`) uses
//! the [aes](`aes`) crate.
//!
//! The [`AesRng`] is the default randomness source of the oracle. It is
//! process-local and never blocks, so drawing fresh oracle outputs does not
//! touch the operating system after the initial seeding.
use std::mem;

use aes::{
    Aes128,
    cipher::{BlockCipherEncrypt, Key, KeyInit},
};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_core::block::{BlockRng, BlockRngCore, CryptoBlockRng};

use crate::{AES_PAR_BLOCKS, Block};

const WORDS_PER_BLOCK: usize = mem::size_of::<aes::Block>() / mem::size_of::<u32>();

/// This uses AES in a counter-mode to implement a PRG.
///
/// The counter always starts at zero, so two generators created from the same
/// [`Block`] seed produce the same stream.
#[derive(Clone, Debug)]
pub struct AesRng(BlockRng<AesRngCore>);

impl RngCore for AesRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }
}

impl SeedableRng for AesRng {
    type Seed = Block;

    #[inline]
    fn from_seed(seed: Self::Seed) -> Self {
        AesRng(BlockRng::new(AesRngCore::from_seed(seed)))
    }
}

impl CryptoRng for AesRng {}

impl AesRng {
    /// Create a new random number generator using a random seed from
    /// `rand::random`.
    #[inline]
    pub fn new() -> Self {
        let seed = rand::random::<Block>();
        AesRng::from_seed(seed)
    }
}

impl Default for AesRng {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// The core of `AesRng`, used with `BlockRng`.
#[derive(Clone)]
pub struct AesRngCore {
    aes: Aes128,
    state: u128,
}

impl std::fmt::Debug for AesRngCore {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "AesRngCore {{}}")
    }
}

impl BlockRngCore for AesRngCore {
    type Item = u32;
    // This is equivalent to `[aes::Block; AES_PAR_BLOCKS]`, but we need to use
    // `u32` to be compatible with `RngCore`.
    type Results = [u32; AES_PAR_BLOCKS * WORDS_PER_BLOCK];

    // Compute `E(state)` AES_PAR_BLOCKS times, where `state` is a counter.
    #[inline]
    fn generate(&mut self, results: &mut Self::Results) {
        let mut blocks = [aes::Block::default(); AES_PAR_BLOCKS];
        for blk in blocks.iter_mut() {
            *blk = aes::Block::from(self.state.to_le_bytes());
            self.state = self.state.wrapping_add(1);
        }
        self.aes.encrypt_blocks(&mut blocks);
        for (words, blk) in results.chunks_exact_mut(WORDS_PER_BLOCK).zip(&blocks) {
            for (word, bytes) in words.iter_mut().zip(blk.chunks_exact(4)) {
                let mut buf = [0; 4];
                buf.copy_from_slice(bytes);
                *word = u32::from_le_bytes(buf);
            }
        }
    }
}

impl SeedableRng for AesRngCore {
    type Seed = Block;

    #[inline]
    fn from_seed(seed: Self::Seed) -> Self {
        let key = Key::<Aes128>::from(*seed.as_bytes());
        AesRngCore {
            aes: Aes128::new(&key),
            state: Default::default(),
        }
    }
}

impl CryptoBlockRng for AesRngCore {}

impl From<AesRngCore> for AesRng {
    #[inline]
    fn from(core: AesRngCore) -> Self {
        AesRng(BlockRng::new(core))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_generate() {
        let mut rng = AesRng::new();
        let a = rng.random::<[Block; 8]>();
        let b = rng.random::<[Block; 8]>();
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = Block::from(42_u64);
        let mut a = AesRng::from_seed(seed);
        let mut b = AesRng::from_seed(seed);
        let mut buf_a = [0_u8; 100];
        let mut buf_b = [0_u8; 100];
        a.fill_bytes(&mut buf_a);
        b.fill_bytes(&mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_stream_is_aes_of_counter() {
        let seed = Block::from(7_u64);
        let mut rng = AesRng::from_seed(seed);
        let mut out = [0_u8; 16];
        rng.fill_bytes(&mut out);

        let aes = Aes128::new(&Key::<Aes128>::from(*seed.as_bytes()));
        let mut expected = aes::Block::from(0_u128.to_le_bytes());
        aes.encrypt_block(&mut expected);
        assert_eq!(&expected[..], &out[..]);
    }

    proptest::proptest! {
        #[test]
        fn split_fills_match_single_fill(len in 0..600_usize, split in 0..600_usize) {
            // BlockRng discards the unused bytes of a partially consumed word
            let split = split.min(len) / 4 * 4;
            let mut whole = vec![0_u8; len];
            AesRng::from_seed(Block::ONE).fill_bytes(&mut whole);

            let mut rng = AesRng::from_seed(Block::ONE);
            let mut parts = vec![0_u8; len];
            let (head, tail) = parts.split_at_mut(split);
            rng.fill_bytes(head);
            rng.fill_bytes(tail);
            proptest::prop_assert_eq!(whole, parts);
        }
    }
}
