//! Core randomness utilities for the romo random oracle model.
//!
//! The most important types are the 128-bit [`Block`], which is used as the
//! seed of every generator in this workspace, and the [`AesRng`] which is the
//! default source of fresh oracle outputs. Generators are keyed with AES-128,
//! so a seed is exactly one 16-byte [`Block`].

pub mod aes_rng;
pub mod block;
#[cfg(feature = "__testing")]
pub mod test_utils;

pub use aes_rng::AesRng;
pub use block::Block;

/// Number of AES blocks the [`AesRng`] encrypts per refill of its buffer.
pub const AES_PAR_BLOCKS: usize = 8;
