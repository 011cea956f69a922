//! Romo implements an idealized random oracle for the modeling of
//! collision-resistant hash functions in cryptographic protocols.
//!
//! A random oracle consists of a table and a pseudorandom generator. To hash a
//! message `m`, the oracle looks up `m` in its table. If `m` was queried
//! before, the stored output is returned. Otherwise, fresh uniformly random
//! bytes are drawn, stored as the output for `m` and returned. This gives
//!
//! - determinism: identical messages map to identical outputs, and
//! - collision resistance: distinct messages collide with negligible
//!   probability in the security parameter.
//!
//! Due to the birthday bound, a `8k`-bit output only offers `4k` bits of
//! collision resistance. An oracle with a [`SecurityParameter`] of `k` bytes
//! therefore returns `2k` bytes, so that finding a collision is as hard as a
//! brute-force search over `k` bytes.
//!
//! **This is not a hash function.** Outputs only exist for the lifetime of one
//! [`Oracle`] and two oracles disagree on every message. It is intended for
//! experimentation and for testing protocol code written against an idealized
//! hash.
//!
//! ```
//! use romo::{Oracle, SecurityParameter};
//!
//! let mut oracle = Oracle::new(SecurityParameter::new(16)?);
//! let first = oracle.query(b"hello")?.to_vec();
//! assert_eq!(32, first.len());
//! assert_eq!(first, oracle.query(b"hello")?);
//! # Ok::<(), romo::Error>(())
//! ```
//!
//! ## Concurrency
//! [`Oracle::query`] takes `&mut self`, so a plain [`Oracle`] can only be
//! queried by one thread at a time. For shared access, [`SharedOracle`] runs
//! the complete lookup, generate and insert sequence of a query in one
//! critical section.

pub mod config;
pub mod oracle;
pub mod security;
pub mod shared;

pub use config::OracleConfig;
pub use oracle::Oracle;
pub use romo_core::{AesRng, Block};
pub use security::{DEFAULT_SECURITY_PARAMETER, SecurityParameter};
pub use shared::SharedOracle;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "invalid security parameter {value}: must be positive and at most {}",
        SecurityParameter::MAX
    )]
    InvalidSecurityParameter { value: usize },
    #[error("randomness source failed to supply {requested} bytes")]
    Randomness {
        requested: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
