//! The random oracle.
use std::{collections::HashMap, fmt};

use rand::{SeedableRng, TryRngCore};
use romo_core::{AesRng, Block};
use tracing::{Level, debug, error, trace};

use crate::{Error, Result, SecurityParameter, SharedOracle};

/// A random oracle mapping messages to `2k` uniformly random bytes.
///
/// Outputs are drawn from `R` on the first query of a message and memoized in
/// a table owned by the oracle. Entries are never removed or changed, so every
/// later query of the same message returns the same bytes.
///
/// Any [`TryRngCore`] can act as randomness source. Infallible generators
/// implementing [`RngCore`](rand::RngCore) are supported through the blanket
/// implementation in `rand_core`. The default is a freshly seeded [`AesRng`].
pub struct Oracle<R = AesRng> {
    param: SecurityParameter,
    table: HashMap<Vec<u8>, Box<[u8]>>,
    rng: R,
}

impl Oracle<AesRng> {
    /// Create an oracle with a fresh [`AesRng`] seeded from system randomness.
    ///
    /// Two oracles created with this method are independent.
    pub fn new(param: SecurityParameter) -> Self {
        Self::with_rng(param, AesRng::new())
    }

    /// Create an oracle whose outputs are drawn from an [`AesRng`] seeded with
    /// `seed`.
    ///
    /// Oracles created from the same seed and queried with the same sequence
    /// of new messages agree on their outputs.
    pub fn from_seed(param: SecurityParameter, seed: Block) -> Self {
        Self::with_rng(param, AesRng::from_seed(seed))
    }
}

impl Default for Oracle<AesRng> {
    fn default() -> Self {
        Self::new(SecurityParameter::default())
    }
}

impl<R> Oracle<R> {
    /// Create an oracle drawing its outputs from `rng`.
    pub fn with_rng(param: SecurityParameter, rng: R) -> Self {
        debug!(
            security_parameter = param.bytes(),
            output_length = param.output_length(),
            "created random oracle"
        );
        Self {
            param,
            table: HashMap::new(),
            rng,
        }
    }

    pub fn security_parameter(&self) -> SecurityParameter {
        self.param
    }

    /// Length in bytes of every output, `2 * security_parameter`.
    pub fn output_length(&self) -> usize {
        self.param.output_length()
    }

    /// Number of distinct messages queried so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether `message` has been queried before.
    pub fn contains(&self, message: &[u8]) -> bool {
        self.table.contains_key(message)
    }

    /// Return the output of `message` if it has been queried before.
    ///
    /// Unlike [`Oracle::query`] this never draws randomness or changes the
    /// table.
    pub fn get(&self, message: &[u8]) -> Option<&[u8]> {
        self.table.get(message).map(|output| &**output)
    }

    /// Iterate over all `(message, output)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.table
            .iter()
            .map(|(message, output)| (message.as_slice(), &**output))
    }

    /// Convert into a [`SharedOracle`] which can be queried concurrently.
    pub fn into_shared(self) -> SharedOracle<R> {
        SharedOracle::new(self)
    }
}

impl<R> Oracle<R>
where
    R: TryRngCore,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    /// Query the oracle on `message`.
    ///
    /// If `message` was queried before, the stored output is returned without
    /// consuming randomness. Otherwise `2k` fresh bytes are drawn from the
    /// randomness source and stored for `message`. Whether a message was
    /// queried before is decided by membership in the table alone, the empty
    /// message included.
    ///
    /// # Errors
    /// Returns [`Error::Randomness`] if the randomness source fails. The table
    /// is left unchanged in that case, so the query can be retried.
    #[tracing::instrument(level = Level::TRACE, skip_all, fields(len = message.len()))]
    pub fn query(&mut self, message: &[u8]) -> Result<&[u8]> {
        if self.table.contains_key(message) {
            trace!("cache hit");
            return Ok(&*self.table[message]);
        }
        let requested = self.param.output_length();
        let mut output = vec![0_u8; requested].into_boxed_slice();
        if let Err(err) = self.rng.try_fill_bytes(&mut output) {
            error!(requested, %err, "randomness source failed");
            return Err(Error::Randomness {
                requested,
                source: Box::new(err),
            });
        }
        trace!("cache miss");
        let output = self.table.entry(message.to_vec()).or_insert(output);
        Ok(&**output)
    }

    /// Query the oracle on `message` and return an owned copy of the output.
    pub fn query_owned(&mut self, message: &[u8]) -> Result<Vec<u8>> {
        self.query(message).map(<[u8]>::to_vec)
    }

    /// Query the oracle on each message in order.
    ///
    /// Stops at the first failing query. Outputs of the messages queried up to
    /// that point stay in the table.
    pub fn query_many<I>(&mut self, messages: I) -> Result<Vec<Vec<u8>>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        messages
            .into_iter()
            .map(|message| self.query_owned(message.as_ref()))
            .collect()
    }
}

impl<R> fmt::Debug for Oracle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oracle")
            .field("security_parameter", &self.param.bytes())
            .field("output_length", &self.param.output_length())
            .field("entries", &self.table.len())
            .finish_non_exhaustive()
    }
}
