//! An [`Oracle`] that can be queried from multiple threads.
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use rand::TryRngCore;
use romo_core::AesRng;

use crate::{Oracle, Result, SecurityParameter};

/// A cloneable handle to an [`Oracle`] shared between threads.
///
/// Every query holds the lock for the complete lookup, generate and insert
/// sequence. Two threads querying the same new message therefore can't both
/// miss and store different outputs. All clones of a handle refer to the same
/// table.
pub struct SharedOracle<R = AesRng> {
    inner: Arc<Mutex<Oracle<R>>>,
}

impl<R> SharedOracle<R> {
    pub fn new(oracle: Oracle<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(oracle)),
        }
    }

    // A panic while holding the lock can only happen before the table is
    // changed, so the oracle behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Oracle<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn security_parameter(&self) -> SecurityParameter {
        self.lock().security_parameter()
    }

    pub fn output_length(&self) -> usize {
        self.lock().output_length()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, message: &[u8]) -> bool {
        self.lock().contains(message)
    }

    pub fn get(&self, message: &[u8]) -> Option<Vec<u8>> {
        self.lock().get(message).map(<[u8]>::to_vec)
    }
}

impl<R> SharedOracle<R>
where
    R: TryRngCore,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    /// Query the shared oracle on `message`. See [`Oracle::query`].
    pub fn query(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.lock().query_owned(message)
    }
}

impl Default for SharedOracle<AesRng> {
    fn default() -> Self {
        Oracle::default().into_shared()
    }
}

impl<R> Clone for SharedOracle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> From<Oracle<R>> for SharedOracle<R> {
    fn from(oracle: Oracle<R>) -> Self {
        Self::new(oracle)
    }
}

impl<R> fmt::Debug for SharedOracle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedOracle").field(&*self.lock()).finish()
    }
}
