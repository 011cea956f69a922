//! Serializable construction parameters of an [`Oracle`].
use romo_core::{AesRng, Block};
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_SECURITY_PARAMETER, Oracle, Result, SecurityParameter, SharedOracle};

/// Configuration of an [`Oracle`] backed by an [`AesRng`].
///
/// Without a seed, every oracle built from the config is seeded from system
/// randomness and independent of all others. With a seed, oracles built from
/// the same config agree on their outputs when queried with the same sequence
/// of new messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Nominal security level `k` in bytes. Outputs have `2k` bytes.
    pub security_parameter: usize,
    pub seed: Option<Block>,
}

impl OracleConfig {
    pub fn new(security_parameter: usize) -> Self {
        Self {
            security_parameter,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Block) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the security parameter.
    pub fn security_parameter(&self) -> Result<SecurityParameter> {
        SecurityParameter::new(self.security_parameter)
    }

    /// Build an oracle from this config.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSecurityParameter`](crate::Error::InvalidSecurityParameter)
    /// if the security parameter is zero or too large.
    pub fn build(&self) -> Result<Oracle<AesRng>> {
        let param = self.security_parameter()?;
        Ok(match self.seed {
            Some(seed) => Oracle::from_seed(param, seed),
            None => Oracle::new(param),
        })
    }

    pub fn build_shared(&self) -> Result<SharedOracle<AesRng>> {
        self.build().map(Oracle::into_shared)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECURITY_PARAMETER)
    }
}

#[cfg(test)]
mod tests {
    use romo_core::Block;

    use crate::{Error, OracleConfig};

    #[test]
    fn test_default_config() {
        let conf = OracleConfig::default();
        assert_eq!(32, conf.security_parameter);
        assert_eq!(None, conf.seed);
        assert_eq!(64, conf.build().unwrap().output_length());
    }

    #[test]
    fn test_invalid_parameter_rejected() {
        let res = OracleConfig::new(0).build();
        assert!(matches!(res, Err(Error::InvalidSecurityParameter { value: 0 })));
        assert!(OracleConfig::new(0).build_shared().is_err());
    }

    #[test]
    fn test_seeded_configs_agree() {
        let conf = OracleConfig::new(8).with_seed(Block::from(5_u64));
        let mut a = conf.build().unwrap();
        let b = conf.build_shared().unwrap();
        assert_eq!(a.query_owned(b"m").unwrap(), b.query(b"m").unwrap());
    }

    #[test]
    fn test_bincode_config() {
        let conf = OracleConfig::new(24).with_seed(Block::ONES);
        let bytes = bincode::serialize(&conf).unwrap();
        let decoded: OracleConfig = bincode::deserialize(&bytes).unwrap();
        assert_eq!(conf, decoded);
        assert_eq!(48, decoded.build().unwrap().output_length());
    }
}
