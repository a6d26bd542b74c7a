//! Hetzner driver implementation

use crate::config::DriverConfig;
use crate::error::{HetznerError, Result};
use crate::extract::extract;
use crate::flags::create_flags;
use crate::validate::validate;
use machine_driver::{Driver, DriverOptions, Flag};

/// Hetzner Cloud machine driver
pub struct HetznerDriver {
    version: String,
    config: DriverConfig,
}

impl HetznerDriver {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            config: DriverConfig::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Run extraction and validation without touching the driver
    pub fn build_config(opts: &dyn DriverOptions) -> Result<DriverConfig> {
        let mut config = extract(opts)?;
        validate(&mut config)?;
        Ok(config)
    }
}

impl Driver for HetznerDriver {
    type Config = DriverConfig;
    type Error = HetznerError;

    fn driver_name(&self) -> &str {
        "hetzner"
    }

    fn create_flags(&self) -> Vec<Flag> {
        create_flags()
    }

    fn set_config_from_flags(&mut self, opts: &dyn DriverOptions) -> Result<()> {
        let config = Self::build_config(opts)?;
        tracing::info!(
            driver = self.driver_name(),
            version = %self.version,
            image = %config.image,
            image_id = config.image_id,
            server_type = %config.server_type,
            "Driver configuration validated"
        );
        self.config = config;
        Ok(())
    }

    fn config(&self) -> &DriverConfig {
        &self.config
    }
}
