//! Driver trait definition

use crate::flag::Flag;
use crate::options::DriverOptions;

/// Machine driver abstraction
///
/// The host instantiates a driver, renders its flags, and calls
/// [`Driver::set_config_from_flags`] exactly once before any lifecycle
/// operation. A failed call leaves the driver unusable for provisioning.
pub trait Driver {
    /// Validated configuration produced by a successful flag pass
    type Config;

    /// Error surfaced to the host as a configuration failure
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the driver name (e.g., "hetzner")
    fn driver_name(&self) -> &str;

    /// Flags this driver accepts
    fn create_flags(&self) -> Vec<Flag>;

    /// Extract and validate the configuration from the host's options
    fn set_config_from_flags(&mut self, opts: &dyn DriverOptions) -> Result<(), Self::Error>;

    /// The configuration held by this driver
    fn config(&self) -> &Self::Config;
}
