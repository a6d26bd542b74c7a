//! Hetzner Cloud machine driver
//!
//! This crate implements the `Driver` trait for Hetzner Cloud. Its job is the
//! configuration pass the host runs once per driver instance: read the user's
//! flags, convert them into a typed [`DriverConfig`], and reject invalid or
//! contradictory combinations before any API call is made.
//!
//! # Pass
//!
//! 1. [`extract`](crate::extract): field by field in a fixed order, local
//!    conversions only (architecture, image id, labels, ports), first error wins.
//! 2. [`validate`](crate::validate): cross-field checks (mutually exclusive
//!    flags, default image, private network).
//!
//! # Example
//!
//! ```
//! use machine_driver::{Driver, MapOptions};
//! use machine_driver_hetzner::{Architecture, HetznerDriver};
//!
//! let opts = MapOptions::new()
//!     .with("api-token", "secret")
//!     .with("image", "debian-12")
//!     .with("image-arch", "arm");
//!
//! let mut driver = HetznerDriver::new("dev");
//! driver.set_config_from_flags(&opts)?;
//! assert_eq!(driver.config().image_arch, Architecture::Arm);
//! # Ok::<(), machine_driver_hetzner::HetznerError>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod flags;
pub mod hcloud;
pub mod validate;

pub use config::DriverConfig;
pub use driver::HetznerDriver;
pub use error::{HetznerError, Result};
pub use flags::{DEFAULT_IMAGE, LEGACY_DEFAULT_IMAGES, create_flags, is_legacy_default_image};
pub use hcloud::{Architecture, ResourceId};
