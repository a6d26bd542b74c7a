//! Machine driver abstraction
//!
//! This crate holds the provider-neutral half of a machine driver: the
//! capability a host hands the driver to look up user-supplied flags, the
//! flag descriptors a driver publishes, and the `Driver` trait the host
//! calls once per driver instance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            Orchestration host / CLI           │
//! └─────────────────┬────────────────────────────┘
//!                   │ DriverOptions
//! ┌─────────────────▼────────────────────────────┐
//! │                machine-driver                 │
//! │  trait Driver  │  LayeredOptions │  Flag      │
//! └─────────────────┬────────────────────────────┘
//!                   │
//!           ┌───────▼────────┐
//!           │ hetzner driver │
//!           └────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use machine_driver::{DriverOptions, LayeredOptions, MapOptions};
//!
//! let user = MapOptions::new().with("image", "debian-12");
//! let defaults = MapOptions::new().with("image", "ubuntu-20.04").with("ssh-port", 22_i64);
//! let opts = LayeredOptions::new().with(&user).with(&defaults);
//!
//! assert_eq!(opts.string("image").unwrap().as_deref(), Some("debian-12"));
//! assert_eq!(opts.int("ssh-port").unwrap(), Some(22));
//! ```

pub mod driver;
pub mod error;
pub mod flag;
pub mod labels;
pub mod options;

// Re-exports
pub use driver::Driver;
pub use error::{FlagError, Result};
pub use flag::{Flag, FlagKind};
pub use labels::parse_labels;
pub use options::{DriverOptions, LayeredOptions, MapOptions, OptionValue};
