//! Configuration extraction
//!
//! Reads raw flag values and converts them into [`DriverConfig`] fields.
//! Only single-field conversions happen here, with one exception: disabling
//! public networking forces the private network on, because it establishes a
//! derived default rather than checking a conflict.
//!
//! Fields are extracted in a fixed order and the first error aborts the pass.

use crate::config::DriverConfig;
use crate::error::{HetznerError, Result};
use crate::flags::*;
use crate::hcloud::{Architecture, ResourceId};
use machine_driver::{DriverOptions, LayeredOptions, MapOptions, parse_labels};
use std::collections::BTreeMap;

/// Parse the --image-arch value
pub fn extract_architecture(raw: &str) -> Result<Architecture> {
    raw.parse()
}

/// Parse the --image-id value; empty means unset (zero)
pub fn extract_image_id(raw: &str) -> Result<ResourceId> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<ResourceId>()
        .map_err(|_| HetznerError::InvalidImageId(raw.to_string()))
}

/// Parse a list of `key=value` labels
pub fn extract_labels(flag: &str, entries: &[String]) -> Result<BTreeMap<String, String>> {
    Ok(parse_labels(flag, entries)?)
}

/// Apply --disable-public and derive whether public networking is off
pub fn extract_disable_public_network(config: &mut DriverConfig, disable_public: bool) {
    if disable_public {
        config.disable_public_ipv4 = true;
        config.disable_public_ipv6 = true;
    }
    config.disable_public = config.disable_public_ipv4 && config.disable_public_ipv6;
    if config.disable_public {
        config.use_private_network = true;
    }
}

/// Parse the --existing-key-id value; zero means unset
pub fn extract_key_id(raw: i64) -> Result<ResourceId> {
    if raw < 0 {
        return Err(HetznerError::InvalidKeyId(raw));
    }
    Ok(raw)
}

/// Parse the --ssh-port value
pub fn extract_ssh_port(raw: i64) -> Result<u16> {
    u16::try_from(raw)
        .ok()
        .filter(|port| *port != 0)
        .ok_or(HetznerError::InvalidPort(raw))
}

fn read_string(opts: &dyn DriverOptions, flag: &str) -> Result<String> {
    Ok(opts.string(flag)?.unwrap_or_default())
}

fn read_bool(opts: &dyn DriverOptions, flag: &str) -> Result<bool> {
    Ok(opts.bool(flag)?.unwrap_or_default())
}

fn read_int(opts: &dyn DriverOptions, flag: &str) -> Result<i64> {
    Ok(opts.int(flag)?.unwrap_or_default())
}

fn read_list(opts: &dyn DriverOptions, flag: &str) -> Result<Vec<String>> {
    Ok(opts.string_list(flag)?.unwrap_or_default())
}

/// Build a [`DriverConfig`] from the host's options
///
/// Flags the host left unset fall back to the defaults from [`create_flags`].
/// The result still needs [`validate`](crate::validate::validate).
pub fn extract(opts: &dyn DriverOptions) -> Result<DriverConfig> {
    let defaults = MapOptions::from_flag_defaults(&create_flags());
    let opts = LayeredOptions::new().with(opts).with(&defaults);
    let opts: &dyn DriverOptions = &opts;

    let mut config = DriverConfig::new();

    config.api_token = read_string(opts, FLAG_API_TOKEN)?;
    if config.api_token.is_empty() {
        return Err(HetznerError::MissingApiToken(FLAG_API_TOKEN));
    }

    config.image = read_string(opts, FLAG_IMAGE)?;
    config.image_id = extract_image_id(&read_string(opts, FLAG_IMAGE_ID)?)?;
    config.image_arch = extract_architecture(&read_string(opts, FLAG_IMAGE_ARCH)?)?;
    tracing::debug!(
        image = %config.image,
        image_id = config.image_id,
        image_arch = %config.image_arch,
        "Extracted image flags"
    );

    config.server_type = read_string(opts, FLAG_SERVER_TYPE)?;
    config.server_location = read_string(opts, FLAG_SERVER_LOCATION)?;

    config.existing_key_path = read_string(opts, FLAG_EXISTING_KEY_PATH)?;
    config.existing_key_id = extract_key_id(read_int(opts, FLAG_EXISTING_KEY_ID)?)?;

    config.user_data = read_string(opts, FLAG_USER_DATA)?;
    config.user_data_file = read_string(opts, FLAG_USER_DATA_FILE)?;

    config.networks = read_list(opts, FLAG_NETWORKS)?;
    config.firewalls = read_list(opts, FLAG_FIREWALLS)?;
    config.volumes = read_list(opts, FLAG_VOLUMES)?;

    config.use_private_network = read_bool(opts, FLAG_USE_PRIVATE_NETWORK)?;
    config.disable_public_ipv4 = read_bool(opts, FLAG_DISABLE_PUBLIC_IPV4)?;
    config.disable_public_ipv6 = read_bool(opts, FLAG_DISABLE_PUBLIC_IPV6)?;
    extract_disable_public_network(&mut config, read_bool(opts, FLAG_DISABLE_PUBLIC)?);
    tracing::debug!(
        use_private_network = config.use_private_network,
        disable_public = config.disable_public,
        "Extracted network flags"
    );

    config.placement_group = read_string(opts, FLAG_PLACEMENT_GROUP)?;
    config.auto_spread = read_bool(opts, FLAG_AUTO_SPREAD)?;

    config.ssh_user = read_string(opts, FLAG_SSH_USER)?;
    config.ssh_port = extract_ssh_port(read_int(opts, FLAG_SSH_PORT)?)?;

    config.server_labels = extract_labels(FLAG_SERVER_LABEL, &read_list(opts, FLAG_SERVER_LABEL)?)?;
    config.key_labels = extract_labels(FLAG_KEY_LABEL, &read_list(opts, FLAG_KEY_LABEL)?)?;
    tracing::debug!(
        server_labels = config.server_labels.len(),
        key_labels = config.key_labels.len(),
        "Extracted labels"
    );

    Ok(config)
}
