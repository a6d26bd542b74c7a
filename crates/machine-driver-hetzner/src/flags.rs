//! Flags accepted by the Hetzner driver
//!
//! Flag names are part of the driver's public interface: hosts persist them
//! and users script against them.

use machine_driver::Flag;

pub const FLAG_API_TOKEN: &str = "api-token";
pub const FLAG_IMAGE: &str = "image";
pub const FLAG_IMAGE_ID: &str = "image-id";
pub const FLAG_IMAGE_ARCH: &str = "image-arch";
pub const FLAG_SERVER_TYPE: &str = "server-type";
pub const FLAG_SERVER_LOCATION: &str = "server-location";
pub const FLAG_EXISTING_KEY_PATH: &str = "existing-key-path";
pub const FLAG_EXISTING_KEY_ID: &str = "existing-key-id";
pub const FLAG_USER_DATA: &str = "user-data";
pub const FLAG_USER_DATA_FILE: &str = "user-data-file";
pub const FLAG_NETWORKS: &str = "networks";
pub const FLAG_FIREWALLS: &str = "firewalls";
pub const FLAG_VOLUMES: &str = "volumes";
pub const FLAG_USE_PRIVATE_NETWORK: &str = "use-private-network";
pub const FLAG_DISABLE_PUBLIC: &str = "disable-public";
pub const FLAG_DISABLE_PUBLIC_IPV4: &str = "disable-public-ipv4";
pub const FLAG_DISABLE_PUBLIC_IPV6: &str = "disable-public-ipv6";
pub const FLAG_PLACEMENT_GROUP: &str = "placement-group";
pub const FLAG_AUTO_SPREAD: &str = "auto-spread";
pub const FLAG_SSH_USER: &str = "ssh-user";
pub const FLAG_SSH_PORT: &str = "ssh-port";
pub const FLAG_SERVER_LABEL: &str = "server-label";
pub const FLAG_KEY_LABEL: &str = "key-label";

/// Image used when neither --image nor --image-id is given
pub const DEFAULT_IMAGE: &str = "ubuntu-20.04";

pub const DEFAULT_SERVER_TYPE: &str = "cx11";
pub const DEFAULT_SSH_USER: &str = "root";
pub const DEFAULT_SSH_PORT: i64 = 22;

/// Image names that earlier releases wrote as the default
///
/// Saved configurations from those releases always carry one of these next
/// to any --image-id, so they must not count as a custom image.
pub const LEGACY_DEFAULT_IMAGES: &[&str] = &[DEFAULT_IMAGE, "ubuntu-18.04", "ubuntu-16.04", "debian-9"];

/// Check if an image name is the current or a former default
pub fn is_legacy_default_image(name: &str) -> bool {
    LEGACY_DEFAULT_IMAGES.contains(&name)
}

/// All flags of the Hetzner driver, in extraction order
pub fn create_flags() -> Vec<Flag> {
    vec![
        Flag::string(
            FLAG_API_TOKEN,
            "HETZNER_API_TOKEN",
            "Project-specific Hetzner API token",
            "",
        ),
        Flag::string(
            FLAG_IMAGE,
            "HETZNER_IMAGE",
            "Image to use for server creation",
            "",
        ),
        Flag::string(
            FLAG_IMAGE_ID,
            "HETZNER_IMAGE_ID",
            "Image ID to use for server creation",
            "",
        ),
        Flag::string(
            FLAG_IMAGE_ARCH,
            "HETZNER_IMAGE_ARCH",
            "Architecture of the image (arm or x86)",
            "",
        ),
        Flag::string(
            FLAG_SERVER_TYPE,
            "HETZNER_TYPE",
            "Server type to create",
            DEFAULT_SERVER_TYPE,
        ),
        Flag::string(
            FLAG_SERVER_LOCATION,
            "HETZNER_LOCATION",
            "Location to create machine at",
            "",
        ),
        Flag::string(
            FLAG_EXISTING_KEY_PATH,
            "HETZNER_EXISTING_KEY_PATH",
            "Path to existing key (new public key will be created unless --existing-key-id is specified)",
            "",
        ),
        Flag::int(
            FLAG_EXISTING_KEY_ID,
            "HETZNER_EXISTING_KEY_ID",
            "Existing key ID on the server; requires --existing-key-path",
            0,
        ),
        Flag::string(
            FLAG_USER_DATA,
            "HETZNER_USER_DATA",
            "Cloud-init based user data (inline)",
            "",
        ),
        Flag::string(
            FLAG_USER_DATA_FILE,
            "HETZNER_USER_DATA_FILE",
            "Cloud-init based user data (read from file)",
            "",
        ),
        Flag::string_list(
            FLAG_NETWORKS,
            "HETZNER_NETWORKS",
            "Network IDs or names which should be attached to the server private network interface",
        ),
        Flag::string_list(
            FLAG_FIREWALLS,
            "HETZNER_FIREWALLS",
            "Firewall IDs or names which should be applied on the server",
        ),
        Flag::string_list(
            FLAG_VOLUMES,
            "HETZNER_VOLUMES",
            "Volume IDs or names which should be attached to the server",
        ),
        Flag::bool(
            FLAG_USE_PRIVATE_NETWORK,
            "HETZNER_USE_PRIVATE_NETWORK",
            "Use private network",
        ),
        Flag::bool(
            FLAG_DISABLE_PUBLIC,
            "HETZNER_DISABLE_PUBLIC",
            "Disable public IPv4 and IPv6 (implies --use-private-network)",
        ),
        Flag::bool(
            FLAG_DISABLE_PUBLIC_IPV4,
            "HETZNER_DISABLE_PUBLIC_4",
            "Disable public IPv4",
        ),
        Flag::bool(
            FLAG_DISABLE_PUBLIC_IPV6,
            "HETZNER_DISABLE_PUBLIC_6",
            "Disable public IPv6",
        ),
        Flag::string(
            FLAG_PLACEMENT_GROUP,
            "HETZNER_PLACEMENT_GROUP",
            "Placement group ID or name to add the server to",
            "",
        ),
        Flag::bool(
            FLAG_AUTO_SPREAD,
            "HETZNER_AUTO_SPREAD",
            "Auto-spread on a machine-managed placement group",
        ),
        Flag::string(
            FLAG_SSH_USER,
            "HETZNER_SSH_USER",
            "SSH username",
            DEFAULT_SSH_USER,
        ),
        Flag::int(
            FLAG_SSH_PORT,
            "HETZNER_SSH_PORT",
            "SSH port",
            DEFAULT_SSH_PORT,
        ),
        Flag::string_list(
            FLAG_SERVER_LABEL,
            "HETZNER_SERVER_LABELS",
            "Key value pairs of additional labels to assign to the server",
        ),
        Flag::string_list(
            FLAG_KEY_LABEL,
            "HETZNER_KEY_LABELS",
            "Key value pairs of additional labels to assign to the SSH key",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_legacy_default_images() {
        assert!(is_legacy_default_image(DEFAULT_IMAGE));
        assert!(is_legacy_default_image("ubuntu-18.04"));
        assert!(is_legacy_default_image("debian-9"));
        assert!(!is_legacy_default_image("answer"));
        assert!(!is_legacy_default_image(""));
    }

    #[test]
    fn test_flag_names_and_env_vars_unique() {
        let flags = create_flags();
        let names: HashSet<_> = flags.iter().map(|f| f.name).collect();
        let envs: HashSet<_> = flags.iter().map(|f| f.env_var).collect();
        assert_eq!(names.len(), flags.len());
        assert_eq!(envs.len(), flags.len());
        assert!(flags.iter().all(|f| f.env_var.starts_with("HETZNER_")));
    }

    #[test]
    fn test_contractual_flags_present() {
        let flags = create_flags();
        for name in [
            FLAG_API_TOKEN,
            FLAG_IMAGE,
            FLAG_IMAGE_ID,
            FLAG_IMAGE_ARCH,
            FLAG_DISABLE_PUBLIC,
            FLAG_USE_PRIVATE_NETWORK,
            FLAG_SERVER_LABEL,
            FLAG_KEY_LABEL,
        ] {
            assert!(flags.iter().any(|f| f.name == name), "missing flag {}", name);
        }
    }
}
