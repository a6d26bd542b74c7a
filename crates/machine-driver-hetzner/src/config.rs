//! Driver configuration

use crate::flags::{DEFAULT_SERVER_TYPE, DEFAULT_SSH_PORT, DEFAULT_SSH_USER};
use crate::hcloud::{Architecture, ResourceId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed configuration of a Hetzner driver instance
///
/// Built once by the configuration pass and read-only afterwards. The serde
/// names match the keys a machine host persists in its `config.json`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DriverConfig {
    #[serde(rename = "APIToken")]
    pub api_token: String,

    /// Image name; empty when `image_id` is set
    pub image: String,

    /// Numeric image id; zero means unset
    #[serde(rename = "ImageID")]
    pub image_id: ResourceId,

    pub image_arch: Architecture,

    pub server_type: String,

    pub server_location: String,

    pub existing_key_path: String,

    #[serde(rename = "ExistingKeyID")]
    pub existing_key_id: ResourceId,

    pub user_data: String,

    pub user_data_file: String,

    pub networks: Vec<String>,

    pub firewalls: Vec<String>,

    pub volumes: Vec<String>,

    pub use_private_network: bool,

    #[serde(rename = "DisablePublic4")]
    pub disable_public_ipv4: bool,

    #[serde(rename = "DisablePublic6")]
    pub disable_public_ipv6: bool,

    /// Both public address families are disabled
    pub disable_public: bool,

    pub placement_group: String,

    pub auto_spread: bool,

    #[serde(rename = "SSHUser")]
    pub ssh_user: String,

    #[serde(rename = "SSHPort")]
    pub ssh_port: u16,

    pub server_labels: BTreeMap<String, String>,

    pub key_labels: BTreeMap<String, String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            image: String::new(),
            image_id: 0,
            image_arch: Architecture::Unset,
            server_type: DEFAULT_SERVER_TYPE.to_string(),
            server_location: String::new(),
            existing_key_path: String::new(),
            existing_key_id: 0,
            user_data: String::new(),
            user_data_file: String::new(),
            networks: Vec::new(),
            firewalls: Vec::new(),
            volumes: Vec::new(),
            use_private_network: false,
            disable_public_ipv4: false,
            disable_public_ipv6: false,
            disable_public: false,
            placement_group: String::new(),
            auto_spread: false,
            ssh_user: DEFAULT_SSH_USER.to_string(),
            ssh_port: DEFAULT_SSH_PORT as u16,
            server_labels: BTreeMap::new(),
            key_labels: BTreeMap::new(),
        }
    }
}

impl DriverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with the API token masked, for display
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if !config.api_token.is_empty() {
            config.api_token = "<redacted>".to_string();
        }
        config
    }

    /// Whether the server is created from a numeric image id
    pub fn uses_image_id(&self) -> bool {
        self.image_id != 0
    }
}

impl std::fmt::Debug for DriverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverConfig")
            .field("api_token", &"<redacted>")
            .field("image", &self.image)
            .field("image_id", &self.image_id)
            .field("image_arch", &self.image_arch)
            .field("server_type", &self.server_type)
            .field("server_location", &self.server_location)
            .field("existing_key_path", &self.existing_key_path)
            .field("existing_key_id", &self.existing_key_id)
            .field("user_data", &self.user_data)
            .field("user_data_file", &self.user_data_file)
            .field("networks", &self.networks)
            .field("firewalls", &self.firewalls)
            .field("volumes", &self.volumes)
            .field("use_private_network", &self.use_private_network)
            .field("disable_public_ipv4", &self.disable_public_ipv4)
            .field("disable_public_ipv6", &self.disable_public_ipv6)
            .field("disable_public", &self.disable_public)
            .field("placement_group", &self.placement_group)
            .field("auto_spread", &self.auto_spread)
            .field("ssh_user", &self.ssh_user)
            .field("ssh_port", &self.ssh_port)
            .field("server_labels", &self.server_labels)
            .field("key_labels", &self.key_labels)
            .finish()
    }
}
