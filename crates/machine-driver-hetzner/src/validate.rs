//! Cross-field validation
//!
//! Runs after extraction. Checks are applied in a fixed order and the first
//! failing one is returned.

use crate::config::DriverConfig;
use crate::error::{HetznerError, Result};
use crate::flags::*;

/// Validate an extracted configuration and fill in the default image
pub fn validate(config: &mut DriverConfig) -> Result<()> {
    verify_image_flags(config)?;
    verify_user_data_flags(config)?;
    verify_key_flags(config)?;
    verify_placement_flags(config)?;
    assign_default_image(config);
    verify_network_flags(config)?;
    Ok(())
}

fn verify_image_flags(config: &mut DriverConfig) -> Result<()> {
    if config.uses_image_id() && !config.image.is_empty() {
        if !is_legacy_default_image(&config.image) {
            return Err(HetznerError::MutuallyExclusiveFlags(FLAG_IMAGE, FLAG_IMAGE_ID));
        }
        tracing::warn!(
            image = %config.image,
            image_id = config.image_id,
            "Ignoring legacy default image in favour of --{}",
            FLAG_IMAGE_ID
        );
        config.image.clear();
    }

    if config.uses_image_id() && !config.image_arch.is_unset() {
        return Err(HetznerError::MutuallyExclusiveFlags(
            FLAG_IMAGE_ARCH,
            FLAG_IMAGE_ID,
        ));
    }
    Ok(())
}

fn verify_user_data_flags(config: &DriverConfig) -> Result<()> {
    if !config.user_data.is_empty() && !config.user_data_file.is_empty() {
        return Err(HetznerError::MutuallyExclusiveFlags(
            FLAG_USER_DATA,
            FLAG_USER_DATA_FILE,
        ));
    }
    Ok(())
}

fn verify_key_flags(config: &DriverConfig) -> Result<()> {
    if config.existing_key_id != 0 && config.existing_key_path.is_empty() {
        return Err(HetznerError::FlagRequires(
            FLAG_EXISTING_KEY_ID,
            FLAG_EXISTING_KEY_PATH,
        ));
    }
    Ok(())
}

fn verify_placement_flags(config: &DriverConfig) -> Result<()> {
    if config.auto_spread && !config.placement_group.is_empty() {
        return Err(HetznerError::MutuallyExclusiveFlags(
            FLAG_PLACEMENT_GROUP,
            FLAG_AUTO_SPREAD,
        ));
    }
    Ok(())
}

fn assign_default_image(config: &mut DriverConfig) {
    if !config.uses_image_id() && config.image.is_empty() {
        config.image = DEFAULT_IMAGE.to_string();
    }
}

fn verify_network_flags(config: &DriverConfig) -> Result<()> {
    // only reachable for configs not built by extract()
    if config.disable_public && !config.use_private_network {
        return Err(HetznerError::PrivateNetworkRequired(
            FLAG_USE_PRIVATE_NETWORK,
            FLAG_DISABLE_PUBLIC,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcloud::Architecture;

    fn config() -> DriverConfig {
        DriverConfig {
            api_token: "foo".to_string(),
            ..Default::default()
        }
    }

    fn assert_mutual_exclusion(result: Result<()>, flag1: &str, flag2: &str) {
        let err = match result {
            Ok(()) => panic!(
                "expected mutually exclusive flags to fail, but no error was returned: {} {}",
                flag1, flag2
            ),
            Err(e) => e.to_string(),
        };
        assert!(
            err.contains(flag1) && err.contains(flag2) && err.contains("mutually exclusive"),
            "unexpected message for {} {}: {}",
            flag1,
            flag2,
            err
        );
    }

    #[test]
    fn test_image_and_image_id_conflict() {
        let mut config = config();
        config.image = "answer".to_string();
        config.image_id = 42;
        assert_mutual_exclusion(validate(&mut config), FLAG_IMAGE, FLAG_IMAGE_ID);
    }

    #[test]
    fn test_legacy_default_image_with_image_id() {
        for legacy in LEGACY_DEFAULT_IMAGES {
            let mut config = config();
            config.image = legacy.to_string();
            config.image_id = 42;
            validate(&mut config).unwrap();
            assert_eq!(config.image_id, 42);
            assert_eq!(config.image, "");
        }
    }

    #[test]
    fn test_image_id_and_arch_conflict() {
        for arch in [Architecture::Arm, Architecture::X86] {
            let mut config = config();
            config.image_id = 42;
            config.image_arch = arch;
            assert_mutual_exclusion(validate(&mut config), FLAG_IMAGE_ARCH, FLAG_IMAGE_ID);
        }
    }

    #[test]
    fn test_custom_image_checked_before_arch() {
        let mut config = config();
        config.image = "answer".to_string();
        config.image_id = 42;
        config.image_arch = Architecture::Arm;
        match validate(&mut config) {
            Err(HetznerError::MutuallyExclusiveFlags(FLAG_IMAGE, FLAG_IMAGE_ID)) => {}
            other => panic!("Expected image/image-id conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_default_image_assigned() {
        let mut config = config();
        validate(&mut config).unwrap();
        assert_eq!(config.image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_image_id_keeps_image_empty() {
        let mut config = config();
        config.image_id = 79871865169581;
        validate(&mut config).unwrap();
        assert_eq!(config.image, "");
        assert_eq!(config.image_id, 79871865169581);
    }

    #[test]
    fn test_user_data_conflict() {
        let mut config = config();
        config.user_data = "#cloud-config".to_string();
        config.user_data_file = "/tmp/cloud-init.yaml".to_string();
        assert_mutual_exclusion(validate(&mut config), FLAG_USER_DATA, FLAG_USER_DATA_FILE);
    }

    #[test]
    fn test_placement_group_conflict() {
        let mut config = config();
        config.placement_group = "spread-1".to_string();
        config.auto_spread = true;
        assert_mutual_exclusion(validate(&mut config), FLAG_PLACEMENT_GROUP, FLAG_AUTO_SPREAD);
    }

    #[test]
    fn test_key_id_requires_key_path() {
        let mut config = config();
        config.existing_key_id = 4711;
        let err = validate(&mut config).unwrap_err();
        assert!(matches!(
            err,
            HetznerError::FlagRequires(FLAG_EXISTING_KEY_ID, FLAG_EXISTING_KEY_PATH)
        ));

        let mut config = self::config();
        config.existing_key_id = 4711;
        config.existing_key_path = "/home/me/.ssh/id_ed25519".to_string();
        assert!(validate(&mut config).is_ok());
    }

    #[test]
    fn test_private_network_required() {
        // built by hand, bypassing extraction
        let mut config = config();
        config.disable_public = true;
        config.use_private_network = false;

        let err = validate(&mut config).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, HetznerError::PrivateNetworkRequired(..)));
        assert!(message.contains(FLAG_USE_PRIVATE_NETWORK));
        assert!(message.contains(FLAG_DISABLE_PUBLIC));
    }

    #[test]
    fn test_private_network_satisfied() {
        let mut config = config();
        config.disable_public = true;
        config.use_private_network = true;
        assert!(validate(&mut config).is_ok());
    }
}
