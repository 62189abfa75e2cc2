/*!
 * Tests for message configuration
 */

use anyhow::Result;

use ddex_ern::app_config::{MessageConfig, MessageControlType};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = MessageConfig::default();

    assert_eq!(config.language_and_script_code, "en");
    assert_eq!(config.message_control_type, Some(MessageControlType::TestMessage));
    assert_eq!(config.release_profile_version_id.as_deref(), Some("Video"));
    assert_eq!(config.avs_version_id, None);
    assert_eq!(config.default_territory, "Worldwide");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = MessageConfig::default();

    config.language_and_script_code = "12".to_string();
    assert!(config.validate().is_err());
    config.language_and_script_code = "en-US".to_string();
    assert!(config.validate().is_ok());

    config.default_territory = "  ".to_string();
    assert!(config.validate().is_err());
    config.default_territory = "US".to_string();

    config.avs_version_id = Some(String::new());
    assert!(config.validate().is_err());
    config.avs_version_id = Some("4".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_fromJsonFile_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "language_and_script_code": "de", "message_control_type": "LiveMessage" }"#,
    )?;

    let config = MessageConfig::from_json_file(&path)?;

    assert_eq!(config.language_and_script_code, "de");
    assert_eq!(config.message_control_type, Some(MessageControlType::LiveMessage));
    assert_eq!(config.default_territory, "Worldwide");
    Ok(())
}

#[test]
fn test_fromJsonFile_withUnknownControlType_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{ "message_control_type": "DryRun" }"#)?;

    assert!(MessageConfig::from_json_file(&path).is_err());
    Ok(())
}

#[test]
fn test_fromJsonFile_withMissingFile_shouldFail() {
    assert!(MessageConfig::from_json_file("/nonexistent/ddex/config.json").is_err());
}

#[test]
fn test_messageControlType_shouldRoundTripThroughStrings() {
    assert_eq!(MessageControlType::LiveMessage.to_string(), "LiveMessage");
    assert_eq!(
        "TestMessage".parse::<MessageControlType>().unwrap(),
        MessageControlType::TestMessage
    );
    assert!("live".parse::<MessageControlType>().is_err());
}
