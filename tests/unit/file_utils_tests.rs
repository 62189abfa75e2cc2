/*!
 * Tests for file utility functions
 */

use anyhow::Result;

use ddex_ern::file_utils::FileManager;
use crate::common;

#[test]
fn test_fileExists_withDirectory_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(temp_dir.path().join("missing.xml")));
    Ok(())
}

#[test]
fn test_ensureDir_withNestedPath_shouldCreateAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

#[test]
fn test_writeAtomic_shouldLeaveNoTemporaryFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("message.xml");

    FileManager::write_atomic(&target, b"<ern/>")?;

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())?.collect::<std::io::Result<_>>()?;
    assert_eq!(entries.len(), 1);
    assert_eq!(FileManager::read_to_string(&target)?, "<ern/>");
    Ok(())
}

#[test]
fn test_readToString_withMissingFile_shouldMentionPath() {
    let error = FileManager::read_to_string("/nonexistent/message.xml").unwrap_err();
    assert!(format!("{}", error).contains("message.xml"));
}
