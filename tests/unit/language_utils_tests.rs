/*!
 * Tests for language code utilities
 */

use ddex_ern::language_utils::{
    get_language_name, validate_language_and_script_code, validate_language_code, LanguageCodeType,
};

#[test]
fn test_validateLanguageCode_withIsoCodes_shouldReturnType() {
    assert_eq!(validate_language_code("en").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("FR").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("deu").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("fre").unwrap(), LanguageCodeType::Part2B);
}

#[test]
fn test_validateLanguageCode_withInvalidCodes_shouldFail() {
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("e").is_err());
    assert!(validate_language_code("english").is_err());
}

#[test]
fn test_validateLanguageAndScriptCode_withSubtags_shouldCheckShape() {
    assert!(validate_language_and_script_code("pt-BR").is_ok());
    assert!(validate_language_and_script_code("zh_Hans").is_ok());
    assert!(validate_language_and_script_code("en-U$").is_err());
}

#[test]
fn test_getLanguageName_shouldUsePrimarySubtag() {
    assert_eq!(get_language_name("en-GB").unwrap(), "English");
    assert_eq!(get_language_name("ger").unwrap(), "German");
    assert!(get_language_name("zz").is_err());
}
