/*!
 * Tests for language code utilities
 */

use yattwai::language_utils::{
    get_language_name, language_codes_match, split_language_code, validate_language_code,
};

#[test]
fn test_validate_language_code_withIsoCodes_shouldAccept() {
    assert!(validate_language_code("fr").is_ok());
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("deu").is_ok());
    assert!(validate_language_code("ja").is_ok());
}

#[test]
fn test_validate_language_code_withRegionQualifiers_shouldAccept() {
    assert!(validate_language_code("zh_CN").is_ok());
    assert!(validate_language_code("pt_BR").is_ok());
    assert!(validate_language_code("es_419").is_ok());
    assert!(validate_language_code("pt-BR").is_ok());
}

#[test]
fn test_validate_language_code_withInvalidCodes_shouldReject() {
    assert!(validate_language_code("notalanguage").is_err());
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("f").is_err());
    assert!(validate_language_code("fr_!!").is_err());
}

#[test]
fn test_split_language_code_shouldSeparateBaseAndRegion() {
    assert_eq!(split_language_code("zh_CN"), ("zh", Some("CN")));
    assert_eq!(split_language_code("pt-BR"), ("pt", Some("BR")));
    assert_eq!(split_language_code("fr"), ("fr", None));
}

#[test]
fn test_language_codes_match_shouldIgnoreCaseAndSeparator() {
    assert!(language_codes_match("pt_BR", "pt-br"));
    assert!(language_codes_match("FR", "fr"));
    assert!(!language_codes_match("fr", "de"));
}

#[test]
fn test_get_language_name_withKnownCodes_shouldReturnEnglishNames() {
    assert_eq!(get_language_name("fr"), "French");
    assert_eq!(get_language_name("de"), "German");
}

#[test]
fn test_get_language_name_withRegionQualifier_shouldAppendRegion() {
    assert_eq!(get_language_name("pt_br"), "Portuguese (BR)");
}

#[test]
fn test_get_language_name_withUnknownCode_shouldFallBackToCode() {
    assert_eq!(get_language_name("xx"), "xx");
}
