/*!
 * Tests for language utilities
 */

use potwai::language_utils::{get_language_name, is_recognized_language_code};

#[test]
fn test_getLanguageName_withMappedCodes_shouldReturnDisplayName() {
    assert_eq!(get_language_name("fr"), "French");
    assert_eq!(get_language_name("zh_CN"), "Simplified Chinese");
    assert_eq!(get_language_name("pt_BR"), "Portuguese (Brazil)");
}

#[test]
fn test_getLanguageName_withUnknownCode_shouldReturnCodeItself() {
    assert_eq!(get_language_name("xx_YY"), "xx_YY");
    assert_eq!(get_language_name(""), "");
}

#[test]
fn test_isRecognizedLanguageCode_shouldCheckPrimarySubtag() {
    assert!(is_recognized_language_code("fr"));
    assert!(is_recognized_language_code("sr@latin"));
    assert!(is_recognized_language_code("zh_CN"));
    assert!(!is_recognized_language_code("qq"));
}
