/*!
 * Tests for configuration resolution
 */

use std::collections::HashMap;
use log::LevelFilter;
use potwai::app_config::{API_KEY_VAR, BASE_URL_VAR, Config, LOG_LEVEL_VAR, LogLevel, TIMEOUT_VAR};
use potwai::errors::ConfigError;

fn lookup(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |name| map.get(name).map(|value| value.to_string())
}

#[test]
fn test_fromLookup_withInvalidTimeout_shouldNameVariable() {
    let result = Config::from_lookup(lookup(&[(API_KEY_VAR, "sk"), (TIMEOUT_VAR, "ten")]));

    match result {
        Err(ConfigError::InvalidValue { name, value, .. }) => {
            assert_eq!(name, TIMEOUT_VAR);
            assert_eq!(value, "ten");
        }
        other => panic!("expected invalid timeout, got {:?}", other),
    }
}

#[test]
fn test_fromLookup_withZeroTimeout_shouldFail() {
    let result = Config::from_lookup(lookup(&[(API_KEY_VAR, "sk"), (TIMEOUT_VAR, "0")]));
    assert!(matches!(result, Err(ConfigError::InvalidValue { name: TIMEOUT_VAR, .. })));
}

#[test]
fn test_fromLookup_withNonHttpBaseUrl_shouldFail() {
    let result = Config::from_lookup(lookup(&[(API_KEY_VAR, "sk"), (BASE_URL_VAR, "ftp://example.com/v1")]));
    assert!(matches!(result, Err(ConfigError::InvalidValue { name: BASE_URL_VAR, .. })));
}

#[test]
fn test_fromLookup_withUnknownLogLevel_shouldFail() {
    let result = Config::from_lookup(lookup(&[(API_KEY_VAR, "sk"), (LOG_LEVEL_VAR, "loud")]));
    assert!(matches!(result, Err(ConfigError::InvalidValue { name: LOG_LEVEL_VAR, .. })));
}

#[test]
fn test_serialize_shouldNotExposeApiKey() {
    let config = Config::from_lookup(lookup(&[(API_KEY_VAR, "sk-very-secret")])).unwrap();
    let json = serde_json::to_string(&config).unwrap();

    assert!(!json.contains("sk-very-secret"));
    assert!(json.contains("\"model\":\"gpt-5-nano\""));
}

#[test]
fn test_logLevel_shouldMapToLevelFilter() {
    assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
    assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
}
