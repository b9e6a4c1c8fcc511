use broadside::{init_logging, parse_level};
use log::LevelFilter;

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_init_logging_twice_is_harmless() {
    init_logging();
    init_logging();
    log::debug!("logger installed");
}
