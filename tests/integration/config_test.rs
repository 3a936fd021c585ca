//! Configuration integration tests

use ratio_signal::config::{Config, LogFormat, NotifyMode};
use ratio_signal::signal::{Signal, SignalEngine};
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.notify.mode, NotifyMode::OnChange);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
    assert_eq!(config.signal.lower_threshold, dec!(75));
    assert_eq!(config.signal.upper_threshold, dec!(85));
}

#[test]
fn test_configured_thresholds_drive_engine() {
    let config: Config = toml::from_str(
        r#"
        [signal]
        lower_threshold = 70
        upper_threshold = 80
        "#,
    )
    .unwrap();

    let engine = SignalEngine::new(&config.signal);
    assert_eq!(engine.classify(dec!(82)), Signal::BuySilver);
    assert_eq!(engine.classify(dec!(80)), Signal::None);
    assert_eq!(engine.classify(dec!(69.99)), Signal::BuyGold);
}
