//! Unit tests for engine configuration

use trendwatch::config::{EngineConfig, RsiBand, SignalThresholds};

#[test]
fn test_engine_config_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.macd_fast, 12);
    assert_eq!(config.macd_slow, 26);
    assert_eq!(config.macd_signal, 9);
    assert_eq!(config.ema_short, 9);
    assert_eq!(config.ema_long, 21);
    assert_eq!(config.volume_avg_window, 20);
    assert_eq!(config.thresholds.buy_rsi, RsiBand::new(45.0, 75.0));
    assert_eq!(config.thresholds.sell_rsi, RsiBand::new(25.0, 55.0));
    assert_eq!(config.thresholds.momentum, 0.001);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_period_is_rejected() {
    let config = EngineConfig {
        rsi_period: 0,
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_inverted_band_is_rejected() {
    let thresholds = SignalThresholds {
        buy_rsi: RsiBand::new(75.0, 45.0),
        ..SignalThresholds::default()
    };
    assert!(thresholds.validate().is_err());
}

#[test]
fn test_negative_momentum_is_rejected() {
    let thresholds = SignalThresholds {
        momentum: -0.1,
        ..SignalThresholds::default()
    };
    assert!(thresholds.validate().is_err());
}

#[test]
fn test_rsi_band_is_open() {
    let band = RsiBand::new(45.0, 75.0);
    assert!(!band.contains(45.0));
    assert!(band.contains(45.1));
    assert!(band.contains(74.9));
    assert!(!band.contains(75.0));
}
