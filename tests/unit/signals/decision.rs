//! Unit tests for the decision table

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trendwatch::config::{RsiBand, SignalThresholds};
use trendwatch::models::signal::SignalClass;
use trendwatch::signals::decision::{
    decide, is_buy, is_sell, matching_rules, GoverningFields, DECISION_TABLE,
};

fn fields(rsi: f64, macd: f64, macd_signal: f64, ema_short: f64, ema_long: f64) -> GoverningFields {
    GoverningFields {
        rsi,
        macd,
        macd_signal,
        ema_short,
        ema_long,
    }
}

#[test]
fn test_table_order_is_buy_then_sell() {
    let outcomes: Vec<SignalClass> = DECISION_TABLE.iter().map(|rule| rule.outcome).collect();
    assert_eq!(outcomes, vec![SignalClass::Buy, SignalClass::Sell]);
}

#[test]
fn test_buy_requires_every_confirmation() {
    let t = SignalThresholds::default();
    assert!(is_buy(&fields(62.0, 1.2, 0.9, 118.0, 110.0), &t));
    // RSI outside band
    assert!(!is_buy(&fields(80.0, 1.2, 0.9, 118.0, 110.0), &t));
    assert!(!is_buy(&fields(45.0, 1.2, 0.9, 118.0, 110.0), &t));
    // MACD bearish
    assert!(!is_buy(&fields(62.0, 0.9, 1.2, 118.0, 110.0), &t));
    // EMA bearish
    assert!(!is_buy(&fields(62.0, 1.2, 0.9, 100.0, 110.0), &t));
    // momentum too small
    assert!(!is_buy(&fields(62.0, 1.0, 0.9995, 118.0, 110.0), &t));
}

#[test]
fn test_sell_requires_every_confirmation() {
    let t = SignalThresholds::default();
    assert!(is_sell(&fields(40.0, -0.5, -0.2, 95.0, 100.0), &t));
    assert!(!is_sell(&fields(20.0, -0.5, -0.2, 95.0, 100.0), &t));
    assert!(!is_sell(&fields(55.0, -0.5, -0.2, 95.0, 100.0), &t));
    assert!(!is_sell(&fields(40.0, -0.2, -0.5, 95.0, 100.0), &t));
    assert!(!is_sell(&fields(40.0, -0.5, -0.2, 105.0, 100.0), &t));
    // momentum too small
    assert!(!is_sell(&fields(40.0, -0.2005, -0.2, 95.0, 100.0), &t));
}

#[test]
fn test_partial_confirmation_holds() {
    let t = SignalThresholds::default();
    // MACD bullish, EMA bearish
    assert_eq!(decide(&fields(50.0, 1.0, 0.5, 95.0, 100.0), &t), SignalClass::Hold);
    // MACD bearish, EMA bullish
    assert_eq!(decide(&fields(50.0, 0.5, 1.0, 105.0, 100.0), &t), SignalClass::Hold);
}

#[test]
fn test_overlap_zone_follows_direction() {
    let t = SignalThresholds::default();
    assert_eq!(decide(&fields(50.0, 1.0, 0.5, 105.0, 100.0), &t), SignalClass::Buy);
    assert_eq!(decide(&fields(50.0, 0.5, 1.0, 95.0, 100.0), &t), SignalClass::Sell);
}

#[test]
fn test_custom_thresholds() {
    let t = SignalThresholds {
        buy_rsi: RsiBand::new(60.0, 90.0),
        sell_rsi: RsiBand::new(10.0, 40.0),
        momentum: 0.5,
    };
    let f = fields(62.0, 1.2, 0.9, 118.0, 110.0);
    // 0.3 separation is below the 0.5 momentum threshold
    assert_eq!(decide(&f, &t), SignalClass::Hold);
    assert_eq!(decide(&fields(62.0, 1.6, 0.9, 118.0, 110.0), &t), SignalClass::Buy);
}

#[test]
fn test_buy_and_sell_never_both_match() {
    let t = SignalThresholds::default();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50_000 {
        let base: f64 = rng.gen_range(1.0..1000.0);
        let f = fields(
            rng.gen_range(0.0..100.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            base * rng.gen_range(0.9..1.1),
            base,
        );
        let matches = matching_rules(&f, &t);
        assert!(matches.len() <= 1, "both rules matched {:?}", f);
        let expected = matches.first().map(|r| r.outcome).unwrap_or(SignalClass::Hold);
        assert_eq!(decide(&f, &t), expected);
    }
}

#[test]
fn test_never_both_match_in_overlap_band() {
    let t = SignalThresholds::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20_000 {
        let f = fields(
            rng.gen_range(45.0..55.0),
            rng.gen_range(-0.01..0.01),
            rng.gen_range(-0.01..0.01),
            rng.gen_range(99.0..101.0),
            rng.gen_range(99.0..101.0),
        );
        assert!(!(is_buy(&f, &t) && is_sell(&f, &t)), "overlap at {:?}", f);
    }
}
