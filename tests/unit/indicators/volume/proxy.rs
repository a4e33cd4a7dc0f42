//! Unit tests for the volume proxy

use trendwatch::indicators::volume::calculate_volume_proxy;

#[test]
fn test_volume_is_absolute_change() {
    let proxy = calculate_volume_proxy(&[100.0, 103.0, 101.0], 20);
    assert_eq!(proxy.volume, vec![None, Some(3.0), Some(2.0)]);
}

#[test]
fn test_volume_average_needs_full_window() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + (i % 2) as f64 * 2.0).collect();
    let proxy = calculate_volume_proxy(&closes, 20);
    assert!(proxy.average[..20].iter().all(Option::is_none));
    // every change is 2.0
    for avg in &proxy.average[20..] {
        assert!((avg.unwrap() - 2.0).abs() < 1e-12);
    }
}
