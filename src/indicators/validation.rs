//! Input checks run before any recurrence sees the data.

use crate::indicators::error::IndicatorError;
use crate::models::indicators::PricePoint;

pub fn validate_close(index: usize, close: f64) -> Result<(), IndicatorError> {
    if !close.is_finite() {
        return Err(IndicatorError::NonFiniteClose { index });
    }
    if close <= 0.0 {
        return Err(IndicatorError::NonPositiveClose { index, close });
    }
    Ok(())
}

pub fn validate_points(points: &[PricePoint]) -> Result<(), IndicatorError> {
    for (index, point) in points.iter().enumerate() {
        validate_close(index, point.close)?;
        if index > 0 && point.timestamp <= points[index - 1].timestamp {
            return Err(IndicatorError::OutOfOrder { index });
        }
    }
    Ok(())
}

/// Keeps points with a valid close whose timestamp is strictly after the last
/// kept point.
pub fn sanitize_points(points: Vec<PricePoint>) -> Vec<PricePoint> {
    let mut kept: Vec<PricePoint> = Vec::with_capacity(points.len());
    for (index, point) in points.into_iter().enumerate() {
        if validate_close(index, point.close).is_err() {
            continue;
        }
        if let Some(last) = kept.last() {
            if point.timestamp <= last.timestamp {
                continue;
            }
        }
        kept.push(point);
    }
    kept
}

pub fn validate_period(name: &'static str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { name });
    }
    Ok(())
}
