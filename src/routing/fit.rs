//! Fitting a hole frame to a hand-drawn routing polyline.
//!
//! The game positions each hole's 240×80 grid on the course plot with an
//! integer frame. After the routing polyline of a hole has been drawn, the
//! frame is recomputed so the grid is centred on the polyline and aligned
//! with its tee-to-green direction, and the par is derived from the
//! routed length.

use super::VERTEX_CAPACITY;
use crate::error::{JnseError, Result};
use crate::types::frame::radians_to_turn_units;
use crate::types::{Frame, GridPoint, Vector2, HOLE_SCALE};

/// Yards per hole pixel
pub const YARDS_PER_PIXEL: f64 = 8.0 / 3.0;

/// Distance from the grid's centre line to its origin edge, in plot pixels,
/// along the routing direction (half of 240 hole pixels).
const LONGITUDINAL_MARGIN: f64 = 30.0;

/// Same, across the routing direction (half of 80 hole pixels).
const LATERAL_MARGIN: f64 = 10.0;

/// Routed length below which a hole is a par 3.
pub const PAR_3_LIMIT_YARDS: f64 = 240.0;

/// Routed length below which a hole is a par 4; anything longer is a par 5.
pub const PAR_4_LIMIT_YARDS: f64 = 450.0;

/// A fitted frame with the routing re-expressed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingFit {
    /// New hole frame on the course plot
    pub frame: Frame,
    /// Routing vertices in the new frame's pixel grid
    pub vertices: Vec<GridPoint>,
    /// Routed length in yards
    pub length_yards: f64,
    /// Par derived from the length
    pub par: u8,
}

/// Par for a routed length in yards
pub fn par_for_length(yards: f64) -> u8 {
    if yards < PAR_3_LIMIT_YARDS {
        3
    } else if yards < PAR_4_LIMIT_YARDS {
        4
    } else {
        5
    }
}

/// Length of a polyline of hole pixels, in yards
pub fn routed_length_yards(vertices: &[GridPoint]) -> f64 {
    vertices
        .windows(2)
        .map(|w| Vector2::from(w[0]).distance(&Vector2::from(w[1])) * YARDS_PER_PIXEL)
        .sum()
}

/// Fit a new hole frame to `points`.
///
/// `points` are in the pixel grid of the hole's `current` frame, ordered
/// tee to green. At least two points are required and the first and last
/// must not coincide.
pub fn fit_routing(points: &[Vector2], current: Frame) -> Result<RoutingFit> {
    if points.len() < 2 {
        return Err(JnseError::InvalidRoutingInput(format!(
            "routing needs at least 2 points, got {}",
            points.len()
        )));
    }
    if points.len() > VERTEX_CAPACITY {
        return Err(JnseError::CapacityExceeded {
            field: "routing vertices",
            len: points.len(),
            capacity: VERTEX_CAPACITY,
        });
    }

    let plot: Vec<Vector2> = points
        .iter()
        .map(|&p| current.to_parent(p, HOLE_SCALE))
        .collect();

    let first = plot[0];
    let span = plot[plot.len() - 1] - first;
    let d = span.length();
    if d <= 0.0 || !d.is_finite() {
        return Err(JnseError::InvalidRoutingInput(
            "first and last routing points coincide".to_string(),
        ));
    }
    let u = span / d;
    let across = u.perp();

    // The line itself always lies inside the lateral span
    let (vmin, vmax) = plot.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), &p| {
        let offset = (p - first).dot(&across);
        (lo.min(offset), hi.max(offset))
    });

    let origin = first
        + u * (d / 2.0 - LONGITUDINAL_MARGIN)
        + across * ((vmin + vmax) / 2.0 + LATERAL_MARGIN);
    let origin = origin.floor();
    let r = radians_to_turn_units(-u.y.atan2(u.x)).floor() as i32;
    let frame = Frame::new(origin.x, origin.y, r);

    let vertices: Vec<GridPoint> = plot
        .iter()
        .map(|&q| frame.from_parent(q, HOLE_SCALE).floor())
        .collect();

    let length_yards = routed_length_yards(&vertices);
    Ok(RoutingFit {
        frame,
        vertices,
        length_yards,
        par: par_for_length(length_yards),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_par_thresholds() {
        assert_eq!(par_for_length(0.0), 3);
        assert_eq!(par_for_length(239.9), 3);
        assert_eq!(par_for_length(240.0), 4);
        assert_eq!(par_for_length(449.9), 4);
        assert_eq!(par_for_length(450.0), 5);
    }

    #[test]
    fn test_straight_routing() {
        let fit = fit_routing(
            &[Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0)],
            Frame::default(),
        )
        .unwrap();

        assert_eq!(fit.frame, Frame::new(-18, -10, 0));
        assert_eq!(fit.vertices, vec![GridPoint::new(72, 40), GridPoint::new(172, 40)]);
        assert!((fit.length_yards - 800.0 / 3.0).abs() < 1e-9);
        assert_eq!(fit.par, 4);
    }

    #[test]
    fn test_too_few_points() {
        let err = fit_routing(&[Vector2::new(5.0, 5.0)], Frame::default()).unwrap_err();
        assert!(matches!(err, JnseError::InvalidRoutingInput(_)));
    }

    #[test]
    fn test_coincident_endpoints() {
        let p = Vector2::new(5.0, 5.0);
        let err = fit_routing(&[p, Vector2::new(50.0, 9.0), p], Frame::default()).unwrap_err();
        assert!(matches!(err, JnseError::InvalidRoutingInput(_)));
    }

    #[test]
    fn test_too_many_points() {
        let points: Vec<Vector2> = (0..6).map(|i| Vector2::new(i as f64 * 10.0, 0.0)).collect();
        let err = fit_routing(&points, Frame::default()).unwrap_err();
        assert!(matches!(err, JnseError::CapacityExceeded { capacity: 5, .. }));
    }

    #[test]
    fn test_routed_length() {
        let v = [GridPoint::new(0, 0), GridPoint::new(30, 40), GridPoint::new(30, 70)];
        assert!((routed_length_yards(&v) - 80.0 * YARDS_PER_PIXEL).abs() < 1e-9);
    }
}
