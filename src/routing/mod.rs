//! Hole routing: the tee-to-green polyline of each hole, the hole's frame
//! on the course plot and its par.

pub mod fit;

pub use fit::{fit_routing, par_for_length, RoutingFit, YARDS_PER_PIXEL};

use crate::error::{JnseError, Result};
use crate::types::{Frame, GridPoint, Vector2};

/// Maximum routing vertices per hole.
pub const VERTEX_CAPACITY: usize = 5;

/// Routing summary of one hole, as stored in the course record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoleRouting {
    /// Par (3, 4 or 5 once routed; 0 when never set)
    pub par: u8,
    /// Position and rotation of the hole grid on the course plot
    pub frame: Frame,
    /// Routing polyline in hole pixels (at most 5 vertices)
    pub vertices: Vec<GridPoint>,
}

/// What [`HoleRouting::complete_edit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingEdit {
    /// A new frame, polyline and par were committed
    Committed(RoutingFit),
    /// The points could not be fitted; the polyline was cleared and the
    /// frame and par kept
    Cleared,
}

impl HoleRouting {
    /// Routing polyline as floating-point hole pixels
    pub fn points(&self) -> Vec<Vector2> {
        self.vertices.iter().map(|&v| v.into()).collect()
    }

    /// Finish a routing edit with the points the user placed, given in the
    /// current frame's hole pixels.
    ///
    /// Either the fitted frame, vertices and par are all committed, or (for
    /// fewer than two usable points) the vertex list is cleared. Any other
    /// error leaves the routing untouched.
    pub fn complete_edit(&mut self, points: &[Vector2]) -> Result<RoutingEdit> {
        match fit_routing(points, self.frame) {
            Ok(fit) => {
                self.frame = fit.frame;
                self.vertices = fit.vertices.clone();
                self.par = fit.par;
                Ok(RoutingEdit::Committed(fit))
            }
            Err(JnseError::InvalidRoutingInput(reason)) => {
                log::debug!("routing cleared: {reason}");
                self.vertices.clear();
                Ok(RoutingEdit::Cleared)
            }
            Err(e) => Err(e),
        }
    }

    /// Re-fit the frame to the stored polyline
    pub fn refit(&mut self) -> Result<RoutingEdit> {
        let points = self.points();
        self.complete_edit(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_edit_commits_everything() {
        let mut routing = HoleRouting::default();
        let outcome = routing
            .complete_edit(&[Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0)])
            .unwrap();

        assert!(matches!(outcome, RoutingEdit::Committed(_)));
        assert_eq!(routing.par, 4);
        assert_eq!(routing.frame, Frame::new(-18, -10, 0));
        assert_eq!(routing.vertices.len(), 2);
    }

    #[test]
    fn test_single_point_clears_vertices_only() {
        let mut routing = HoleRouting {
            par: 5,
            frame: Frame::new(3, 4, 5),
            vertices: vec![GridPoint::new(1, 1), GridPoint::new(9, 9)],
        };
        let outcome = routing.complete_edit(&[Vector2::new(10.0, 10.0)]).unwrap();

        assert_eq!(outcome, RoutingEdit::Cleared);
        assert!(routing.vertices.is_empty());
        assert_eq!(routing.par, 5);
        assert_eq!(routing.frame, Frame::new(3, 4, 5));
    }

    #[test]
    fn test_capacity_error_leaves_routing_untouched() {
        let mut routing = HoleRouting {
            par: 3,
            frame: Frame::new(1, 2, 3),
            vertices: vec![GridPoint::new(0, 0), GridPoint::new(40, 0)],
        };
        let before = routing.clone();
        let points: Vec<Vector2> = (0..6).map(|i| Vector2::new(i as f64 * 20.0, 0.0)).collect();

        assert!(routing.complete_edit(&points).is_err());
        assert_eq!(routing, before);
    }

    #[test]
    fn test_refit_is_stable_for_fitted_routing() {
        let mut routing = HoleRouting::default();
        routing
            .complete_edit(&[Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0)])
            .unwrap();
        let fitted = routing.clone();

        routing.refit().unwrap();
        assert_eq!(routing, fitted);
    }
}
