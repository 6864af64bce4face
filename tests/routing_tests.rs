//! Routing frame fitter tests.

mod common;

use jnse::routing::{fit_routing, par_for_length, RoutingEdit, YARDS_PER_PIXEL};
use jnse::types::{HOLE_SCALE, TURN_UNITS};
use jnse::{Course, Frame, GridPoint, HoleRouting, JnseError, RecordCodec, Vector2};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

mod fitting {
    use super::*;

    #[test]
    fn test_straight_routing() {
        let fit = fit_routing(&[v(0.0, 0.0), v(100.0, 0.0)], Frame::default()).unwrap();
        assert_eq!(fit.frame.r, 0);
        assert!((fit.length_yards - 266.67).abs() < 0.01);
        assert_eq!(fit.par, 4);
    }

    #[test]
    fn test_short_routing_is_par_3() {
        let fit = fit_routing(&[v(0.0, 0.0), v(60.0, 0.0)], Frame::default()).unwrap();
        assert_eq!(fit.par, 3);
    }

    #[test]
    fn test_long_routing_is_par_5() {
        let fit = fit_routing(
            &[v(0.0, 0.0), v(90.0, 10.0), v(180.0, 0.0)],
            Frame::default(),
        )
        .unwrap();
        assert_eq!(fit.vertices.len(), 3);
        assert!(fit.length_yards >= 450.0);
        assert_eq!(fit.par, 5);
    }

    #[test]
    fn test_downward_routing_rotation() {
        // Pointing along +y in the plot: a quarter turn clockwise
        let fit = fit_routing(&[v(0.0, 0.0), v(0.0, 100.0)], Frame::default()).unwrap();
        assert_eq!(fit.frame.r, -150);
        assert_eq!(fit.par, 4);
        let first = fit.vertices[0];
        let last = fit.vertices[1];
        assert!((first.x - 72).abs() <= 1 && (first.y - 40).abs() <= 1, "{first}");
        assert!((last.x - 172).abs() <= 1 && (last.y - 40).abs() <= 1, "{last}");
    }

    #[test]
    fn test_vertices_follow_the_polyline() {
        let current = Frame::new(12, -7, 85);
        let points = [v(10.0, 40.0), v(120.0, 20.0), v(220.0, 50.0)];
        let fit = fit_routing(&points, current).unwrap();

        // Each fitted vertex maps back onto the plot within a pixel of the
        // original point.
        for (p, q) in points.iter().zip(&fit.vertices) {
            let original = current.to_parent(*p, HOLE_SCALE);
            let refit = fit.frame.to_parent(Vector2::from(*q), HOLE_SCALE);
            assert!(original.distance(&refit) < 1.0, "{original} vs {refit}");
        }
    }

    #[test]
    fn test_fitted_routing_is_centred_in_grid() {
        let fit = fit_routing(&[v(0.0, 0.0), v(100.0, 0.0)], Frame::new(50, 50, 0)).unwrap();
        let first = fit.vertices[0];
        let last = fit.vertices[1];
        assert_eq!(first.y, last.y);
        assert_eq!((first.x + last.x) / 2, 122);
    }

    #[test]
    fn test_rotation_within_half_turn() {
        for angle in (0..12).map(|k| k as f64 * std::f64::consts::PI / 6.0) {
            let end = v(100.0 * angle.cos(), 100.0 * angle.sin());
            let fit = fit_routing(&[v(0.0, 0.0), end], Frame::default()).unwrap();
            assert!(fit.frame.r.abs() as f64 <= TURN_UNITS / 2.0, "r = {}", fit.frame.r);
        }
    }

    #[test]
    fn test_length_uses_floored_vertices() {
        let fit = fit_routing(&[v(0.0, 0.0), v(37.0, 0.0)], Frame::default()).unwrap();
        let dx = (fit.vertices[1].x - fit.vertices[0].x) as f64;
        assert!((fit.length_yards - dx * YARDS_PER_PIXEL).abs() < 1e-9);
        assert_eq!(fit.par, par_for_length(fit.length_yards));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            fit_routing(&[], Frame::default()),
            Err(JnseError::InvalidRoutingInput(_))
        ));
        assert!(matches!(
            fit_routing(&[v(3.0, 3.0), v(3.0, 3.0)], Frame::default()),
            Err(JnseError::InvalidRoutingInput(_))
        ));
    }
}

mod editing {
    use super::*;

    #[test]
    fn test_single_point_clears_polyline_only() {
        let mut routing = HoleRouting {
            par: 4,
            frame: Frame::new(10, 20, 30),
            vertices: vec![GridPoint::new(5, 40), GridPoint::new(200, 40)],
        };
        let outcome = routing.complete_edit(&[v(5.0, 5.0)]).unwrap();
        assert_eq!(outcome, RoutingEdit::Cleared);
        assert!(routing.vertices.is_empty());
        assert_eq!(routing.par, 4);
        assert_eq!(routing.frame, Frame::new(10, 20, 30));
    }

    #[test]
    fn test_committed_edit_survives_course_record() {
        let mut course = Course::new();
        course.routings[4]
            .complete_edit(&[v(0.0, 0.0), v(80.0, 30.0), v(170.0, 10.0)])
            .unwrap();
        let routing = course.routings[4].clone();
        assert_eq!(routing.vertices.len(), 3);

        let decoded = Course::decode(&course.encode().unwrap()).unwrap();
        assert_eq!(decoded.routings[4], routing);
        assert_eq!(decoded.total_par(), routing.par as u32);
    }

    #[test]
    fn test_hole_to_plot_follows_committed_frame() {
        let mut course = Course::new();
        course.routings[0]
            .complete_edit(&[v(0.0, 0.0), v(100.0, 0.0)])
            .unwrap();
        let tee = Vector2::from(course.routings[0].vertices[0]);
        let on_plot = course.hole_to_plot(0, tee).unwrap();
        assert!(on_plot.distance(&v(0.0, 0.0)) < 1.0);
    }
}
