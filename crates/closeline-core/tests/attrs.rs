// File: crates/closeline-core/tests/attrs.rs
// Purpose: Validate the per-draw visual attribute resolvers.

use closeline_core::{area_gradient, point_radii, Rect, Rgba, LAST_POINT_RADIUS};

const ACCENT: Rgba = Rgba::from_argb(255, 53, 168, 83);

#[test]
fn gradient_is_absent_before_first_layout() {
    assert!(area_gradient(None, ACCENT).is_none());
}

#[test]
fn gradient_binds_to_area_bounds() {
    let area = Rect::from_ltrb(56.0, 24.0, 1000.0, 592.0);
    let g = area_gradient(Some(&area), ACCENT).expect("area known");
    assert_eq!(g.y0, area.top);
    assert_eq!(g.y1, area.bottom);
    assert_eq!(g.stops.len(), 2);
    assert_eq!(g.stops[0].offset, 0.0);
    assert_eq!(g.stops[0].color, ACCENT.with_alpha(77));
    assert_eq!(g.stops[1].offset, 1.0);
    assert_eq!(g.stops[1].color.a, 0);
}

#[test]
fn gradient_follows_resized_area() {
    let before = Rect::from_ltrb(56.0, 24.0, 1000.0, 592.0);
    let after = Rect::from_ltrb(56.0, 24.0, 500.0, 300.0);
    let g0 = area_gradient(Some(&before), ACCENT).unwrap();
    let g1 = area_gradient(Some(&after), ACCENT).unwrap();
    assert_ne!(g0.y1, g1.y1);
}

#[test]
fn radii_mark_only_the_most_recent_point() {
    let radii = point_radii(6);
    assert_eq!(radii.len(), 6);
    assert_eq!(radii[5], LAST_POINT_RADIUS);
    assert!(radii[..5].iter().all(|r| *r == 0.0));
}

#[test]
fn radii_track_series_length() {
    for len in [1usize, 2, 6, 100] {
        let radii = point_radii(len);
        assert_eq!(radii.len(), len);
        assert_eq!(*radii.last().unwrap(), LAST_POINT_RADIUS);
    }
    assert!(point_radii(0).is_empty());
}
