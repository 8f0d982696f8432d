use aina_core::models::{BoundingBox, LatLon, RadiusArea};
use geo::{coord, Distance, Euclidean, Point, Rect};

/// Point containment against a fixed reference area.
///
/// Operates on already-resolved coordinates; antimeridian wraparound and
/// polar distortion are not handled.
pub trait Containment {
    fn contains(&self, point: LatLon) -> bool;

    /// Keep the items whose position lies inside the area, in input order
    fn retain_within<T, F>(&self, items: Vec<T>, position: F) -> Vec<T>
    where
        F: Fn(&T) -> Option<LatLon>,
        Self: Sized,
    {
        items
            .into_iter()
            .filter(|item| position(item).is_some_and(|p| self.contains(p)))
            .collect()
    }
}

impl Containment for BoundingBox {
    /// Inclusive on every edge
    fn contains(&self, point: LatLon) -> bool {
        let rect = to_rect(self);
        let (min, max) = (rect.min(), rect.max());
        point.lon >= min.x && point.lon <= max.x && point.lat >= min.y && point.lat <= max.y
    }
}

impl Containment for RadiusArea {
    /// Straight-line distance in degrees, not geodesic
    fn contains(&self, point: LatLon) -> bool {
        degree_distance(self.center, point) <= self.max_distance_deg
    }
}

/// Euclidean distance between two coordinates, measured in degrees
pub fn degree_distance(a: LatLon, b: LatLon) -> f64 {
    Euclidean.distance(to_point(a), to_point(b))
}

pub fn to_point(p: LatLon) -> Point<f64> {
    Point::new(p.lon, p.lat)
}

pub fn to_rect(bbox: &BoundingBox) -> Rect<f64> {
    Rect::new(
        coord! { x: bbox.lon_min, y: bbox.lat_min },
        coord! { x: bbox.lon_max, y: bbox.lat_max },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aina_core::models::WAIMANALO;

    #[test]
    fn test_bbox_includes_interior_and_edges() {
        let bbox = BoundingBox::default();

        assert!(bbox.contains(LatLon::new(21.34, -157.70)));
        assert!(bbox.contains(LatLon::new(21.32, -157.70)));
        assert!(bbox.contains(LatLon::new(21.36, -157.65)));
        assert!(bbox.contains(LatLon::new(21.32, -157.75)));
    }

    #[test]
    fn test_bbox_excludes_outside() {
        let bbox = BoundingBox::default();

        assert!(!bbox.contains(LatLon::new(21.361, -157.70)));
        assert!(!bbox.contains(LatLon::new(21.34, -157.751)));
        assert!(!bbox.contains(LatLon::new(0.0, 0.0)));
    }

    #[test]
    fn test_radius_threshold() {
        let area = RadiusArea::default();

        assert!(area.contains(WAIMANALO));
        assert!(area.contains(LatLon::new(WAIMANALO.lat + 0.3, WAIMANALO.lon + 0.3)));
        assert!(area.contains(LatLon::new(WAIMANALO.lat, WAIMANALO.lon + 0.49)));
        assert!(!area.contains(LatLon::new(WAIMANALO.lat + 0.51, WAIMANALO.lon)));
        assert!(!area.contains(LatLon::new(WAIMANALO.lat, WAIMANALO.lon - 0.51)));
    }

    #[test]
    fn test_degree_distance_is_pythagorean() {
        let d = degree_distance(LatLon::new(0.0, 0.0), LatLon::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_retain_within_keeps_order() {
        let bbox = BoundingBox::default();
        let points = vec![
            LatLon::new(21.33, -157.70),
            LatLon::new(40.0, -100.0),
            LatLon::new(21.35, -157.66),
        ];

        let kept = bbox.retain_within(points, |p| Some(*p));
        assert_eq!(kept, vec![LatLon::new(21.33, -157.70), LatLon::new(21.35, -157.66)]);
    }
}
