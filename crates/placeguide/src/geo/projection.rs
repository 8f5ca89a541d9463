use std::f64::consts::PI;

use placeguide_data::Coordinates;

/// Pixel size of one Web Mercator tile at zoom 0.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator projection.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// A position in Web Mercator world pixels at a given zoom.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Project WGS84 coordinates into Web Mercator world pixels.
///
/// Latitudes beyond the projection limit are clamped. `x` grows east and `y`
/// grows south, both in `[0, TILE_SIZE * 2^zoom]`.
#[must_use]
pub fn project(coords: Coordinates, zoom: u8) -> WorldPoint {
    let scale = TILE_SIZE * f64::from(1u32 << zoom.min(30));
    let lat = coords.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (coords.lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    WorldPoint { x, y }
}

/// A pin's placement inside the map viewport, in percent from the top-left corner.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinPosition {
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Bounding box of a set of coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl MapBounds {
    /// Smallest box holding every point, or `None` for an empty input.
    pub fn from_coordinates<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        coords.into_iter().fold(None, |bounds, c| {
            Some(match bounds {
                None => Self {
                    min_lat: c.lat,
                    max_lat: c.lat,
                    min_lng: c.lng,
                    max_lng: c.lng,
                },
                Some(b) => Self {
                    min_lat: b.min_lat.min(c.lat),
                    max_lat: b.max_lat.max(c.lat),
                    min_lng: b.min_lng.min(c.lng),
                    max_lng: b.max_lng.max(c.lng),
                },
            })
        })
    }

    #[must_use]
    pub fn contains(&self, coords: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&coords.lat)
            && (self.min_lng..=self.max_lng).contains(&coords.lng)
    }

    /// Position of `coords` inside the box after projection, each axis in `[0, 1]`.
    ///
    /// A degenerate axis (every point on one line) places pins at its middle.
    #[must_use]
    pub fn relative_position(&self, coords: Coordinates) -> (f64, f64) {
        let top_left = project(Coordinates::new(self.max_lat, self.min_lng), 0);
        let bottom_right = project(Coordinates::new(self.min_lat, self.max_lng), 0);
        let point = project(coords, 0);

        let axis = |value: f64, start: f64, end: f64| {
            let span = end - start;
            if span.abs() < f64::EPSILON {
                0.5
            } else {
                ((value - start) / span).clamp(0.0, 1.0)
            }
        };

        (
            axis(point.x, top_left.x, bottom_right.x),
            axis(point.y, top_left.y, bottom_right.y),
        )
    }

    /// Percent placement of `coords` inside a viewport with `padding_pct` kept clear on every edge.
    #[must_use]
    pub fn pin_position(&self, coords: Coordinates, padding_pct: f64) -> PinPosition {
        let (x, y) = self.relative_position(coords);
        let usable = 100.0 - 2.0 * padding_pct;
        PinPosition {
            left_pct: padding_pct + x * usable,
            top_pct: padding_pct + y * usable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin_is_world_center() {
        let p = project(Coordinates::new(0.0, 0.0), 0);
        assert!((p.x - 128.0).abs() < 1e-9);
        assert!((p.y - 128.0).abs() < 1e-9);

        let p = project(Coordinates::new(0.0, 0.0), 2);
        assert!((p.x - 512.0).abs() < 1e-9);
        assert!((p.y - 512.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_axes() {
        let west = project(Coordinates::new(0.0, -180.0), 0);
        let east = project(Coordinates::new(0.0, 180.0), 0);
        assert!(west.x.abs() < 1e-9);
        assert!((east.x - TILE_SIZE).abs() < 1e-9);

        let north = project(Coordinates::new(60.0, 0.0), 0);
        let south = project(Coordinates::new(-60.0, 0.0), 0);
        assert!(north.y < 128.0 && south.y > 128.0);
        assert!(((128.0 - north.y) - (south.y - 128.0)).abs() < 1e-9);
    }

    #[test]
    fn test_project_clamps_poles() {
        let p = project(Coordinates::new(90.0, 0.0), 0);
        assert!(p.y.is_finite());
        assert!(p.y.abs() < 1e-3);
    }

    #[test]
    fn test_bounds_from_coordinates() {
        assert!(MapBounds::from_coordinates(Vec::new()).is_none());

        let bounds = MapBounds::from_coordinates([
            Coordinates::new(34.5, -120.2),
            Coordinates::new(34.7, -119.2),
            Coordinates::new(34.4, -120.0),
        ])
        .unwrap();
        assert_eq!(bounds.min_lat, 34.4);
        assert_eq!(bounds.max_lat, 34.7);
        assert_eq!(bounds.min_lng, -120.2);
        assert_eq!(bounds.max_lng, -119.2);
        assert!(bounds.contains(Coordinates::new(34.5, -119.5)));
        assert!(!bounds.contains(Coordinates::new(35.0, -119.5)));
    }

    #[test]
    fn test_relative_position_corners() {
        let bounds = MapBounds::from_coordinates([
            Coordinates::new(34.0, -121.0),
            Coordinates::new(35.0, -119.0),
        ])
        .unwrap();

        let (x, y) = bounds.relative_position(Coordinates::new(35.0, -121.0));
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);

        let (x, y) = bounds.relative_position(Coordinates::new(34.0, -119.0));
        assert!((x - 1.0).abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_is_centered() {
        let c = Coordinates::new(34.6, -120.1);
        let bounds = MapBounds::from_coordinates([c]).unwrap();
        assert_eq!(bounds.relative_position(c), (0.5, 0.5));

        let pin = bounds.pin_position(c, 10.0);
        assert!((pin.left_pct - 50.0).abs() < 1e-9);
        assert!((pin.top_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_pin_position_respects_padding() {
        let bounds = MapBounds::from_coordinates([
            Coordinates::new(34.0, -121.0),
            Coordinates::new(35.0, -119.0),
        ])
        .unwrap();
        let pin = bounds.pin_position(Coordinates::new(35.0, -121.0), 10.0);
        assert!((pin.left_pct - 10.0).abs() < 1e-9);
        assert!((pin.top_pct - 10.0).abs() < 1e-9);

        let pin = bounds.pin_position(Coordinates::new(34.0, -119.0), 10.0);
        assert!((pin.left_pct - 90.0).abs() < 1e-9);
        assert!((pin.top_pct - 90.0).abs() < 1e-9);
    }
}
