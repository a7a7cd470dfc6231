//! Conversions between global coordinates and local grid cells.

use shark_habitat_core::{wrap_longitude, GeoOffset, GeoPoint, GridDimensions, MAX_LATITUDE};

/// Affine mapping between the local grid and the globe.
///
/// The grid spans `span_degrees` of latitude and longitude centred on
/// `origin`. Row 0 is the northern edge of the span and columns grow eastward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapping {
    origin: GeoPoint,
    size: usize,
    span_degrees: f64,
}

impl GridMapping {
    /// Creates a mapping centred on `origin`.
    #[must_use]
    pub const fn new(origin: GeoPoint, dimensions: GridDimensions, span_degrees: f64) -> Self {
        Self {
            origin,
            size: dimensions.size(),
            span_degrees,
        }
    }

    /// Position the grid is centred on.
    #[must_use]
    pub const fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Angular width of a single cell.
    #[must_use]
    pub fn degrees_per_cell(&self) -> f64 {
        self.span_degrees / self.size as f64
    }

    /// Converts a global position into the `(row, column)` of the cell containing it.
    /// Positions outside the span are clamped onto the nearest edge cell.
    #[must_use]
    pub fn to_grid(&self, point: GeoPoint) -> (usize, usize) {
        let half_span = self.span_degrees / 2.0;
        let size = self.size as f64;
        let last = size - 1.0;

        let latitude_delta = point.latitude() - self.origin.latitude();
        let longitude_delta = wrap_longitude(point.longitude() - self.origin.longitude());
        let normalized_latitude = (latitude_delta + half_span) / self.span_degrees;
        let normalized_longitude = (longitude_delta + half_span) / self.span_degrees;

        let row = (last - (normalized_latitude * size).trunc()).clamp(0.0, last);
        let column = (normalized_longitude * size).trunc().clamp(0.0, last);
        (row as usize, column as usize)
    }

    /// Converts a cell into the global position of its centre. Cells past a
    /// pole are reported on the pole.
    #[must_use]
    pub fn to_geo(&self, row: usize, column: usize) -> GeoPoint {
        let half_span = self.span_degrees / 2.0;
        let size = self.size as f64;

        let normalized_longitude = (column as f64 + 0.5) / size;
        let normalized_latitude = 1.0 - (row as f64 + 0.5) / size;
        let offset = GeoOffset::new(
            normalized_latitude * self.span_degrees - half_span,
            normalized_longitude * self.span_degrees - half_span,
        );
        let shifted = self.origin.offset(offset);
        GeoPoint::new(
            shifted.latitude().clamp(-MAX_LATITUDE, MAX_LATITUDE),
            shifted.longitude(),
        )
        .unwrap_or(self.origin)
    }
}
