use geo_types::{Polygon, Rect};

/// Builds the closed polygon ring of a grid cell.
pub fn create_cell_polygon(bounds: &Rect<f64>) -> Polygon<f64> {
    bounds.to_polygon()
}
