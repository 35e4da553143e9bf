use crate::core::constants::{
    GRID_CELLS, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_GRID_INDEX, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
use crate::util::error::GeoScoreError;
use geo_types::{Rect, coord};

fn check_latitude(latitude: f64) -> Result<(), GeoScoreError> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(GeoScoreError::LatitudeOutOfRange(latitude));
    }
    Ok(())
}

fn check_longitude(longitude: f64) -> Result<(), GeoScoreError> {
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(GeoScoreError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

pub(crate) fn check_grid_index(index: u32) -> Result<(), GeoScoreError> {
    if index > MAX_GRID_INDEX {
        return Err(GeoScoreError::GridIndexOutOfRange(index));
    }
    Ok(())
}

// Truncates toward zero. The axis maximum lands on GRID_CELLS and is clamped
// into the last cell.
fn quantize(value: f64, min: f64, range: f64) -> u32 {
    let normalized = GRID_CELLS as f64 * (value - min) / range;
    (normalized.trunc() as u32).min(MAX_GRID_INDEX)
}

fn cell_edge(index: f64, min: f64, range: f64) -> f64 {
    min + range * (index / GRID_CELLS as f64)
}

/// Converts a WGS84 position to per-axis grid indices.
///
/// Returns `(lat_index, lon_index)`, each in `0..2^26`. A coordinate lying exactly
/// on a cell boundary belongs to the cell whose lower edge it is; a coordinate
/// equal to an axis maximum belongs to the last cell on that axis.
pub fn coordinate_to_grid(latitude: f64, longitude: f64) -> Result<(u32, u32), GeoScoreError> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;

    let lat_index = quantize(latitude, MIN_LATITUDE, LATITUDE_RANGE);
    let lon_index = quantize(longitude, MIN_LONGITUDE, LONGITUDE_RANGE);

    Ok((lat_index, lon_index))
}

pub(crate) fn cell_bounds(lat_index: u32, lon_index: u32) -> Rect<f64> {
    let lat = lat_index as f64;
    let lon = lon_index as f64;

    Rect::new(
        coord! {
            x: cell_edge(lon, MIN_LONGITUDE, LONGITUDE_RANGE),
            y: cell_edge(lat, MIN_LATITUDE, LATITUDE_RANGE),
        },
        coord! {
            x: cell_edge(lon + 1.0, MIN_LONGITUDE, LONGITUDE_RANGE),
            y: cell_edge(lat + 1.0, MIN_LATITUDE, LATITUDE_RANGE),
        },
    )
}

pub(crate) fn cell_center(lat_index: u32, lon_index: u32) -> (f64, f64) {
    let lat = lat_index as f64;
    let lon = lon_index as f64;

    let lat_min = cell_edge(lat, MIN_LATITUDE, LATITUDE_RANGE);
    let lat_max = cell_edge(lat + 1.0, MIN_LATITUDE, LATITUDE_RANGE);
    let lon_min = cell_edge(lon, MIN_LONGITUDE, LONGITUDE_RANGE);
    let lon_max = cell_edge(lon + 1.0, MIN_LONGITUDE, LONGITUDE_RANGE);

    ((lat_min + lat_max) / 2.0, (lon_min + lon_max) / 2.0)
}

/// Returns the bounding rectangle of a grid cell (x = longitude, y = latitude).
pub fn grid_cell_bounds(lat_index: u32, lon_index: u32) -> Result<Rect<f64>, GeoScoreError> {
    check_grid_index(lat_index)?;
    check_grid_index(lon_index)?;
    Ok(cell_bounds(lat_index, lon_index))
}

/// Converts grid indices to the center of their cell as `(latitude, longitude)`.
pub fn grid_to_coordinate(lat_index: u32, lon_index: u32) -> Result<(f64, f64), GeoScoreError> {
    check_grid_index(lat_index)?;
    check_grid_index(lon_index)?;
    Ok(cell_center(lat_index, lon_index))
}
