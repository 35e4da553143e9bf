use crate::core::constants::{GRID_CELLS, LATITUDE_RANGE, LONGITUDE_RANGE};

/// Size of one grid cell in degrees.
///
/// Every cell on the grid has the same angular size; the half sizes are the
/// largest distance, per axis, between an encoded coordinate and its decoded
/// cell center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDims {
    pub lat_height: f64,
    pub lon_width: f64,
    pub lat_half_height: f64,
    pub lon_half_width: f64,
}

pub fn cell_dimensions() -> CellDims {
    let cells = GRID_CELLS as f64;
    let lat_height = LATITUDE_RANGE / cells;
    let lon_width = LONGITUDE_RANGE / cells;

    CellDims {
        lat_height,
        lon_width,
        lat_half_height: lat_height / 2.0,
        lon_half_width: lon_width / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_dimensions() {
        let dims = cell_dimensions();

        assert!((dims.lat_half_height - 1.2674e-6).abs() < 1e-9);
        assert!((dims.lon_half_width - 2.6822e-6).abs() < 1e-9);
        assert_eq!(dims.lat_height, dims.lat_half_height * 2.0);
        assert!(dims.lat_half_height < 1e-5 && dims.lon_half_width < 1e-5);
    }
}
