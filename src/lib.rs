//! # geoscore-rs
//!
//! Encodes WGS84 positions as the 52-bit interleaved scores used by sorted-set
//! geo indexes, and decodes them back to grid cell centers.
//!
//! Each axis is cut into 2^26 equal cells. The latitude and longitude cell
//! indices are bit-interleaved (a Z-order curve), latitude on the even bits and
//! longitude on the odd bits, so nearby points tend to get nearby scores.
//!
//! ### 1. `encode` / `decode` - Raw Scores
//!
//! ```
//! # fn main() -> Result<(), geoscore_rs::GeoScoreError> {
//! let score = geoscore_rs::encode(51.5074, -0.1278)?;
//! assert_eq!(score, 2163557714755072);
//!
//! let (lat, lon) = geoscore_rs::decode(score)?;
//! assert!((lat - 51.5074).abs() < 1e-5);
//! assert!((lon - -0.1278).abs() < 1e-5);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoScore` - Validated Cells
//!
//! ```
//! use geoscore_rs::GeoScore;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geoscore_rs::GeoScoreError> {
//! let pt = point! { x: 151.2093, y: -33.8688 };
//! let cell = GeoScore::from_point(&pt)?;
//! assert!(cell.contains(&pt));
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToScores` - CSV File Conversion
//!
//! ```no_run
//! use geoscore_rs::{CsvScoreConfig, CsvToScores, GeometryFormat};
//!
//! let config = CsvScoreConfig::from_coords("Longitude", "Latitude")
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "input.csv".to_score_csv("output.csv", &config).unwrap();
//! ```
//!
//! Coordinates outside latitude [-85.05112878, 85.05112878] or longitude
//! [-180, 180] are rejected, as are scores wider than 52 bits.

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    CoordinateSource, CsvScoreConfig, CsvToScores, GeoScore, GeometryFormat, ScoresToArrow,
    ScoresToParquet, csv_to_score_csv, score_csv_to_coord_csv, score_schema, write_parquet,
};
pub use crate::core::{
    CellDims, GRID_BITS, GRID_CELLS, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_GRID_INDEX,
    MAX_LATITUDE, MAX_LONGITUDE, MAX_SCORE, MIN_LATITUDE, MIN_LONGITUDE, SCORE_BITS,
    cell_dimensions, compact_u64_to_u32, coordinate_to_grid, create_cell_polygon, decode,
    decode_many, deinterleave, encode, encode_many, grid_cell_bounds, grid_to_coordinate,
    interleave, spread_u32_to_u64,
};
pub use crate::util::{Coordinate, GeoScoreError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoScoreError> {
        let score = encode(13.7220, 100.5252)?;
        assert_eq!(score, 3962257306574459);

        let cell = GeoScore::from_score(score)?;
        let (lat, lon) = decode(score)?;
        assert_eq!((cell.latitude(), cell.longitude()), (lat, lon));

        let (lat_index, lon_index) = deinterleave(score);
        assert_eq!(coordinate_to_grid(13.7220, 100.5252)?, (lat_index, lon_index));
        assert_eq!(interleave(lat_index, lon_index), score);

        let polygon = cell.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_nearby_points_share_score_prefix() -> Result<(), GeoScoreError> {
        // Two points ~11m apart in Berlin agree on the high bits of their scores.
        let a = encode(52.5244, 13.4105)?;
        let b = encode(52.5245, 13.4106)?;
        assert_ne!(a, b);
        assert_eq!(a >> 30, b >> 30);
        Ok(())
    }

    #[test]
    fn test_geoscore_and_free_functions_agree() -> Result<(), GeoScoreError> {
        let pt = point! { x: 77.2167, y: 28.6667 };
        let cell = GeoScore::from_point(&pt)?;
        assert_eq!(cell.score(), encode(pt.y(), pt.x())?);
        assert_eq!(cell.score(), 3631527070936756);
        Ok(())
    }

    #[test]
    fn test_batch_into_arrow() -> Result<(), GeoScoreError> {
        let scores = encode_many(&[(27.7017, 85.3206), (40.7128, -74.0060)])?;
        let cells = scores
            .into_iter()
            .map(GeoScore::from_score)
            .collect::<Result<Vec<_>, _>>()?;

        let batch = cells.to_record_batch()?;
        assert_eq!(batch.num_rows(), 2);
        Ok(())
    }

    #[test]
    fn test_round_trip_bound_matches_cell_dimensions() -> Result<(), GeoScoreError> {
        let dims = cell_dimensions();
        let (lat, lon) = decode(encode(-12.3456789, 45.6789012)?)?;
        assert!((lat - -12.3456789).abs() <= dims.lat_half_height + 1e-12);
        assert!((lon - 45.6789012).abs() <= dims.lon_half_width + 1e-12);
        Ok(())
    }
}
