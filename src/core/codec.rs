use crate::core::bits::{deinterleave, interleave};
use crate::core::constants::MAX_SCORE;
use crate::core::grid::{coordinate_to_grid, grid_to_coordinate};
use crate::util::error::GeoScoreError;
use rayon::prelude::*;

/// Encodes a WGS84 position into a 52-bit score.
///
/// # Example
/// ```
/// # fn main() -> Result<(), geoscore_rs::GeoScoreError> {
/// let score = geoscore_rs::encode(13.7220, 100.5252)?;
/// assert_eq!(score, 3962257306574459);
/// # Ok(())
/// # }
/// ```
pub fn encode(latitude: f64, longitude: f64) -> Result<u64, GeoScoreError> {
    let (lat_index, lon_index) = coordinate_to_grid(latitude, longitude)?;
    Ok(interleave(lat_index, lon_index))
}

/// Decodes a score into the `(latitude, longitude)` center of its grid cell.
///
/// Scores with any bit above position 51 are rejected rather than masked.
///
/// # Example
/// ```
/// # fn main() -> Result<(), geoscore_rs::GeoScoreError> {
/// let (lat, lon) = geoscore_rs::decode(3962257306574459)?;
/// assert!((lat - 13.722000686932997).abs() < 1e-6);
/// assert!((lon - 100.52520006895065).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn decode(score: u64) -> Result<(f64, f64), GeoScoreError> {
    if score > MAX_SCORE {
        return Err(GeoScoreError::ScoreOutOfRange(score));
    }
    let (lat_index, lon_index) = deinterleave(score);
    grid_to_coordinate(lat_index, lon_index)
}

/// Encodes `(latitude, longitude)` pairs in parallel.
///
/// Fails on the first coordinate that is out of range.
pub fn encode_many(coords: &[(f64, f64)]) -> Result<Vec<u64>, GeoScoreError> {
    coords
        .par_iter()
        .map(|&(latitude, longitude)| encode(latitude, longitude))
        .collect()
}

/// Decodes scores in parallel into `(latitude, longitude)` pairs.
pub fn decode_many(scores: &[u64]) -> Result<Vec<(f64, f64)>, GeoScoreError> {
    scores.par_iter().map(|&score| decode(score)).collect()
}
