use crate::core::bits::{deinterleave, interleave};
use crate::core::constants::MAX_SCORE;
use crate::core::geometry::create_cell_polygon;
use crate::core::grid::{cell_bounds, cell_center, check_grid_index, coordinate_to_grid};
use crate::util::coord::Coordinate;
use crate::util::error::GeoScoreError;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated 52-bit geo score and the grid cell it names.
///
/// Ordering follows the score, which is the Z-order of the cells, so sorting
/// `GeoScore`s groups nearby cells together.
///
/// Serializes as the bare integer score.
///
/// # Example
///
/// ```
/// use geoscore_rs::GeoScore;
///
/// # fn main() -> Result<(), geoscore_rs::GeoScoreError> {
/// // (lon, lat) tuples, like geo_types points
/// let score = GeoScore::from_point(&(100.5252, 13.7220))?;
/// assert_eq!(score.score(), 3962257306574459);
///
/// let center = score.center();
/// assert!((center.y() - 13.722).abs() < 1e-5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct GeoScore {
    score: u64,
    lat_index: u32,
    lon_index: u32,
}

impl GeoScore {
    /// Create a GeoScore from an explicit latitude and longitude.
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Result<Self, GeoScoreError> {
        let (lat_index, lon_index) = coordinate_to_grid(latitude, longitude)?;
        Ok(Self {
            score: interleave(lat_index, lon_index),
            lat_index,
            lon_index,
        })
    }

    /// Create a GeoScore from anything implementing [`Coordinate`].
    ///
    /// # Example
    /// ```
    /// use geoscore_rs::GeoScore;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geoscore_rs::GeoScoreError> {
    /// let from_tuple = GeoScore::from_point(&(-0.1278, 51.5074))?;
    /// let from_point = GeoScore::from_point(&Point::new(-0.1278, 51.5074))?;
    /// assert_eq!(from_tuple, from_point);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point(coord: &impl Coordinate) -> Result<Self, GeoScoreError> {
        Self::from_lat_lon(coord.latitude(), coord.longitude())
    }

    /// Wrap an existing score, rejecting anything wider than 52 bits.
    pub fn from_score(score: u64) -> Result<Self, GeoScoreError> {
        if score > MAX_SCORE {
            return Err(GeoScoreError::ScoreOutOfRange(score));
        }
        let (lat_index, lon_index) = deinterleave(score);
        Ok(Self {
            score,
            lat_index,
            lon_index,
        })
    }

    pub fn from_grid(lat_index: u32, lon_index: u32) -> Result<Self, GeoScoreError> {
        check_grid_index(lat_index)?;
        check_grid_index(lon_index)?;
        Ok(Self {
            score: interleave(lat_index, lon_index),
            lat_index,
            lon_index,
        })
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lat_index(&self) -> u32 {
        self.lat_index
    }

    pub fn lon_index(&self) -> u32 {
        self.lon_index
    }

    /// Center of the cell as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        let (lat, lon) = cell_center(self.lat_index, self.lon_index);
        Point::new(lon, lat)
    }

    pub fn latitude(&self) -> f64 {
        self.center().y()
    }

    pub fn longitude(&self) -> f64 {
        self.center().x()
    }

    pub fn bounds(&self) -> Rect<f64> {
        cell_bounds(self.lat_index, self.lon_index)
    }

    /// Converts this cell to a rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        create_cell_polygon(&self.bounds())
    }

    /// Whether `coord` encodes to this cell.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        coordinate_to_grid(coord.latitude(), coord.longitude())
            .is_ok_and(|indices| indices == (self.lat_index, self.lon_index))
    }
}

impl TryFrom<u64> for GeoScore {
    type Error = GeoScoreError;

    fn try_from(score: u64) -> Result<Self, Self::Error> {
        Self::from_score(score)
    }
}

impl From<GeoScore> for u64 {
    fn from(score: GeoScore) -> Self {
        score.score
    }
}

impl fmt::Display for GeoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

impl FromStr for GeoScore {
    type Err = GeoScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let score: u64 = trimmed.parse().map_err(|_| {
            GeoScoreError::CsvError(format!("Invalid score: '{}'", trimmed))
        })?;
        Self::from_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{decode, encode};
    use crate::core::constants::{MAX_GRID_INDEX, MIN_LATITUDE, MIN_LONGITUDE};

    #[test]
    fn test_from_lat_lon_matches_encode() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_lat_lon(51.5074, -0.1278)?;
        assert_eq!(gs.score(), encode(51.5074, -0.1278)?);
        assert_eq!(gs.score(), 2163557714755072);
        Ok(())
    }

    #[test]
    fn test_from_point_tuple_is_lon_lat() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_point(&(151.2093, -33.8688))?;
        assert_eq!(gs.score(), 3252046221964352);
        Ok(())
    }

    #[test]
    fn test_center_matches_decode() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_score(3962257306574459)?;
        let (lat, lon) = decode(gs.score())?;
        assert_eq!(gs.latitude(), lat);
        assert_eq!(gs.longitude(), lon);
        Ok(())
    }

    #[test]
    fn test_from_score_rejects_wide_scores() {
        assert_eq!(
            GeoScore::from_score(MAX_SCORE + 1),
            Err(GeoScoreError::ScoreOutOfRange(MAX_SCORE + 1))
        );
    }

    #[test]
    fn test_from_grid() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_grid(0, 0)?;
        assert_eq!(gs.score(), 0);
        assert!(gs.contains(&(MIN_LONGITUDE, MIN_LATITUDE)));

        let gs = GeoScore::from_grid(MAX_GRID_INDEX, MAX_GRID_INDEX)?;
        assert_eq!(gs.score(), MAX_SCORE);

        assert!(GeoScore::from_grid(MAX_GRID_INDEX + 1, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_indices_survive_score_round_trip() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_lat_lon(35.6895, 139.6917)?;
        let restored = GeoScore::from_score(gs.score())?;
        assert_eq!(gs, restored);
        assert_eq!(restored.lat_index(), gs.lat_index());
        assert_eq!(restored.lon_index(), gs.lon_index());
        Ok(())
    }

    #[test]
    fn test_contains_original_point() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_point(&(2.3488, 48.8534))?;
        assert!(gs.contains(&(2.3488, 48.8534)));
        assert!(gs.contains(&gs.center()));
        assert!(!gs.contains(&(2.3489, 48.8534)));
        assert!(!gs.contains(&(2.3488, 95.0)));
        Ok(())
    }

    #[test]
    fn test_polygon_matches_bounds() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_point(&(16.3707, 48.2064))?;
        let bounds = gs.bounds();
        let polygon = gs.to_polygon();

        assert_eq!(polygon.exterior().coords().count(), 5);
        for c in polygon.exterior().coords() {
            assert!(c.x == bounds.min().x || c.x == bounds.max().x);
            assert!(c.y == bounds.min().y || c.y == bounds.max().y);
        }
        Ok(())
    }

    #[test]
    fn test_ordering_follows_score() -> Result<(), GeoScoreError> {
        let mut scores = vec![
            GeoScore::from_score(3)?,
            GeoScore::from_score(1)?,
            GeoScore::from_score(2)?,
        ];
        scores.sort();
        let raw: Vec<u64> = scores.iter().map(|s| s.score()).collect();
        assert_eq!(raw, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_display_and_from_str() -> Result<(), GeoScoreError> {
        let gs: GeoScore = " 3673983964876493 ".parse()?;
        assert_eq!(gs.to_string(), "3673983964876493");
        assert!("not a score".parse::<GeoScore>().is_err());
        assert!("4503599627370496".parse::<GeoScore>().is_err());
        Ok(())
    }

    #[test]
    fn test_serde_as_integer() -> Result<(), GeoScoreError> {
        let gs = GeoScore::from_score(1791873974549446)?;
        let json = serde_json::to_string(&gs).map_err(|e| GeoScoreError::IoError(e.to_string()))?;
        assert_eq!(json, "1791873974549446");

        let back: GeoScore =
            serde_json::from_str(&json).map_err(|e| GeoScoreError::IoError(e.to_string()))?;
        assert_eq!(back, gs);

        let wide: Result<GeoScore, _> = serde_json::from_str("4503599627370496");
        assert!(wide.is_err());
        Ok(())
    }
}
