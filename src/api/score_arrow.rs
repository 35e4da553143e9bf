use crate::api::score::GeoScore;
use crate::util::error::GeoScoreError;
use arrow_array::{Float64Array, RecordBatch, UInt32Array, UInt64Array};
use arrow_schema::{DataType, Field, Schema};
use rayon::prelude::*;
use std::sync::Arc;

/// Trait for converting collections of [`GeoScore`]s to Arrow.
///
/// Implemented for `[GeoScore]` and `Vec<GeoScore>`.
pub trait ScoresToArrow {
    /// Converts scores to a RecordBatch with score, lat_index, lon_index,
    /// latitude and longitude (cell centers).
    fn to_record_batch(&self) -> Result<RecordBatch, GeoScoreError>;
}

pub fn score_schema() -> Schema {
    Schema::new(vec![
        Field::new("score", DataType::UInt64, false),
        Field::new("lat_index", DataType::UInt32, false),
        Field::new("lon_index", DataType::UInt32, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
    ])
}

impl ScoresToArrow for [GeoScore] {
    fn to_record_batch(&self) -> Result<RecordBatch, GeoScoreError> {
        let centers: Vec<_> = self.par_iter().map(|s| s.center()).collect();

        let scores: UInt64Array = self.iter().map(|s| Some(s.score())).collect();
        let lat_indices: UInt32Array = self.iter().map(|s| Some(s.lat_index())).collect();
        let lon_indices: UInt32Array = self.iter().map(|s| Some(s.lon_index())).collect();
        let latitudes: Float64Array = centers.iter().map(|c| Some(c.y())).collect();
        let longitudes: Float64Array = centers.iter().map(|c| Some(c.x())).collect();

        RecordBatch::try_new(
            Arc::new(score_schema()),
            vec![
                Arc::new(scores),
                Arc::new(lat_indices),
                Arc::new(lon_indices),
                Arc::new(latitudes),
                Arc::new(longitudes),
            ],
        )
        .map_err(|e| GeoScoreError::ArrowError(e.to_string()))
    }
}

impl ScoresToArrow for Vec<GeoScore> {
    fn to_record_batch(&self) -> Result<RecordBatch, GeoScoreError> {
        self.as_slice().to_record_batch()
    }
}
