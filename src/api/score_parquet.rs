use crate::api::score::GeoScore;
use crate::api::score_arrow::ScoresToArrow;
use crate::util::error::GeoScoreError;
use arrow_array::RecordBatch;
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::Path;

pub fn write_parquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<(), GeoScoreError> {
    let file = File::create(path).map_err(|e| GeoScoreError::IoError(e.to_string()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .map_err(|e| GeoScoreError::ArrowError(e.to_string()))?;

    writer
        .write(batch)
        .map_err(|e| GeoScoreError::ArrowError(e.to_string()))?;
    writer
        .close()
        .map_err(|e| GeoScoreError::ArrowError(e.to_string()))?;

    log::debug!("Wrote {} scores to parquet", batch.num_rows());
    Ok(())
}

pub trait ScoresToParquet: ScoresToArrow {
    fn to_parquet(&self, path: impl AsRef<Path>) -> Result<(), GeoScoreError>;
}

impl ScoresToParquet for [GeoScore] {
    fn to_parquet(&self, path: impl AsRef<Path>) -> Result<(), GeoScoreError> {
        let batch = self.to_record_batch()?;
        write_parquet(&batch, path)
    }
}

impl ScoresToParquet for Vec<GeoScore> {
    fn to_parquet(&self, path: impl AsRef<Path>) -> Result<(), GeoScoreError> {
        self.as_slice().to_parquet(path)
    }
}
