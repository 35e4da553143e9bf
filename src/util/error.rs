/// Error type for geoscore-rs operations.
#[derive(Debug, PartialEq)]
pub enum GeoScoreError {
    /// Latitude is NaN or outside [-85.05112878, 85.05112878].
    LatitudeOutOfRange(f64),
    /// Longitude is NaN or outside [-180, 180].
    LongitudeOutOfRange(f64),
    /// The score has bits set above position 51.
    ScoreOutOfRange(u64),
    /// A grid index is above 2^26 - 1.
    GridIndexOutOfRange(u32),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// Building an Arrow batch or writing Parquet failed.
    ArrowError(String),
}

impl std::fmt::Display for GeoScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoScoreError::LatitudeOutOfRange(v) => write!(f, "Latitude out of range: {}", v),
            GeoScoreError::LongitudeOutOfRange(v) => write!(f, "Longitude out of range: {}", v),
            GeoScoreError::ScoreOutOfRange(s) => write!(f, "Score out of range: {}", s),
            GeoScoreError::GridIndexOutOfRange(i) => write!(f, "Grid index out of range: {}", i),
            GeoScoreError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeoScoreError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            GeoScoreError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            GeoScoreError::ArrowError(msg) => write!(f, "Arrow error: {}", msg),
        }
    }
}

impl std::error::Error for GeoScoreError {}

impl GeoScoreError {
    /// True for the range-check failures raised by encoding and decoding.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            GeoScoreError::LatitudeOutOfRange(_)
                | GeoScoreError::LongitudeOutOfRange(_)
                | GeoScoreError::ScoreOutOfRange(_)
                | GeoScoreError::GridIndexOutOfRange(_)
        )
    }
}
