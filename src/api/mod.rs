pub mod score;
pub mod score_arrow;
pub mod score_csv;
pub mod score_parquet;

pub use score::GeoScore;
pub use score_arrow::{ScoresToArrow, score_schema};
pub use score_csv::{
    CoordinateSource, CsvScoreConfig, CsvToScores, GeometryFormat, csv_to_score_csv,
    score_csv_to_coord_csv,
};
pub use score_parquet::{ScoresToParquet, write_parquet};
