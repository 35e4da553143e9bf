use crate::api::score::GeoScore;
use crate::util::error::GeoScoreError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use wkt::Wkt;

/// For the type of geometry source in the file
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// Configuration for CSV to score conversion.
#[derive(Debug, Clone)]
pub struct CsvScoreConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvScoreConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use geoscore_rs::CsvScoreConfig;
    ///
    /// let config = CsvScoreConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use geoscore_rs::CsvScoreConfig;
    ///
    /// let config = CsvScoreConfig::from_coords("Longitude", "Latitude");
    /// ```
    pub fn from_coords(lon_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the cell polygon in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToScores {
    fn to_score_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvScoreConfig,
    ) -> Result<(), GeoScoreError>;
}

impl<P: AsRef<Path>> CsvToScores for P {
    fn to_score_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvScoreConfig,
    ) -> Result<(), GeoScoreError> {
        csv_to_score_csv(self, output_path, config)
    }
}

fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeoScoreError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeoScoreError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| GeoScoreError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| GeoScoreError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| GeoScoreError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| GeoScoreError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(GeoScoreError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeoScoreError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| GeoScoreError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        GeoScoreError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

// Pushes each point's score once, keeping first-seen order.
fn points_to_scores(
    points: impl IntoIterator<Item = Point<f64>>,
) -> Result<Vec<GeoScore>, GeoScoreError> {
    let mut seen = HashSet::new();
    let mut scores = Vec::new();
    for pt in points {
        let score = GeoScore::from_point(&pt)?;
        if seen.insert(score) {
            scores.push(score);
        }
    }
    Ok(scores)
}

fn geometry_to_scores(geom: Geometry<f64>) -> Result<Vec<GeoScore>, GeoScoreError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![GeoScore::from_point(&pt)?]),
        Geometry::MultiPoint(mp) => points_to_scores(mp.0),
        Geometry::LineString(line) => points_to_scores(line.points()),
        Geometry::MultiLineString(mls) => {
            points_to_scores(mls.0.iter().flat_map(|line| line.points()))
        }
        Geometry::Polygon(poly) => match poly.centroid() {
            Some(centroid) => Ok(vec![GeoScore::from_point(&centroid)?]),
            None => {
                log::warn!("Skipping empty polygon");
                Ok(vec![])
            }
        },
        Geometry::MultiPolygon(mp) => {
            let centroids: Vec<Point<f64>> = mp.0.iter().filter_map(|p| p.centroid()).collect();
            if centroids.len() < mp.0.len() {
                log::warn!("Skipping {} empty polygon(s)", mp.0.len() - centroids.len());
            }
            points_to_scores(centroids)
        }
        Geometry::GeometryCollection(gc) => {
            let mut all_scores = Vec::new();
            for g in gc.0 {
                all_scores.extend(geometry_to_scores(g)?);
            }
            Ok(all_scores)
        }
        _ => Err(GeoScoreError::GeometryParseError(
            "Unsupported geometry type".to_string(),
        )),
    }
}

fn parse_axis(value: Option<&str>, name: &str, idx: usize) -> Result<f64, GeoScoreError> {
    let raw = value
        .ok_or_else(|| GeoScoreError::CsvError(format!("Missing {} column at index {}", name, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| GeoScoreError::CsvError(format!("Invalid {}: '{}'", name, raw)))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, GeoScoreError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| GeoScoreError::CsvError(format!("Column '{}' not found", name)))
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with geometry or coordinate columns to a CSV file with scores.
///
/// Streams output to minimize memory usage for large files. The output starts
/// with a `score` column (and `cell_geometry` when requested) followed by the
/// input columns that were not consumed or excluded.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use geoscore_rs::{csv_to_score_csv, CsvScoreConfig};
///
/// let config = CsvScoreConfig::new("Geo Shape").exclude(vec!["Geo Point".into()]);
///
/// csv_to_score_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use geoscore_rs::{csv_to_score_csv, CsvScoreConfig};
///
/// let config = CsvScoreConfig::from_coords("Longitude", "Latitude");
///
/// csv_to_score_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_score_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvScoreConfig,
) -> Result<(), GeoScoreError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| GeoScoreError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| GeoScoreError::CsvError(e.to_string()))?
        .clone();

    // Source columns are always dropped from the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col)?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = column_index(&headers, lon_column)?;
            let lat_idx = column_index(&headers, lat_column)?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| GeoScoreError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["score"];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| GeoScoreError::CsvError(e.to_string()))?;

    let mut rows_in = 0usize;
    let mut rows_out = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| GeoScoreError::CsvError(e.to_string()))?;
        rows_in += 1;

        let scores = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    GeoScoreError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                geometry_to_scores(parse_geometry(geom_str)?)?
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon = parse_axis(record.get(*lon_idx), "longitude", *lon_idx)?;
                let lat = parse_axis(record.get(*lat_idx), "latitude", *lat_idx)?;
                vec![GeoScore::from_lat_lon(lat, lon)?]
            }
        };

        for score in scores {
            let mut row: Vec<String> = vec![score.to_string()];

            if let Some(format) = config.include_cell_geometry {
                let polygon = score.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| GeoScoreError::CsvError(e.to_string()))?;
            rows_out += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| GeoScoreError::CsvError(e.to_string()))?;

    log::debug!(
        "Scored {}: {} input rows, {} output rows",
        csv_path.display(),
        rows_in,
        rows_out
    );

    Ok(())
}

/// Decodes a score column into `latitude` and `longitude` cell-center columns.
///
/// All input columns are kept; the two decoded columns are appended.
///
/// ```no_run
/// use geoscore_rs::score_csv_to_coord_csv;
///
/// score_csv_to_coord_csv("scored.csv", "decoded.csv", "score").unwrap();
/// ```
pub fn score_csv_to_coord_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    score_column: &str,
) -> Result<(), GeoScoreError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| GeoScoreError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| GeoScoreError::CsvError(e.to_string()))?
        .clone();
    let score_idx = column_index(&headers, score_column)?;

    let out_file = File::create(output_path).map_err(|e| GeoScoreError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = headers.iter().collect();
    header_row.push("latitude");
    header_row.push("longitude");
    writer
        .write_record(&header_row)
        .map_err(|e| GeoScoreError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| GeoScoreError::CsvError(e.to_string()))?;

        let raw = record.get(score_idx).ok_or_else(|| {
            GeoScoreError::CsvError(format!("Missing score column at index {}", score_idx))
        })?;
        let score: GeoScore = raw.parse()?;
        let center = score.center();

        let mut row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        row.push(center.y().to_string());
        row.push(center.x().to_string());
        writer
            .write_record(&row)
            .map_err(|e| GeoScoreError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| GeoScoreError::CsvError(e.to_string()))?;

    log::debug!("Decoded {} rows from {}", rows, csv_path.display());

    Ok(())
}
