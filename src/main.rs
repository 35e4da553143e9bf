use geoscore_rs::{GeoScore, GeoScoreError};

fn main() -> Result<(), GeoScoreError> {
    env_logger::init();

    let lat = 13.7220;
    let lon = 100.5252;

    let cell = GeoScore::from_lat_lon(lat, lon)?;
    log::info!("Encoded ({}, {}) at grid ({}, {})", lat, lon, cell.lat_index(), cell.lon_index());

    println!("Score: {}", cell);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!("Grid: lat_index={}, lon_index={}", cell.lat_index(), cell.lon_index());

    let decoded = GeoScore::from_score(cell.score())?;
    println!("Bounds: {:?}", decoded.bounds());
    println!("Polygon: {:?}", decoded.to_polygon());

    Ok(())
}
