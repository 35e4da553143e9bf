use geo_types::Point;

/// Anything that can be read as a WGS84 position.
///
/// `x` is longitude and `y` is latitude, so `(lon, lat)` tuples and
/// `geo_types::Point`s can be passed interchangeably.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn longitude(&self) -> f64 {
        self.x()
    }

    fn latitude(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

impl Coordinate for geo_types::Coord<f64> {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}
