/// Lowest latitude representable on the grid (Web Mercator limit).
pub const MIN_LATITUDE: f64 = -85.05112878;

/// Highest latitude representable on the grid.
pub const MAX_LATITUDE: f64 = 85.05112878;

pub const MIN_LONGITUDE: f64 = -180.0;

pub const MAX_LONGITUDE: f64 = 180.0;

pub const LATITUDE_RANGE: f64 = MAX_LATITUDE - MIN_LATITUDE;

pub const LONGITUDE_RANGE: f64 = MAX_LONGITUDE - MIN_LONGITUDE;

/// Bits of resolution per axis
pub const GRID_BITS: u32 = 26;

/// Number of cells along each axis (2^26)
pub const GRID_CELLS: u32 = 1 << GRID_BITS;

/// Largest valid grid index on either axis
pub const MAX_GRID_INDEX: u32 = GRID_CELLS - 1;

/// Bits in an interleaved score
pub const SCORE_BITS: u32 = 2 * GRID_BITS;

/// Largest valid score; the top 12 bits of a `u64` score are always zero.
pub const MAX_SCORE: u64 = (1u64 << SCORE_BITS) - 1;
