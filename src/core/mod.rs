pub mod bits;
pub mod codec;
pub mod constants;
pub mod dimensions;
pub mod geometry;
pub mod grid;

pub use bits::{compact_u64_to_u32, deinterleave, interleave, spread_u32_to_u64};
pub use codec::{decode, decode_many, encode, encode_many};
pub use constants::{
    GRID_BITS, GRID_CELLS, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_GRID_INDEX, MAX_LATITUDE,
    MAX_LONGITUDE, MAX_SCORE, MIN_LATITUDE, MIN_LONGITUDE, SCORE_BITS,
};
pub use dimensions::{CellDims, cell_dimensions};
pub use geometry::create_cell_polygon;
pub use grid::{coordinate_to_grid, grid_cell_bounds, grid_to_coordinate};
