//! World layout parameters and per-tile height sampling.
//!
//! A world is a square grid of square tiles centered on the origin. The
//! mesh layer walks each tile's vertex grid; this module produces the same
//! vertex heights without any geometry attached.

use crate::error::WorldGenError;
use crate::profile::SeedProfile;

/// Validated tile and grid layout of a terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldParams {
    tile_size: f64,
    grid_size: u32,
}

impl Default for WorldParams {
    /// The reference sandbox layout: 8x8 tiles of 16 units.
    fn default() -> Self {
        Self {
            tile_size: 16.0,
            grid_size: 8,
        }
    }
}

impl WorldParams {
    /// Validate and build. The tile size must be positive and finite, the
    /// grid size nonzero.
    pub fn new(tile_size: f64, grid_size: u32) -> Result<Self, WorldGenError> {
        if tile_size <= 0.0 || !tile_size.is_finite() || grid_size == 0 {
            return Err(WorldGenError::InvalidWorldParameters {
                tile_size,
                grid_size,
            });
        }
        Ok(Self {
            tile_size,
            grid_size,
        })
    }

    /// Edge length of one tile in world units.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Tiles per side.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Edge length of the whole terrain in world units.
    pub fn terrain_size(&self) -> f64 {
        self.tile_size * f64::from(self.grid_size)
    }

    /// Center origins of every tile, row-major, centered on the world
    /// origin: tile `(i, j)` sits at `((i - G/2) * tile, (j - G/2) * tile)`.
    pub fn tile_origins(&self) -> Vec<(f64, f64)> {
        let half = f64::from(self.grid_size) / 2.0;
        let mut origins = Vec::with_capacity((self.grid_size * self.grid_size) as usize);
        for i in 0..self.grid_size {
            for j in 0..self.grid_size {
                origins.push((
                    (f64::from(i) - half) * self.tile_size,
                    (f64::from(j) - half) * self.tile_size,
                ));
            }
        }
        origins
    }
}

/// Row-major elevation samples for one tile's vertex grid.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    vertices_per_side: u32,
    heights: Vec<f64>,
}

impl HeightGrid {
    /// Vertices along one edge (`resolution + 1`).
    pub fn vertices_per_side(&self) -> u32 {
        self.vertices_per_side
    }

    /// Height at vertex `(ix, iz)`. Panics if either index is out of the
    /// grid.
    pub fn get(&self, ix: u32, iz: u32) -> f64 {
        assert!(
            ix < self.vertices_per_side && iz < self.vertices_per_side,
            "vertex ({ix}, {iz}) outside a {0}x{0} grid",
            self.vertices_per_side
        );
        self.heights[(iz * self.vertices_per_side + ix) as usize]
    }

    /// The raw row-major samples.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Lowest and highest sample in the grid.
    pub fn min_max(&self) -> (f64, f64) {
        self.heights.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &h| (lo.min(h), hi.max(h)),
        )
    }
}

/// Sample one tile's vertex grid through the profile.
///
/// `resolution` is the number of segments per tile edge, so the grid carries
/// `(resolution + 1)^2` vertices. Vertices sit at world coordinates
/// `tile origin + local offset`, with local offsets spanning
/// `[-tile_size / 2, tile_size / 2]` along both axes.
pub fn sample_tile(
    profile: &SeedProfile,
    params: &WorldParams,
    tile_x: f64,
    tile_z: f64,
    resolution: u32,
) -> Result<HeightGrid, WorldGenError> {
    if resolution == 0 {
        return Err(WorldGenError::InvalidWorldParameters {
            tile_size: params.tile_size(),
            grid_size: resolution,
        });
    }
    let side = resolution + 1;
    let step = params.tile_size() / f64::from(resolution);
    let half = params.tile_size() / 2.0;
    let mut heights = Vec::with_capacity((side * side) as usize);
    for iz in 0..side {
        for ix in 0..side {
            let local_x = f64::from(ix) * step - half;
            let local_z = f64::from(iz) * step - half;
            heights.push(profile.elevation_at(tile_x + local_x, tile_z + local_z));
        }
    }
    Ok(HeightGrid {
        vertices_per_side: side,
        heights,
    })
}
