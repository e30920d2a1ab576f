//! Diagnostic rendering of a profile's terrain into an RGBA raster.
//!
//! Previews are top-down: each pixel samples the height pipeline at one
//! world coordinate and maps the result to a banded color, with submerged
//! samples tinted by the profile's water color. The raster carries no
//! encoding; callers hand the bytes to whatever sink they like.

use crate::heightfield::max_octave_sum;
use crate::profile::SeedProfile;

/// A plain RGBA8 raster, row-major from the top-left.
pub struct PreviewImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PreviewImage {
    /// Create a transparent black raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x < self.width && y < self.height {
            let offset = ((y * self.width + x) * 4) as usize;
            self.pixels[offset..offset + 4].copy_from_slice(&color);
        }
    }

    /// Read one pixel. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    /// The raw RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of distinct RGBA values in the raster.
    pub fn unique_color_count(&self) -> usize {
        let mut seen = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            seen.insert([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        seen.len()
    }
}

/// What part of the world a preview covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewRegion {
    /// World-space center of the square.
    pub center_x: f64,
    pub center_z: f64,
    /// Half-width of the sampled square in world units.
    pub extent: f64,
}

impl Default for PreviewRegion {
    /// A square around the origin covering the default 8x8 tile layout.
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_z: 0.0,
            extent: 64.0,
        }
    }
}

/// Map a normalized elevation (height over the pipeline's peak magnitude,
/// roughly `[-1, 1]`) to a banded terrain color.
pub fn elevation_color(normalized: f64) -> [u8; 4] {
    let n = normalized.clamp(-1.0, 1.0);
    if n < -0.05 {
        [36, 52, 36, 255] // sunken ground
    } else if n < 0.05 {
        [194, 178, 128, 255] // sand
    } else if n < 0.3 {
        [88, 139, 64, 255] // lowland grass
    } else if n < 0.55 {
        [66, 104, 47, 255] // highland
    } else if n < 0.8 {
        [130, 130, 130, 255] // rock
    } else {
        [245, 245, 245, 255] // snow
    }
}

/// Render the profile's heightfield over `region` into a `size`-pixel square.
///
/// Pixel centers map linearly onto the region; each one runs the full height
/// pipeline. Samples at or below the water level take the profile's water
/// tint, everything else a color band picked by normalized elevation.
pub fn render_heightfield(profile: &SeedProfile, region: &PreviewRegion, size: u32) -> PreviewImage {
    let mut image = PreviewImage::new(size, size);
    if size == 0 {
        return image;
    }
    let peak = max_octave_sum(profile.params()) * profile.world_max_height();
    let water = profile.water_color();
    for py in 0..size {
        for px in 0..size {
            let fx = (f64::from(px) + 0.5) / f64::from(size) * 2.0 - 1.0;
            let fz = (f64::from(py) + 0.5) / f64::from(size) * 2.0 - 1.0;
            let wx = region.center_x + fx * region.extent;
            let wz = region.center_z + fz * region.extent;
            let height = profile.elevation_at(wx, wz);
            let color = if height <= profile.water_level() {
                [water.r, water.g, water.b, 255]
            } else {
                elevation_color(height / peak)
            };
            image.set_pixel(px, py, color);
        }
    }
    image
}
