//! Raster layers backing the canvas.
//!
//! A [`RasterLayer`] wraps an ARGB32 Cairo image surface. Layers with a zero
//! width or height have no surface at all; every drawing call against them is
//! silently skipped, which keeps callers free of size checks.

use cairo::{Context, Format, ImageSurface};
use log::warn;

/// One pixel read back from a layer, in Cairo's premultiplied byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    fn from_argb32(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// True when nothing has been drawn on this pixel.
    pub fn is_clear(&self) -> bool {
        self.a == 0
    }
}

/// Creates an ARGB32 surface, or `None` for zero-sized or failed allocations.
pub(crate) fn create_surface(width: i32, height: i32) -> Option<ImageSurface> {
    if width <= 0 || height <= 0 {
        return None;
    }
    match ImageSurface::create(Format::ARgb32, width, height) {
        Ok(surface) => Some(surface),
        Err(err) => {
            warn!("Failed to allocate {width}x{height} raster: {err}");
            None
        }
    }
}

/// A fixed-size raster surface that tracks whether anything was drawn on it.
#[derive(Debug)]
pub struct RasterLayer {
    width: i32,
    height: i32,
    surface: Option<ImageSurface>,
    blank: bool,
}

impl RasterLayer {
    /// Creates a transparent layer of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            surface: create_surface(width, height),
            blank: true,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The backing surface, if the layer has a non-zero size.
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    /// True until something is drawn into the layer (or after [`clear`](Self::clear)).
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Opens a drawing context on the layer and marks it as drawn on.
    ///
    /// Returns `None` when the layer has no surface.
    pub fn context(&mut self) -> Option<Context> {
        let surface = self.surface.as_ref()?;
        match Context::new(surface) {
            Ok(ctx) => {
                self.blank = false;
                Some(ctx)
            }
            Err(err) => {
                warn!("Failed to open drawing context: {err}");
                None
            }
        }
    }

    /// Discards all pixels, leaving a fully transparent layer.
    pub fn clear(&mut self) {
        self.surface = create_surface(self.width, self.height);
        self.blank = true;
    }

    /// Replaces the layer content with a surface of the same size.
    ///
    /// Surfaces of a different size are rejected and the layer is left untouched.
    pub fn replace(&mut self, surface: ImageSurface) -> bool {
        if surface.width() != self.width || surface.height() != self.height {
            warn!(
                "Ignoring {}x{} raster for {}x{} layer",
                surface.width(),
                surface.height(),
                self.width,
                self.height
            );
            return false;
        }
        self.surface = Some(surface);
        self.blank = false;
        true
    }

    /// Deep copy of the current pixels.
    pub fn snapshot(&self) -> Option<ImageSurface> {
        self.surface.as_ref().and_then(super::render::copy_surface)
    }

    /// Reads a single pixel. Out-of-bounds coordinates return `None`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let offset = y as usize * surface.stride() as usize + x as usize * 4;
        let mut value = None;
        surface
            .with_data(|data| {
                if let Some(bytes) = data.get(offset..offset + 4) {
                    value = Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
                }
            })
            .ok()?;
        value.map(Pixel::from_argb32)
    }

    /// Copies all pixels row by row, without stride padding.
    pub fn pixels(&self) -> Vec<Pixel> {
        let Some(surface) = self.surface.as_ref() else {
            return Vec::new();
        };
        let stride = surface.stride() as usize;
        let row_bytes = self.width as usize * 4;
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        let _ = surface.with_data(|data| {
            for row in data.chunks(stride).take(self.height as usize) {
                for bytes in row[..row_bytes].chunks_exact(4) {
                    let value = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                    pixels.push(Pixel::from_argb32(value));
                }
            }
        });
        pixels
    }

    /// Number of pixels with non-zero alpha.
    pub fn painted_pixel_count(&self) -> usize {
        self.pixels().iter().filter(|p| !p.is_clear()).count()
    }
}
