use crate::{
    foundation::error::{ChartError, ChartResult},
    output::markup::SvgDocument,
};

/// Largest raster edge accepted by [`SvgDocument::rasterize`].
pub const MAX_RASTER_DIM: u32 = 16_384;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Premultiplied RGBA8 pixels, row-major, `width * height * 4` bytes.
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

impl RasterImage {
    /// Pixel at `(x, y)` as premultiplied `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba8_premul.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl SvgDocument {
    /// Rasterize the document at `scale` device pixels per canvas unit.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn rasterize(&self, scale: f32) -> ChartResult<RasterImage> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::export(format!("invalid raster scale {scale}")));
        }
        let tree = self.to_usvg_tree()?;

        let size = tree.size();
        let width = (size.width() * scale).ceil().max(1.0) as u32;
        let height = (size.height() * scale).ceil().max(1.0) as u32;
        if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
            return Err(ChartError::export(format!(
                "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
            )));
        }

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ChartError::export("failed to allocate pixmap"))?;
        let xform = resvg::tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        Ok(RasterImage {
            width,
            height,
            rgba8_premul: pixmap.take(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/raster.rs"]
mod tests;
