use image::RgbaImage;

use crate::foundation::error::{PxsvgError, PxsvgResult};

/// Result of comparing a rendered document against its source grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CoverageReport {
    /// Pixels compared.
    pub checked: u64,
    /// Pixels whose rendered value differs from the source.
    pub mismatches: u64,
    pub first_mismatch: Option<Mismatch>,
}

impl CoverageReport {
    pub fn is_exact(&self) -> bool {
        self.mismatches == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Mismatch {
    pub x: u32,
    pub y: u32,
    /// Source pixel, straight RGBA.
    pub source: [u8; 4],
    /// Rendered pixel, premultiplied RGBA.
    pub rendered: [u8; 4],
}

/// Rasterize SVG markup into a premultiplied RGBA8 buffer of `width x height`.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> PxsvgResult<Vec<u8>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| PxsvgError::verify(format!("parse svg tree: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PxsvgError::verify("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

/// Render `svg` at the size of `source` and compare every pixel.
///
/// Opaque source pixels (any non-zero alpha) must come back as their exact RGB at full
/// alpha. Transparent source pixels must come back with zero alpha.
#[tracing::instrument(skip_all, fields(width = source.width(), height = source.height()))]
pub fn check_coverage(source: &RgbaImage, svg: &str) -> PxsvgResult<CoverageReport> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Ok(CoverageReport::default());
    }

    let rendered = rasterize_svg(svg, width, height)?;
    let mut report = CoverageReport::default();

    for (x, y, px) in source.enumerate_pixels() {
        let i = ((y as usize) * (width as usize) + (x as usize)) * 4;
        let got = [rendered[i], rendered[i + 1], rendered[i + 2], rendered[i + 3]];
        let [r, g, b, a] = px.0;

        let ok = if a == 0 {
            got[3] == 0
        } else {
            got == [r, g, b, 255]
        };

        report.checked += 1;
        if !ok {
            report.mismatches += 1;
            if report.first_mismatch.is_none() {
                report.first_mismatch = Some(Mismatch {
                    x,
                    y,
                    source: px.0,
                    rendered: got,
                });
            }
        }
    }

    if report.is_exact() {
        tracing::debug!(checked = report.checked, "coverage exact");
    } else {
        tracing::warn!(
            checked = report.checked,
            mismatches = report.mismatches,
            "coverage mismatch"
        );
    }
    Ok(report)
}
