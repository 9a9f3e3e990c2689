use std::path::Path;

use image::RgbaImage;

use crate::{
    foundation::error::{PxsvgError, PxsvgResult},
    source::decode::load_rgba,
    svg::writer::{SvgDocument, write_markup},
    trace::runs::extract_runs,
    verify::coverage::{CoverageReport, check_coverage},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertOpts {
    /// Re-render the written document and fail unless it reproduces the source exactly.
    pub verify: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ConvertSummary {
    pub width: u32,
    pub height: u32,
    /// Distinct colors, one `<g>` each.
    pub layers: usize,
    /// Emitted `<rect>` elements.
    pub rects: usize,
    /// Non-transparent pixels covered by the rects.
    pub covered_pixels: u64,
    /// Present only when verification ran.
    pub coverage: Option<CoverageReport>,
}

/// Build the vector document for an already decoded grid.
pub fn convert_image(img: &RgbaImage) -> SvgDocument {
    let (width, height) = img.dimensions();
    SvgDocument::new(width, height, extract_runs(img))
}

/// Decode `input`, write the SVG to `output`, and optionally verify the result.
///
/// The output file is written in one piece after the whole grid has been scanned.
#[tracing::instrument(skip(opts), fields(verify = opts.verify))]
pub fn convert_file(
    input: &Path,
    output: &Path,
    opts: &ConvertOpts,
) -> PxsvgResult<ConvertSummary> {
    let img = load_rgba(input)?;
    let doc = convert_image(&img);
    let markup = doc.to_string();
    write_markup(output, &markup)?;

    let mut summary = ConvertSummary {
        width: doc.width,
        height: doc.height,
        layers: doc.layers.len(),
        rects: doc.layers.run_count(),
        covered_pixels: doc.layers.pixel_count(),
        coverage: None,
    };
    tracing::info!(
        layers = summary.layers,
        rects = summary.rects,
        "converted {}x{} image",
        summary.width,
        summary.height
    );

    if opts.verify {
        let report = check_coverage(&img, &markup)?;
        if let Some(m) = report.first_mismatch {
            return Err(PxsvgError::verify(format!(
                "{} of {} pixels differ; first at ({}, {}): source {:?}, rendered {:?}",
                report.mismatches, report.checked, m.x, m.y, m.source, m.rendered
            )));
        }
        summary.coverage = Some(report);
    }

    Ok(summary)
}
