use std::{fmt, path::Path};

use crate::{
    foundation::{
        core::Run,
        error::{PxsvgError, PxsvgResult},
    },
    trace::runs::Layers,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// In-memory SVG document: one `<g>` per layer, one `<rect>` per run.
///
/// The markup is produced by [`fmt::Display`]; the output is fully determined by the
/// inputs, so serializing twice yields identical bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub layers: Layers,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32, layers: Layers) -> Self {
        Self {
            width,
            height,
            layers,
        }
    }

    /// Write the whole document to `path`, replacing any existing file.
    pub fn write_to_path(&self, path: &Path) -> PxsvgResult<()> {
        write_markup(path, &self.to_string())?;
        tracing::debug!(rects = self.layers.run_count(), "wrote {}", path.display());
        Ok(())
    }
}

/// Write already-serialized markup to `path`, replacing any existing file.
pub fn write_markup(path: &Path, markup: &str) -> PxsvgResult<()> {
    std::fs::write(path, markup)
        .map_err(|e| PxsvgError::output(format!("write '{}': {e}", path.display())))
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        writeln!(
            f,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges">"#
        )?;
        for layer in &self.layers {
            writeln!(f, r#"  <g fill="{}">"#, layer.key())?;
            for run in &layer.runs {
                write_rect(f, run)?;
            }
            writeln!(f, "  </g>")?;
        }
        writeln!(f, "</svg>")
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, run: &Run) -> fmt::Result {
    writeln!(
        f,
        r#"    <rect x="{}" y="{}" width="{}" height="{}"/>"#,
        run.x,
        run.y,
        run.width,
        Run::HEIGHT
    )
}
