//! `pxsvg` turns a raster image into an SVG made of one-pixel-tall rectangles.
//!
//! Each row is split into maximal runs of same-colored, non-transparent pixels. Runs are
//! grouped by color into `<g fill="#rrggbb">` layers, and each run becomes a `<rect>`.
//!
//! - Decode with [`load_rgba`] or [`decode_rgba`]
//! - Extract runs with [`extract_runs`]
//! - Serialize an [`SvgDocument`], or do it all with [`convert_file`]
#![forbid(unsafe_code)]

mod foundation;

pub mod convert;
pub mod source;
pub mod svg;
pub mod trace;
pub mod verify;

pub use crate::convert::{ConvertOpts, ConvertSummary, convert_file, convert_image};
pub use crate::foundation::core::{ColorKey, Rgb8, Run};
pub use crate::foundation::error::{PxsvgError, PxsvgResult};
pub use crate::source::decode::{decode_rgba, load_rgba};
pub use crate::svg::writer::{SvgDocument, write_markup};
pub use crate::trace::runs::{Layer, Layers, extract_runs};
pub use crate::verify::coverage::{CoverageReport, Mismatch, check_coverage, rasterize_svg};
