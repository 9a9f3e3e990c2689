use std::collections::HashMap;

use image::RgbaImage;

use crate::foundation::core::{ColorKey, Rgb8, Run};

/// All runs sharing one color, in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub color: Rgb8,
    pub runs: Vec<Run>,
}

impl Layer {
    pub fn key(&self) -> ColorKey {
        self.color.key()
    }

    /// Number of pixels covered by this layer.
    pub fn pixel_count(&self) -> u64 {
        self.runs.iter().map(|r| u64::from(r.width)).sum()
    }
}

/// Color-keyed run buckets.
///
/// Iteration order is the order in which each color was first seen during the row-major
/// scan. Runs inside a layer are in scan order as well.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layers {
    layers: Vec<Layer>,
    index: HashMap<Rgb8, usize>,
}

impl Layers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `run` to the bucket for `color`, creating it on first use.
    pub fn push(&mut self, color: Rgb8, run: Run) {
        let idx = *self.index.entry(color).or_insert_with(|| {
            self.layers.push(Layer {
                color,
                runs: Vec::new(),
            });
            self.layers.len() - 1
        });
        self.layers[idx].runs.push(run);
    }

    pub fn get(&self, color: Rgb8) -> Option<&Layer> {
        self.index.get(&color).map(|&i| &self.layers[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn run_count(&self) -> usize {
        self.layers.iter().map(|l| l.runs.len()).sum()
    }

    pub fn pixel_count(&self) -> u64 {
        self.layers.iter().map(Layer::pixel_count).sum()
    }
}

impl<'a> IntoIterator for &'a Layers {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn is_transparent(px: &image::Rgba<u8>) -> bool {
    px.0[3] == 0
}

/// Split every row of `img` into maximal same-color runs of non-transparent pixels.
///
/// Any non-zero alpha counts as opaque; pixels that differ only in alpha join the same run.
pub fn extract_runs(img: &RgbaImage) -> Layers {
    let (width, height) = img.dimensions();
    let mut layers = Layers::new();

    for y in 0..height {
        let mut x = 0u32;
        while x < width {
            let px = img.get_pixel(x, y);
            if is_transparent(px) {
                x += 1;
                continue;
            }

            let color = Rgb8::from_rgba(px);
            let x0 = x;
            while x < width {
                let next = img.get_pixel(x, y);
                if is_transparent(next) || Rgb8::from_rgba(next) != color {
                    break;
                }
                x += 1;
            }

            layers.push(
                color,
                Run {
                    x: x0,
                    y,
                    width: x - x0,
                },
            );
        }
    }

    tracing::debug!(
        layers = layers.len(),
        runs = layers.run_count(),
        "extracted runs from {width}x{height} grid"
    );
    layers
}
