use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use pxsvg::{ConvertOpts, Rgb8, Run, convert_file, convert_image, extract_runs};

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Small palette plus a transparent share, so runs of every length show up.
fn noisy_image(seed: u64, width: u32, height: u32) -> RgbaImage {
    const PALETTE: [[u8; 3]; 4] = [[255, 0, 0], [0, 0, 255], [12, 34, 56], [255, 255, 255]];
    let mut state = seed;
    RgbaImage::from_fn(width, height, |_, _| {
        state = mix64(state.wrapping_add(0x9E37_79B9_7F4A_7C15));
        let pick = (state >> 60) as usize;
        if pick < 3 {
            return Rgba([9, 9, 9, 0]);
        }
        let [r, g, b] = PALETTE[pick % PALETTE.len()];
        let alpha = if pick % 5 == 0 { 40 } else { 255 };
        Rgba([r, g, b, alpha])
    })
}

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("convert_props").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn every_opaque_pixel_is_covered_exactly_once() {
    for seed in 0..16u64 {
        let img = noisy_image(seed, 23, 11);
        let layers = extract_runs(&img);

        let mut owner: Vec<Option<Rgb8>> = vec![None; (img.width() * img.height()) as usize];
        for layer in &layers {
            for run in &layer.runs {
                assert!(run.width >= 1);
                assert!(run.end_x() <= img.width());
                for x in run.x..run.end_x() {
                    let slot = &mut owner[(run.y * img.width() + x) as usize];
                    assert!(slot.is_none(), "pixel ({x}, {}) covered twice", run.y);
                    *slot = Some(layer.color);
                }
            }
        }

        for (x, y, px) in img.enumerate_pixels() {
            let got = owner[(y * img.width() + x) as usize];
            if px.0[3] == 0 {
                assert_eq!(got, None, "transparent pixel ({x}, {y}) covered");
            } else {
                assert_eq!(got, Some(Rgb8::from_rgba(px)), "pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn runs_are_maximal() {
    for seed in 100..108u64 {
        let img = noisy_image(seed, 17, 9);
        for layer in &extract_runs(&img) {
            for run in &layer.runs {
                let same = |x: u32| {
                    let px = img.get_pixel(x, run.y);
                    px.0[3] != 0 && Rgb8::from_rgba(px) == layer.color
                };
                if run.x > 0 {
                    assert!(!same(run.x - 1), "run {run:?} extends left");
                }
                if run.end_x() < img.width() {
                    assert!(!same(run.end_x()), "run {run:?} extends right");
                }
            }
        }
    }
}

#[test]
fn every_rect_is_one_pixel_tall() {
    let doc = convert_image(&noisy_image(7, 31, 13));
    let text = doc.to_string();
    let rects = text.matches("<rect ").count();
    assert_eq!(rects, doc.layers.run_count());
    assert_eq!(text.matches(r#"height="1"/>"#).count(), rects);
    assert_eq!(Run::HEIGHT, 1);
}

#[test]
fn fully_transparent_image_has_no_rects() {
    let doc = convert_image(&RgbaImage::new(5, 4));
    let text = doc.to_string();
    assert!(text.contains(r#"width="5" height="4" viewBox="0 0 5 4""#));
    assert!(!text.contains("<rect"));
    assert!(!text.contains("<g"));
}

#[test]
fn single_red_pixel_document() {
    let doc = convert_image(&RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255])));
    let text = doc.to_string();
    assert_eq!(text.matches("<g ").count(), 1);
    assert!(text.contains(
        "  <g fill=\"#ff0000\">\n    <rect x=\"0\" y=\"0\" width=\"1\" height=\"1\"/>\n  </g>\n"
    ));
}

#[test]
fn red_red_blue_document() {
    let mut img = RgbaImage::from_pixel(3, 1, Rgba([255, 0, 0, 255]));
    img.put_pixel(2, 0, Rgba([0, 0, 255, 255]));
    let text = convert_image(&img).to_string();

    let body: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(
        body,
        vec![
            "  <g fill=\"#ff0000\">",
            "    <rect x=\"0\" y=\"0\" width=\"2\" height=\"1\"/>",
            "  </g>",
            "  <g fill=\"#0000ff\">",
            "    <rect x=\"2\" y=\"0\" width=\"1\" height=\"1\"/>",
            "  </g>",
            "</svg>",
        ]
    );
}

#[test]
fn converting_twice_is_byte_identical() {
    let dir = scratch("idempotent");
    let input = dir.join("in.png");
    noisy_image(42, 40, 20).save(&input).unwrap();

    let a = dir.join("a.svg");
    let b = dir.join("b.svg");
    convert_file(&input, &a, &ConvertOpts::default()).unwrap();
    convert_file(&input, &b, &ConvertOpts::default()).unwrap();
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());

    // Overwriting an existing output gives the same bytes again.
    convert_file(&input, &a, &ConvertOpts::default()).unwrap();
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}
