//! Placeholder image generation
//!
//! Solid-color canvas with an optional white label centered on its measured
//! extents. PNG output keeps an alpha channel, JPEG output does not.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Pixel, Rgb, RgbImage, Rgba, RgbaImage};

use crate::color::parse_hex_color;
use crate::glyphs::rasterize_label;
use crate::specs::{ImageFormat, ImageSpec};
use crate::{prepare_output, GenError};

/// Label font size: one third of the shorter side
pub fn label_font_size(width: u32, height: u32) -> u32 {
    width.min(height) / 3
}

/// Generate one image from its table entry, returning the written path
pub fn generate_image(root: &Path, spec: &ImageSpec) -> Result<PathBuf, GenError> {
    let out = prepare_output(root, spec.path)?;
    let [r, g, b] = parse_hex_color(spec.color)?;

    let result = match spec.format {
        ImageFormat::Png => {
            let mut canvas = RgbaImage::from_pixel(spec.width, spec.height, Rgba([r, g, b, 255]));
            draw_label(&mut canvas, spec.label, Rgba([255, 255, 255, 255]));
            canvas.save_with_format(&out, image::ImageFormat::Png)
        }
        ImageFormat::Jpeg => {
            let mut canvas = RgbImage::from_pixel(spec.width, spec.height, Rgb([r, g, b]));
            draw_label(&mut canvas, spec.label, Rgb([255, 255, 255]));
            canvas.save_with_format(&out, image::ImageFormat::Jpeg)
        }
    };
    result.map_err(|source| GenError::Image {
        path: out.clone(),
        source,
    })?;

    println!(
        "  [IMG] {}  ({}x{} {})",
        spec.path,
        spec.width,
        spec.height,
        spec.format.name()
    );
    Ok(out)
}

/// Stamp `label` onto `canvas`, centered on both axes.
///
/// Pixels that fall outside the canvas are clipped.
pub fn draw_label<P: Pixel>(canvas: &mut ImageBuffer<P, Vec<P::Subpixel>>, label: &str, ink: P) {
    let (width, height) = canvas.dimensions();
    let Some(bitmap) = rasterize_label(label, label_font_size(width, height)) else {
        return;
    };

    let origin_x = (i64::from(width) - i64::from(bitmap.width)) / 2;
    let origin_y = (i64::from(height) - i64::from(bitmap.height)) / 2;

    for (lx, ly) in bitmap.lit() {
        let x = origin_x + i64::from(lx);
        let y = origin_y + i64::from(ly);
        if (0..i64::from(width)).contains(&x) && (0..i64::from(height)).contains(&y) {
            canvas.put_pixel(x as u32, y as u32, ink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// Bounding box of pixels equal to `ink`: (min_x, min_y, max_x, max_y)
    fn ink_bounds(img: &RgbaImage, ink: Rgba<u8>) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in img.enumerate_pixels() {
            if *p == ink {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
                });
            }
        }
        bounds
    }

    #[test]
    fn test_label_font_size() {
        assert_eq!(label_font_size(32, 32), 10);
        assert_eq!(label_font_size(200, 50), 16);
        assert_eq!(label_font_size(1280, 720), 240);
    }

    #[test]
    fn test_label_is_centered() {
        for (w, h, label) in [(32, 32, "In"), (64, 64, "PA"), (200, 50, "BTN"), (32, 32, "1")] {
            let mut img = RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]));
            draw_label(&mut img, label, WHITE);
            let (x0, y0, x1, y1) = ink_bounds(&img, WHITE).expect("label drawn");
            let left = x0;
            let right = w - 1 - x1;
            let top = y0;
            let bottom = h - 1 - y1;
            assert!(left.abs_diff(right) <= 1, "{label}: {left} vs {right}");
            assert!(top.abs_diff(bottom) <= 1, "{label}: {top} vs {bottom}");
        }
    }

    #[test]
    fn test_empty_label_leaves_fill() {
        let fill = Rgba([1, 2, 3, 255]);
        let mut img = RgbaImage::from_pixel(16, 16, fill);
        draw_label(&mut img, "", WHITE);
        assert!(img.pixels().all(|p| *p == fill));
    }

    #[test]
    fn test_label_clipped_on_tiny_canvas() {
        // Wider than the canvas; must not panic
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        draw_label(&mut img, "WWWW", WHITE);
        assert!(img.pixels().any(|p| *p == WHITE));
    }

    #[test]
    fn test_generate_png_has_alpha() {
        let dir = tempdir().unwrap();
        let spec = ImageSpec {
            path: "nested/dir/icon.png",
            width: 32,
            height: 24,
            color: "#6090D0",
            label: "N",
            format: ImageFormat::Png,
        };
        let out = generate_image(dir.path(), &spec).unwrap();
        assert_eq!(out, dir.path().join("nested/dir/icon.png"));

        let decoded = image::open(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 24));
        assert!(decoded.color().has_alpha());

        let rgba = decoded.to_rgba8();
        assert_eq!(*rgba.get_pixel(0, 0), Rgba([0x60, 0x90, 0xD0, 255]));
        assert!(rgba.pixels().any(|p| *p == WHITE));
    }

    #[test]
    fn test_generate_jpeg_has_no_alpha() {
        let dir = tempdir().unwrap();
        let spec = ImageSpec {
            path: "bg.jpg",
            width: 128,
            height: 72,
            color: "#1A1A3E",
            label: "BG",
            format: ImageFormat::Jpeg,
        };
        let out = generate_image(dir.path(), &spec).unwrap();
        let decoded = image::open(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 72));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_invalid_color_propagates() {
        let dir = tempdir().unwrap();
        let spec = ImageSpec {
            path: "bad.png",
            width: 8,
            height: 8,
            color: "teal",
            label: "",
            format: ImageFormat::Png,
        };
        let err = generate_image(dir.path(), &spec).unwrap_err();
        assert!(matches!(err, GenError::InvalidColor(_)));
        assert!(!dir.path().join("bad.png").exists());
    }
}
