use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use rentscout_application::{ApplicationError, AssetImage, AssetSource};
use walkdir::WalkDir;

const PLACEHOLDER_WIDTH: u32 = 320;
const PLACEHOLDER_HEIGHT: u32 = 200;
const PLACEHOLDER_TILE: u32 = 20;

const PLACEHOLDER_TINTS: [u32; 6] = [
    0x8FA8C9, 0x9CBFA4, 0xC9B18F, 0xB59CC9, 0xC99C9C, 0x9CB9C9,
];

/// Resolves image references against a directory on disk. The directory is
/// walked once at construction and indexed by lowercased file stem, so
/// `load("Modern")` finds `assets/modern.jpg` or `assets/photos/Modern.png`.
#[derive(Debug, Default)]
pub struct FsAssetSource {
    index: HashMap<String, PathBuf>,
}

impl FsAssetSource {
    pub fn new(assets_dir: &str) -> Self {
        let mut index = HashMap::new();
        for entry in WalkDir::new(assets_dir).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !is_supported(path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                index
                    .entry(stem.to_ascii_lowercase())
                    .or_insert_with(|| path.to_path_buf());
            }
        }
        Self { index }
    }

    pub fn indexed_names(&self) -> usize {
        self.index.len()
    }
}

impl AssetSource for FsAssetSource {
    fn load(&self, name: &str) -> Result<AssetImage, ApplicationError> {
        let Some(path) = self.index.get(&name.to_ascii_lowercase()) else {
            return Ok(placeholder_image(name));
        };
        Ok(decode(path).unwrap_or_else(|| placeholder_image(name)))
    }
}

fn is_supported(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("jpg" | "jpeg" | "png")
    )
}

fn decode(path: &Path) -> Option<AssetImage> {
    let decoded = ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?
        .decode()
        .ok()?;

    let source = decoded.to_rgb8();
    let width = source.width();
    let height = source.height();
    if width == 0 || height == 0 {
        return None;
    }

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for pixel in source.pixels() {
        let [r, g, b] = pixel.0;
        pixels.push(((r as u32) << 16) | ((g as u32) << 8) | (b as u32));
    }

    Some(AssetImage {
        width,
        height,
        pixels,
    })
}

/// Deterministic stand-in for an unresolvable image reference: a two-tone
/// checker in a tint picked from the name.
pub fn placeholder_image(name: &str) -> AssetImage {
    let tint = tint_for_name(name);
    let shaded = shade(tint);

    let mut image = AssetImage::solid(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, tint);
    for y in 0..PLACEHOLDER_HEIGHT {
        for x in 0..PLACEHOLDER_WIDTH {
            if ((x / PLACEHOLDER_TILE) + (y / PLACEHOLDER_TILE)) % 2 == 0 {
                image.pixels[(y * PLACEHOLDER_WIDTH + x) as usize] = shaded;
            }
        }
    }
    image
}

fn tint_for_name(name: &str) -> u32 {
    let mut hash: u32 = 7;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u32);
    }
    PLACEHOLDER_TINTS[(hash as usize) % PLACEHOLDER_TINTS.len()]
}

fn shade(color: u32) -> u32 {
    let r = ((color >> 16) & 0xFF).saturating_sub(18);
    let g = ((color >> 8) & 0xFF).saturating_sub(18);
    let b = (color & 0xFF).saturating_sub(18);
    (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgb};

    use super::*;

    #[test]
    fn unknown_name_yields_the_placeholder_not_an_error() {
        let source = FsAssetSource::new("this-directory-does-not-exist");
        let image = source.load("Modern").expect("load should not fail");
        assert_eq!(image.width, PLACEHOLDER_WIDTH);
        assert_eq!(image.height, PLACEHOLDER_HEIGHT);
    }

    #[test]
    fn placeholder_is_deterministic_per_name() {
        assert_eq!(placeholder_image("Modern"), placeholder_image("Modern"));
        let balcony = placeholder_image("Balcony");
        assert_eq!(balcony.width, PLACEHOLDER_WIDTH);
    }

    #[test]
    fn indexed_file_decodes_to_its_pixels() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("modern.png");
        let mut buffer = ImageBuffer::new(4, 3);
        for (_, _, pixel) in buffer.enumerate_pixels_mut() {
            *pixel = Rgb([10u8, 20u8, 30u8]);
        }
        buffer.save(&path).expect("write sample image");

        let source = FsAssetSource::new(dir.path().to_str().expect("utf-8 path"));
        assert_eq!(source.indexed_names(), 1);

        let image = source.load("Modern").expect("load should work");
        assert_eq!((image.width, image.height), (4, 3));
        assert_eq!(image.pixels[0], 0x0A141E);
    }

    #[test]
    fn index_is_case_insensitive_and_recursive() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("photos");
        std::fs::create_dir_all(&nested).expect("nested dir");
        let path = nested.join("Balcony.png");
        ImageBuffer::from_pixel(2, 2, Rgb([255u8, 0u8, 0u8]))
            .save(&path)
            .expect("write sample image");

        let source = FsAssetSource::new(dir.path().to_str().expect("utf-8 path"));
        let image = source.load("bAlCoNy").expect("load should work");
        assert_eq!(image.pixels[0], 0xFF0000);
    }

    #[test]
    fn unreadable_entries_fall_back_to_the_placeholder() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("view.jpg");
        std::fs::write(&path, b"not actually a jpeg").expect("write bogus file");

        let source = FsAssetSource::new(dir.path().to_str().expect("utf-8 path"));
        let image = source.load("View").expect("load should not fail");
        assert_eq!(image, placeholder_image("View"));
    }
}
