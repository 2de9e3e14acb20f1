//! Summary image generation.
//!
//! After each refresh a fixed-layout PNG is rendered listing the total number of cached
//! countries, the refresh time and the five countries with the largest estimated GDP. Text
//! is drawn with the embedded 8x8 `font8x8` bitmap font, so no font files are needed at
//! runtime.
//!
//! The image is first written to a hidden sibling of the target path and only renamed over
//! the served image by [`StagedSummaryImage::publish`], so a refresh that fails to commit
//! leaves the previous image in place.

use std::{
    ffi::{OsStr, OsString},
    io::Cursor,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageFormat, Rgb, RgbImage};

use crate::server::{
    error::Error,
    model::country::GdpLeader,
    util::{format::format_gdp, time::to_display},
};

/// Canvas width in pixels.
pub const SUMMARY_IMAGE_WIDTH: u32 = 600;
/// Canvas height in pixels.
pub const SUMMARY_IMAGE_HEIGHT: u32 = 400;
/// Number of leaders listed on the image.
pub const SUMMARY_LEADER_COUNT: usize = 5;

const BACKGROUND: Rgb<u8> = Rgb([245, 247, 250]);
const HEADER: Rgb<u8> = Rgb([33, 56, 92]);
const HEADER_TEXT: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT: Rgb<u8> = Rgb([30, 30, 30]);
const MUTED_TEXT: Rgb<u8> = Rgb([96, 96, 96]);
const RULE: Rgb<u8> = Rgb([200, 205, 212]);

const MARGIN: i64 = 24;
const GLYPH_SIZE: i64 = 8;

/// Writes the summary image for a refresh cycle.
pub struct SummaryImageGenerator<'a> {
    path: &'a Path,
}

impl<'a> SummaryImageGenerator<'a> {
    /// Creates a generator writing to `path`.
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Renders the summary and writes it next to the configured path.
    ///
    /// The parent directory is created if it doesn't exist. The served image is untouched
    /// until the returned [`StagedSummaryImage`] is published.
    ///
    /// # Returns
    /// - `Ok(StagedSummaryImage)` - The rendered image, ready to publish
    /// - `Err(Error::ImageError)` - PNG encoding failed
    /// - `Err(Error::IoError)` - The directory or file could not be written
    pub async fn generate(
        &self,
        total_countries: i64,
        leaders: &[GdpLeader],
        refreshed_at: DateTime<Utc>,
    ) -> Result<StagedSummaryImage, Error> {
        let png = encode_png(&render_summary(total_countries, leaders, refreshed_at))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let staged = staging_path(self.path);
        tokio::fs::write(&staged, png).await?;

        tracing::debug!("Staged summary image at {}", staged.display());

        Ok(StagedSummaryImage {
            staged,
            target: self.path.to_path_buf(),
        })
    }
}

/// A rendered summary image waiting to replace the served one.
#[derive(Debug)]
pub struct StagedSummaryImage {
    staged: PathBuf,
    target: PathBuf,
}

impl StagedSummaryImage {
    /// Location of the rendered image before it is published.
    pub fn path(&self) -> &Path {
        &self.staged
    }

    /// Moves the rendered image over the served one, overwriting any previous image.
    pub async fn publish(self) -> Result<PathBuf, Error> {
        tokio::fs::rename(&self.staged, &self.target).await?;

        tracing::debug!("Published summary image to {}", self.target.display());

        Ok(self.target)
    }

    /// Removes the rendered image without publishing it.
    pub async fn discard(self) {
        if let Err(err) = tokio::fs::remove_file(&self.staged).await {
            tracing::warn!(
                "Failed to remove staged summary image {}: {}",
                self.staged.display(),
                err
            );
        }
    }
}

/// Hidden sibling of `path` the image is rendered to, e.g. `cache/.summary.png.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("summary.png")));
    name.push(".tmp");

    path.with_file_name(name)
}

/// Lines rendered for each leader, e.g. `1. Testland (GDP: $1,234,567)`.
pub fn leader_lines(leaders: &[GdpLeader]) -> Vec<String> {
    leaders
        .iter()
        .take(SUMMARY_LEADER_COUNT)
        .enumerate()
        .map(|(i, leader)| {
            let gdp = match leader.estimated_gdp {
                Some(_) => format!("${}", format_gdp(leader.estimated_gdp)),
                None => "N/A".to_string(),
            };

            format!("{}. {} (GDP: {})", i + 1, leader.name, gdp)
        })
        .collect()
}

/// Draws the summary onto a fresh canvas.
pub fn render_summary(
    total_countries: i64,
    leaders: &[GdpLeader],
    refreshed_at: DateTime<Utc>,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(SUMMARY_IMAGE_WIDTH, SUMMARY_IMAGE_HEIGHT, BACKGROUND);

    fill_rect(&mut canvas, 0, 0, SUMMARY_IMAGE_WIDTH as i64, 64, HEADER);
    draw_text(&mut canvas, "Country Summary", MARGIN, 20, 3, HEADER_TEXT);

    draw_text(
        &mut canvas,
        &format!("Total countries: {}", total_countries),
        MARGIN,
        88,
        2,
        TEXT,
    );
    draw_text(
        &mut canvas,
        &format!("Last refreshed: {}", to_display(refreshed_at)),
        MARGIN,
        120,
        2,
        MUTED_TEXT,
    );

    fill_rect(
        &mut canvas,
        MARGIN,
        152,
        SUMMARY_IMAGE_WIDTH as i64 - 2 * MARGIN,
        2,
        RULE,
    );

    draw_text(&mut canvas, "Top 5 by estimated GDP:", MARGIN, 172, 2, TEXT);

    let mut y = 210;
    for line in leader_lines(leaders) {
        draw_text(&mut canvas, &line, MARGIN, y, 1, TEXT);
        y += 28;
    }

    canvas
}

fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, Error> {
    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(png)
}

fn fill_rect(canvas: &mut RgbImage, x: i64, y: i64, width: i64, height: i64, color: Rgb<u8>) {
    for py in y..y + height {
        for px in x..x + width {
            put_pixel(canvas, px, py, color);
        }
    }
}

/// Draws `text` with its top-left corner at `(x, y)`, each font pixel scaled to `scale` pixels.
///
/// Characters outside the font are drawn as `?` and anything past the canvas edge is clipped.
fn draw_text(canvas: &mut RgbImage, text: &str, x: i64, y: i64, scale: i64, color: Rgb<u8>) {
    let advance = GLYPH_SIZE * scale;

    for (i, c) in text.chars().enumerate() {
        let glyph = BASIC_FONTS
            .get(c)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let origin_x = x + i as i64 * advance;

        if origin_x >= canvas.width() as i64 {
            break;
        }

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Least significant bit is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }

                fill_rect(
                    canvas,
                    origin_x + col * scale,
                    y + row as i64 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

fn put_pixel(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }

    canvas.put_pixel(x as u32, y as u32, color);
}
