//! Poster thumbnails rendered with half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels (`▀` with the
//! top pixel as foreground and the bottom one as background), so a
//! 16×24 thumbnail fills a 16×12 cell area at roughly 2:3.

use image::imageops::FilterType;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

pub const THUMB_WIDTH: u32 = 16;
pub const THUMB_HEIGHT: u32 = 24;

/// Decoded, downscaled RGB poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Decode PNG/JPEG bytes and resize to exactly `width`×`height`.
    pub fn decode(bytes: &[u8], width: u32, height: u32) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let resized = decoded
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgb8();
        let pixels = resized.pixels().map(|pixel| pixel.0).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Widget drawing a [`Thumbnail`] clipped to the target area.
pub struct ThumbnailView<'a> {
    thumbnail: &'a Thumbnail,
}

impl<'a> ThumbnailView<'a> {
    pub fn new(thumbnail: &'a Thumbnail) -> Self {
        Self { thumbnail }
    }
}

impl Widget for ThumbnailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = (self.thumbnail.height() / 2).min(area.height as u32);
        let cols = self.thumbnail.width().min(area.width as u32);

        for row in 0..rows {
            for col in 0..cols {
                let (Some(top), Some(bottom)) = (
                    self.thumbnail.pixel(col, row * 2),
                    self.thumbnail.pixel(col, row * 2 + 1),
                ) else {
                    continue;
                };
                let style = Style::default()
                    .fg(Color::Rgb(top[0], top[1], top[2]))
                    .bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                    cell.set_symbol("▀").set_style(style);
                }
            }
        }
    }
}
