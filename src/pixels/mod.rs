//! Terminal pixel art
//!
//! A [`Pixels`] value is a flat list of [`Segment`]s, newlines included,
//! built from an ASCII grid or from RGBA pixel data. Every constructor has
//! an async twin that walks its input with [`aiter`]/[`arange`] and hands
//! pixel conversion to the blocking pool.

pub mod segment;

pub use segment::{Rgb, Segment, Style};

use crate::error::{RipixError, RipixResult};
use crate::functions::{aiter, arange, run_in_executor};
use futures::StreamExt;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Text cell drawn for each image pixel.
const PIXEL_CELL: &str = "  ";

/// Renderable grid of styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pixels {
    segments: Vec<Segment>,
}

impl Pixels {
    /// Create from any sequence of segments.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Create from a 2D grid of characters.
    ///
    /// Characters found in `mapping` are replaced by their segment; all
    /// others, newlines and whitespace included, stay as plain text.
    #[must_use]
    pub fn from_ascii(grid: &str, mapping: &HashMap<char, Segment>) -> Self {
        Self::from_segments(grid.chars().map(|c| ascii_segment(c, mapping)))
    }

    /// Async twin of [`Pixels::from_ascii`].
    pub async fn from_ascii_async(grid: &str, mapping: &HashMap<char, Segment>) -> Self {
        let mut segments = Vec::with_capacity(grid.len());
        let mut chars = aiter(grid.chars());
        while let Some(c) = chars.next().await {
            segments.push(ascii_segment(c, mapping));
        }
        Self::from_segments(segments)
    }

    /// Create from row-major RGBA data, two columns per pixel.
    ///
    /// Pixels with zero alpha are left unstyled.
    ///
    /// # Errors
    ///
    /// Returns [`RipixError::InvalidArgument`] when `data` is not a whole
    /// number of `width`-sized rows.
    pub fn from_rgba(width: usize, data: &[[u8; 4]]) -> RipixResult<Self> {
        image_height(width, data.len())?;
        let segments = if width == 0 {
            Vec::new()
        } else {
            data.chunks(width).flat_map(row_segments).collect()
        };
        Ok(Self::from_segments(segments))
    }

    /// Async twin of [`Pixels::from_rgba`]; each row converts on the
    /// blocking pool.
    ///
    /// # Errors
    ///
    /// Same as [`Pixels::from_rgba`], plus [`RipixError::TaskCancelled`]
    /// when a row conversion is lost.
    pub async fn from_rgba_async(width: usize, data: Vec<[u8; 4]>) -> RipixResult<Self> {
        let height = image_height(width, data.len())?;
        let data: Arc<[[u8; 4]]> = data.into();

        let mut segments = Vec::with_capacity(data.len() + height);
        let mut rows = arange(height)?;
        while let Some(y) = rows.next().await {
            let data = Arc::clone(&data);
            let row = run_in_executor(move || row_segments(&data[y * width..(y + 1) * width]))
                .join()
                .await?;
            segments.extend(row);
        }
        debug!("Converted {width}x{height} image into {} segments", segments.len());
        Ok(Self::from_segments(segments))
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenated text without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments.iter().try_for_each(|segment| write!(f, "{segment}"))
    }
}

fn ascii_segment(c: char, mapping: &HashMap<char, Segment>) -> Segment {
    mapping
        .get(&c)
        .cloned()
        .unwrap_or_else(|| Segment::plain(c))
}

fn row_segments(row: &[[u8; 4]]) -> Vec<Segment> {
    row.iter()
        .map(|&[r, g, b, a]| {
            if a > 0 {
                Segment::new(PIXEL_CELL, Style::on(Rgb(r, g, b)))
            } else {
                Segment::plain(PIXEL_CELL)
            }
        })
        .chain(std::iter::once(Segment::plain("\n")))
        .collect()
}

fn image_height(width: usize, len: usize) -> RipixResult<usize> {
    match len.checked_div(width) {
        Some(height) if len % width == 0 => Ok(height),
        None if len == 0 => Ok(0),
        _ => Err(RipixError::invalid_argument(format!(
            "{len} pixels do not fill rows of width {width}"
        ))),
    }
}
