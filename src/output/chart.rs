//! Day-of-year bar charts.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::analysis::{DAYS_IN_TABLE, DayHistogram};
use crate::error::Result;

const BAR_WIDTH: u32 = 2;
const PLOT_HEIGHT: u32 = 200;
const MARGIN: u32 = 10;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const BAR: Rgb<u8> = Rgb([52, 101, 164]);
const AXIS: Rgb<u8> = Rgb([96, 96, 96]);

/// Renders one bar per day of year, scaled to the busiest day.
pub fn render_activity(days: &DayHistogram) -> RgbImage {
    let width = DAYS_IN_TABLE as u32 * BAR_WIDTH + 2 * MARGIN;
    let height = PLOT_HEIGHT + 2 * MARGIN;
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let baseline = MARGIN + PLOT_HEIGHT;
    for x in MARGIN..width - MARGIN {
        img.put_pixel(x, baseline, AXIS);
    }

    let max = days.max();
    if max == 0 {
        return img;
    }

    for (bucket, &count) in days.buckets().iter().enumerate() {
        let bar = (u64::from(count) * u64::from(PLOT_HEIGHT) / u64::from(max)) as u32;
        let left = MARGIN + bucket as u32 * BAR_WIDTH;
        for x in left..left + BAR_WIDTH {
            for y in baseline - bar..baseline {
                img.put_pixel(x, y, BAR);
            }
        }
    }

    img
}

/// Renders the chart and saves it as PNG.
pub fn write_activity_chart(path: &Path, days: &DayHistogram) -> Result<()> {
    render_activity(days).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
