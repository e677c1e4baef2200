use super::{color::Color, surface::DisplaySurface};
use anyhow::Context;
use glam::DVec2;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use std::path::Path;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// CPU side [`DisplaySurface`].
///
/// Polygons are written into a transparent RGBA canvas, replacing whatever was there (so a
/// polygon with alpha 0 erases). [`DisplaySurface::present`] composites the canvas over the
/// background into [`Self::presented`].
pub struct Framebuffer {
    width: u32,
    height: u32,
    background: [u8; 4],
    canvas: Vec<[u8; 4]>,
    /// Last presented frame as `0RGB` words, row major
    presented: Vec<u32>,
}

impl Framebuffer {
    pub fn new(size: [u32; 2]) -> Self {
        let [width, height] = size;
        let pixel_count = width as usize * height as usize;
        Self {
            width,
            height,
            background: [0, 0, 0, 255],
            canvas: vec![TRANSPARENT; pixel_count],
            presented: vec![0; pixel_count],
        }
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    pub fn presented(&self) -> &[u32] {
        &self.presented
    }

    /// RGB of a presented pixel
    #[cfg(test)]
    pub fn presented_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let word = self.presented[self.index(x, y)];
        Some([(word >> 16) as u8, (word >> 8) as u8, word as u8])
    }

    /// Canvas pixel before compositing, including alpha
    #[cfg(test)]
    pub fn canvas_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.canvas[self.index(x, y)])
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        let rgba: Vec<u8> = self
            .presented
            .iter()
            .flat_map(|word| [(word >> 16) as u8, (word >> 8) as u8, *word as u8, 255])
            .collect();
        let image = image::RgbaImage::from_raw(self.width, self.height, rgba)
            .context("framebuffer size doesn't match pixel count")?;
        image
            .save(path)
            .with_context(|| format!("writing image to {}", path.display()))?;
        info!("saved frame to {}", path.display());
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Fills the pixels whose centers are inside the convex polygon
    fn fill_convex(&mut self, points: &[DVec2], rgba: [u8; 4]) {
        if points.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }
        if points.iter().any(|p| !p.is_finite()) {
            trace!("skipping polygon with non-finite corners");
            return;
        }

        let (y_min, y_max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let first_row = (y_min - 0.5).ceil().max(0.) as u32;
        let last_row = (y_max - 0.5).floor().min(self.height as f64 - 1.);
        if last_row < 0. {
            return;
        }
        let last_row = last_row as u32;

        for row in first_row..=last_row {
            let Some((x_start, x_end)) = row_span(points, row as f64 + 0.5) else {
                continue;
            };
            let first_col = (x_start - 0.5).ceil().max(0.);
            let end_col = (x_end - 0.5).ceil().min(self.width as f64);
            if end_col <= first_col {
                continue;
            }
            let row_start = self.index(0, row);
            self.canvas[row_start + first_col as usize..row_start + end_col as usize].fill(rgba);
        }
    }
}

/// Leftmost and rightmost x where the horizontal line at `y` crosses the polygon's edges
fn row_span(points: &[DVec2], y: f64) -> Option<(f64, f64)> {
    let mut span: Option<(f64, f64)> = None;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let crosses = (a.y <= y && y < b.y) || (b.y <= y && y < a.y);
        if !crosses {
            continue;
        }
        let x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
        span = Some(match span {
            Some((lo, hi)) => (lo.min(x), hi.max(x)),
            None => (x, x),
        });
    }
    span
}

fn composite(over: [u8; 4], under: [u8; 4]) -> u32 {
    let alpha = over[3] as f64 / 255.;
    let mix = |i: usize| -> u32 {
        (over[i] as f64 * alpha + under[i] as f64 * (1. - alpha)).round() as u32
    };
    (mix(0) << 16) | (mix(1) << 8) | mix(2)
}

impl DisplaySurface for Framebuffer {
    fn fill_background(&mut self, color: Color) {
        self.background = color.to_rgba8();
        self.canvas.fill(TRANSPARENT);
    }

    fn draw_filled_polygon(&mut self, points: &[DVec2], color: Color) {
        self.fill_convex(points, color.to_rgba8());
    }

    fn present(&mut self) -> anyhow::Result<()> {
        let background = self.background;
        for (out, pixel) in self.presented.iter_mut().zip(&self.canvas) {
            *out = composite(*pixel, background);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> [DVec2; 4] {
        [
            DVec2::new(x0, y0),
            DVec2::new(x0 + size, y0),
            DVec2::new(x0 + size, y0 + size),
            DVec2::new(x0, y0 + size),
        ]
    }

    #[test]
    fn fills_pixel_centers_inside_polygon() {
        let mut framebuffer = Framebuffer::new([10, 10]);
        framebuffer.fill_background(Color::rgb(240., 240., 240.));
        framebuffer.draw_filled_polygon(&square(2., 3., 4.), Color::rgb(255., 0., 0.));
        framebuffer.present().unwrap();

        assert_eq!(framebuffer.presented_pixel(2, 3), Some([255, 0, 0]));
        assert_eq!(framebuffer.presented_pixel(5, 6), Some([255, 0, 0]));
        assert_eq!(framebuffer.presented_pixel(6, 6), Some([240, 240, 240]));
        assert_eq!(framebuffer.presented_pixel(1, 3), Some([240, 240, 240]));
        assert_eq!(framebuffer.presented_pixel(10, 0), None);
    }

    #[test]
    fn transparent_polygon_erases_canvas() {
        let mut framebuffer = Framebuffer::new([8, 8]);
        framebuffer.fill_background(Color::rgb(10., 20., 30.));
        framebuffer.draw_filled_polygon(&square(0., 0., 8.), Color::rgb(200., 200., 200.));
        framebuffer.draw_filled_polygon(&square(0., 0., 4.), Color::rgba(0., 0., 0., 0.));
        framebuffer.present().unwrap();

        assert_eq!(framebuffer.canvas_pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(framebuffer.presented_pixel(1, 1), Some([10, 20, 30]));
        assert_eq!(framebuffer.presented_pixel(6, 6), Some([200, 200, 200]));
    }

    #[test]
    fn triangle_and_clipping() {
        let mut framebuffer = Framebuffer::new([6, 6]);
        framebuffer.fill_background(Color::rgb(0., 0., 0.));
        // partly off screen
        framebuffer.draw_filled_polygon(
            &[DVec2::new(-10., -10.), DVec2::new(20., -10.), DVec2::new(-10., 20.)],
            Color::rgb(0., 255., 0.),
        );
        framebuffer.present().unwrap();
        assert_eq!(framebuffer.presented_pixel(0, 0), Some([0, 255, 0]));
        assert_eq!(framebuffer.presented_pixel(5, 5), Some([0, 0, 0]));
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut framebuffer = Framebuffer::new([4, 4]);
        framebuffer.fill_background(Color::rgb(0., 0., 0.));
        let flat = [DVec2::new(0., 2.), DVec2::new(4., 2.), DVec2::new(4., 2.), DVec2::new(0., 2.)];
        framebuffer.draw_filled_polygon(&flat, Color::rgb(255., 255., 255.));
        framebuffer.draw_filled_polygon(&[DVec2::NAN; 4], Color::rgb(255., 255., 255.));
        framebuffer.present().unwrap();
        assert!(framebuffer.presented().iter().all(|p| *p == 0));
    }

    #[test]
    fn snapshot_round_trips_through_png() {
        let mut framebuffer = Framebuffer::new([4, 4]);
        framebuffer.fill_background(Color::rgb(240., 240., 240.));
        framebuffer.draw_filled_polygon(&square(0., 0., 2.), Color::rgb(160., 200., 255.));
        framebuffer.present().unwrap();

        let path =
            std::env::temp_dir().join(format!("cubeslice-snapshot-{}.png", std::process::id()));
        framebuffer.save_png(&path).unwrap();
        let image = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(image.dimensions(), (4, 4));
        assert_eq!(image.get_pixel(1, 1).0, [160, 200, 255, 255]);
        assert_eq!(image.get_pixel(3, 3).0, [240, 240, 240, 255]);
    }

    #[test]
    fn half_transparent_blends() {
        assert_eq!(composite([255, 0, 0, 0], [0, 0, 255, 255]), 0x0000ff);
        assert_eq!(composite([200, 0, 0, 255], [0, 0, 255, 255]), 0xc80000);
        assert_eq!(composite([255, 255, 255, 128], [0, 0, 0, 255]) >> 16, 128);
    }
}
