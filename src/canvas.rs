use egui::{Color32, ColorImage};

/// Integer pixel coordinate on the canvas.
///
/// Signed because pointer samples taken while dragging outside the canvas
/// still have to be representable; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for PixelPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Immutable copy of every pixel of a [`Canvas`] at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    pixels: Box<[Color32]>,
}

impl Snapshot {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }
}

/// The raster surface: a fixed-size grid of opaque pixels, row-major.
///
/// Dimensions are set once in [`Canvas::new`] and never change. Everything
/// that mutates the drawing goes through [`Canvas::fill`],
/// [`Canvas::draw_line`] or [`Canvas::restore`].
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color32,
    pixels: Vec<Color32>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The colour the canvas was created with. Clearing and erasing paint it.
    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Pixel at `pos`, or `None` outside the canvas.
    pub fn get(&self, pos: PixelPos) -> Option<Color32> {
        self.index(pos).map(|idx| self.pixels[idx])
    }

    #[inline]
    fn index(&self, pos: PixelPos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Paint a straight segment of the given stroke width with round caps.
    ///
    /// A pixel is painted when its sample point lies within `width / 2` of
    /// the segment, so a chain of short segments joins without gaps and a
    /// zero-length segment leaves a round dot. Odd widths sample at the pixel
    /// centre, even widths at `(x + 0.5, y + 0.5)`, so the stroke covers
    /// exactly `width` rows or columns. Both endpoints are always painted.
    /// Whatever falls outside the canvas is silently clipped.
    pub fn draw_line(&mut self, from: PixelPos, to: PixelPos, color: Color32, width: u32) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let width = width.max(1);
        let radius = width as f32 / 2.0;
        let offset = if width % 2 == 0 { 0.5 } else { 0.0 };
        let reach = radius.ceil() as i32;
        let max_x = self.width.min(i32::MAX as usize) as i32 - 1;
        let max_y = self.height.min(i32::MAX as usize) as i32 - 1;

        let x0 = from.x.min(to.x).saturating_sub(reach).max(0);
        let x1 = from.x.max(to.x).saturating_add(reach).min(max_x);
        let y0 = from.y.min(to.y).saturating_sub(reach).max(0);
        let y1 = from.y.max(to.y).saturating_add(reach).min(max_y);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let radius_sq = radius * radius;
        for y in y0..=y1 {
            let row = y as usize * self.width;
            for x in x0..=x1 {
                let (px, py) = (x as f32 + offset, y as f32 + offset);
                if distance_sq_to_segment(px, py, from, to) <= radius_sq {
                    self.pixels[row + x as usize] = color;
                }
            }
        }
    }

    /// Full independent copy of the current pixels.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone().into_boxed_slice(),
        }
    }

    /// Overwrite every pixel with the snapshot's.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.width != self.width || snapshot.height != self.height {
            log::error!(
                "Ignoring snapshot of size {}x{} for a {}x{} canvas",
                snapshot.width,
                snapshot.height,
                self.width,
                self.height
            );
            return;
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
    }

    /// Copy into an egui image for display.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width, self.height],
            pixels: self.pixels.clone(),
        }
    }

    /// Copy into an 8-bit RGB buffer for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            buffer.extend_from_slice(&[pixel.r(), pixel.g(), pixel.b()]);
        }
        // The buffer length always matches width * height * 3.
        image::RgbImage::from_raw(self.width as u32, self.height as u32, buffer)
            .unwrap_or_else(|| image::RgbImage::new(self.width as u32, self.height as u32))
    }
}

/// Squared distance from the point `(px, py)` to the segment `a`-`b`.
fn distance_sq_to_segment(px: f32, py: f32, a: PixelPos, b: PixelPos) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (dx, dy) = (b.x as f32 - ax, b.y as f32 - ay);

    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (ax + t * dx - px, ay + t * dy - py);
    cx * cx + cy * cy
}
