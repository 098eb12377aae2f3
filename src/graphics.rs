use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::canvas::Canvas;

pub const BACKGROUND: [u8; 4] = [32, 32, 32, 255];

/// Canvas backed by a `pixels` RGBA frame buffer of the grid's exact size.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        // The buffer keeps the grid's size; only the scaled surface follows the window.
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Translates a window position into buffer pixels. Positions in the
    /// letterbox around the buffer come back as out-of-range coordinates
    /// rather than being clamped.
    pub fn window_to_canvas(&self, position: PhysicalPosition<f64>) -> (i64, i64) {
        match self.pixels.window_pos_to_pixel((position.x as f32, position.y as f32)) {
            Ok((x, y)) => (x as i64, y as i64),
            Err((x, y)) => (x as i64, y as i64),
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

impl Canvas for GraphicsRenderer {
    fn clear(&mut self) {
        clear_frame(self.pixels.frame_mut(), BACKGROUND);
    }

    fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32, fill: &str, border: &str) {
        let (frame_width, frame_height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();
        let (fill, border) = (color_name_to_rgba(fill), color_name_to_rgba(border));
        fill_rect_static(frame, x, y, width, height, fill, frame_width, frame_height);
        stroke_rect_static(frame, x, y, width, height, border, frame_width, frame_height);
    }
}

pub fn color_name_to_rgba(color_name: &str) -> [u8; 4] {
    match color_name.to_lowercase().as_str() {
        "red" => [255, 0, 0, 255],
        "blue" => [0, 0, 255, 255],
        "green" => [0, 255, 0, 255],
        "yellow" => [255, 255, 0, 255],
        "orange" => [255, 165, 0, 255],
        "purple" => [128, 0, 128, 255],
        "pink" => [255, 192, 203, 255],
        "cyan" => [0, 255, 255, 255],
        "magenta" => [255, 0, 255, 255],
        "white" => [255, 255, 255, 255],
        "black" => [0, 0, 0, 255],
        "gray" | "grey" => [128, 128, 128, 255],
        "brown" => [165, 42, 42, 255],
        "lime" => [0, 255, 0, 255],
        _ => [255, 255, 255, 255], // Unknown names render white
    }
}

pub fn clear_frame(frame: &mut [u8], color: [u8; 4]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

fn put_pixel(frame: &mut [u8], px: u32, py: u32, color: [u8; 4], width: u32, height: u32) {
    if px < width && py < height {
        let index = ((py as usize * width as usize) + px as usize) * 4;
        if index + 3 < frame.len() {
            frame[index..index + 4].copy_from_slice(&color);
        }
    }
}

fn fill_rect_static(
    frame: &mut [u8],
    x: u32,
    y: u32,
    rect_width: u32,
    rect_height: u32,
    color: [u8; 4],
    width: u32,
    height: u32,
) {
    for dy in 0..rect_height {
        for dx in 0..rect_width {
            put_pixel(frame, x.saturating_add(dx), y.saturating_add(dy), color, width, height);
        }
    }
}

/// One-pixel outline along the inside edge of the rectangle.
fn stroke_rect_static(
    frame: &mut [u8],
    x: u32,
    y: u32,
    rect_width: u32,
    rect_height: u32,
    color: [u8; 4],
    width: u32,
    height: u32,
) {
    if rect_width == 0 || rect_height == 0 {
        return;
    }
    let right = x.saturating_add(rect_width - 1);
    let bottom = y.saturating_add(rect_height - 1);

    for dx in 0..rect_width {
        let px = x.saturating_add(dx);
        put_pixel(frame, px, y, color, width, height);
        put_pixel(frame, px, bottom, color, width, height);
    }
    for dy in 0..rect_height {
        let py = y.saturating_add(dy);
        put_pixel(frame, x, py, color, width, height);
        put_pixel(frame, right, py, color, width, height);
    }
}
