use super::{
    r#type::{Color, ColorChannel, PackedColor, Pixels, ScreenPoint},
    Result,
};
use css_color_parser::Color as CssColor;
use kiss3d::window::Window;
use nalgebra::{Point2, Vector2};

pub const WHITE: PackedColor = pack_rgb(255, 255, 255);
pub const GREY: PackedColor = pack_rgb(141, 138, 136);
pub const LIGHT_BROWN: PackedColor = pack_rgb(244, 219, 196);
pub const BLUE: PackedColor = pack_rgb(70, 139, 172);
pub const RED: PackedColor = pack_rgb(232, 57, 54);
pub const BROWN: PackedColor = pack_rgb(166, 112, 92);
pub const YELLOW: PackedColor = pack_rgb(243, 206, 136);
pub const LIGHT_BLUE: PackedColor = pack_rgb(208, 236, 240);
pub const DARK_BLUE: PackedColor = pack_rgb(70, 104, 166);

/// Primitive drawing commands the renderer emits each frame.
///
/// Coordinates are in pixels with the origin at the top-left corner
/// and the y axis pointing down.
pub trait Surface {
    fn clear(&mut self, color: &Color);

    fn draw_circle(&mut self, center: &ScreenPoint, radius: Pixels, color: &Color);

    fn draw_polyline(&mut self, points: &[ScreenPoint], color: &Color, width: Pixels);
}

pub const fn pack_rgb(r: u8, g: u8, b: u8) -> PackedColor {
    let channel_bits = 8;

    r as PackedColor
        | ((g as PackedColor) << channel_bits)
        | ((b as PackedColor) << 2 * channel_bits)
}

pub fn unpack_color(color: &PackedColor) -> Color {
    let channel_bits = 8 * std::mem::size_of::<u8>();

    let r = (color & 0xFF) as ColorChannel;
    let g = ((color >> channel_bits) & 0xFF) as ColorChannel;
    let b = ((color >> 2*channel_bits) & 0xFF) as ColorChannel;

    Color::new(r, g, b) / std::u8::MAX as ColorChannel
}

pub fn parse_color(src: &str) -> Result<Color> {
    let css_color = src.parse::<CssColor>()?;

    let color = Color::new(
        css_color.r as ColorChannel / 255.0,
        css_color.g as ColorChannel / 255.0,
        css_color.b as ColorChannel / 255.0
    );

    Ok(color)
}

/// Immediate-mode surface on top of the kiss3d planar line renderer.
pub struct WindowSurface<'w> {
    window: &'w mut Window,
}

impl<'w> WindowSurface<'w> {
    pub fn new(window: &'w mut Window) -> Self {
        Self { window }
    }

    // kiss3d's fixed planar view puts the origin at the window center with y pointing up.
    fn to_planar(&self, point: &ScreenPoint) -> Point2<f32> {
        let half_width = self.window.width() as f32 / 2.0;
        let half_height = self.window.height() as f32 / 2.0;

        Point2::new(point.x - half_width, half_height - point.y)
    }
}

impl<'w> Surface for WindowSurface<'w> {
    fn clear(&mut self, color: &Color) {
        self.window.set_background_color(color.x, color.y, color.z);
    }

    fn draw_circle(&mut self, center: &ScreenPoint, radius: Pixels, color: &Color) {
        let center = self.to_planar(center);

        // Filled disc out of horizontal chords.
        let mut dy = -radius;
        while dy <= radius {
            let half_chord = (radius * radius - dy * dy).max(0.0).sqrt();

            self.window.draw_planar_line(
                &Point2::new(center.x - half_chord, center.y + dy),
                &Point2::new(center.x + half_chord, center.y + dy),
                color
            );

            dy += 1.0;
        }
    }

    fn draw_polyline(&mut self, points: &[ScreenPoint], color: &Color, width: Pixels) {
        // Planar lines are always 1px wide, so wider strokes are built from parallel lines.
        for segment in points.windows(2) {
            for offset in stroke_offsets(width) {
                let (begin, end) = offset_segment(&segment[0], &segment[1], offset);
                let begin = self.to_planar(&begin);
                let end = self.to_planar(&end);

                self.window.draw_planar_line(&begin, &end, color);
            }
        }
    }
}

/// Offsets of the 1px lines covering a stroke of `width`, centered on zero.
fn stroke_offsets(width: Pixels) -> impl Iterator<Item = Pixels> {
    let lines = width.max(1.0).round() as usize;
    let first = -(lines as Pixels - 1.0) / 2.0;

    (0..lines).map(move |i| first + i as Pixels)
}

/// Shifts a segment by `offset` pixels along its normal.
fn offset_segment(begin: &ScreenPoint, end: &ScreenPoint, offset: Pixels) -> (ScreenPoint, ScreenPoint) {
    let direction = *end - *begin;
    let length = direction.norm();
    if length == 0.0 {
        return (*begin, *end);
    }

    let normal = Vector2::new(-direction.y, direction.x) * (offset / length);

    (*begin + normal, *end + normal)
}
