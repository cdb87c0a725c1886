use crate::{
    graphics::Surface,
    r#type::{Pixels, ScreenPoint},
    scene::{body::Body, view::ViewState},
};

pub const TRAIL_WIDTH: Pixels = 2.0;

/// Trails shorter than this are not drawn.
pub const MIN_TRAIL_POINTS: usize = 3;

/// Projects the trail of `body` into a polyline.
/// Returns `None` while the trail is too short to be drawn.
pub fn trail_polyline(body: &Body, view: &ViewState, scale: f64) -> Option<Vec<ScreenPoint>> {
    let trail = body.trail();
    if trail.len() < MIN_TRAIL_POINTS {
        return None;
    }

    Some(
        trail.iter()
            .map(|point| view.project(point, scale))
            .collect()
    )
}

/// Emits the drawing commands of one body: its trail (if enabled) and then its marker.
pub fn draw_body<S: Surface>(
    surface: &mut S,
    body: &Body,
    view: &ViewState,
    scale: f64,
    draw_trail: bool,
) {
    if draw_trail {
        if let Some(points) = trail_polyline(body, view, scale) {
            surface.draw_polyline(&points, body.color(), TRAIL_WIDTH);
        }
    }

    let center = view.project(body.position(), scale);
    let radius = view.scale_radius(body.radius()).max(1.0);

    surface.draw_circle(&center, radius, body.color());
}
