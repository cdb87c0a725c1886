use {
    log::debug,
    crate::{
        Result,
        make_error,
        r#type::{Pixels, ScreenPoint, Vector, Zoom},
    },
};

const LOG_TARGET: &'static str = "view";

/// Viewport size and the current zoom factor.
///
/// Zoom is applied in the projection itself, so a zoomed frame is equivalent
/// to scaling the unzoomed frame about the viewport center.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    width: u32,
    height: u32,
    zoom: Zoom,
    min_zoom: Zoom,
    max_zoom: Zoom,
    zoom_step: Zoom,
}

impl ViewState {
    pub fn new(
        width: u32,
        height: u32,
        zoom: Zoom,
        min_zoom: Zoom,
        max_zoom: Zoom,
        zoom_step: Zoom,
    ) -> Result<Self> {
        if !(min_zoom.is_finite() && max_zoom.is_finite()) || min_zoom <= 0.0 || min_zoom > max_zoom {
            return Err(make_error![Error::Config::InvalidZoom(
                format!("range [{}, {}] is empty or not positive", min_zoom, max_zoom)
            )]);
        }

        if !zoom_step.is_finite() || zoom_step <= 0.0 {
            return Err(make_error![Error::Config::InvalidZoom(
                format!("step must be positive, got {}", zoom_step)
            )]);
        }

        if !zoom.is_finite() {
            return Err(make_error![Error::Config::InvalidZoom(
                format!("initial zoom must be finite, got {}", zoom)
            )]);
        }

        Ok(Self {
            width,
            height,
            zoom: zoom.max(min_zoom).min(max_zoom),
            min_zoom,
            max_zoom,
            zoom_step,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.zoom_step);
    }

    fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);

        debug! {
            target: LOG_TARGET,
            "zoom is {:.2}", self.zoom
        }
    }

    /// Maps a simulation-space point (meters) to pixels.
    /// `scale` is pixels per meter at zoom 1.
    pub fn project(&self, point: &Vector, scale: f64) -> ScreenPoint {
        let factor = scale * self.zoom;

        ScreenPoint::new(
            (point.x * factor + self.width as f64 / 2.0) as Pixels,
            (point.y * factor + self.height as f64 / 2.0) as Pixels,
        )
    }

    pub fn scale_radius(&self, radius: Pixels) -> Pixels {
        radius * self.zoom as Pixels
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error, Config},
        scene::view::ViewState,
        r#type::{Pixels, Vector},
    };
    use approx::assert_relative_eq;

    fn view() -> ViewState {
        ViewState::new(1500, 800, 0.5, 0.5, 4.0, 0.1).unwrap()
    }

    #[test]
    fn test_project_formula() {
        let au = 149.6e9;
        let scale = 40.0 / au;
        let mut view = view();

        let point = Vector::new(1.5 * au, -0.25 * au);
        let projected = view.project(&point, scale);
        assert_eq!(projected.x, (point.x * (scale * 0.5) + 750.0) as Pixels);
        assert_eq!(projected.y, (point.y * (scale * 0.5) + 400.0) as Pixels);
        assert_relative_eq!(projected.x, 780.0, epsilon = 1e-3);
        assert_relative_eq!(projected.y, 395.0, epsilon = 1e-3);

        view.zoom_in();
        let zoom = view.zoom();
        let projected = view.project(&point, scale);
        assert_eq!(projected.x, (point.x * (scale * zoom) + 750.0) as Pixels);
        assert_eq!(projected.y, (point.y * (scale * zoom) + 400.0) as Pixels);
    }

    #[test]
    fn test_origin_maps_to_center() {
        let view = view();
        let center = view.project(&Vector::zeros(), 1.0);

        assert_eq!(center.x, 750.0);
        assert_eq!(center.y, 400.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut view = view();

        view.zoom_out();
        assert_relative_eq!(view.zoom(), 0.5);

        for _ in 0..100 {
            view.zoom_in();
        }
        assert_relative_eq!(view.zoom(), 4.0);

        view.zoom_out();
        assert_relative_eq!(view.zoom(), 3.9, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_zoom_clamped() {
        let view = ViewState::new(100, 100, 10.0, 0.5, 4.0, 0.1).unwrap();
        assert_relative_eq!(view.zoom(), 4.0);
    }

    #[test]
    fn test_invalid_zoom() {
        assert!(matches![
            ViewState::new(100, 100, 1.0, 2.0, 1.0, 0.1),
            Err(Error::Config(Config::InvalidZoom(_)))
        ]);
        assert!(matches![
            ViewState::new(100, 100, 1.0, 0.0, 1.0, 0.1),
            Err(Error::Config(Config::InvalidZoom(_)))
        ]);
        assert!(matches![
            ViewState::new(100, 100, 1.0, 0.5, 1.0, 0.0),
            Err(Error::Config(Config::InvalidZoom(_)))
        ]);
    }

    #[test]
    fn test_resize_and_radius() {
        let mut view = view();
        view.resize(200, 100);

        assert_eq!(view.width(), 200);
        assert_eq!(view.height(), 100);
        assert_relative_eq!(view.scale_radius(8.0), 4.0);
    }
}
