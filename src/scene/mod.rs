use {
    std::num::NonZeroUsize,
    log::{debug, info},
    crate::{
        Result,
        make_error,
        graphics::Surface,
        message::Message,
        r#type::{Color, Seconds, Tick},
    },
};

mod body;
mod trail;
mod registry;
mod physics;
mod view;
mod render;
pub mod orbit;
pub mod solar;

pub use body::Body;
pub use registry::BodyRegistry;
pub use view::ViewState;
pub use orbit::OrbitMode;

const LOG_TARGET: &'static str = "scene";

pub const G: f64 = 6.67428e-11;
pub const AU: f64 = 149.6e6 * 1000.0;
pub const DEFAULT_PIXELS_PER_AU: f64 = 40.0;
pub const DAY: Seconds = 3600.0 * 24.0;

/// Longest span `chrono::Duration` can hold, in whole seconds.
pub const MAX_SECONDS: i64 = std::i64::MAX / 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Constants {
    pub g: f64,
    pub au: f64,
    /// Pixels per meter at zoom 1.
    pub scale: f64,
    /// Simulated seconds advanced by one tick.
    pub timestep: Seconds,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryMotion {
    /// The primary is integrated like any other body.
    Free,

    /// The primary keeps its initial state.
    Fixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub orbit_mode: OrbitMode,
    pub trails: bool,
    pub zoom: bool,
    pub max_trail_len: Option<usize>,
    pub primary_motion: PrimaryMotion,
}

impl Constants {
    pub fn new(pixels_per_au: f64, timestep: Seconds) -> Result<Self> {
        let constants = Self {
            scale: pixels_per_au / AU,
            timestep,
            ..Self::default()
        };

        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<()> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(self.g) || !positive(self.au) {
            return Err(make_error![Error::Config::InvalidConstant(
                format!("G = {}, AU = {} must be positive", self.g, self.au)
            )]);
        }

        if !positive(self.scale) {
            return Err(make_error![Error::Config::InvalidConstant(
                format!("scale must be positive, got {} px/m", self.scale)
            )]);
        }

        if !positive(self.timestep) {
            return Err(make_error![Error::Config::InvalidConstant(
                format!("timestep must be positive, got {} s", self.timestep)
            )]);
        }

        if self.timestep > MAX_SECONDS as Seconds {
            return Err(make_error![Error::Config::InvalidConstant(
                format!("timestep must not exceed {} s, got {} s", MAX_SECONDS, self.timestep)
            )]);
        }

        Ok(())
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            g: G,
            au: AU,
            scale: DEFAULT_PIXELS_PER_AU / AU,
            timestep: DAY,
        }
    }
}

impl Config {
    /// `None` means unbounded trails.
    pub fn trail_limit(&self) -> Result<Option<NonZeroUsize>> {
        match self.max_trail_len {
            Some(len) => NonZeroUsize::new(len)
                .map(Some)
                .ok_or(make_error![Error::Config::InvalidTrailLength]),
            None => Ok(None),
        }
    }

    fn validate(&self) -> Result<()> {
        self.trail_limit().map(|_| ())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orbit_mode: OrbitMode::Elliptical,
            trails: true,
            zoom: true,
            max_trail_len: None,
            primary_motion: PrimaryMotion::Free,
        }
    }
}

/// Everything one simulation run needs: the bodies, the view and the constants.
pub struct Simulation {
    registry: BodyRegistry,
    constants: Constants,
    config: Config,
    view: ViewState,
    tick: Tick,
}

impl Simulation {
    pub fn new(
        registry: BodyRegistry,
        constants: Constants,
        config: Config,
        view: ViewState,
    ) -> Result<Self> {
        constants.validate()?;
        config.validate()?;

        Ok(Self {
            registry,
            constants,
            config,
            view,
            tick: 0,
        })
    }

    pub fn solar_system(constants: Constants, config: Config, view: ViewState) -> Result<Self> {
        constants.validate()?;
        config.validate()?;

        let registry = solar::solar_system(&constants, &config)?;
        Self::new(registry, constants, config, view)
    }

    pub fn bodies(&self) -> &[Body] {
        self.registry.bodies()
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Simulated time since the first tick. Saturates at `MAX_SECONDS`.
    pub fn elapsed(&self) -> chrono::Duration {
        duration(self.tick as Seconds * self.constants.timestep)
    }

    pub fn step_duration(&self) -> chrono::Duration {
        duration(self.constants.timestep)
    }

    /// Advances the simulation by exactly one timestep.
    pub fn advance(&mut self) -> Result<()> {
        physics::step(
            &mut self.registry,
            &self.constants,
            self.config.primary_motion,
            self.tick
        )?;

        self.tick += 1;
        Ok(())
    }

    pub fn total_energy(&self) -> f64 {
        physics::total_energy(self.bodies(), self.constants.g)
    }

    pub fn angular_momentum(&self) -> f64 {
        physics::angular_momentum(self.bodies())
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::ZoomIn | Message::ZoomOut if !self.config.zoom => debug! {
                target: LOG_TARGET,
                "`{}` ignored, zoom is disabled", message.name()
            },
            Message::ZoomIn => self.view.zoom_in(),
            Message::ZoomOut => self.view.zoom_out(),
            Message::Quit => info! {
                target: LOG_TARGET,
                "quit requested at tick #{}", self.tick
            },
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S, background: &Color) {
        surface.clear(background);

        for body in self.bodies() {
            render::draw_body(
                surface,
                body,
                &self.view,
                self.constants.scale,
                self.config.trails
            );
        }
    }
}

fn duration(seconds: Seconds) -> chrono::Duration {
    let seconds = seconds.max(0.0).min(MAX_SECONDS as Seconds) as i64;

    chrono::Duration::seconds(seconds.min(MAX_SECONDS))
}
