use super::{
    graphics::{self, WindowSurface, WHITE},
    logger::Logger,
    message::Message,
    r#type::{Color, Distance, TimeFormat, Zoom},
    scene::{Config, Constants, OrbitMode, PrimaryMotion, Simulation, ViewState},
    make_error,
    Result,
};
use kiss3d::{
    text::Font,
    window::{CanvasSetup, NumSamples, Window},
};
use log::{debug, info};
use nalgebra::Point2;
use std::fmt::Write;
use structopt::StructOpt;

const LOG_TARGET: &'static str = "application";
pub const APP_NAME: &'static str = "orrery";

/// Ticks between two conserved-quantity reports.
const DRIFT_REPORT_PERIOD: u64 = 365;

pub struct App {
    window: Window,
    simulation: Simulation,
    background: Color,
    is_stats_enabled: bool,
    is_quit_requested: bool,
    frame: u64,
    initial_energy: f64,
    initial_angular_momentum: f64,
}

impl App {
    pub fn new(options: Options) -> Result<Self> {
        if let Err(err) = Logger::init(options.log_filter) {
            eprintln!("unable to initialize logging system: {}", err);
        }

        let constants = Constants::new(options.scale, options.timestep)?;
        let config = Config {
            orbit_mode: options.orbit_mode,
            trails: !options.no_trails,
            zoom: !options.no_zoom,
            max_trail_len: options.max_trail_len,
            primary_motion: if options.fixed_primary {
                PrimaryMotion::Fixed
            } else {
                PrimaryMotion::Free
            },
        };
        let view = ViewState::new(
            options.width,
            options.height,
            options.zoom,
            options.min_zoom,
            options.max_zoom,
            options.zoom_step,
        )?;

        let simulation = Simulation::solar_system(constants, config, view)?;
        let fps = frame_rate_limit(options.fps)?;

        let mut window = Window::new_with_setup(
            APP_NAME,
            options.width,
            options.height,
            CanvasSetup {
                vsync: true,
                samples: NumSamples::Four,
            },
        );
        window.set_framerate_limit(Some(fps));

        info! {
            target: LOG_TARGET,
            "{} bodies, timestep {}, {} px/AU",
            simulation.bodies().len(),
            TimeFormat::SimulatedStep(simulation.step_duration()),
            options.scale
        }

        let initial_energy = simulation.total_energy();
        let initial_angular_momentum = simulation.angular_momentum();

        Ok(Self {
            window,
            simulation,
            background: options.background,
            is_stats_enabled: !options.no_stats,
            is_quit_requested: false,
            frame: 0,
            initial_energy,
            initial_angular_momentum,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.handle_window_events();

            if self.is_quit_requested {
                break;
            }

            self.simulation.view_mut().resize(self.window.width(), self.window.height());
            self.simulation.advance()?;
            self.report_drift();

            self.simulation.render(&mut WindowSurface::new(&mut self.window), &self.background);
            if self.is_stats_enabled {
                self.draw_stats();
            }

            if !self.window.render() {
                break;
            }

            self.frame += 1;
        }

        info! {
            target: LOG_TARGET,
            "simulation is completed after {} frames", self.frame
        }

        Ok(())
    }

    fn handle_window_events(&mut self) {
        let messages = self.window.events()
            .iter()
            .filter_map(|event| Message::from_window_event(&event.value))
            .collect::<Vec<_>>();

        for message in messages {
            debug! {
                target: LOG_TARGET,
                "`{}` received", message.name()
            }

            if let Message::Quit = message {
                self.is_quit_requested = true;
            }

            self.simulation.handle_message(message);
        }
    }

    fn report_drift(&self) {
        let tick = self.simulation.tick();
        if tick % DRIFT_REPORT_PERIOD != 0 {
            return;
        }

        let relative = |now: f64, initial: f64| if initial == 0.0 {
            now - initial
        } else {
            (now - initial) / initial
        };

        debug! {
            target: LOG_TARGET,
            "tick #{}: energy drift {:e}, angular momentum drift {:e}",
            tick,
            relative(self.simulation.total_energy(), self.initial_energy),
            relative(self.simulation.angular_momentum(), self.initial_angular_momentum)
        }
    }

    fn draw_stats(&mut self) {
        let stats_text = self.stats_text();
        self.draw_text(&stats_text, Point2::origin(), graphics::unpack_color(&WHITE));
    }

    fn stats_text(&self) -> String {
        let mut text = String::new();
        let au = self.simulation.constants().au;

        let _ = writeln!(&mut text, "frame #{}", self.frame);
        let _ = writeln!(
            &mut text,
            "simulated time: {}",
            TimeFormat::SimulatedTime(self.simulation.elapsed())
        );
        let _ = writeln!(&mut text, "zoom: {}", format_zoom(self.simulation.view().zoom()));

        for (index, body) in self.simulation.bodies().iter().enumerate() {
            if self.simulation.registry().is_primary(index) {
                continue;
            }

            let _ = writeln!(
                &mut text,
                "{}: {} AU",
                body.name(),
                format_distance(body.distance_to_primary(), au)
            );
        }

        text
    }

    fn draw_text(&mut self, text: &str, pos: Point2<f32>, color: Color) {
        let scale = 40.0;
        let font = Font::default();

        self.window.draw_text(text, &pos, scale, &font, &color);
    }
}

fn frame_rate_limit(fps: u64) -> Result<u64> {
    if fps == 0 {
        return Err(make_error![Error::Config::InvalidFrameRate]);
    }

    Ok(fps)
}

fn format_zoom(zoom: Zoom) -> String {
    format!("{:.1}x", zoom)
}

fn format_distance(distance: Distance, au: f64) -> String {
    format!("{:.3}", distance / au)
}

#[derive(StructOpt)]
#[structopt(name = "orrery", about = "2D gravitational N-body visualizer")]
pub struct Options {
    /// Log level filter
    #[structopt(short, long, default_value = "warn")]
    pub log_filter: log::LevelFilter,

    /// Window width in pixels
    #[structopt(long, default_value = "1500")]
    pub width: u32,

    /// Window height in pixels
    #[structopt(long, default_value = "800")]
    pub height: u32,

    /// Frame rate limit
    #[structopt(long, default_value = "60")]
    pub fps: u64,

    /// Initial orbits: `circular` or `elliptical`
    #[structopt(long, default_value = "elliptical")]
    pub orbit_mode: OrbitMode,

    /// Do not draw trails
    #[structopt(long)]
    pub no_trails: bool,

    /// Ignore zoom keys
    #[structopt(long)]
    pub no_zoom: bool,

    /// Hide the stats overlay
    #[structopt(long)]
    pub no_stats: bool,

    /// Keep the primary body at its initial state
    #[structopt(long)]
    pub fixed_primary: bool,

    /// Keep only the last N trail points of every body
    #[structopt(long)]
    pub max_trail_len: Option<usize>,

    /// Initial zoom
    #[structopt(long, default_value = "0.5")]
    pub zoom: Zoom,

    #[structopt(long, default_value = "0.5")]
    pub min_zoom: Zoom,

    #[structopt(long, default_value = "4.0")]
    pub max_zoom: Zoom,

    /// Zoom change per key press
    #[structopt(long, default_value = "0.1")]
    pub zoom_step: Zoom,

    /// Pixels per astronomical unit at zoom 1
    #[structopt(long, default_value = "40")]
    pub scale: f64,

    /// Simulated seconds per tick
    #[structopt(long, default_value = "86400")]
    pub timestep: f64,

    /// Background color, CSS format
    #[structopt(long, default_value = "#000000", parse(try_from_str = graphics::parse_color))]
    pub background: Color,
}
