use {
    log::info,
    crate::{
        Result,
        graphics::{self, GREY, LIGHT_BROWN, BLUE, RED, BROWN, YELLOW, LIGHT_BLUE, DARK_BLUE},
        r#type::{Mass, PackedColor, Pixels, Velocity},
        scene::{
            Config,
            Constants,
            body::Body,
            orbit::{self, OrbitalElements},
            registry::BodyRegistry,
        },
    },
};

const LOG_TARGET: &'static str = "solar";

pub const SUN_MASS: Mass = 1.98892e30;
pub const SUN_RADIUS: Pixels = 10.0;

pub struct PlanetSpec {
    pub name: &'static str,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub radius: Pixels,
    pub color: PackedColor,
    pub mass: Mass,
    /// Tabulated velocity for the circular approximation, m/s.
    pub circular_velocity: Velocity,
}

pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        name: "mercury",
        semi_major_axis: 0.387,
        eccentricity: 0.2056,
        radius: 4.0,
        color: GREY,
        mass: 3.3010e23,
        circular_velocity: -47.87e3,
    },
    PlanetSpec {
        name: "venus",
        semi_major_axis: 0.723,
        eccentricity: 0.0068,
        radius: 8.0,
        color: LIGHT_BROWN,
        mass: 4.8673e24,
        circular_velocity: -35.02e3,
    },
    PlanetSpec {
        name: "earth",
        semi_major_axis: 1.000,
        eccentricity: 0.0167,
        radius: 8.0,
        color: BLUE,
        mass: 5.9722e24,
        circular_velocity: 29.78e3,
    },
    PlanetSpec {
        name: "mars",
        semi_major_axis: 1.524,
        eccentricity: 0.0934,
        radius: 4.0,
        color: RED,
        mass: 6.4169e23,
        circular_velocity: 24.007e3,
    },
    PlanetSpec {
        name: "jupiter",
        semi_major_axis: 5.203,
        eccentricity: 0.0484,
        radius: 12.0,
        color: BROWN,
        mass: 1.8981e27,
        circular_velocity: 13.07e3,
    },
    PlanetSpec {
        name: "saturn",
        semi_major_axis: 9.582,
        eccentricity: 0.0542,
        radius: 12.0,
        color: YELLOW,
        mass: 5.6832e26,
        circular_velocity: 9.69e3,
    },
    PlanetSpec {
        name: "uranus",
        semi_major_axis: 19.201,
        eccentricity: 0.0472,
        radius: 8.0,
        color: LIGHT_BLUE,
        mass: 8.6810e25,
        circular_velocity: 6.81e3,
    },
    PlanetSpec {
        name: "neptune",
        semi_major_axis: 30.047,
        eccentricity: 0.0086,
        radius: 8.0,
        color: DARK_BLUE,
        mass: 1.0241e26,
        circular_velocity: 5.43e3,
    },
];

/// The Sun at rest at the origin with the eight planets around it.
pub fn solar_system(constants: &Constants, config: &Config) -> Result<BodyRegistry> {
    let mut builder = BodyRegistry::builder(config.trail_limit()?);

    let sun = builder.add(Body::new(
        "sun".into(),
        SUN_MASS,
        SUN_RADIUS,
        graphics::unpack_color(&YELLOW)
    ));
    builder.designate_primary(sun)?;

    for planet_spec in PLANETS.iter() {
        let planet = Body::new(
            planet_spec.name.into(),
            planet_spec.mass,
            planet_spec.radius,
            graphics::unpack_color(&planet_spec.color)
        );

        let planet = orbit::place(
            planet,
            builder.body(sun)?,
            &OrbitalElements::new(planet_spec.semi_major_axis, planet_spec.eccentricity),
            planet_spec.circular_velocity,
            config.orbit_mode,
            constants
        )?;

        builder.add(planet);
    }

    info! {
        target: LOG_TARGET,
        "solar system with {} planets, {} orbits",
        PLANETS.len(),
        config.orbit_mode
    }

    builder.build()
}
