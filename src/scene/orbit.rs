use {
    std::{fmt, str::FromStr},
    crate::{
        Result,
        make_error,
        math,
        error::Parse,
        r#type::{Vector, Velocity},
        scene::{Constants, body::Body},
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitMode {
    /// On the x axis at `a` with a tabulated velocity along y.
    Circular,

    /// At perihelion with the exact Kepler perihelion speed.
    Elliptical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// In astronomical units.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl OrbitalElements {
    pub fn new(semi_major_axis: f64, eccentricity: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
        }
    }

    fn validate(&self, body_name: &str) -> Result<()> {
        if !self.semi_major_axis.is_finite() || self.semi_major_axis <= 0.0 {
            return Err(make_error![Error::Config::InvalidOrbit(
                body_name.into(),
                format!("semi-major axis must be positive, got {}", self.semi_major_axis)
            )]);
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(make_error![Error::Config::InvalidOrbit(
                body_name.into(),
                format!("eccentricity must be in [0, 1), got {}", self.eccentricity)
            )]);
        }

        Ok(())
    }
}

/// Position and velocity of a near-circular orbit: the body sits on the x axis
/// at distance `a` and moves along y with the given velocity.
pub fn circular_state(
    elements: &OrbitalElements,
    velocity: Velocity,
    constants: &Constants,
) -> (Vector, Vector) {
    let position = Vector::new(elements.semi_major_axis * constants.au, 0.0);
    let velocity = Vector::new(0.0, velocity);

    (position, velocity)
}

/// Position and velocity at perihelion relative to the primary.
/// The body is placed on the x axis and moves along -y.
pub fn perihelion_state(
    elements: &OrbitalElements,
    primary_mass: f64,
    constants: &Constants,
) -> (Vector, Vector) {
    let OrbitalElements { semi_major_axis, eccentricity } = *elements;

    let semi_major_axis = semi_major_axis * constants.au;
    let perihelion = semi_major_axis * (1.0 - eccentricity);
    let speed = math::perihelion_speed(
        semi_major_axis,
        eccentricity,
        constants.g * primary_mass
    );

    (Vector::new(perihelion, 0.0), Vector::new(0.0, -speed))
}

/// Places `body` on its orbit around `primary` according to `mode`.
/// Both modes give the state relative to the primary.
pub fn place(
    body: Body,
    primary: &Body,
    elements: &OrbitalElements,
    circular_velocity: Velocity,
    mode: OrbitMode,
    constants: &Constants,
) -> Result<Body> {
    elements.validate(body.name())?;

    let (position, velocity) = match mode {
        OrbitMode::Circular => circular_state(elements, circular_velocity, constants),
        OrbitMode::Elliptical => perihelion_state(elements, primary.mass(), constants),
    };

    Ok(body.with_state(
        primary.position() + position,
        primary.velocity() + velocity
    ))
}

impl FromStr for OrbitMode {
    type Err = Parse;

    fn from_str(src: &str) -> std::result::Result<Self, Self::Err> {
        match src {
            "circular" => Ok(OrbitMode::Circular),
            "elliptical" => Ok(OrbitMode::Elliptical),
            _ => Err(Parse::OrbitMode(src.into())),
        }
    }
}

impl fmt::Display for OrbitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitMode::Circular => write!(f, "circular"),
            OrbitMode::Elliptical => write!(f, "elliptical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error, Config},
        scene::{
            Constants,
            body::Body,
            orbit::{self, OrbitMode, OrbitalElements},
        },
        r#type::{Color, Vector},
    };
    use approx::assert_relative_eq;

    fn sun() -> Body {
        Body::new("sun".into(), 1.98892e30, 10.0, Color::new(1.0, 1.0, 0.0))
    }

    fn earth() -> Body {
        Body::new("earth".into(), 5.9722e24, 8.0, Color::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_perihelion_state() {
        let constants = Constants::default();
        let elements = OrbitalElements::new(1.0, 0.0167);

        let (position, velocity) = orbit::perihelion_state(&elements, 1.98892e30, &constants);

        let r_p = constants.au * (1.0 - 0.0167);
        let v_p = (constants.g * 1.98892e30 * (1.0 + 0.0167) / r_p).sqrt();

        assert_relative_eq!(position.x, r_p);
        assert_eq!(position.y, 0.0);
        assert_eq!(velocity.x, 0.0);
        assert_relative_eq!(velocity.y, -v_p);
        assert!((velocity.y.abs() - 30_290.0).abs() < 100.0);
    }

    #[test]
    fn test_circular_state() {
        let constants = Constants::default();
        let elements = OrbitalElements::new(0.387, 0.2056);

        let (position, velocity) = orbit::circular_state(&elements, -47_870.0, &constants);

        assert_relative_eq!(position.x, 0.387 * constants.au);
        assert_eq!(position.y, 0.0);
        assert_eq!(velocity, Vector::new(0.0, -47_870.0));
    }

    #[test]
    fn test_circular_place_relative_to_primary() {
        let constants = Constants::default();
        let primary = sun().with_state(Vector::new(-3.0e9, 5.0e8), Vector::new(-15.0, 40.0));
        let elements = OrbitalElements::new(1.524, 0.0934);

        let body = orbit::place(
            earth(),
            &primary,
            &elements,
            24_007.0,
            OrbitMode::Circular,
            &constants
        ).unwrap();

        assert_relative_eq!(body.position().x, -3.0e9 + 1.524 * constants.au);
        assert_relative_eq!(body.position().y, 5.0e8);
        assert_relative_eq!(body.velocity().x, -15.0);
        assert_relative_eq!(body.velocity().y, 40.0 + 24_007.0);
    }

    #[test]
    fn test_place_relative_to_primary() {
        let constants = Constants::default();
        let primary = sun().with_state(Vector::new(1.0e9, 2.0e9), Vector::new(10.0, 20.0));
        let elements = OrbitalElements::new(1.0, 0.0);

        let body = orbit::place(
            earth(),
            &primary,
            &elements,
            29_780.0,
            OrbitMode::Elliptical,
            &constants
        ).unwrap();

        let (position, velocity) = orbit::perihelion_state(&elements, primary.mass(), &constants);
        assert_relative_eq!(body.position().x, 1.0e9 + position.x);
        assert_relative_eq!(body.position().y, 2.0e9);
        assert_relative_eq!(body.velocity().x, 10.0);
        assert_relative_eq!(body.velocity().y, 20.0 + velocity.y);
    }

    #[test]
    fn test_invalid_elements() {
        let constants = Constants::default();
        let primary = sun();

        for elements in &[
            OrbitalElements::new(1.0, 1.0),
            OrbitalElements::new(1.0, -0.1),
            OrbitalElements::new(0.0, 0.1),
        ] {
            let result = orbit::place(
                earth(),
                &primary,
                elements,
                0.0,
                OrbitMode::Elliptical,
                &constants
            );

            assert!(matches![result, Err(Error::Config(Config::InvalidOrbit(_, _)))]);
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("circular".parse::<OrbitMode>().unwrap(), OrbitMode::Circular);
        assert_eq!("elliptical".parse::<OrbitMode>().unwrap(), OrbitMode::Elliptical);
        assert!("hyperbolic".parse::<OrbitMode>().is_err());
        assert_eq!(OrbitMode::Elliptical.to_string(), "elliptical");
    }
}
