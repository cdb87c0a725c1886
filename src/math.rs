use {
    std::f64::consts::PI,
    crate::r#type::{Distance, Seconds, Vector, Velocity},
};

/// Period of a Kepler orbit with the given semi-major axis
/// around a gravitational parameter `mu = G * M`.
pub fn kepler_period(semi_major_axis: Distance, mu: f64) -> Seconds {
    2.0 * PI * (semi_major_axis.powi(3) / mu).sqrt()
}

/// Vis-viva speed at perihelion of a Kepler ellipse.
pub fn perihelion_speed(semi_major_axis: Distance, eccentricity: f64, mu: f64) -> Velocity {
    (mu * (1.0 + eccentricity) / (semi_major_axis * (1.0 - eccentricity))).sqrt()
}

pub fn is_finite(vector: &Vector) -> bool {
    vector.iter().all(|coord| coord.is_finite())
}

/// z component of the 2D cross product.
pub fn cross(lhs: &Vector, rhs: &Vector) -> f64 {
    lhs.x * rhs.y - lhs.y * rhs.x
}
