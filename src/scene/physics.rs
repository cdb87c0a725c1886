use {
    log::trace,
    crate::{
        Result,
        make_error,
        math,
        r#type::{Distance, Tick, Vector},
        scene::{
            Constants,
            PrimaryMotion,
            body::{Body, BodyUpdate},
            registry::BodyRegistry,
        },
    },
};

const LOG_TARGET: &'static str = "physics";

/// Newtonian attraction of `body` towards `other`.
/// Returns the force acting on `body` and the distance between the two.
pub fn attraction(g: f64, body: &Body, other: &Body) -> (Vector, Distance) {
    let offset = other.position() - body.position();
    let distance = (offset.x * offset.x + offset.y * offset.y).sqrt();

    let force = g * body.mass() * other.mass() / distance.powi(2);
    let theta = offset.y.atan2(offset.x);

    (Vector::new(theta.cos() * force, theta.sin() * force), distance)
}

/// Net force on the body at `index` from every other body in the registry.
/// Also returns the refreshed distance to the primary.
pub fn net_force(registry: &BodyRegistry, index: usize, g: f64) -> (Vector, Distance) {
    let bodies = registry.bodies();
    let body = &bodies[index];

    let mut total = Vector::zeros();
    let mut distance_to_primary = body.distance_to_primary();

    for (other_index, other) in bodies.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let (force, distance) = attraction(g, body, other);
        if registry.is_primary(other_index) {
            distance_to_primary = distance;
        }

        total += force;
    }

    (total, distance_to_primary)
}

/// Advances every body by one timestep with semi-implicit Euler.
///
/// All updates are computed from the pre-tick state before any of them is written,
/// so the result does not depend on body order. A tick that would produce
/// a non-finite state is rejected and leaves the registry untouched.
pub fn step(
    registry: &mut BodyRegistry,
    constants: &Constants,
    primary_motion: PrimaryMotion,
    tick: Tick,
) -> Result<()> {
    let dt = constants.timestep;
    let mut updates = Vec::with_capacity(registry.len());

    for (index, body) in registry.bodies().iter().enumerate() {
        let (force, distance_to_primary) = net_force(registry, index, constants.g);

        let update = if registry.is_primary(index) && primary_motion == PrimaryMotion::Fixed {
            BodyUpdate {
                position: *body.position(),
                velocity: *body.velocity(),
                distance_to_primary,
            }
        } else {
            let velocity = body.velocity() + (force / body.mass()) * dt;
            let position = body.position() + velocity * dt;

            BodyUpdate {
                position,
                velocity,
                distance_to_primary,
            }
        };

        if !math::is_finite(&force)
        || !math::is_finite(&update.velocity)
        || !math::is_finite(&update.position) {
            return Err(make_error![Error::Physics::NonFinite(body.name().clone(), tick)]);
        }

        trace! {
            target: LOG_TARGET,
            "tick #{} `{}`: position ({:e}, {:e}), velocity ({:.3}, {:.3})",
            tick,
            body.name(),
            update.position.x,
            update.position.y,
            update.velocity.x,
            update.velocity.y
        }

        updates.push(update);
    }

    registry.apply(updates);

    Ok(())
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter()
        .map(|body| 0.5 * body.mass() * body.velocity().norm_squared())
        .sum()
}

pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let mut energy = 0.0;

    for (i, lhs) in bodies.iter().enumerate() {
        for rhs in bodies[i + 1..].iter() {
            let distance = (rhs.position() - lhs.position()).norm();
            energy -= g * lhs.mass() * rhs.mass() / distance;
        }
    }

    energy
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// Total angular momentum about the origin (z component).
pub fn angular_momentum(bodies: &[Body]) -> f64 {
    bodies.iter()
        .map(|body| body.mass() * math::cross(body.position(), body.velocity()))
        .sum()
}
