use std::num::NonZeroUsize;

use crate::{
    r#type::{
        BodyName,
        Mass,
        Distance,
        Pixels,
        Color,
        Vector,
    },
    scene::trail::Trail,
};

pub struct Body {
    name: BodyName,
    position: Vector,
    velocity: Vector,
    mass: Mass,
    radius: Pixels,
    color: Color,
    trail: Trail,
    distance_to_primary: Distance,
}

/// State of a body after one tick, computed before anything is written back.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyUpdate {
    pub position: Vector,
    pub velocity: Vector,
    pub distance_to_primary: Distance,
}

impl Body {
    pub fn new(name: BodyName, mass: Mass, radius: Pixels, color: Color) -> Self {
        Self {
            name,
            position: Vector::zeros(),
            velocity: Vector::zeros(),
            mass,
            radius,
            color,
            trail: Trail::unbounded(),
            distance_to_primary: 0.0,
        }
    }

    pub fn with_state(mut self, position: Vector, velocity: Vector) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }

    pub fn name(&self) -> &BodyName {
        &self.name
    }

    pub fn position(&self) -> &Vector {
        &self.position
    }

    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn radius(&self) -> Pixels {
        self.radius
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn distance_to_primary(&self) -> Distance {
        self.distance_to_primary
    }

    pub(super) fn set_trail_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.trail = Trail::new(limit);
    }

    pub(super) fn apply(&mut self, update: BodyUpdate) {
        self.position = update.position;
        self.velocity = update.velocity;
        self.distance_to_primary = update.distance_to_primary;

        self.trail.push(self.position);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        scene::body::{Body, BodyUpdate},
        r#type::{Color, Vector},
    };

    #[test]
    fn test_apply_appends_trail() {
        let mut body = Body::new("earth".into(), 5.9722e24, 8.0, Color::new(0.0, 0.0, 1.0))
            .with_state(Vector::new(1.0, 0.0), Vector::new(0.0, 1.0));

        assert!(body.trail().is_empty());

        body.apply(BodyUpdate {
            position: Vector::new(1.0, 1.0),
            velocity: Vector::new(-1.0, 1.0),
            distance_to_primary: 2.0,
        });

        assert_eq!(body.position(), &Vector::new(1.0, 1.0));
        assert_eq!(body.velocity(), &Vector::new(-1.0, 1.0));
        assert_eq!(body.distance_to_primary(), 2.0);
        assert_eq!(body.trail().len(), 1);
        assert_eq!(body.trail().last(), Some(&Vector::new(1.0, 1.0)));
    }
}
