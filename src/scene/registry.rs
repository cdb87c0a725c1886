use {
    std::num::NonZeroUsize,
    log::info,
    crate::{
        Result,
        make_error,
        math,
        r#type::BodyIndex,
        scene::body::{Body, BodyUpdate},
    },
};

const LOG_TARGET: &'static str = "registry";

/// Owns every simulated body. The set of bodies is fixed once built.
pub struct BodyRegistry {
    bodies: Vec<Body>,
    primary: Option<BodyIndex>,
}

pub struct RegistryBuilder {
    bodies: Vec<Body>,
    primary: Option<BodyIndex>,
    trail_limit: Option<NonZeroUsize>,
}

impl BodyRegistry {
    pub fn builder(trail_limit: Option<NonZeroUsize>) -> RegistryBuilder {
        RegistryBuilder {
            bodies: vec![],
            primary: None,
            trail_limit,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn primary_index(&self) -> Option<BodyIndex> {
        self.primary
    }

    pub fn primary(&self) -> Option<&Body> {
        self.primary.map(|index| &self.bodies[index])
    }

    pub fn is_primary(&self, index: BodyIndex) -> bool {
        self.primary == Some(index)
    }

    /// Commits one tick worth of updates, one per body in registry order.
    pub(super) fn apply(&mut self, updates: Vec<BodyUpdate>) {
        assert_eq!(updates.len(), self.bodies.len());

        for (body, update) in self.bodies.iter_mut().zip(updates) {
            body.apply(update);
        }
    }
}

impl RegistryBuilder {
    pub fn add(&mut self, mut body: Body) -> BodyIndex {
        body.set_trail_limit(self.trail_limit);
        self.bodies.push(body);

        self.bodies.len() - 1
    }

    pub fn body(&self, index: BodyIndex) -> Result<&Body> {
        self.bodies.get(index)
            .ok_or(make_error![Error::Config::UnknownBody(index)])
    }

    pub fn designate_primary(&mut self, index: BodyIndex) -> Result<()> {
        let new_name = self.body(index)?.name().clone();

        match self.primary {
            Some(current) => Err(make_error![Error::Config::MultiplePrimaries(
                self.bodies[current].name().clone(),
                new_name
            )]),
            None => {
                self.primary = Some(index);
                Ok(())
            }
        }
    }

    pub fn build(self) -> Result<BodyRegistry> {
        for body in self.bodies.iter() {
            let mass = body.mass();
            if !mass.is_finite() || mass <= 0.0 {
                return Err(make_error![Error::Config::InvalidMass(body.name().clone())]);
            }

            if !math::is_finite(body.position()) || !math::is_finite(body.velocity()) {
                return Err(make_error![Error::Config::InvalidState(body.name().clone())]);
            }
        }

        for (i, lhs) in self.bodies.iter().enumerate() {
            for rhs in self.bodies[i + 1..].iter() {
                if lhs.position() == rhs.position() {
                    return Err(make_error![Error::Config::CoincidentBodies(
                        lhs.name().clone(),
                        rhs.name().clone()
                    )]);
                }
            }
        }

        if !self.bodies.is_empty() && self.primary.is_none() {
            return Err(make_error![Error::Config::NoPrimary]);
        }

        for body in self.bodies.iter() {
            info! {
                target: LOG_TARGET,
                "`{}`: mass {:e} kg, position ({:e}, {:e}) m, velocity ({:.1}, {:.1}) m/s",
                body.name(),
                body.mass(),
                body.position().x,
                body.position().y,
                body.velocity().x,
                body.velocity().y
            }
        }

        Ok(BodyRegistry {
            bodies: self.bodies,
            primary: self.primary,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error, Config},
        scene::{body::Body, registry::BodyRegistry},
        r#type::{Color, Vector},
    };
    use std::num::NonZeroUsize;

    fn body(name: &str, x: f64) -> Body {
        Body::new(name.into(), 1.0e24, 4.0, Color::new(1.0, 1.0, 1.0))
            .with_state(Vector::new(x, 0.0), Vector::zeros())
    }

    #[test]
    fn test_build() {
        let mut builder = BodyRegistry::builder(None);
        let sun = builder.add(body("sun", 0.0));
        let earth = builder.add(body("earth", 1.0e11));
        builder.designate_primary(sun).unwrap();

        let registry = builder.build().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.primary_index(), Some(sun));
        assert_eq!(registry.primary().unwrap().name(), "sun");
        assert!(registry.is_primary(sun));
        assert!(!registry.is_primary(earth));
        assert_eq!(registry.bodies()[earth].name(), "earth");
    }

    #[test]
    fn test_trail_limit_applied() {
        let mut builder = BodyRegistry::builder(NonZeroUsize::new(10));
        let sun = builder.add(body("sun", 0.0));
        builder.designate_primary(sun).unwrap();

        let registry = builder.build().unwrap();
        assert_eq!(registry.bodies()[sun].trail().limit(), Some(10));
    }

    #[test]
    fn test_coincident_bodies() {
        let mut builder = BodyRegistry::builder(None);
        let sun = builder.add(body("sun", 0.0));
        builder.add(body("earth", 1.0e11));
        builder.add(body("mirror-earth", 1.0e11));
        builder.designate_primary(sun).unwrap();

        match builder.build() {
            Err(Error::Config(Config::CoincidentBodies(lhs, rhs))) => {
                assert_eq!(lhs, "earth");
                assert_eq!(rhs, "mirror-earth");
            }
            _ => panic!("coincident bodies must be rejected"),
        }
    }

    #[test]
    fn test_no_primary() {
        let mut builder = BodyRegistry::builder(None);
        builder.add(body("sun", 0.0));

        assert!(matches![builder.build(), Err(Error::Config(Config::NoPrimary))]);
    }

    #[test]
    fn test_multiple_primaries() {
        let mut builder = BodyRegistry::builder(None);
        let sun = builder.add(body("sun", 0.0));
        let other_sun = builder.add(body("other-sun", 1.0e12));

        builder.designate_primary(sun).unwrap();
        assert!(matches![
            builder.designate_primary(other_sun),
            Err(Error::Config(Config::MultiplePrimaries(_, _)))
        ]);
    }

    #[test]
    fn test_unknown_primary() {
        let mut builder = BodyRegistry::builder(None);
        builder.add(body("sun", 0.0));

        assert!(matches![
            builder.designate_primary(3),
            Err(Error::Config(Config::UnknownBody(3)))
        ]);
    }

    #[test]
    fn test_invalid_mass() {
        let mut builder = BodyRegistry::builder(None);
        let index = builder.add(Body::new("void".into(), 0.0, 1.0, Color::new(0.0, 0.0, 0.0)));
        builder.designate_primary(index).unwrap();

        assert!(matches![builder.build(), Err(Error::Config(Config::InvalidMass(_)))]);
    }

    #[test]
    fn test_invalid_state() {
        let mut builder = BodyRegistry::builder(None);
        let index = builder.add(body("sun", 0.0).with_state(
            Vector::new(std::f64::NAN, 0.0),
            Vector::zeros()
        ));
        builder.designate_primary(index).unwrap();

        assert!(matches![builder.build(), Err(Error::Config(Config::InvalidState(_)))]);
    }

    #[test]
    fn test_empty() {
        let registry = BodyRegistry::builder(None).build().unwrap();

        assert_eq!(registry.len(), 0);
        assert!(registry.primary().is_none());
    }
}
