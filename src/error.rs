use super::r#type::{BodyName, BodyIndex, Tick};
use std::fmt;

pub type Description = String;

#[macro_export]
macro_rules! make_error {
    ($($path:ident)::+$(($($value:expr),+))?) => {
        $crate::make_error![@_impl $($path)::+$(($($value),+))?]
    };

    (@_impl $err_enum:ident::$case:ident$(($($value:expr),+))?) => {
        $crate::error::$err_enum::$case$(($($value),+))?
    };

    (@_impl $err_enum:ident::$sub_err_enum:ident::$($err_tail:ident)::+$(($($value:expr),+))?) => {
        $crate::error::$err_enum::$sub_err_enum(
            $crate::make_error![@_impl $sub_err_enum::$($err_tail)::+$(($($value),+))?]
        )
    };
}

#[derive(Debug)]
pub enum Error {
    Parse(Parse),
    Config(Config),
    Physics(Physics),
}

#[derive(Debug)]
pub enum Parse {
    Color(css_color_parser::ColorParseError),
    OrbitMode(Description),
}

#[derive(Debug, PartialEq)]
pub enum Config {
    CoincidentBodies(BodyName, BodyName),
    NoPrimary,
    MultiplePrimaries(BodyName, BodyName),
    UnknownBody(BodyIndex),
    InvalidMass(BodyName),
    InvalidState(BodyName),
    InvalidOrbit(BodyName, Description),
    InvalidZoom(Description),
    InvalidConstant(Description),
    InvalidTrailLength,
    InvalidFrameRate,
}

#[derive(Debug, PartialEq)]
pub enum Physics {
    NonFinite(BodyName, Tick),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "[parse] {}", err),
            Error::Config(err) => write!(f, "[config] {}", err),
            Error::Physics(err) => write!(f, "[physics] {}", err),
        }
    }
}

impl From<Parse> for Error {
    fn from(err: Parse) -> Self {
        Self::Parse(err)
    }
}

impl From<css_color_parser::ColorParseError> for Parse {
    fn from(err: css_color_parser::ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<css_color_parser::ColorParseError> for Error {
    fn from(err: css_color_parser::ColorParseError) -> Self {
        Self::Parse(err.into())
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "unable to parse color: {}\nHINT: this app uses CSS color format", err),
            Self::OrbitMode(desc) => write!(
                f, "unable to parse orbit mode `{}`\nHINT: expected `circular` or `elliptical`",
                desc
            ),
        }
    }
}

impl From<Config> for Error {
    fn from(err: Config) -> Self {
        Self::Config(err)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentBodies(lhs, rhs) => {
                write!(f, "`{}` and `{}` start at the same position", lhs, rhs)
            },
            Self::NoPrimary => write!(f, "no primary body is designated"),
            Self::MultiplePrimaries(current, new) => write!(
                f, "`{}` is already the primary body, unable to designate `{}`",
                current, new
            ),
            Self::UnknownBody(index) => write!(f, "no body with index #{}", index),
            Self::InvalidMass(name) => {
                write!(f, "`{}`: mass must be finite and greater than zero", name)
            },
            Self::InvalidState(name) => {
                write!(f, "`{}`: initial position and velocity must be finite", name)
            },
            Self::InvalidOrbit(name, desc) => write!(f, "`{}`: invalid orbit: {}", name, desc),
            Self::InvalidZoom(desc) => write!(f, "invalid zoom: {}", desc),
            Self::InvalidConstant(desc) => write!(f, "invalid constant: {}", desc),
            Self::InvalidTrailLength => write!(f, "max trail length must be greater than zero"),
            Self::InvalidFrameRate => write!(f, "frame rate limit must be greater than zero"),
        }
    }
}

impl From<Physics> for Error {
    fn from(err: Physics) -> Self {
        Self::Physics(err)
    }
}

impl fmt::Display for Physics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(name, tick) => write!(
                f, "`{}`: state became non-finite at tick #{}",
                name, tick
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, Config, Physics};

    #[test]
    fn test_make_error_nested() {
        let err = make_error![Error::Config::CoincidentBodies("a".into(), "b".into())];

        match err {
            Error::Config(Config::CoincidentBodies(lhs, rhs)) => {
                assert_eq!(lhs, "a");
                assert_eq!(rhs, "b");
            }
            _ => panic!("unexpected error variant"),
        }

        let err = make_error![Error::Config::NoPrimary];
        assert!(matches![err, Error::Config(Config::NoPrimary)]);
    }

    #[test]
    fn test_display() {
        let err: Error = Physics::NonFinite("earth".into(), 42).into();
        assert_eq!(
            format!("{}", err),
            "[physics] `earth`: state became non-finite at tick #42"
        );
    }
}
