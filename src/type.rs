use std::fmt;
use nalgebra::{Vector2, Point2, Point3};

pub type BodyName = String;
pub type BodyIndex = usize;
pub type Tick = u64;
pub type Coord = f64;
pub type Vector = Vector2<Coord>;
pub type Mass = f64;
pub type Distance = f64;
pub type Velocity = f64;
pub type Seconds = f64;
pub type Zoom = f64;
pub type ColorChannel = f32;
pub type Color = Point3<ColorChannel>;
pub type PackedColor = u32;
pub type Pixels = f32;
pub type ScreenPoint = Point2<Pixels>;

pub enum TimeFormat {
    SimulatedTime(chrono::Duration),
    SimulatedStep(chrono::Duration),
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::SimulatedTime(time) => {
                let days_in_year = 365;
                let hours_in_day = 24;

                let years = time.num_days() / days_in_year;
                if years != 0 {
                    write!(f, "year #{}, ", years)?;
                }

                write!(
                    f, "day #{}, {}h",
                    time.num_days() % days_in_year,
                    time.num_hours() % hours_in_day
                )
            },
            TimeFormat::SimulatedStep(time) => {
                if time.num_weeks() != 0 && time.num_days() % 7 == 0 {
                    write!(f, "{}w", time.num_weeks())
                } else if time.num_days() != 0 {
                    write!(f, "{}d", time.num_days())
                } else if time.num_hours() != 0 {
                    write!(f, "{}h", time.num_hours())
                } else if time.num_minutes() != 0 {
                    write!(f, "{}min", time.num_minutes())
                } else {
                    write!(f, "{}s", time.num_seconds())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeFormat;

    #[test]
    fn test_simulated_time() {
        let time = chrono::Duration::days(400) + chrono::Duration::hours(5);
        assert_eq!(format!("{}", TimeFormat::SimulatedTime(time)), "year #1, day #35, 5h");

        let time = chrono::Duration::days(12);
        assert_eq!(format!("{}", TimeFormat::SimulatedTime(time)), "day #12, 0h");
    }

    #[test]
    fn test_simulated_step() {
        assert_eq!(format!("{}", TimeFormat::SimulatedStep(chrono::Duration::days(1))), "1d");
        assert_eq!(format!("{}", TimeFormat::SimulatedStep(chrono::Duration::weeks(2))), "2w");
        assert_eq!(format!("{}", TimeFormat::SimulatedStep(chrono::Duration::hours(1))), "1h");
        assert_eq!(format!("{}", TimeFormat::SimulatedStep(chrono::Duration::seconds(90))), "1min");
        assert_eq!(format!("{}", TimeFormat::SimulatedStep(chrono::Duration::seconds(30))), "30s");
    }
}
