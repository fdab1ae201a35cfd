use std::fmt::{Display, Formatter, Result};

/// An angle in radians
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.0.to_degrees().fmt(f)?;
        write!(f, " deg")
    }
}

pub trait AngleUnits {
    fn deg(&self) -> Angle;
    fn rad(&self) -> Angle;
}

impl AngleUnits for f64 {
    fn deg(&self) -> Angle {
        Angle(self.to_radians())
    }

    fn rad(&self) -> Angle {
        Angle(*self)
    }
}

pub const ASTRONOMICAL_UNIT: f64 = crate::constants::f64::physical::AU_M;

/// A distance in meters
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Distance(pub f64);

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        (1e-3 * self.0).fmt(f)?;
        write!(f, " km")
    }
}

pub trait DistanceUnits {
    fn m(&self) -> Distance;
    fn km(&self) -> Distance;
    fn au(&self) -> Distance;
}

impl DistanceUnits for f64 {
    fn m(&self) -> Distance {
        Distance(*self)
    }

    fn km(&self) -> Distance {
        Distance(1e3 * self)
    }

    fn au(&self) -> Distance {
        Distance(ASTRONOMICAL_UNIT * self)
    }
}

/// A velocity in meters per second
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Velocity(pub f64);

pub trait VelocityUnits {
    fn mps(&self) -> Velocity;
    fn kps(&self) -> Velocity;
}

impl VelocityUnits for f64 {
    fn mps(&self) -> Velocity {
        Velocity(*self)
    }

    fn kps(&self) -> Velocity {
        Velocity(1e3 * self)
    }
}

impl Display for Velocity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        (1e-3 * self.0).fmt(f)?;
        write!(f, " km/s")
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use crate::{ASTRONOMICAL_UNIT, AngleUnits, DistanceUnits, VelocityUnits};

    #[test]
    fn test_angle_deg() {
        let angle = 90.0.deg();
        assert_float_eq!(angle.0, std::f64::consts::FRAC_PI_2, rel <= 1e-10);
    }

    #[test]
    fn test_angle_rad() {
        let angle = std::f64::consts::PI.rad();
        assert_float_eq!(angle.0, std::f64::consts::PI, rel <= 1e-10);
    }

    #[test]
    fn test_angle_conversions() {
        let angle_deg = 180.0.deg();
        let angle_rad = std::f64::consts::PI.rad();
        assert_float_eq!(angle_deg.0, angle_rad.0, rel <= 1e-10);
    }

    #[test]
    fn test_angle_display() {
        let angle = 90.123456.deg();
        assert_eq!(format!("{:.2}", angle), "90.12 deg")
    }

    #[test]
    fn test_distance_m() {
        let distance = 1000.0.m();
        assert_eq!(distance.0, 1000.0);
    }

    #[test]
    fn test_distance_km() {
        let distance = 1.0.km();
        assert_eq!(distance.0, 1000.0);
    }

    #[test]
    fn test_distance_au() {
        let distance = 1.0.au();
        assert_eq!(distance.0, ASTRONOMICAL_UNIT);
    }

    #[test]
    fn test_distance_conversions() {
        let d1 = 1.5e11.m();
        let d2 = (1.5e11 / ASTRONOMICAL_UNIT).au();
        assert_float_eq!(d1.0, d2.0, rel <= 1e-9);
    }

    #[test]
    fn test_distance_display() {
        let distance = 9.123456.km();
        assert_eq!(format!("{:.2}", distance), "9.12 km")
    }

    #[test]
    fn test_velocity_mps() {
        let velocity = 1000.0.mps();
        assert_eq!(velocity.0, 1000.0);
    }

    #[test]
    fn test_velocity_kps() {
        let velocity = 1.0.kps();
        assert_eq!(velocity.0, 1000.0);
    }

    #[test]
    fn test_velocity_conversions() {
        let v1 = 7500.0.mps();
        let v2 = 7.5.kps();
        assert_eq!(v1.0, v2.0);
    }

    #[test]
    fn test_velocity_display() {
        let velocity = 9.123456.kps();
        assert_eq!(format!("{:.2}", velocity), "9.12 km/s")
    }
}
