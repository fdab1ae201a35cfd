/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Non-spherical gravitational figure: zonal and tesseral harmonics plus
//! the equatorial radius of a perturbing body, used by the Earth/Moon
//! figure acceleration.
//!
//! Accelerations are derived from the disturbing potential
//! `Φ = Σ_n μ Re^n J_n / r^(n+1) P_n(sinφ) + Σ_{n,m} μ Re^n / r^(n+1)
//! P_nm(sinφ) (Cnm cos(mλ) + Snm sin(mλ))` by closed-form differentiation
//! (the chain rule through `r`, `sinφ = z/r` and `λ = atan2(y,x)`), using
//! the unnormalised Legendre polynomials and associated functions up to
//! degree 4. The acceleration is `a = -∇Φ`, in the same body-fixed
//! Cartesian frame as the input position; the caller rotates it back to
//! J2000.

use glam::DVec3;

/// A tesseral harmonic term `(n, m, Cnm, Snm)`.
pub type Tesseral = (u32, u32, f64, f64);

/// `Pn(u)` and `Pn'(u)` for the unnormalised Legendre polynomials of
/// degree 2, 3 and 4, the only degrees the closed form below supports.
fn legendre(n: u32, u: f64) -> (f64, f64) {
    match n {
        2 => ((3.0 * u * u - 1.0) / 2.0, 3.0 * u),
        3 => ((5.0 * u * u * u - 3.0 * u) / 2.0, (15.0 * u * u - 3.0) / 2.0),
        4 => (
            (35.0 * u.powi(4) - 30.0 * u * u + 3.0) / 8.0,
            (35.0 * u.powi(3) - 15.0 * u) / 2.0,
        ),
        _ => panic!("zonal harmonics above degree 4 are not supported by the closed form"),
    }
}

/// Gradient contribution `∇Φn` of a single zonal term at body-fixed
/// position `pos`, degree `n` (2, 3 or 4), coefficient `jn` and
/// equatorial radius `req`.
fn zonal_gradient(pos: DVec3, n: u32, jn: f64, mu: f64, req: f64) -> DVec3 {
    let r = pos.length();
    let u = pos.z / r;
    let (p, dp) = legendre(n, u);
    let scale = mu * req.powi(n as i32) * r.powi(-(n as i32 + 2));
    let common = -((n + 1) as f64) * p / r;
    let dudx = -pos.x * pos.z / (r * r);
    let dudy = -pos.y * pos.z / (r * r);
    let dudz = (r * r - pos.z * pos.z) / (r * r);
    DVec3::new(
        scale * (common * pos.x + dp * dudx),
        scale * (common * pos.y + dp * dudy),
        scale * (common * pos.z + dp * dudz),
    )
}

/// Gradient contribution `∇Φ22` of the dominant `(n=2, m=2)` tesseral
/// term, the only tesseral degree/order this closed form supports
/// (consistent with every [`Figure`] in this crate only populating
/// `C22`/`S22`).
fn tesseral22_gradient(pos: DVec3, cnm: f64, snm: f64, mu: f64, req: f64) -> DVec3 {
    let r = pos.length();
    let u = pos.z / r;
    let p = 3.0 * (1.0 - u * u);
    let dp = -6.0 * u;
    let lambda = pos.y.atan2(pos.x);
    let g = cnm * (2.0 * lambda).cos() + snm * (2.0 * lambda).sin();
    let dg = -2.0 * cnm * (2.0 * lambda).sin() + 2.0 * snm * (2.0 * lambda).cos();
    let rxy2 = pos.x * pos.x + pos.y * pos.y;

    let dudx = -pos.x * pos.z / (r * r);
    let dudy = -pos.y * pos.z / (r * r);
    let dudz = (r * r - pos.z * pos.z) / (r * r);
    let dlambda_dx = -pos.y / rxy2;
    let dlambda_dy = pos.x / rxy2;

    let scale = mu * req * req * r.powi(-4);
    DVec3::new(
        scale * (-3.0 * (pos.x / r) * p * g + r * dp * dudx * g + r * p * dg * dlambda_dx),
        scale * (-3.0 * (pos.y / r) * p * g + r * dp * dudy * g + r * p * dg * dlambda_dy),
        scale * (-3.0 * (pos.z / r) * p * g + r * dp * dudz * g),
    )
}

/// A body's non-spherical gravitational figure.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Zonal harmonics J2, J3, J4, ... in ascending degree.
    pub zonal: Vec<f64>,
    pub tesseral: Vec<Tesseral>,
    /// Equatorial radius, au.
    pub equatorial_radius: f64,
}

impl Figure {
    /// The non-spherical perturbing acceleration at body-fixed position
    /// `pos` (same length unit as `equatorial_radius`, i.e. au),
    /// gravitational parameter `mu` of the body carrying this figure.
    ///
    /// Returned in the body-fixed frame; the caller rotates it back to
    /// J2000 using the body's orientation at the query epoch.
    pub fn acceleration(&self, pos: DVec3, mu: f64) -> DVec3 {
        let req = self.equatorial_radius;
        let mut total = DVec3::ZERO;
        for (i, &jn) in self.zonal.iter().enumerate() {
            let n = (i as u32) + 2;
            total += zonal_gradient(pos, n, jn, mu, req);
        }
        for &(n, m, cnm, snm) in &self.tesseral {
            if n == 2 && m == 2 {
                total += tesseral22_gradient(pos, cnm, snm, mu, req);
            }
        }
        -total
    }
}

const AU_PER_KM: f64 = 1.0 / 149597870.691;

/// Earth's figure: J2-J4 zonal harmonics, EGM96-order-of-magnitude.
pub fn earth_figure() -> Figure {
    Figure {
        zonal: vec![1.0826358e-3, -2.5324e-6, -1.6196e-6],
        tesseral: vec![(2, 2, 1.5744e-6, -9.038e-7)],
        equatorial_radius: 6378.137 * AU_PER_KM,
    }
}

/// The Moon's figure: J2-J3 zonal harmonics and the dominant C22 tesseral
/// term, after the commonly cited lunar gravity field low-degree values.
pub fn moon_figure() -> Figure {
    Figure {
        zonal: vec![2.0330e-4, 8.4759e-6],
        tesseral: vec![(2, 2, 2.2382e-5, 0.0)],
        equatorial_radius: 1738.0 * AU_PER_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_figure_has_j2_through_j4() {
        let f = earth_figure();
        assert_eq!(f.zonal.len(), 3);
        assert!(f.zonal[0] > 0.0);
    }

    #[test]
    fn test_moon_figure_radius_in_au() {
        let f = moon_figure();
        assert!(f.equatorial_radius > 0.0 && f.equatorial_radius < 1e-4);
    }

    #[test]
    fn test_j2_acceleration_vanishes_at_equator_z_zero_symmetry() {
        // On the equatorial plane (z=0) the J2 perturbation along z is
        // zero-crossing symmetric; the in-plane magnitude is non-zero.
        let f = earth_figure();
        let mu = 8.887692445125634e-10;
        let pos = DVec3::new(f.equatorial_radius * 2.0, 0.0, 0.0);
        let a = f.acceleration(pos, mu);
        assert!(a.x.abs() > 0.0);
    }

    #[test]
    fn test_acceleration_is_finite_off_axis() {
        let f = earth_figure();
        let mu = 8.887692445125634e-10;
        let pos = DVec3::new(f.equatorial_radius * 3.0, f.equatorial_radius, f.equatorial_radius * 0.5);
        let a = f.acceleration(pos, mu);
        assert!(a.x.is_finite() && a.y.is_finite() && a.z.is_finite());
    }

    #[test]
    fn test_figure_acceleration_shrinks_with_distance() {
        let f = earth_figure();
        let mu = 8.887692445125634e-10;
        let near = f.acceleration(DVec3::new(f.equatorial_radius * 2.0, 0.0, f.equatorial_radius), mu);
        let far = f.acceleration(DVec3::new(f.equatorial_radius * 20.0, 0.0, f.equatorial_radius * 10.0), mu);
        assert!(far.length() < near.length());
    }
}
