/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Moon principal-axis moment-of-inertia constants and the libration
//! equation of motion: free rigid-body kinematics (3-1-3 Euler angles)
//! plus Euler's equations under an external point-mass torque.

use glam::DVec3;

/// The Moon's principal-axis Euler angles `(φ, θ, ψ)` relative to J2000
/// and their first derivatives, rad and rad/day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LibrationState {
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
    pub phi_dot: f64,
    pub theta_dot: f64,
    pub psi_dot: f64,
}

/// Second time derivatives of a [`LibrationState`], produced by
/// [`libration_derivative`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LibrationDerivative {
    pub phi_dot: f64,
    pub theta_dot: f64,
    pub psi_dot: f64,
    pub phi_ddot: f64,
    pub theta_ddot: f64,
    pub psi_ddot: f64,
}

/// Body-frame angular velocity from Euler angles and their rates, 3-1-3
/// (z-x-z) convention.
pub fn angular_velocity(state: LibrationState) -> DVec3 {
    let (sin_theta, cos_theta) = state.theta.sin_cos();
    let (sin_psi, cos_psi) = state.psi.sin_cos();
    DVec3::new(
        state.phi_dot * sin_theta * sin_psi + state.theta_dot * cos_psi,
        state.phi_dot * sin_theta * cos_psi - state.theta_dot * sin_psi,
        state.phi_dot * cos_theta + state.psi_dot,
    )
}

/// Kinematic inversion: Euler-angle rates from body-frame angular
/// velocity `omega` at the current `theta`, `psi`.
fn euler_rates(omega: DVec3, theta: f64, psi: f64) -> (f64, f64, f64) {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_psi, cos_psi) = psi.sin_cos();
    let phi_dot = (omega.x * sin_psi + omega.y * cos_psi) / sin_theta;
    let theta_dot = omega.x * cos_psi - omega.y * sin_psi;
    let psi_dot = omega.z - phi_dot * cos_theta;
    (phi_dot, theta_dot, psi_dot)
}

/// Evaluates the libration equation of motion: Euler's equations in
/// principal-axis form under external torque `torque_per_unit_mass`
/// (`N = r × a_body`, per unit source mass, scaled by the caller with
/// the source's mass), producing `φ̈, θ̈, ψ̈` via the standard kinematic
/// inversion of the three `ω̇ᵢ`.
pub fn libration_derivative(
    state: LibrationState,
    torque: DVec3,
    k: LibrationConstants,
) -> LibrationDerivative {
    let omega = angular_velocity(state);
    let omega_dot = DVec3::new(
        ((k.b - k.c) * omega.y * omega.z + torque.x) / k.a,
        ((k.c - k.a) * omega.z * omega.x + torque.y) / k.b,
        ((k.a - k.b) * omega.x * omega.y + torque.z) / k.c,
    );

    // `angular_velocity` is linear in (phi_dot, theta_dot, psi_dot); its
    // explicit dependence on theta/psi contributes the extra term below
    // when the whole expression is differentiated in time, so inverting
    // `omega_dot - extra` by the same kinematic inversion that recovers
    // rates from omega also recovers the angular accelerations.
    let (sin_theta, cos_theta) = state.theta.sin_cos();
    let (sin_psi, cos_psi) = state.psi.sin_cos();
    let d_dtheta = DVec3::new(
        state.phi_dot * cos_theta * sin_psi,
        state.phi_dot * cos_theta * cos_psi,
        -state.phi_dot * sin_theta,
    );
    let d_dpsi = DVec3::new(
        state.phi_dot * sin_theta * cos_psi - state.theta_dot * sin_psi,
        -state.phi_dot * sin_theta * sin_psi - state.theta_dot * cos_psi,
        0.0,
    );
    let extra = d_dtheta * state.theta_dot + d_dpsi * state.psi_dot;
    let (phi_ddot, theta_ddot, psi_ddot) = euler_rates(omega_dot - extra, state.theta, state.psi);

    LibrationDerivative {
        phi_dot: state.phi_dot,
        theta_dot: state.theta_dot,
        psi_dot: state.psi_dot,
        phi_ddot,
        theta_ddot,
        psi_ddot,
    }
}

/// Moments of inertia (units of `Moon mass * equatorial radius^2`) and the
/// derived shape parameters `βL = (C-A)/B`, `γL = (B-A)/C` used by Euler's
/// equations for lunar physical libration.
#[derive(Debug, Clone, Copy)]
pub struct LibrationConstants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub beta_l: f64,
    pub gamma_l: f64,
}

/// Lunar moments of inertia after the commonly cited DE-series physical
/// libration solution.
pub fn moon_libration_constants() -> LibrationConstants {
    let a = 0.3935835;
    let b = 0.3935999;
    let c = 0.3937879;
    LibrationConstants {
        a,
        b,
        c,
        beta_l: (c - a) / b,
        gamma_l: (b - a) / c,
    }
}
