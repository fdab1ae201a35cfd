/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Newtonian and Einstein-Infeld-Hoffmann point-mass accelerations over
//! N bodies, and the classical/relativistic barycenter used to keep the
//! integrated system centred.

use glam::DVec3;
use ssie_units::constants::f64::physical::C_AU_PER_DAY;

/// Pairwise distances and unit vectors between every pair of `n` bodies,
/// computed once per call per the component contract.
struct DistanceMatrix {
    n: usize,
    dist: Vec<f64>,
    /// Unit vector from body `i` to body `j`.
    rhat: Vec<DVec3>,
}

impl DistanceMatrix {
    fn build(positions: &[DVec3]) -> Self {
        let n = positions.len();
        let mut dist = vec![0.0; n * n];
        let mut rhat = vec![DVec3::ZERO; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = positions[j] - positions[i];
                let d = delta.length();
                dist[i * n + j] = d;
                rhat[i * n + j] = delta / d;
            }
        }
        Self { n, dist, rhat }
    }

    fn d(&self, i: usize, j: usize) -> f64 {
        self.dist[i * self.n + j]
    }

    fn rhat(&self, i: usize, j: usize) -> DVec3 {
        self.rhat[i * self.n + j]
    }
}

/// Newtonian acceleration on every body, from every other body.
fn newtonian_accelerations(positions: &[DVec3], mu: &[f64], dm: &DistanceMatrix) -> Vec<DVec3> {
    let n = positions.len();
    let mut acc = vec![DVec3::ZERO; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = dm.d(i, j);
            acc[i] += mu[j] * dm.rhat(i, j) / (d * d);
        }
    }
    acc
}

/// Accelerations on `n` point masses with positions `r`, velocities `v`
/// and gravitational parameters `mu` (au^3/day^2). When `relativity` is
/// true, adds the Einstein-Infeld-Hoffmann post-Newtonian terms scaled
/// by `1/c^2`.
///
/// Newtonian and relativistic contributions are summed pairwise and
/// component-wise before being added to the per-body total, matching the
/// component contract's numerical-precision requirement.
pub fn accelerations(r: &[DVec3], v: &[DVec3], mu: &[f64], relativity: bool) -> Vec<DVec3> {
    let n = r.len();
    let dm = DistanceMatrix::build(r);
    let a_newton = newtonian_accelerations(r, mu, &dm);

    if !relativity {
        return a_newton;
    }

    let c = C_AU_PER_DAY;
    let c2 = c * c;

    // Σ_{k≠i} μ_k / r_ik for every i, needed by the EIH factor.
    let mu_over_dist_sum: Vec<f64> = (0..n)
        .map(|i| (0..n).filter(|&k| k != i).map(|k| mu[k] / dm.d(i, k)).sum())
        .collect();

    let mut total = vec![DVec3::ZERO; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = dm.d(i, j);
            let rhat = dm.rhat(i, j);
            let a_newton_ij = mu[j] * rhat / (d * d);

            let vi2 = v[i].length_squared();
            let vj2 = v[j].length_squared();
            let vi_dot_vj = v[i].dot(v[j]);
            let rhat_dot_vj = rhat.dot(v[j]);
            let rhat_dot_aj = rhat.dot(a_newton[j]);

            let factor = 1.0
                + (1.0 / c2)
                    * (-4.0 * mu_over_dist_sum[i] - mu_over_dist_sum[j] + vi2 + 2.0 * vj2
                        - 4.0 * vi_dot_vj
                        - 1.5 * rhat_dot_vj * rhat_dot_vj
                        + 0.5 * rhat_dot_aj);

            let rhat_dot_vel_combo = rhat.dot(4.0 * v[i] - 3.0 * v[j]);
            let velocity_term = (1.0 / c2) * (mu[j] / (d * d * d)) * rhat_dot_vel_combo * (v[i] - v[j]);

            let trailing_term = 3.5 * mu[j] / (c2 * d) * a_newton[j];

            total[i] += a_newton_ij * factor + velocity_term + trailing_term;
        }
    }
    total
}

/// Classical (Newtonian) barycenter position: `Σμᵢrᵢ / Σμᵢ`.
pub fn barycenter_position(r: &[DVec3], mu: &[f64]) -> DVec3 {
    weighted_mean(r, mu)
}

/// Classical barycenter velocity: `Σμᵢvᵢ / Σμᵢ`.
pub fn barycenter_velocity(v: &[DVec3], mu: &[f64]) -> DVec3 {
    weighted_mean(v, mu)
}

fn weighted_mean(values: &[DVec3], mu: &[f64]) -> DVec3 {
    let mu_sum: f64 = mu.iter().sum();
    let weighted: DVec3 = values.iter().zip(mu).map(|(x, m)| *x * *m).sum();
    weighted / mu_sum
}

/// Relativistic effective masses `μᵢ*`, replacing `μᵢ` by
/// `μᵢ(1 - (1/2c²)(|vᵢ|² - Σⱼ≠ᵢ μⱼ/rᵢⱼ))`.
pub fn relativistic_mu(r: &[DVec3], v: &[DVec3], mu: &[f64]) -> Vec<f64> {
    let n = r.len();
    let dm = DistanceMatrix::build(r);
    let c2 = C_AU_PER_DAY * C_AU_PER_DAY;
    (0..n)
        .map(|i| {
            let sum_mu_over_r: f64 = (0..n).filter(|&j| j != i).map(|j| mu[j] / dm.d(i, j)).sum();
            mu[i] * (1.0 - 0.5 / c2 * (v[i].length_squared() - sum_mu_over_r))
        })
        .collect()
}

/// Subtracts the relativistic barycenter position and velocity from
/// every body's state, in place, as the `adjustBary` step after each
/// integration boundary.
pub fn adjust_barycenter(r: &mut [DVec3], v: &mut [DVec3], mu: &[f64]) {
    let mu_star = relativistic_mu(r, v, mu);
    let bary_r = barycenter_position(r, &mu_star);
    let bary_v = barycenter_velocity(v, &mu_star);
    for x in r.iter_mut() {
        *x -= bary_r;
    }
    for x in v.iter_mut() {
        *x -= bary_v;
    }
}
