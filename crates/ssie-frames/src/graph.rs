/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The frame graph: routes a [`StateVector`] between any supported
//! (center, orientation) pair by composing the fixed rotation edges
//! (`crate::rotations`) and translation edges (`crate::translations`).
//!
//! Rotations require an inertial center (`Heliocenter`, `Ssb`,
//! `Geocenter`); `Emb` carries only `J2000Eq` and `Topocenter` carries
//! only `Efi`/`Enu`, per the routing invariant in spec §4.4. A center
//! translation always happens in the orientation the two endpoints'
//! offsets are naturally given in (J2000 equatorial for the
//! Heliocenter-Ssb-Emb-Geocenter chain, EFI for Geocenter<->Topocenter),
//! so `convert` rotates to that pivot orientation, translates, then
//! rotates on to the caller's requested orientation.

use glam::DVec3;
use log::trace;
use ssie_eop::EopParams;

use crate::errors::FrameError;
use crate::rotations::{
    self, OrientationAngles, efi_to_enu, j2000_eq_to_ecl, nutation_mod_to_tod,
    pef_to_tod_state, polar_motion_pef_to_efi, precession_j2000_to_mod, tod_to_pef_state,
    tod_to_teme,
};
use crate::translations::{emb_to_geocenter, geocenter_to_topocenter, helio_to_ssb, ssb_to_emb};
use crate::types::{BodyState, FrameCenter, FrameOrientation, ObserverLocation, SolarParams, StateVector};

const MAIN_CHAIN: [FrameOrientation; 6] = [
    FrameOrientation::J2000Eq,
    FrameOrientation::Mod,
    FrameOrientation::Tod,
    FrameOrientation::Pef,
    FrameOrientation::Efi,
    FrameOrientation::Enu,
];

fn main_chain_index(o: FrameOrientation) -> Option<usize> {
    MAIN_CHAIN.iter().position(|x| *x == o)
}

const CENTER_CHAIN: [FrameCenter; 5] = [
    FrameCenter::Heliocenter,
    FrameCenter::Ssb,
    FrameCenter::Emb,
    FrameCenter::Geocenter,
    FrameCenter::Topocenter,
];

fn center_index(c: FrameCenter) -> usize {
    CENTER_CHAIN.iter().position(|x| *x == c).expect("exhaustive center chain")
}

/// One hop on the main orientation chain, forward (toward `Enu`) or
/// backward, applied to a position/velocity pair.
fn chain_hop(
    from: FrameOrientation,
    to: FrameOrientation,
    eop: &EopParams,
    observer: Option<&ObserverLocation>,
    r: DVec3,
    v: DVec3,
) -> Result<(DVec3, DVec3), FrameError> {
    let angles = OrientationAngles::from_eop(eop);
    use FrameOrientation::*;
    match (from, to) {
        (J2000Eq, Mod) => {
            let m = precession_j2000_to_mod(angles.jt_tdb);
            Ok((m * r, m * v))
        }
        (Mod, J2000Eq) => {
            let m = precession_j2000_to_mod(angles.jt_tdb).transpose();
            Ok((m * r, m * v))
        }
        (Mod, Tod) => {
            let m = nutation_mod_to_tod(angles.eps0_rad, angles.dpsi_rad, angles.deps_rad);
            Ok((m * r, m * v))
        }
        (Tod, Mod) => {
            let m = nutation_mod_to_tod(angles.eps0_rad, angles.dpsi_rad, angles.deps_rad).transpose();
            Ok((m * r, m * v))
        }
        (Tod, Pef) => Ok(tod_to_pef_state(r, v, angles.gast, rotations::gast_rate(angles.jt_tdb))),
        (Pef, Tod) => Ok(pef_to_tod_state(r, v, angles.gast, rotations::gast_rate(angles.jt_tdb))),
        (Pef, Efi) => {
            let m = polar_motion_pef_to_efi(angles.dx_rad, angles.dy_rad);
            Ok((m * r, m * v))
        }
        (Efi, Pef) => {
            let m = polar_motion_pef_to_efi(angles.dx_rad, angles.dy_rad).transpose();
            Ok((m * r, m * v))
        }
        (Efi, Enu) => {
            let obs = observer.ok_or(FrameError::MissingObserverLocation)?;
            let m = efi_to_enu(obs.latitude_rad, obs.longitude_rad);
            Ok((m * r, m * v))
        }
        (Enu, Efi) => {
            let obs = observer.ok_or(FrameError::MissingObserverLocation)?;
            let m = efi_to_enu(obs.latitude_rad, obs.longitude_rad).transpose();
            Ok((m * r, m * v))
        }
        _ => unreachable!("chain_hop called on non-adjacent pair {from:?} -> {to:?}"),
    }
}

/// Walks the main chain from `from` to `to` (both chain members),
/// applying one `chain_hop` per edge crossed.
fn walk_main_chain(
    from: FrameOrientation,
    to: FrameOrientation,
    eop: &EopParams,
    observer: Option<&ObserverLocation>,
    mut r: DVec3,
    mut v: DVec3,
) -> Result<(DVec3, DVec3), FrameError> {
    let i = main_chain_index(from).expect("from must be a main-chain orientation");
    let j = main_chain_index(to).expect("to must be a main-chain orientation");
    let step: isize = if j as isize > i as isize { 1 } else { -1 };
    let mut k = i as isize;
    while k != j as isize {
        let a = MAIN_CHAIN[k as usize];
        let b = MAIN_CHAIN[(k + step) as usize];
        let (r2, v2) = chain_hop(a, b, eop, observer, r, v)?;
        r = r2;
        v = v2;
        k += step;
    }
    Ok((r, v))
}

/// Converts a position/velocity pair between any two supported frame
/// orientations, routing `B1950Ecl`/`B1950Eq`/`Peri` as unsupported (no
/// rotation rule is given for them in spec §4.4), and `J2000Ecl`/`Teme`
/// as single-hop branches off `J2000Eq`/`Tod` respectively.
pub fn convert_orientation(
    from: FrameOrientation,
    to: FrameOrientation,
    eop: &EopParams,
    observer: Option<&ObserverLocation>,
    r: DVec3,
    v: DVec3,
) -> Result<(DVec3, DVec3), FrameError> {
    use FrameOrientation::*;

    if from == to {
        return Ok((r, v));
    }

    // Step off a branch orientation onto its main-chain anchor.
    let (anchor_from, r, v) = match from {
        J2000Ecl => {
            let m = j2000_eq_to_ecl().transpose();
            (J2000Eq, m * r, m * v)
        }
        Teme => {
            let angles = OrientationAngles::from_eop(eop);
            let m = tod_to_teme(angles.gmst, angles.gast).transpose();
            (Tod, m * r, m * v)
        }
        B1950Ecl | B1950Eq | Peri => {
            return Err(unsupported_branch(from));
        }
        other => (other, r, v),
    };

    // Determine the main-chain anchor `to` steps off of, if any.
    let (anchor_to, needs_final_hop) = match to {
        J2000Ecl => (J2000Eq, true),
        Teme => (Tod, true),
        B1950Ecl | B1950Eq | Peri => return Err(unsupported_branch(to)),
        other => (other, false),
    };

    let (r, v) = walk_main_chain(anchor_from, anchor_to, eop, observer, r, v)?;

    if !needs_final_hop {
        return Ok((r, v));
    }

    match to {
        J2000Ecl => {
            let m = j2000_eq_to_ecl();
            Ok((m * r, m * v))
        }
        Teme => {
            let angles = OrientationAngles::from_eop(eop);
            let m = tod_to_teme(angles.gmst, angles.gast);
            Ok((m * r, m * v))
        }
        _ => unreachable!(),
    }
}

fn unsupported_branch(o: FrameOrientation) -> FrameError {
    FrameError::UnsupportedOrientationAtCenter {
        center: FrameCenter::Heliocenter,
        required: FrameOrientation::J2000Eq,
        requested: o,
    }
}

/// The orientation a center's translation edges are naturally given in:
/// J2000 equatorial for every center except `Topocenter`, which is EFI.
fn pivot_orientation(center: FrameCenter) -> FrameOrientation {
    if center == FrameCenter::Topocenter {
        FrameOrientation::Efi
    } else {
        FrameOrientation::J2000Eq
    }
}

/// Checks the routing invariant: rotating away from `orientation` at
/// `center` is only supported when `center` is inertial, or when
/// `orientation` already equals the center's pivot.
fn require_rotatable(center: FrameCenter, orientation: FrameOrientation) -> Result<(), FrameError> {
    let pivot = pivot_orientation(center);
    if orientation == pivot {
        return Ok(());
    }
    match center {
        FrameCenter::Heliocenter | FrameCenter::Ssb | FrameCenter::Geocenter => Ok(()),
        FrameCenter::Topocenter if matches!(orientation, FrameOrientation::Enu) => Ok(()),
        FrameCenter::Emb | FrameCenter::Topocenter => {
            trace!("rotation at non-inertial center {center:?} from {orientation:?} requires translating to an inertial center first");
            Err(FrameError::UnsupportedRotationAtCenter { center, from: orientation, to: pivot })
        }
    }
}

fn offset(solar: &SolarParams, from_idx: usize) -> BodyState {
    match CENTER_CHAIN[from_idx] {
        FrameCenter::Heliocenter => helio_to_ssb(solar),
        FrameCenter::Ssb => ssb_to_emb(solar),
        FrameCenter::Emb => emb_to_geocenter(solar),
        FrameCenter::Geocenter | FrameCenter::Topocenter => unreachable!("no chain offset beyond Geocenter"),
    }
}

/// Translates a position/velocity pair, already in its pivot
/// orientation, from `from_center` to `to_center`, switching pivot basis
/// (J2000Eq <-> EFI) at the Geocenter<->Topocenter boundary.
fn translate_centers(
    from_center: FrameCenter,
    to_center: FrameCenter,
    eop: &EopParams,
    solar: &SolarParams,
    observer: Option<&ObserverLocation>,
    mut r: DVec3,
    mut v: DVec3,
) -> Result<(DVec3, DVec3, FrameCenter), FrameError> {
    let mut idx = center_index(from_center);
    let to_idx = center_index(to_center);

    while idx < to_idx {
        if CENTER_CHAIN[idx] == FrameCenter::Geocenter {
            let obs = observer.ok_or(FrameError::MissingObserverLocation)?;
            r += geocenter_to_topocenter(obs);
        } else {
            let o = offset(solar, idx);
            r += o.position;
            v += o.velocity;
        }
        idx += 1;
    }
    while idx > to_idx {
        idx -= 1;
        if CENTER_CHAIN[idx] == FrameCenter::Geocenter {
            let obs = observer.ok_or(FrameError::MissingObserverLocation)?;
            r -= geocenter_to_topocenter(obs);
        } else {
            let o = offset(solar, idx);
            r -= o.position;
            v -= o.velocity;
        }
    }
    Ok((r, v, to_center))
}

/// Converts `state` to `(to_center, to_orientation)`, per the routing
/// invariant of spec §4.4.
pub fn convert(
    state: &StateVector,
    to_center: FrameCenter,
    to_orientation: FrameOrientation,
    eop: &EopParams,
    solar: &SolarParams,
    observer: Option<&ObserverLocation>,
) -> Result<StateVector, FrameError> {
    if state.center == to_center && state.orientation == to_orientation {
        return Ok(*state);
    }

    require_rotatable(state.center, state.orientation)?;
    let pivot_from = pivot_orientation(state.center);
    let (r0, v0) = convert_orientation(state.orientation, pivot_from, eop, observer, state.position, state.velocity)?;

    let (r1, v1, _) = translate_centers(state.center, to_center, eop, solar, observer, r0, v0)?;

    let pivot_to = pivot_orientation(to_center);
    require_rotatable(to_center, pivot_to)?;
    let (r2, v2) = convert_orientation(pivot_to, to_orientation, eop, observer, r1, v1)?;

    Ok(StateVector::new(to_center, to_orientation, r2, v2, state.time))
}

/// Every (center, orientation) pair this graph declares supported,
/// matching the `B1950*`/`Peri` exclusions and the `Emb`/`Topocenter`
/// rotation restriction.
pub fn supported_pairs() -> Vec<(FrameCenter, FrameOrientation)> {
    use FrameCenter::*;
    use FrameOrientation::*;
    let rotatable = [J2000Eq, J2000Ecl, Mod, Tod, Teme, Pef, Efi, Enu];
    let mut pairs = Vec::new();
    for &center in &[Heliocenter, Ssb, Geocenter] {
        for &o in &rotatable {
            pairs.push((center, o));
        }
    }
    pairs.push((Emb, J2000Eq));
    pairs.push((Topocenter, Efi));
    pairs.push((Topocenter, Enu));
    pairs
}

/// Expands `state` into every supported (center, orientation) pair
/// reachable from it, matching the `getAll` contract of spec §4.4.
pub fn get_all(
    state: &StateVector,
    eop: &EopParams,
    solar: &SolarParams,
    observer: Option<&ObserverLocation>,
) -> Vec<((FrameCenter, FrameOrientation), StateVector)> {
    supported_pairs()
        .into_iter()
        .filter_map(|(c, o)| convert(state, c, o, eop, solar, observer).ok().map(|sv| ((c, o), sv)))
        .collect()
}
