//! Rapid-fire power-up: Inactive → Active on the kill streak, back to
//! Inactive once the expiry timestamp is reached.

use tracing::info;

use crate::constants::{
    RAPID_FIRE_COOLDOWN_MS, RAPID_FIRE_DURATION_MS, SHOOT_COOLDOWN_MS, ZOMBIES_FOR_RAPID_FIRE,
};
use crate::entities::{RapidFire, Session};

pub fn is_active(rapid_fire: RapidFire) -> bool {
    matches!(rapid_fire, RapidFire::Active { .. })
}

/// Shot cooldown for the current power-up state.
pub fn shot_cooldown(rapid_fire: RapidFire) -> u64 {
    match rapid_fire {
        RapidFire::Inactive => SHOOT_COOLDOWN_MS,
        RapidFire::Active { .. } => RAPID_FIRE_COOLDOWN_MS,
    }
}

pub fn remaining_ms(rapid_fire: RapidFire, now: u64) -> Option<u64> {
    match rapid_fire {
        RapidFire::Inactive => None,
        RapidFire::Active { until } => Some(until.saturating_sub(now)),
    }
}

/// Count a kill towards the streak.  Kills made while already active do
/// not count.
pub fn register_kill(state: &mut Session, now: u64) {
    if is_active(state.rapid_fire) {
        return;
    }
    state.kill_count += 1;
    if state.kill_count >= ZOMBIES_FOR_RAPID_FIRE {
        activate(state, now);
    }
}

pub fn activate(state: &mut Session, now: u64) {
    state.kill_count = 0;
    state.rapid_fire = RapidFire::Active {
        until: now + RAPID_FIRE_DURATION_MS,
    };
    info!(until = now + RAPID_FIRE_DURATION_MS, "rapid fire on");
}

/// Drop back to Inactive once `now` reaches the expiry timestamp.
pub fn expire(state: &mut Session, now: u64) {
    if let RapidFire::Active { until } = state.rapid_fire {
        if now >= until {
            state.rapid_fire = RapidFire::Inactive;
            info!("rapid fire off");
        }
    }
}
