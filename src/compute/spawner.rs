use rand::Rng;
use tracing::debug;

use crate::constants::ZOMBIE_SPAWN_RATE_MS;
use crate::entities::{Session, ZombieKind};

use super::zombie::spawn_zombie;

/// Gap between spawns at `level`; shrinks as the level rises.
pub fn spawn_interval(level: u32) -> u64 {
    (ZOMBIE_SPAWN_RATE_MS / (1.0 + level as f64 * 0.1)) as u64
}

/// Spawn one zombie once `now` has passed the scheduled moment (or at once
/// when nothing is scheduled yet), then schedule the next.  Returns whether
/// a zombie was added.
pub fn spawn_due(state: &mut Session, now: u64, rng: &mut impl Rng) -> bool {
    if matches!(state.next_spawn_at, Some(at) if now <= at) {
        return false;
    }

    let zombie = spawn_zombie(state.level, state.boss_spawned, rng);
    if zombie.kind == ZombieKind::Boss {
        state.boss_spawned = true;
    }
    debug!(kind = ?zombie.kind, x = zombie.x, y = zombie.y, "zombie spawned");
    state.zombies.push(zombie);
    state.next_spawn_at = Some(now + spawn_interval(state.level));
    true
}
