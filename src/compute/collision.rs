use tracing::debug;

use crate::constants::BULLET_SIZE;
use crate::entities::{Bullet, GameStatus, Session, Zombie, ZombieKind};

use super::end_game;
use super::rapid_fire::register_kill;
use super::zombie::{damage_zombie, points_for};

pub fn bullet_hits(bullet: &Bullet, zombie: &Zombie) -> bool {
    let dx = zombie.x - bullet.x;
    let dy = zombie.y - bullet.y;
    (dx * dx + dy * dy).sqrt() < zombie.size / 2.0 + BULLET_SIZE
}

/// Resolve bullet ↔ zombie hits for one tick.
///
/// Both lists are scanned newest-first.  A bullet is spent on the first
/// zombie it touches, so each bullet damages at most one zombie per tick.
/// Killing the boss ends the match on the spot and stops the scan.
pub fn resolve_bullet_hits(state: &mut Session, now: u64) {
    let mut bi = state.bullets.len();
    while bi > 0 {
        bi -= 1;
        if state.status.is_terminal() {
            break;
        }

        let bullet = &state.bullets[bi];
        let Some(zi) = state.zombies.iter().rposition(|z| bullet_hits(bullet, z)) else {
            continue;
        };
        state.bullets.remove(bi);

        if !damage_zombie(&mut state.zombies[zi]) {
            debug!(health = state.zombies[zi].health, "zombie hit");
            continue;
        }

        let dead = state.zombies.remove(zi);
        state.score = state.score.saturating_add(points_for(dead.kind));
        debug!(kind = ?dead.kind, score = state.score, "zombie killed");
        register_kill(state, now);

        if dead.kind == ZombieKind::Boss {
            end_game(state, GameStatus::Victory);
        }
    }
}
