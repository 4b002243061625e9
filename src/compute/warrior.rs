use tracing::debug;

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, INVULNERABILITY_MS, MAX_HEALTH, MUZZLE_OFFSET, WARRIOR_SIZE,
    WARRIOR_SPEED,
};
use crate::entities::{Bullet, InputState, Warrior};

use super::bullet::new_bullet;

/// Result of a `take_damage` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Still inside the invulnerability window.
    Ignored,
    Hurt,
    /// Health reached 0 on this hit.
    Killed,
}

pub fn new_warrior() -> Warrior {
    Warrior {
        x: CANVAS_WIDTH / 2.0,
        y: CANVAS_HEIGHT / 2.0,
        health: MAX_HEALTH,
        angle: 0.0,
        invulnerable_until: None,
        last_shot_at: None,
    }
}

pub fn is_invulnerable(warrior: &Warrior, now: u64) -> bool {
    warrior.invulnerable_until.is_some_and(|until| now < until)
}

/// Step the warrior along every held axis.  Diagonals are not normalised,
/// so two axes at once cover more ground than one.
pub fn move_warrior(warrior: &mut Warrior, input: &InputState) {
    let half = WARRIOR_SIZE / 2.0;
    if input.up {
        warrior.y -= WARRIOR_SPEED;
    }
    if input.down {
        warrior.y += WARRIOR_SPEED;
    }
    if input.left {
        warrior.x -= WARRIOR_SPEED;
    }
    if input.right {
        warrior.x += WARRIOR_SPEED;
    }
    warrior.x = warrior.x.clamp(half, CANVAS_WIDTH - half);
    warrior.y = warrior.y.clamp(half, CANVAS_HEIGHT - half);
}

/// Face the warrior towards `(target_x, target_y)`.
pub fn aim_warrior(warrior: &mut Warrior, target_x: f32, target_y: f32) {
    warrior.angle = (target_y - warrior.y).atan2(target_x - warrior.x);
}

/// Fire along the facing angle if `cooldown_ms` has passed since the last
/// shot.  Returns the new bullet, or `None` while still cooling down.
pub fn shoot(warrior: &mut Warrior, now: u64, cooldown_ms: u64) -> Option<Bullet> {
    if let Some(last) = warrior.last_shot_at {
        if now.saturating_sub(last) < cooldown_ms {
            return None;
        }
    }
    warrior.last_shot_at = Some(now);
    let x = warrior.x + warrior.angle.cos() * MUZZLE_OFFSET;
    let y = warrior.y + warrior.angle.sin() * MUZZLE_OFFSET;
    Some(new_bullet(x, y, warrior.angle))
}

pub fn take_damage(warrior: &mut Warrior, amount: u32, now: u64) -> DamageOutcome {
    if is_invulnerable(warrior, now) {
        return DamageOutcome::Ignored;
    }
    warrior.health = warrior.health.saturating_sub(amount).min(MAX_HEALTH);
    warrior.invulnerable_until = Some(now + INVULNERABILITY_MS);
    debug!(health = warrior.health, amount, "warrior hit");

    if warrior.health == 0 {
        DamageOutcome::Killed
    } else {
        DamageOutcome::Hurt
    }
}

pub fn health_fraction(warrior: &Warrior) -> f32 {
    warrior.health.min(MAX_HEALTH) as f32 / MAX_HEALTH as f32
}
