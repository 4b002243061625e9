use rand::Rng;

use crate::constants::{
    BOSS_MAX_HEALTH, BULLET_DAMAGE, CANVAS_HEIGHT, CANVAS_WIDTH, CONTACT_DAMAGE, CONTACT_DIVISOR,
    MAX_LEVEL, WARRIOR_SIZE, WEAK_ZOMBIE_CHANCE, WEAK_ZOMBIE_HEALTH, ZOMBIE_MAX_HEALTH,
    ZOMBIE_SIZE,
};
use crate::entities::{Warrior, Zombie, ZombieKind};

use super::warrior::{take_damage, DamageOutcome};

/// What happened to a zombie during `update_zombie`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZombieStep {
    Chasing,
    /// Reached the warrior; contact damage was applied and the zombie
    /// must be removed.
    Contact(DamageOutcome),
}

// ── Variant tables ───────────────────────────────────────────────────────────

fn max_health_for(kind: ZombieKind) -> u32 {
    match kind {
        ZombieKind::Normal => ZOMBIE_MAX_HEALTH,
        ZombieKind::Weak => WEAK_ZOMBIE_HEALTH,
        ZombieKind::Boss => BOSS_MAX_HEALTH,
    }
}

pub fn speed_for(kind: ZombieKind, level: u32) -> f32 {
    let base = 1.0 + level as f32 * 0.1;
    match kind {
        ZombieKind::Normal => base,
        ZombieKind::Weak => base * 1.5,
        ZombieKind::Boss => base * 0.5,
    }
}

fn size_for(kind: ZombieKind) -> f32 {
    match kind {
        ZombieKind::Boss => ZOMBIE_SIZE * 2.0,
        _ => ZOMBIE_SIZE,
    }
}

/// Score awarded per zombie destroyed.
pub fn points_for(kind: ZombieKind) -> u32 {
    match kind {
        ZombieKind::Normal => 50,
        ZombieKind::Weak => 10,
        ZombieKind::Boss => 100,
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Pick the variant for a new zombie.  The boss appears once, on the first
/// spawn at the last level; `boss_spawned` tracks whether it already has.
pub fn pick_kind(level: u32, boss_spawned: bool, rng: &mut impl Rng) -> ZombieKind {
    if level >= MAX_LEVEL && !boss_spawned {
        return ZombieKind::Boss;
    }
    if level > 1 && rng.gen_bool(WEAK_ZOMBIE_CHANCE) {
        ZombieKind::Weak
    } else {
        ZombieKind::Normal
    }
}

pub fn new_zombie(kind: ZombieKind, level: u32, x: f32, y: f32) -> Zombie {
    let max_health = max_health_for(kind);
    Zombie {
        x,
        y,
        kind,
        health: max_health,
        max_health,
        speed: speed_for(kind, level),
        size: size_for(kind),
    }
}

/// Create a zombie just outside a random playfield edge.
pub fn spawn_zombie(level: u32, boss_spawned: bool, rng: &mut impl Rng) -> Zombie {
    let kind = pick_kind(level, boss_spawned, rng);
    let size = size_for(kind);
    let (x, y) = match rng.gen_range(0..4) {
        0 => (rng.gen_range(0.0..CANVAS_WIDTH), -size),
        1 => (CANVAS_WIDTH + size, rng.gen_range(0.0..CANVAS_HEIGHT)),
        2 => (rng.gen_range(0.0..CANVAS_WIDTH), CANVAS_HEIGHT + size),
        _ => (-size, rng.gen_range(0.0..CANVAS_HEIGHT)),
    };
    new_zombie(kind, level, x, y)
}

// ── Per-tick behaviour ───────────────────────────────────────────────────────

/// Contact threshold between the warrior and a zombie of this size.
pub fn contact_distance(zombie: &Zombie) -> f32 {
    (WARRIOR_SIZE + zombie.size) / CONTACT_DIVISOR
}

/// Step straight towards the warrior.  Contact is judged on the distance
/// measured before the step.
pub fn update_zombie(zombie: &mut Zombie, warrior: &mut Warrior, now: u64) -> ZombieStep {
    let dx = warrior.x - zombie.x;
    let dy = warrior.y - zombie.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance > 0.0 {
        zombie.x += dx / distance * zombie.speed;
        zombie.y += dy / distance * zombie.speed;
    }

    if distance < contact_distance(zombie) {
        return ZombieStep::Contact(take_damage(warrior, CONTACT_DAMAGE, now));
    }
    ZombieStep::Chasing
}

/// Apply one bullet hit.  Returns `true` when the zombie died.
pub fn damage_zombie(zombie: &mut Zombie) -> bool {
    zombie.health = zombie.health.saturating_sub(BULLET_DAMAGE);
    zombie.health == 0
}

pub fn health_fraction(zombie: &Zombie) -> f32 {
    if zombie.max_health == 0 {
        return 0.0;
    }
    zombie.health as f32 / zombie.max_health as f32
}
