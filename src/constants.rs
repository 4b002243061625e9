//! Tuning values for the simulation.  Distances are logical playfield
//! units, times are milliseconds.

use crate::entities::Rgb;

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 500.0;

// ── Warrior ───────────────────────────────────────────────────────────────────

pub const WARRIOR_SIZE: f32 = 40.0;
pub const WARRIOR_SPEED: f32 = 3.0;
pub const MAX_HEALTH: u32 = 100;
/// Length of the gun barrel drawn along the facing angle.
pub const GUN_LENGTH: f32 = 30.0;
/// Distance from the warrior's centre at which new bullets appear.
pub const MUZZLE_OFFSET: f32 = 40.0;
pub const INVULNERABILITY_MS: u64 = 1000;
/// Blink period of the warrior sprite while invulnerable.
pub const BLINK_PERIOD_MS: u64 = 100;

// ── Shooting ──────────────────────────────────────────────────────────────────

pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_SIZE: f32 = 5.0;
pub const BULLET_DAMAGE: u32 = 1;
pub const SHOOT_COOLDOWN_MS: u64 = 250;
pub const RAPID_FIRE_COOLDOWN_MS: u64 = 50;
pub const RAPID_FIRE_DURATION_MS: u64 = 10_000;
pub const ZOMBIES_FOR_RAPID_FIRE: u32 = 5;

// ── Zombies ───────────────────────────────────────────────────────────────────

pub const ZOMBIE_SIZE: f32 = 30.0;
pub const ZOMBIE_MAX_HEALTH: u32 = 5;
pub const WEAK_ZOMBIE_HEALTH: u32 = 1;
pub const BOSS_MAX_HEALTH: u32 = 30;
pub const WEAK_ZOMBIE_CHANCE: f64 = 0.2;
pub const CONTACT_DAMAGE: u32 = 10;
/// Contact happens below `(WARRIOR_SIZE + zombie size) / CONTACT_DIVISOR`.
pub const CONTACT_DIVISOR: f32 = 2.5;
pub const ZOMBIE_SPAWN_RATE_MS: f64 = 2000.0;

// ── Progression ───────────────────────────────────────────────────────────────

pub const MAX_LEVEL: u32 = 10;
pub const POINTS_PER_LEVEL: u32 = 500;

/// Background colour for each level, index 0 is level 1.
pub const LEVEL_BACKGROUNDS: [Rgb; MAX_LEVEL as usize] = [
    (0x00, 0x00, 0x00), // forest
    (0x8b, 0x45, 0x13), // desert
    (0x2f, 0x4f, 0x4f), // cave
    (0x4a, 0x4a, 0x4a), // castle
    (0x00, 0x00, 0x00), // night
    (0x8b, 0x00, 0x00), // blood moon
    (0x4b, 0x00, 0x82), // mystic
    (0x00, 0x64, 0x00), // deep forest
    (0x80, 0x00, 0x00), // hell
    (0x19, 0x19, 0x70), // boss arena
];
