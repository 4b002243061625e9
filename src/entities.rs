//! All game entity types — pure data, no logic.

/// An `(r, g, b)` colour.  The core only names colours; the presentation
/// layer decides how to show them.
pub type Rgb = (u8, u8, u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZombieKind {
    Normal,
    /// Fast, one-hit enemy that only appears after level 1.
    Weak,
    /// The single level-10 enemy; killing it wins the match.
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Victory,
    Defeat,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Rapid-fire power-up.  Entered on a kill streak, left once `until` passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RapidFire {
    Inactive,
    Active { until: u64 },
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    /// Direction of travel in radians (0 = right, clockwise on screen).
    pub angle: f32,
    pub speed: f32,
}

// ── Warrior & zombies ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Warrior {
    pub x: f32,
    pub y: f32,
    /// Always within `0..=MAX_HEALTH`.
    pub health: u32,
    /// Facing angle in radians, towards the pointer.
    pub angle: f32,
    /// Incoming damage is ignored while `now < invulnerable_until`.
    pub invulnerable_until: Option<u64>,
    pub last_shot_at: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zombie {
    pub x: f32,
    pub y: f32,
    pub kind: ZombieKind,
    pub health: u32,
    pub max_health: u32,
    pub speed: f32,
    /// Render diameter; also drives the collision radii.
    pub size: f32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Snapshot of the controls, read once at the start of every tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire key held.
    pub fire: bool,
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub pointer_down: bool,
}

/// Where a one-shot fire request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireTrigger {
    Key,
    Pointer,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One match.  Everything the tick touches lives here, so tests can run
/// isolated sessions side by side.
#[derive(Clone, Debug)]
pub struct Session {
    pub warrior: Warrior,
    pub zombies: Vec<Zombie>,
    pub bullets: Vec<Bullet>,
    /// Never decreases within a session.
    pub score: u32,
    /// `1..=MAX_LEVEL`, never decreases within a session.
    pub level: u32,
    pub rapid_fire: RapidFire,
    /// Kills counted towards the next rapid-fire activation.
    pub kill_count: u32,
    pub status: GameStatus,
    pub boss_spawned: bool,
    /// `None` until the first spawn, which then happens on the next tick.
    pub next_spawn_at: Option<u64>,
    pub last_tick_at: u64,
    /// Milliseconds between the two most recent ticks.
    pub delta_ms: u64,
    pub frame: u64,
}

// ── Outputs for the presentation layer ────────────────────────────────────────

/// Values shown around the playfield.
#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    /// `0.0..=1.0`
    pub health_fraction: f32,
    pub kill_count: u32,
    pub kills_needed: u32,
    pub rapid_fire_remaining_ms: Option<u64>,
    pub status: GameStatus,
}

/// One drawable item of a frame, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Background(Rgb),
    Bullet {
        x: f32,
        y: f32,
        radius: f32,
    },
    Zombie {
        x: f32,
        y: f32,
        size: f32,
        kind: ZombieKind,
        /// `None` for variants that carry no health bar.
        health_fraction: Option<f32>,
    },
    Warrior {
        x: f32,
        y: f32,
        angle: f32,
        gun_x: f32,
        gun_y: f32,
    },
}
