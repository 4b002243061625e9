//! Pure game-logic functions.
//!
//! The public entry points (`init_state`, `tick`, `fire_pressed`, `restart`)
//! take an immutable reference to the current `Session` and return a
//! brand-new one.  Time comes in as milliseconds since the session started
//! and randomness through an injected RNG, so callers control determinism.

pub mod bullet;
pub mod collision;
pub mod rapid_fire;
pub mod spawner;
pub mod warrior;
pub mod zombie;

use rand::Rng;
use tracing::info;

use crate::constants::{
    BLINK_PERIOD_MS, BULLET_SIZE, GUN_LENGTH, LEVEL_BACKGROUNDS, MAX_LEVEL, POINTS_PER_LEVEL,
    ZOMBIES_FOR_RAPID_FIRE,
};
use crate::entities::{
    DrawCommand, FireTrigger, GameStatus, Hud, InputState, RapidFire, Rgb, Session, ZombieKind,
};

use self::bullet::advance_bullet;
use self::collision::resolve_bullet_hits;
use self::spawner::spawn_due;
use self::warrior::{
    aim_warrior, is_invulnerable, move_warrior, new_warrior, shoot, DamageOutcome,
};
use self::zombie::{update_zombie, ZombieStep};

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Playfield colour for `level` (clamped to `1..=MAX_LEVEL`).
pub fn background_for(level: u32) -> Rgb {
    let index = level.clamp(1, MAX_LEVEL) - 1;
    LEVEL_BACKGROUNDS[index as usize]
}

/// Score needed to leave `level`.
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(POINTS_PER_LEVEL)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session: warrior centred at full health, no enemies,
/// power-up inactive.
pub fn init_state() -> Session {
    Session {
        warrior: new_warrior(),
        zombies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        level: 1,
        rapid_fire: RapidFire::Inactive,
        kill_count: 0,
        status: GameStatus::Running,
        boss_spawned: false,
        next_spawn_at: None,
        last_tick_at: 0,
        delta_ms: 0,
        frame: 0,
    }
}

/// Throw away `previous` and start over.
pub fn restart(previous: &Session) -> Session {
    info!(
        score = previous.score,
        level = previous.level,
        status = ?previous.status,
        "restarting session"
    );
    init_state()
}

pub(crate) fn end_game(state: &mut Session, status: GameStatus) {
    if state.status.is_terminal() {
        return;
    }
    state.status = status;
    info!(?status, score = state.score, level = state.level, "match over");
}

fn try_shoot(state: &mut Session, now: u64) {
    let cooldown = rapid_fire::shot_cooldown(state.rapid_fire);
    if let Some(bullet) = shoot(&mut state.warrior, now, cooldown) {
        state.bullets.push(bullet);
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// One-shot fire request from a key or pointer press.
///
/// A pointer press only fires while rapid fire is off; while it is on the
/// held control auto-fires inside `tick` instead.
pub fn fire_pressed(state: &Session, trigger: FireTrigger, now: u64) -> Session {
    let mut next = state.clone();
    if next.status.is_terminal() {
        return next;
    }
    if trigger == FireTrigger::Pointer && rapid_fire::is_active(next.rapid_fire) {
        return next;
    }
    try_shoot(&mut next, now);
    next
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: warrior input, bullets, spawning, zombies (contact damage),
/// bullet hits, power-up expiry, level check.  Drawing is left to the
/// caller through `scene` and `hud`.  A session in a terminal state is
/// returned unchanged.
pub fn tick(state: &Session, input: &InputState, now: u64, rng: &mut impl Rng) -> Session {
    let mut next = state.clone();
    if next.status.is_terminal() {
        return next;
    }
    next.frame += 1;
    next.delta_ms = now.saturating_sub(state.last_tick_at);
    next.last_tick_at = now;

    // ── 1. Warrior ───────────────────────────────────────────────────────────
    move_warrior(&mut next.warrior, input);
    aim_warrior(&mut next.warrior, input.pointer_x, input.pointer_y);
    if rapid_fire::is_active(next.rapid_fire) && (input.pointer_down || input.fire) {
        try_shoot(&mut next, now);
    }

    // ── 2. Bullets ───────────────────────────────────────────────────────────
    next.bullets.retain_mut(|b| !advance_bullet(b));

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    spawn_due(&mut next, now, rng);

    // ── 4. Zombies ───────────────────────────────────────────────────────────
    let mut defeated = false;
    let hero = &mut next.warrior;
    next.zombies.retain_mut(|z| match update_zombie(z, hero, now) {
        ZombieStep::Chasing => true,
        ZombieStep::Contact(outcome) => {
            defeated |= outcome == DamageOutcome::Killed;
            false
        }
    });
    if defeated {
        end_game(&mut next, GameStatus::Defeat);
    }

    // ── 5. Bullet hits ───────────────────────────────────────────────────────
    resolve_bullet_hits(&mut next, now);

    // ── 6. Power-up ──────────────────────────────────────────────────────────
    rapid_fire::expire(&mut next, now);

    // ── 7. Level progression ─────────────────────────────────────────────────
    if !next.status.is_terminal()
        && next.level < MAX_LEVEL
        && next.score >= level_threshold(next.level)
    {
        next.level += 1;
        info!(level = next.level, score = next.score, "level up");
    }

    next
}

// ── Presentation views ──────────────────────────────────────────────────────

pub fn hud(state: &Session, now: u64) -> Hud {
    Hud {
        score: state.score,
        level: state.level,
        health_fraction: warrior::health_fraction(&state.warrior),
        kill_count: state.kill_count,
        kills_needed: ZOMBIES_FOR_RAPID_FIRE,
        rapid_fire_remaining_ms: rapid_fire::remaining_ms(state.rapid_fire, now),
        status: state.status,
    }
}

/// Everything to paint this frame, back to front.  The warrior is left out
/// on the "off" half of its blink while invulnerable.
pub fn scene(state: &Session, now: u64) -> Vec<DrawCommand> {
    let mut frame = Vec::with_capacity(state.bullets.len() + state.zombies.len() + 2);
    frame.push(DrawCommand::Background(background_for(state.level)));

    frame.extend(state.bullets.iter().map(|b| DrawCommand::Bullet {
        x: b.x,
        y: b.y,
        radius: BULLET_SIZE,
    }));

    frame.extend(state.zombies.iter().map(|z| DrawCommand::Zombie {
        x: z.x,
        y: z.y,
        size: z.size,
        kind: z.kind,
        health_fraction: (z.kind != ZombieKind::Weak).then(|| zombie::health_fraction(z)),
    }));

    let w = &state.warrior;
    let blink_on = (now / BLINK_PERIOD_MS) % 2 == 1;
    if !is_invulnerable(w, now) || blink_on {
        frame.push(DrawCommand::Warrior {
            x: w.x,
            y: w.y,
            angle: w.angle,
            gun_x: w.x + w.angle.cos() * GUN_LENGTH,
            gun_y: w.y + w.angle.sin() * GUN_LENGTH,
        });
    }

    frame
}
