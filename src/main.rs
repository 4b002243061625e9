use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zombie_defense::compute::{fire_pressed, hud, init_state, restart, scene, tick};
use zombie_defense::config::Config;
use zombie_defense::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use zombie_defense::display::{self, Viewport};
use zombie_defense::entities::{FireTrigger, InputState};
use zombie_defense::error::GameError;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many milliseconds.  Covers terminals that don't emit key-release
/// events: the OS key-repeat rate is ≥ 15 Hz, so the window is always
/// refreshed before expiry while the key is down.
const HOLD_WINDOW_MS: u64 = 150;

const UP_KEYS: [KeyCode; 2] = [KeyCode::Up, KeyCode::Char('w')];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::Down, KeyCode::Char('s')];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::Left, KeyCode::Char('a')];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::Right, KeyCode::Char('d')];
const FIRE_KEYS: [KeyCode; 1] = [KeyCode::Char(' ')];

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW_MS`.
fn is_held(key_seen: &HashMap<KeyCode, u64>, keys: &[KeyCode], now: u64) -> bool {
    keys.iter().any(|key| {
        key_seen
            .get(key)
            .map(|&last| now.saturating_sub(last) <= HOLD_WINDOW_MS)
            .unwrap_or(false)
    })
}

/// Fold letter case so Shift or Caps Lock doesn't break WASD.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn millis_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: events only update a snapshot (held keys with their last
/// seen time, pointer position, pointer button).  Each frame the snapshot is
/// turned into an `InputState` and handed to `tick`; the last write before
/// the frame wins.  Key and button presses additionally fire a single shot
/// straight away, like a click would.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
) -> Result<(), GameError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_period = Duration::from_millis(config.frame_millis());

    let (width, height) = terminal::size()?;
    let mut view = Viewport::from_terminal(width, height);

    let mut state = init_state();
    let mut started = Instant::now();
    info!(cols = view.cols, rows = view.rows, "session started");

    // Maps each held key → the session time it was last seen (press or repeat).
    let mut key_seen: HashMap<KeyCode, u64> = HashMap::new();
    let mut pointer = (CANVAS_WIDTH, CANVAS_HEIGHT / 2.0);
    let mut pointer_down = false;

    loop {
        let frame_start = Instant::now();
        let mut now = millis_since(started);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    let code = normalize(code);
                    match kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            key_seen.insert(code, now);
                            match code {
                                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                                KeyCode::Char('c')
                                    if modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    return Ok(());
                                }
                                KeyCode::Char('r') if kind == KeyEventKind::Press => {
                                    state = restart(&state);
                                    started = Instant::now();
                                    now = 0;
                                    key_seen.clear();
                                    pointer_down = false;
                                }
                                KeyCode::Char(' ') => {
                                    state = fire_pressed(&state, FireTrigger::Key, now);
                                }
                                _ => {}
                            }
                        }
                        // Release: remove key immediately (keyboard-enhancement path)
                        KeyEventKind::Release => {
                            key_seen.remove(&code);
                        }
                    }
                }
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        pointer = view.to_logical(column, row);
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        pointer = view.to_logical(column, row);
                        pointer_down = true;
                        state = fire_pressed(&state, FireTrigger::Pointer, now);
                    }
                    MouseEventKind::Up(MouseButton::Left) => pointer_down = false,
                    _ => {}
                },
                Event::Resize(width, height) => {
                    view = Viewport::from_terminal(width, height);
                }
                _ => {}
            }
        }

        let input = InputState {
            up: is_held(&key_seen, &UP_KEYS, now),
            down: is_held(&key_seen, &DOWN_KEYS, now),
            left: is_held(&key_seen, &LEFT_KEYS, now),
            right: is_held(&key_seen, &RIGHT_KEYS, now),
            fire: is_held(&key_seen, &FIRE_KEYS, now),
            pointer_x: pointer.0,
            pointer_y: pointer.1,
            pointer_down,
        };

        state = tick(&state, &input, now, &mut rng);
        display::render(out, &scene(&state, now), &hud(&state, now), &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_period {
            thread::sleep(frame_period - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(config: &Config) -> Result<(), GameError> {
    let file = File::create(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}

fn main() -> Result<(), GameError> {
    let config = Config::parse();
    config.validate()?;
    init_logging(&config)?;
    info!(fps = config.fps, seed = ?config.seed, "starting zombie_defense");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let mouse_captured = !config.no_mouse && out.execute(EnableMouseCapture).is_ok();

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW_MS.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    if mouse_captured {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => info!("exiting"),
        Err(err) => error!(%err, "game loop failed"),
    }
    result
}
