//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! frame (`DrawCommand`s plus the `Hud`).  No game logic is performed; this
//! module only translates the frame into terminal commands.

mod viewport;

pub use viewport::Viewport;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::constants::WARRIOR_SIZE;
use crate::entities::{DrawCommand, GameStatus, Hud, Rgb, ZombieKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WARRIOR: Color = Color::Rgb { r: 0x4c, g: 0xaf, b: 0x50 };
const C_GUN: Color = Color::Grey;
const C_BULLET: Color = Color::Rgb { r: 0xff, g: 0xd7, b: 0x00 };
const C_ZOMBIE_NORMAL: Color = Color::Rgb { r: 0x66, g: 0x33, b: 0x99 };
const C_ZOMBIE_WEAK: Color = Color::Rgb { r: 0x99, g: 0x66, b: 0x33 };
const C_ZOMBIE_BOSS: Color = Color::Rgb { r: 0xff, g: 0x00, b: 0x00 };
const C_HEALTH_FULL: Color = Color::Red;
const C_HEALTH_EMPTY: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_HEALTH: Color = Color::Green;
const C_GAUGE: Color = Color::Rgb { r: 0xff, g: 0xd7, b: 0x00 };
const C_TIMER: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const HEALTH_BAR_CELLS: usize = 20;
const GAUGE_CELLS: usize = 10;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Text bar `width` cells wide with `fraction` of them drawn as `fill`.
fn bar(fraction: f32, width: usize, fill: char, empty: char) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    let mut s = String::with_capacity(width * 3);
    s.extend(std::iter::repeat(fill).take(filled));
    s.extend(std::iter::repeat(empty).take(width - filled));
    s
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    frame: &[DrawCommand],
    hud: &Hud,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, hud, view)?;

    for command in frame {
        match command {
            DrawCommand::Background(color) => draw_background(out, *color, view)?,
            DrawCommand::Bullet { x, y, radius } => draw_bullet(out, *x, *y, *radius, view)?,
            DrawCommand::Zombie {
                x,
                y,
                size,
                kind,
                health_fraction,
            } => draw_zombie(out, *x, *y, *size, *kind, *health_fraction, view)?,
            DrawCommand::Warrior {
                x,
                y,
                angle,
                gun_x,
                gun_y,
            } => draw_warrior(out, *x, *y, *angle, (*gun_x, *gun_y), view)?,
        }
    }

    out.queue(style::ResetColor)?;
    draw_rapid_fire_gauge(out, hud, view)?;

    match hud.status {
        GameStatus::Running => {}
        GameStatus::Victory => draw_end_screen(out, "VICTORY!", Color::Yellow, hud, view)?,
        GameStatus::Defeat => draw_end_screen(out, "GAME  OVER", Color::Red, hud, view)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.bottom()))?;
    out.flush()?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, color: Rgb, view: &Viewport) -> std::io::Result<()> {
    // The background colour stays set for the entities painted on top.
    out.queue(style::SetBackgroundColor(rgb(color)))?;
    let blank = " ".repeat(view.cols as usize);
    for row in view.top..view.bottom() {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    x: f32,
    y: f32,
    radius: f32,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for (col, row) in view.disc(x, y, radius) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("•"))?;
    }
    Ok(())
}

fn draw_zombie<W: Write>(
    out: &mut W,
    x: f32,
    y: f32,
    size: f32,
    kind: ZombieKind,
    health_fraction: Option<f32>,
    view: &Viewport,
) -> std::io::Result<()> {
    let (color, glyph) = match kind {
        ZombieKind::Normal => (C_ZOMBIE_NORMAL, "Z"),
        ZombieKind::Weak => (C_ZOMBIE_WEAK, "z"),
        ZombieKind::Boss => (C_ZOMBIE_BOSS, "B"),
    };
    let cells = view.disc(x, y, size / 2.0);
    out.queue(style::SetForegroundColor(color))?;
    for &(col, row) in &cells {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }

    // Health bar on the row above the body
    let Some(fraction) = health_fraction else {
        return Ok(());
    };
    let Some(top) = cells.iter().map(|&(_, row)| row).min() else {
        return Ok(());
    };
    if top <= view.top {
        return Ok(());
    }
    let first = cells.iter().map(|&(col, _)| col).min().unwrap_or(0);
    let last = cells.iter().map(|&(col, _)| col).max().unwrap_or(first);
    let width = usize::from(last - first) + 1;
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).ceil() as usize).min(width);

    out.queue(cursor::MoveTo(first, top - 1))?;
    out.queue(style::SetForegroundColor(C_HEALTH_FULL))?;
    out.queue(Print("▀".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_HEALTH_EMPTY))?;
    out.queue(Print("▀".repeat(width - filled)))?;
    Ok(())
}

/// Barrel glyph for the facing angle (screen y grows downwards).
fn gun_glyph(angle: f32) -> &'static str {
    let octant = ((angle.to_degrees() + 22.5).rem_euclid(360.0) / 45.0) as u32;
    match octant {
        0 | 4 => "─",
        1 | 5 => "╲",
        2 | 6 => "│",
        _ => "╱",
    }
}

fn draw_warrior<W: Write>(
    out: &mut W,
    x: f32,
    y: f32,
    angle: f32,
    gun: (f32, f32),
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_WARRIOR))?;
    let body = view.disc(x, y, WARRIOR_SIZE / 2.0);
    for &(col, row) in &body {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("█"))?;
    }
    if let Some((col, row)) = view.to_cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("@"))?;
    }

    if let Some(cell) = view.to_cell(gun.0, gun.1) {
        if !body.contains(&cell) || body.len() == 1 {
            out.queue(style::SetForegroundColor(C_GUN))?;
            out.queue(cursor::MoveTo(cell.0, cell.1))?;
            out.queue(Print(gun_glyph(angle)))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &Hud, view: &Viewport) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", hud.score)))?;

    // Level — centre
    let level_str = format!("Level: {}", hud.level);
    let lx = (view.cols / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Health — right
    let health_str = format!(
        "HP {} {:>3}%",
        bar(hud.health_fraction, HEALTH_BAR_CELLS, '█', '░'),
        (hud.health_fraction.clamp(0.0, 1.0) * 100.0).round() as u32
    );
    let rx = view
        .cols
        .saturating_sub(health_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health_str))?;
    Ok(())
}

// ── Rapid-fire gauge + controls hint (last row) ──────────────────────────────

fn draw_rapid_fire_gauge<W: Write>(out: &mut W, hud: &Hud, view: &Viewport) -> std::io::Result<()> {
    let row = view.bottom();
    let progress = if hud.kills_needed == 0 {
        0.0
    } else {
        hud.kill_count as f32 / hud.kills_needed as f32
    };

    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_GAUGE))?;
    out.queue(Print(format!(
        "Rapid Fire: {}/{} [{}]",
        hud.kill_count,
        hud.kills_needed,
        bar(progress, GAUGE_CELLS, '■', '·')
    )))?;

    if let Some(ms) = hud.rapid_fire_remaining_ms {
        out.queue(style::SetForegroundColor(C_TIMER))?;
        out.queue(Print(format!("  Time: {:.1}s", ms as f32 / 1000.0)))?;
    }

    let hint = "WASD/←↑→↓ Move  Mouse Aim  Click/SPACE Shoot  R Restart  Q Quit";
    let hx = view.cols.saturating_sub(hint.chars().count() as u16 + 1);
    if hx > 48 {
        out.queue(cursor::MoveTo(hx, row))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(hint))?;
    }
    Ok(())
}

// ── End screens ───────────────────────────────────────────────────────────────

fn draw_end_screen<W: Write>(
    out: &mut W,
    title: &str,
    color: Color,
    hud: &Hud,
    view: &Viewport,
) -> std::io::Result<()> {
    let heading = format!("║ {:^18} ║", title);
    let score_line = format!("Final Score: {:>6}", hud.score);
    let hint = "R - Play Again  Q - Quit";

    let lines: [(&str, Color); 6] = [
        ("╔════════════════════╗", color),
        (heading.as_str(), color),
        ("╚════════════════════╝", color),
        (score_line.as_str(), Color::Yellow),
        ("", Color::Reset),
        (hint, Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.top + view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::ResetColor)?;
    for (i, (msg, line_color)) in lines.iter().enumerate() {
        if msg.is_empty() {
            continue;
        }
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*line_color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
