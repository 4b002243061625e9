use zombie_defense::compute::bullet::new_bullet;
use zombie_defense::compute::zombie::new_zombie;
use zombie_defense::compute::{hud, init_state, scene};
use zombie_defense::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use zombie_defense::display::{render, Viewport};
use zombie_defense::entities::{GameStatus, ZombieKind};

fn view() -> Viewport {
    Viewport::from_terminal(80, 27) // 25 playfield rows
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn viewport_reserves_hud_and_gauge_rows() {
    let v = view();
    assert_eq!(v.cols, 80);
    assert_eq!(v.rows, 25);
    assert_eq!(v.top, 1);
    assert_eq!(v.bottom(), 26);
}

#[test]
fn viewport_survives_tiny_terminals() {
    let v = Viewport::from_terminal(0, 1);
    assert_eq!(v.cols, 1);
    assert_eq!(v.rows, 1);
    assert_eq!(v.to_cell(799.0, 499.0), Some((0, 1)));
}

#[test]
fn to_cell_maps_corners() {
    let v = view();
    assert_eq!(v.to_cell(0.0, 0.0), Some((0, 1)));
    assert_eq!(v.to_cell(CANVAS_WIDTH - 0.1, CANVAS_HEIGHT - 0.1), Some((79, 25)));
    assert_eq!(v.to_cell(400.0, 250.0), Some((40, 13)));
}

#[test]
fn to_cell_rejects_off_playfield_points() {
    let v = view();
    assert_eq!(v.to_cell(-1.0, 10.0), None);
    assert_eq!(v.to_cell(10.0, -30.0), None);
    assert_eq!(v.to_cell(CANVAS_WIDTH, 10.0), None);
    assert_eq!(v.to_cell(10.0, CANVAS_HEIGHT + 30.0), None);
}

#[test]
fn to_logical_returns_cell_centre() {
    let v = view();
    assert_eq!(v.to_logical(0, 1), (5.0, 10.0));
    assert_eq!(v.to_logical(40, 13), (405.0, 250.0));
    // Rows outside the playfield clamp to its edges
    assert_eq!(v.to_logical(0, 0), (5.0, 10.0));
    assert_eq!(v.to_logical(200, 200), (795.0, 490.0));
}

#[test]
fn to_logical_round_trips_through_to_cell() {
    let v = view();
    for (col, row) in [(3, 4), (79, 25), (12, 1)] {
        let (x, y) = v.to_logical(col, row);
        assert_eq!(v.to_cell(x, y), Some((col, row)));
    }
}

#[test]
fn disc_covers_at_least_its_centre() {
    let v = view();
    let bullet = v.disc(100.0, 100.0, 1.0);
    assert_eq!(bullet, vec![v.to_cell(100.0, 100.0).unwrap()]);

    let boss = v.disc(400.0, 250.0, 30.0);
    assert!(boss.len() > 4);
    assert!(boss.contains(&(40, 13)));
}

#[test]
fn disc_off_playfield_is_empty() {
    let v = view();
    assert!(v.disc(-100.0, -100.0, 15.0).is_empty());
}

// ── render ────────────────────────────────────────────────────────────────────

fn render_to_string(state: &zombie_defense::entities::Session, now: u64) -> String {
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, &scene(state, now), &hud(state, now), &view()).expect("render");
    String::from_utf8(buf).expect("utf-8 output")
}

#[test]
fn render_shows_hud_and_gauge() {
    let mut s = init_state();
    s.score = 1234;
    s.level = 3;
    s.kill_count = 2;
    s.zombies.push(new_zombie(ZombieKind::Normal, 3, 200.0, 200.0));
    s.zombies.push(new_zombie(ZombieKind::Boss, 10, -90.0, 200.0));
    s.bullets.push(new_bullet(300.0, 300.0, 0.0));

    let out = render_to_string(&s, 0);
    assert!(out.contains("Score:   1234"));
    assert!(out.contains("Level: 3"));
    assert!(out.contains("100%"));
    assert!(out.contains("Rapid Fire: 2/5"));
    assert!(out.contains('@'));
    assert!(out.contains('Z'));
    assert!(!out.contains("Time:"));
    assert!(!out.contains("GAME  OVER"));
}

#[test]
fn render_shows_rapid_fire_timer() {
    let mut s = init_state();
    s.rapid_fire = zombie_defense::entities::RapidFire::Active { until: 7_500 };
    let out = render_to_string(&s, 1_000);
    assert!(out.contains("Time: 6.5s"));
}

#[test]
fn render_shows_end_screens() {
    let mut s = init_state();
    s.score = 700;
    s.status = GameStatus::Defeat;
    let out = render_to_string(&s, 0);
    assert!(out.contains("GAME  OVER"));
    assert!(out.contains("Final Score:    700"));
    assert!(out.contains("R - Play Again"));

    s.status = GameStatus::Victory;
    let out = render_to_string(&s, 0);
    assert!(out.contains("VICTORY!"));
}
