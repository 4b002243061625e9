use crate::constants::{BULLET_SPEED, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::entities::Bullet;

pub fn new_bullet(x: f32, y: f32, angle: f32) -> Bullet {
    Bullet {
        x,
        y,
        angle,
        speed: BULLET_SPEED,
    }
}

/// Move one tick along the bullet's angle.  Returns `true` once the bullet
/// has left the playfield and should be dropped.
pub fn advance_bullet(bullet: &mut Bullet) -> bool {
    bullet.x += bullet.angle.cos() * bullet.speed;
    bullet.y += bullet.angle.sin() * bullet.speed;
    out_of_bounds(bullet.x, bullet.y)
}

fn out_of_bounds(x: f32, y: f32) -> bool {
    x < 0.0 || x >= CANVAS_WIDTH || y < 0.0 || y >= CANVAS_HEIGHT
}
