//! Snapshot to display-list projection.
//!
//! Paint order: background, stars, portal, particles, enemies, bullets,
//! missiles, power-ups, ship, overlay. Everything is derived from the
//! snapshot alone, including the blink phase (from `time.now_ms`).

use galaxy_core::constants::*;
use galaxy_core::enums::{EnemyTier, PowerUpKind};
use galaxy_core::state::*;
use galaxy_core::types::{Position, Rect, Rgb, Size};

use crate::canvas::{Canvas, Color, DrawCommand, TextAlign};
use crate::shapes;

const BACKGROUND: [(f32, Rgb); 3] = [
    (0.0, Rgb(0x05, 0x00, 0x0f)),
    (0.5, Rgb(0x0a, 0x00, 0x20)),
    (1.0, Rgb(0x05, 0x00, 0x10)),
];
const PORTAL_Y: f32 = 60.0;
const PORTAL_RINGS: u32 = 3;
const AMBER: Rgb = Rgb(0xf5, 0x9e, 0x0b);
const GREY: Rgb = Rgb(0xaa, 0xaa, 0xaa);
const BLACK: Rgb = Rgb(0, 0, 0);

/// Draw one frame of `snapshot` onto `canvas`.
pub fn project(snapshot: &GameStateSnapshot, canvas: &mut impl Canvas) {
    let now = snapshot.time.now_ms;
    background(snapshot, canvas);
    stars(snapshot, canvas);
    portal(snapshot, canvas);
    particles(&snapshot.particles, canvas);
    for enemy in &snapshot.enemies {
        enemy_hull(enemy, canvas);
    }
    for bullet in &snapshot.bullets {
        bullet_shape(bullet, canvas);
    }
    for missile in &snapshot.missiles {
        missile_shape(missile, canvas);
    }
    for power_up in &snapshot.power_ups {
        capsule(power_up, canvas);
    }
    ship(&snapshot.player, now, canvas);
    overlay(snapshot, canvas);
}

/// Ship is hidden on even 100 ms slots while invulnerable.
pub fn ship_blinked_out(invulnerable: bool, now_ms: f64) -> bool {
    invulnerable && ((now_ms / 100.0).floor() as i64).rem_euclid(2) == 0
}

fn background(s: &GameStateSnapshot, canvas: &mut impl Canvas) {
    canvas.draw(DrawCommand::VerticalGradient {
        rect: Rect::new(0.0, 0.0, s.width, s.height),
        stops: BACKGROUND.to_vec(),
    });
}

fn stars(s: &GameStateSnapshot, canvas: &mut impl Canvas) {
    for star in &s.stars {
        canvas.draw(DrawCommand::FillCircle {
            center: Position::new(star.x, star.y),
            radius: star.radius,
            color: Color::with_alpha(COLOR_WHITE, star.alpha),
            glow: 0.0,
        });
    }
}

fn portal(s: &GameStateSnapshot, canvas: &mut impl Canvas) {
    let angle = s.portal_angle;
    let center = Position::new(s.width / 2.0, PORTAL_Y);
    for i in 0..PORTAL_RINGS {
        let i = i as f32;
        canvas.draw(DrawCommand::StrokeEllipse {
            center,
            radius_x: 180.0 + i * 10.0,
            radius_y: 25.0 + i * 5.0,
            rotation: angle * 0.3,
            color: Color::from_hsla(280.0 + i * 40.0, 1.0, 0.6, 0.3 + (angle * 2.0).sin() * 0.15),
            width: 2.0,
        });
    }
}

fn particles(particles: &[ParticleView], canvas: &mut impl Canvas) {
    for p in particles {
        canvas.draw(DrawCommand::FillCircle {
            center: p.position,
            radius: p.radius * p.life.max(0.0),
            color: Color::with_alpha(p.color, p.life),
            glow: 0.0,
        });
    }
}

fn enemy_hull(enemy: &EnemyView, canvas: &mut impl Canvas) {
    let color = tier_profile(enemy.tier).color;
    let center = Position::new(
        enemy.position.x + enemy.size.w / 2.0,
        enemy.position.y + enemy.size.h / 2.0,
    );
    canvas.draw(DrawCommand::Polygon {
        points: shapes::enemy_hull(enemy.tier, center, enemy.size),
        fill: Color::with_alpha(color, 0.2),
        stroke: Color::opaque(color),
        width: 1.5,
        glow: 8.0,
    });
    if enemy.tier == EnemyTier::Core {
        canvas.draw(DrawCommand::FillCircle {
            center,
            radius: 5.0,
            color: Color::opaque(color),
            glow: 8.0,
        });
    }
    if enemy.max_hp > 1.0 {
        canvas.draw(DrawCommand::Text {
            text: format!("{}", enemy.hp.max(0.0).ceil() as u32),
            at: Position::new(center.x, center.y + 3.0),
            size: 8.0,
            bold: false,
            color: Color::opaque(COLOR_WHITE),
            align: TextAlign::Center,
        });
    }
}

fn bullet_shape(bullet: &BulletView, canvas: &mut impl Canvas) {
    let (rgb, glow) = match bullet.kind {
        BulletKind::Enemy => {
            canvas.draw(DrawCommand::FillCircle {
                center: bullet.position,
                radius: ENEMY_BULLET_RADIUS,
                color: Color::opaque(COLOR_ENEMY_BULLET),
                glow: 5.0,
            });
            return;
        }
        BulletKind::Standard => (COLOR_PLAYER, 6.0),
        BulletKind::Beam => (COLOR_BEAM, 12.0),
        BulletKind::Pulse => (COLOR_PULSE, 6.0),
    };
    canvas.draw(DrawCommand::FillRect {
        rect: centered(bullet.position, bullet.size),
        color: Color::opaque(rgb),
        glow,
    });
}

fn missile_shape(missile: &MissileView, canvas: &mut impl Canvas) {
    let speed = missile.velocity.speed().max(f32::EPSILON);
    let trail = 10.0 / speed;
    let tail = Position::new(
        missile.position.x - missile.velocity.x * trail,
        missile.position.y - missile.velocity.y * trail,
    );
    canvas.draw(DrawCommand::Line {
        from: tail,
        to: missile.position,
        color: Color::with_alpha(COLOR_MISSILE, 0.5),
        width: 2.0,
    });
    canvas.draw(DrawCommand::FillCircle {
        center: missile.position,
        radius: MISSILE_SIZE.w / 2.0,
        color: Color::opaque(COLOR_MISSILE),
        glow: 6.0,
    });
}

fn capsule(power_up: &PowerUpView, canvas: &mut impl Canvas) {
    canvas.draw(DrawCommand::FillCircle {
        center: power_up.position,
        radius: POWER_UP_SIZE / 2.0,
        color: Color::opaque(power_up_color(power_up.kind)),
        glow: 10.0,
    });
    canvas.draw(DrawCommand::Text {
        text: glyph_text(power_up.kind),
        at: power_up.position,
        size: 10.0,
        bold: true,
        color: Color::opaque(BLACK),
        align: TextAlign::Center,
    });
}

fn glyph_text(kind: PowerUpKind) -> String {
    kind.glyph().to_string()
}

fn ship(player: &PlayerView, now: f64, canvas: &mut impl Canvas) {
    let center = Position::new(
        player.position.x + player.size.w / 2.0,
        player.position.y + player.size.h / 2.0,
    );

    if !ship_blinked_out(player.invulnerable, now) {
        canvas.draw(DrawCommand::Polygon {
            points: shapes::chevron(center, player.size),
            fill: Color::with_alpha(COLOR_PLAYER, 0.15),
            stroke: Color::opaque(COLOR_PLAYER),
            width: 2.0,
            glow: 12.0,
        });
        let flicker = (now * 0.01).sin() as f32 * 2.0;
        canvas.draw(DrawCommand::FillEllipse {
            center: Position::new(center.x, center.y + player.size.h / 3.0 + 4.0),
            radius_x: 4.0,
            radius_y: 6.0 + flicker,
            color: Color::opaque(COLOR_ENGINE),
            glow: 8.0,
        });
    }

    if player.shield_active {
        canvas.draw(DrawCommand::StrokeCircle {
            center,
            radius: player.size.w * 0.8,
            color: Color::with_alpha(COLOR_SHIELD, 0.5),
            width: 2.0,
            glow: 15.0,
        });
    }

    if let Some(drone) = player.drone {
        canvas.draw(DrawCommand::FillCircle {
            center: drone,
            radius: 5.0,
            color: Color::opaque(COLOR_DRONE),
            glow: 8.0,
        });
    }
}

fn overlay(s: &GameStateSnapshot, canvas: &mut impl Canvas) {
    let mid = |dy: f32| Position::new(s.width / 2.0, s.height / 2.0 + dy);
    match s.overlay {
        Overlay::None => {}
        Overlay::WaveIncoming { wave } => {
            dim(s, 0.6, canvas);
            banner("PORTAL OPENING...", mid(-15.0), 14.0, true, COLOR_ENGINE, canvas);
            banner(&format!("WAVE {wave}"), mid(20.0), 28.0, true, COLOR_PLAYER, canvas);
        }
        Overlay::Paused => {
            dim(s, 0.5, canvas);
            banner("PAUSED", mid(0.0), 22.0, true, COLOR_PLAYER, canvas);
        }
        Overlay::GameOver {
            score,
            best_score,
            wave,
            best_wave,
            accuracy,
        } => {
            dim(s, 0.75, canvas);
            banner("PORTAL BREACHED", mid(-60.0), 26.0, true, COLOR_DAMAGE, canvas);
            banner(&format!("Score: {score}"), mid(-20.0), 16.0, false, COLOR_WHITE, canvas);
            banner(&format!("Best: {best_score}"), mid(10.0), 16.0, false, AMBER, canvas);
            let waves = format!("Wave: {wave}  |  Best Wave: {best_wave}");
            banner(&waves, mid(40.0), 16.0, false, COLOR_ENGINE, canvas);
            if let Some(acc) = accuracy {
                banner(&format!("Accuracy: {acc}%"), mid(65.0), 12.0, false, COLOR_PLAYER, canvas);
            }
            banner("Press RESTART to try again", mid(95.0), 14.0, false, GREY, canvas);
        }
        Overlay::Splash => {
            dim(s, 0.5, canvas);
            banner("CYBER GALAXY", mid(-20.0), 22.0, true, COLOR_PLAYER, canvas);
            banner("Arcade Defense", mid(10.0), 14.0, false, COLOR_ENGINE, canvas);
            banner("Press START to begin", mid(40.0), 12.0, false, GREY, canvas);
        }
    }
}

fn dim(s: &GameStateSnapshot, alpha: f32, canvas: &mut impl Canvas) {
    canvas.draw(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, s.width, s.height),
        color: Color::with_alpha(BLACK, alpha),
        glow: 0.0,
    });
}

fn banner(line: &str, at: Position, size: f32, bold: bool, rgb: Rgb, canvas: &mut impl Canvas) {
    canvas.draw(DrawCommand::Text {
        text: line.to_string(),
        at,
        size,
        bold,
        color: Color::opaque(rgb),
        align: TextAlign::Center,
    });
}

fn centered(center: Position, size: Size) -> Rect {
    Rect::new(center.x - size.w / 2.0, center.y - size.h / 2.0, size.w, size.h)
}
