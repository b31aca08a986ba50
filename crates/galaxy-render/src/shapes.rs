//! Outline generators for enemy hulls and the player ship.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use galaxy_core::enums::EnemyTier;
use galaxy_core::types::{Position, Size};

/// Rhombus touching the midpoints of the bounding box.
pub fn diamond(center: Position, size: Size) -> Vec<Position> {
    let (hw, hh) = (size.w / 2.0, size.h / 2.0);
    vec![
        Position::new(center.x, center.y - hh),
        Position::new(center.x + hw, center.y),
        Position::new(center.x, center.y + hh),
        Position::new(center.x - hw, center.y),
    ]
}

/// `sides` vertices on the ellipse inscribed in `size`, starting at `phase`.
pub fn ring(center: Position, size: Size, sides: u32, phase: f32) -> Vec<Position> {
    let step = 2.0 * PI / sides as f32;
    (0..sides)
        .map(|i| {
            let a = step * i as f32 + phase;
            Position::new(center.x + a.cos() * size.w / 2.0, center.y + a.sin() * size.h / 2.0)
        })
        .collect()
}

/// Hull outline for an enemy tier.
pub fn enemy_hull(tier: EnemyTier, center: Position, size: Size) -> Vec<Position> {
    match tier {
        EnemyTier::Scout => diamond(center, size),
        EnemyTier::Striker => ring(center, size, 6, -FRAC_PI_2),
        EnemyTier::Core => ring(center, size, 8, -FRAC_PI_8),
    }
}

/// Arrowhead ship: nose up, swept wings with an indented tail.
pub fn chevron(center: Position, size: Size) -> Vec<Position> {
    let (w, h) = (size.w, size.h);
    let at = |dx: f32, dy: f32| Position::new(center.x + dx, center.y + dy);
    vec![
        at(0.0, -h / 2.0),
        at(w / 2.0, h / 2.0),
        at(w / 4.0, h / 4.0),
        at(0.0, h / 3.0),
        at(-w / 4.0, h / 4.0),
        at(-w / 2.0, h / 2.0),
    ]
}
