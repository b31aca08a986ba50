#[cfg(test)]
mod tests {
    use galaxy_core::enums::*;
    use galaxy_core::state::*;
    use galaxy_core::types::{Position, Rgb, Size, Velocity};

    use crate::canvas::{Color, DisplayList, DrawCommand};
    use crate::projector::{project, ship_blinked_out};
    use crate::shapes;

    fn snapshot(phase: GamePhase, overlay: Overlay) -> GameStateSnapshot {
        GameStateSnapshot {
            phase,
            overlay,
            width: 480.0,
            height: 720.0,
            player: PlayerView {
                position: Position::new(222.0, 660.0),
                size: Size::new(36.0, 28.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn render(s: &GameStateSnapshot) -> DisplayList {
        let mut list = DisplayList::new();
        project(s, &mut list);
        list
    }

    fn enemy(tier: EnemyTier, hp: f32, max_hp: f32) -> EnemyView {
        EnemyView {
            tier,
            position: Position::new(100.0, 100.0),
            size: Size::new(30.0, 26.0),
            hp,
            max_hp,
            diving: false,
        }
    }

    fn polygons(list: &DisplayList) -> Vec<usize> {
        list.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect()
    }

    // ---- Overlays ----

    #[test]
    fn test_idle_splash_over_formation_and_ship() {
        let mut idle = snapshot(GamePhase::Idle, Overlay::Splash);
        idle.enemies = vec![enemy(EnemyTier::Scout, 1.0, 1.0)];
        let list = render(&idle);
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["CYBER GALAXY", "Arcade Defense", "Press START to begin"]);
        assert_eq!(polygons(&list), vec![4, 6], "scout hull then ship chevron");

        let ship = list
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Polygon { points, .. } if points.len() == 6))
            .unwrap();
        let title = list
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { text, .. } if text == "CYBER GALAXY"))
            .unwrap();
        assert!(ship < title, "splash is drawn over the ship");
    }

    #[test]
    fn test_wave_banner() {
        let list = render(&snapshot(GamePhase::Running, Overlay::WaveIncoming { wave: 4 }));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["PORTAL OPENING...", "WAVE 4"]);
    }

    #[test]
    fn test_game_over_summary() {
        let over = Overlay::GameOver {
            score: 1250,
            best_score: 4000,
            wave: 3,
            best_wave: 7,
            accuracy: Some(42),
        };
        let list = render(&snapshot(GamePhase::GameOver, over));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(
            texts,
            vec![
                "PORTAL BREACHED",
                "Score: 1250",
                "Best: 4000",
                "Wave: 3  |  Best Wave: 7",
                "Accuracy: 42%",
                "Press RESTART to try again",
            ]
        );
    }

    #[test]
    fn test_game_over_without_shots_hides_accuracy() {
        let over = Overlay::GameOver {
            score: 0,
            best_score: 0,
            wave: 1,
            best_wave: 1,
            accuracy: None,
        };
        let list = render(&snapshot(GamePhase::GameOver, over));
        assert!(list.texts().all(|t| !t.starts_with("Accuracy")));
    }

    #[test]
    fn test_paint_order() {
        let list = render(&snapshot(GamePhase::Paused, Overlay::Paused));
        assert!(matches!(list.commands.first(), Some(DrawCommand::VerticalGradient { .. })));
        assert!(matches!(list.commands.last(), Some(DrawCommand::Text { text, .. }) if text == "PAUSED"));
    }

    // ---- Playfield ----

    #[test]
    fn test_enemy_hulls_by_tier() {
        let mut s = snapshot(GamePhase::Running, Overlay::None);
        s.enemies = vec![
            enemy(EnemyTier::Scout, 1.0, 1.0),
            enemy(EnemyTier::Striker, 2.0, 2.0),
            enemy(EnemyTier::Core, 3.0, 3.0),
        ];
        let list = render(&s);
        // Three hulls, then the ship chevron.
        assert_eq!(polygons(&list), vec![4, 6, 8, 6]);
    }

    #[test]
    fn test_hp_readout_only_for_multi_hit_enemies() {
        let mut s = snapshot(GamePhase::Running, Overlay::None);
        s.enemies = vec![enemy(EnemyTier::Scout, 1.0, 1.0), enemy(EnemyTier::Striker, 1.5, 2.0)];
        let list = render(&s);
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["2"]);
    }

    #[test]
    fn test_power_up_glyphs() {
        let mut s = snapshot(GamePhase::Running, Overlay::None);
        s.power_ups = PowerUpKind::ALL
            .iter()
            .map(|&kind| PowerUpView {
                kind,
                position: Position::new(50.0, 50.0),
            })
            .collect();
        let glyphs: String = render(&s).texts().collect();
        assert_eq!(glyphs, "WSBLRPQMD");
    }

    #[test]
    fn test_bullets_and_missiles() {
        let mut s = snapshot(GamePhase::Running, Overlay::None);
        s.bullets = vec![
            BulletView {
                kind: BulletKind::Standard,
                position: Position::new(10.0, 10.0),
                velocity: Velocity::new(0.0, -480.0),
                size: Size::new(3.0, 12.0),
            },
            BulletView {
                kind: BulletKind::Enemy,
                position: Position::new(20.0, 20.0),
                velocity: Velocity::new(0.0, 200.0),
                size: Size::new(8.0, 8.0),
            },
        ];
        s.missiles = vec![MissileView {
            position: Position::new(30.0, 30.0),
            velocity: Velocity::new(0.0, -420.0),
        }];
        let list = render(&s);
        let rects = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { rect, .. } if rect.w == 3.0 && rect.h == 12.0))
            .count();
        assert_eq!(rects, 1);
        let trail = list.commands.iter().find_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        });
        let (from, to) = trail.unwrap();
        assert_eq!(to, Position::new(30.0, 30.0));
        assert!((from.y - 40.0).abs() < 1e-3, "trail points away from travel");
    }

    #[test]
    fn test_shield_ring_and_drone() {
        let mut s = snapshot(GamePhase::Running, Overlay::None);
        s.player.shield_active = true;
        s.player.drone = Some(Position::new(200.0, 640.0));
        let list = render(&s);
        let ring = list.commands.iter().find_map(|c| match c {
            DrawCommand::StrokeCircle { radius, .. } => Some(*radius),
            _ => None,
        });
        assert_eq!(ring, Some(36.0 * 0.8));
        assert!(list.commands.iter().any(
            |c| matches!(c, DrawCommand::FillCircle { center, .. } if *center == Position::new(200.0, 640.0))
        ));
    }

    #[test]
    fn test_invulnerable_ship_blinks() {
        assert!(ship_blinked_out(true, 50.0));
        assert!(!ship_blinked_out(true, 150.0));
        assert!(ship_blinked_out(true, 250.0));
        assert!(!ship_blinked_out(false, 50.0));

        let mut s = snapshot(GamePhase::Running, Overlay::None);
        s.player.invulnerable = true;
        s.time.now_ms = 50.0;
        assert!(polygons(&render(&s)).is_empty());
        s.time.now_ms = 150.0;
        assert_eq!(polygons(&render(&s)), vec![6]);
    }

    #[test]
    fn test_portal_rings() {
        let list = render(&snapshot(GamePhase::Running, Overlay::None));
        let radii: Vec<(f32, f32)> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeEllipse { radius_x, radius_y, .. } => Some((*radius_x, *radius_y)),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![(180.0, 25.0), (190.0, 30.0), (200.0, 35.0)]);
    }

    // ---- Primitives ----

    #[test]
    fn test_hsla_conversion() {
        assert_eq!(Color::from_hsla(0.0, 1.0, 0.5, 1.0).rgb, Rgb(255, 0, 0));
        assert_eq!(Color::from_hsla(120.0, 1.0, 0.5, 1.0).rgb, Rgb(0, 255, 0));
        assert_eq!(Color::from_hsla(600.0, 1.0, 0.5, 2.0), Color::from_hsla(240.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn test_hulls_stay_in_bounding_box() {
        let c = Position::new(0.0, 0.0);
        let size = Size::new(38.0, 32.0);
        for tier in EnemyTier::ALL {
            for p in shapes::enemy_hull(tier, c, size) {
                assert!(p.x.abs() <= 19.0 + 1e-4 && p.y.abs() <= 16.0 + 1e-4);
            }
        }
    }

    #[test]
    fn test_display_list_wire_shape() {
        let list = render(&snapshot(GamePhase::Idle, Overlay::Splash));
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["commands"][0]["op"], "VerticalGradient");
        let back: DisplayList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }
}
