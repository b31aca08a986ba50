#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::commands::PlayerCommand;
    use crate::components::{Player, PowerLabel, TimedBuffs};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{accuracy_percent, GameEvent, RunSummary};
    use crate::records::{LeaderboardEntry, Records};
    use crate::state::{GameStateSnapshot, Overlay};
    use crate::tuning::Tuning;
    use crate::types::{Position, Rect, Rgb, Size, Velocity};
    use crate::weighted::WeightedTable;

    #[test]
    fn test_player_command_wire_shape() {
        let cmd = PlayerCommand::KeyDown { key: Key::Left };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"Left"}"#);

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetIdentity","wallet":"abc"}"#).unwrap();
        assert_eq!(
            parsed,
            PlayerCommand::SetIdentity {
                wallet: Some("abc".into())
            }
        );
    }

    #[test]
    fn test_game_event_tagged() {
        let json = serde_json::to_string(&GameEvent::WaveComplete { wave: 4 }).unwrap();
        assert!(json.contains(r#""type":"WaveComplete""#));
        assert!(json.contains(r#""wave":4"#));
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = GameStateSnapshot {
            overlay: Overlay::WaveIncoming { wave: 2 },
            ..Default::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.overlay, Overlay::WaveIncoming { wave: 2 });
        assert_eq!(back.phase, GamePhase::Idle);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("a"), Some(Key::Left));
        assert_eq!(Key::from_name("D"), Some(Key::Right));
        assert_eq!(Key::from_name(" "), Some(Key::Fire));
        assert_eq!(Key::from_name("Space"), Some(Key::Fire));
        assert_eq!(Key::from_name("Enter"), None);
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(9.0, 9.0, 5.0, 5.0)));
        // Touching edges do not count.
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_padded() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).padded(5.0, 8.0);
        assert_eq!(r, Rect::new(5.0, 12.0, 40.0, 48.0));
    }

    #[test]
    fn test_position_advance_and_distance() {
        let mut p = Position::new(0.0, 0.0);
        p.advance(&Velocity::new(30.0, 40.0), 0.5);
        assert_eq!(p, Position::new(15.0, 20.0));
        assert!((p.distance_to(&Position::new(0.0, 0.0)) - 25.0).abs() < 1e-4);
        assert!((Velocity::new(3.0, 4.0).speed() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::from_hex("#00ffcc"), Some(COLOR_SCOUT));
        assert_eq!(COLOR_CORE.to_hex(), "#ff3d7f");
        assert_eq!(Rgb::from_hex("00ffcc"), None);
        assert_eq!(Rgb::from_hex("#fff"), None);
    }

    #[test]
    fn test_tier_profiles() {
        let scout = tier_profile(EnemyTier::Scout);
        assert_eq!((scout.base_hp, scout.score), (1, 50));
        assert_eq!(scout.size, Size::new(26.0, 22.0));
        let striker = tier_profile(EnemyTier::Striker);
        assert_eq!((striker.base_hp, striker.score), (2, 150));
        let core = tier_profile(EnemyTier::Core);
        assert_eq!((core.base_hp, core.score), (3, 500));
    }

    #[test]
    fn test_timed_buffs_expire_independently() {
        let mut buffs = TimedBuffs::default();
        buffs.grant(Buff::RapidFire, 1_000.0);
        buffs.grant(Buff::MissileSwarm, 5_000.0);

        assert!(buffs.is_active(Buff::RapidFire, 1_000.0));
        assert!(buffs.expire(1_000.0).is_empty());

        let lapsed = buffs.expire(1_001.0);
        assert_eq!(lapsed, vec![Buff::RapidFire]);
        assert!(!buffs.is_active(Buff::RapidFire, 1_001.0));
        assert!(buffs.is_active(Buff::MissileSwarm, 1_001.0));
        assert_eq!(buffs.active().collect::<Vec<_>>(), vec![Buff::MissileSwarm]);

        buffs.clear(Buff::MissileSwarm);
        assert_eq!(buffs.active().count(), 0);
    }

    #[test]
    fn test_power_label_visibility() {
        let timed = PowerLabel {
            kind: PowerUpKind::Bomb,
            until_ms: Some(500.0),
        };
        assert!(timed.is_visible(499.0));
        assert!(!timed.is_visible(500.0));
        let sticky = PowerLabel {
            kind: PowerUpKind::Shield,
            until_ms: None,
        };
        assert!(sticky.is_visible(1e12));
    }

    #[test]
    fn test_player_spawn_position() {
        let p = Player::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, PLAYER_START_LIVES);
        assert_eq!(p.pos.x, 240.0 - 18.0);
        assert_eq!(p.pos.y, 720.0 - 60.0);
        assert_eq!(p.weapon_level, 1);
        assert_eq!(p.lives, 3);
        assert!(!p.shield_active);
        assert!(!p.is_invulnerable());
    }

    #[test]
    fn test_drone_orbit_position() {
        let mut p = Player::new(480.0, 720.0, 3);
        p.drone_angle = 0.0;
        let c = p.center();
        let d = p.drone_position(40.0);
        assert!((d.x - (c.x + 40.0)).abs() < 1e-4);
        assert!((d.y - c.y).abs() < 1e-4);
    }

    #[test]
    fn test_records_best_and_leaderboard() {
        let mut records = Records::default();
        assert!(records.update_best(500, 2));
        assert!(!records.update_best(400, 5));
        assert_eq!(records.best_score, 500);
        assert_eq!(records.best_wave, 5);

        for i in 0..12u64 {
            records.push_entry(LeaderboardEntry {
                score: i * 100,
                wave: 1,
                timestamp: i,
            });
        }
        assert_eq!(records.leaderboard.len(), LEADERBOARD_SIZE);
        assert_eq!(records.leaderboard[0].score, 1100);
        assert_eq!(records.leaderboard[9].score, 200);
        assert!(records
            .leaderboard
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_leaderboard_ties_keep_insertion_order() {
        let mut records = Records::default();
        records.push_entry(LeaderboardEntry { score: 100, wave: 1, timestamp: 1 });
        records.push_entry(LeaderboardEntry { score: 100, wave: 2, timestamp: 2 });
        assert_eq!(records.leaderboard[0].timestamp, 1);
        assert_eq!(records.leaderboard[1].timestamp, 2);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(3, 2), 67);
        let summary = RunSummary {
            score: 0,
            wave: 1,
            shots_fired: 8,
            shots_hit: 8,
            new_best: false,
        };
        assert_eq!(summary.accuracy(), 100);
    }

    #[test]
    fn test_weighted_table_pick_at() {
        let table = WeightedTable::new([('a', 1.0), ('b', 0.0), ('c', 3.0)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_weight(), 4.0);
        assert_eq!(table.pick_at(0.5), Some('a'));
        assert_eq!(table.pick_at(1.0), Some('c'));
        assert_eq!(table.pick_at(3.999), Some('c'));
        assert_eq!(table.pick_at(10.0), Some('c'));
        assert_eq!(table.probability('b'), 0.0);
        assert!((table.probability('c') - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_table_empty() {
        let table: WeightedTable<u8> = WeightedTable::new([(1, 0.0), (2, f64::NAN)]);
        assert!(table.is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(table.pick(&mut rng), None);
    }

    #[test]
    fn test_weighted_table_distribution() {
        let table = WeightedTable::new(POWER_UP_WEIGHTS);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 20_000;
        let mut shields = 0;
        for _ in 0..n {
            if table.pick(&mut rng) == Some(PowerUpKind::Shield) {
                shields += 1;
            }
        }
        let observed = shields as f64 / n as f64;
        let expected = table.probability(PowerUpKind::Shield);
        assert!((observed - expected).abs() < 0.02, "observed {observed}");
    }

    #[test]
    fn test_tuning_defaults_match_arcade_values() {
        let t = Tuning::default();
        assert_eq!(t.max_player_bullets, 5);
        assert_eq!(t.shield_hits, 1);
        assert_eq!(t.start_lives, 3);
    }

    #[test]
    fn test_tuning_partial_override() {
        let tuning = Tuning::from_json(r#"{"max_divers": 5, "shield_hits": 2}"#).unwrap();
        assert_eq!(tuning.max_divers, 5);
        assert_eq!(tuning.shield_hits, 2);
        assert_eq!(tuning.width, PLAYFIELD_WIDTH);
        assert_eq!(tuning.power_up_weights.len(), 9);
    }

    #[test]
    fn test_tuning_wave_scaling() {
        let t = Tuning::default();
        assert_eq!(t.dive_interval_ms(1), 2850.0);
        assert_eq!(t.dive_interval_ms(100), DIVE_INTERVAL_MIN_MS);
        assert_eq!(t.divers_for_wave(1), 1);
        assert_eq!(t.divers_for_wave(2), 2);
        assert_eq!(t.divers_for_wave(40), MAX_DIVERS);
        assert_eq!(t.enemy_bullet_speed(1), 189.0);
        assert_eq!(t.enemy_bullet_speed(100), ENEMY_BULLET_MAX_SPEED);
        assert!((t.enemy_fire_chance(100) - ENEMY_FIRE_CHANCE_MAX).abs() < 1e-12);
        assert!((t.shot_cooldown_ms(true) - 200.0 / 3.0).abs() < 1e-3);
        assert_eq!(t.shot_cooldown_ms(false), 200.0);
        assert_eq!(t.buff_duration_ms(Buff::Overcharge), 20_000.0);
    }

    #[test]
    fn test_power_up_buffs() {
        assert_eq!(PowerUpKind::Overcharge.buff(), Some(Buff::Overcharge));
        assert_eq!(PowerUpKind::Bomb.buff(), None);
        assert_eq!(PowerUpKind::ALL.iter().filter(|k| k.buff().is_some()).count(), 6);
        assert_eq!(PowerUpKind::ExtraLife.label(), "+1 LIFE");
    }
}
