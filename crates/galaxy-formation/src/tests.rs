#[cfg(test)]
mod tests {
    use galaxy_core::constants::*;
    use galaxy_core::enums::EnemyTier;
    use galaxy_core::tuning::Tuning;
    use galaxy_core::types::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::dive::*;
    use crate::layout::*;
    use crate::motion::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_wave_one_is_all_scouts() {
        let wave = spawn_wave(1, PLAYFIELD_WIDTH, &mut rng());
        assert_eq!(wave.len(), 5 * 8);
        assert!(wave.iter().all(|e| e.tier == EnemyTier::Scout && e.hp == 1));
    }

    #[test]
    fn test_rows_grow_and_cap() {
        assert_eq!(rows_for_wave(1), 5);
        assert_eq!(rows_for_wave(3), 6);
        assert_eq!(rows_for_wave(6), 7);
        assert_eq!(rows_for_wave(30), 7);
    }

    #[test]
    fn test_every_third_wave_top_row_is_core() {
        let wave = spawn_wave(3, PLAYFIELD_WIDTH, &mut rng());
        let top: Vec<_> = wave.iter().take(FORMATION_COLS as usize).collect();
        assert!(top.iter().all(|e| e.tier == EnemyTier::Core));
        assert!(wave
            .iter()
            .skip(2 * FORMATION_COLS as usize)
            .all(|e| e.tier == EnemyTier::Scout));
    }

    #[test]
    fn test_tier_for_slot_rules() {
        assert_eq!(tier_for_slot(1, 0, 0.0), EnemyTier::Scout);
        assert_eq!(tier_for_slot(2, 1, 0.0), EnemyTier::Striker);
        assert_eq!(tier_for_slot(2, 1, 0.99), EnemyTier::Scout);
        assert_eq!(tier_for_slot(2, 2, 0.0), EnemyTier::Scout);
        assert_eq!(tier_for_slot(6, 0, 0.99), EnemyTier::Core);
        assert_eq!(tier_for_slot(6, 1, 0.0), EnemyTier::Striker);
    }

    #[test]
    fn test_hp_bonus_per_three_waves_cleared() {
        assert_eq!(hp_bonus(1), 0);
        assert_eq!(hp_bonus(3), 0);
        assert_eq!(hp_bonus(4), 1);
        assert_eq!(hp_bonus(7), 2);
        let wave = spawn_wave(4, PLAYFIELD_WIDTH, &mut rng());
        for e in &wave {
            assert_eq!(e.hp, tier_profile(e.tier).base_hp + 1);
        }
    }

    #[test]
    fn test_grid_is_centered() {
        let wave = spawn_wave(1, PLAYFIELD_WIDTH, &mut rng());
        let first = wave.first().unwrap().home;
        let last_in_row = wave[FORMATION_COLS as usize - 1].home;
        assert!((first.x + last_in_row.x - PLAYFIELD_WIDTH).abs() < 1e-3);
        assert_eq!(first.y, FORMATION_TOP);
        assert_eq!(wave[FORMATION_COLS as usize].home.y, FORMATION_TOP + FORMATION_GAP_Y);
    }

    #[test]
    fn test_formation_position_stays_near_home() {
        let home = Position::new(100.0, 120.0);
        for i in 0..200 {
            let now = i as f64 * 97.0;
            let p = formation_position(home, 1.3, now);
            assert!((p.x - home.x).abs() <= SWAY_AMPLITUDE + WOBBLE_X_AMPLITUDE + 1e-3);
            assert!((p.y - home.y).abs() <= WOBBLE_Y_AMPLITUDE + 1e-3);
        }
    }

    #[test]
    fn test_dive_curve_then_straight() {
        let start = Position::new(200.0, 100.0);
        let p0 = dive_curve_position(start, 0.0, 1.0, 720.0).unwrap();
        assert_eq!(p0, start);
        let p1 = dive_curve_position(start, 1.0, -1.0, 720.0).unwrap();
        assert!((p1.y - (100.0 + 360.0)).abs() < 1e-3);
        assert!(p1.x < start.x);
        assert!(dive_curve_position(start, DIVE_CURVE_SECS, 1.0, 720.0).is_none());
    }

    #[test]
    fn test_curve_direction_converges_to_center() {
        assert_eq!(curve_direction(50.0, 480.0), 1.0);
        assert_eq!(curve_direction(400.0, 480.0), -1.0);
    }

    #[test]
    fn test_can_launch_requires_no_divers() {
        assert!(can_launch(0.0, 0));
        assert!(!can_launch(0.0, 1));
        assert!(!can_launch(10.0, 0));
    }

    fn candidates(xs: &[f32]) -> Vec<DiveCandidate<usize>> {
        xs.iter()
            .enumerate()
            .map(|(id, &x)| DiveCandidate {
                id,
                home_center_x: x,
                eligible: true,
            })
            .collect()
    }

    #[test]
    fn test_select_divers_alternates_sides() {
        let c = candidates(&[10.0, 20.0, 30.0, 300.0, 400.0]);
        let picked = select_divers(&c, 2, 240.0, &mut rng());
        assert_eq!(picked.len(), 2);
        assert!(picked[0] <= 2, "first pick comes from the left half");
        assert!(picked[1] >= 3, "second pick comes from the right half");
    }

    #[test]
    fn test_select_divers_one_side_empty() {
        let c = candidates(&[300.0, 320.0, 340.0]);
        let picked = select_divers(&c, 2, 240.0, &mut rng());
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn test_select_divers_skips_ineligible() {
        let mut c = candidates(&[10.0, 300.0]);
        c[0].eligible = false;
        let picked = select_divers(&c, 3, 240.0, &mut rng());
        assert_eq!(picked, vec![1]);
    }

    #[test]
    fn test_dive_plan_bounds() {
        let tuning = Tuning::default();
        let mut r = rng();
        for _ in 0..100 {
            let plan = plan_dive(&tuning, &mut r);
            assert!((2..=3).contains(&plan.shots_allotted));
            assert!(plan.first_shot_ms >= DIVE_FIRST_SHOT_MS);
            assert!(plan.first_shot_ms < DIVE_FIRST_SHOT_MS + DIVE_SHOT_JITTER_MS);
            let cd = reform_cooldown(&tuning, &mut r);
            assert!((REFORM_MIN_MS..REFORM_MAX_MS).contains(&cd));
        }
    }
}
