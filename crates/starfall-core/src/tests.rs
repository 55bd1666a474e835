#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::{GamePhase, Heading};
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::{Playfield, Rect, SimTime};

    /// Verify all phases round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Idle,
            GamePhase::Running,
            GamePhase::Won,
            GamePhase::Lost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_heading_serde() {
        for v in [Heading::TowardEnemies, Heading::TowardPlayer] {
            let json = serde_json::to_string(&v).unwrap();
            let back: Heading = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_heading_sign() {
        assert_eq!(Heading::TowardEnemies.sign(), 1.0);
        assert_eq!(Heading::TowardPlayer.sign(), -1.0);
    }

    #[test]
    fn test_phase_terminal() {
        assert!(!GamePhase::Idle.is_terminal());
        assert!(!GamePhase::Running.is_terminal());
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::MoveUp,
            PlayerCommand::MoveDown,
            PlayerCommand::Fire,
            PlayerCommand::StartGame,
            PlayerCommand::ResetGame,
            PlayerCommand::Resize {
                width: 1280.0,
                height: 720.0,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired {
                heading: Heading::TowardEnemies,
            },
            GameEvent::EnemyDestroyed { enemy_id: 7 },
            GameEvent::PlayerHit { lives_remaining: 2 },
            GameEvent::GameWon { score: 500 },
            GameEvent::GameLost { score: 300 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameSnapshot serializes and stays small when empty.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// An enemy-sized box and a shot-sized box that overlap on both axes.
    #[test]
    fn test_rect_overlap_hit() {
        let enemy = Rect::new(100.0, 100.0, 60.0, 60.0);
        let shot = Rect::new(150.0, 120.0, 10.0, 5.0);
        assert!(shot.overlaps(&enemy));
    }

    #[test]
    fn test_rect_overlap_symmetric() {
        let a = Rect::new(100.0, 100.0, 60.0, 60.0);
        let b = Rect::new(150.0, 120.0, 10.0, 5.0);
        let c = Rect::new(500.0, 500.0, 10.0, 5.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    /// Rectangles sharing an edge do not count as overlapping.
    #[test]
    fn test_rect_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // b starts exactly where a ends on the x axis.
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Same on the y axis.
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_rect_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_rect_edges_and_midpoints() {
        let r = Rect::new(50.0, 300.0, 95.0, 63.0);
        assert_eq!(r.right(), 145.0);
        assert_eq!(r.bottom(), 363.0);
        assert_eq!(r.right_mid().x, 145.0);
        assert_eq!(r.right_mid().y, 331.5);
        assert_eq!(r.left_mid().x, 50.0);
        assert_eq!(r.left_mid().y, 331.5);
    }

    #[test]
    fn test_playfield_default() {
        let field = Playfield::default();
        assert_eq!(field.width, DEFAULT_FIELD_WIDTH);
        assert_eq!(field.height, DEFAULT_FIELD_HEIGHT);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
