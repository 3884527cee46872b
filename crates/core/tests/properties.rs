use lifesim_core::mapgen::generate;
use lifesim_core::road::build_board;
use lifesim_core::settings::RoadSettings;
use lifesim_core::{GridPos, Tile};
use proptest::prelude::*;

proptest! {
    #[test]
    fn origin_tile_is_always_clear(
        seed in any::<u64>(),
        width in 1usize..40,
        height in 1usize..40,
        chance in 0.0f64..=1.0,
    ) {
        let map = generate(width, height, chance, seed).expect("non-zero dimensions");
        prop_assert_eq!(map.tile(GridPos::ORIGIN), Some(Tile::Grass));
        prop_assert_eq!(map.codes().len(), height);
        prop_assert!(map.codes().iter().all(|row| row.len() == width));
    }

    #[test]
    fn progress_never_decreases_or_leaves_the_line(seed in any::<u64>(), frames in 1usize..600) {
        let mut board = build_board(&RoadSettings::default(), seed);
        let mut last: Vec<f32> = board.characters().map(|c| c.progress).collect();
        for _ in 0..frames {
            board.step();
            let now: Vec<f32> = board.characters().map(|c| c.progress).collect();
            for (before, after) in last.iter().zip(&now) {
                prop_assert!(after >= before);
                prop_assert!((0.0..=100.0).contains(after));
            }
            last = now;
        }
    }

    #[test]
    fn targets_are_never_behind_or_completed(seed in any::<u64>(), frames in 1usize..400) {
        let mut board = build_board(&RoadSettings::default(), seed);
        for _ in 0..frames {
            board.step();
            for character in board.characters() {
                if let Some(target) = character.target.and_then(|id| board.task(id)) {
                    prop_assert!(!target.completed);
                    prop_assert!(target.position >= character.progress);
                }
            }
        }
    }
}
