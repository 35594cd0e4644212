//! Property tests for config module
//!
//! Property 4: Serialize/Load Round Trip
//! Property 5: Hash Stability

use proptest::prelude::*;

use crate::config::{FrameRate, Settings, SettingsNode};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn frame_rate_strategy() -> impl Strategy<Value = FrameRate> {
    prop_oneof![
        Just(FrameRate::NtscFull),
        Just(FrameRate::PalFull),
        Just(FrameRate::NtscHalf),
        Just(FrameRate::PalHalf),
        Just(FrameRate::Pc),
        Just(FrameRate::GenesisMasterSystem),
        (1.0..500.0f64).prop_map(FrameRate::Custom),
    ]
}

/// Arbitrary valid settings with a non-empty lookup table
fn settings_strategy() -> impl Strategy<Value = Settings> {
    (
        0..=10_000i32,
        frame_rate_strategy(),
        0..=1_000i32,
        prop::collection::btree_map(-60_000..=3_600_000i32, 0..=1_000_000i32, 1..=25),
    )
        .prop_map(|(points_per_frame, frame_rate, continue_frames, rows)| {
            let mut settings = Settings::new();
            settings.set_points_per_frame(points_per_frame).unwrap();
            settings.set_frame_rate(frame_rate).unwrap();
            settings.set_continue_frames(continue_frames).unwrap();
            settings.lookup_mut().clear();
            for (ms, points) in rows {
                settings.lookup_mut().add(ms, points).unwrap();
            }
            settings
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 4.1: load(serialize(s)) == s
    #[test]
    fn prop_round_trip(settings in settings_strategy()) {
        let restored = Settings::from_node(&settings.to_node());
        prop_assert_eq!(restored, settings);
    }

    /// Property 4.2: the round trip also survives the JSON form
    #[test]
    fn prop_round_trip_json(settings in settings_strategy()) {
        let json = settings.to_node().to_json().unwrap();
        let node = SettingsNode::from_json(&json).unwrap();
        prop_assert_eq!(Settings::from_node(&node), settings);
    }

    /// Property 4.3: loading replaces whatever table was there before
    #[test]
    fn prop_load_replaces_table(source in settings_strategy(), target in settings_strategy()) {
        let mut loaded = target;
        loaded.load(&source.to_node());
        prop_assert_eq!(loaded.lookup(), source.lookup());
    }

    /// Property 5.1: serializing never changes the hash
    #[test]
    fn prop_hash_unaffected_by_serialize(settings in settings_strategy(), times in 1..5usize) {
        let before = settings.hash_code();
        for _ in 0..times {
            let _ = settings.to_node();
        }
        prop_assert_eq!(settings.hash_code(), before);
    }

    /// Property 5.2: equal settings hash equally, including after a round trip
    #[test]
    fn prop_hash_survives_round_trip(settings in settings_strategy()) {
        let restored = Settings::from_node(&settings.to_node());
        prop_assert_eq!(restored.hash_code(), settings.hash_code());
    }
}
