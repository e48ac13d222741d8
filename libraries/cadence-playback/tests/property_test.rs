//! Property-based tests for the playback session
//!
//! Uses proptest to verify traversal invariants across many random inputs.

use cadence_core::{Playlist, PlaylistId, Track};
use cadence_playback::shuffle::is_permutation;
use cadence_playback::{Direction, MediaCommand, Session};
use proptest::prelude::*;
use std::sync::Arc;

// ===== Helpers =====

fn playlist(len: usize) -> Arc<Playlist> {
    let tracks = (0..len)
        .map(|i| Track::new(format!("Song {}", i), format!("song-{}.mp3", i)))
        .collect();
    Arc::new(Playlist::new(PlaylistId::new("all"), "All Music", tracks))
}

fn loaded_index(cmd: MediaCommand) -> usize {
    match cmd {
        MediaCommand::Load(request) => request.index,
        other => panic!("expected load, got {:?}", other),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: shuffle order is a permutation after every regeneration
    #[test]
    fn shuffle_order_always_permutation(
        seed in any::<u64>(),
        lens in prop::collection::vec(1usize..60, 1..8)
    ) {
        let mut session = Session::with_seed(seed);

        for len in lens {
            session.select_playlist(playlist(len));
            prop_assert!(is_permutation(session.shuffle_order(), len));

            session.set_shuffle(false);
            session.set_shuffle(true);
            prop_assert!(is_permutation(session.shuffle_order(), len));
        }
    }

    /// Property: next then previous returns to the starting track
    #[test]
    fn shuffled_next_previous_round_trip(
        seed in any::<u64>(),
        len in 1usize..40,
        start in any::<prop::sample::Index>(),
        shuffle in any::<bool>()
    ) {
        let mut session = Session::with_seed(seed);
        session.select_playlist(playlist(len));
        session.set_shuffle(shuffle);

        let start = start.index(len);
        session.play(Some(start)).unwrap();

        session.advance(Direction::Next);
        let back = loaded_index(session.advance(Direction::Previous));
        prop_assert_eq!(back, start);

        session.advance(Direction::Previous);
        let forward = loaded_index(session.advance(Direction::Next));
        prop_assert_eq!(forward, start);
    }

    /// Property: walking forward len times visits every track once
    #[test]
    fn full_cycle_visits_every_track(
        seed in any::<u64>(),
        len in 1usize..40,
        shuffle in any::<bool>()
    ) {
        let mut session = Session::with_seed(seed);
        session.select_playlist(playlist(len));
        session.set_shuffle(shuffle);
        session.play(Some(0)).unwrap();

        let mut visited = vec![0usize];
        for _ in 1..len {
            visited.push(loaded_index(session.advance(Direction::Next)));
        }
        prop_assert!(is_permutation(&visited, len));

        // One more step closes the cycle
        prop_assert_eq!(loaded_index(session.advance(Direction::Next)), 0);
    }

    /// Property: the current index always stays inside the playlist
    #[test]
    fn index_stays_in_range(
        seed in any::<u64>(),
        len in 0usize..20,
        ops in prop::collection::vec(0u8..7, 1..60)
    ) {
        let mut session = Session::with_seed(seed);
        session.select_playlist(playlist(len));

        for op in ops {
            match op {
                0 => { session.advance(Direction::Next); }
                1 => { session.advance(Direction::Previous); }
                2 => { session.toggle(); }
                3 => { let on = session.is_shuffling(); session.set_shuffle(!on); }
                4 => { session.track_ended(); }
                5 => { let _ = session.play(Some(len / 2)); }
                _ => {
                    if let Some(ticket) = session.state().ticket() {
                        session.resolve_play(ticket, Ok(()));
                    }
                }
            }

            match session.current_index() {
                Some(index) => prop_assert!(index < len),
                None => prop_assert_eq!(len, 0),
            }
            prop_assert!(is_permutation(session.shuffle_order(), len));
        }
    }
}
