//! Concurrency tests for the session store.

use std::sync::Arc;
use std::sync::Barrier;
use std::thread;
use tictactoe_engine::{Cell, Move, Outcome, Phase, RandomOpponent, SessionStore, lock};

#[test]
fn test_concurrent_events_for_one_user_serialize() {
    let store = SessionStore::new();
    let opponent = Arc::new(RandomOpponent::seeded(3));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    // Every thread tries the center cell at once. Exactly one may place it.
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = store.clone();
            let opponent = Arc::clone(&opponent);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.with_session("shared", |session| {
                    session.process_player_move(Move::new(1, 1).unwrap(), opponent.as_ref())
                })
            })
        })
        .collect();

    let outcomes: Vec<Outcome> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();

    let accepted = outcomes
        .iter()
        .filter(|o| !matches!(o, Outcome::Rejected(_)))
        .count();
    assert_eq!(accepted, 1);

    let session = store.get("shared").unwrap();
    let session = lock(&session);
    assert_eq!(session.board().get(1, 1), Ok(Cell::PlayerMark));
    assert_eq!(session.board().empty_cells().count(), 7);
    assert_eq!(session.phase(), Phase::InProgress);
}

#[test]
fn test_users_progress_independently() {
    let store = SessionStore::new();
    let opponent = Arc::new(RandomOpponent::seeded(11));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            let opponent = Arc::clone(&opponent);
            thread::spawn(move || {
                let id = format!("user-{i}");
                store.with_session(&id, |session| {
                    session.process_player_move(Move::new(0, 0).unwrap(), opponent.as_ref())
                })
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), Ok(Outcome::Continue));
    }
    assert_eq!(store.len(), 16);
}
