///! Tests for leaderboard aggregation and ranking.
///!
///! Ranking is a pure function over participants and completed performances,
///! so no database is needed.
///!
///! Run with: `cargo test --test leaderboard_test`
use uuid::Uuid;

use limelight_backend::rules::leaderboard::{Participant, ScoredPerformance, rank};

fn participant(name: &str) -> Participant {
    Participant {
        application_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        display_name: Some(name.to_string()),
    }
}

#[test]
fn points_are_summed_per_participant() {
    let alice = participant("Alice");
    let bob = participant("Bob");

    let performances = vec![
        ScoredPerformance {
            application_id: alice.application_id,
            points: 10,
        },
        ScoredPerformance {
            application_id: alice.application_id,
            points: 25,
        },
        ScoredPerformance {
            application_id: bob.application_id,
            points: 40,
        },
    ];

    let board = rank(&[alice.clone(), bob.clone()], &performances);

    assert_eq!(board.len(), 2);
    assert_eq!(board[0].application_id, bob.application_id);
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[0].total_points, 40);
    assert_eq!(board[0].stages_completed, 1);

    assert_eq!(board[1].application_id, alice.application_id);
    assert_eq!(board[1].rank, 2);
    assert_eq!(board[1].total_points, 35);
    assert_eq!(board[1].stages_completed, 2);
}

#[test]
fn totals_are_non_increasing_and_ranks_are_sequential() {
    let participants: Vec<Participant> =
        (0..6).map(|i| participant(&format!("P{i}"))).collect();

    let performances: Vec<ScoredPerformance> = participants
        .iter()
        .enumerate()
        .flat_map(|(i, p)| {
            (0..=i).map(move |j| ScoredPerformance {
                application_id: p.application_id,
                points: (j as i32 + 1) * 7,
            })
        })
        .collect();

    let board = rank(&participants, &performances);

    assert_eq!(board.len(), participants.len());
    for window in board.windows(2) {
        assert!(window[0].total_points >= window[1].total_points);
    }
    for (i, entry) in board.iter().enumerate() {
        assert_eq!(entry.rank, (i + 1) as u32);
    }
}

#[test]
fn participants_without_performances_appear_with_zero_points() {
    let scored = participant("Scored");
    let idle = participant("Idle");

    let performances = vec![ScoredPerformance {
        application_id: scored.application_id,
        points: 15,
    }];

    let board = rank(&[scored.clone(), idle.clone()], &performances);

    assert_eq!(board.len(), 2);
    let idle_entry = board
        .iter()
        .find(|e| e.application_id == idle.application_id)
        .unwrap();
    assert_eq!(idle_entry.total_points, 0);
    assert_eq!(idle_entry.stages_completed, 0);
    assert_eq!(idle_entry.rank, 2);
}

#[test]
fn tied_participants_share_adjacent_ranks() {
    // Ties have no product-level ordering, so the test only pins down
    // that both tied entries sit above the lower total.
    let a = participant("A");
    let b = participant("B");
    let c = participant("C");

    let performances = vec![
        ScoredPerformance {
            application_id: a.application_id,
            points: 30,
        },
        ScoredPerformance {
            application_id: b.application_id,
            points: 30,
        },
        ScoredPerformance {
            application_id: c.application_id,
            points: 10,
        },
    ];

    let board = rank(&[a, b, c.clone()], &performances);

    assert_eq!(board[0].total_points, 30);
    assert_eq!(board[1].total_points, 30);
    assert_eq!(board[2].application_id, c.application_id);
    assert_eq!(board[2].rank, 3);
}

#[test]
fn empty_inputs_produce_an_empty_board() {
    assert!(rank(&[], &[]).is_empty());
}

#[test]
fn large_totals_do_not_overflow() {
    let p = participant("Marathon");
    let performances: Vec<ScoredPerformance> = (0..100)
        .map(|_| ScoredPerformance {
            application_id: p.application_id,
            points: i32::MAX,
        })
        .collect();

    let board = rank(&[p], &performances);
    assert_eq!(board[0].total_points, i64::from(i32::MAX) * 100);
}
