///! Unit-style tests for the stage sequencing rules.
///!
///! The rules are pure functions over stage snapshots, so no database or
///! running server is needed.
///!
///! Run with: `cargo test --test stage_rules_test`
use chrono::NaiveDate;
use uuid::Uuid;

use limelight_backend::models::stages::StageStatus;
use limelight_backend::rules::stage::{
    StageCandidate, StageRuleError, StageSnapshot, validate_stage, validate_stage_deletion,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn snapshot(
    order: i32,
    start: NaiveDate,
    end: NaiveDate,
    status: StageStatus,
    is_final: bool,
) -> StageSnapshot {
    StageSnapshot {
        id: Uuid::new_v4(),
        name: format!("Stage {order}"),
        stage_order: order,
        start_date: start,
        end_date: end,
        status,
        is_final,
    }
}

fn candidate(order: i32, start: NaiveDate, end: NaiveDate) -> StageCandidate {
    StageCandidate {
        stage_order: order,
        start_date: start,
        end_date: end,
        is_final: false,
        max_winners: None,
    }
}

#[test]
fn first_stage_of_a_season_is_accepted() {
    let result = validate_stage(&[], &candidate(1, date(2024, 1, 1), date(2024, 1, 10)), None);
    assert!(result.is_ok());
}

#[test]
fn end_date_must_be_strictly_after_start_date() {
    let same_day = candidate(1, date(2024, 1, 5), date(2024, 1, 5));
    assert_eq!(
        validate_stage(&[], &same_day, None),
        Err(StageRuleError::EndBeforeStart)
    );

    let reversed = candidate(1, date(2024, 1, 10), date(2024, 1, 5));
    assert_eq!(
        validate_stage(&[], &reversed, None),
        Err(StageRuleError::EndBeforeStart)
    );
}

#[test]
fn duplicate_order_is_rejected() {
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    )];
    let err = validate_stage(
        &existing,
        &candidate(1, date(2024, 2, 1), date(2024, 2, 10)),
        None,
    )
    .unwrap_err();

    assert_eq!(err, StageRuleError::DuplicateOrder(1));
    assert_eq!(err.to_string(), "Stage 1 already exists for this season");
}

#[test]
fn stage_two_requires_stage_one_to_exist() {
    let err = validate_stage(&[], &candidate(2, date(2024, 2, 1), date(2024, 2, 10)), None)
        .unwrap_err();

    assert_eq!(err, StageRuleError::PreviousStageMissing(1));
    assert_eq!(err.to_string(), "Stage 1 must be created first");
}

#[test]
fn stage_two_requires_stage_one_to_be_completed() {
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Ongoing,
        false,
    )];
    let err = validate_stage(
        &existing,
        &candidate(2, date(2024, 2, 1), date(2024, 2, 10)),
        None,
    )
    .unwrap_err();

    assert_eq!(err, StageRuleError::PreviousStageNotCompleted(1));
    assert_eq!(
        err.to_string(),
        "Stage 1 must be completed before creating this stage"
    );
}

#[test]
fn stage_two_must_start_after_stage_one_ends() {
    // Stage 1 runs Jan 1-10 and is completed; a stage 2 starting Jan 5
    // lands inside that window and is rejected with the formatted date.
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    )];
    let err = validate_stage(
        &existing,
        &candidate(2, date(2024, 1, 5), date(2024, 1, 20)),
        None,
    )
    .unwrap_err();

    assert_eq!(
        err,
        StageRuleError::StartsBeforePreviousEnd(date(2024, 1, 10))
    );
    assert_eq!(err.to_string(), "Stage must start after 1/10/2024");
}

#[test]
fn starting_on_the_previous_end_date_is_rejected() {
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    )];
    // Same-day handoff is still too early; the boundary is strict.
    let result = validate_stage(
        &existing,
        &candidate(2, date(2024, 1, 10), date(2024, 1, 20)),
        None,
    );
    assert_eq!(
        result,
        Err(StageRuleError::StartsBeforePreviousEnd(date(2024, 1, 10)))
    );
}

#[test]
fn valid_second_stage_is_accepted() {
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    )];
    let result = validate_stage(
        &existing,
        &candidate(2, date(2024, 1, 11), date(2024, 1, 20)),
        None,
    );
    assert!(result.is_ok());
}

#[test]
fn overlap_with_a_non_adjacent_stage_is_rejected() {
    // Stage 1 is done and stage 3's window is already booked. A stage 2
    // that clears stage 1 but runs into stage 3 trips the overlap check,
    // which names the clashing stage. Ranges are inclusive, so even the
    // shared boundary day counts.
    let existing = vec![
        snapshot(
            1,
            date(2024, 1, 1),
            date(2024, 1, 10),
            StageStatus::Completed,
            false,
        ),
        snapshot(
            3,
            date(2024, 1, 20),
            date(2024, 1, 30),
            StageStatus::Upcoming,
            false,
        ),
    ];

    let overlapping = candidate(2, date(2024, 1, 11), date(2024, 1, 25));
    let err = validate_stage(&existing, &overlapping, None).unwrap_err();
    assert_eq!(err, StageRuleError::DateOverlap("Stage 3".to_string()));
    assert_eq!(err.to_string(), "Stage dates overlap with \"Stage 3\"");

    let boundary = candidate(2, date(2024, 1, 11), date(2024, 1, 20));
    assert_eq!(
        validate_stage(&existing, &boundary, None),
        Err(StageRuleError::DateOverlap("Stage 3".to_string()))
    );

    let clear = candidate(2, date(2024, 1, 11), date(2024, 1, 19));
    assert!(validate_stage(&existing, &clear, None).is_ok());
}

#[test]
fn final_stage_must_allow_exactly_one_winner() {
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    )];
    let finale = StageCandidate {
        stage_order: 2,
        start_date: date(2024, 1, 11),
        end_date: date(2024, 1, 20),
        is_final: true,
        max_winners: Some(3),
    };
    assert_eq!(
        validate_stage(&existing, &finale, None),
        Err(StageRuleError::FinalStageWinnerCount)
    );

    let finale_none = StageCandidate {
        max_winners: None,
        ..finale.clone()
    };
    assert_eq!(
        validate_stage(&existing, &finale_none, None),
        Err(StageRuleError::FinalStageWinnerCount)
    );

    let finale_ok = StageCandidate {
        max_winners: Some(1),
        ..finale
    };
    assert!(validate_stage(&existing, &finale_ok, None).is_ok());
}

#[test]
fn a_season_can_only_have_one_final_stage() {
    let existing = vec![
        snapshot(
            1,
            date(2024, 1, 1),
            date(2024, 1, 10),
            StageStatus::Completed,
            false,
        ),
        snapshot(
            2,
            date(2024, 1, 11),
            date(2024, 1, 20),
            StageStatus::Completed,
            true,
        ),
    ];
    let second_finale = StageCandidate {
        stage_order: 3,
        start_date: date(2024, 1, 21),
        end_date: date(2024, 1, 30),
        is_final: true,
        max_winners: Some(1),
    };
    let err = validate_stage(&existing, &second_finale, None).unwrap_err();

    assert_eq!(err, StageRuleError::DuplicateFinalStage);
    assert_eq!(err.to_string(), "This season already has a final stage");
}

#[test]
fn editing_a_stage_does_not_collide_with_itself() {
    let stage = snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Ongoing,
        false,
    );
    let stage_id = stage.id;
    let existing = vec![stage];

    // Same order and an overlapping window, but it is the stage being
    // edited, so neither check fires.
    let edited = candidate(1, date(2024, 1, 1), date(2024, 1, 12));
    assert!(validate_stage(&existing, &edited, Some(stage_id)).is_ok());

    // Without the exclusion the same candidate is a duplicate.
    assert_eq!(
        validate_stage(&existing, &edited, None),
        Err(StageRuleError::DuplicateOrder(1))
    );
}

#[test]
fn only_the_last_stage_can_be_deleted() {
    let first = snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    );
    let second = snapshot(
        2,
        date(2024, 1, 11),
        date(2024, 1, 20),
        StageStatus::Upcoming,
        false,
    );
    let existing = vec![first.clone(), second.clone()];

    let err = validate_stage_deletion(&existing, first.id).unwrap_err();
    assert_eq!(err, StageRuleError::NotLastStage);
    assert_eq!(
        err.to_string(),
        "Only the last stage in a season can be deleted"
    );

    assert!(validate_stage_deletion(&existing, second.id).is_ok());
}

#[test]
fn deleting_an_unknown_stage_passes_validation() {
    // The handler turns a missing stage into a 404; the rule has nothing
    // to say about it.
    let existing = vec![snapshot(
        1,
        date(2024, 1, 1),
        date(2024, 1, 10),
        StageStatus::Completed,
        false,
    )];
    assert!(validate_stage_deletion(&existing, Uuid::new_v4()).is_ok());
}
