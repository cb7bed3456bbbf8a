//! Integration tests for the draw store and analytics engine

use chrono::NaiveDate;
use loto90::{BallFrequency, Category, DrawDatabase, NewDraw};

fn create_test_db() -> DrawDatabase {
    DrawDatabase::new_in_memory().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn insert(db: &mut DrawDatabase, category: Category, draw_date: NaiveDate, balls: [u8; 5]) -> i64 {
    db.insert_draw(&NewDraw {
        category,
        draw_date,
        balls,
    })
    .unwrap()
    .id
}

#[test]
fn frequency_sum_is_five_per_draw() {
    let mut db = create_test_db();

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);
    insert(&mut db, Category::Gh18, date(2024, 1, 2), [5, 20, 33, 60, 75]);
    insert(&mut db, Category::Gh18, date(2024, 1, 3), [1, 2, 3, 4, 6]);

    for category in Category::ALL {
        let draw_count = db.draws_in_category(category).unwrap().len();
        let total: u32 = db
            .all_ball_frequencies(category)
            .unwrap()
            .iter()
            .map(|record| record.frequency)
            .sum();
        assert_eq!(total, 5 * draw_count as u32);
    }
}

#[test]
fn frequency_table_always_has_ninety_entries() {
    let mut db = create_test_db();

    // Empty state
    let frequencies = db.all_ball_frequencies(Category::Civ13).unwrap();
    assert_eq!(frequencies.len(), 90);
    let numbers: Vec<u8> = frequencies.iter().map(|record| record.ball_number).collect();
    assert_eq!(numbers, (1..=90).collect::<Vec<u8>>());

    // Still 90 after inserts
    insert(&mut db, Category::Civ13, date(2024, 5, 5), [10, 20, 30, 40, 50]);
    let frequencies = db.all_ball_frequencies(Category::Civ13).unwrap();
    assert_eq!(frequencies.len(), 90);
}

#[test]
fn all_zero_state_ranks_first_five_numbers() {
    let db = create_test_db();

    let top = db.top_frequent_balls(Category::Gh18, 5).unwrap();
    let least = db.least_frequent_balls(Category::Gh18, 5).unwrap();

    let expected: Vec<BallFrequency> = (1..=5)
        .map(|ball_number| BallFrequency {
            ball_number,
            frequency: 0,
        })
        .collect();
    assert_eq!(top, expected);
    assert_eq!(least, expected);
}

#[test]
fn ranking_limit_caps_result_length() {
    let mut db = create_test_db();
    insert(&mut db, Category::Gh18, date(2024, 1, 1), [1, 2, 3, 4, 5]);

    assert_eq!(db.top_frequent_balls(Category::Gh18, 3).unwrap().len(), 3);
    assert_eq!(db.least_frequent_balls(Category::Gh18, 0).unwrap().len(), 0);
    // Limit beyond the domain returns all 90 entries
    assert_eq!(db.top_frequent_balls(Category::Gh18, 200).unwrap().len(), 90);
}

#[test]
fn queried_ball_never_in_its_own_simultaneous_result() {
    let mut db = create_test_db();

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);
    insert(&mut db, Category::Gh18, date(2024, 1, 2), [5, 20, 33, 60, 75]);
    insert(&mut db, Category::Gh18, date(2024, 1, 3), [33, 40, 41, 42, 43]);

    for ball in 1..=90u8 {
        let simultaneous = db.simultaneous_occurrences(Category::Gh18, ball).unwrap();
        assert!(simultaneous.iter().all(|record| record.ball_number != ball));
    }
}

#[test]
fn analytics_queries_are_idempotent() {
    let mut db = create_test_db();

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);
    insert(&mut db, Category::Gh18, date(2024, 1, 2), [5, 20, 33, 60, 75]);

    assert_eq!(
        db.all_ball_frequencies(Category::Gh18).unwrap(),
        db.all_ball_frequencies(Category::Gh18).unwrap()
    );
    assert_eq!(
        db.top_frequent_balls(Category::Gh18, 5).unwrap(),
        db.top_frequent_balls(Category::Gh18, 5).unwrap()
    );
    assert_eq!(
        db.simultaneous_occurrences(Category::Gh18, 5).unwrap(),
        db.simultaneous_occurrences(Category::Gh18, 5).unwrap()
    );
    assert_eq!(
        db.subsequent_occurrences(Category::Gh18, 5).unwrap(),
        db.subsequent_occurrences(Category::Gh18, 5).unwrap()
    );
}

#[test]
fn insert_then_delete_restores_all_aggregates() {
    let mut db = create_test_db();

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);

    let draws_before = db.draws_in_category(Category::Gh18).unwrap();
    let frequencies_before = db.all_ball_frequencies(Category::Gh18).unwrap();
    let simultaneous_before = db.simultaneous_occurrences(Category::Gh18, 5).unwrap();

    let id = insert(&mut db, Category::Gh18, date(2024, 1, 2), [5, 20, 33, 60, 75]);
    assert!(db.delete_draw(id).unwrap());

    assert_eq!(db.draws_in_category(Category::Gh18).unwrap(), draws_before);
    assert_eq!(
        db.all_ball_frequencies(Category::Gh18).unwrap(),
        frequencies_before
    );
    assert_eq!(
        db.simultaneous_occurrences(Category::Gh18, 5).unwrap(),
        simultaneous_before
    );
}

#[test]
fn gh18_scenario() {
    let mut db = create_test_db();

    // Empty category
    assert!(db.draws_in_category(Category::Gh18).unwrap().is_empty());

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);
    assert_eq!(db.ball_frequency(Category::Gh18, 5).unwrap(), 1);
    assert_eq!(db.ball_frequency(Category::Gh18, 6).unwrap(), 0);

    insert(&mut db, Category::Gh18, date(2024, 1, 2), [5, 20, 33, 60, 75]);

    let simultaneous = db.simultaneous_occurrences(Category::Gh18, 5).unwrap();
    let rank_of = |ball: u8| {
        simultaneous
            .iter()
            .position(|record| record.ball_number == ball)
            .unwrap()
    };
    assert_eq!(simultaneous[rank_of(33)].frequency, 2);
    assert_eq!(simultaneous[rank_of(12)].frequency, 1);
    assert!(rank_of(33) < rank_of(12));

    // Jan-01 contains 5, so the Jan-02 draw's balls each count once
    let subsequent = db.subsequent_occurrences(Category::Gh18, 5).unwrap();
    let expected: Vec<BallFrequency> = [5u8, 20, 33, 60, 75]
        .iter()
        .map(|&ball_number| BallFrequency {
            ball_number,
            frequency: 1,
        })
        .collect();
    assert_eq!(subsequent, expected);
}

#[test]
fn reset_leaves_other_categories_untouched() {
    let mut db = create_test_db();

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);
    insert(&mut db, Category::Gh18, date(2024, 1, 2), [5, 20, 33, 60, 75]);
    insert(&mut db, Category::Civ10, date(2024, 1, 1), [7, 14, 21, 28, 35]);

    assert!(db.delete_draws_in_category(Category::Gh18).unwrap());

    assert!(db.draws_in_category(Category::Gh18).unwrap().is_empty());
    assert_eq!(db.ball_frequency(Category::Gh18, 5).unwrap(), 0);

    let civ10 = db.draws_in_category(Category::Civ10).unwrap();
    assert_eq!(civ10.len(), 1);
    assert_eq!(db.ball_frequency(Category::Civ10, 7).unwrap(), 1);
}

#[test]
fn categories_are_independent_universes() {
    let mut db = create_test_db();

    insert(&mut db, Category::Gh18, date(2024, 1, 1), [5, 12, 33, 47, 90]);
    insert(&mut db, Category::Civ16, date(2024, 1, 2), [5, 20, 33, 60, 75]);

    // A category's analytics never see another category's draws
    assert_eq!(db.ball_frequency(Category::Gh18, 20).unwrap(), 0);
    assert_eq!(db.ball_frequency(Category::Civ16, 12).unwrap(), 0);
    assert!(db.subsequent_occurrences(Category::Gh18, 5).unwrap().is_empty());
    assert!(db.subsequent_occurrences(Category::Civ16, 5).unwrap().is_empty());
}
