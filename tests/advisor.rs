//! Policy table and advisor tests.

use std::io::Write;

use bjcoach::{
    Action, ActionScores, Advisor, Feedback, LoadStatus, PolicyError, PolicyTable,
    Recommendation, Round, StateKey,
};

const TABLE: &str = r#"{
    "(18, 10, True)": { "hit": 0.4, "stand": 0.6 },
    "(13, 2, False)": { "hit": 0.8, "stand": 0.2 },
    "(12, 4, False)": { "hit": 0.5, "stand": 0.5 }
}"#;

fn write_table(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn recommends_the_higher_scoring_action() {
    let advisor = Advisor::from_json(TABLE);

    assert_eq!(advisor.recommend(18, 10, true), Recommendation::Stand);
    assert_eq!(advisor.recommend(13, 2, false), Recommendation::Hit);
    assert_eq!(advisor.recommend(13, 2, false).to_string(), "Hit");
    assert!(!advisor.status().is_degraded());
    assert_eq!(advisor.table().len(), 3);
}

#[test]
fn ties_resolve_to_stand() {
    let advisor = Advisor::from_json(TABLE);
    assert_eq!(advisor.recommend(12, 4, false), Recommendation::Stand);
}

#[test]
fn absent_states_are_unknown() {
    let advisor = Advisor::from_json(TABLE);

    assert_eq!(advisor.recommend(20, 5, true), Recommendation::Unknown);
    assert_eq!(advisor.recommend(18, 10, false), Recommendation::Unknown);
    assert_eq!(advisor.recommend(18, 10, false).to_string(), "Unknown");
    assert_eq!(advisor.recommend(18, 10, false).action(), None);
}

#[test]
fn loads_from_file() {
    let file = write_table(TABLE);
    let advisor = Advisor::load(file.path());

    assert!(matches!(advisor.status(), LoadStatus::Loaded));
    assert_eq!(advisor.recommend(18, 10, true), Recommendation::Stand);
}

#[test]
fn missing_file_degrades_to_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let advisor = Advisor::load(dir.path().join("q_table.json"));

    assert!(matches!(advisor.status(), LoadStatus::Degraded(PolicyError::Io(_))));
    assert!(advisor.table().is_empty());
    assert_eq!(advisor.recommend(18, 10, true), Recommendation::Unknown);
}

#[test]
fn malformed_document_degrades_to_empty_table() {
    let file = write_table("{ not json");
    let advisor = Advisor::load(file.path());
    assert!(matches!(advisor.status(), LoadStatus::Degraded(PolicyError::Json(_))));
    assert_eq!(advisor.recommend(13, 2, false), Recommendation::Unknown);

    let missing_stand = Advisor::from_json(r#"{"(13, 2, False)": {"hit": 0.8}}"#);
    assert!(missing_stand.status().is_degraded());
    assert!(missing_stand.table().is_empty());

    let not_an_object = Advisor::from_json("[1, 2, 3]");
    assert!(not_an_object.status().is_degraded());
}

#[test]
fn repeated_state_key_degrades_to_empty_table() {
    let advisor = Advisor::from_json(
        r#"{
            "(13, 2, False)": { "hit": 0.8, "stand": 0.2 },
            "(13, 2, False)": { "hit": 0.1, "stand": 0.9 }
        }"#,
    );

    match advisor.status() {
        LoadStatus::Degraded(PolicyError::Json(err)) => {
            assert!(err.to_string().contains("duplicate state key"));
        }
        other => panic!("expected a degraded load, got {other:?}"),
    }
    assert!(advisor.table().is_empty());
    assert_eq!(advisor.recommend(13, 2, false), Recommendation::Unknown);

    let file = write_table(
        r#"{"(18, 10, True)": {"hit": 0.4, "stand": 0.6}, "(18, 10, True)": {"hit": 0.4, "stand": 0.6}}"#,
    );
    assert!(PolicyTable::from_file(file.path()).is_err());
}

#[test]
fn empty_document_is_loaded_not_degraded() {
    let advisor = Advisor::from_json("{}");

    assert!(matches!(advisor.status(), LoadStatus::Loaded));
    assert!(advisor.table().is_empty());
    assert_eq!(advisor.recommend(13, 2, false), Recommendation::Unknown);
}

#[test]
fn non_canonical_keys_are_skipped() {
    let table = PolicyTable::from_json(
        r#"{
            "(13, 2, False)": { "hit": 0.8, "stand": 0.2 },
            "(13,2,False)": { "hit": 0.1, "stand": 0.9 },
            "(13, 2, false)": { "hit": 0.1, "stand": 0.9 },
            "13, 2, False": { "hit": 0.1, "stand": 0.9 }
        }"#,
    )
    .unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.skipped(), 3);
    assert_eq!(
        table.get(&StateKey::new(13, 2, false)),
        Some(&ActionScores {
            hit: 0.8,
            stand: 0.2
        })
    );
}

#[test]
fn integer_scores_are_accepted() {
    let advisor = Advisor::from_json(r#"{"(20, 7, False)": {"hit": -1, "stand": 1}}"#);
    assert_eq!(advisor.recommend(20, 7, false), Recommendation::Stand);
}

#[test]
fn state_key_wire_format() {
    assert_eq!(StateKey::new(18, 10, true).to_string(), "(18, 10, True)");
    assert_eq!(StateKey::new(4, 1, false).to_string(), "(4, 1, False)");

    assert_eq!("(18, 10, True)".parse::<StateKey>().unwrap(), StateKey::new(18, 10, true));
    assert_eq!("(0, 0, False)".parse::<StateKey>().unwrap(), StateKey::new(0, 0, false));

    for bad in [
        "(18, 10, true)",
        "(18,10,True)",
        "(018, 10, True)",
        "(+18, 10, True)",
        "(18, 10, True) ",
        "18, 10, True",
        "(18, 10)",
        "(18, 10, True, 1)",
        "(300, 10, True)",
    ] {
        assert!(
            matches!(bad.parse::<StateKey>(), Err(PolicyError::InvalidKey(_))),
            "{bad} should not parse"
        );
    }
}

#[test]
fn table_built_from_iterator() {
    let table: PolicyTable = [(
        StateKey::new(16, 10, false),
        ActionScores {
            hit: 0.3,
            stand: 0.1,
        },
    )]
    .into_iter()
    .collect();
    let advisor = Advisor::new(table);

    assert_eq!(advisor.recommend(16, 10, false), Recommendation::Hit);
    assert_eq!(advisor.table().iter().count(), 1);
}

#[test]
fn review_compares_choice_with_table() {
    let advisor = Advisor::from_json(TABLE);
    let state = StateKey::new(13, 2, false);

    assert_eq!(advisor.review(state, Action::Hit), Feedback::Correct(Action::Hit));
    assert_eq!(advisor.review(state, Action::Stand), Feedback::Wrong(Action::Hit));
    assert_eq!(
        advisor.review(StateKey::new(21, 3, true), Action::Stand),
        Feedback::NoEntry
    );
}

#[test]
fn advises_on_a_live_round() {
    let advisor = Advisor::from_json(TABLE);
    let round = Round::new(17);

    let state = round.player_state();
    let expected = advisor.recommend(state.total, state.dealer_up_card, state.usable_ace);
    assert_eq!(advisor.recommend_for(state), expected);
}

#[test]
fn advisor_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Advisor>();

    let advisor = Advisor::from_json(TABLE);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(advisor.recommend(13, 2, false), Recommendation::Hit);
            });
        }
    });
}
