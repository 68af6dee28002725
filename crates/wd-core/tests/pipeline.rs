//! Integration tests exercising the full update pipeline:
//! alias resolution → directory lookup → style-preserving token
//! rewrite → document render, across module boundaries.

use wd_core::{
    Document, NumberLike, ParseFailure, UpdateEngine, UpdateMode, UpdateRequest, UpdateStatus,
};

/// A plausible LC-style input deck. Spacing is deliberately irregular
/// so byte-preservation of untouched lines is actually tested.
const WD_INPUT: &str = "\
KIC 9832227  contact binary   test deck
1.0000D-05   1.0000D-04  2.0000D-03   0.0   0.0   0.0  1.0000D-02   0.0   0.0   5.0   5.0
0.001  0.001   0.001 0.001   2.0000D-02
1 1 1 1
0 0 0 0
2 2 2 2
0 0 0 0
1   55000.123456   0.4579510   0.00   0.0000   0.0010   30
2   0   1   1   30   30   0   0   0   0   0   1.0000   1.0000
0.0000   6.450   1.0000   1.0000  -12.50   82.500   0.320   0.320   0.000
5800.   5600.   0.500   0.500   6.2500   6.4000   0.4300
0.000   0.000   0.000   0.000
0   1.0000   0.5000   0.500   0.500   0   0   0.0000
";

fn engine() -> UpdateEngine {
    UpdateEngine::new()
}

#[test]
fn mixed_batch_touches_only_addressed_tokens() {
    let mut document = Document::parse(WD_INPUT);
    let outcomes = engine().apply(
        &[
            UpdateRequest::set("mass_ratio", 0.5),
            UpdateRequest::set("INCLINATION", 84.25),
            UpdateRequest::new("TEMPERATURE2", UpdateMode::Add, 150.0),
        ],
        &mut document,
    );

    assert!(outcomes.iter().all(|o| o.is_applied()));
    assert_eq!(document.token(10, 6), Some("0.5000"));
    assert_eq!(document.token(9, 5), Some("84.250"));
    assert_eq!(document.token(10, 1), Some("5750"));

    let rendered = document.render();
    let before: Vec<&str> = WD_INPUT.lines().collect();
    let after: Vec<&str> = rendered.lines().collect();
    assert_eq!(before.len(), after.len());
    for (i, (old, new)) in before.iter().zip(&after).enumerate() {
        if i == 9 || i == 10 {
            assert_ne!(old, new, "edited line {i} must change");
        } else {
            assert_eq!(old, new, "untouched line {i} must not change");
        }
    }
}

#[test]
fn unmapped_batch_leaves_document_byte_identical() {
    let mut document = Document::parse(WD_INPUT);
    let outcomes = engine().apply(
        &[
            UpdateRequest::set("SPOT_LATITUDE", 30.0),
            UpdateRequest::set("totally made up", 1.0),
        ],
        &mut document,
    );
    assert!(
        outcomes
            .iter()
            .all(|o| o.status == UpdateStatus::SkippedUnmapped)
    );
    assert_eq!(document.render(), WD_INPUT);
}

#[test]
fn scientific_step_size_keeps_marker_and_width() {
    let mut document = Document::parse(WD_INPUT);
    let outcomes = engine().apply(&[UpdateRequest::set("STEP_Q", 3.5e-3)], &mut document);
    assert!(outcomes[0].is_applied());
    assert_eq!(outcomes[0].old_token.as_deref(), Some("2.0000D-02"));
    assert_eq!(outcomes[0].new_token.as_deref(), Some("3.5000D-03"));
}

#[test]
fn batch_ordering_is_sequential() {
    let mut document = Document::parse(WD_INPUT);
    let outcomes = engine().apply(
        &[
            UpdateRequest::set("ECC", 0.4),
            UpdateRequest::new("ECC", UpdateMode::Add, 0.1),
        ],
        &mut document,
    );
    assert_eq!(outcomes[1].new_token.as_deref(), Some("0.5000"));
    assert_eq!(document.token(9, 0), Some("0.5000"));
}

#[test]
fn error_outcome_does_not_poison_batch() {
    let mut document = Document::parse(WD_INPUT);
    // corrupt the eccentricity cell so it cannot parse
    document.replace_token(9, 0, "??");
    let outcomes = engine().apply(
        &[
            UpdateRequest::set("ECC", 0.1),
            UpdateRequest::set("VGAM", -14.75),
        ],
        &mut document,
    );
    assert_eq!(
        outcomes[0].status,
        UpdateStatus::ErrorParse(ParseFailure::UnparsableToken)
    );
    assert!(outcomes[1].is_applied());
    assert_eq!(document.token(9, 4), Some("-14.75"));
}

#[test]
fn wire_batch_deserializes_and_applies() {
    // shape straight from a translator reply, quirks included
    let json = r#"[
        {"parameter_name": "q", "mode": "set", "value": "0.48"},
        {"parameter_name": "ecc", "mode": "sub", "value": 0.0},
        {"parameter_name": "DWDOT", "mode": "tweak", "new_value": 1.0}
    ]"#;
    let requests: Vec<UpdateRequest> = serde_json::from_str(json).unwrap();
    assert_eq!(requests[1].mode, UpdateMode::Subtract);
    assert_eq!(requests[2].mode, UpdateMode::Set);
    assert_eq!(requests[2].value, Some(NumberLike::Number(1.0)));

    let mut document = Document::parse(WD_INPUT);
    let outcomes = engine().apply(&requests, &mut document);
    assert!(outcomes[0].is_applied());
    assert_eq!(document.token(10, 6), Some("0.4800"));
    assert!(outcomes[1].is_applied());
    assert_eq!(outcomes[2].status, UpdateStatus::SkippedUnmapped);
}

#[test]
fn outcomes_serialize_for_reporting() {
    let mut document = Document::parse(WD_INPUT);
    let outcomes = engine().apply(
        &[
            UpdateRequest::set("q", 0.5),
            UpdateRequest::set("NOPE", 1.0),
        ],
        &mut document,
    );
    let json = serde_json::to_value(&outcomes).unwrap();
    assert_eq!(json[0]["status"], "applied");
    assert_eq!(json[0]["symbol"], "q");
    assert_eq!(json[0]["old_token"], "0.4300");
    assert_eq!(json[0]["new_token"], "0.5000");
    assert_eq!(json[0]["location"]["line"], 10);
    assert_eq!(json[1]["status"], "skipped_unmapped");
    assert!(json[1].get("old_token").is_none());
}

#[test]
fn document_without_trailing_newline_round_trips() {
    let text = WD_INPUT.trim_end();
    let mut document = Document::parse(text);
    let outcomes = engine().apply(&[UpdateRequest::set("SEMI_MAJOR_AXIS", 6.5)], &mut document);
    assert!(outcomes[0].is_applied());
    let rendered = document.render();
    assert!(!rendered.ends_with('\n'));
    assert_eq!(document.token(9, 1), Some("6.500"));
}
