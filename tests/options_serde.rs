//! Options deserialization tests.
#![cfg(feature = "serde")]

use chess_core::board::Color;
use chess_core::engine::{GameOptions, DEFAULT_SQUARE_SIZE};

#[test]
fn empty_object_uses_defaults() {
    let options: GameOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, GameOptions::default());
}

#[test]
fn partial_options_keep_field_defaults() {
    let json = r#"{"engine_color": "White", "search": {"depth": 2, "seed": 9}}"#;
    let options: GameOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.engine_color, Some(Color::White));
    assert_eq!(options.search.depth, 2);
    assert_eq!(options.search.seed, Some(9));
    assert!(options.search.capture_bonus);
    assert_eq!(options.search.threads, 1);
    assert_eq!(options.square_size, DEFAULT_SQUARE_SIZE);
}

#[test]
fn null_engine_color_means_two_players() {
    let options: GameOptions = serde_json::from_str(r#"{"engine_color": null}"#).unwrap();
    assert_eq!(options, GameOptions::two_players());
}

#[test]
fn options_round_trip_through_json() {
    let original = GameOptions::two_players();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: GameOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}
