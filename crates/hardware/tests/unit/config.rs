//! Configuration Tests.
//!
//! JSON parsing with defaults, optimization level conversion, and validation
//! of out-of-order resource sizes.

use mipsim_core::common::SimError;
use mipsim_core::config::{Config, OptLevel};
use mipsim_core::core::ModelDispatch;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.opt_level, OptLevel::SingleCycle);
    assert_eq!(config.ooo.phys_regs, 64);
    assert_eq!(config.ooo.fetch_queue_size, 16);
    assert_eq!(config.ooo.reservation_stations, 8);
    assert_eq!(config.ooo.rob_size, 32);
    assert_eq!(config.memory.size, 1024 * 1024);
}

#[test]
fn partial_document_overrides_named_fields() {
    let config = Config::from_json(
        r#"{ "general": { "opt_level": 2, "commit_log": true }, "ooo": { "phys_regs": 48 } }"#,
    )
    .unwrap();
    assert_eq!(config.general.opt_level, OptLevel::OutOfOrder);
    assert!(config.general.commit_log);
    assert_eq!(config.ooo.phys_regs, 48);
    assert_eq!(config.ooo.rob_size, 32);
}

#[rstest]
#[case(0, OptLevel::SingleCycle)]
#[case(1, OptLevel::Pipelined)]
#[case(2, OptLevel::OutOfOrder)]
fn opt_level_round_trips_through_u8(#[case] raw: u8, #[case] level: OptLevel) {
    assert_eq!(OptLevel::try_from(raw).unwrap(), level);
    assert_eq!(u8::from(level), raw);
}

#[test]
fn unknown_opt_level_is_fatal() {
    assert!(matches!(OptLevel::try_from(3), Err(SimError::InvalidOptLevel(3))));
    assert!(Config::from_json(r#"{ "general": { "opt_level": 7 } }"#).is_err());
}

#[rstest]
#[case::too_few_phys_regs(r#"{ "ooo": { "phys_regs": 32 } }"#)]
#[case::empty_rob(r#"{ "ooo": { "rob_size": 0 } }"#)]
#[case::no_stations(r#"{ "ooo": { "reservation_stations": 0 } }"#)]
#[case::no_fetch_queue(r#"{ "ooo": { "fetch_queue_size": 0 } }"#)]
#[case::no_memory(r#"{ "memory": { "size": 0 } }"#)]
fn invalid_sizes_are_rejected(#[case] json: &str) {
    assert!(matches!(Config::from_json(json), Err(SimError::Config(_))));
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(Config::from_json("{ general"), Err(SimError::Json(_))));
}

#[rstest]
#[case(OptLevel::SingleCycle)]
#[case(OptLevel::Pipelined)]
#[case(OptLevel::OutOfOrder)]
fn dispatch_selects_exactly_one_model(#[case] level: OptLevel) {
    let mut config = Config::default();
    config.general.opt_level = level;
    let model = ModelDispatch::new(&config);
    assert_eq!(model.opt_level(), level);
    assert_eq!(model.as_ooo().is_some(), level == OptLevel::OutOfOrder);
    assert_eq!(model.as_inorder().is_some(), level == OptLevel::Pipelined);
}
