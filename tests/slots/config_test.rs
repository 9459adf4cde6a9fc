/*!
 * Environment configuration tests
 */

use object_slots::{DispatchPolicy, LockPolicy, SlotConfig, SlotError};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;

const THREAD_SAFE: &str = "OBJECT_SLOTS_THREAD_SAFE";
const DISPATCH: &str = "OBJECT_SLOTS_DISPATCH";

fn clear() {
    env::remove_var(THREAD_SAFE);
    env::remove_var(DISPATCH);
}

#[test]
#[serial]
fn test_from_env_without_overrides_is_default() {
    clear();

    assert_eq!(SlotConfig::from_env().unwrap(), SlotConfig::default());
}

#[test]
#[serial]
fn test_from_env_applies_overrides() {
    clear();
    env::set_var(THREAD_SAFE, "on");
    env::set_var(DISPATCH, "detached");

    let config = SlotConfig::from_env().unwrap();
    clear();

    assert_eq!(config.lock, LockPolicy::Exclusive);
    assert_eq!(config.dispatch, DispatchPolicy::Detached);
}

#[test]
#[serial]
fn test_from_env_can_turn_policies_off() {
    clear();
    env::set_var(THREAD_SAFE, "0");
    env::set_var(DISPATCH, "sync");

    let config = SlotConfig::from_env().unwrap();
    clear();

    assert_eq!(config, SlotConfig::synchronous());
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_values() {
    clear();
    env::set_var(DISPATCH, "sideways");

    let result = SlotConfig::from_env();
    clear();

    assert_eq!(
        result,
        Err(SlotError::InvalidConfig {
            key: DISPATCH.to_string(),
            value: "sideways".to_string(),
        })
    );
}
