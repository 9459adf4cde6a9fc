/*!
 * Slot Configuration
 *
 * Policy selection for registry locking and slot dispatch.
 * Cargo features pick the defaults; environment variables may override them.
 */

use super::errors::{SlotError, SlotResult};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the lock policy
pub const THREAD_SAFE_ENV: &str = "OBJECT_SLOTS_THREAD_SAFE";

/// Environment variable overriding the dispatch policy
pub const DISPATCH_ENV: &str = "OBJECT_SLOTS_DISPATCH";

/// How registry access is synchronized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockPolicy {
    /// Each registry operation locks only for its own duration.
    /// Emission holds nothing across invocations, so slots may bind or
    /// unbind on the emitter while it is emitting.
    ///
    /// Emission walks the live list by index. A slot appended mid-emission
    /// is reached by it; unbinding a slot at or before the cursor shifts the
    /// rest down, and the slot that moves into the cursor position is
    /// skipped for that emission.
    Unsynchronized,
    /// Bind/unbind take the write lock; emission holds a shared lock for
    /// its full duration, invocations included.
    ///
    /// A slot that binds or unbinds on its own emitter deadlocks.
    Exclusive,
}

/// How slots are invoked during emission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchPolicy {
    /// Invoke each slot inline, in binding order
    Synchronous,
    /// Submit each invocation as an unsupervised fire-and-forget task.
    ///
    /// Emit returns once every task is submitted. There is no join, no
    /// ordering between tasks, and no way to wait for pending tasks to
    /// drain; a task may run after its emitter has been dropped.
    Detached,
}

/// Slot system configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub lock: LockPolicy,
    pub dispatch: DispatchPolicy,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            lock: if cfg!(feature = "thread-safe") {
                LockPolicy::Exclusive
            } else {
                LockPolicy::Unsynchronized
            },
            dispatch: if cfg!(feature = "detached-dispatch") {
                DispatchPolicy::Detached
            } else {
                DispatchPolicy::Synchronous
            },
        }
    }
}

impl SlotConfig {
    /// Inline dispatch, no lock held across emission
    pub const fn synchronous() -> Self {
        Self {
            lock: LockPolicy::Unsynchronized,
            dispatch: DispatchPolicy::Synchronous,
        }
    }

    /// Inline dispatch guarded by the shared/exclusive lock
    pub const fn thread_safe() -> Self {
        Self {
            lock: LockPolicy::Exclusive,
            dispatch: DispatchPolicy::Synchronous,
        }
    }

    /// Fire-and-forget dispatch, no lock held across emission
    pub const fn detached() -> Self {
        Self {
            lock: LockPolicy::Unsynchronized,
            dispatch: DispatchPolicy::Detached,
        }
    }

    pub const fn with_lock(mut self, lock: LockPolicy) -> Self {
        self.lock = lock;
        self
    }

    pub const fn with_dispatch(mut self, dispatch: DispatchPolicy) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn is_thread_safe(&self) -> bool {
        self.lock == LockPolicy::Exclusive
    }

    pub fn is_detached(&self) -> bool {
        self.dispatch == DispatchPolicy::Detached
    }

    /// Build-time defaults with environment overrides applied
    ///
    /// Environment variables:
    /// - OBJECT_SLOTS_THREAD_SAFE: 1/0, true/false, on/off
    /// - OBJECT_SLOTS_DISPATCH: sync/synchronous or detached
    pub fn from_env() -> SlotResult<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(THREAD_SAFE_ENV) {
            config.lock = if parse_switch(THREAD_SAFE_ENV, &value)? {
                LockPolicy::Exclusive
            } else {
                LockPolicy::Unsynchronized
            };
        }

        if let Ok(value) = std::env::var(DISPATCH_ENV) {
            config.dispatch = parse_dispatch(&value)?;
        }

        Ok(config)
    }
}

fn parse_switch(key: &str, value: &str) -> SlotResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(SlotError::invalid_config(key, value)),
    }
}

fn parse_dispatch(value: &str) -> SlotResult<DispatchPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "sync" | "synchronous" | "inline" => Ok(DispatchPolicy::Synchronous),
        "detached" | "async" | "threaded" => Ok(DispatchPolicy::Detached),
        _ => Err(SlotError::invalid_config(DISPATCH_ENV, value)),
    }
}
