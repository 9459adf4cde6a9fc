/*!
 * Unbind tests
 * Selective removal by callback, receiver, or both
 */

use crate::common::*;
use object_slots::{CallbackId, Emitter, Signal};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn test_unbind_function_removes_every_receiver() {
    let test = Test::new();
    let first = Arc::new(Recorder::new("first"));
    let second = Arc::new(Recorder::new("second"));

    test.bind_method(Test::hello, &first, Recorder::on_hello);
    test.bind_method(Test::hello, &second, Recorder::on_hello);

    let removed = test.unbind_function(Recorder::on_hello);

    assert_eq!(removed, 2);
    assert_eq!(test.slots().slot_count(Test::hello), 0);
    assert_eq!(test.slots().signal_count(), 0);
}

#[test]
fn test_unbind_method_removes_only_that_receiver() {
    let test = Test::new();
    let first = Arc::new(Recorder::new("first"));
    let second = Arc::new(Recorder::new("second"));
    take_calls();

    test.bind_method(Test::hello, &first, Recorder::on_hello);
    test.bind_method(Test::hello, &second, Recorder::on_hello);

    assert_eq!(test.unbind_method(&first, Recorder::on_hello), 1);

    test.hello("left".to_string());
    assert_eq!(take_calls(), vec!["second:left"]);
    assert!(first.entries().is_empty());
}

#[test]
fn test_unbind_object_spans_signals_and_prunes() {
    let test = Test::new();
    let recorder = Arc::new(Recorder::new("obj"));
    take_calls();

    test.bind_method(Test::hello, &recorder, Recorder::on_hello);
    test.bind_method(Test::other_signal, &recorder, Recorder::on_other);
    test.bind_function(Test::other_signal, on_other);
    assert_eq!(test.slots().signal_count(), 2);

    assert_eq!(test.unbind_object(&recorder), 2);

    // hello lost its only slot and is gone; other_signal keeps the function
    assert_eq!(test.slots().signal_count(), 1);
    assert_eq!(test.slots().slot_count(Test::hello), 0);
    assert_eq!(test.slots().slot_count(Test::other_signal), 1);

    test.hello("gone".to_string());
    test.other_signal();
    assert_eq!(take_calls(), vec!["other"]);
}

#[test]
fn test_unbind_never_bound_is_noop() {
    let test = Test::new();
    let stranger = Arc::new(Recorder::new("stranger"));
    test.bind_function(Test::hello, slot_a);

    assert_eq!(test.unbind_function(never_bound), 0);
    assert_eq!(test.unbind_object(&stranger), 0);
    assert_eq!(test.unbind_method(&stranger, Recorder::on_hello), 0);
    assert_eq!(test.slots().slot_count(Test::hello), 1);
}

#[test]
fn test_unbind_twice_matches_unbind_once() {
    let test = Test::new();
    test.bind_function(Test::hello, slot_a);
    test.bind_function(Test::hello, slot_b);

    assert_eq!(test.unbind_function(slot_a), 1);
    let after_once = test.slots().stats().active_slots;
    assert_eq!(test.unbind_function(slot_a), 0);

    assert_eq!(test.slots().stats().active_slots, after_once);
    assert_eq!(test.slots().slot_count(Test::hello), 1);
}

#[test]
fn test_unbind_preserves_order_of_survivors() {
    let test = Test::new();
    take_calls();

    test.bind_function(Test::hello, slot_a);
    test.bind_function(Test::hello, slot_b);
    test.bind_function(Test::hello, slot_c);
    test.bind_function(Test::hello, slot_b);

    test.unbind_function(slot_b);
    test.hello("kept".to_string());

    assert_eq!(take_calls(), vec!["a:kept", "c:kept"]);
}

#[test]
fn test_unbind_callback_by_identity() {
    let test = Test::new();
    test.bind_function(Test::hello, slot_a);
    test.bind_function(Test::other_signal, on_other);

    assert_eq!(test.unbind_callback(CallbackId::of(&slot_a)), 1);
    assert_eq!(test.slots().signal_count(), 1);
}

#[test]
fn test_closures_survive_unbind_by_receiver() {
    let test = Test::new();
    let recorder = Arc::new(Recorder::new("obj"));
    take_calls();

    test.bind_closure(Test::hello, |message: &String| record(format!("closure:{message}")));
    test.bind_method(Test::hello, &recorder, Recorder::on_hello);

    test.unbind_object(&recorder);
    test.hello("still here".to_string());

    assert_eq!(take_calls(), vec!["closure:still here"]);
}

#[test]
fn test_dropped_receiver_is_skipped() {
    let test = Test::new();
    let recorder = Arc::new(Recorder::new("dropped"));
    take_calls();

    test.bind_method(Test::hello, &recorder, Recorder::on_hello);
    test.bind_function(Test::hello, slot_a);
    drop(recorder);

    test.hello("after drop".to_string());

    assert_eq!(take_calls(), vec!["a:after drop"]);
    let stats = test.slots().stats();
    assert_eq!(stats.skipped_invocations, 1);
    // The dead binding stays until someone unbinds it
    assert_eq!(stats.active_slots, 2);
}

// Model-checked removal over a small universe of receivers and callables.

struct Member {
    id: usize,
}

impl Member {
    fn m0(&self) {
        record(format!("r{}:m0", self.id));
    }

    fn m1(&self) {
        record(format!("r{}:m1", self.id));
    }
}

fn f0() {
    record("f0");
}

fn f1() {
    record("f1");
}

const RECEIVERS: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Binding {
    signal: usize,
    receiver: Option<usize>,
    callback: usize,
}

impl Binding {
    fn label(&self) -> String {
        match self.receiver {
            Some(r) => format!("r{}:m{}", r, self.callback),
            None => format!("f{}", self.callback),
        }
    }

    /// Identity of the callable: m0, m1, f0, f1
    fn callable(&self) -> usize {
        match self.receiver {
            Some(_) => self.callback,
            None => 2 + self.callback,
        }
    }
}

fn bind_on<S: Signal<Test, ()>>(test: &Test, signal: S, members: &[Arc<Member>], binding: Binding) {
    match (binding.receiver, binding.callback) {
        (Some(r), 0) => test.bind_method(signal, &members[r], Member::m0),
        (Some(r), _) => test.bind_method(signal, &members[r], Member::m1),
        (None, 0) => test.bind_function(signal, f0),
        (None, _) => test.bind_function(signal, f1),
    }
}

fn unbind(test: &Test, members: &[Arc<Member>], object: Option<usize>, callable: Option<usize>) -> usize {
    match (object, callable) {
        (None, None) => 0,
        (Some(r), None) => test.unbind_object(&members[r]),
        (None, Some(0)) => test.unbind_function(Member::m0),
        (None, Some(1)) => test.unbind_function(Member::m1),
        (None, Some(2)) => test.unbind_function(f0),
        (None, Some(_)) => test.unbind_function(f1),
        (Some(r), Some(0)) => test.unbind_method(&members[r], Member::m0),
        (Some(r), Some(1)) => test.unbind_method(&members[r], Member::m1),
        (Some(r), Some(2)) => test.unbind_method(&members[r], f0),
        (Some(r), Some(_)) => test.unbind_method(&members[r], f1),
    }
}

fn emit(test: &Test, signal: usize) {
    if signal == 0 {
        test.other_signal();
    } else {
        test.ping();
    }
}

fn binding_strategy() -> impl Strategy<Value = Binding> {
    (0..2usize, proptest::option::of(0..RECEIVERS), 0..2usize).prop_map(
        |(signal, receiver, callback)| Binding {
            signal,
            receiver,
            callback,
        },
    )
}

proptest! {
    #[test]
    fn prop_remove_only_matching_and_prune(
        bindings in proptest::collection::vec(binding_strategy(), 0..16),
        object in proptest::option::of(0..RECEIVERS),
        callable in proptest::option::of(0..4usize),
    ) {
        let test = Test::new();
        let members: Vec<Arc<Member>> = (0..RECEIVERS).map(|id| Arc::new(Member { id })).collect();

        for binding in &bindings {
            if binding.signal == 0 {
                bind_on(&test, Test::other_signal, &members, *binding);
            } else {
                bind_on(&test, Test::ping, &members, *binding);
            }
        }

        let removed = unbind(&test, &members, object, callable);

        let matches = |b: &Binding| match (object, callable) {
            (None, None) => false,
            (Some(o), None) => b.receiver == Some(o),
            (None, Some(c)) => b.callable() == c,
            (Some(o), Some(c)) => b.receiver == Some(o) && b.callable() == c,
        };
        let survivors: Vec<Binding> = bindings.iter().copied().filter(|b| !matches(b)).collect();
        prop_assert_eq!(removed, bindings.len() - survivors.len());

        let live_signals = (0..2).filter(|s| survivors.iter().any(|b| b.signal == *s)).count();
        prop_assert_eq!(test.slots().signal_count(), live_signals);

        for signal in 0..2 {
            take_calls();
            emit(&test, signal);
            let expected: Vec<String> = survivors
                .iter()
                .filter(|b| b.signal == signal)
                .map(Binding::label)
                .collect();
            prop_assert_eq!(take_calls(), expected);
        }
    }
}
