#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;

type IntEnv = Environment<i64>;

#[test]
fn get_searches_outward() {
    let root = IntEnv::with_bindings([("x", 1), ("y", 2)]);
    let child = root.extend([("x", 10)]);
    assert_eq!(child.get("x").unwrap(), 10);
    assert_eq!(child.get("y").unwrap(), 2);
    assert_eq!(root.get("x").unwrap(), 1);
}

#[test]
fn get_unbound_fails() {
    let env = IntEnv::new().push();
    let err = env.get("missing").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "missing".to_string()
        }
    );
    assert_eq!(env.lookup("missing"), None);
}

#[test]
fn set_one_touches_only_the_current_frame() {
    let root = IntEnv::with_bindings([("x", 1)]);
    let child = root.push();
    child.set_one("x", 5);
    child.set_one("z", 7);
    assert_eq!(child.get("x").unwrap(), 5);
    assert_eq!(root.get("x").unwrap(), 1);
    assert!(!root.contains("z"));
}

#[test]
fn replace_mutates_the_nearest_definition() {
    let root = IntEnv::with_bindings([("x", 1)]);
    let middle = root.extend([("x", 2)]);
    let leaf = middle.push();

    leaf.replace("x", 20).unwrap();
    assert_eq!(middle.get("x").unwrap(), 20);
    assert_eq!(root.get("x").unwrap(), 1);
    assert!(leaf.names().is_empty());
}

#[test]
fn replace_unbound_fails_without_binding() {
    let env = IntEnv::with_bindings([("x", 1)]).push();
    assert!(env.replace("y", 3).is_err());
    assert!(!env.contains("y"));
}

#[test]
fn shared_frames_see_each_others_writes() {
    let frame = IntEnv::with_bindings([("count", 0)]);
    let alias = frame.clone();
    alias.replace("count", 3).unwrap();
    assert_eq!(frame.get("count").unwrap(), 3);
    assert!(frame.ptr_eq(&alias));
    assert!(!frame.ptr_eq(&frame.push()));
}

#[test]
fn depth_and_names() {
    let root = IntEnv::new();
    let env = root.extend([("b", 1), ("a", 2)]).push().extend([("c", 3)]);
    assert_eq!(root.depth(), 1);
    assert_eq!(env.depth(), 4);
    assert_eq!(
        env.names(),
        vec![Name::new("c")]
    );
    let env = root.extend([("b", 1), ("a", 2)]);
    assert_eq!(env.names(), vec![Name::new("b"), Name::new("a")]);
}

#[test]
fn long_chains_are_walked_without_recursion() {
    let mut env = IntEnv::with_bindings([("bottom", 42)]);
    for i in 0..50_000 {
        env = env.extend([("level", i)]);
    }
    assert_eq!(env.get("bottom").unwrap(), 42);
    assert_eq!(env.depth(), 50_001);
    assert!(env.contains("bottom"));
}

#[test]
fn take_unshared_stops_at_shared_frames() {
    let root = IntEnv::with_bindings([("a", 1)]);
    let mut child = root.extend([("b", 2), ("c", 3)]).extend([("d", 4)]);
    let mut taken = Vec::new();
    child.take_unshared(&mut taken);
    assert_eq!(taken, [4, 2, 3]);
    assert_eq!(root.get("a").unwrap(), 1);

    let mut first = root.extend([("e", 5)]);
    let second = first.clone();
    let mut taken = Vec::new();
    first.take_unshared(&mut taken);
    assert!(taken.is_empty());
    assert_eq!(second.get("e").unwrap(), 5);
}
