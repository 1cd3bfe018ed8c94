//! Graph flattening and uid assignment.
//!
//! Both operations walk every value reachable from a root: record fields,
//! list elements and map values. Records are visited once per instance
//! (identity, not equality), which is what makes cyclic graphs terminate.
//!
//! The walk is iterative and emits entities in post-order, so each entity
//! comes after everything it references, back-edges of cycles aside. Decoding
//! a flattened acyclic graph therefore resolves every link in one pass.

use gemd_types::{Obj, Value};
use std::collections::HashSet;
use tracing::debug;

enum Step {
    Enter(Value),
    Exit(Obj),
}

/// Visits each reachable record once. `on_enter` runs before the record's
/// children are walked, `on_exit` after.
fn walk(root: &Value, mut on_enter: impl FnMut(&Obj), mut on_exit: impl FnMut(&Obj)) {
    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack = vec![Step::Enter(root.clone())];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(Value::Object(obj)) => {
                if !visited.insert(obj.addr()) {
                    continue;
                }
                on_enter(&obj);
                let fields = obj.fields();
                stack.push(Step::Exit(obj));
                stack.extend(fields.into_values().rev().map(Step::Enter));
            }
            Step::Enter(Value::List(items)) => {
                stack.extend(items.into_iter().rev().map(Step::Enter));
            }
            Step::Enter(Value::Map(map)) => {
                stack.extend(map.into_values().rev().map(Step::Enter));
            }
            Step::Enter(_) => {}
            Step::Exit(obj) => on_exit(&obj),
        }
    }
}

/// Collects every distinct entity reachable from `root`, except `root`
/// itself, assigning a uid under `auto_scope` to any entity without one.
///
/// Assigned uids are written back onto the records, so a second call sees
/// the same ids.
pub fn flatten(root: &Value, auto_scope: &str) -> Vec<Obj> {
    let root_addr = root.as_object().map(Obj::addr);
    let mut assigned = 0usize;
    let mut context = Vec::new();

    walk(
        root,
        |obj| {
            if obj.ensure_uid(auto_scope) {
                assigned += 1;
            }
        },
        |obj| {
            if obj.is_entity() && Some(obj.addr()) != root_addr {
                context.push(obj.clone());
            }
        },
    );

    debug!(entities = context.len(), assigned, "Flattened object graph");
    context
}

/// Ensures every entity reachable from `root` (including `root`) has at least
/// one uid. Idempotent; returns how many entities were given a uid.
pub fn set_uuids(root: &Value, scope: &str) -> usize {
    let mut assigned = 0usize;
    walk(
        root,
        |obj| {
            if obj.ensure_uid(scope) {
                assigned += 1;
            }
        },
        |_| {},
    );
    if assigned > 0 {
        debug!(assigned, scope, "Assigned missing uids");
    }
    assigned
}
