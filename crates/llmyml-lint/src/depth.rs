//! Nesting depth of a map tree.

use serde_json::{Map, Value};

/// Maximum nesting depth of `value`.
///
/// The root sits at depth 0 and every key of a map places its value one
/// level deeper, so `{a: {b: 1}}` has depth 2. Scalars and arrays are
/// leaves: they are counted at the depth they sit at but never descended.
/// A non-map root has depth 0.
///
/// The walk uses an explicit stack, so arbitrarily deep input cannot
/// overflow the call stack.
pub fn object_depth(value: &Value) -> usize {
    let Value::Object(root) = value else {
        return 0;
    };

    let mut max_depth = 0;
    let mut stack: Vec<(&Map<String, Value>, usize)> = vec![(root, 0)];

    while let Some((map, depth)) = stack.pop() {
        let child_depth = depth + 1;
        for child in map.values() {
            max_depth = max_depth.max(child_depth);
            if let Value::Object(inner) = child {
                stack.push((inner, child_depth));
            }
        }
    }

    max_depth
}
