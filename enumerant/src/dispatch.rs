//! Handler lookup in tables keyed by enumerator.
//!
//! A table is a slice of `(value, handler)` pairs sorted by ascending value, usually a `const`
//! array of function pointers. Lookups are binary searches.
//!
//! ```
//! use enumerant::dispatch::dispatch;
//! use enumerant::Enumerant;
//!
//! #[derive(Clone, Copy, Enumerant)]
//! enum Op {
//!     Add,
//!     Sub,
//!     Mul,
//! }
//!
//! fn add(_: Op) -> i32 {
//!     5 + 2
//! }
//!
//! fn sub(_: Op) -> i32 {
//!     5 - 2
//! }
//!
//! const TABLE: [(Op, fn(Op) -> i32); 2] = [(Op::Add, add), (Op::Sub, sub)];
//!
//! assert_eq!(dispatch(Op::Add, -1, &TABLE), 7);
//! assert_eq!(dispatch(Op::Sub, -1, &TABLE), 3);
//! assert_eq!(dispatch(Op::Mul, -1, &TABLE), -1);
//! ```

use crate::traits::Enumerant;

fn find<E: Enumerant, F>(value: E, table: &[(E, F)]) -> Option<&F> {
    debug_assert!(
        table
            .windows(2)
            .all(|w| E::enum_to_int(w[0].0) < E::enum_to_int(w[1].0)),
        "dispatch table for {} is not sorted by value",
        E::type_name(),
    );
    let raw = E::enum_to_int(value);
    table
        .binary_search_by_key(&raw, |(key, _)| E::enum_to_int(*key))
        .ok()
        .map(|i| &table[i].1)
}

/// Calls the handler for `value`, or returns `fallback` if the table has none.
pub fn dispatch<E, R, F>(value: E, fallback: R, table: &[(E, F)]) -> R
where
    E: Enumerant,
    F: Fn(E) -> R,
{
    match find(value, table) {
        Some(handler) => handler(value),
        None => fallback,
    }
}

/// Calls the handler for `value`, falling back to the last entry's handler.
///
/// The last entry only serves as the fallback; its key is never matched.
pub fn dispatch_or_last<E, R, F, const N: usize>(value: E, table: &[(E, F); N]) -> R
where
    E: Enumerant,
    F: Fn(E) -> R,
{
    const { assert!(N > 0, "dispatch table needs a fallback entry") };
    match find(value, &table[..N - 1]) {
        Some(handler) => handler(value),
        None => (table[N - 1].1)(value),
    }
}

/// Like [`dispatch`], passing `receiver` to the handler.
pub fn dispatch_with<E, C, R, F>(value: E, fallback: R, table: &[(E, F)], receiver: &mut C) -> R
where
    E: Enumerant,
    C: ?Sized,
    F: Fn(&mut C, E) -> R,
{
    match find(value, table) {
        Some(handler) => handler(receiver, value),
        None => fallback,
    }
}
