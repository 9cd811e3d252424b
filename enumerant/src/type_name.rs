//! Short type names derived from [`core::any::type_name`].

use alloc::borrow::Cow;
use alloc::string::String;

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '{' | '}')
}

/// The last segment of a path, or the whole run for paths rooted at `::`.
fn last_segment(run: &str) -> &str {
    match run.rfind("::") {
        Some(0) | None => run,
        Some(i) => &run[i + 2..],
    }
}

/// Removes module paths from every path in a type name.
///
/// Generic arguments, references, pointers and keywords such as `dyn` are kept. A name that is a
/// single path is returned borrowed.
///
/// ```
/// use enumerant::type_name::strip_paths;
///
/// assert_eq!(strip_paths("alloc::vec::Vec<core::option::Option<i32>>"), "Vec<Option<i32>>");
/// assert_eq!(strip_paths("&mut dyn core::fmt::Write"), "&mut dyn Write");
/// ```
pub fn strip_paths(name: &str) -> Cow<'_, str> {
    if name.chars().all(is_path_char) {
        return Cow::Borrowed(last_segment(name));
    }

    let mut result = String::with_capacity(name.len());
    let mut rest = name;
    while !rest.is_empty() {
        let end = rest
            .find(|c: char| !is_path_char(c))
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        result.push_str(last_segment(run));
        let mut chars = tail.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        rest = chars.as_str();
    }
    Cow::Owned(result)
}

/// The name of `T` without module paths.
///
/// ```
/// use enumerant::type_name::type_name_of;
///
/// assert_eq!(type_name_of::<Vec<Option<i32>>>(), "Vec<Option<i32>>");
/// assert_eq!(type_name_of::<String>(), "String");
/// ```
pub fn type_name_of<T: ?Sized>() -> Cow<'static, str> {
    strip_paths(core::any::type_name::<T>())
}
