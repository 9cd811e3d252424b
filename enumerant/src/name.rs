//! Scope handling for enumerator names.

/// Removes the longest prefix of `name` that ends in `:`.
///
/// Names without a `:` are returned unchanged.
///
/// ```
/// use enumerant::name::unqualified;
///
/// assert_eq!(unqualified("net::Component::Path"), "Path");
/// assert_eq!(unqualified("Path"), "Path");
/// ```
pub const fn unqualified(name: &str) -> &str {
    let bytes = name.as_bytes();
    let mut i = bytes.len();
    while i > 0 {
        if bytes[i - 1] == b':' {
            let (_, tail) = bytes.split_at(i);
            // Splitting after an ASCII byte keeps the tail valid UTF-8.
            return match core::str::from_utf8(tail) {
                Ok(tail) => tail,
                Err(_) => name,
            };
        }
        i -= 1;
    }
    name
}

/// Checks whether `name` carries any `::` qualification.
pub const fn is_qualified(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b':' {
            return true;
        }
        i += 1;
    }
    false
}
