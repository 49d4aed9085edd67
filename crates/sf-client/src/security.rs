//! Validation for user- and server-supplied names.
//!
//! Object API names are interpolated into request paths, and record type
//! developer names become file names on disk. Both MUST be checked with the
//! functions in this module before use.
//!
//! ```rust
//! use sf_layouts_client::security;
//!
//! assert!(security::is_safe_sobject_name("Account"));
//! assert!(!security::is_safe_sobject_name("Account/../../limits"));
//!
//! assert!(security::is_safe_file_stem("Business_Account"));
//! assert!(!security::is_safe_file_stem("../outside"));
//! ```

/// Validate that an SObject API name is safe to put in a URL path.
///
/// Names must start with an ASCII letter and contain only ASCII
/// alphanumerics and underscores (`Custom_Object__c`, `ns__Thing__c`).
///
/// # Example
///
/// ```rust
/// use sf_layouts_client::security;
///
/// assert!(security::is_safe_sobject_name("Case"));
/// assert!(security::is_safe_sobject_name("Custom_Object__c"));
/// assert!(!security::is_safe_sobject_name("Bad'; DROP--"));
/// assert!(!security::is_safe_sobject_name(""));
/// ```
#[must_use]
pub fn is_safe_sobject_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Validate that a name can be used verbatim as a file stem.
///
/// Rejects empty names, `.` and `..`, path separators, and characters that
/// are not allowed in file names on common platforms.
#[must_use]
pub fn is_safe_file_stem(name: &str) -> bool {
    const FORBIDDEN: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    !name
        .chars()
        .any(|ch| ch.is_control() || FORBIDDEN.contains(&ch))
}
