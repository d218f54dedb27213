//! Naming rules shared by the emitter.
//!
//! Display names in a drawing are free text. These helpers turn them into
//! type and member identifiers without any language-specific escaping:
//! whitespace separates words, everything else is kept verbatim.

/// Suffix appended to a field name holding many values.
pub const PLURAL_SUFFIX: char = 's';

/// Suffix appended to a field name that is already taken on the same type.
pub const COLLISION_SUFFIX: &str = "2";

/// Parameter name used when a collection field has no singular form.
pub const PLACEHOLDER_PARAMETER: &str = "item";

/// Converts a display name into a type name.
///
/// Each whitespace-separated word gets its first character upper-cased and the
/// rest lower-cased, and the words are joined without a separator.
///
/// ```
/// # use draftsmith_core::naming::type_name;
/// assert_eq!(type_name("licence plate"), "LicencePlate");
/// assert_eq!(type_name("  Car  "), "Car");
/// ```
pub fn type_name(display_name: &str) -> String {
    display_name.split_whitespace().map(capitalize).collect()
}

/// Lower-cases the first character of `name`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character of `name`.
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Appends the plural suffix to a field name.
pub fn pluralize(name: &str) -> String {
    let mut plural = String::with_capacity(name.len() + 1);
    plural.push_str(name);
    plural.push(PLURAL_SUFFIX);
    plural
}

/// Returns the parameter name for an element added to the collection `field`.
///
/// A single trailing plural suffix is stripped. When there is none (for
/// example a disambiguated `wheels2`), [`PLACEHOLDER_PARAMETER`] is used.
pub fn singular_parameter(field: &str) -> &str {
    field
        .strip_suffix(PLURAL_SUFFIX)
        .filter(|singular| !singular.is_empty())
        .unwrap_or(PLACEHOLDER_PARAMETER)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
