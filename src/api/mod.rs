pub mod appointment;
pub mod pet;

/// True when the value has no non-whitespace content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.split_whitespace().collect::<String>().is_empty()
}
