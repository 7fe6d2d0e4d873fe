use crate::domain::locale::{display_label, field_heading};
use crate::domain::{Locale, OptionField};

/// A canonical option value and its label in the requested locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValue {
    pub value: &'static str,
    pub label: &'static str,
}

/// All values offered for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionListing {
    pub field: OptionField,
    pub heading: &'static str,
    pub values: Vec<OptionValue>,
}

/// List options for one field, or for every field.
pub fn list_options(field: Option<OptionField>, locale: Locale) -> Vec<OptionListing> {
    let fields = match field {
        Some(field) => vec![field],
        None => OptionField::ALL.to_vec(),
    };

    fields
        .into_iter()
        .map(|field| OptionListing {
            field,
            heading: field_heading(field, locale),
            values: field
                .values()
                .iter()
                .map(|value| OptionValue { value, label: display_label(field, value, locale) })
                .collect(),
        })
        .collect()
}
