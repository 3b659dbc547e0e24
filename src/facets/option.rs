use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable value inside a facet group.
pub struct FacetOption {
    pub value: String,
    pub label: String,
    #[serde(default = "checked_by_default")]
    pub checked: bool,
}

fn checked_by_default() -> bool {
    true
}

impl FacetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            checked: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered options for one attribute dimension. Values are unique.
pub struct FacetGroup {
    options: Vec<FacetOption>,
}

impl FacetGroup {
    /// Build a group, dropping any option whose value was already seen.
    pub fn new(options: impl IntoIterator<Item = FacetOption>) -> Self {
        let mut seen = BTreeSet::new();
        let options = options
            .into_iter()
            .filter(|opt| seen.insert(opt.value.clone()))
            .collect();
        Self { options }
    }

    pub fn options(&self) -> &[FacetOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<&FacetOption> {
        self.options.iter().find(|opt| opt.value == value)
    }

    /// Mark every option as checked.
    pub fn check_all(&mut self) {
        for opt in &mut self.options {
            opt.checked = true;
        }
    }

    /// Flip the option matching `value`. Returns false when no option matches.
    pub fn toggle(&mut self, value: &str) -> bool {
        match self.options.iter_mut().find(|opt| opt.value == value) {
            Some(opt) => {
                opt.checked = !opt.checked;
                true
            }
            None => {
                tracing::debug!(value, "toggle ignored for unknown facet value");
                false
            }
        }
    }

    /// Clear the option matching `value`; repeated calls leave it unchecked.
    /// Returns false when no option matches.
    pub fn uncheck(&mut self, value: &str) -> bool {
        match self.options.iter_mut().find(|opt| opt.value == value) {
            Some(opt) => {
                opt.checked = false;
                true
            }
            None => {
                tracing::debug!(value, "uncheck ignored for unknown facet value");
                false
            }
        }
    }

    /// Values of all checked options.
    pub fn enabled_values(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .filter(|opt| opt.checked)
            .map(|opt| opt.value.clone())
            .collect()
    }

    pub fn has_unchecked(&self) -> bool {
        self.options.iter().any(|opt| !opt.checked)
    }

    /// Copy `checked` flags from `previous` for every value both groups share.
    pub(crate) fn inherit_checked(&mut self, previous: &FacetGroup) {
        for opt in &mut self.options {
            if let Some(prev) = previous.get(&opt.value) {
                opt.checked = prev.checked;
            }
        }
    }
}

/// Copy of `group` with every option checked.
pub fn initialize_selection(group: &FacetGroup) -> FacetGroup {
    let mut next = group.clone();
    next.check_all();
    next
}

/// Copy of `group` with the option matching `value` flipped. Unknown values
/// leave the copy unchanged.
pub fn toggle_option(group: &FacetGroup, value: &str) -> FacetGroup {
    let mut next = group.clone();
    next.toggle(value);
    next
}

pub fn enabled_values(group: &FacetGroup) -> BTreeSet<String> {
    group.enabled_values()
}
