//! Element → variable bindings for one design structure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::design::DesignStructure;

use super::variable::VariableName;

/// Flat `{elementId: variableName}` table.
///
/// Values are kept as plain strings so tables written against an older
/// vocabulary still load; resolution degrades unknown names to `""`.
/// An element is bound to at most one variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: BTreeMap<String, String>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, element_id: &str) -> Option<&str> {
        self.entries.get(element_id).map(String::as_str)
    }

    /// Bind `element_id`, replacing any previous binding.
    pub fn set(&mut self, element_id: impl Into<String>, variable: VariableName) {
        self.entries
            .insert(element_id.into(), variable.as_str().to_string());
    }

    pub fn clear(&mut self, element_id: &str) -> Option<String> {
        self.entries.remove(element_id)
    }

    /// Picker semantics: choosing the current variable again unbinds the
    /// element, choosing another replaces it. Returns the binding after the
    /// change.
    pub fn toggle(&mut self, element_id: &str, variable: VariableName) -> Option<VariableName> {
        if self.get(element_id) == Some(variable.as_str()) {
            self.entries.remove(element_id);
            None
        } else {
            self.set(element_id, variable);
            Some(variable)
        }
    }

    /// Apply an editor change: `Some` binds, `None` unbinds.
    pub fn apply(&mut self, element_id: &str, variable: Option<VariableName>) {
        match variable {
            Some(variable) => self.set(element_id, variable),
            None => {
                self.entries.remove(element_id);
            }
        }
    }

    /// Drop bindings whose element no longer exists in `structure`.
    /// Returns how many entries were removed.
    pub fn prune(&mut self, structure: &DesignStructure) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| structure.contains(id));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for MappingTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
