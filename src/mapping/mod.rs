//! Variable bindings: vocabulary, suggestion heuristics and the mapping table.

pub mod suggest;
pub mod table;
pub mod variable;

pub use suggest::{suggest_mappings, suggest_variable, SuggestionRule, SUGGESTION_RULES};
pub use table::MappingTable;
pub use variable::{variable_label, UnknownVariable, VariableCategory, VariableName};
