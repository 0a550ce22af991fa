//! Heuristic binding of text elements to invoice variables.
//!
//! Rules are tried in table order against the element's name and its text
//! content, both lowercased. The first rule matching either string wins.
//! Suggestions are best effort and expected to be corrected by the user.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::design::Element;

use super::table::MappingTable;
use super::variable::VariableName;

/// One ordered heuristic: a pattern and the variable it implies.
#[derive(Debug)]
pub struct SuggestionRule {
    pub pattern: Regex,
    pub variable: VariableName,
}

impl SuggestionRule {
    fn new(pattern: &str, variable: VariableName) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){pattern}"))
                .unwrap_or_else(|e| panic!("invalid suggestion pattern {pattern:?}: {e}")),
            variable,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

/// Precedence matters: e.g. "total tva" must hit the tax rule before the
/// grand-total rule, and "to" only counts as a standalone word so it does
/// not swallow "total".
pub static SUGGESTION_RULES: Lazy<Vec<SuggestionRule>> = Lazy::new(|| {
    vec![
        SuggestionRule::new(r"facture|invoice|number|n°|#", VariableName::InvoiceNumber),
        SuggestionRule::new(r"date.*facture|invoice.*date", VariableName::InvoiceDate),
        SuggestionRule::new(
            r"échéance|due.*date|payment.*date",
            VariableName::InvoiceDueDate,
        ),
        SuggestionRule::new(r"sender|émetteur|expéditeur|from", VariableName::SenderName),
        SuggestionRule::new(
            r"siret.*émetteur|sender.*siret|your.*siret",
            VariableName::SenderSiret,
        ),
        SuggestionRule::new(
            r"siren.*émetteur|sender.*siren|your.*siren",
            VariableName::SenderSiren,
        ),
        SuggestionRule::new(
            r"recipient|destinataire|client|customer|\bto\b",
            VariableName::RecipientCompanyName,
        ),
        SuggestionRule::new(r"contact", VariableName::RecipientContactName),
        SuggestionRule::new(r"sous-total|subtotal", VariableName::TotalsSubtotal),
        SuggestionRule::new(r"tva|vat|tax", VariableName::TotalsTaxAmount),
        SuggestionRule::new(r"total\s*(ttc)?$", VariableName::TotalsTotal),
        SuggestionRule::new(r"iban", VariableName::BankIban),
        SuggestionRule::new(r"bic|swift", VariableName::BankBic),
        SuggestionRule::new(r"banque|bank", VariableName::BankName),
        SuggestionRule::new(r"conditions|terms|paiement", VariableName::Terms),
    ]
});

/// First-match suggestion for one element, if any rule fires.
pub fn suggest_variable(element: &Element) -> Option<VariableName> {
    let name = element.name.to_lowercase();
    let content = element
        .content
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    SUGGESTION_RULES
        .iter()
        .find(|rule| rule.matches(&name) || rule.matches(&content))
        .map(|rule| rule.variable)
}

/// Suggest bindings for text elements, keyed by synthetic element id.
///
/// Elements matching no rule are simply left out.
pub fn suggest_mappings<'a, I>(text_elements: I) -> MappingTable
where
    I: IntoIterator<Item = &'a Element>,
{
    let mut table = MappingTable::new();
    for element in text_elements {
        if let Some(variable) = suggest_variable(element) {
            debug!(element = %element.name, %variable, "suggested mapping");
            table.set(element.id.clone(), variable);
        }
    }
    table
}
