//! The closed vocabulary of bindable invoice fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A dot-namespaced invoice field a text element can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableName {
    #[serde(rename = "invoice.number")]
    InvoiceNumber,
    #[serde(rename = "invoice.date")]
    InvoiceDate,
    #[serde(rename = "invoice.dueDate")]
    InvoiceDueDate,
    #[serde(rename = "sender.name")]
    SenderName,
    #[serde(rename = "sender.email")]
    SenderEmail,
    #[serde(rename = "sender.phone")]
    SenderPhone,
    #[serde(rename = "sender.address")]
    SenderAddress,
    #[serde(rename = "sender.siret")]
    SenderSiret,
    #[serde(rename = "sender.siren")]
    SenderSiren,
    #[serde(rename = "sender.companyName")]
    SenderCompanyName,
    #[serde(rename = "sender.logo")]
    SenderLogo,
    #[serde(rename = "recipient.companyName")]
    RecipientCompanyName,
    #[serde(rename = "recipient.contactName")]
    RecipientContactName,
    #[serde(rename = "recipient.contactTitle")]
    RecipientContactTitle,
    #[serde(rename = "recipient.email")]
    RecipientEmail,
    #[serde(rename = "recipient.phone")]
    RecipientPhone,
    #[serde(rename = "recipient.address")]
    RecipientAddress,
    #[serde(rename = "recipient.siret")]
    RecipientSiret,
    #[serde(rename = "recipient.siren")]
    RecipientSiren,
    #[serde(rename = "service.name")]
    ServiceName,
    #[serde(rename = "service.description")]
    ServiceDescription,
    #[serde(rename = "service.quantity")]
    ServiceQuantity,
    #[serde(rename = "service.unitPrice")]
    ServiceUnitPrice,
    #[serde(rename = "service.total")]
    ServiceTotal,
    #[serde(rename = "totals.subtotal")]
    TotalsSubtotal,
    #[serde(rename = "totals.taxRate")]
    TotalsTaxRate,
    #[serde(rename = "totals.taxAmount")]
    TotalsTaxAmount,
    #[serde(rename = "totals.total")]
    TotalsTotal,
    #[serde(rename = "bank.iban")]
    BankIban,
    #[serde(rename = "bank.bic")]
    BankBic,
    #[serde(rename = "bank.name")]
    BankName,
    #[serde(rename = "bank.address")]
    BankAddress,
    #[serde(rename = "terms")]
    Terms,
    #[serde(rename = "message")]
    Message,
}

/// Grouping used by the mapping picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    Invoice,
    Recipient,
    Sender,
    Totals,
    Service,
    Bank,
    Other,
}

impl VariableCategory {
    pub const ALL: [VariableCategory; 7] = [
        VariableCategory::Invoice,
        VariableCategory::Recipient,
        VariableCategory::Sender,
        VariableCategory::Totals,
        VariableCategory::Service,
        VariableCategory::Bank,
        VariableCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VariableCategory::Invoice => "Facture",
            VariableCategory::Recipient => "Client (Destinataire)",
            VariableCategory::Sender => "Mon entreprise (Émetteur)",
            VariableCategory::Totals => "Totaux",
            VariableCategory::Service => "Lignes de service (répétables)",
            VariableCategory::Bank => "Coordonnées bancaires",
            VariableCategory::Other => "Autres",
        }
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableName> + '_ {
        VariableName::ALL
            .iter()
            .copied()
            .filter(move |v| v.category() == *self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown variable '{0}'")]
pub struct UnknownVariable(pub String);

impl VariableName {
    pub const ALL: [VariableName; 34] = [
        VariableName::InvoiceNumber,
        VariableName::InvoiceDate,
        VariableName::InvoiceDueDate,
        VariableName::SenderName,
        VariableName::SenderEmail,
        VariableName::SenderPhone,
        VariableName::SenderAddress,
        VariableName::SenderSiret,
        VariableName::SenderSiren,
        VariableName::SenderCompanyName,
        VariableName::SenderLogo,
        VariableName::RecipientCompanyName,
        VariableName::RecipientContactName,
        VariableName::RecipientContactTitle,
        VariableName::RecipientEmail,
        VariableName::RecipientPhone,
        VariableName::RecipientAddress,
        VariableName::RecipientSiret,
        VariableName::RecipientSiren,
        VariableName::ServiceName,
        VariableName::ServiceDescription,
        VariableName::ServiceQuantity,
        VariableName::ServiceUnitPrice,
        VariableName::ServiceTotal,
        VariableName::TotalsSubtotal,
        VariableName::TotalsTaxRate,
        VariableName::TotalsTaxAmount,
        VariableName::TotalsTotal,
        VariableName::BankIban,
        VariableName::BankBic,
        VariableName::BankName,
        VariableName::BankAddress,
        VariableName::Terms,
        VariableName::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableName::InvoiceNumber => "invoice.number",
            VariableName::InvoiceDate => "invoice.date",
            VariableName::InvoiceDueDate => "invoice.dueDate",
            VariableName::SenderName => "sender.name",
            VariableName::SenderEmail => "sender.email",
            VariableName::SenderPhone => "sender.phone",
            VariableName::SenderAddress => "sender.address",
            VariableName::SenderSiret => "sender.siret",
            VariableName::SenderSiren => "sender.siren",
            VariableName::SenderCompanyName => "sender.companyName",
            VariableName::SenderLogo => "sender.logo",
            VariableName::RecipientCompanyName => "recipient.companyName",
            VariableName::RecipientContactName => "recipient.contactName",
            VariableName::RecipientContactTitle => "recipient.contactTitle",
            VariableName::RecipientEmail => "recipient.email",
            VariableName::RecipientPhone => "recipient.phone",
            VariableName::RecipientAddress => "recipient.address",
            VariableName::RecipientSiret => "recipient.siret",
            VariableName::RecipientSiren => "recipient.siren",
            VariableName::ServiceName => "service.name",
            VariableName::ServiceDescription => "service.description",
            VariableName::ServiceQuantity => "service.quantity",
            VariableName::ServiceUnitPrice => "service.unitPrice",
            VariableName::ServiceTotal => "service.total",
            VariableName::TotalsSubtotal => "totals.subtotal",
            VariableName::TotalsTaxRate => "totals.taxRate",
            VariableName::TotalsTaxAmount => "totals.taxAmount",
            VariableName::TotalsTotal => "totals.total",
            VariableName::BankIban => "bank.iban",
            VariableName::BankBic => "bank.bic",
            VariableName::BankName => "bank.name",
            VariableName::BankAddress => "bank.address",
            VariableName::Terms => "terms",
            VariableName::Message => "message",
        }
    }

    pub fn category(&self) -> VariableCategory {
        match self.as_str().split_once('.').map(|(ns, _)| ns) {
            Some("invoice") => VariableCategory::Invoice,
            Some("sender") => VariableCategory::Sender,
            Some("recipient") => VariableCategory::Recipient,
            Some("service") => VariableCategory::Service,
            Some("totals") => VariableCategory::Totals,
            Some("bank") => VariableCategory::Bank,
            _ => VariableCategory::Other,
        }
    }

    /// Service fields stand for one row of a repeating list.
    pub fn is_repeating(&self) -> bool {
        self.category() == VariableCategory::Service
    }

    pub fn label(&self) -> &'static str {
        match self {
            VariableName::InvoiceNumber => "Numéro de facture",
            VariableName::InvoiceDate => "Date de facture",
            VariableName::InvoiceDueDate => "Date d'échéance",
            VariableName::SenderName => "Nom",
            VariableName::SenderEmail | VariableName::RecipientEmail => "Email",
            VariableName::SenderPhone | VariableName::RecipientPhone => "Téléphone",
            VariableName::SenderAddress | VariableName::RecipientAddress => "Adresse",
            VariableName::SenderSiret | VariableName::RecipientSiret => "SIRET",
            VariableName::SenderSiren | VariableName::RecipientSiren => "SIREN",
            VariableName::SenderCompanyName | VariableName::RecipientCompanyName => {
                "Raison sociale"
            }
            VariableName::SenderLogo => "Logo",
            VariableName::RecipientContactName => "Nom du contact",
            VariableName::RecipientContactTitle => "Titre du contact",
            VariableName::ServiceName => "Nom du service",
            VariableName::ServiceDescription => "Description",
            VariableName::ServiceQuantity => "Quantité",
            VariableName::ServiceUnitPrice => "Prix unitaire",
            VariableName::ServiceTotal => "Total ligne",
            VariableName::TotalsSubtotal => "Sous-total HT",
            VariableName::TotalsTaxRate => "Taux TVA",
            VariableName::TotalsTaxAmount => "Montant TVA",
            VariableName::TotalsTotal => "Total TTC",
            VariableName::BankIban => "IBAN",
            VariableName::BankBic => "BIC",
            VariableName::BankName => "Nom de la banque",
            VariableName::BankAddress => "Adresse banque",
            VariableName::Terms => "Conditions de paiement",
            VariableName::Message => "Message personnalisé",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            VariableName::InvoiceNumber => "FAC-2024-001",
            VariableName::InvoiceDate => "18/01/2026",
            VariableName::InvoiceDueDate => "17/02/2026",
            VariableName::SenderName => "Pierre Martin",
            VariableName::SenderEmail => "contact@monentreprise.fr",
            VariableName::SenderPhone | VariableName::RecipientPhone => "+33 1 23 45 67 89",
            VariableName::SenderAddress => "456 Avenue...",
            VariableName::SenderSiret => "987 654 321 00098",
            VariableName::SenderSiren => "987 654 321",
            VariableName::SenderCompanyName => "Mon Entreprise",
            VariableName::SenderLogo => "[Logo]",
            VariableName::RecipientCompanyName => "Acme Corp",
            VariableName::RecipientContactName => "Jean Dupont",
            VariableName::RecipientContactTitle => "Directeur",
            VariableName::RecipientEmail => "contact@acme.com",
            VariableName::RecipientAddress => "123 Rue...",
            VariableName::RecipientSiret => "123 456 789 00012",
            VariableName::RecipientSiren => "123 456 789",
            VariableName::ServiceName => "Conseil",
            VariableName::ServiceDescription => "Service de conseil",
            VariableName::ServiceQuantity => "10",
            VariableName::ServiceUnitPrice => "100,00 €",
            VariableName::ServiceTotal => "1 000,00 €",
            VariableName::TotalsSubtotal => "1 000,00 €",
            VariableName::TotalsTaxRate => "20%",
            VariableName::TotalsTaxAmount => "200,00 €",
            VariableName::TotalsTotal => "1 200,00 €",
            VariableName::BankIban => "FR76 1234 5678 9012 3456 7890 123",
            VariableName::BankBic => "BNPAFRPP",
            VariableName::BankName => "BNP Paribas",
            VariableName::BankAddress => "16 Bd des Italiens, Paris",
            VariableName::Terms => "30 jours",
            VariableName::Message => "Merci pour votre confiance",
        }
    }
}

/// Label for a possibly stale variable name; unknown names are echoed back.
pub fn variable_label(name: &str) -> &str {
    name.parse::<VariableName>()
        .map(|v| v.label())
        .unwrap_or(name)
}

impl FromStr for VariableName {
    type Err = UnknownVariable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariableName::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariable(s.to_string()))
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
