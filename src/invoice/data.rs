//! Concrete invoice data substituted into templates.
//!
//! Every field is optional on the wire so sparse records deserialize;
//! the resolver turns anything missing into an empty string.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceData {
    pub invoice: InvoiceInfo,
    pub sender: SenderInfo,
    pub recipient: RecipientInfo,
    pub services: Vec<ServiceLine>,
    pub totals: Totals,
    pub bank: BankInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceInfo {
    pub number: Option<String>,
    pub date: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub siret: Option<String>,
    pub siren: Option<String>,
    pub company_name: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipientInfo {
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub siret: Option<String>,
    pub siren: Option<String>,
}

/// One billed line. A single template slot stands for the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
    pub subtotal: Option<f64>,
    /// Percentage, e.g. `20.0` for 20 %.
    pub tax_rate: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankInfo {
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl InvoiceInfo {
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "number" => self.number.as_deref(),
            "date" => self.date.as_deref(),
            "dueDate" => self.due_date.as_deref(),
            _ => None,
        }
    }
}

impl SenderInfo {
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => self.name.as_deref(),
            "email" => self.email.as_deref(),
            "phone" => self.phone.as_deref(),
            "address" => self.address.as_deref(),
            "siret" => self.siret.as_deref(),
            "siren" => self.siren.as_deref(),
            "companyName" => self.company_name.as_deref(),
            "logo" => self.logo.as_deref(),
            _ => None,
        }
    }
}

impl RecipientInfo {
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "companyName" => self.company_name.as_deref(),
            "contactName" => self.contact_name.as_deref(),
            "contactTitle" => self.contact_title.as_deref(),
            "email" => self.email.as_deref(),
            "phone" => self.phone.as_deref(),
            "address" => self.address.as_deref(),
            "siret" => self.siret.as_deref(),
            "siren" => self.siren.as_deref(),
            _ => None,
        }
    }
}

impl BankInfo {
    pub fn field(&self, field: &str) -> Option<&str> {
        match field {
            "iban" => self.iban.as_deref(),
            "bic" => self.bic.as_deref(),
            "name" => self.name.as_deref(),
            "address" => self.address.as_deref(),
            _ => None,
        }
    }
}

impl Totals {
    pub fn field(&self, field: &str) -> Option<f64> {
        match field {
            "subtotal" => self.subtotal,
            "taxRate" => self.tax_rate,
            "taxAmount" => self.tax_amount,
            "total" => self.total,
            _ => None,
        }
    }
}

impl InvoiceData {
    /// Read a record from JSON, or YAML when the extension is `.yaml`/`.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        if is_yaml {
            Ok(serde_yaml::from_str(&raw)?)
        } else {
            Ok(serde_json::from_str(&raw)?)
        }
    }
}
