//! Fixed sample data shown when the editor switches to preview mode.

use once_cell::sync::Lazy;

use super::data::{
    BankInfo, InvoiceData, InvoiceInfo, RecipientInfo, SenderInfo, ServiceLine, Totals,
};

static SAMPLE_INVOICE: Lazy<InvoiceData> = Lazy::new(|| InvoiceData {
    invoice: InvoiceInfo {
        number: Some("FAC-2026-0042".into()),
        date: Some("18 janvier 2026".into()),
        due_date: Some("17 février 2026".into()),
    },
    sender: SenderInfo {
        name: Some("Marie Dupont".into()),
        email: Some("marie@studio-dupont.fr".into()),
        phone: Some("+33 6 12 34 56 78".into()),
        address: Some("42 Rue de la Paix\n75002 Paris".into()),
        siret: Some("123 456 789 00012".into()),
        siren: Some("123 456 789".into()),
        company_name: Some("Studio Dupont".into()),
        logo: Some("/logo-sample.png".into()),
    },
    recipient: RecipientInfo {
        company_name: Some("Acme Corporation".into()),
        contact_name: Some("Jean Martin".into()),
        contact_title: Some("Directeur Marketing".into()),
        email: Some("j.martin@acme-corp.com".into()),
        phone: Some("+33 1 23 45 67 89".into()),
        address: Some("123 Avenue des Champs-Élysées\n75008 Paris".into()),
        siret: Some("987 654 321 00098".into()),
        siren: Some("987 654 321".into()),
    },
    services: vec![
        ServiceLine {
            name: "Création identité visuelle".into(),
            description: Some("Logo, charte graphique, déclinaisons".into()),
            quantity: 1.0,
            unit_price: 2500.0,
            total: 2500.0,
        },
        ServiceLine {
            name: "Design site web".into(),
            description: Some("Maquettes desktop et mobile (5 pages)".into()),
            quantity: 5.0,
            unit_price: 450.0,
            total: 2250.0,
        },
        ServiceLine {
            name: "Consultation UX".into(),
            description: Some("Audit et recommandations".into()),
            quantity: 8.0,
            unit_price: 120.0,
            total: 960.0,
        },
    ],
    totals: Totals {
        subtotal: Some(5710.0),
        tax_rate: Some(20.0),
        tax_amount: Some(1142.0),
        total: Some(6852.0),
    },
    bank: BankInfo {
        iban: Some("FR76 1234 5678 9012 3456 7890 123".into()),
        bic: Some("BNPAFRPP".into()),
        name: Some("BNP Paribas".into()),
        address: Some("16 Boulevard des Italiens, 75009 Paris".into()),
    },
    terms: Some("Paiement à 30 jours".into()),
    message: Some(
        "Merci pour votre confiance. N'hésitez pas à me contacter pour toute question.".into(),
    ),
});

/// The preview fixture. Lives for the whole process and is never mutated.
pub fn sample_invoice() -> &'static InvoiceData {
    &SAMPLE_INVOICE
}
