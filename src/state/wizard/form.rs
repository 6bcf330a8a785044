//! Rental request form data and field addressing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Date format used by the date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Payment methods offered on the confirmation step
pub const PAYMENT_METHODS: [&str; 3] = ["Credit/Debit Card", "Bank Transfer", "Pay on Delivery"];

/// Billing granularity for a rental request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl RentalPeriod {
    pub const ALL: [RentalPeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Map free-form input to a period. Anything that is not `daily` or
    /// `weekly` bills monthly.
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            _ => Self::Monthly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Unit suffix used next to a rate, e.g. `$1,250/day`
    pub fn unit(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    /// Marketing hint shown under the longer periods
    pub fn savings_hint(self) -> Option<&'static str> {
        match self {
            Self::Daily => None,
            Self::Weekly => Some("Save 10%"),
            Self::Monthly => Some("Save 20%"),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Daily => Self::Weekly,
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Daily,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Daily => Self::Monthly,
            Self::Weekly => Self::Daily,
            Self::Monthly => Self::Weekly,
        }
    }
}

/// Documents requested on the upload step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    CompanyRegistration,
    TaxId,
    InsuranceCertificate,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        Self::CompanyRegistration,
        Self::TaxId,
        Self::InsuranceCertificate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyRegistration => "Company Registration Certificate",
            Self::TaxId => "Tax Identification Number (TIN)",
            Self::InsuranceCertificate => "Insurance Certificate",
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Self::InsuranceCertificate)
    }
}

/// A recorded file reference. Nothing is read or transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub kind: DocumentKind,
    pub reference: String,
}

/// Addressable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    StartDate,
    EndDate,
    RentalPeriod,
    DeliveryAddress,
    Document(DocumentKind),
    PaymentMethod,
}

impl WizardField {
    pub fn name(self) -> &'static str {
        match self {
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::RentalPeriod => "rental_period",
            Self::DeliveryAddress => "delivery_address",
            Self::Document(DocumentKind::CompanyRegistration) => "company_registration",
            Self::Document(DocumentKind::TaxId) => "tax_id",
            Self::Document(DocumentKind::InsuranceCertificate) => "insurance_certificate",
            Self::PaymentMethod => "payment_method",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StartDate => "Start Date (YYYY-MM-DD)",
            Self::EndDate => "End Date (YYYY-MM-DD)",
            Self::RentalPeriod => "Rental Period Type",
            Self::DeliveryAddress => "Delivery Address",
            Self::Document(kind) => kind.label(),
            Self::PaymentMethod => "Payment Method",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::DeliveryAddress)
    }
}

/// Returned when a field name is outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wizard field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for WizardField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start_date" => Ok(Self::StartDate),
            "end_date" => Ok(Self::EndDate),
            "rental_period" => Ok(Self::RentalPeriod),
            "delivery_address" => Ok(Self::DeliveryAddress),
            "company_registration" => Ok(Self::Document(DocumentKind::CompanyRegistration)),
            "tax_id" => Ok(Self::Document(DocumentKind::TaxId)),
            "insurance_certificate" => Ok(Self::Document(DocumentKind::InsuranceCertificate)),
            "payment_method" => Ok(Self::PaymentMethod),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Accumulated wizard input. Every field accepts any value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub start_date: String,
    pub end_date: String,
    pub rental_period: RentalPeriod,
    pub delivery_address: String,
    pub documents: Vec<DocumentRef>,
    pub payment_method: String,
}

impl FormData {
    pub fn with_period(rental_period: RentalPeriod) -> Self {
        Self {
            rental_period,
            ..Default::default()
        }
    }

    /// Replace the value of one field
    pub fn set(&mut self, field: WizardField, value: String) {
        match field {
            WizardField::StartDate => self.start_date = value,
            WizardField::EndDate => self.end_date = value,
            WizardField::RentalPeriod => self.rental_period = RentalPeriod::from_input(&value),
            WizardField::DeliveryAddress => self.delivery_address = value,
            WizardField::Document(kind) => self.set_document(kind, value),
            WizardField::PaymentMethod => self.payment_method = value,
        }
    }

    /// Current text of a field as the form shows it
    pub fn text(&self, field: WizardField) -> &str {
        match field {
            WizardField::StartDate => &self.start_date,
            WizardField::EndDate => &self.end_date,
            WizardField::RentalPeriod => self.rental_period.as_str(),
            WizardField::DeliveryAddress => &self.delivery_address,
            WizardField::Document(kind) => self.document(kind).unwrap_or(""),
            WizardField::PaymentMethod => &self.payment_method,
        }
    }

    pub fn document(&self, kind: DocumentKind) -> Option<&str> {
        self.documents
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.reference.as_str())
    }

    fn set_document(&mut self, kind: DocumentKind, reference: String) {
        self.documents.retain(|d| d.kind != kind);
        if !reference.is_empty() {
            self.documents.push(DocumentRef { kind, reference });
        }
    }

    /// Parsed start date; empty or malformed text reads as unset
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    /// Parsed end date; empty or malformed text reads as unset
    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    /// Both date fields hold some text
    pub fn has_dates(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rental_period {
        use super::*;

        #[test]
        fn test_default_is_daily() {
            assert_eq!(RentalPeriod::default(), RentalPeriod::Daily);
        }

        #[test]
        fn test_from_input_recognizes_daily_and_weekly() {
            assert_eq!(RentalPeriod::from_input("daily"), RentalPeriod::Daily);
            assert_eq!(RentalPeriod::from_input("Weekly "), RentalPeriod::Weekly);
        }

        #[test]
        fn test_from_input_falls_through_to_monthly() {
            assert_eq!(RentalPeriod::from_input("monthly"), RentalPeriod::Monthly);
            assert_eq!(RentalPeriod::from_input(""), RentalPeriod::Monthly);
            assert_eq!(RentalPeriod::from_input("fortnightly"), RentalPeriod::Monthly);
        }

        #[test]
        fn test_next_prev_cycle() {
            for period in RentalPeriod::ALL {
                assert_eq!(period.next().prev(), period);
            }
            assert_eq!(RentalPeriod::Monthly.next(), RentalPeriod::Daily);
        }

        #[test]
        fn test_serializes_lowercase() {
            let json = serde_json::to_string(&RentalPeriod::Weekly).unwrap();
            assert_eq!(json, "\"weekly\"");
        }
    }

    mod wizard_field {
        use super::*;

        #[test]
        fn test_names_parse_back() {
            let fields = [
                WizardField::StartDate,
                WizardField::EndDate,
                WizardField::RentalPeriod,
                WizardField::DeliveryAddress,
                WizardField::Document(DocumentKind::CompanyRegistration),
                WizardField::Document(DocumentKind::TaxId),
                WizardField::Document(DocumentKind::InsuranceCertificate),
                WizardField::PaymentMethod,
            ];
            for field in fields {
                assert_eq!(field.name().parse::<WizardField>(), Ok(field));
            }
        }

        #[test]
        fn test_unknown_name_is_rejected() {
            let err = "promo_code".parse::<WizardField>().unwrap_err();
            assert_eq!(err, UnknownField("promo_code".to_string()));
            assert_eq!(err.to_string(), "unknown wizard field: promo_code");
        }

        #[test]
        fn test_only_address_is_multiline() {
            assert!(WizardField::DeliveryAddress.is_multiline());
            assert!(!WizardField::StartDate.is_multiline());
        }
    }

    mod form_data {
        use super::*;

        #[test]
        fn test_malformed_dates_read_as_unset() {
            let mut form = FormData::default();
            form.set(WizardField::StartDate, "11/01/2024".to_string());
            form.set(WizardField::EndDate, "tomorrow".to_string());
            assert_eq!(form.start(), None);
            assert_eq!(form.end(), None);
            // The raw text is still kept
            assert_eq!(form.start_date, "11/01/2024");
            assert!(form.has_dates());
        }

        #[test]
        fn test_valid_dates_parse() {
            let mut form = FormData::default();
            form.set(WizardField::StartDate, "2024-11-01".to_string());
            assert_eq!(form.start(), NaiveDate::from_ymd_opt(2024, 11, 1));
        }

        #[test]
        fn test_document_slot_replace_and_clear() {
            let mut form = FormData::default();
            let field = WizardField::Document(DocumentKind::TaxId);

            form.set(field, "tin-old.pdf".to_string());
            form.set(field, "tin.pdf".to_string());
            assert_eq!(form.documents.len(), 1);
            assert_eq!(form.document(DocumentKind::TaxId), Some("tin.pdf"));

            form.set(field, String::new());
            assert!(form.documents.is_empty());
            assert_eq!(form.text(field), "");
        }

        #[test]
        fn test_with_period_sets_only_period() {
            let form = FormData::with_period(RentalPeriod::Weekly);
            assert_eq!(form.rental_period, RentalPeriod::Weekly);
            assert!(form.start_date.is_empty());
            assert!(form.documents.is_empty());
        }
    }

    #[test]
    fn test_optional_document_is_insurance() {
        let optional: Vec<_> = DocumentKind::ALL
            .into_iter()
            .filter(|k| k.is_optional())
            .collect();
        assert_eq!(optional, vec![DocumentKind::InsuranceCertificate]);
    }
}
