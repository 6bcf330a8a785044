//! Rental request wizard
//!
//! A four-step linear flow: confirm the equipment, choose dates and billing
//! period, attach documents, then confirm and pick a payment method. The
//! wizard accepts any input; incomplete or contradictory values flow into
//! the price estimate as zero or negative totals rather than blocking a step.

mod form;
mod pricing;
mod session;
mod step;

pub use form::{
    DocumentKind, DocumentRef, FormData, RentalPeriod, UnknownField, WizardField, DATE_FORMAT,
    PAYMENT_METHODS,
};
pub use pricing::{
    billed_units, compute_total, format_money, rental_days, EquipmentOffer, Money,
    PriceBreakdown, DELIVERY_FEE, INSURANCE_FEE,
};
pub use session::{WizardButton, WizardSession};
pub use step::WizardStep;

/// Result of pressing Continue / Submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardTransition {
    /// Moved forward to this step
    Advanced(WizardStep),
    /// Continue was pressed on the last step; the caller takes over
    Submitted,
}

/// Fields edited on each step, in focus order
pub fn step_fields(step: WizardStep) -> &'static [WizardField] {
    match step {
        WizardStep::SelectEquipment => &[],
        WizardStep::ChooseDates => &[
            WizardField::RentalPeriod,
            WizardField::StartDate,
            WizardField::EndDate,
            WizardField::DeliveryAddress,
        ],
        WizardStep::UploadDocuments => &[
            WizardField::Document(DocumentKind::CompanyRegistration),
            WizardField::Document(DocumentKind::TaxId),
            WizardField::Document(DocumentKind::InsuranceCertificate),
        ],
        WizardStep::Confirm => &[WizardField::PaymentMethod],
    }
}

/// State of one rental request attempt
#[derive(Debug, Clone)]
pub struct RentalWizard {
    step: WizardStep,
    form: FormData,
    offer: EquipmentOffer,
    /// Identifier the wizard was opened with, shown as-is
    equipment_id: Option<String>,
}

impl RentalWizard {
    pub fn new(
        offer: EquipmentOffer,
        equipment_id: Option<String>,
        period: RentalPeriod,
    ) -> Self {
        Self {
            step: WizardStep::default(),
            form: FormData::with_period(period),
            offer,
            equipment_id,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn offer(&self) -> &EquipmentOffer {
        &self.offer
    }

    pub fn equipment_id(&self) -> Option<&str> {
        self.equipment_id.as_deref()
    }

    /// Replace one form field. Never rejects a value.
    pub fn set_field(&mut self, field: WizardField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = field.name(), "wizard field updated");
        self.form.set(field, value);
    }

    /// Move one step forward, or signal submission from the last step
    pub fn advance(&mut self) -> WizardTransition {
        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = self.step.number(), to = next.number(), "wizard advanced");
                self.step = next;
                WizardTransition::Advanced(next)
            }
            None => {
                tracing::info!(
                    equipment = self.offer.equipment_id.as_str(),
                    period = self.form.rental_period.as_str(),
                    "rental request submitted"
                );
                WizardTransition::Submitted
            }
        }
    }

    /// Move one step back. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                tracing::debug!(from = self.step.number(), to = prev.number(), "wizard retreated");
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Rental cost for the current dates and period
    pub fn compute_total(&self) -> Money {
        compute_total(
            self.form.start(),
            self.form.end(),
            self.form.rental_period,
            &self.offer,
        )
    }

    /// Line items for the confirmation step
    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::new(self.compute_total())
    }

    /// The date step shows an estimate once both dates hold text
    pub fn shows_estimate(&self) -> bool {
        self.form.has_dates()
    }
}
