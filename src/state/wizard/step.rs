//! Wizard step sequence

/// One step of the rental request wizard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    SelectEquipment,
    ChooseDates,
    UploadDocuments,
    Confirm,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 4] = [
        WizardStep::SelectEquipment,
        WizardStep::ChooseDates,
        WizardStep::UploadDocuments,
        WizardStep::Confirm,
    ];

    /// 1-based step number shown in the progress header
    pub fn number(self) -> u8 {
        match self {
            Self::SelectEquipment => 1,
            Self::ChooseDates => 2,
            Self::UploadDocuments => 3,
            Self::Confirm => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::SelectEquipment),
            2 => Some(Self::ChooseDates),
            3 => Some(Self::UploadDocuments),
            4 => Some(Self::Confirm),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SelectEquipment => "Select Equipment",
            Self::ChooseDates => "Choose Dates",
            Self::UploadDocuments => "Upload Documents",
            Self::Confirm => "Confirm Request",
        }
    }

    /// Following step, `None` on the last one
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Preceding step, `None` on the first one
    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_display_order() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_number_round_trips_valid_range() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
    }

    #[test]
    fn test_next_and_prev_stop_at_edges() {
        assert_eq!(WizardStep::Confirm.next(), None);
        assert_eq!(WizardStep::SelectEquipment.prev(), None);
        assert_eq!(
            WizardStep::ChooseDates.next(),
            Some(WizardStep::UploadDocuments)
        );
        assert_eq!(
            WizardStep::ChooseDates.prev(),
            Some(WizardStep::SelectEquipment)
        );
    }

    #[test]
    fn test_first_and_last() {
        assert!(WizardStep::SelectEquipment.is_first());
        assert!(!WizardStep::SelectEquipment.is_last());
        assert!(WizardStep::Confirm.is_last());
        assert!(!WizardStep::Confirm.is_first());
    }

    #[test]
    fn test_default_is_first_step() {
        assert_eq!(WizardStep::default(), WizardStep::SelectEquipment);
    }
}
