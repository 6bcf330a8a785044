//! Dashboard menu tabs

/// Client dashboard menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientMenu {
    #[default]
    Dashboard,
    Rentals,
    Requests,
    Documents,
    Payments,
    Profile,
}

/// Vendor dashboard menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorMenu {
    #[default]
    Dashboard,
    Inventory,
    Requests,
    Earnings,
    Verification,
    Support,
}

/// Admin dashboard menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminMenu {
    #[default]
    Dashboard,
    Vendors,
    Rentals,
    Payments,
    Verification,
    Analytics,
    Settings,
}

/// Shared behaviour of the dashboard sidebars
pub trait DashboardMenu: Copy + PartialEq + Sized + 'static {
    const ITEMS: &'static [Self];

    fn label(self) -> &'static str;

    fn index(self) -> usize {
        Self::ITEMS.iter().position(|m| *m == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ITEMS[(self.index() + 1) % Self::ITEMS.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ITEMS.len();
        Self::ITEMS[(self.index() + len - 1) % len]
    }
}

impl DashboardMenu for ClientMenu {
    const ITEMS: &'static [Self] = &[
        Self::Dashboard,
        Self::Rentals,
        Self::Requests,
        Self::Documents,
        Self::Payments,
        Self::Profile,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Rentals => "Rentals",
            Self::Requests => "Requests",
            Self::Documents => "Documents",
            Self::Payments => "Payments",
            Self::Profile => "Profile",
        }
    }
}

impl DashboardMenu for VendorMenu {
    const ITEMS: &'static [Self] = &[
        Self::Dashboard,
        Self::Inventory,
        Self::Requests,
        Self::Earnings,
        Self::Verification,
        Self::Support,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory",
            Self::Requests => "Requests",
            Self::Earnings => "Earnings",
            Self::Verification => "Verification",
            Self::Support => "Support",
        }
    }
}

impl DashboardMenu for AdminMenu {
    const ITEMS: &'static [Self] = &[
        Self::Dashboard,
        Self::Vendors,
        Self::Rentals,
        Self::Payments,
        Self::Verification,
        Self::Analytics,
        Self::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Vendors => "Vendors",
            Self::Rentals => "Rentals",
            Self::Payments => "Payments",
            Self::Verification => "Verification",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}
