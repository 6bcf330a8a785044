//! Application state definitions

use super::dashboard::{AdminMenu, ClientMenu, VendorMenu};
use super::listing::ListingFilters;
use super::marketplace::{
    AdminDashboardData, ClientDashboardData, EquipmentDetail, EquipmentSummary, LandingContent,
    VendorDashboardData,
};
use super::wizard::WizardSession;
use std::collections::VecDeque;

/// Equipment opened when a view needs one and none was selected
pub const DEFAULT_EQUIPMENT_ID: &str = "EQ-001";

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Landing,
    ClientDashboard,
    VendorDashboard,
    EquipmentListing,
    EquipmentDetails,
    RentalWorkflow,
    AdminDashboard,
}

impl View {
    /// Views skipped when walking back through history
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::RentalWorkflow)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Splash => "",
            View::Landing => "Home",
            View::ClientDashboard => "Client Dashboard",
            View::VendorDashboard => "Vendor Dashboard",
            View::EquipmentListing => "Equipment",
            View::EquipmentDetails => "Equipment Details",
            View::RentalWorkflow => "Rental Request",
            View::AdminDashboard => "Admin Dashboard",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub equipment_id: Option<String>,
}

impl ViewParams {
    pub fn equipment(id: impl Into<String>) -> Self {
        Self {
            equipment_id: Some(id.into()),
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,
    /// Last equipment id passed to a navigation; kept when a later
    /// navigation carries none
    pub selected_equipment_id: Option<String>,

    // Data loaded from the catalog on view entry
    pub landing: Option<LandingContent>,
    pub equipment: Vec<EquipmentSummary>,
    pub equipment_detail: Option<EquipmentDetail>,
    pub client_dashboard: Option<ClientDashboardData>,
    pub vendor_dashboard: Option<VendorDashboardData>,
    pub admin_dashboard: Option<AdminDashboardData>,

    // Selection
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Listing
    pub listing_filters: ListingFilters,
    pub search_active: bool,

    // Details
    pub selected_image: usize,

    // Dashboards
    pub client_menu: ClientMenu,
    pub vendor_menu: VendorMenu,
    pub admin_menu: AdminMenu,

    // Rental request in progress
    pub wizard: Option<WizardSession>,

    // Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Listing results after filters and sort
    pub fn filtered_equipment(&self) -> Vec<&EquipmentSummary> {
        self.listing_filters.apply(&self.equipment)
    }

    /// Listing result under the cursor
    pub fn selected_equipment(&self) -> Option<&EquipmentSummary> {
        self.filtered_equipment()
            .get(self.selected_index)
            .copied()
    }

    /// Equipment id the details and wizard views should show
    pub fn current_equipment_id(&self) -> &str {
        self.selected_equipment_id
            .as_deref()
            .unwrap_or(DEFAULT_EQUIPMENT_ID)
    }

    /// Step to the next photo, wrapping
    pub fn next_image(&mut self) {
        let count = self
            .equipment_detail
            .as_ref()
            .map(|d| d.images.len())
            .unwrap_or(0);
        if count > 0 {
            self.selected_image = (self.selected_image + 1) % count;
        }
    }

    /// Step to the previous photo, wrapping
    pub fn prev_image(&mut self) {
        let count = self
            .equipment_detail
            .as_ref()
            .map(|d| d.images.len())
            .unwrap_or(0);
        if count > 0 {
            self.selected_image = (self.selected_image + count - 1) % count;
        }
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
