//! Marketplace records served by the catalog

use super::wizard::{EquipmentOffer, Money};
use serde::{Deserialize, Serialize};

/// Equipment availability as shown on badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Rented,
    Maintenance,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// Direction of a stat's change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Headline figure on a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Landing page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingContent {
    pub categories: Vec<CategorySummary>,
    pub vendors: Vec<String>,
    pub features: Vec<Feature>,
}

/// One card in the equipment listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub vendor: String,
    pub rating: f32,
    pub reviews: u32,
    pub price_per_day: Money,
    pub location: String,
    pub availability: Availability,
    /// Vendors may hide the rate and take quote requests instead
    pub show_price: bool,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    pub rating: f32,
    pub reviews: u32,
    pub verified: bool,
    pub years_in_business: u32,
    pub total_equipment: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// Full equipment page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub vendor: VendorProfile,
    pub price_per_day: Money,
    pub price_per_week: Money,
    pub price_per_month: Money,
    pub location: String,
    pub availability: Availability,
    pub images: Vec<String>,
    pub specifications: Vec<Specification>,
    pub features: Vec<String>,
}

impl EquipmentDetail {
    /// Price table handed to the rental wizard
    pub fn offer(&self) -> EquipmentOffer {
        EquipmentOffer {
            equipment_id: self.id.clone(),
            name: self.name.clone(),
            vendor: self.vendor.name.clone(),
            price_per_day: self.price_per_day,
            price_per_week: self.price_per_week,
            price_per_month: self.price_per_month,
        }
    }
}

/// Lifecycle of a client's rental request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    #[serde(rename = "In Transit")]
    InTransit,
    Completed,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::InTransit => "In Transit",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub id: String,
    pub equipment: String,
    pub vendor: String,
    pub status: RequestStatus,
    pub date: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub time: String,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDashboardData {
    pub stats: Vec<Stat>,
    pub requests: Vec<RentalRequest>,
    pub notifications: Vec<Notification>,
}

impl ClientDashboardData {
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.unread).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub availability: Availability,
    pub rate_per_day: Money,
    pub rate_per_week: Money,
    pub total_rentals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub this_month: Money,
    pub last_month: Money,
    pub this_year: Money,
    pub pending: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingRequest {
    pub id: String,
    pub client: String,
    pub equipment: String,
    pub status: RequestStatus,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorDashboardData {
    pub stats: Vec<Stat>,
    pub inventory: Vec<InventoryItem>,
    pub earnings: EarningsSummary,
    pub requests: Vec<IncomingRequest>,
}

/// Vendor onboarding state seen by administrators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorStatus {
    Verified,
    #[serde(rename = "Pending Verification")]
    PendingVerification,
    #[serde(rename = "Under Review")]
    UnderReview,
}

impl VendorStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::PendingVerification => "Pending Verification",
            Self::UnderReview => "Under Review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorApplication {
    pub id: String,
    pub name: String,
    pub status: VendorStatus,
    pub date_joined: String,
    pub equipment: u32,
    pub revenue: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Active,
    Completed,
}

impl RentalStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub id: String,
    pub equipment: String,
    pub client: String,
    pub vendor: String,
    pub status: RentalStatus,
    pub value: Money,
    pub start_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationItem {
    pub id: String,
    pub vendor_name: String,
    pub document: String,
    pub submitted: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardData {
    pub stats: Vec<Stat>,
    pub vendors: Vec<VendorApplication>,
    pub rentals: Vec<RentalRecord>,
    pub verifications: Vec<VerificationItem>,
}

impl AdminDashboardData {
    /// Verification queue, most urgent first
    pub fn verifications_by_priority(&self) -> Vec<&VerificationItem> {
        let mut items: Vec<_> = self.verifications.iter().collect();
        items.sort_by_key(|v| v.priority);
        items
    }
}
