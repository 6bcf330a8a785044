//! Trait abstraction for marketplace data access to enable mocking in tests

use super::CatalogError;
use crate::state::wizard::EquipmentOffer;
use crate::state::{
    AdminDashboardData, ClientDashboardData, EquipmentDetail, EquipmentSummary, LandingContent,
    VendorDashboardData,
};
use async_trait::async_trait;

/// Read-only source of marketplace data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Landing page categories, vendors and highlights
    async fn landing(&self) -> Result<LandingContent, CatalogError>;

    /// Every listed piece of equipment, in catalog order
    async fn list_equipment(&self) -> Result<Vec<EquipmentSummary>, CatalogError>;

    /// Full page for one piece of equipment
    async fn equipment_detail(&self, id: &str) -> Result<EquipmentDetail, CatalogError>;

    /// Price table used by the rental wizard
    async fn rental_offer(&self, id: &str) -> Result<EquipmentOffer, CatalogError> {
        Ok(self.equipment_detail(id).await?.offer())
    }

    async fn client_dashboard(&self) -> Result<ClientDashboardData, CatalogError>;

    async fn vendor_dashboard(&self) -> Result<VendorDashboardData, CatalogError>;

    async fn admin_dashboard(&self) -> Result<AdminDashboardData, CatalogError>;
}
