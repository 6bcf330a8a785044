//! Built-in and file-backed marketplace fixtures

use super::{CatalogError, CatalogSource};
use crate::state::{
    AdminDashboardData, Availability, CategorySummary, ClientDashboardData, EarningsSummary,
    EquipmentDetail, EquipmentSummary, Feature, IncomingRequest, InventoryItem, LandingContent,
    Notification, Priority, RentalRecord, RentalRequest, RentalStatus, RequestStatus,
    Specification, Stat, Trend, VendorApplication, VendorDashboardData, VendorProfile,
    VendorStatus, VerificationItem,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a fixture catalog serves; also the JSON fixture file layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceFixtures {
    pub landing: LandingContent,
    pub equipment: Vec<EquipmentSummary>,
    pub details: Vec<EquipmentDetail>,
    pub client: ClientDashboardData,
    pub vendor: VendorDashboardData,
    pub admin: AdminDashboardData,
}

/// Catalog backed by in-memory fixtures
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    fixtures: MarketplaceFixtures,
}

impl FixtureCatalog {
    pub fn new(fixtures: MarketplaceFixtures) -> Self {
        Self { fixtures }
    }

    /// Catalog with the bundled sample marketplace
    pub fn builtin() -> Self {
        Self::new(MarketplaceFixtures::builtin())
    }

    /// Load fixtures from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded marketplace fixtures from {}", path.display());
        Ok(Self::new(fixtures))
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn landing(&self) -> Result<LandingContent, CatalogError> {
        Ok(self.fixtures.landing.clone())
    }

    async fn list_equipment(&self) -> Result<Vec<EquipmentSummary>, CatalogError> {
        Ok(self.fixtures.equipment.clone())
    }

    async fn equipment_detail(&self, id: &str) -> Result<EquipmentDetail, CatalogError> {
        self.fixtures
            .details
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("equipment", id))
    }

    async fn client_dashboard(&self) -> Result<ClientDashboardData, CatalogError> {
        Ok(self.fixtures.client.clone())
    }

    async fn vendor_dashboard(&self) -> Result<VendorDashboardData, CatalogError> {
        Ok(self.fixtures.vendor.clone())
    }

    async fn admin_dashboard(&self) -> Result<AdminDashboardData, CatalogError> {
        Ok(self.fixtures.admin.clone())
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: s(label),
        value: s(value),
        change: None,
        trend: None,
    }
}

fn trending_stat(label: &str, value: &str, change: &str, trend: Trend) -> Stat {
    Stat {
        change: Some(s(change)),
        trend: Some(trend),
        ..stat(label, value)
    }
}

fn spec(label: &str, value: &str) -> Specification {
    Specification {
        label: s(label),
        value: s(value),
    }
}

const IMG_WIRELINE: &str = "https://images.unsplash.com/photo-1609373235983-bef55d06268d";
const IMG_PUMP: &str = "https://images.unsplash.com/photo-1760776066784-dfe3e7b45b3b";
const IMG_WELLHEAD: &str = "https://images.unsplash.com/photo-1580668304124-945a763a7442";
const IMG_DRILLING: &str = "https://images.unsplash.com/photo-1760009436767-d154e930e55c";
const IMG_COMPRESSOR: &str = "https://images.unsplash.com/photo-1731397979689-b8ecfffd6025";
const IMG_RIG: &str = "https://images.unsplash.com/photo-1750515742085-f2eb9ecd6742";

/// Listing card plus the pricing and vendor data behind its detail page
struct Listing {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    vendor: &'static str,
    rating: f32,
    reviews: u32,
    day: i64,
    week: i64,
    month: i64,
    country: &'static str,
    city: &'static str,
    show_price: bool,
    images: [&'static str; 3],
}

const LISTINGS: [Listing; 6] = [
    Listing {
        id: "EQ-001",
        name: "Wireline Tools - T-Series Complete Kit",
        category: "Wireline Tools",
        vendor: "Schlumberger",
        rating: 4.8,
        reviews: 24,
        day: 1250,
        week: 7500,
        month: 28000,
        country: "Nigeria",
        city: "Lagos",
        show_price: true,
        images: [IMG_WIRELINE, IMG_RIG, IMG_DRILLING],
    },
    Listing {
        id: "EQ-002",
        name: "Centrifugal Pump 500HP Industrial",
        category: "Pumps",
        vendor: "Halliburton",
        rating: 4.9,
        reviews: 18,
        day: 890,
        week: 5340,
        month: 19900,
        country: "Angola",
        city: "Luanda",
        show_price: true,
        images: [IMG_PUMP, IMG_RIG, IMG_COMPRESSOR],
    },
    Listing {
        id: "EQ-003",
        name: "API 6A Wellhead Equipment Complete",
        category: "Wellhead Equipment",
        vendor: "Baker Hughes",
        rating: 4.7,
        reviews: 15,
        day: 2100,
        week: 12600,
        month: 47000,
        country: "Nigeria",
        city: "Port Harcourt",
        show_price: false,
        images: [IMG_WELLHEAD, IMG_RIG, IMG_WIRELINE],
    },
    Listing {
        id: "EQ-004",
        name: "Fishing Tools Complete Set",
        category: "Fishing Tools",
        vendor: "Weatherford",
        rating: 4.6,
        reviews: 32,
        day: 750,
        week: 4500,
        month: 16800,
        country: "Ghana",
        city: "Takoradi",
        show_price: false,
        images: [IMG_DRILLING, IMG_RIG, IMG_WELLHEAD],
    },
    Listing {
        id: "EQ-005",
        name: "Industrial Air Compressor 1000 CFM",
        category: "Compressors",
        vendor: "NOV",
        rating: 4.8,
        reviews: 21,
        day: 1450,
        week: 8700,
        month: 32500,
        country: "South Africa",
        city: "Cape Town",
        show_price: false,
        images: [IMG_COMPRESSOR, IMG_PUMP, IMG_RIG],
    },
    Listing {
        id: "EQ-006",
        name: "Hydraulic Pump Unit - High Pressure",
        category: "Pumps",
        vendor: "Tenaris",
        rating: 4.9,
        reviews: 27,
        day: 1120,
        week: 6720,
        month: 25100,
        country: "Egypt",
        city: "Alexandria",
        show_price: true,
        images: [IMG_RIG, IMG_PUMP, IMG_DRILLING],
    },
];

impl Listing {
    fn summary(&self) -> EquipmentSummary {
        EquipmentSummary {
            id: s(self.id),
            name: s(self.name),
            category: s(self.category),
            vendor: s(self.vendor),
            rating: self.rating,
            reviews: self.reviews,
            price_per_day: self.day,
            location: s(self.country),
            availability: Availability::Available,
            show_price: self.show_price,
            image_url: s(self.images[0]),
        }
    }

    fn detail(&self) -> EquipmentDetail {
        let (description, specifications, features) = category_content(self.category);
        let (vendor_reviews, years, total) = vendor_stats(self.vendor);
        EquipmentDetail {
            id: s(self.id),
            name: s(self.name),
            category: s(self.category),
            description,
            vendor: VendorProfile {
                name: s(self.vendor),
                rating: self.rating,
                reviews: vendor_reviews,
                verified: true,
                years_in_business: years,
                total_equipment: total,
            },
            price_per_day: self.day,
            price_per_week: self.week,
            price_per_month: self.month,
            location: format!("{}, {}", self.city, self.country),
            availability: Availability::Available,
            images: self.images.iter().map(|i| s(i)).collect(),
            specifications,
            features,
        }
    }
}

fn vendor_stats(vendor: &str) -> (u32, u32, u32) {
    match vendor {
        "Schlumberger" => (156, 15, 234),
        "Halliburton" => (131, 18, 198),
        "Baker Hughes" => (97, 12, 176),
        "Weatherford" => (88, 10, 143),
        "NOV" => (74, 9, 121),
        _ => (52, 7, 96),
    }
}

fn category_content(category: &str) -> (String, Vec<Specification>, Vec<String>) {
    let common = [
        "Maintenance records included",
        "Technical support available",
        "Delivery and setup included",
        "Insurance coverage available",
        "24/7 emergency support",
    ];
    let (description, specs, lead) = match category {
        "Wireline Tools" => (
            "Professional wireline tools complete kit suitable for deep well operations. \
             Includes all necessary components for safe and efficient wireline operations \
             in oil and gas fields.",
            vec![
                spec("Weight Capacity", "50,000 lbs"),
                spec("Operating Temperature", "-20°C to 150°C"),
                spec("Max Depth", "30,000 ft"),
                spec("Pressure Rating", "15,000 PSI"),
                spec("Material", "High-grade Steel"),
                spec("Certification", "API 7G, ISO 9001"),
            ],
            "Complete wireline tool set",
        ),
        "Pumps" => (
            "Heavy-duty pump unit for transfer, injection and well servicing. Skid mounted \
             and ready for field hookup.",
            vec![
                spec("Power", "500 HP"),
                spec("Max Flow", "2,400 GPM"),
                spec("Pressure Rating", "10,000 PSI"),
                spec("Drive", "Diesel / Electric"),
                spec("Certification", "API 610"),
            ],
            "Skid-mounted pump package",
        ),
        "Wellhead Equipment" => (
            "Complete API 6A wellhead assembly with casing head, tubing head and valves \
             rated for sour service.",
            vec![
                spec("Pressure Rating", "10,000 PSI"),
                spec("Temperature Class", "P+U"),
                spec("Material Class", "DD-NL"),
                spec("Certification", "API 6A, PSL 3"),
            ],
            "Full wellhead stack",
        ),
        "Fishing Tools" => (
            "Fishing tools set for recovering lost equipment and clearing obstructions \
             downhole.",
            vec![
                spec("Hole Size Range", "4-1/2\" to 12-1/4\""),
                spec("Tensile Rating", "400,000 lbs"),
                spec("Connections", "API Regular"),
                spec("Certification", "API 7-1"),
            ],
            "Overshots, spears and jars",
        ),
        _ => (
            "Industrial air compressor for drilling, well testing and pneumatic service.",
            vec![
                spec("Free Air Delivery", "1,000 CFM"),
                spec("Working Pressure", "350 PSI"),
                spec("Engine", "Tier 4 Diesel"),
                spec("Certification", "ISO 9001"),
            ],
            "Trailer-mounted unit",
        ),
    };
    let features = std::iter::once(lead)
        .chain(common)
        .map(s)
        .collect();
    (s(description), specs, features)
}

impl MarketplaceFixtures {
    /// The bundled sample marketplace
    pub fn builtin() -> Self {
        Self {
            landing: builtin_landing(),
            equipment: LISTINGS.iter().map(Listing::summary).collect(),
            details: LISTINGS.iter().map(Listing::detail).collect(),
            client: builtin_client(),
            vendor: builtin_vendor(),
            admin: builtin_admin(),
        }
    }
}

fn builtin_landing() -> LandingContent {
    let category = |name: &str, count| CategorySummary {
        name: s(name),
        count,
    };
    let feature = |title: &str, description: &str| Feature {
        title: s(title),
        description: s(description),
    };
    LandingContent {
        categories: vec![
            category("Wireline Tools", 234),
            category("Fishing Tools", 189),
            category("Wellhead Equipment", 156),
            category("Pumps", 312),
            category("Compressors", 198),
        ],
        vendors: [
            "Schlumberger",
            "Halliburton",
            "Baker Hughes",
            "Weatherford",
            "NOV",
            "Tenaris",
        ]
        .into_iter()
        .map(s)
        .collect(),
        features: vec![
            feature(
                "Verified Vendors",
                "All vendors are verified and compliant with industry standards",
            ),
            feature("Fast Delivery", "Quick equipment delivery across Africa"),
            feature(
                "Quality Assured",
                "Premium quality equipment with maintenance records",
            ),
        ],
    }
}

fn builtin_client() -> ClientDashboardData {
    let request = |id: &str, equipment: &str, vendor: &str, status, date: &str, amount: &str| {
        RentalRequest {
            id: s(id),
            equipment: s(equipment),
            vendor: s(vendor),
            status,
            date: s(date),
            amount: s(amount),
        }
    };
    let notification = |id, message: &str, time: &str, unread| Notification {
        id,
        message: s(message),
        time: s(time),
        unread,
    };
    ClientDashboardData {
        stats: vec![
            stat("Active Rentals", "3"),
            stat("Pending Requests", "1"),
            stat("Completed", "12"),
            stat("Total Spent", "$45K"),
        ],
        requests: vec![
            request(
                "REQ-001",
                "Wireline Tools - Baker Hughes T-Series",
                "Schlumberger",
                RequestStatus::Pending,
                "2024-11-25",
                "$1,250/day",
            ),
            request(
                "REQ-002",
                "Centrifugal Pump 500HP",
                "Halliburton",
                RequestStatus::Approved,
                "2024-11-22",
                "$890/day",
            ),
            request(
                "REQ-003",
                "Wellhead Equipment - API 6A",
                "Baker Hughes",
                RequestStatus::InTransit,
                "2024-11-20",
                "$2,100/day",
            ),
            request(
                "REQ-004",
                "Fishing Tools Kit",
                "Weatherford",
                RequestStatus::Completed,
                "2024-11-15",
                "$750/day",
            ),
        ],
        notifications: vec![
            notification(1, "Your rental request REQ-002 has been approved", "2 hours ago", true),
            notification(2, "Payment confirmation for REQ-003", "5 hours ago", true),
            notification(3, "Equipment delivery scheduled for tomorrow", "1 day ago", false),
            notification(4, "New vendor response on REQ-001", "2 days ago", false),
        ],
    }
}

fn builtin_vendor() -> VendorDashboardData {
    let item = |id: &str, name: &str, category: &str, availability, day, week, rentals| {
        InventoryItem {
            id: s(id),
            name: s(name),
            category: s(category),
            availability,
            rate_per_day: day,
            rate_per_week: week,
            total_rentals: rentals,
        }
    };
    let request = |id: &str, client: &str, equipment: &str, status, date: &str| IncomingRequest {
        id: s(id),
        client: s(client),
        equipment: s(equipment),
        status,
        date: s(date),
    };
    VendorDashboardData {
        stats: vec![
            stat("Total Equipment", "24"),
            stat("Active Rentals", "8"),
            stat("This Month", "$45K"),
            stat("Pending Requests", "3"),
        ],
        inventory: vec![
            item(
                "INV-001",
                "Wireline Tools - T-Series Complete Kit",
                "Wireline Tools",
                Availability::Available,
                1250,
                7500,
                24,
            ),
            item(
                "INV-002",
                "Centrifugal Pump 500HP",
                "Pumps",
                Availability::Rented,
                890,
                5340,
                18,
            ),
            item(
                "INV-003",
                "API 6A Wellhead Equipment",
                "Wellhead Equipment",
                Availability::Available,
                2100,
                12600,
                15,
            ),
            item(
                "INV-004",
                "Fishing Tools Complete Set",
                "Fishing Tools",
                Availability::Maintenance,
                750,
                4500,
                32,
            ),
        ],
        earnings: EarningsSummary {
            this_month: 45280,
            last_month: 38950,
            this_year: 425680,
            pending: 12500,
        },
        requests: vec![
            request("REQ-105", "Shell Nigeria", "Wireline Tools", RequestStatus::Pending, "2024-11-27"),
            request("REQ-104", "Total E&P", "Centrifugal Pump", RequestStatus::Approved, "2024-11-26"),
            request(
                "REQ-103",
                "Chevron",
                "Wellhead Equipment",
                RequestStatus::Completed,
                "2024-11-25",
            ),
        ],
    }
}

fn builtin_admin() -> AdminDashboardData {
    let vendor = |id: &str, name: &str, status, joined: &str, equipment, revenue: &str| {
        VendorApplication {
            id: s(id),
            name: s(name),
            status,
            date_joined: s(joined),
            equipment,
            revenue: s(revenue),
        }
    };
    let rental = |id: &str, equipment: &str, client: &str, vendor: &str, status, value, start: &str| {
        RentalRecord {
            id: s(id),
            equipment: s(equipment),
            client: s(client),
            vendor: s(vendor),
            status,
            value,
            start_date: s(start),
        }
    };
    let verification = |id: &str, vendor: &str, document: &str, submitted: &str, priority| {
        VerificationItem {
            id: s(id),
            vendor_name: s(vendor),
            document: s(document),
            submitted: s(submitted),
            priority,
        }
    };
    AdminDashboardData {
        stats: vec![
            trending_stat("Total Vendors", "248", "+12%", Trend::Up),
            trending_stat("Active Rentals", "1,432", "+8%", Trend::Up),
            trending_stat("Monthly Revenue", "$2.4M", "+15%", Trend::Up),
            trending_stat("Pending Verifications", "23", "-5%", Trend::Down),
        ],
        vendors: vec![
            vendor(
                "V-001",
                "Atlas Equipment Ltd",
                VendorStatus::PendingVerification,
                "2024-11-25",
                45,
                "$125K",
            ),
            vendor("V-002", "Delta Oil Services", VendorStatus::Verified, "2024-11-20", 78, "$298K"),
            vendor("V-003", "Omega Drilling Co.", VendorStatus::UnderReview, "2024-11-18", 23, "$87K"),
        ],
        rentals: vec![
            rental(
                "RNT-1024",
                "Wireline Tools Complete Kit",
                "Shell Nigeria",
                "Schlumberger",
                RentalStatus::Active,
                45000,
                "2024-11-20",
            ),
            rental(
                "RNT-1023",
                "Centrifugal Pump 500HP",
                "Total E&P",
                "Halliburton",
                RentalStatus::Active,
                32000,
                "2024-11-18",
            ),
            rental(
                "RNT-1022",
                "Wellhead Equipment API 6A",
                "Chevron",
                "Baker Hughes",
                RentalStatus::Completed,
                78000,
                "2024-11-10",
            ),
        ],
        verifications: vec![
            verification(
                "VER-045",
                "Apex Drilling Services",
                "Business License",
                "2024-11-27",
                Priority::High,
            ),
            verification(
                "VER-044",
                "Prime Equipment Co.",
                "Insurance Certificate",
                "2024-11-26",
                Priority::Medium,
            ),
            verification(
                "VER-043",
                "Summit Oil Tools",
                "Tax Registration",
                "2024-11-25",
                Priority::High,
            ),
        ],
    }
}
