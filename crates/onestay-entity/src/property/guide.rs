//! Guest guide sections attached to every property.
//!
//! The guide is stored as a single JSONB document. Every section carries
//! an `enabled` flag; a newly created property gets all sections disabled
//! with sane defaults, and owners fill them in over time. Sections are
//! always replaced wholesale on update, never merged field by field.

use serde::{Deserialize, Serialize};

/// The complete guest guide for a property.
///
/// All sections are always present in the document. Missing sections in
/// stored JSON (older documents) deserialize to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyGuide {
    pub check_in_out: CheckInOutSection,
    pub wifi: WifiSection,
    pub equipment: EquipmentSection,
    pub instructions: InstructionsSection,
    pub rules: RulesSection,
    pub contacts: ContactsSection,
    pub local_recommendations: LocalRecommendationsSection,
    pub parking: ParkingSection,
    pub transport: TransportSection,
    pub security: SecuritySection,
    pub services: ServicesSection,
    pub baby_kids: BabyKidsSection,
    pub pets: PetsSection,
    pub entertainment: EntertainmentSection,
    pub outdoor: OutdoorSection,
    pub neighborhood: NeighborhoodSection,
    pub emergency: EmergencySection,
}

/// Arrival and departure logistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInOutSection {
    pub enabled: bool,
    /// `"HH:mm"` format.
    pub check_in_time: Option<String>,
    /// `"HH:mm"` format.
    pub check_out_time: Option<String>,
    pub self_check_in: bool,
    pub early_check_in: bool,
    pub late_check_out: bool,
    pub check_in_instructions: Option<String>,
    pub check_out_instructions: Option<String>,
    pub key_location: Option<String>,
    pub access_code: Option<String>,
    pub lockbox_code: Option<String>,
    pub building_code: Option<String>,
    pub intercom_code: Option<String>,
    pub parking_code: Option<String>,
    pub gate_code: Option<String>,
}

/// Wi-Fi access details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiSection {
    pub enabled: bool,
    pub network_name: Option<String>,
    pub password: Option<String>,
    pub router_location: Option<String>,
    pub reset_instructions: Option<String>,
    pub notes: Option<String>,
}

/// A single piece of equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    /// One of: bedroom, bathroom, kitchen, living, outdoor, baby, work, other.
    pub category: String,
}

/// Available equipment, grouped by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentSection {
    pub enabled: bool,
    pub items: Vec<EquipmentItem>,
}

/// Usage instructions for a single appliance or feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionItem {
    pub enabled: bool,
    pub content: Option<String>,
}

/// Per-appliance usage instructions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionsSection {
    pub enabled: bool,
    pub trash: Option<InstructionItem>,
    pub heating: Option<InstructionItem>,
    pub air_conditioning: Option<InstructionItem>,
    pub hot_water: Option<InstructionItem>,
    pub appliances: Option<InstructionItem>,
    pub laundry: Option<InstructionItem>,
    pub dishwasher: Option<InstructionItem>,
    pub oven: Option<InstructionItem>,
    pub coffee_machine: Option<InstructionItem>,
    pub television: Option<InstructionItem>,
    pub sound: Option<InstructionItem>,
    pub blinds: Option<InstructionItem>,
    pub alarm: Option<InstructionItem>,
    pub safe: Option<InstructionItem>,
    pub pool: Option<InstructionItem>,
    pub spa: Option<InstructionItem>,
    pub garden: Option<InstructionItem>,
    pub barbecue: Option<InstructionItem>,
    pub fireplace: Option<InstructionItem>,
    pub other: Option<InstructionItem>,
}

/// House rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesSection {
    pub enabled: bool,
    pub smoking_allowed: bool,
    pub pets_allowed: bool,
    pub parties_allowed: bool,
    pub children_allowed: bool,
    pub max_guests: Option<i32>,
    pub quiet_hours: Option<String>,
    pub house_rules: Vec<String>,
    pub additional_rules: Option<String>,
}

impl Default for RulesSection {
    fn default() -> Self {
        Self {
            enabled: false,
            smoking_allowed: false,
            pets_allowed: false,
            parties_allowed: false,
            children_allowed: true,
            max_guests: None,
            quiet_hours: None,
            house_rules: Vec::new(),
            additional_rules: None,
        }
    }
}

/// A useful contact for guests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    /// One of: host, concierge, cleaning, maintenance, emergency,
    /// neighbor, other.
    #[serde(rename = "type")]
    pub contact_type: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// Contact list shown to guests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsSection {
    pub enabled: bool,
    pub contacts: Vec<Contact>,
}

/// A local place recommended by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    /// One of: restaurant, cafe, bar, bakery, grocery, market, pharmacy,
    /// doctor, hospital, attraction, beach, park, sport, shopping,
    /// nightlife, culture, other.
    pub category: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub distance: Option<String>,
    /// 1 to 5.
    pub rating: Option<f64>,
}

/// Host-curated local recommendations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalRecommendationsSection {
    pub enabled: bool,
    pub recommendations: Vec<Recommendation>,
}

/// Parking availability and access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkingSection {
    pub enabled: bool,
    pub available: bool,
    /// One of: street, garage, driveway, private, public.
    #[serde(rename = "type")]
    pub parking_type: Option<String>,
    pub free: bool,
    pub price: Option<String>,
    pub instructions: Option<String>,
    pub access_code: Option<String>,
}

/// Nearby public transport options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSection {
    pub enabled: bool,
    pub nearest_bus: Option<String>,
    pub nearest_metro: Option<String>,
    pub nearest_train: Option<String>,
    pub nearest_tram: Option<String>,
    pub taxi_info: Option<String>,
    pub bike_rental: Option<String>,
    pub car_rental: Option<String>,
    pub airport_shuttle: Option<String>,
    pub walking_info: Option<String>,
}

/// Safety equipment and alarm details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    pub enabled: bool,
    pub has_alarm: bool,
    pub alarm_code: Option<String>,
    pub alarm_instructions: Option<String>,
    pub has_safe: bool,
    pub safe_code: Option<String>,
    pub safe_location: Option<String>,
    pub has_fire_extinguisher: bool,
    pub fire_extinguisher_location: Option<String>,
    pub has_first_aid_kit: bool,
    pub first_aid_kit_location: Option<String>,
    pub has_smoke_detector: bool,
    pub has_carbon_monoxide_detector: bool,
    pub security_notes: Option<String>,
}

/// Included and bookable services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSection {
    pub enabled: bool,
    pub linens_included: bool,
    pub towels_included: bool,
    pub toiletry_included: bool,
    pub cleaning_included: bool,
    pub cleaning_frequency: Option<String>,
    pub breakfast_included: bool,
    pub breakfast_details: Option<String>,
    pub concierge_service: Option<String>,
    pub grocery_delivery: Option<String>,
    pub luggage_storage: bool,
    pub laundry_service: bool,
}

/// Baby and child amenities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BabyKidsSection {
    pub enabled: bool,
    pub has_crib: bool,
    pub has_high_chair: bool,
    pub has_baby_gate: bool,
    pub has_child_proofing: bool,
    pub kids_toys_available: bool,
    pub nearby_playgrounds: Option<String>,
    pub babysitter_contact: Option<String>,
    pub additional_info: Option<String>,
}

/// Pet policy and nearby pet services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetsSection {
    pub enabled: bool,
    pub pets_allowed: bool,
    pub pet_fee: Option<String>,
    pub pet_rules: Option<String>,
    pub dog_walking_areas: Option<String>,
    pub nearby_vet: Option<String>,
    pub nearby_pet_store: Option<String>,
    pub pet_equipment_available: Option<String>,
}

/// TV, streaming, and games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntertainmentSection {
    pub enabled: bool,
    pub has_tv: bool,
    pub tv_channels: Option<String>,
    pub has_netflix: bool,
    pub netflix_instructions: Option<String>,
    pub has_spotify: bool,
    pub spotify_instructions: Option<String>,
    pub has_game_console: bool,
    pub game_console_details: Option<String>,
    pub board_games: Option<String>,
    pub books: Option<String>,
}

/// Outdoor spaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdoorSection {
    pub enabled: bool,
    pub has_garden: bool,
    pub garden_info: Option<String>,
    pub has_terrace: bool,
    pub terrace_info: Option<String>,
    pub has_balcony: bool,
    pub balcony_info: Option<String>,
    pub has_pool: bool,
    pub pool_info: Option<String>,
    pub pool_rules: Option<String>,
    pub has_spa: bool,
    pub spa_info: Option<String>,
    pub has_barbecue: bool,
    pub barbecue_info: Option<String>,
}

/// Neighborhood character and surroundings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborhoodSection {
    pub enabled: bool,
    pub description: Option<String>,
    /// One of: quiet, moderate, lively.
    pub noise_level: Option<String>,
    pub neighbor_info: Option<String>,
    pub nearby_attractions: Option<String>,
    pub safety_tips: Option<String>,
}

/// Emergency numbers and nearest medical services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencySection {
    pub enabled: bool,
    pub emergency_number: Option<String>,
    pub police_number: Option<String>,
    pub fire_number: Option<String>,
    pub ambulance_number: Option<String>,
    pub nearest_hospital: Option<String>,
    pub nearest_hospital_address: Option<String>,
    pub nearest_pharmacy: Option<String>,
    pub nearest_pharmacy_hours: Option<String>,
    pub doctor_on_call: Option<String>,
    pub additional_emergency_info: Option<String>,
}

/// Partial guide update. Each provided section replaces the stored one
/// wholesale; absent sections are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyGuideUpdate {
    pub check_in_out: Option<CheckInOutSection>,
    pub wifi: Option<WifiSection>,
    pub equipment: Option<EquipmentSection>,
    pub instructions: Option<InstructionsSection>,
    pub rules: Option<RulesSection>,
    pub contacts: Option<ContactsSection>,
    pub local_recommendations: Option<LocalRecommendationsSection>,
    pub parking: Option<ParkingSection>,
    pub transport: Option<TransportSection>,
    pub security: Option<SecuritySection>,
    pub services: Option<ServicesSection>,
    pub baby_kids: Option<BabyKidsSection>,
    pub pets: Option<PetsSection>,
    pub entertainment: Option<EntertainmentSection>,
    pub outdoor: Option<OutdoorSection>,
    pub neighborhood: Option<NeighborhoodSection>,
    pub emergency: Option<EmergencySection>,
}

impl PropertyGuideUpdate {
    /// Whether no section is being replaced.
    pub fn is_empty(&self) -> bool {
        self.check_in_out.is_none()
            && self.wifi.is_none()
            && self.equipment.is_none()
            && self.instructions.is_none()
            && self.rules.is_none()
            && self.contacts.is_none()
            && self.local_recommendations.is_none()
            && self.parking.is_none()
            && self.transport.is_none()
            && self.security.is_none()
            && self.services.is_none()
            && self.baby_kids.is_none()
            && self.pets.is_none()
            && self.entertainment.is_none()
            && self.outdoor.is_none()
            && self.neighborhood.is_none()
            && self.emergency.is_none()
    }

    /// Applies the provided sections onto `guide`.
    pub fn apply(self, guide: &mut PropertyGuide) {
        if let Some(section) = self.check_in_out {
            guide.check_in_out = section;
        }
        if let Some(section) = self.wifi {
            guide.wifi = section;
        }
        if let Some(section) = self.equipment {
            guide.equipment = section;
        }
        if let Some(section) = self.instructions {
            guide.instructions = section;
        }
        if let Some(section) = self.rules {
            guide.rules = section;
        }
        if let Some(section) = self.contacts {
            guide.contacts = section;
        }
        if let Some(section) = self.local_recommendations {
            guide.local_recommendations = section;
        }
        if let Some(section) = self.parking {
            guide.parking = section;
        }
        if let Some(section) = self.transport {
            guide.transport = section;
        }
        if let Some(section) = self.security {
            guide.security = section;
        }
        if let Some(section) = self.services {
            guide.services = section;
        }
        if let Some(section) = self.baby_kids {
            guide.baby_kids = section;
        }
        if let Some(section) = self.pets {
            guide.pets = section;
        }
        if let Some(section) = self.entertainment {
            guide.entertainment = section;
        }
        if let Some(section) = self.outdoor {
            guide.outdoor = section;
        }
        if let Some(section) = self.neighborhood {
            guide.neighborhood = section;
        }
        if let Some(section) = self.emergency {
            guide.emergency = section;
        }
    }
}
