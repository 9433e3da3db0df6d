use serde::{Deserialize, Serialize};

/// Broad class of a property and of a client's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Residential,
    Commercial,
}

/// What the client wants to do with the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Buy,
    Rent,
}

/// Pipeline stage of a client in the agent's book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    New,
    Cold,
    Warm,
    Hot,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyCategory {
    Resale,
    #[serde(rename = "New Project")]
    NewProject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Furnishing {
    Unfurnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    #[serde(rename = "Fully-Furnished")]
    FullyFurnished,
}

/// One preferred area: a main location plus the sub-localities the client
/// would accept within it. An empty sub-location list means anywhere in
/// the main location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPreference {
    pub id: String,
    #[serde(rename = "mainLocation")]
    pub main_location: String,
    #[serde(rename = "subLocations")]
    pub sub_locations: Vec<String>,
}

/// A client's housing requirement: what kind of property they are looking
/// for and within which budget, size, and location envelope.
///
/// Budget and size bounds are taken as given; the engine does not enforce
/// `min <= max` (that is the form layer's job).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    pub intent: Intent,
    pub configurations: Vec<String>,
    #[serde(rename = "minBudget")]
    pub min_budget: f64,
    #[serde(rename = "maxBudget")]
    pub max_budget: f64,
    #[serde(rename = "minSize")]
    pub min_size: f64,
    #[serde(rename = "maxSize")]
    pub max_size: f64,
    pub locations: Vec<LocationPreference>,
}

/// A client in the agent's book, with contact details and their requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(rename = "agentId")]
    pub agent_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub status: ClientStatus,
    #[serde(rename = "cancelReason", default)]
    pub cancel_reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub requirement: Requirement,
}

/// A property in the agent's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(rename = "agentId")]
    pub agent_id: String,
    pub category: PropertyCategory,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    #[serde(rename = "projectName")]
    pub project_name: String,
    pub city: String,
    #[serde(rename = "mainLocation")]
    pub main_location: String,
    #[serde(rename = "subLocation")]
    pub sub_location: String,
    #[serde(rename = "addressText", default)]
    pub address_text: Option<String>,
    pub bhk: String,
    #[serde(rename = "sizeSqft")]
    pub size_sqft: f64,
    pub floor: String,
    pub furnishing: Furnishing,
    #[serde(rename = "parkingCount")]
    pub parking_count: u8,
    pub price: f64,
    #[serde(rename = "brokeragePercent")]
    pub brokerage_percent: f64,
    #[serde(rename = "googleMapLink", default)]
    pub google_map_link: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The agent who owns the client book and inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A scheduled follow-up call or visit for a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUp {
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "dueAt")]
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub note: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

/// A property scored against one client's requirement.
///
/// `reasons` lists the criteria that contributed points, in the order the
/// scorer evaluates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub property: Property,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// A client scored against one property, the mirror of [`MatchResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientMatchResult {
    pub client: Client,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Point values and tolerance multipliers used by the scorer.
///
/// The defaults sum to a maximum score of 100 and are the values the rest
/// of the application assumes; override them through configuration only if
/// every consumer of the scores is updated in step.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    /// Awarded once the type and intent hard filters pass.
    pub base: u32,
    /// Awarded when the price falls inside the (tolerance-widened) budget.
    pub budget: u32,
    /// Location points for an exact sub-location hit.
    pub location_exact: u32,
    /// Location points when only the main location matches.
    pub location_main: u32,
    /// Awarded when the listing's BHK label is among the wanted configurations.
    pub configuration: u32,
    /// Awarded when the size falls inside the (tolerance-widened) size range.
    pub size: u32,
    /// Multiplier on the max budget for rentals.
    pub rent_budget_tolerance: f64,
    /// Multiplier on the max budget for sales.
    pub buy_budget_tolerance: f64,
    /// Multiplier on the max size, regardless of intent.
    pub size_tolerance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 40,
            budget: 25,
            location_exact: 20,
            location_main: 15,
            configuration: 10,
            size: 5,
            rent_budget_tolerance: 1.15,
            buy_budget_tolerance: 1.10,
            size_tolerance: 1.15,
        }
    }
}
