//! Form-input types with validation rules.
//!
//! These sit between the UI and the domain model: a screen collects a form,
//! validates it here, and only then converts it into a domain entity. The
//! matching engine always receives already-validated data and never checks
//! inputs itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{
    Client, ClientStatus, Furnishing, Intent, LocationPreference, Property, PropertyCategory,
    PropertyType, Requirement,
};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// One location preference as entered in the requirement form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationPreferenceForm {
    #[validate(length(min = 1, message = "main location is required"))]
    #[serde(rename = "mainLocation")]
    pub main_location: String,
    #[serde(rename = "subLocations", default)]
    pub sub_locations: Vec<String>,
}

impl LocationPreferenceForm {
    pub fn into_preference(self) -> LocationPreference {
        LocationPreference {
            id: new_id(),
            main_location: self.main_location,
            sub_locations: self.sub_locations,
        }
    }
}

/// A client requirement as entered in the form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_requirement_bounds", skip_on_field_errors = false))]
pub struct RequirementForm {
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    pub intent: Intent,
    #[validate(length(min = 1, message = "at least one configuration is required"))]
    pub configurations: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "minBudget")]
    pub min_budget: f64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "maxBudget")]
    pub max_budget: f64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "minSize")]
    pub min_size: f64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "maxSize")]
    pub max_size: f64,
    #[validate(nested)]
    #[serde(default)]
    pub locations: Vec<LocationPreferenceForm>,
}

fn validate_requirement_bounds(form: &RequirementForm) -> Result<(), ValidationError> {
    if form.min_budget > form.max_budget {
        let mut err = ValidationError::new("budget_order");
        err.message = Some("minBudget must not exceed maxBudget".into());
        return Err(err);
    }
    if form.min_size > form.max_size {
        let mut err = ValidationError::new("size_order");
        err.message = Some("minSize must not exceed maxSize".into());
        return Err(err);
    }
    Ok(())
}

impl RequirementForm {
    pub fn into_requirement(self) -> Requirement {
        Requirement {
            id: new_id(),
            property_type: self.property_type,
            intent: self.intent,
            configurations: self.configurations,
            min_budget: self.min_budget,
            max_budget: self.max_budget,
            min_size: self.min_size,
            max_size: self.max_size,
            locations: self
                .locations
                .into_iter()
                .map(LocationPreferenceForm::into_preference)
                .collect(),
        }
    }
}

/// A new client as entered in the add-client form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 7, max = 15, message = "phone must be 7-15 digits"))]
    pub phone: String,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[validate(nested)]
    pub requirement: RequirementForm,
}

impl ClientForm {
    /// Build the domain client, stamping id, agent, status, and timestamps.
    pub fn into_client(self, agent_id: &str) -> Client {
        let now = chrono::Utc::now();
        Client {
            id: new_id(),
            agent_id: agent_id.to_string(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            source: self.source,
            status: ClientStatus::New,
            cancel_reason: None,
            notes: self.notes,
            created_at: now,
            updated_at: now,
            requirement: self.requirement.into_requirement(),
        }
    }
}

/// A new property as entered in the add-property form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PropertyForm {
    pub category: PropertyCategory,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    #[validate(length(min = 1, message = "project name is required"))]
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "main location is required"))]
    #[serde(rename = "mainLocation")]
    pub main_location: String,
    #[validate(length(min = 1, message = "sub location is required"))]
    #[serde(rename = "subLocation")]
    pub sub_location: String,
    #[serde(rename = "addressText", default)]
    pub address_text: Option<String>,
    #[validate(length(min = 1, message = "configuration is required"))]
    pub bhk: String,
    #[validate(range(min = 1.0, message = "size must be positive"))]
    #[serde(rename = "sizeSqft")]
    pub size_sqft: f64,
    pub floor: String,
    pub furnishing: Furnishing,
    #[serde(rename = "parkingCount", default)]
    pub parking_count: u8,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "brokeragePercent", default)]
    pub brokerage_percent: f64,
    #[validate(url)]
    #[serde(rename = "googleMapLink", default)]
    pub google_map_link: Option<String>,
}

impl PropertyForm {
    pub fn into_property(self, agent_id: &str) -> Property {
        let now = chrono::Utc::now();
        Property {
            id: new_id(),
            agent_id: agent_id.to_string(),
            category: self.category,
            property_type: self.property_type,
            project_name: self.project_name,
            city: self.city,
            main_location: self.main_location,
            sub_location: self.sub_location,
            address_text: self.address_text,
            bhk: self.bhk,
            size_sqft: self.size_sqft,
            floor: self.floor,
            furnishing: self.furnishing,
            parking_count: self.parking_count,
            price: self.price,
            brokerage_percent: self.brokerage_percent,
            google_map_link: self.google_map_link,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Flatten validation errors into a field -> messages map for rendering.
pub fn error_messages(errors: &ValidationErrors) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<serde_json::Value> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(m) => serde_json::Value::String(m.to_string()),
                    None => serde_json::Value::String(e.code.to_string()),
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(messages))
        })
        .collect();
    serde_json::Value::Object(map)
}
