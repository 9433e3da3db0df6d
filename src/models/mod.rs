// Model exports
pub mod catalog;
pub mod domain;
pub mod forms;

pub use domain::{
    Agent, Client, ClientMatchResult, ClientStatus, FollowUp, Furnishing, Intent,
    LocationPreference, MatchResult, Property, PropertyCategory, PropertyType, Requirement,
    ScoringWeights,
};
pub use forms::{ClientForm, LocationPreferenceForm, PropertyForm, RequirementForm};
