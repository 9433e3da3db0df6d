//! Propmatch - client/property matching engine for a real-estate CRM
//!
//! This library scores an agent's property inventory against client
//! requirements and produces ranked, explained matches in both directions:
//! properties for a client and clients for a property. The same scoring
//! function backs both queries, so a pair always scores identically no
//! matter which side asks.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Matcher, DEFAULT_SCORE_THRESHOLD};
pub use models::{
    Client, ClientMatchResult, MatchResult, Property, Requirement, ScoringWeights,
};
pub use services::{StoreError, Workspace};
