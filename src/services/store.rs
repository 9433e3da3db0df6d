use thiserror::Error;

use crate::core::Matcher;
use crate::models::{
    Agent, Client, ClientMatchResult, FollowUp, MatchResult, Property,
};

/// Errors from workspace lookups and mutations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

/// One agent's working set: client book, inventory, and follow-up schedule.
///
/// This is explicit application state, owned by the caller and passed where
/// it is needed. Screens read through the accessors and mutate through the
/// CRUD methods; nothing here is global or persisted.
#[derive(Debug, Clone)]
pub struct Workspace {
    agent: Agent,
    clients: Vec<Client>,
    properties: Vec<Property>,
    follow_ups: Vec<FollowUp>,
}

impl Workspace {
    pub fn new(agent: Agent) -> Self {
        Self {
            agent,
            clients: Vec::new(),
            properties: Vec::new(),
            follow_ups: Vec::new(),
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Replace the agent profile (edit-profile screen).
    pub fn set_agent(&mut self, agent: Agent) {
        tracing::info!("Updating agent profile: {}", agent.id);
        self.agent = agent;
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn follow_ups(&self) -> &[FollowUp] {
        &self.follow_ups
    }

    pub fn client(&self, id: &str) -> Result<&Client, StoreError> {
        self.clients
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("client {}", id)))
    }

    pub fn property(&self, id: &str) -> Result<&Property, StoreError> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("property {}", id)))
    }

    pub fn add_client(&mut self, client: Client) -> Result<(), StoreError> {
        if self.clients.iter().any(|c| c.id == client.id) {
            return Err(StoreError::DuplicateId(format!("client {}", client.id)));
        }
        tracing::info!("Adding client {} ({})", client.name, client.id);
        self.clients.push(client);
        Ok(())
    }

    /// Replace a client record, bumping its updated timestamp.
    pub fn update_client(&mut self, mut client: Client) -> Result<(), StoreError> {
        let slot = self
            .clients
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or_else(|| StoreError::NotFound(format!("client {}", client.id)))?;
        client.updated_at = chrono::Utc::now();
        tracing::debug!("Updating client {}", client.id);
        *slot = client;
        Ok(())
    }

    pub fn add_property(&mut self, property: Property) -> Result<(), StoreError> {
        if self.properties.iter().any(|p| p.id == property.id) {
            return Err(StoreError::DuplicateId(format!("property {}", property.id)));
        }
        tracing::info!(
            "Adding property {} in {} ({})",
            property.project_name,
            property.main_location,
            property.id
        );
        self.properties.push(property);
        Ok(())
    }

    pub fn update_property(&mut self, mut property: Property) -> Result<(), StoreError> {
        let slot = self
            .properties
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| StoreError::NotFound(format!("property {}", property.id)))?;
        property.updated_at = chrono::Utc::now();
        tracing::debug!("Updating property {}", property.id);
        *slot = property;
        Ok(())
    }

    pub fn delete_property(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .properties
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("property {}", id)))?;
        tracing::info!("Deleting property {}", id);
        self.properties.remove(index);
        Ok(())
    }

    /// Schedule a follow-up; the client must exist.
    pub fn add_follow_up(&mut self, follow_up: FollowUp) -> Result<(), StoreError> {
        self.client(&follow_up.client_id)?;
        if self.follow_ups.iter().any(|f| f.id == follow_up.id) {
            return Err(StoreError::DuplicateId(format!(
                "follow-up {}",
                follow_up.id
            )));
        }
        self.follow_ups.push(follow_up);
        Ok(())
    }

    pub fn update_follow_up(&mut self, follow_up: FollowUp) -> Result<(), StoreError> {
        let slot = self
            .follow_ups
            .iter_mut()
            .find(|f| f.id == follow_up.id)
            .ok_or_else(|| StoreError::NotFound(format!("follow-up {}", follow_up.id)))?;
        *slot = follow_up;
        Ok(())
    }

    /// Open follow-ups ordered by due date, for the schedule screen.
    pub fn pending_follow_ups(&self) -> Vec<&FollowUp> {
        let mut pending: Vec<&FollowUp> = self
            .follow_ups
            .iter()
            .filter(|f| !f.is_completed)
            .collect();
        pending.sort_by_key(|f| f.due_at);
        pending
    }

    /// Ranked inventory matches for a client (client-detail screen).
    pub fn matches_for_client(
        &self,
        matcher: &Matcher,
        client_id: &str,
    ) -> Result<Vec<MatchResult>, StoreError> {
        let client = self.client(client_id)?;
        let matches = matcher.find_matching_properties(client, &self.properties);
        tracing::debug!(
            "Found {} matching properties for client {} out of {}",
            matches.len(),
            client_id,
            self.properties.len()
        );
        Ok(matches)
    }

    /// Ranked client matches for a property (property-detail screen).
    pub fn matches_for_property(
        &self,
        matcher: &Matcher,
        property_id: &str,
    ) -> Result<Vec<ClientMatchResult>, StoreError> {
        let property = self.property(property_id)?;
        let matches = matcher.find_matching_clients(property, &self.clients);
        tracing::debug!(
            "Found {} matching clients for property {} out of {}",
            matches.len(),
            property_id,
            self.clients.len()
        );
        Ok(matches)
    }
}
