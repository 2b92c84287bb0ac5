//! Document types for the architecture catalog.
//!
//! Two collections exist: `components` (the building blocks of the platform)
//! and `steps` (the narrative walkthrough of a request). Both are seeded once
//! at startup and immutable afterwards.
//!
//! Open-ended fields (`capacity_metrics`, `technical_details`) carry
//! heterogeneous key/value content and are modeled as JSON objects. Their
//! value types are documented (number, string, boolean) but not statically
//! enforced. Ordered display content (`technologies`, `protocols`) uses
//! explicit sequences instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use ludo_core::{ComponentId, Error, StepId};

/// Closed set of component categories.
///
/// The category drives capacity calculator dispatch and is the key space for
/// the logical `connections` graph between components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Traffic distribution across regions.
    LoadBalancer,
    /// Edge caching of game assets.
    Cdn,
    /// Request routing to microservices.
    ApiGateway,
    /// Game instance hosting.
    GameServer,
    /// Player data and game state persistence.
    Database,
    /// High-speed data access tiers.
    Cache,
    /// Event-driven cross-service communication.
    MessageQueue,
    /// System health and performance tracking.
    Monitoring,
    /// DDoS protection and access control.
    Security,
    /// Asset, log, and analytics storage.
    Storage,
}

impl Category {
    /// All categories, in seed catalog order.
    pub const ALL: [Self; 10] = [
        Self::LoadBalancer,
        Self::Cdn,
        Self::ApiGateway,
        Self::GameServer,
        Self::Database,
        Self::Cache,
        Self::MessageQueue,
        Self::Monitoring,
        Self::Security,
        Self::Storage,
    ];

    /// Returns the snake_case wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadBalancer => "load_balancer",
            Self::Cdn => "cdn",
            Self::ApiGateway => "api_gateway",
            Self::GameServer => "game_server",
            Self::Database => "database",
            Self::Cache => "cache",
            Self::MessageQueue => "message_queue",
            Self::Monitoring => "monitoring",
            Self::Security => "security",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown category: {s}")))
    }
}

/// Difficulty rating of a component's explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Suitable for readers new to distributed systems.
    Beginner,
    /// Assumes familiarity with basic infrastructure concepts.
    Intermediate,
    /// Assumes working knowledge of large-scale systems.
    Advanced,
}

impl DifficultyLevel {
    /// Returns the snake_case wire name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 2D coordinate for diagram placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// One architectural building block of the explained platform.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Component {
    /// Unique identifier, generated at seed time.
    #[schema(value_type = String)]
    pub id: ComponentId,
    /// Display name.
    pub name: String,
    /// One-line summary.
    pub description: String,
    /// Long-form explanation.
    pub detailed_explanation: String,
    /// Category driving calculator dispatch and graph edges.
    pub category: Category,
    /// Technologies in display order.
    pub technologies: Vec<String>,
    /// Protocols in display order.
    pub protocols: Vec<String>,
    /// Open mapping of metric name to value (number/string/boolean).
    #[schema(value_type = Object)]
    pub capacity_metrics: Map<String, Value>,
    /// Diagram placement.
    pub position: Position,
    /// Logical edges to other components, by category key.
    ///
    /// Resolved by lookup against the catalog; validated at seed-load time.
    pub connections: Vec<Category>,
    /// Reading level of the explanation.
    pub difficulty_level: DifficultyLevel,
    /// Default sort rank; unique and contiguous across the seed set.
    pub step_order: u32,
    /// Seed timestamp.
    #[schema(value_type = String, format = DateTime)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One stage of the request-flow walkthrough.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Step {
    /// Unique identifier, generated at seed time.
    #[schema(value_type = String)]
    pub id: StepId,
    /// 1-based sequence position; unique and dense across the seed set.
    pub step_number: u32,
    /// Display title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Categories participating in this stage.
    pub components_involved: Vec<Category>,
    /// Categories highlighted in the diagram for this stage.
    pub diagram_focus: Vec<Category>,
    /// Open mapping of detail name to value (number/string/boolean/list).
    #[schema(value_type = Object)]
    pub technical_details: Map<String, Value>,
    /// Explanation aimed at beginners.
    pub beginner_explanation: String,
    /// The same content for an advanced audience.
    pub advanced_explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::MessageQueue).unwrap();
        assert_eq!(json, "\"message_queue\"");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "mainframe".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn difficulty_serializes_snake_case() {
        let json = serde_json::to_string(&DifficultyLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
    }
}
