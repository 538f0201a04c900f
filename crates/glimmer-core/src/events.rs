use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::categories::Categories;

/// Every external notification and engine effect is an Event.
/// The widget loop feeds inbound events to the engine; the engine
/// answers with outbound events that request an immediate render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Weather update carrying a provider icon code (e.g. "10d").
    WeatherData {
        icon: String,
        #[serde(default = "Utc::now")]
        at: DateTime<Utc>,
    },
    /// Face recognition reported an ordered list of identifiers.
    UsersLogin {
        names: Vec<String>,
        #[serde(default = "Utc::now")]
        at: DateTime<Utc>,
    },
    /// A one-shot greeting overrides the next scheduled compliment.
    ComplimentForced {
        text: String,
        at: DateTime<Utc>,
    },
    /// The category map was replaced wholesale (remote fetch completed).
    CategoriesReplaced {
        source: String,
        categories: Categories,
        #[serde(default = "Utc::now")]
        at: DateTime<Utc>,
    },
}
