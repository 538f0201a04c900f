//! # Glimmer Core Library
//!
//! This library provides the core logic for the Glimmer compliment
//! widget: it periodically selects a short message from configured
//! category lists based on time of day, calendar date, current weather
//! and recognized users. The display surface, scheduler and
//! notification transport are thin layers over this library -- the CLI
//! binary drives the same engine the dashboard embeds.
//!
//! ## Architecture
//!
//! - **Compliment Engine**: a caller-driven selector that requires the
//!   host to invoke `render()` on its own interval
//! - **Candidate Builder**: time-window, weather and date-pattern pools
//! - **Picker**: non-repeat random draw or wrapping sequential cursor
//! - **Greeting Policies**: pluggable face-recognition greetings
//! - **Remote Loader**: one-shot category file fetch (path or URL)
//!
//! ## Key Components
//!
//! - [`ComplimentEngine`]: core selection engine
//! - [`Categories`]: category map configuration
//! - [`Config`]: widget configuration management
//! - [`GreetingPolicy`]: trait for person-greeting strategies

pub mod categories;
pub mod config;
pub mod error;
pub mod events;
pub mod greeting;
pub mod remote;
pub mod render;
pub mod selector;
pub mod weather;

pub use categories::Categories;
pub use config::Config;
pub use error::{ConfigError, CoreError, FetchError, ValidationError};
pub use events::Event;
pub use greeting::{FixedGreeting, GenericGreeting, GreetingPolicy, GreetingStyle};
pub use render::RenderOutput;
pub use selector::{CandidateSets, ComplimentEngine, SelectorState, TimeWindows};
