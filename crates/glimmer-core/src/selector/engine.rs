//! Compliment engine implementation.
//!
//! The engine is caller-driven. It does not use internal threads or
//! timers - the widget loop calls `render()` on its own interval and
//! feeds inbound notifications through `handle_event()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = ComplimentEngine::new(&config);
//! // On each render tick:
//! let output = engine.render();
//! // On notifications:
//! if let Some(event) = engine.handle_event(incoming) {
//!     // ComplimentForced -> render immediately
//! }
//! ```

use chrono::{Local, Timelike, Utc};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use super::candidates::{self, CandidateSets, TimeWindows};
use super::picker::{self, SelectorState};
use crate::categories::Categories;
use crate::config::Config;
use crate::events::Event;
use crate::greeting::GreetingPolicy;
use crate::render::RenderOutput;
use crate::weather;

/// Core compliment engine.
///
/// Owns the category map, the picker state, the current weather
/// category, and the one-shot greeting override. All state is mutated
/// from the caller's single event-processing context.
pub struct ComplimentEngine {
    categories: Categories,
    windows: TimeWindows,
    random: bool,
    mock_date: Option<String>,
    classes: String,
    fade_ms: u64,
    state: SelectorState,
    current_weather: Option<String>,
    force_text: Option<String>,
    force_active: bool,
    policy: Box<dyn GreetingPolicy>,
    rng: Mcg128Xsl64,
}

impl ComplimentEngine {
    /// Create an engine from configuration.
    ///
    /// The RNG is seeded from `rng_seed` when set, so a fixed seed
    /// replays the same pick sequence.
    pub fn new(config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self {
            categories: config.compliments.clone(),
            windows: config.windows(),
            random: config.random,
            mock_date: config.mock_date.clone(),
            classes: config.classes.clone(),
            fade_ms: config.fade_speed_ms,
            state: SelectorState::new(),
            current_weather: None,
            force_text: None,
            force_active: false,
            policy: config.greeting.policy(),
            rng,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn current_weather(&self) -> Option<&str> {
        self.current_weather.as_deref()
    }

    /// Today as `YYYY-MM-DD`, honoring the mock date override.
    pub fn current_date(&self) -> String {
        match &self.mock_date {
            Some(date) => date.clone(),
            None => Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Candidate pools for an explicit hour and date.
    pub fn candidates_at(&self, hour: u32, date: &str) -> CandidateSets {
        candidates::build(
            &self.categories,
            hour,
            date,
            &self.windows,
            self.current_weather.as_deref(),
        )
    }

    /// Candidate pools for the current wall clock.
    pub fn candidates(&self) -> CandidateSets {
        self.candidates_at(Local::now().hour(), &self.current_date())
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Pick one compliment for an explicit hour and date.
    pub fn compliment_at(&mut self, hour: u32, date: &str) -> String {
        let sets = self.candidates_at(hour, date);
        picker::pick(self.random, &sets, &mut self.state, &mut self.rng)
    }

    /// Pick one compliment for the current wall clock.
    pub fn next_compliment(&mut self) -> String {
        self.compliment_at(Local::now().hour(), &self.current_date())
    }

    /// Produce this tick's render output.
    ///
    /// A pending greeting override wins exactly once; the flag is
    /// cleared here while the text itself persists until the next
    /// scheduled render overwrites it.
    pub fn render(&mut self) -> RenderOutput {
        let text = if self.force_active {
            self.force_active = false;
            self.force_text.clone().unwrap_or_default()
        } else {
            self.next_compliment()
        };
        self.output(text)
    }

    /// Render for an explicit hour and date (preview paths).
    pub fn render_at(&mut self, hour: u32, date: &str) -> RenderOutput {
        let text = if self.force_active {
            self.force_active = false;
            self.force_text.clone().unwrap_or_default()
        } else {
            self.compliment_at(hour, date)
        };
        self.output(text)
    }

    fn output(&self, text: String) -> RenderOutput {
        RenderOutput {
            text,
            classes: self.classes.clone(),
            fade_ms: self.fade_ms,
        }
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Replace the category map wholesale (remote fetch completion).
    pub fn set_categories(&mut self, categories: Categories) {
        self.categories = categories;
    }

    /// Set the current weather from a provider icon code.
    ///
    /// Unmapped codes clear the weather category without error.
    pub fn set_weather_icon(&mut self, icon: &str) {
        self.current_weather = match weather::category_for_icon(icon) {
            Some(category) => Some(category.to_string()),
            None => {
                tracing::debug!(icon = %icon, "unmapped weather icon code");
                None
            }
        };
    }

    /// Compose a greeting for recognized identifiers without touching
    /// the override state.
    pub fn greeting_for(&mut self, names: &[String]) -> Option<String> {
        self.policy
            .compose(names, &self.categories, &mut self.state, &mut self.rng)
    }

    /// Feed an inbound notification to the engine.
    ///
    /// Returns `Some(Event::ComplimentForced)` when the caller should
    /// render immediately.
    pub fn handle_event(&mut self, event: Event) -> Option<Event> {
        match event {
            Event::WeatherData { icon, .. } => {
                self.set_weather_icon(&icon);
                None
            }
            Event::UsersLogin { names, .. } => {
                if names.is_empty() {
                    return None;
                }
                let text = self.greeting_for(&names)?;
                self.force_text = Some(text.clone());
                self.force_active = true;
                Some(Event::ComplimentForced {
                    text,
                    at: Utc::now(),
                })
            }
            Event::CategoriesReplaced {
                source, categories, ..
            } => {
                tracing::info!(source = %source, count = categories.len(), "categories replaced");
                self.set_categories(categories);
                None
            }
            // Outbound-only variant; nothing to do if echoed back.
            Event::ComplimentForced { .. } => None,
        }
    }
}
