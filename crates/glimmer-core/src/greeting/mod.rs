//! Person-greeting policies.
//!
//! Face recognition hands the engine an ordered list of identifiers;
//! a greeting policy turns that list into a single display string.
//! Policies are pluggable and selected by configuration.

mod fixed;
mod generic;

pub use fixed::FixedGreeting;
pub use generic::GenericGreeting;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::categories::Categories;
use crate::selector::SelectorState;

/// Sentinel identifier reported for unrecognized faces.
pub const UNKNOWN_PERSON: &str = "unknown";

/// Every greeting policy implements this trait.
pub trait GreetingPolicy: Send + Sync {
    /// Unique identifier (e.g. "generic", "fixed").
    fn name(&self) -> &str;

    /// Compose a greeting for the recognized identifiers.
    ///
    /// An empty input list is a no-op and must return `None` without
    /// touching any state. `None` for a non-empty list means the policy
    /// has nothing to say (e.g. required lists are missing).
    fn compose(
        &self,
        names: &[String],
        categories: &Categories,
        state: &mut SelectorState,
        rng: &mut dyn RngCore,
    ) -> Option<String>;
}

/// Which greeting policy the engine instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingStyle {
    #[default]
    Generic,
    Fixed,
}

impl GreetingStyle {
    pub fn policy(self) -> Box<dyn GreetingPolicy> {
        match self {
            GreetingStyle::Generic => Box::new(GenericGreeting),
            GreetingStyle::Fixed => Box::new(FixedGreeting::default()),
        }
    }
}

/// Uppercase the first character, leave the rest as-is.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Comma join with the last pair joined by "and": `A, B and C`.
pub(crate) fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [single] => single.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// A random word from the `greetings` category, when one exists.
pub(crate) fn random_greeting_word(
    categories: &Categories,
    rng: &mut dyn RngCore,
) -> Option<String> {
    let greetings = categories.get("greetings");
    if greetings.is_empty() {
        tracing::debug!("no greetings category configured");
        return None;
    }
    let index = rng.gen_range(0..greetings.len());
    Some(greetings[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_first_char_only() {
        assert_eq!(capitalize("alice"), "Alice");
        assert_eq!(capitalize("bob marley"), "Bob marley");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn join_names_uses_and_for_the_last_pair() {
        let names: Vec<String> = vec!["Alice".into()];
        assert_eq!(join_names(&names), "Alice");

        let names: Vec<String> = vec!["Alice".into(), "Bob".into()];
        assert_eq!(join_names(&names), "Alice and Bob");

        let names: Vec<String> = vec!["Alice".into(), "Bob".into(), "Carol".into()];
        assert_eq!(join_names(&names), "Alice, Bob and Carol");
    }

    #[test]
    fn greeting_style_deserializes_from_lowercase() {
        let style: GreetingStyle = serde_json::from_str("\"fixed\"").unwrap();
        assert_eq!(style, GreetingStyle::Fixed);
    }
}
