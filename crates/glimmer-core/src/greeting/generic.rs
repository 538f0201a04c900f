//! Configuration-driven greeting policy.
//!
//! All wording comes from the category map: `greetings` supplies the
//! opening word, `unknown` the stranger message, `anyone` and per-name
//! categories the personalized compliment.

use rand::{Rng, RngCore};

use super::{capitalize, join_names, random_greeting_word, GreetingPolicy, UNKNOWN_PERSON};
use crate::categories::Categories;
use crate::selector::{picker, SelectorState};

/// Generic policy: capitalized names, "and"-joined list, greetings-word
/// prefix, and a 50% personalized compliment for a single person.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericGreeting;

impl GenericGreeting {
    /// 50% odds between the name-keyed list (when present) and the
    /// generic `anyone` list; drawn through the shared non-repeat
    /// picker. An empty chosen list omits the clause.
    fn compliment_for(
        &self,
        name: &str,
        categories: &Categories,
        state: &mut SelectorState,
        rng: &mut dyn RngCore,
    ) -> Option<String> {
        let key = if categories.contains(name) && rng.gen_range(0..2) == 0 {
            name
        } else {
            "anyone"
        };
        let pool = categories.get(key);
        picker::random_index(pool.len(), state, rng).map(|i| pool[i].clone())
    }
}

impl GreetingPolicy for GenericGreeting {
    fn name(&self) -> &str {
        "generic"
    }

    fn compose(
        &self,
        names: &[String],
        categories: &Categories,
        state: &mut SelectorState,
        rng: &mut dyn RngCore,
    ) -> Option<String> {
        if names.is_empty() {
            return None;
        }

        if names.len() == 1 && names[0] == UNKNOWN_PERSON {
            return categories.get(UNKNOWN_PERSON).first().cloned();
        }

        let persons: Vec<&String> = names.iter().filter(|n| *n != UNKNOWN_PERSON).collect();
        if persons.is_empty() {
            return None;
        }

        let display: Vec<String> = persons.iter().map(|n| capitalize(n)).collect();
        let persons_text = join_names(&display);

        let greeting = match random_greeting_word(categories, rng) {
            Some(word) => format!("{word} {persons_text}"),
            None => persons_text,
        };

        if persons.len() == 1 {
            if let Some(compliment) = self.compliment_for(persons[0], categories, state, rng) {
                return Some(format!("{greeting}, {compliment}"));
            }
        }
        Some(greeting)
    }
}
