//! Fixed-language greeting policy.
//!
//! Keeps its wording on the struct instead of the category map: a crowd
//! message for several faces, a stranger message for a sole unknown, an
//! optional special-cased name, and otherwise a random greeting word
//! followed by the uncapitalized name.

use rand::RngCore;

use super::{random_greeting_word, GreetingPolicy, UNKNOWN_PERSON};
use crate::categories::Categories;
use crate::selector::SelectorState;

/// Fixed policy with hardcoded-style messages.
#[derive(Debug, Clone)]
pub struct FixedGreeting {
    pub crowd_message: String,
    pub unknown_message: String,
    /// When non-empty, this identifier gets `special_message` verbatim.
    pub special_name: String,
    pub special_message: String,
}

impl Default for FixedGreeting {
    fn default() -> Self {
        Self {
            crowd_message: "Wow, so many beautiful people around!".to_string(),
            unknown_message: "I don't know you yet, but you look great!".to_string(),
            special_name: String::new(),
            special_message: String::new(),
        }
    }
}

impl GreetingPolicy for FixedGreeting {
    fn name(&self) -> &str {
        "fixed"
    }

    fn compose(
        &self,
        names: &[String],
        categories: &Categories,
        _state: &mut SelectorState,
        rng: &mut dyn RngCore,
    ) -> Option<String> {
        match names {
            [] => None,
            [name] if name == UNKNOWN_PERSON => Some(self.unknown_message.clone()),
            [name] if !self.special_name.is_empty() && *name == self.special_name => {
                Some(self.special_message.clone())
            }
            [name] => match random_greeting_word(categories, rng) {
                Some(word) => Some(format!("{word} {name}")),
                None => Some(name.clone()),
            },
            _ => Some(self.crowd_message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn compose(policy: &FixedGreeting, names: &[&str]) -> Option<String> {
        let mut cats = Categories::new();
        cats.insert("greetings", vec!["Hey".into()]);
        let mut state = SelectorState::new();
        let mut rng = Mcg128Xsl64::seed_from_u64(2);
        policy.compose(
            &names.iter().map(|n| n.to_string()).collect::<Vec<_>>(),
            &cats,
            &mut state,
            &mut rng,
        )
    }

    #[test]
    fn empty_list_is_a_no_op() {
        assert_eq!(compose(&FixedGreeting::default(), &[]), None);
    }

    #[test]
    fn crowd_gets_the_crowd_message() {
        let policy = FixedGreeting::default();
        assert_eq!(
            compose(&policy, &["alice", "bob"]).as_deref(),
            Some("Wow, so many beautiful people around!")
        );
    }

    #[test]
    fn sole_unknown_gets_the_stranger_message() {
        let policy = FixedGreeting::default();
        assert_eq!(
            compose(&policy, &["unknown"]).as_deref(),
            Some("I don't know you yet, but you look great!")
        );
    }

    #[test]
    fn special_name_gets_the_special_message() {
        let policy = FixedGreeting {
            special_name: "alice".into(),
            special_message: "The one and only!".into(),
            ..FixedGreeting::default()
        };
        assert_eq!(compose(&policy, &["alice"]).as_deref(), Some("The one and only!"));
        assert_eq!(compose(&policy, &["bob"]).as_deref(), Some("Hey bob"));
    }

    #[test]
    fn single_name_stays_uncapitalized() {
        let policy = FixedGreeting::default();
        assert_eq!(compose(&policy, &["carol"]).as_deref(), Some("Hey carol"));
    }
}
