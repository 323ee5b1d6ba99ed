//! The three simulated generators the player has to tell apart.
//!
//! GPM walks a fixed word-transition table and degrades into word salad by
//! design; GPT and GPH both pick a canned completion for the first template
//! keyword found in the prompt, differing only in their completion sets.
//! Every randomness draw comes through the caller-supplied [`Rng`], so rounds
//! are reproducible under a seeded generator.

use crate::data::{
    self, Explanation, GPH_DEFAULT, GPH_EXPLANATION, GPH_TEMPLATES, GPT_DEFAULT, GPT_EXPLANATION,
    GPT_TEMPLATES, GPM_EXPLANATION,
};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MIN_MARKOV_STEPS: usize = 8;
const MAX_MARKOV_STEPS: usize = 12;

/// A simulated text-generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Context-aware: stays on topic across the whole prompt.
    Gpt,
    /// Markov chain: remembers only the last word.
    Gpm,
    /// Human-like: personal memory, metaphor, emotional depth.
    Gph,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Gpt, Persona::Gpm, Persona::Gph];

    /// Lowercase wire tag, as used in guess payloads.
    pub fn tag(self) -> &'static str {
        match self {
            Persona::Gpt => "gpt",
            Persona::Gpm => "gpm",
            Persona::Gph => "gph",
        }
    }

    /// Uppercase display label, as used in quiz options.
    pub fn label(self) -> &'static str {
        match self {
            Persona::Gpt => "GPT",
            Persona::Gpm => "GPM",
            Persona::Gph => "GPH",
        }
    }

    /// The static clue block shown when a guess against this persona is graded.
    pub fn explanation(self) -> &'static Explanation {
        match self {
            Persona::Gpt => &GPT_EXPLANATION,
            Persona::Gpm => &GPM_EXPLANATION,
            Persona::Gph => &GPH_EXPLANATION,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPersona(pub String);

impl fmt::Display for UnknownPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown model {:?} (expected gpt, gpm, or gph)", self.0)
    }
}

impl std::error::Error for UnknownPersona {}

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpt" => Ok(Persona::Gpt),
            "gpm" => Ok(Persona::Gpm),
            "gph" => Ok(Persona::Gph),
            _ => Err(UnknownPersona(s.to_string())),
        }
    }
}

/// Produces a continuation of `prompt` in the given persona's style.
///
/// The prompt is assumed non-empty; [`crate::game::GameService`] normalizes
/// blank prompts to [`data::DEFAULT_PROMPT`] before calling in.
pub fn generate(persona: Persona, prompt: &str, rng: &mut impl Rng) -> String {
    match persona {
        Persona::Gpt => complete_from_templates(prompt, GPT_TEMPLATES, GPT_DEFAULT, rng),
        Persona::Gpm => markov_walk(prompt, rng),
        Persona::Gph => complete_from_templates(prompt, GPH_TEMPLATES, GPH_DEFAULT, rng),
    }
}

/// GPM: append 8-12 words, each drawn from the transition set of the previous
/// word alone. Unknown words (and a prompt with no tokens at all) fall back to
/// the default word set.
fn markov_walk(prompt: &str, rng: &mut impl Rng) -> String {
    let mut words: Vec<String> = prompt.split_whitespace().map(str::to_string).collect();
    let mut result = prompt.to_string();
    let steps = rng.gen_range(MIN_MARKOV_STEPS..=MAX_MARKOV_STEPS);
    for _ in 0..steps {
        let options = match words.last() {
            Some(last) => data::markov_options(normalize_word(last).as_str()),
            None => data::MARKOV_DEFAULT,
        };
        let next = *options.choose(rng).unwrap_or(&"and");
        result.push(' ');
        result.push_str(next);
        words.push(next.to_string());
    }
    result
}

/// GPT/GPH: scan the ordered template list for the first keyword contained in
/// the lowercased prompt and append a random completion from its set, or from
/// the default set when nothing matches. First-match-wins ordering is part of
/// the game content.
fn complete_from_templates(
    prompt: &str,
    templates: &[(&str, &[&str])],
    default: &[&'static str],
    rng: &mut impl Rng,
) -> String {
    let prompt_lower = prompt.to_lowercase();
    let completions = templates
        .iter()
        .find(|(keyword, _)| prompt_lower.contains(keyword))
        .map(|(_, completions)| *completions)
        .unwrap_or(default);
    let completion = completions.choose(rng).copied().unwrap_or("");
    format!("{prompt}{completion}")
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c| matches!(c, '.' | ',' | '!' | '?'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn persona_tags_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(persona.tag().parse::<Persona>().unwrap(), persona);
        }
        assert_eq!("GPH".parse::<Persona>().unwrap(), Persona::Gph);
        assert!(" gpt ".parse::<Persona>().is_ok());
        assert!("llama".parse::<Persona>().is_err());
    }

    #[test]
    fn markov_adds_between_8_and_12_words() {
        let prompt = "The cat sat on the";
        let base_len = prompt.split_whitespace().count();
        for seed in 0..50 {
            let text = generate(Persona::Gpm, prompt, &mut rng(seed));
            let added = text.split_whitespace().count() - base_len;
            assert!((MIN_MARKOV_STEPS..=MAX_MARKOV_STEPS).contains(&added), "added {added}");
            assert!(text.starts_with(prompt));
        }
    }

    #[test]
    fn markov_strips_trailing_punctuation() {
        // "the." must key on "the", whose transition set has no function words.
        let text = generate(Persona::Gpm, "the.", &mut rng(3));
        let first_added = text.split_whitespace().nth(1).unwrap();
        assert!(data::markov_options("the").contains(&first_added));
    }

    #[test]
    fn markov_handles_empty_prompt_without_panicking() {
        let text = generate(Persona::Gpm, "", &mut rng(7));
        assert!(text.split_whitespace().count() >= MIN_MARKOV_STEPS);
    }

    #[test]
    fn gpt_matches_first_keyword() {
        // "cat" precedes "dog" in the template order, so a prompt containing
        // both must complete from the cat set.
        let text = generate(Persona::Gpt, "The dog chased the cat up the", &mut rng(1));
        let completion = text.trim_start_matches("The dog chased the cat up the");
        assert!(
            GPT_TEMPLATES
                .iter()
                .find(|(k, _)| *k == "cat")
                .unwrap()
                .1
                .contains(&completion)
        );
    }

    #[test]
    fn gpt_falls_back_to_default_set() {
        let text = generate(Persona::Gpt, "It was quite", &mut rng(2));
        let completion = text.trim_start_matches("It was quite");
        assert!(GPT_DEFAULT.contains(&completion));
    }

    #[test]
    fn gph_uses_its_own_completion_set() {
        let text = generate(Persona::Gph, "Once", &mut rng(4));
        let completion = text.trim_start_matches("Once");
        assert!(
            GPH_TEMPLATES
                .iter()
                .find(|(k, _)| *k == "once")
                .unwrap()
                .1
                .contains(&completion)
        );
    }

    #[test]
    fn same_seed_reproduces_output() {
        for persona in Persona::ALL {
            let a = generate(persona, "The scientist stood at the", &mut rng(99));
            let b = generate(persona, "The scientist stood at the", &mut rng(99));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn output_always_starts_with_prompt() {
        for persona in Persona::ALL {
            for seed in 0..10 {
                let text = generate(persona, "Once", &mut rng(seed));
                assert!(text.starts_with("Once"));
                assert!(text.len() > "Once".len());
            }
        }
    }
}
