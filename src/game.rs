//! Game orchestration: persona selection, text generation, session recording,
//! and guess grading.

use crate::data::{self, Explanation, QuizQuestion};
use crate::generator::{self, Persona};
use crate::session::{Round, SessionStore};
use parking_lot::Mutex;
use rand::distributions::Alphanumeric;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;

const SESSION_ID_LEN: usize = 12;

/// A newly started round: the token the client echoes back with its guess,
/// and the generated text. The persona stays server-side.
#[derive(Debug, Clone)]
pub struct StartedRound {
    pub session_id: String,
    pub text: String,
}

/// Result of grading a guess.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub correct: bool,
    pub actual: Persona,
    pub explanation: &'static Explanation,
}

#[derive(Debug)]
pub enum GameError {
    /// The session id was never issued, or its round has been evicted.
    UnknownSession,
    /// The guessed label is not one of gpt/gpm/gph.
    UnknownPersona(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownSession => write!(f, "Invalid session"),
            GameError::UnknownPersona(label) => {
                write!(f, "unknown model {label:?} (expected gpt, gpm, or gph)")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Orchestrates rounds against a [`SessionStore`]. All randomness (persona
/// pick, completion draw, session id) flows through one seedable generator,
/// so a seeded service replays identically. Cloning shares state.
#[derive(Clone)]
pub struct GameService {
    sessions: SessionStore,
    rng: Arc<Mutex<SmallRng>>,
}

impl GameService {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            sessions: SessionStore::new(),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Picks a persona uniformly at random, generates a continuation, and
    /// records the round. Blank prompts are normalized to the default prompt
    /// so the Markov walk always has a seed token.
    pub fn start_round(&self, prompt: &str) -> StartedRound {
        let prompt = if prompt.trim().is_empty() {
            data::DEFAULT_PROMPT
        } else {
            prompt
        };
        let mut rng = self.rng.lock();
        let persona = *Persona::ALL.choose(&mut *rng).unwrap_or(&Persona::Gpt);
        let text = generator::generate(persona, prompt, &mut *rng);
        let session_id = new_session_id(&mut *rng);
        drop(rng);
        self.sessions.insert(
            session_id.clone(),
            Round {
                persona,
                prompt: prompt.to_string(),
                text: text.clone(),
            },
        );
        StartedRound { session_id, text }
    }

    /// Grades a guess against the stored round. The label is validated before
    /// the session is consulted, so a malformed guess never reads the store.
    pub fn check_guess(&self, session_id: &str, guess: &str) -> Result<GuessOutcome, GameError> {
        let guessed: Persona = guess
            .parse()
            .map_err(|_| GameError::UnknownPersona(guess.to_string()))?;
        let round = self
            .sessions
            .get(session_id)
            .ok_or(GameError::UnknownSession)?;
        Ok(GuessOutcome {
            correct: guessed == round.persona,
            actual: round.persona,
            explanation: round.persona.explanation(),
        })
    }

    /// One uniformly-random question from the quiz bank.
    pub fn random_quiz(&self) -> &'static QuizQuestion {
        let mut rng = self.rng.lock();
        data::QUIZ_QUESTIONS
            .choose(&mut *rng)
            .unwrap_or(&data::QUIZ_QUESTIONS[0])
    }

    /// Direct access to the stored round, for tests and the CLI.
    pub fn round(&self, session_id: &str) -> Option<Round> {
        self.sessions.get(session_id)
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

fn new_session_id(rng: &mut impl Rng) -> String {
    (0..SESSION_ID_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_guess_is_graded_true() {
        let service = GameService::with_seed(11);
        let round = service.start_round("The cat sat on the");
        let actual = service.round(&round.session_id).unwrap().persona;
        let outcome = service.check_guess(&round.session_id, actual.tag()).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.actual, actual);
    }

    #[test]
    fn wrong_guess_is_graded_false_with_actual_persona() {
        let service = GameService::with_seed(12);
        let round = service.start_round("Once");
        let actual = service.round(&round.session_id).unwrap().persona;
        let wrong = Persona::ALL
            .into_iter()
            .find(|p| *p != actual)
            .unwrap();
        let outcome = service.check_guess(&round.session_id, wrong.tag()).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.actual, actual);
        assert_eq!(
            outcome.explanation.description,
            actual.explanation().description
        );
    }

    #[test]
    fn unknown_session_is_rejected() {
        let service = GameService::with_seed(13);
        let err = service.check_guess("nosuchsession", "gpt").unwrap_err();
        assert!(matches!(err, GameError::UnknownSession));
        assert_eq!(err.to_string(), "Invalid session");
    }

    #[test]
    fn unknown_persona_label_is_rejected() {
        let service = GameService::with_seed(14);
        let round = service.start_round("Once");
        let err = service.check_guess(&round.session_id, "llama").unwrap_err();
        assert!(matches!(err, GameError::UnknownPersona(_)));
    }

    #[test]
    fn generated_text_extends_prompt() {
        let service = GameService::with_seed(15);
        for prompt in ["Once", "The cat sat on the", "It was a dark and stormy"] {
            let round = service.start_round(prompt);
            assert!(round.text.starts_with(prompt));
            assert!(round.text.len() > prompt.len());
        }
    }

    #[test]
    fn blank_prompt_uses_default() {
        let service = GameService::with_seed(16);
        for prompt in ["", "   ", "\t\n"] {
            let round = service.start_round(prompt);
            assert!(round.text.starts_with(data::DEFAULT_PROMPT));
            let stored = service.round(&round.session_id).unwrap();
            assert_eq!(stored.prompt, data::DEFAULT_PROMPT);
        }
    }

    #[test]
    fn seeded_services_replay_identically() {
        let a = GameService::with_seed(42);
        let b = GameService::with_seed(42);
        for _ in 0..5 {
            let ra = a.start_round("The scientist stood at the");
            let rb = b.start_round("The scientist stood at the");
            assert_eq!(ra.session_id, rb.session_id);
            assert_eq!(ra.text, rb.text);
        }
    }

    #[test]
    fn personas_are_selected_uniformly_enough() {
        // With 300 rounds, seeing all three personas is a near-certainty.
        let service = GameService::with_seed(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let round = service.start_round("Once");
            seen.insert(service.round(&round.session_id).unwrap().persona);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn session_ids_are_alphanumeric_tokens() {
        let service = GameService::with_seed(8);
        let round = service.start_round("Once");
        assert_eq!(round.session_id.len(), SESSION_ID_LEN);
        assert!(round.session_id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn quiz_draw_returns_bank_question() {
        let service = GameService::with_seed(9);
        let question = service.random_quiz();
        assert!(
            data::QUIZ_QUESTIONS
                .iter()
                .any(|q| q.question == question.question)
        );
    }
}
