//! GPT vs GPM vs GPH: an educational guessing game.
//!
//! The server continues a prompt with one of three simulated "model" personas
//! (context-aware GPT, short-memory Markov GPM, human-like GPH) and the player
//! guesses which one wrote it. Build with `--features web` for the axum HTTP
//! surface; the default `cli` feature provides offline generation and quiz
//! commands.

pub mod data;
pub mod game;
pub mod generator;
pub mod session;
#[cfg(feature = "web")]
pub mod web;

pub use data::{ConceptEntry, Explanation, QuizQuestion, concepts_json};
pub use game::{GameError, GameService, GuessOutcome, StartedRound};
pub use generator::{Persona, UnknownPersona, generate};
pub use session::{Round, SessionStore};
