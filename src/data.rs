//! Static game content: the Markov transition table, the completion templates
//! for the context-aware and human-like personas, the per-persona explanation
//! blocks, the concept comparison catalog, and the quiz bank.
//!
//! The template keyword lists are ordered and matched first-match-wins; that
//! ordering is part of the game content (it keeps each persona's "tells"
//! consistent with the explanations and quiz answers), so these tables are
//! plain ordered slices rather than maps.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// Prompt used when the client sends none (or an empty one).
pub const DEFAULT_PROMPT: &str = "The cat sat on the";

/// Markov transitions keyed by the lowercased, punctuation-stripped last word.
static MARKOV_TRANSITIONS: &[(&str, &[&str])] = &[
    ("the", &["cat", "dog", "house", "man", "tree", "bird"]),
    ("cat", &["ran", "jumped", "slept", "meowed", "sat"]),
    ("dog", &["barked", "ran", "ate", "slept", "played"]),
    ("on", &["the", "a", "top", "fire", "monday"]),
    ("sat", &["down", "there", "quietly", "on", "still"]),
    ("in", &["the", "a", "silence", "winter", "spring"]),
    ("was", &["a", "the", "not", "very", "quite"]),
    ("a", &["cat", "dog", "house", "tree", "bird", "man"]),
    ("and", &["the", "a", "then", "but", "so"]),
];

/// Fallback word set for last words with no transition entry.
pub static MARKOV_DEFAULT: &[&str] = &["and", "but", "the", "very", "quite", "then"];

static MARKOV_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| MARKOV_TRANSITIONS.iter().copied().collect());

/// Looks up the Markov follow-word set for a (normalized) word.
pub fn markov_options(word: &str) -> &'static [&'static str] {
    MARKOV_MAP.get(word).copied().unwrap_or(MARKOV_DEFAULT)
}

/// Context-aware (GPT) completions, scanned in order; first keyword found as a
/// substring of the lowercased prompt wins.
pub static GPT_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "cat",
        &[
            " mat and began grooming itself contentedly. The afternoon sunlight streamed through the window, creating a warm spot that the cat had claimed as its own.",
            " comfortable cushion, watching the world go by. It had perfected the art of relaxation, a skill that took years of dedicated practice.",
            " windowsill, observing the birds outside with great interest. Its tail swished rhythmically as it calculated the distance to its prey.",
        ],
    ),
    (
        "dog",
        &[
            " park, wagging its tail excitedly as children played nearby. The happy dog loved these afternoon outings with its owner.",
            " grass and rolled over, seeking belly rubs from anyone who would oblige. Life was simple and good for this friendly canine.",
            " porch, keeping watch over the neighborhood. Every passing car and pedestrian was carefully noted and assessed.",
        ],
    ),
    (
        "scientist",
        &[
            " laboratory bench, carefully examining the experimental results. The data suggested a breakthrough that could revolutionize the field.",
            " whiteboard, sketching out equations that represented months of theoretical work. Colleagues gathered around, discussing the implications.",
        ],
    ),
    (
        "once",
        &[
            " upon a time, in a land far away, there lived a curious explorer who dreamed of discovering new worlds.",
            " the decision was made, there was no turning back. The team had committed to a path that would change everything.",
        ],
    ),
];

/// Default GPT completions when no keyword matches.
pub static GPT_DEFAULT: &[&str] = &[
    " beautiful morning when everything seemed possible. The world was full of opportunities waiting to be discovered.",
    " moment of clarity when all the pieces finally came together. Understanding dawned like sunrise breaking through clouds.",
    " journey that would test resolve and determination. But with careful planning and persistence, success was within reach.",
];

/// Human-like (GPH) completions: personal memory, metaphor, emotional depth.
pub static GPH_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "cat",
        &[
            " mat—a familiar throne from which she surveyed her kingdom. I remember my grandmother had a cat just like this, always choosing the sunniest spot with the wisdom of a creature who understood comfort on a profound level. There's something timeless about cats, isn't there?",
            " windowsill, and I was transported back to my childhood home. We had a tabby named Whiskers who would sit exactly like this, contemplating the mysteries of the universe—or perhaps just planning her next nap. Animals have this way of teaching us presence.",
        ],
    ),
    (
        "dog",
        &[
            " beach, and watching him made me think about pure joy. Dogs have this incredible ability to live completely in the moment—something we humans spend years of meditation trying to achieve. That unbridled happiness, that's real wisdom.",
            " trail, and I couldn't help but reflect on loyalty and companionship. My father always said you could judge a person's character by how their dog behaved. There's a profound truth in that—dogs reflect back our own capacity for love.",
        ],
    ),
    (
        "scientist",
        &[
            " crossroads between curiosity and discovery. You know, being a scientist isn't just about data and experiments—it's about maintaining childlike wonder while wielding adult rigor. My mentor once told me that every equation is a poem written in the language of the universe.",
            " edge of understanding, that thrilling and terrifying space where knowledge meets the unknown. Science is fundamentally human—driven by our deep need to make sense of our existence, to find patterns in chaos.",
        ],
    ),
    (
        "once",
        &[
            " upon a time... those four words unlock something primal in us, don't they? We're storytelling creatures, building meaning through narrative. I think about how my children's eyes would light up when I'd start a story that way—that anticipation of possibility.",
            " the path seemed clear, but life has this way of revealing complexity where we expected simplicity. That's the human experience, isn't it? Navigating uncertainty with nothing but hope, memory, and the stories we tell ourselves.",
        ],
    ),
];

/// Default GPH completions when no keyword matches.
pub static GPH_DEFAULT: &[&str] = &[
    " journey of discovery, and thinking about it now, I'm reminded of what my teacher told me when I was young: 'Every ending is just another beginning dressed up.' Humans don't just predict the future—we create meaning from experience, weaving past and present into something new.",
    " threshold between what was and what could be. You know, there's this beautiful Japanese concept—'ma'—the space between things. It's in these pauses that we find meaning, where imagination lives and breathes.",
];

/// Static explanation block returned with every graded guess.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub clues: &'static [&'static str],
    pub description: &'static str,
}

pub static GPT_EXPLANATION: Explanation = Explanation {
    clues: &[
        "Maintains coherent narrative throughout",
        "References earlier context in the prompt",
        "Logical flow and thematic consistency",
        "Uses attention to link ideas across the text",
        "Novel but predictable continuation",
    ],
    description: "GPT maintains context across thousands of tokens, using its attention mechanism to weigh relationships throughout the entire prompt. The completion is coherent, stays on topic, and demonstrates understanding of the full context.",
};

pub static GPM_EXPLANATION: Explanation = Explanation {
    clues: &[
        "Loses coherence after a few words",
        "Only considers the last 1-2 words",
        "Random-seeming word associations",
        "No awareness of earlier context",
        "Degrades into word salad quickly",
    ],
    description: "GPM (Markov Chain) only remembers the last word or two. It has no attention mechanism and cannot maintain context. Each word is chosen based solely on what came immediately before, leading to rapid degradation of meaning.",
};

pub static GPH_EXPLANATION: Explanation = Explanation {
    clues: &[
        "Includes personal memories or experiences",
        "Uses metaphors and rich imagery",
        "Reflects emotional depth",
        "Questions and philosophical musings",
        "References culture, history, or relationships",
        "Self-awareness and metacognition",
    ],
    description: "GPH (Human) draws from lived experience, creating meaning through personal memory, cultural knowledge, and emotional understanding. Humans don't just predict—they create metaphors, question, reflect, and weave past experiences into present expression.",
};

/// One row of the concept comparison catalog.
pub struct ConceptEntry {
    pub dimension: &'static str,
    pub gpt: &'static str,
    pub gpm: &'static str,
    pub gph: &'static str,
    pub analogy: &'static str,
}

pub static CONCEPTS: &[ConceptEntry] = &[
    ConceptEntry {
        dimension: "Context Window",
        gpt: "Thousands of tokens of prior text",
        gpm: "Last 1-3 words only",
        gph: "Flexible memory span; can recall both short and long contexts",
        analogy: "GPT: remembering the whole conversation. GPM: remembering only the last word. GPH: recalling both the last sentence AND a story from childhood.",
    },
    ConceptEntry {
        dimension: "Tokenization",
        gpt: "Splits into subword units",
        gpm: "Works only at word level",
        gph: "Works with words, meanings, metaphors, and symbols",
        analogy: "GPT: \"bio-\" + \"-logy.\" GPM: only exact \"biology.\" GPH: understands \"life study\" as meaning \"biology.\"",
    },
    ConceptEntry {
        dimension: "Parameters",
        gpt: "Billions of learned weights encode patterns",
        gpm: "Transition counts only",
        gph: "Billions of neurons and synapses adaptively encoding experiences",
        analogy: "GPT: vast associative memory. GPM: tally marks. GPH: lived experiences stored in neural networks.",
    },
    ConceptEntry {
        dimension: "Training Objective",
        gpt: "Predict next token, minimize error",
        gpm: "Count and normalize co-occurrences",
        gph: "Learn from environment, feedback, trial, error, reflection",
        analogy: "GPT: essay practice. GPM: memorizing a text. GPH: learning language from parents, teachers, and peers.",
    },
    ConceptEntry {
        dimension: "Attention Mechanism",
        gpt: "Weighs relationships across whole context",
        gpm: "None; only local adjacency",
        gph: "Flexible focus; can zoom in on details or zoom out to themes",
        analogy: "GPT: linking far-apart ideas. GPM: noticing last word only. GPH: following a complex story arc.",
    },
    ConceptEntry {
        dimension: "Embeddings / Representation",
        gpt: "Vector space of meaning",
        gpm: "No embeddings: words are symbols",
        gph: "Rich conceptual network including senses, emotions, and context",
        analogy: "GPT: \"king\" ~ \"queen.\" GPM: \"king\" = \"banana.\" GPH: \"king\" evokes power, history, crown, responsibility.",
    },
    ConceptEntry {
        dimension: "Generativity",
        gpt: "Produces novel text",
        gpm: "Recombines fragments, often incoherently",
        gph: "Produces novel ideas, metaphors, inventions",
        analogy: "GPT: new joke. GPM: shuffled punchlines. GPH: invents humor, irony, poetry.",
    },
    ConceptEntry {
        dimension: "Coherence Across Sentences",
        gpt: "Maintains topic and logic across paragraphs",
        gpm: "Collapses quickly",
        gph: "Maintains coherence across conversations, days, years",
        analogy: "GPT: consistent essay. GPM: nonsense after 2-3 lines. GPH: consistent worldview across decades.",
    },
    ConceptEntry {
        dimension: "Knowledge Storage",
        gpt: "Stored in billions of weights",
        gpm: "None; just word transitions",
        gph: "Stored in memory, language, culture, experience",
        analogy: "GPT: encoded in parameters. GPM: surface-level mimicry. GPH: lived and embodied knowledge.",
    },
];

/// Serializes the concept catalog into its wire shape: an object keyed by
/// dimension, each value holding the three model descriptions plus an analogy.
pub fn concepts_json() -> Value {
    let mut table = Map::new();
    for entry in CONCEPTS {
        table.insert(
            entry.dimension.to_string(),
            json!({
                "GPT": entry.gpt,
                "GPM": entry.gpm,
                "GPH": entry.gph,
                "analogy": entry.analogy,
            }),
        );
    }
    Value::Object(table)
}

/// One multiple-choice question from the quiz bank.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
    pub explanation: &'static str,
}

const PERSONA_OPTIONS: &[&str] = &["GPT", "GPM", "GPH"];

pub static QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "Which model can remember a conversation from last week?",
        options: PERSONA_OPTIONS,
        correct: "GPH",
        explanation: "Humans (GPH) have flexible long-term memory spanning years. GPT has a context window of thousands of tokens (current conversation only). GPM only remembers 1-3 words.",
    },
    QuizQuestion {
        question: "Which model understands \"H₂O\" means water at multiple levels (chemical, cultural, experiential)?",
        options: PERSONA_OPTIONS,
        correct: "GPH",
        explanation: "Humans have rich conceptual networks including senses, emotions, and context. GPT has vector embeddings. GPM treats words as mere symbols.",
    },
    QuizQuestion {
        question: "Which model would generate \"the cat sat on the fire and but very then\"?",
        options: PERSONA_OPTIONS,
        correct: "GPM",
        explanation: "Markov chains (GPM) only look at the last word, leading to incoherent word salad. They collapse into nonsense within 2-3 words.",
    },
    QuizQuestion {
        question: "Which model uses an attention mechanism to weigh relationships across the entire input?",
        options: PERSONA_OPTIONS,
        correct: "GPT",
        explanation: "GPT's transformer architecture uses attention to link ideas across the whole context. GPM has no attention (only local adjacency). GPH has flexible focus but different mechanisms.",
    },
    QuizQuestion {
        question: "Which model learns through trial, error, feedback, and reflection?",
        options: PERSONA_OPTIONS,
        correct: "GPH",
        explanation: "Humans learn from lived experience through complex processes including feedback and reflection. GPT learns by predicting next tokens. GPM just counts co-occurrences.",
    },
    QuizQuestion {
        question: "Which model stores knowledge in billions of trained weights?",
        options: PERSONA_OPTIONS,
        correct: "GPT",
        explanation: "GPT stores patterns in billions of learned parameters. GPM has no knowledge storage (just transition counts). GPH stores knowledge in memory, language, and culture.",
    },
    QuizQuestion {
        question: "If shown \"king\" which model would think of power, history, crown, and responsibility?",
        options: PERSONA_OPTIONS,
        correct: "GPH",
        explanation: "Humans have rich conceptual networks with sensory, emotional, and cultural associations. GPT has semantic embeddings (\"king\" ~ \"queen\"). GPM treats \"king\" as just another symbol.",
    },
    QuizQuestion {
        question: "Which model can split \"biology\" into \"bio-\" and \"-logy\"?",
        options: PERSONA_OPTIONS,
        correct: "GPT",
        explanation: "GPT uses subword tokenization to handle word pieces. GPM works only at word level. GPH understands meanings and can decompose concepts flexibly.",
    },
];
