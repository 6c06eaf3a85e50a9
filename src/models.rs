use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A question/answer pair parsed from one input line.
///
/// Both sides are trimmed and never empty; the only way to build one is
/// [`Card::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    question: String,
    answer: String,
}

impl Card {
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Deck {
    pub name: String,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Reorders the cards in place with a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Previous,
    Next,
    Flip,
    Shuffle,
    /// Back to the first card, question side up, keeping the deck order.
    Reset,
    Load(Deck),
}

/// Deck plus the (index, flipped) view over it.
///
/// Commands consume the session and hand back the updated one, so the caller
/// always owns the only copy of the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    deck: Deck,
    index: usize,
    flipped: bool,
}

impl Session {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            index: 0,
            flipped: false,
        }
    }

    pub fn apply(self, command: Command) -> Self {
        self.apply_with_rng(command, &mut rand::thread_rng())
    }

    pub fn apply_with_rng<R: Rng + ?Sized>(mut self, command: Command, rng: &mut R) -> Self {
        match command {
            Command::Previous => {
                let index = self.index();
                if index > 0 {
                    self.index = index - 1;
                    self.flipped = false;
                }
            }
            Command::Next => {
                let index = self.index();
                if index < self.deck.len().saturating_sub(1) {
                    self.index = index + 1;
                    self.flipped = false;
                }
            }
            Command::Flip => {
                self.flipped = !self.flipped;
            }
            Command::Shuffle => {
                self.deck.shuffle(rng);
                self.reset_view();
            }
            Command::Reset => {
                self.reset_view();
            }
            Command::Load(deck) => {
                self.deck = deck;
                self.reset_view();
            }
        }
        self
    }

    fn reset_view(&mut self) {
        self.index = 0;
        self.flipped = false;
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current index, clamped to the deck bounds (0 for an empty deck).
    pub fn index(&self) -> usize {
        self.index.min(self.deck.len().saturating_sub(1))
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped && !self.deck.is_empty()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.index())
    }

    /// The face the user is looking at: the answer when flipped, otherwise
    /// the question.
    pub fn displayed_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.is_flipped() {
                card.answer()
            } else {
                card.question()
            }
        })
    }

    /// One-based position and deck length, e.g. `(1, 4)` for "Card 1 of 4".
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.deck.is_empty() {
            None
        } else {
            Some((self.index() + 1, self.deck.len()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Success(text) | StatusMessage::Error(text) => {
                text.as_str()
            }
        }
    }
}
