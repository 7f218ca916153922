//! Round state machine
//!
//! Owns the game lifecycle: `idle --start--> running --stop|timeout--> ended
//! --start--> running`. A round couples one grid with its eagerly computed
//! solution set; found words accumulate while running, missed words are
//! derived exactly once at the running-to-ended transition. Live submissions
//! go through the board-only path matcher, never the dictionary; scoring a
//! grid-valid non-word is intentional.

use crate::core::Grid;
use crate::dictionary::DictionaryIndex;
use crate::search;
use std::collections::BTreeSet;

/// Countdown length of one round, in ticks (one tick per second in the UIs)
pub const ROUND_TICKS: u32 = 60;

/// Default board dimensions
pub const DEFAULT_ROWS: usize = 4;
/// Default board dimensions
pub const DEFAULT_COLS: usize = 4;

/// Lifecycle state of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Running,
    Ended,
}

/// Result of one word submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    NotRunning,
    EmptyInput,
    AlreadyFound,
    NotOnBoard,
}

impl SubmitOutcome {
    /// Human-readable status message for this outcome
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Word added!",
            Self::NotRunning => "Game is not running.",
            Self::EmptyInput => "Enter a word.",
            Self::AlreadyFound => "Already found.",
            Self::NotOnBoard => "That word is not on this board.",
        }
    }

    /// True when the word was appended to the found list
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// One game session: dictionary, current round, and score bookkeeping
///
/// The dictionary loads once (modeling the startup fetch completing); until it
/// has, `start` is a no-op. Grid and solution set are replaced together at
/// every start and frozen from the end of the round until the next start.
pub struct Session {
    dictionary: Option<DictionaryIndex>,
    grid: Option<Grid>,
    solutions: BTreeSet<String>,
    found: Vec<String>,
    missed: BTreeSet<String>,
    state: RoundState,
    time_left: u32,
    rows: usize,
    cols: usize,
}

impl Session {
    /// Create an idle session with no dictionary loaded yet
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            dictionary: None,
            grid: None,
            solutions: BTreeSet::new(),
            found: Vec::new(),
            missed: BTreeSet::new(),
            state: RoundState::Idle,
            time_left: 0,
            rows,
            cols,
        }
    }

    /// Complete the one-shot dictionary load
    ///
    /// An empty index is a valid, if degenerate, dictionary: rounds can start
    /// and the solution set will simply be empty.
    pub fn load_dictionary(&mut self, index: DictionaryIndex) {
        self.dictionary = Some(index);
    }

    /// True once the dictionary load has completed
    #[must_use]
    pub const fn dictionary_ready(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Start a round on a fresh random grid
    ///
    /// No-op (returns false) until the dictionary is loaded. Otherwise
    /// replaces the grid and solution set, clears found words, and resets the
    /// countdown.
    pub fn start(&mut self) -> bool {
        if !self.dictionary_ready() {
            return false;
        }
        let grid = Grid::random(self.rows, self.cols, &mut rand::rng());
        self.start_with_grid(grid)
    }

    /// Start a round on a specific grid (explicit boards, tests)
    pub fn start_with_grid(&mut self, grid: Grid) -> bool {
        let Some(dictionary) = &self.dictionary else {
            return false;
        };

        self.solutions = search::solve(&grid, dictionary);
        self.grid = Some(grid);
        self.found.clear();
        self.missed.clear();
        self.state = RoundState::Running;
        self.time_left = ROUND_TICKS;
        true
    }

    /// End the round and compute the missed-word report
    ///
    /// No-op unless running; a stale timer firing after the round has moved on
    /// cannot corrupt state.
    pub fn stop(&mut self) {
        if self.state != RoundState::Running {
            return;
        }
        self.state = RoundState::Ended;
        self.missed = self
            .solutions
            .iter()
            .filter(|w| !self.found.contains(*w))
            .cloned()
            .collect();
    }

    /// Advance the countdown by one tick; reaching zero ends the round
    pub fn tick(&mut self) {
        if self.state != RoundState::Running {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.stop();
        }
    }

    /// Submit a word for the current round
    ///
    /// Input is trimmed and uppercased. The check is board-only: any string
    /// traceable on the grid scores, dictionary word or not.
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let word = input.trim().to_uppercase();

        if self.state != RoundState::Running {
            return SubmitOutcome::NotRunning;
        }
        if word.is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        if self.found.contains(&word) {
            return SubmitOutcome::AlreadyFound;
        }

        let on_board = self
            .grid
            .as_ref()
            .is_some_and(|grid| search::word_exists(&word, grid));
        if !on_board {
            return SubmitOutcome::NotOnBoard;
        }

        self.found.push(word);
        SubmitOutcome::Accepted
    }

    /// Current round state
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The current board, if a round has ever started
    #[must_use]
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Remaining countdown ticks
    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Words the user has confirmed this round, in submission order
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Solution words not found, available once the round has ended
    #[must_use]
    pub const fn missed_words(&self) -> &BTreeSet<String> {
        &self.missed
    }

    /// Every dictionary word on the board (revealable post-round on demand)
    #[must_use]
    pub const fn solutions(&self) -> &BTreeSet<String> {
        &self.solutions
    }
}
