//! # Statistics Tracker
//!
//! Every engine owns an [`AlgorithmStats`] and appends exactly one record
//! per completed `step()`. The history is an append-only log of three
//! parallel series (best fitness, average fitness, diversity) so charting
//! layers can plot convergence without re-deriving anything.
//!
//! Long interactive sessions can cap the history length with
//! [`AlgorithmStats::with_retention`]; by default the full history is
//! kept and downsampling is left to the consumer.

/// Append-only per-generation history: three parallel series with one
/// entry per completed step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsHistory {
    /// Best-so-far fitness after each generation.
    pub best_fitness: Vec<f64>,
    /// Average population fitness of each generation.
    pub average_fitness: Vec<f64>,
    /// Population diversity of each generation.
    pub diversity: Vec<f64>,
}

impl StatsHistory {
    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    /// Whether no generation has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }

    fn push(&mut self, best: f64, average: f64, diversity: f64) {
        self.best_fitness.push(best);
        self.average_fitness.push(average);
        self.diversity.push(diversity);
    }

    fn trim_front(&mut self, keep: usize) {
        let len = self.len();
        if len > keep {
            let drop = len - keep;
            self.best_fitness.drain(..drop);
            self.average_fitness.drain(..drop);
            self.diversity.drain(..drop);
        }
    }

    fn clear(&mut self) {
        self.best_fitness.clear();
        self.average_fitness.clear();
        self.diversity.clear();
    }
}

/// Per-generation statistics snapshot plus the cumulative history.
///
/// Fitness values are recorded in the owning algorithm's internal
/// convention; the generation counter equals the number of completed
/// steps since the last (re-)initialization.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmStats {
    /// Number of completed generations.
    pub current_generation: usize,
    /// Best-so-far fitness.
    pub best_fitness: f64,
    /// Average fitness of the current population.
    pub average_fitness: f64,
    /// Diversity of the current population.
    pub diversity: f64,
    /// The full recorded history.
    pub history: StatsHistory,
    retention: Option<usize>,
}

impl AlgorithmStats {
    /// Creates an empty tracker keeping the full history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tracker that retains at most `cap` history
    /// records, dropping the oldest ones first. A cap of 0 keeps no
    /// history at all (the current snapshot stays available).
    pub fn with_retention(cap: usize) -> Self {
        Self {
            retention: Some(cap),
            ..Self::default()
        }
    }

    /// Records one completed generation.
    pub fn record(&mut self, best: f64, average: f64, diversity: f64) {
        self.current_generation += 1;
        self.best_fitness = best;
        self.average_fitness = average;
        self.diversity = diversity;
        self.history.push(best, average, diversity);
        if let Some(cap) = self.retention {
            self.history.trim_front(cap);
        }
    }

    /// Clears the snapshot and history, keeping the retention setting.
    pub fn reset(&mut self) {
        self.current_generation = 0;
        self.best_fitness = 0.0;
        self.average_fitness = 0.0;
        self.diversity = 0.0;
        self.history.clear();
    }
}
