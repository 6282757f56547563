//! Niching GA evolutionary loop.
//!
//! [`NicheGa`] runs: initialize → raw evaluation, then per generation
//! tournament selection → crossover → mutation → shared evaluation →
//! best tracking.

use super::config::NicheConfig;
use super::fitness::{evaluate, with_raw_fitness, EvalMode};
use super::peaks::find_peaks;
use crate::ga::{find_best, operators, selection, BestTracker, Cell, Population};
use crate::random::rng_from_seed;
use crate::report::GenerationReport;
use crate::GaError;
use rand::Rng;

/// State carried from one generation to the next.
#[derive(Debug, Clone, Default)]
pub struct NicheState {
    /// Best-ever cell and per-generation history (raw fitness).
    pub tracker: BestTracker,

    /// Number of completed generations.
    pub generation: usize,
}

/// Result of a niching run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NicheResult {
    /// Best cell of the whole run, scored with raw fitness.
    pub best: Cell,

    /// Generation at which `best` was found.
    pub best_iter: Option<usize>,

    /// Best cell (raw fitness) of every generation.
    pub best_gene_list: Vec<Cell>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Final population with shared fitness.
    pub population: Population,

    peak_cap: usize,
    peak_separation: f64,
    report_interval: usize,
}

impl NicheResult {
    /// Up to the configured cap of mutually separated peaks, taken from the
    /// `k` best entries of `best_gene_list`.
    pub fn peaks(&self, k: usize) -> Vec<Cell> {
        find_peaks(&self.best_gene_list, k, self.peak_cap, self.peak_separation)
    }

    /// Tabular summary of the run at the configured interval.
    pub fn report(&self) -> GenerationReport<'_> {
        GenerationReport::niche(
            &self.best_gene_list,
            &self.best,
            self.best_iter,
            self.report_interval,
        )
    }
}

/// Niching GA over the cosine landscape.
///
/// # Usage
///
/// ```
/// use nichega::niching::{NicheConfig, NicheGa};
///
/// let config = NicheConfig::default()
///     .with_population_size(40)
///     .with_max_iter(20)
///     .with_seed(42);
/// let ga = NicheGa::new(config).unwrap();
/// let result = ga.run();
/// assert_eq!(result.best_gene_list.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct NicheGa {
    config: NicheConfig,
}

impl NicheGa {
    /// Validates `config` and builds the optimizer.
    pub fn new(config: NicheConfig) -> Result<Self, GaError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NicheConfig {
        &self.config
    }

    /// Samples a fresh population and scores it with raw fitness.
    pub fn initialize<R: Rng>(&self, rng: &mut R) -> Population {
        let mut population: Population = (0..self.config.population_size)
            .map(|_| {
                Cell::new(
                    self.config.x_bounds.sample(rng),
                    self.config.y_bounds.sample(rng),
                )
            })
            .collect();
        self.evaluate(&mut population, EvalMode::Init);
        population
    }

    /// Scores `population` in place.
    pub fn evaluate(&self, population: &mut [Cell], mode: EvalMode) {
        evaluate(population, mode, self.config.radius, self.config.alpha);
    }

    /// Runs one generation and returns its population.
    ///
    /// The generation best is chosen by raw fitness, since shared scores
    /// are not comparable across generations.
    pub fn step<R: Rng>(
        &self,
        population: &[Cell],
        state: &mut NicheState,
        rng: &mut R,
    ) -> Population {
        let cfg = &self.config;

        let mut next = selection::tournament(population, cfg.select_times, rng);
        operators::crossover(&mut next, cfg.p_crossover, rng);
        operators::mutate(&mut next, cfg.p_mutation, cfg.x_bounds, cfg.y_bounds, rng);
        self.evaluate(&mut next, EvalMode::Shared);

        let raw: Vec<Cell> = next.iter().map(with_raw_fitness).collect();
        if let Some(generation_best) = find_best(&raw) {
            if state.tracker.record(state.generation, generation_best) {
                log::debug!(
                    "generation {}: new best {:.6} at ({:.4}, {:.4})",
                    state.generation,
                    generation_best.fitness,
                    generation_best.x,
                    generation_best.y
                );
            }
        }
        state.generation += 1;
        next
    }

    /// Runs the configured number of generations with the configured seed.
    pub fn run(&self) -> NicheResult {
        let mut rng = rng_from_seed(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs the configured number of generations using `rng`.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> NicheResult {
        log::info!(
            "niching GA: population {}, {} generations",
            self.config.population_size,
            self.config.max_iter
        );

        let mut population = self.initialize(rng);
        let mut state = NicheState::default();
        for _ in 0..self.config.max_iter {
            population = self.step(&population, &mut state, rng);
        }

        let best = *state.tracker.best();
        let best_iter = state.tracker.best_iter();
        log::info!(
            "niching GA finished: best {:.6} at ({:.4}, {:.4}), generation {:?}",
            best.fitness,
            best.x,
            best.y,
            best_iter
        );

        NicheResult {
            best,
            best_iter,
            generations: state.generation,
            best_gene_list: state.tracker.into_history(),
            population,
            peak_cap: self.config.peak_cap,
            peak_separation: self.config.peak_separation,
            report_interval: self.config.report_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::niching::fitness_func;
    use crate::random::create_rng;

    fn small_config() -> NicheConfig {
        NicheConfig::default()
            .with_population_size(60)
            .with_max_iter(100)
            .with_seed(42)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = NicheConfig::default().with_population_size(0);
        assert!(NicheGa::new(config).is_err());
    }

    #[test]
    fn test_initialize_within_bounds() {
        let ga = NicheGa::new(small_config()).unwrap();
        let mut rng = create_rng(42);
        let pop = ga.initialize(&mut rng);
        assert_eq!(pop.len(), 60);
        for cell in &pop {
            assert!(ga.config().x_bounds.contains(cell.x));
            assert!(ga.config().y_bounds.contains(cell.y));
            assert_eq!(cell.fitness, fitness_func(cell.x, cell.y));
        }
    }

    #[test]
    fn test_step_preserves_size() {
        let ga = NicheGa::new(small_config()).unwrap();
        let mut rng = create_rng(42);
        let mut state = NicheState::default();
        let pop = ga.initialize(&mut rng);
        let next = ga.step(&pop, &mut state, &mut rng);
        assert_eq!(next.len(), pop.len());
        assert_eq!(state.generation, 1);
        assert_eq!(state.tracker.history().len(), 1);
    }

    #[test]
    fn test_best_is_monotonic() {
        let ga = NicheGa::new(small_config()).unwrap();
        let mut rng = create_rng(42);
        let mut state = NicheState::default();
        let mut pop = ga.initialize(&mut rng);
        let mut previous = f64::NEG_INFINITY;
        for _ in 0..50 {
            pop = ga.step(&pop, &mut state, &mut rng);
            let best = state.tracker.best().fitness;
            assert!(best >= previous);
            previous = best;
        }
    }

    #[test]
    fn test_run_reaches_a_peak() {
        let ga = NicheGa::new(small_config()).unwrap();
        let result = ga.run();
        assert_eq!(result.generations, 100);
        assert_eq!(result.best_gene_list.len(), 100);
        assert!(
            result.best.fitness > 95.0,
            "expected a near-peak best, got {}",
            result.best.fitness
        );
        for cell in &result.best_gene_list {
            assert!(result.best.fitness >= cell.fitness);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = NicheGa::new(small_config()).unwrap().run();
        let b = NicheGa::new(small_config()).unwrap().run();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_gene_list, b.best_gene_list);
    }

    #[test]
    fn test_peaks_respect_cap() {
        let result = NicheGa::new(small_config()).unwrap().run();
        let peaks = result.peaks(30);
        assert!(!peaks.is_empty());
        assert!(peaks.len() <= 4);
    }
}
