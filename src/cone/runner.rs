//! Cone GA evolutionary loop.
//!
//! [`ConeGa`] runs: initialize (repaired, scored on total area), then per
//! generation roulette selection → crossover + repair → mutation +
//! repair → evaluation under the current objective → best tracking →
//! objective switching.

use super::config::ConeConfig;
use super::objective::{volume, Objective};
use super::repair::VolumeRepair;
use super::state::ObjectiveState;
use crate::ga::{find_best, operators, selection, BestTracker, Cell, Population};
use crate::random::rng_from_seed;
use crate::report::GenerationReport;
use crate::GaError;
use rand::Rng;

/// State carried from one generation to the next.
#[derive(Debug, Clone)]
pub struct ConeState {
    /// Best-ever cell and per-generation history.
    ///
    /// Fitness values are compared across objective switches as-is.
    pub tracker: BestTracker,

    /// Active objective and stagnation counter.
    pub objective: ObjectiveState,

    /// Number of completed generations.
    pub generation: usize,
}

impl ConeState {
    pub fn new(stagnation_limit: usize) -> Self {
        Self {
            tracker: BestTracker::new(),
            objective: ObjectiveState::new(stagnation_limit),
            generation: 0,
        }
    }
}

/// Result of a cone run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConeResult {
    /// Best cell of the whole run (negated area under its objective).
    pub best: Cell,

    /// Generation at which `best` was found.
    pub best_iter: Option<usize>,

    /// Best cell of every generation.
    pub best_gene_list: Vec<Cell>,

    /// Objective each generation was evaluated under.
    pub objective_history: Vec<Objective>,

    /// Number of objective switches during the run.
    pub switches: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Final population.
    pub population: Population,

    report_interval: usize,
}

impl ConeResult {
    /// Volume of the best cone.
    pub fn best_volume(&self) -> f64 {
        volume(self.best.x, self.best.y)
    }

    /// Tabular summary of the run at the configured interval.
    pub fn report(&self) -> GenerationReport<'_> {
        GenerationReport::cone(
            &self.best_gene_list,
            &self.best,
            self.best_iter,
            self.report_interval,
        )
    }
}

/// Volume-constrained cone GA with objective switching.
///
/// # Usage
///
/// ```
/// use nichega::cone::{ConeConfig, ConeGa};
///
/// let config = ConeConfig::default().with_max_iter(50).with_seed(42);
/// let ga = ConeGa::new(config).unwrap();
/// let result = ga.run().unwrap();
/// assert!(result.best_volume() > 200.0);
/// ```
#[derive(Debug, Clone)]
pub struct ConeGa {
    config: ConeConfig,
    repair: VolumeRepair,
}

impl ConeGa {
    /// Validates `config` and builds the optimizer.
    pub fn new(config: ConeConfig) -> Result<Self, GaError> {
        config.validate()?;
        let repair = config.repair();
        Ok(Self { config, repair })
    }

    pub fn config(&self) -> &ConeConfig {
        &self.config
    }

    pub fn repairer(&self) -> &VolumeRepair {
        &self.repair
    }

    /// Samples a feasible population scored on total area.
    ///
    /// No best exists yet, so repair resamples until feasible.
    pub fn initialize<R: Rng>(&self, rng: &mut R) -> Result<Population, GaError> {
        (0..self.config.population_size)
            .map(|_| {
                let r = self.config.r_bounds.sample(rng);
                let h = self.config.h_bounds.sample(rng);
                let (r, h) = self.repair.repair(r, h, None, rng)?;
                Ok(Cell::with_fitness(r, h, Objective::TotalArea.evaluate(r, h)))
            })
            .collect()
    }

    /// Scores `population` in place under `objective`.
    pub fn evaluate(&self, population: &mut [Cell], objective: Objective) {
        for cell in population.iter_mut() {
            cell.fitness = objective.evaluate(cell.x, cell.y);
        }
    }

    /// Runs `population.len()` crossover trials, repairing both parents
    /// after every exchange.
    pub fn crossover<R: Rng>(
        &self,
        population: &mut [Cell],
        best: Option<&Cell>,
        rng: &mut R,
    ) -> Result<(), GaError> {
        let n = population.len();
        for _ in 0..n {
            if let Some((idx1, idx2)) = operators::crossover_pair(n, self.config.p_crossover, rng)
            {
                operators::exchange_genes(population, idx1, idx2);
                self.repair.repair_cell(&mut population[idx1], best, rng)?;
                self.repair.repair_cell(&mut population[idx2], best, rng)?;
            }
        }
        Ok(())
    }

    /// Mutates every cell, then repairs it whether or not it changed.
    pub fn mutate<R: Rng>(
        &self,
        population: &mut [Cell],
        best: Option<&Cell>,
        rng: &mut R,
    ) -> Result<(), GaError> {
        let cfg = &self.config;
        for cell in population.iter_mut() {
            operators::mutate_cell(cell, cfg.p_mutation, cfg.r_bounds, cfg.h_bounds, rng);
            self.repair.repair_cell(cell, best, rng)?;
        }
        Ok(())
    }

    /// Runs one generation and returns its population.
    pub fn step<R: Rng>(
        &self,
        population: &[Cell],
        state: &mut ConeState,
        rng: &mut R,
    ) -> Result<Population, GaError> {
        let objective = state.objective.objective();

        let mut next = selection::roulette(population, rng);
        let best = state.tracker.known_best().copied();
        self.crossover(&mut next, best.as_ref(), rng)?;
        self.mutate(&mut next, best.as_ref(), rng)?;
        self.evaluate(&mut next, objective);

        if let Some(generation_best) = find_best(&next) {
            state.tracker.record(state.generation, generation_best);
            log::debug!(
                "generation {} [{}]: best area {:.4} at (r {:.4}, h {:.4})",
                state.generation,
                objective,
                -generation_best.fitness,
                generation_best.x,
                generation_best.y
            );
            if let Some(switched) = state.objective.observe(generation_best.fitness) {
                log::info!(
                    "generation {}: objective stalled, switching {} -> {}",
                    state.generation,
                    objective,
                    switched
                );
            }
        }
        state.generation += 1;
        Ok(next)
    }

    /// Runs the configured number of generations with the configured seed.
    pub fn run(&self) -> Result<ConeResult, GaError> {
        let mut rng = rng_from_seed(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs the configured number of generations using `rng`.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Result<ConeResult, GaError> {
        log::info!(
            "cone GA: population {}, {} generations, volume > {}",
            self.config.population_size,
            self.config.max_iter,
            self.config.min_volume
        );

        let mut population = self.initialize(rng)?;
        let mut state = ConeState::new(self.config.stagnation_limit);
        let mut objective_history = Vec::with_capacity(self.config.max_iter);
        let mut switches = 0usize;

        for _ in 0..self.config.max_iter {
            let objective = state.objective.objective();
            objective_history.push(objective);
            population = self.step(&population, &mut state, rng)?;
            if state.objective.objective() != objective {
                switches += 1;
            }
        }

        let best = *state.tracker.best();
        let best_iter = state.tracker.best_iter();
        log::info!(
            "cone GA finished: best area {:.4}, volume {:.4}, {} objective switches",
            -best.fitness,
            volume(best.x, best.y),
            switches
        );

        Ok(ConeResult {
            best,
            best_iter,
            best_gene_list: state.tracker.into_history(),
            objective_history,
            switches,
            generations: state.generation,
            population,
            report_interval: self.config.report_interval,
        })
    }
}
