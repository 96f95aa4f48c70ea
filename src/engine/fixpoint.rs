// SPDX-License-Identifier: GPL-2.0

//! Worklist-driven fixpoint iteration
//!
//! One [`FixpointEngine`] analyzes one function body: it seeds an abstract
//! value per program value, then repeatedly recomputes pending values and,
//! whenever a recomputation changes the stored value, pushes every direct
//! dependent back onto the worklist. With monotone transfer functions over
//! the range lattice the loop reaches the least fixpoint; an iteration cap
//! guards against non-monotone extensions.
//!
//! The store and worklist are constructed fresh per run and owned by the
//! engine; nothing is carried across analyzed functions.

use crate::core::error::{AnalysisError, Result};
use crate::core::log::{AnalysisLog, LogLevel};
use crate::domain::value::AbstractValue;
use crate::engine::config::AnalysisConfig;
use crate::engine::report;
use crate::engine::stats::EngineStats;
use crate::engine::worklist::Worklist;
use crate::ir::function::{FunctionBody, ValueId};
use crate::stdlib::{format, String};
use crate::store::value_store::ValueStore;

/// Phase of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Seeding the store and worklist.
    Initializing,
    /// Draining the worklist.
    Iterating,
    /// Worklist empty; the store is frozen.
    Converged,
}

/// Fixpoint driver for one analyzed function.
#[derive(Debug)]
pub struct FixpointEngine<'a> {
    func: &'a FunctionBody,
    store: ValueStore,
    worklist: Worklist,
    phase: EnginePhase,
    config: AnalysisConfig,
    stats: EngineStats,
    log: AnalysisLog,
}

impl<'a> FixpointEngine<'a> {
    /// Create an engine with the default configuration.
    pub fn new(func: &'a FunctionBody) -> Self {
        Self::with_config(func, AnalysisConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(func: &'a FunctionBody, config: AnalysisConfig) -> Self {
        Self {
            func,
            store: ValueStore::for_function(func),
            worklist: Worklist::new(func.len()),
            phase: EnginePhase::Initializing,
            config,
            stats: EngineStats::default(),
            log: AnalysisLog::with_max_size(config.log_level, config.max_log_size),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// The per-run log.
    pub fn log(&self) -> &AnalysisLog {
        &self.log
    }

    /// Run the analysis to convergence.
    pub fn run(&mut self) -> Result<()> {
        self.initialize();
        self.iterate()?;
        self.phase = EnginePhase::Converged;
        self.stats.peak_worklist = self.worklist.peak_len();
        if self.log.enabled(LogLevel::Info) {
            let msg = format!(
                "converged: {} values, {} popped, {} updates",
                self.func.len(),
                self.stats.items_popped,
                self.stats.updates
            );
            self.log.info(&msg);
        }
        Ok(())
    }

    /// Seed every value in program order and enqueue every
    /// instruction-defined value exactly once.
    ///
    /// Arguments and constants depend on nothing that changes, so they
    /// are stored but never queued.
    fn initialize(&mut self) {
        debug_assert_eq!(self.phase, EnginePhase::Initializing);
        for id in self.func.ids() {
            let seed = self.store.evaluate(self.func, id);
            self.store.set(id, seed);
            self.stats.values_seeded += 1;
            if self.log.enabled(LogLevel::Trace) {
                let msg = format!("seed {} = {}", id, seed);
                self.log.trace(&msg);
            }
            if self.func.def(id).is_instruction() {
                self.worklist.push(id);
            }
        }
        self.phase = EnginePhase::Iterating;
    }

    /// Drain the worklist, propagating changes along use-def edges.
    fn iterate(&mut self) -> Result<()> {
        debug_assert_eq!(self.phase, EnginePhase::Iterating);
        while let Some(id) = self.worklist.pop() {
            self.stats.items_popped += 1;
            if self.stats.items_popped > self.config.max_iterations as u64 {
                self.log.error("iteration limit exceeded");
                return Err(AnalysisError::IterationLimitExceeded(
                    self.config.max_iterations,
                ));
            }

            let new = self.store.evaluate(self.func, id);
            if !self.store.set(id, new) {
                self.stats.stable_recomputes += 1;
                continue;
            }

            self.stats.updates += 1;
            if self.log.enabled(LogLevel::Debug) {
                let msg = format!("update {} = {}", id, new);
                self.log.debug(&msg);
            }
            for &user in self.func.users(id) {
                if self.worklist.push(user) {
                    self.stats.reenqueues += 1;
                } else {
                    self.stats.duplicates_skipped += 1;
                }
            }
        }
        Ok(())
    }

    /// Freeze the run into queryable results.
    ///
    /// Fails with [`AnalysisError::NotConverged`] unless [`Self::run`]
    /// completed.
    pub fn into_results(self) -> Result<AnalysisResults> {
        if self.phase != EnginePhase::Converged {
            return Err(AnalysisError::NotConverged);
        }
        Ok(AnalysisResults {
            store: self.store,
            stats: self.stats,
            log: self.log,
        })
    }
}

/// Final abstract values of one converged analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResults {
    store: ValueStore,
    stats: EngineStats,
    log: AnalysisLog,
}

impl AnalysisResults {
    /// Final abstract value of a program value.
    ///
    /// Values the run never stored (impossible after a full run, but kept
    /// total for robustness) read as `Bottom`.
    pub fn query(&self, id: ValueId) -> AbstractValue {
        self.store.peek(id).unwrap_or(AbstractValue::Bottom)
    }

    /// Run statistics.
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// The run's log transcript.
    pub fn log(&self) -> &AnalysisLog {
        &self.log
    }

    /// Render the per-value report for this run.
    pub fn render(&self, func: &FunctionBody) -> String {
        report::render(func, self)
    }
}

/// Analyze one function with the default configuration.
pub fn analyze(func: &FunctionBody) -> Result<AnalysisResults> {
    analyze_with_config(func, AnalysisConfig::default())
}

/// Analyze one function with an explicit configuration.
pub fn analyze_with_config(func: &FunctionBody, config: AnalysisConfig) -> Result<AnalysisResults> {
    let mut engine = FixpointEngine::with_config(func, config);
    engine.run()?;
    engine.into_results()
}
