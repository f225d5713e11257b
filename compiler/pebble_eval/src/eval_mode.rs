//! Evaluation modes.
//!
//! The mode decides the default print destination and whether the run is
//! bounded. Bounds are opt-in: a program run in `Interpret` mode behaves like
//! a plain tree walker and a non-terminating `while` never stops.

use crate::errors::{depth_limit_exceeded, loop_budget_exceeded, ExecResult};

/// How an interpreter runs a program.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Print to stdout, no limits.
    #[default]
    Interpret,
    /// Print to stdout, abort once a limit is hit.
    Bounded {
        /// Total `while` iterations allowed across the whole run.
        max_loop_iterations: u64,
        /// Maximum number of nested blocks open at once.
        max_depth: usize,
    },
    /// No limits, output discarded unless a handler is set explicitly.
    Silent,
}

impl EvalMode {
    /// Whether `print` reaches stdout by default.
    #[inline]
    pub fn allows_io(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    #[inline]
    pub fn max_loop_iterations(&self) -> Option<u64> {
        match self {
            Self::Bounded {
                max_loop_iterations,
                ..
            } => Some(*max_loop_iterations),
            Self::Interpret | Self::Silent => None,
        }
    }

    /// Block nesting limit, or `None` to rely on stack growth alone.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        match self {
            Self::Bounded { max_depth, .. } => Some(*max_depth),
            Self::Interpret | Self::Silent => None,
        }
    }
}

/// Per-run counters for the active mode.
pub struct ModeState {
    iterations: u64,
    loop_budget: Option<u64>,
    max_depth: Option<usize>,
}

impl ModeState {
    pub fn new(mode: &EvalMode) -> Self {
        ModeState {
            iterations: 0,
            loop_budget: mode.max_loop_iterations(),
            max_depth: mode.max_depth(),
        }
    }

    /// Count one `while` iteration against the budget.
    #[inline]
    pub fn count_iteration(&mut self) -> ExecResult {
        self.iterations = self.iterations.saturating_add(1);
        match self.loop_budget {
            Some(limit) if self.iterations > limit => Err(loop_budget_exceeded(limit)),
            _ => Ok(()),
        }
    }

    /// Check that one more block may open when `open_blocks` are open already.
    #[inline]
    pub fn check_depth(&self, open_blocks: usize) -> ExecResult {
        match self.max_depth {
            Some(limit) if open_blocks >= limit => Err(depth_limit_exceeded(limit)),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn reset(&mut self) {
        self.iterations = 0;
    }
}
