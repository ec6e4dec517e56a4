// src/template/runner.rs

use log::{debug, info};
use crate::config::KitConfig;
use crate::core::Result;
use crate::io::{set_io_in, ProblemIo};

/// One problem's solution. Called once per test case.
pub trait Solve {
    fn solve(&mut self, io: &mut ProblemIo) -> Result<()>;
}

impl<F> Solve for F
where
    F: FnMut(&mut ProblemIo) -> Result<()>,
{
    fn solve(&mut self, io: &mut ProblemIo) -> Result<()> {
        self(io)
    }
}

/// Drives a [`Solve`] implementation: sets up I/O, reads the case count and
/// calls `solve` for each case.
pub struct Template {
    config: KitConfig,
}

impl Template {
    pub fn new(config: KitConfig) -> Self {
        Template { config }
    }

    /// Opens the problem files (or the console) and runs every test case.
    /// Returns the number of cases solved.
    pub fn run<S: Solve>(&self, solver: &mut S) -> Result<usize> {
        let io = set_io_in(&self.config.working_dir, &self.config.problem)?;
        self.run_with(io, solver)
    }

    /// Runs against an already prepared [`ProblemIo`].
    pub fn run_with<S: Solve>(&self, mut io: ProblemIo, solver: &mut S) -> Result<usize> {
        let cases: usize = if self.config.multi_test { io.next()? } else { 1 };
        info!("Running {} test case(s)", cases);

        for case in 1..=cases {
            debug!("Case {}", case);
            solver.solve(&mut io)?;
        }

        io.finish()?;
        Ok(cases)
    }
}
