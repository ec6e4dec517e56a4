// src/main.rs
//
// General contest template. Console I/O unless `problem` is configured
// (usaco.toml or USACO_PROBLEM); set `multi_test` to read a case count first.

#[allow(unused_imports)]
use usaco_kit::core::*;
#[allow(unused_imports)]
use usaco_kit::grid::{in_bounds, neighbors};
#[allow(unused_imports)]
use usaco_kit::integer_math::{binpow, binpow_mod, gcd, lcm};
use usaco_kit::io::ProblemIo;
use usaco_kit::template::{launch, Solve};
use usaco_kit::Result;
use std::process::ExitCode;

struct Solution;

impl Solve for Solution {
    fn solve(&mut self, _io: &mut ProblemIo) -> Result<()> {
        // Your solution here
        Ok(())
    }
}

fn main() -> ExitCode {
    launch("", &mut Solution)
}
