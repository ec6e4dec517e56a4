// src/bin/io_template.rs
//
// File I/O template for official USACO problems: reads `<problem>.in`, writes
// `<problem>.out`. Change the default name below (or set USACO_PROBLEM), e.g.
// "Cow Dance Show" -> "cowdance".

#[allow(unused_imports)]
use std::io::Write;
use std::process::ExitCode;
use usaco_kit::io::ProblemIo;
use usaco_kit::template::{launch, Solve};
use usaco_kit::{watch, Result};

const PROBLEM: &str = "problemname";

struct Solution;

impl Solve for Solution {
    fn solve(&mut self, io: &mut ProblemIo) -> Result<()> {
        let n: usize = io.next()?;
        watch!(n);

        // Your solution here

        // Output answer
        Ok(())
    }
}

fn main() -> ExitCode {
    launch(PROBLEM, &mut Solution)
}
