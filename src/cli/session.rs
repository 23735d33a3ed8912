/*!
 * Interactive Session
 *
 * Collects segment sizes and processes at the prompt, runs them through an
 * allocator, and prints the layout before allocation, after allocation and
 * after one optional deallocation.
 */

use super::input::Prompter;
use super::render::write_layout;
use crate::core::errors::InputResult;
use crate::core::types::Size;
use crate::core::AllocatorConfig;
use crate::memory::{
    AllocationOutcome, DeallocationOutcome, MemoryLayout, Process, QuickFitAllocator,
    SegmentAllocator,
};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Everything a session did, for callers that want more than the transcript
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub segment_sizes: Vec<Size>,
    pub processes: Vec<Process>,
    pub allocations: Vec<AllocationOutcome>,
    /// None when no input process carried the requested name
    pub deallocation: Option<DeallocationOutcome>,
    pub final_layout: MemoryLayout,
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: AllocatorConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: AllocatorConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    /// Run with a fresh `QuickFitAllocator` built from the prompted sizes
    #[instrument(skip_all, fields(policy = %self.config.policy))]
    pub fn run(mut self) -> InputResult<SessionSummary> {
        let segment_sizes = self.read_segment_sizes()?;
        let processes = self.read_processes()?;
        let mut allocator = QuickFitAllocator::with_config(&segment_sizes, &self.config);
        self.drive(&mut allocator, segment_sizes, processes)
    }

    /// Allocate every process in order, then deallocate one by name
    pub fn drive<A: SegmentAllocator>(
        &mut self,
        allocator: &mut A,
        segment_sizes: Vec<Size>,
        processes: Vec<Process>,
    ) -> InputResult<SessionSummary> {
        write_layout(
            self.prompter.output(),
            "Initial Memory Layout:",
            &allocator.display_memory(),
        )?;

        writeln!(self.prompter.output())?;
        writeln!(self.prompter.output(), "Allocating Processes:")?;
        let mut allocations = Vec::with_capacity(processes.len());
        for process in &processes {
            let outcome = allocator.allocate_process(process);
            writeln!(self.prompter.output(), "{}", outcome)?;
            allocations.push(outcome);
        }

        write_layout(
            self.prompter.output(),
            "Memory After Allocation:",
            &allocator.display_memory(),
        )?;

        let name = self
            .prompter
            .prompt("\nEnter the name of the process to deallocate: ", "process to deallocate")?;
        let deallocation = match processes.iter().find(|p| p.name().as_str() == name.trim()) {
            Some(process) => {
                let outcome = allocator.deallocate_process(process);
                writeln!(self.prompter.output(), "{}", outcome)?;
                Some(outcome)
            }
            None => {
                debug!(name = %name.trim(), "No input process with that name");
                None
            }
        };

        let final_layout = allocator.display_memory();
        write_layout(
            self.prompter.output(),
            "Memory After Deallocation:",
            &final_layout,
        )?;
        self.prompter.output().flush()?;

        Ok(SessionSummary {
            segment_sizes,
            processes,
            allocations,
            deallocation,
            final_layout,
        })
    }

    fn read_segment_sizes(&mut self) -> InputResult<Vec<Size>> {
        writeln!(self.prompter.output(), "Define memory segments\n")?;
        let count = self
            .prompter
            .read_count("Enter the number of memory segments: ", "number of memory segments")?;

        (1..=count)
            .map(|i| {
                self.prompter.read_size(
                    &format!("Enter size for Memory Segment(16/32/64/128/256) {}: ", i),
                    &format!("memory segment {} size", i),
                )
            })
            .collect()
    }

    fn read_processes(&mut self) -> InputResult<Vec<Process>> {
        writeln!(self.prompter.output(), "Define processes\n")?;
        let count = self
            .prompter
            .read_count("Enter the number of processes: ", "number of processes")?;

        let mut processes = Vec::with_capacity(count);
        for i in 1..=count {
            let size = self.prompter.read_size(
                &format!("Enter size for Process {}: ", i),
                &format!("process {} size", i),
            )?;
            let name = self.prompter.read_name(
                &format!("Enter name for Process {}: ", i),
                &format!("process {} name", i),
            )?;
            processes.push(Process::new(size, name));
        }
        Ok(processes)
    }
}
