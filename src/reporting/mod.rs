//! Final report assembly.

mod generator;

pub use generator::ReportAssembler;
