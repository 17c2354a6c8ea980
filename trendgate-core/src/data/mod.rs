//! Bar sources: CSV files and deterministic synthetic series.
//!
//! Network download is the data collaborator's job; the core only consumes
//! an ordered bar sequence. CSV covers real data handed over as files,
//! synthetic covers tests, benches, and offline runs.

pub mod csv;
pub mod synthetic;

pub use csv::load_csv;
pub use synthetic::{flat_bars, sine_bars, trending_bars};
