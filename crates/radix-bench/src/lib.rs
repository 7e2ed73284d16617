//! Benchmark-only crate; see the `benches/` directory.
//!
//! Holds no library code of its own. The manifest wires criterion
//! harnesses for blob and list micro-benchmarks.
