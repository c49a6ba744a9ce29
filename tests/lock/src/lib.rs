//! Shared helpers for the lock test suite: a brute-force shortest-path
//! oracle, grid generators, and the fixture-binary plumbing used by the
//! cross-process tests.

pub mod fixture;
