//! Proof module: canonical bytes and content digests for results.
//!
//! Determinism claims (same grid, same strategy → same exploration order;
//! same model, same config → same value table) are checked by comparing
//! digests produced here, in-process and across processes.

pub mod canon;
pub mod hash;
