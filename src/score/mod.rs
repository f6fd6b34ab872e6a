//! Risk-weighted posture scoring.
//!
//! ```text
//! weight(r)      = 1 × replicas (if > 1) × desired nodes (daemon sets) × kind table
//! control.raw    = base × Σ weight(failed)
//! control.wcs    = base × Σ weight(all)
//! control.score  = raw / wcs
//! framework      = 100 × Σ raw / Σ wcs
//! improvement    = 100 × Σ (raw × improvement ratio) / Σ wcs
//! ```
//!
//! The base score is applied once: a control's worst case already carries
//! it, so the framework denominator is Σ wcs and not base × wcs.
//!
//! Higher framework scores mean more of the weighted surface is failing.

pub mod control;
pub mod engine;
pub mod framework;
pub mod resource;

pub use engine::ScoreEngine;
