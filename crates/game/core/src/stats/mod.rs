//! Stat engine.
//!
//! Derived stats are recomputed on demand from the hero's class, level, and
//! equipment. Nothing is cached and nothing is mutated, so any number of
//! readers can evaluate heroes against a shared catalog.
//!
//! ```text
//! stat = class.base(kind) × (level if kind scales) + Σ contribution(kind, slot)
//! ```
//!
//! Per-slot contributions come from a static table indexed by [`StatKind`]:
//!
//! | kind        | contribution                         |
//! |-------------|--------------------------------------|
//! | atk/def/hp  | `item.stat × quality.factor`         |
//! | eva         | `item.eva` (unscaled)                |
//! | crit chance | `item.crit × slot atk contribution`  |

pub mod engine;
pub mod kind;
pub mod sheet;

pub use engine::{Contribution, compute_stat, contribution};
pub use kind::StatKind;
pub use sheet::StatSheet;
