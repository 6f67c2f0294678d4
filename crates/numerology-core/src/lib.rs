//! Deterministic numerology engine.
//!
//! Takes a [`BirthRecord`](numerology_model::BirthRecord) and produces every
//! figure together with the arithmetic lines that justify it. No I/O and no
//! shared mutable state: calls are independent and safe to run
//! concurrently.
//!
//! ```
//! use numerology_core::compute_numerology;
//! use numerology_model::{BirthRecord, ComputeOptions};
//!
//! # fn main() -> numerology_model::Result<()> {
//! let record = BirthRecord::new("Jean", "Dupont", "15/06/1990");
//! let result = compute_numerology(&record, &ComputeOptions::new().with_target_year(2026))?;
//! assert_eq!(result.computed.life_path.total, 2011);
//! assert_eq!(result.computed.life_path.reduced, 4);
//! assert_eq!(result.computed.expression.total, 39);
//! assert_eq!(result.computed.expression.reduced, 3);
//! assert!(result.traces.expression.contains_line("FULL BIRTH NAME = JEANDUPONT"));
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod figures;
pub mod letters;
pub mod normalize;
pub mod recap;
pub mod reduce;

pub use engine::{Y_RULE, compute_numerology};
pub use letters::{LetterClassifier, LetterKind, letter_value};
pub use normalize::{normalize_token, parse_date, split_name_field};
pub use recap::{life_path_key, recap_ages, recap_table};
pub use reduce::{digit_sum, karmic_annotation, reduce};
