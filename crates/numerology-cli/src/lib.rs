//! Library side of the numerology CLI: logging setup, override files, and
//! terminal rendering.

pub mod logging;
pub mod overrides;
pub mod summary;
