//! # Secondary Signals
//!
//! Optional content fetched from third-party providers (horoscope, dream,
//! search as `google`, video as `tiktok`) and reduced to short excerpts. Signals only ever change the
//! record's `externalSignals` text; they never change control flow.

pub mod errors;
pub mod excerpt;
pub mod gatherer;
pub mod report;
pub mod source;

pub use errors::{SignalError, SignalResult};
pub use excerpt::excerpt;
pub use gatherer::SignalGatherer;
pub use report::{SignalOutcome, SignalReport};
pub use source::{HttpSource, SignalFuture, SignalKind, SignalSource};
