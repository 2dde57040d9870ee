//! # Generation Pipeline
//!
//! One generation round:
//!
//! 1. Gather signals concurrently (failures only mark a signal absent)
//! 2. Read the clock and assemble the interpretation record
//! 3. Derive the numeral with the configured salt and mode
//! 4. Append a history entry (a failed write is logged, not returned)
//!
//! The engine stays pure; everything impure lives here.

use std::sync::Arc;

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, ConfigResult, ServiceConfig, DEFAULT_PINNED_YEAR};
use crate::engine::{
    Derivation, DerivationMode, EngineResult, InterpretationRecord, Numeral, NumeralEngine,
};
use crate::facts::Shio;
use crate::history::{FileHistoryStore, HistoryEntry, HistoryStore};
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::signals::{HttpSource, SignalGatherer, SignalKind, SignalReport};

/// Everything produced by one generation round
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub number: Numeral,
    pub record: InterpretationRecord,
    pub derivation: Derivation,
    pub report: SignalReport,
    pub entry: HistoryEntry,
    /// False if the history write failed
    pub recorded: bool,
}

/// Gathers, assembles, derives and records
pub struct Generator {
    engine: NumeralEngine,
    gatherer: SignalGatherer,
    clock: Arc<dyn Clock>,
    history: Arc<dyn HistoryStore>,
    salt: String,
    pinned_year: i32,
    shio: Shio,
    mode: DerivationMode,
}

impl Generator {
    /// Generator with no signal sources, an empty salt and default labels
    pub fn new(clock: Arc<dyn Clock>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            engine: NumeralEngine::new(),
            gatherer: SignalGatherer::default(),
            clock,
            history,
            salt: String::new(),
            pinned_year: DEFAULT_PINNED_YEAR,
            shio: Shio::Ular,
            mode: DerivationMode::default(),
        }
    }

    /// Build the production generator from validated configuration
    pub fn from_config(config: &ServiceConfig) -> ConfigResult<Self> {
        let clock = SystemClock::with_offset_hours(config.utc_offset_hours).ok_or_else(|| {
            ConfigError::invalid(
                "utc_offset_hours",
                format!("{} is not a valid offset", config.utc_offset_hours),
            )
        })?;

        let history = FileHistoryStore::open(&config.history.path, config.history.limit);

        Ok(Self::new(Arc::new(clock), Arc::new(history))
            .with_gatherer(build_gatherer(config)?)
            .with_salt(config.salt.clone())
            .with_year(config.pinned_year)
            .with_shio(config.shio)
            .with_mode(config.mode))
    }

    pub fn with_gatherer(mut self, gatherer: SignalGatherer) -> Self {
        self.gatherer = gatherer;
        self
    }

    pub fn with_engine(mut self, engine: NumeralEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.pinned_year = year;
        self
    }

    pub fn with_shio(mut self, shio: Shio) -> Self {
        self.shio = shio;
        self
    }

    pub fn with_mode(mut self, mode: DerivationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> DerivationMode {
        self.mode
    }

    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }

    /// Run one generation round.
    ///
    /// # Errors
    ///
    /// Only an engine rejection of the assembled record fails the round.
    /// Signal and history failures are reported in the result and the log.
    pub async fn generate(&self) -> EngineResult<Generation> {
        let scope = ObservationScope::begin("GENERATE");

        let report = self.gatherer.gather().await;

        let now = self.clock.now();
        let (date, time) = (now.date_naive(), now.time());
        let record =
            InterpretationRecord::assemble(date, time, self.pinned_year, self.shio, report.joined());

        let derivation = match self.engine.derive(&record, &self.salt, self.mode) {
            Ok(derivation) => derivation,
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::DerivationRejected,
                    &[("code", e.code()), ("reason", reason.as_str())],
                );
                scope.fail(&reason);
                return Err(e);
            }
        };

        let number = derivation.numeral.clone();
        let seed = derivation.seed.to_string();
        let present = report.present_count().to_string();
        log_event_with_fields(
            Event::NumeralDerived,
            &[
                ("mode", self.mode.as_str()),
                ("number", number.as_str()),
                ("seed", seed.as_str()),
                ("signals_present", present.as_str()),
            ],
        );

        let entry = HistoryEntry::new(now, number.clone(), self.mode, &report);
        let recorded = self.record(entry.clone());

        scope.complete(&[("number", number.as_str())]);

        Ok(Generation {
            number,
            record,
            derivation,
            report,
            entry,
            recorded,
        })
    }

    fn record(&self, entry: HistoryEntry) -> bool {
        let id = entry.id.to_string();
        match self.history.record(entry) {
            Ok(()) => {
                log_event_with_fields(Event::HistoryRecorded, &[("id", id.as_str())]);
                true
            }
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::HistoryWriteFailed,
                    &[("code", e.code()), ("id", id.as_str()), ("reason", reason.as_str())],
                );
                false
            }
        }
    }
}

/// One HTTP source per configured URL; the rest are reported unconfigured
fn build_gatherer(config: &ServiceConfig) -> ConfigResult<SignalGatherer> {
    let timeout = config.signals.timeout();
    let mut gatherer =
        SignalGatherer::new(timeout).with_excerpt_chars(config.signals.excerpt_chars);

    for kind in SignalKind::ALL {
        gatherer = match config.signals.url_for(kind) {
            Some(url) => {
                let source = HttpSource::new(kind, url, timeout)
                    .map_err(|e| ConfigError::invalid("signals", e.to_string()))?;
                gatherer.with_source(source)
            }
            None => gatherer.with_unconfigured(kind),
        };
    }

    Ok(gatherer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::history::{HistoryError, HistoryResult, MemoryHistoryStore};
    use crate::signals::{SignalError, SignalFuture, SignalSource};
    use chrono::{FixedOffset, TimeZone};

    struct Fixed(SignalKind, &'static str);

    impl SignalSource for Fixed {
        fn kind(&self) -> SignalKind {
            self.0
        }

        fn fetch(&self) -> SignalFuture<'_> {
            let body = self.1.to_string();
            Box::pin(async move { Ok(body) })
        }
    }

    struct Down(SignalKind);

    impl SignalSource for Down {
        fn kind(&self) -> SignalKind {
            self.0
        }

        fn fetch(&self) -> SignalFuture<'_> {
            Box::pin(async { Err(SignalError::Status(503)) })
        }
    }

    struct ReadOnly;

    impl HistoryStore for ReadOnly {
        fn record(&self, _entry: HistoryEntry) -> HistoryResult<()> {
            Err(HistoryError::Corrupt("read-only".into()))
        }

        fn list(&self) -> HistoryResult<Vec<HistoryEntry>> {
            Ok(Vec::new())
        }

        fn clear(&self) -> HistoryResult<()> {
            Ok(())
        }
    }

    fn clock_at(hour: u32, minute: u32) -> Arc<dyn Clock> {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let moment = offset.with_ymd_and_hms(2025, 8, 15, hour, minute, 0).unwrap();
        Arc::new(FixedClock::new(moment))
    }

    fn generator(history: Arc<dyn HistoryStore>) -> Generator {
        Generator::new(clock_at(23, 10), history)
    }

    #[tokio::test]
    async fn test_generate_without_signals() {
        let history = Arc::new(MemoryHistoryStore::default());
        let gen = generator(history.clone()).generate().await.unwrap();

        assert_eq!(gen.number.as_str(), "2796");
        assert_eq!(gen.record.date_iso, "2025-08-15");
        assert_eq!(gen.record.time_hhmm, "23:10");
        assert_eq!(gen.record.external_signals, None);
        assert!(gen.recorded);
        assert_eq!(history.len(), 1);
        assert_eq!(history.list().unwrap()[0].number.as_str(), "2796");
    }

    #[tokio::test]
    async fn test_generate_with_signal() {
        let gatherer = SignalGatherer::default()
            .with_source(Fixed(SignalKind::Horoscope, "sunny-flying-news-dance"))
            .with_source(Down(SignalKind::Video));
        let gen = generator(Arc::new(MemoryHistoryStore::default()))
            .with_gatherer(gatherer)
            .generate()
            .await
            .unwrap();

        assert_eq!(
            gen.record.external_signals.as_deref(),
            Some("sunny-flying-news-dance")
        );
        assert_eq!(gen.number.as_str(), "3386");
        assert_eq!(gen.entry.source_health.get("horoscope"), Some(&true));
        assert_eq!(gen.entry.source_health.get("tiktok"), Some(&false));
    }

    #[tokio::test]
    async fn test_salt_and_mode() {
        let salted = generator(Arc::new(MemoryHistoryStore::default()))
            .with_salt("pepper")
            .generate()
            .await
            .unwrap();
        assert_eq!(salted.number.as_str(), "5083");

        let plain = generator(Arc::new(MemoryHistoryStore::default()))
            .with_mode(DerivationMode::Unweighted)
            .generate()
            .await
            .unwrap();
        assert_eq!(plain.number.as_str(), "3238");
        assert!(plain.derivation.weights.is_none());
    }

    #[tokio::test]
    async fn test_history_failure_still_serves() {
        let gen = generator(Arc::new(ReadOnly)).generate().await.unwrap();
        assert_eq!(gen.number.as_str(), "2796");
        assert!(!gen.recorded);
    }

    #[tokio::test]
    async fn test_same_minute_same_number() {
        let a = Generator::new(clock_at(23, 10), Arc::new(MemoryHistoryStore::default()))
            .generate()
            .await
            .unwrap();
        let b = Generator::new(clock_at(23, 10), Arc::new(MemoryHistoryStore::default()))
            .generate()
            .await
            .unwrap();
        let c = Generator::new(clock_at(23, 11), Arc::new(MemoryHistoryStore::default()))
            .generate()
            .await
            .unwrap();
        assert_eq!(a.number, b.number);
        assert_eq!(c.number.as_str(), "3582");
    }

    #[test]
    fn test_from_config_marks_unconfigured() {
        let mut config = ServiceConfig::default();
        config.signals.dream_url = Some("http://127.0.0.1:9/dream".into());
        let generator = Generator::from_config(&config).unwrap();
        assert_eq!(generator.gatherer.source_count(), 1);
        assert_eq!(generator.mode(), DerivationMode::Weighted);
    }
}
