//! Decoded event records

use std::fmt;

use evprobe_transport::RawEvent;

use crate::feature::Feature;

/// Kernel timestamp of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventTime {
    pub seconds: i64,
    pub microseconds: i64,
}

/// One decoded event: which feature, what value, and when
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord<'d> {
    feature: Feature<'d>,
    value: i32,
    time: Option<EventTime>,
}

impl<'d> EventRecord<'d> {
    /// Record without a timestamp, as built on the write path
    pub fn new(feature: Feature<'d>, value: i32) -> Self {
        Self {
            feature,
            value,
            time: None,
        }
    }

    pub(crate) fn with_time(feature: Feature<'d>, value: i32, time: EventTime) -> Self {
        Self {
            feature,
            value,
            time: Some(time),
        }
    }

    pub fn feature(&self) -> Feature<'d> {
        self.feature
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn time(&self) -> Option<EventTime> {
        self.time
    }

    /// Raw record for this event; the time fields are zero when absent
    pub fn to_raw(&self) -> RawEvent {
        let category = self.feature.category().code();
        match self.time {
            Some(time) => RawEvent::at(
                time.seconds,
                time.microseconds,
                category,
                self.feature.code(),
                self.value,
            ),
            None => RawEvent::new(category, self.feature.code(), self.value),
        }
    }
}

impl fmt::Display for EventRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(time) = self.time {
            write!(f, "{}.{:06} ", time.seconds, time.microseconds)?;
        }
        write!(
            f,
            "{} {} = {}",
            self.feature.category().name(),
            self.feature,
            self.value
        )
    }
}
