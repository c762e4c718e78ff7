// src/config/options.rs

/// What a meet crawl does when one race fails to parse or coerce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeetPolicy {
    /// One race failure invalidates the whole meet.
    AllOrNothing,
    /// Failing races are logged and skipped; the rest accumulate.
    PartialSuccess,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    pub policy: MeetPolicy,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self { policy: MeetPolicy::AllOrNothing }
    }
}
