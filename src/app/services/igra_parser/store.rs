//! Flushing finished soundings into the raw store

use tracing::{debug, warn};

use super::stats::ParseStats;
use crate::app::models::{RawSounding, RawStore};
use crate::config::{DuplicateHourPolicy, ReaderConfig};
use crate::{Error, Result};

/// Store a completed sounding under its date key and hour key
///
/// A sounding whose hour equals the configured missing-hour sentinel gets a
/// fresh `"{sentinel}_{n}"` key, with `n` counted per date. Any other hour
/// that already exists under the date is resolved by the duplicate policy.
/// Returns the hour key the sounding was stored under.
pub fn flush_sounding(
    store: &mut RawStore,
    sounding: RawSounding,
    config: &ReaderConfig,
    stats: &mut ParseStats,
) -> Result<String> {
    let date = sounding.date_key();
    let hour = sounding.hour().to_string();
    let sentinel = config.missing_hour.trim();

    check_level_count(&sounding, &date, &hour, stats);

    let (bucket, created) = store.bucket_or_insert(&date);
    if created {
        debug!("New date bucket {}", date);
    }

    let hour_key = if hour == sentinel {
        bucket.next_missing_hour_key(sentinel)
    } else {
        if bucket.contains_hour(&hour) {
            match config.duplicate_hours {
                DuplicateHourPolicy::Reject => {
                    return Err(Error::duplicate_sounding(date, hour));
                }
                DuplicateHourPolicy::Overwrite => {
                    warn!(
                        "Sounding {} {} appears twice, keeping the later one",
                        date, hour
                    );
                    stats.soundings_overwritten += 1;
                }
            }
        }
        hour
    };

    debug!(
        "Stored sounding {} {} with {} levels",
        date,
        hour_key,
        sounding.level_count()
    );
    bucket.insert(hour_key.clone(), sounding);
    stats.soundings_stored += 1;

    Ok(hour_key)
}

fn check_level_count(sounding: &RawSounding, date: &str, hour: &str, stats: &mut ParseStats) {
    if let Some(declared) = sounding.declared_levels() {
        let read = sounding.level_count();
        if declared != read {
            debug!(
                "Sounding {} {} declares {} levels but has {}",
                date, hour, declared, read
            );
            stats.level_count_mismatches += 1;
        }
    }
}
