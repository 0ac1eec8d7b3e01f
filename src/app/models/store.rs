//! Two-level store of soundings keyed by date, then hour
//!
//! Dates and hours keep their first-insertion (file) order. Each date bucket
//! carries its own missing-hour counter, so "99_0", "99_1", ... restart for
//! every new date.

use std::collections::HashMap;

use crate::constants::MISSING_HOUR_SEPARATOR;
use crate::{Error, Result};

/// All soundings of one date
#[derive(Debug, Clone)]
pub struct DateBucket<S> {
    date: String,
    hours: Vec<(String, S)>,
    missing_hour_count: usize,
}

impl<S> DateBucket<S> {
    fn new(date: String) -> Self {
        Self {
            date,
            hours: Vec::new(),
            missing_hour_count: 0,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn get(&self, hour: &str) -> Option<&S> {
        self.hours.iter().find(|(h, _)| h == hour).map(|(_, s)| s)
    }

    pub fn contains_hour(&self, hour: &str) -> bool {
        self.get(hour).is_some()
    }

    /// Hour keys in insertion order
    pub fn hours(&self) -> impl Iterator<Item = &str> {
        self.hours.iter().map(|(h, _)| h.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> {
        self.hours.iter().map(|(h, s)| (h.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Number of missing-hour keys handed out for this date
    pub fn missing_hour_count(&self) -> usize {
        self.missing_hour_count
    }

    /// Next `"{sentinel}_{n}"` key for this date
    pub fn next_missing_hour_key(&mut self, sentinel: &str) -> String {
        let key = format!(
            "{}{}{}",
            sentinel, MISSING_HOUR_SEPARATOR, self.missing_hour_count
        );
        self.missing_hour_count += 1;
        key
    }

    /// Insert under `hour`, returning the sounding it replaced
    pub fn insert(&mut self, hour: String, sounding: S) -> Option<S> {
        match self.hours.iter_mut().find(|(h, _)| *h == hour) {
            Some((_, slot)) => Some(std::mem::replace(slot, sounding)),
            None => {
                self.hours.push((hour, sounding));
                None
            }
        }
    }
}

/// Soundings keyed by date key then hour key
#[derive(Debug, Clone)]
pub struct KeyedStore<S> {
    buckets: Vec<DateBucket<S>>,
    index: HashMap<String, usize>,
}

impl<S> Default for KeyedStore<S> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S> KeyedStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, date: &str) -> Option<&DateBucket<S>> {
        self.index.get(date).map(|&i| &self.buckets[i])
    }

    /// Bucket for `date`, creating it if needed; the flag is true when created
    pub fn bucket_or_insert(&mut self, date: &str) -> (&mut DateBucket<S>, bool) {
        match self.index.get(date).copied() {
            Some(i) => (&mut self.buckets[i], false),
            None => {
                let i = self.buckets.len();
                self.buckets.push(DateBucket::new(date.to_string()));
                self.index.insert(date.to_string(), i);
                (&mut self.buckets[i], true)
            }
        }
    }

    /// Insert under exact date and hour keys, returning any replaced sounding
    pub fn insert(&mut self, date: &str, hour: &str, sounding: S) -> Option<S> {
        let (bucket, _) = self.bucket_or_insert(date);
        bucket.insert(hour.to_string(), sounding)
    }

    pub fn get(&self, date: &str, hour: &str) -> Option<&S> {
        self.bucket(date)?.get(hour)
    }

    pub fn contains(&self, date: &str, hour: &str) -> bool {
        self.get(date, hour).is_some()
    }

    /// Look up a sounding, naming the missing key in the error
    pub fn lookup(&self, store_name: &str, date: &str, hour: &str) -> Result<&S> {
        let bucket = self
            .bucket(date)
            .ok_or_else(|| Error::date_not_found(store_name, date))?;
        bucket
            .get(hour)
            .ok_or_else(|| Error::hour_not_found(store_name, date, hour))
    }

    /// Date keys in insertion order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.date.as_str())
    }

    /// Hour keys of `date`, empty when the date is absent
    pub fn hours(&self, date: &str) -> Vec<&str> {
        self.bucket(date)
            .map(|b| b.hours().collect())
            .unwrap_or_default()
    }

    pub fn buckets(&self) -> impl Iterator<Item = &DateBucket<S>> {
        self.buckets.iter()
    }

    /// Every `(date, hour, sounding)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &S)> {
        self.buckets
            .iter()
            .flat_map(|b| b.iter().map(move |(h, s)| (b.date.as_str(), h, s)))
    }

    /// Number of dates
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of soundings across all dates
    pub fn sounding_count(&self) -> usize {
        self.buckets.iter().map(DateBucket::len).sum()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut store = KeyedStore::new();
        assert!(store.is_empty());

        store.insert("2018-01-01", "00", 1);
        store.insert("2018-01-01", "12", 2);
        store.insert("2018-01-02", "00", 3);

        assert_eq!(store.len(), 2);
        assert_eq!(store.sounding_count(), 3);
        assert_eq!(store.get("2018-01-01", "12"), Some(&2));
        assert_eq!(store.get("2018-01-03", "00"), None);
        assert_eq!(store.hours("2018-01-01"), vec!["00", "12"]);
        assert!(store.hours("2018-01-03").is_empty());
    }

    #[test]
    fn test_keys_keep_file_order() {
        let mut store = KeyedStore::new();
        store.insert("2018-1-10", "12", 'a');
        store.insert("2018-1-2", "00", 'b');

        assert_eq!(store.dates().collect::<Vec<_>>(), vec!["2018-1-10", "2018-1-2"]);
        let all: Vec<_> = store.iter().collect();
        assert_eq!(all, vec![("2018-1-10", "12", &'a'), ("2018-1-2", "00", &'b')]);
    }

    #[test]
    fn test_insert_replaces_same_hour() {
        let mut store = KeyedStore::new();
        assert_eq!(store.insert("2018-01-01", "00", 1), None);
        assert_eq!(store.insert("2018-01-01", "00", 2), Some(1));
        assert_eq!(store.sounding_count(), 1);
        assert_eq!(store.get("2018-01-01", "00"), Some(&2));
    }

    #[test]
    fn test_missing_hour_counter_is_per_bucket() {
        let mut store: KeyedStore<u8> = KeyedStore::new();

        let (bucket, created) = store.bucket_or_insert("2018-01-01");
        assert!(created);
        assert_eq!(bucket.next_missing_hour_key("99"), "99_0");
        assert_eq!(bucket.next_missing_hour_key("99"), "99_1");

        let (bucket, created) = store.bucket_or_insert("2018-01-02");
        assert!(created);
        assert_eq!(bucket.next_missing_hour_key("99"), "99_0");

        let (bucket, created) = store.bucket_or_insert("2018-01-01");
        assert!(!created);
        assert_eq!(bucket.missing_hour_count(), 2);
    }

    #[test]
    fn test_lookup_errors() {
        let mut store = KeyedStore::new();
        store.insert("2018-01-01", "00", 1);

        assert_eq!(*store.lookup("raw", "2018-01-01", "00").unwrap(), 1);

        match store.lookup("raw", "2018-01-05", "00") {
            Err(Error::KeyNotFound { date, hour, .. }) => {
                assert_eq!(date, "2018-01-05");
                assert_eq!(hour, None);
            }
            other => panic!("expected date lookup failure, got {:?}", other),
        }

        match store.lookup("converted", "2018-01-01", "12") {
            Err(Error::KeyNotFound { store, hour, .. }) => {
                assert_eq!(store, "converted");
                assert_eq!(hour.as_deref(), Some("12"));
            }
            other => panic!("expected hour lookup failure, got {:?}", other),
        }
    }
}
