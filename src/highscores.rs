//! Best-score record
//!
//! A single `{name, score}` record persisted as JSON. It is loaded once at
//! startup and replaced at most once per round, when the round beats it.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PLAYER_NAME;
use crate::platform::storage::{KeyValueStore, StorageError};

/// The stored best score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    /// Player's name
    pub name: String,
    /// Bounces in the record round
    pub score: u32,
}

impl HighScoreRecord {
    /// Whether a round scoring `score` replaces `record`
    ///
    /// Any score, zero included, beats a missing record.
    pub fn is_beaten_by(record: Option<&Self>, score: u32) -> bool {
        record.is_none_or(|r| score > r.score)
    }
}

/// Asks the player for a name when they set a new record
pub trait NamePrompt {
    /// `None` when the player dismissed the prompt
    fn request_name(&mut self, score: u32) -> Option<String>;
}

/// Prompt that always answers with the same name (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct FixedName(pub Option<String>);

impl NamePrompt for FixedName {
    fn request_name(&mut self, _score: u32) -> Option<String> {
        self.0.clone()
    }
}

/// Keeper of the best-score record
pub trait ScoreStore {
    /// Record as loaded at startup
    fn load(&mut self) -> Option<HighScoreRecord>;

    /// Replace the record if `score` beats it, returning the current record
    fn check_and_update(&mut self, score: u32) -> Option<HighScoreRecord>;
}

/// [`ScoreStore`] over a key-value backend
///
/// Write failures are logged and otherwise ignored: the new record still
/// takes effect for the rest of the session.
pub struct HighScoreBook<K, P> {
    storage: K,
    prompt: P,
    record: Option<HighScoreRecord>,
    loaded: bool,
}

impl<K: KeyValueStore, P: NamePrompt> HighScoreBook<K, P> {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highScoreRecord";

    pub fn new(storage: K, prompt: P) -> Self {
        Self {
            storage,
            prompt,
            record: None,
            loaded: false,
        }
    }

    /// Current record without touching storage
    pub fn record(&self) -> Option<&HighScoreRecord> {
        self.record.as_ref()
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    fn read(&self) -> Result<Option<HighScoreRecord>, StorageError> {
        match self.storage.get_item(Self::STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write(&mut self, record: &HighScoreRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        self.storage.set_item(Self::STORAGE_KEY, &json)
    }
}

impl<K: KeyValueStore, P: NamePrompt> ScoreStore for HighScoreBook<K, P> {
    fn load(&mut self) -> Option<HighScoreRecord> {
        if !self.loaded {
            self.loaded = true;
            self.record = match self.read() {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Could not read high score, starting fresh: {}", e);
                    None
                }
            };
            match &self.record {
                Some(r) => log::info!("Loaded high score {} by {}", r.score, r.name),
                None => log::info!("No high score found, starting fresh"),
            }
        }
        self.record.clone()
    }

    fn check_and_update(&mut self, score: u32) -> Option<HighScoreRecord> {
        if !self.loaded {
            self.load();
        }
        if !HighScoreRecord::is_beaten_by(self.record.as_ref(), score) {
            return self.record.clone();
        }

        let name = self
            .prompt
            .request_name(score)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        let record = HighScoreRecord { name, score };

        match self.write(&record) {
            Ok(()) => log::info!("New high score {} by {} saved", record.score, record.name),
            Err(e) => log::warn!("Failed to save high score: {}", e),
        }

        self.record = Some(record);
        self.record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    /// Prompt that counts how often it was asked
    struct CountingPrompt {
        name: Option<String>,
        asked: u32,
    }

    impl NamePrompt for CountingPrompt {
        fn request_name(&mut self, _score: u32) -> Option<String> {
            self.asked += 1;
            self.name.clone()
        }
    }

    /// Backend whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".into()))
        }
    }

    fn prompt(name: Option<&str>) -> CountingPrompt {
        CountingPrompt {
            name: name.map(str::to_string),
            asked: 0,
        }
    }

    #[test]
    fn test_first_record_prompts_and_persists() {
        let mut store = MemoryStore::default();
        let mut book = HighScoreBook::new(&mut store, prompt(Some("Ada")));
        assert_eq!(book.load(), None);

        let record = book.check_and_update(3).unwrap();
        assert_eq!(record, HighScoreRecord { name: "Ada".into(), score: 3 });
        assert_eq!(book.prompt.asked, 1);
        drop(book);

        let json = store.get_item("highScoreRecord").unwrap().unwrap();
        let stored: HighScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(stored, HighScoreRecord { name: "Ada".into(), score: 3 });
    }

    #[test]
    fn test_zero_score_sets_first_record() {
        let mut book = HighScoreBook::new(MemoryStore::default(), prompt(Some("Bo")));
        let record = book.check_and_update(0).unwrap();
        assert_eq!(record.score, 0);
        assert_eq!(book.prompt.asked, 1);
    }

    #[test]
    fn test_lower_or_equal_score_keeps_record() {
        let mut store = MemoryStore::default();
        store
            .set_item("highScoreRecord", r#"{"name":"Ada","score":5}"#)
            .unwrap();
        let mut book = HighScoreBook::new(store, prompt(Some("Bo")));
        assert_eq!(book.load().unwrap().score, 5);

        assert_eq!(book.check_and_update(5).unwrap().name, "Ada");
        assert_eq!(book.check_and_update(2).unwrap().name, "Ada");
        assert_eq!(book.prompt.asked, 0);

        assert_eq!(book.check_and_update(6).unwrap().name, "Bo");
        assert_eq!(book.prompt.asked, 1);
    }

    #[test]
    fn test_missing_or_empty_name_is_anonymous() {
        let mut book = HighScoreBook::new(MemoryStore::default(), prompt(None));
        assert_eq!(book.check_and_update(1).unwrap().name, "Anonymous");

        let mut book = HighScoreBook::new(MemoryStore::default(), prompt(Some("")));
        assert_eq!(book.check_and_update(1).unwrap().name, "Anonymous");
    }

    #[test]
    fn test_failed_write_keeps_record_in_memory() {
        let mut book = HighScoreBook::new(ReadOnlyStore, FixedName(Some("Cy".into())));
        let record = book.check_and_update(4).unwrap();
        assert_eq!(record.name, "Cy");
        assert_eq!(book.record(), Some(&record));
    }

    #[test]
    fn test_corrupt_record_treated_as_missing() {
        let mut store = MemoryStore::default();
        store.set_item("highScoreRecord", "not json").unwrap();
        let mut book = HighScoreBook::new(store, FixedName::default());
        assert_eq!(book.load(), None);
    }

    #[test]
    fn test_is_beaten_by() {
        let record = HighScoreRecord { name: "A".into(), score: 3 };
        assert!(HighScoreRecord::is_beaten_by(None, 0));
        assert!(HighScoreRecord::is_beaten_by(Some(&record), 4));
        assert!(!HighScoreRecord::is_beaten_by(Some(&record), 3));
    }
}
