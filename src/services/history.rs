use crate::error::Result;
use crate::model::history::HistoryEntry;
use crate::model::translation::TranslationResult;
use crate::services::atomic::write_atomic;
use crate::services::phrasebook::hash;

use std::{
    cmp::Reverse,
    collections::HashMap,
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        HistoryStore {
            path: path.into(),
            max_entries,
        }
    }

    pub fn load(&self) -> Vec<HistoryEntry> {
        if !self.path.exists() {
            return Vec::new();
        }

        let data = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        let mut entries: Vec<HistoryEntry> = match serde_json::from_str(&data) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("failed to parse {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        for e in entries.iter_mut() {
            ensure_id(e);
        }

        let (mut entries, _removed) = dedup(entries);
        sort_entries(&mut entries);
        entries.truncate(self.max_entries);
        entries
    }

    pub fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let mut v: Vec<HistoryEntry> = entries.to_vec();

        for e in v.iter_mut() {
            ensure_id(e);
        }

        let (mut v, removed) = dedup(v);
        if removed > 0 {
            log::debug!("dropped {removed} duplicate history entries");
        }
        sort_entries(&mut v);
        v.truncate(self.max_entries);

        let json = serde_json::to_string_pretty(&v)?;
        write_atomic(&self.path, json.as_bytes())?;

        Ok(())
    }

    /// Records a translation, replacing any earlier one of the same input.
    pub fn record(&self, input: &str, result: &TranslationResult) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: hash::hash_norm(result.language, &result.normalized),
            language: result.language,
            input: input.trim().to_string(),
            output: result.text.clone(),
            matched: result.matched,
            created_at: now_secs(),
        };

        let mut entries = self.load();
        entries.retain(|e| e.id != entry.id);
        entries.insert(0, entry.clone());
        self.save(&entries)?;

        Ok(entry)
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn ensure_id(e: &mut HistoryEntry) {
    if e.id.is_empty() {
        let norm = crate::services::phrasebook::normalize::normalize(&e.input);
        e.id = hash::hash_norm(e.language, &norm);
    }
}

/// Keeps the newest entry per id at the position of its first occurrence.
/// Equal timestamps keep the earlier one.
fn dedup(entries: Vec<HistoryEntry>) -> (Vec<HistoryEntry>, usize) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<HistoryEntry> = Vec::with_capacity(entries.len());
    let mut removed = 0usize;

    for e in entries {
        match seen.get(&e.id) {
            None => {
                seen.insert(e.id.clone(), out.len());
                out.push(e);
            }
            Some(&i) => {
                if e.created_at > out[i].created_at {
                    out[i] = e;
                }
                removed += 1;
            }
        }
    }

    (out, removed)
}

/// Newest first; stable, so list order breaks ties within a second.
fn sort_entries(entries: &mut [HistoryEntry]) {
    entries.sort_by_key(|e| Reverse(e.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::language::Language;
    use crate::model::translation::MatchKind;

    fn entry(id: &str, created_at: u64) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            language: Language::Ta,
            input: format!("input {id}"),
            output: format!("output {id}"),
            matched: MatchKind::Words,
            created_at,
        }
    }

    fn result(text: &str, normalized: &str) -> TranslationResult {
        TranslationResult {
            language: Language::Hi,
            text: text.to_string(),
            normalized: normalized.to_string(),
            matched: MatchKind::Exact,
            phrase: Some(normalized.to_string()),
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"), 10);
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "[{ broken").unwrap();
        assert!(HistoryStore::new(&path, 10).load().is_empty());
    }

    #[test]
    fn save_sorts_dedups_and_caps() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("nested").join("history.json"), 2);

        store
            .save(&[entry("a", 1), entry("b", 3), entry("a", 5), entry("c", 2)])
            .unwrap();

        let loaded = store.load();
        let ids: Vec<(&str, u64)> = loaded.iter().map(|e| (e.id.as_str(), e.created_at)).collect();
        assert_eq!(ids, vec![("a", 5), ("b", 3)]);
        assert!(!dir.path().join("nested").join("history.json.tmp").exists());
    }

    #[test]
    fn record_replaces_same_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"), 10);

        let first = store.record("Thank you!", &result("धन्यवाद", "thank you")).unwrap();
        let second = store.record("thank you", &result("धन्यवाद", "thank you")).unwrap();
        store.record("Hello", &result("नमस्ते", "hello")).unwrap();

        assert_eq!(first.id, second.id);
        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().any(|e| e.input == "thank you"));
        assert!(loaded.iter().all(|e| e.input != "Thank you!"));
    }

    #[test]
    fn each_record_lands_first_and_survives_the_cap() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"), 2);

        let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
        for (i, word) in words.iter().enumerate() {
            store.record(word, &result(word, word)).unwrap();

            let loaded = store.load();
            assert_eq!(loaded[0].input, *word);
            assert_eq!(loaded.len(), (i + 1).min(2));
            if i > 0 {
                assert_eq!(loaded[1].input, words[i - 1]);
            }
        }
    }

    #[test]
    fn dedup_keeps_list_order() {
        let (kept, removed) = dedup(vec![entry("b", 4), entry("a", 4), entry("b", 4), entry("c", 1)]);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(removed, 1);
    }

    #[test]
    fn clear_empties_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"), 10);
        store.record("hi", &result("नमस्ते", "hi")).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn missing_ids_are_derived_from_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[{"language": "ta", "input": "Hello!", "output": "x", "matched": "exact", "created_at": 7}]"#,
        )
        .unwrap();

        let loaded = HistoryStore::new(&path, 10).load();
        assert_eq!(loaded[0].id, hash::hash_norm(Language::Ta, "hello"));
    }
}
