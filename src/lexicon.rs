//! The set of tracked words, with JSON persistence.

use crate::log_internal;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashMap},
    path::PathBuf,
};
use tokio::fs as tokio_fs;

const WORDS_PATH_REL_HOME: &str = ".config/jarbot/words.json";

/// Words tracked out of the box, used whenever no readable words file exists.
const DEFAULT_WORDS: &[&str] = &[
    // English
    "fuck", "shit", "bitch", "asshole", "bastard", "damn",
    // Russian
    "блять", "блядь", "сука", "пидор", "хуй", "хер", "ебать", "ебаный", "ёбаный", "бля", "мразь",
    "пидорас", "мудак", "долбоёб", "долбоеб", "ублюдок", "гандон", "гондон", "шлюха",
    "проститутка",
];

pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// Tracked words, global to the bot.  Entries are stored lower-cased, so membership is
/// case-insensitive, and the backing `BTreeSet` keeps listings sorted.
pub struct Lexicon {
    words: BTreeSet<String>,
}

/// On-disk schema versions.  An older layout partitioned the words per guild; it is accepted
/// on read and merged into one flat set.  All writes use the flat layout.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WordsFile {
    Flat { words: Vec<String> },
    Legacy { guilds: HashMap<String, LegacyGuildWords> },
}

#[derive(Serialize, Deserialize)]
struct LegacyGuildWords {
    words: Vec<String>,
}

impl WordsFile {
    fn into_words(self) -> BTreeSet<String> {
        match self {
            WordsFile::Flat { words } => words.into_iter().map(|w| w.to_lowercase()).collect(),
            WordsFile::Legacy { guilds } => guilds
                .into_values()
                .flat_map(|guild| guild.words)
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }
}

impl Lexicon {
    pub fn path() -> Result<PathBuf> {
        crate::store::path_rel_home(WORDS_PATH_REL_HOME)
    }

    fn default_words() -> BTreeSet<String> {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    }

    /// Load the tracked words from disk.  A missing, unreadable, or malformed file is not an
    /// error; the built-in default list is used instead.
    pub async fn load() -> Result<Self> {
        let path = Self::path()?;

        let (words, migrated) = match tokio_fs::read(&path).await {
            Ok(data) => match serde_json::from_slice::<WordsFile>(&data) {
                Ok(file @ WordsFile::Legacy { .. }) => (file.into_words(), true),
                Ok(file) => (file.into_words(), false),
                Err(_) => (Self::default_words(), false),
            },
            Err(_) => (Self::default_words(), false),
        };

        let lexicon = Self { words };

        if migrated {
            lexicon.save().await?;
            log_internal!("Migrated per-server words file to the flat layout");
        }

        Ok(lexicon)
    }

    pub async fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let file = WordsFile::Flat {
            words: self.words.iter().cloned().collect(),
        };
        let contents = serde_json::to_string_pretty(&file)
            .map_err(|e| anyhow!("Could not serialize words: {}", e))?;

        crate::store::write_full(&path, contents).await
    }

    /// Sorted set of tracked words.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn insert(&mut self, word: &str) -> AddOutcome {
        if self.words.insert(word.trim().to_lowercase()) {
            AddOutcome::Added
        } else {
            AddOutcome::AlreadyPresent
        }
    }

    pub fn remove(&mut self, word: &str) -> RemoveOutcome {
        if self.words.remove(&word.trim().to_lowercase()) {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotPresent
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut lex = lexicon(&[]);
        assert!(matches!(lex.insert("Damn"), AddOutcome::Added));
        assert!(matches!(lex.insert("damn"), AddOutcome::AlreadyPresent));
        assert!(matches!(lex.insert("DAMN"), AddOutcome::AlreadyPresent));
        assert_eq!(lex.words().len(), 1);
    }

    #[test]
    fn remove_unknown_word_reports_not_present() {
        let mut lex = lexicon(&["fuck"]);
        assert!(matches!(lex.remove("damn"), RemoveOutcome::NotPresent));
        assert!(matches!(lex.remove("FUCK"), RemoveOutcome::Removed));
        assert!(lex.words().is_empty());
    }

    #[test]
    fn listing_is_sorted() {
        let mut lex = lexicon(&["shit", "asshole"]);
        lex.insert("damn");
        let listed: Vec<&String> = lex.words().iter().collect();
        assert_eq!(listed, ["asshole", "damn", "shit"]);
    }

    #[test]
    fn flat_file_parses() {
        let file: WordsFile = serde_json::from_str(r#"{"words": ["Fuck", "блять"]}"#).unwrap();
        let words = file.into_words();
        assert!(words.contains("fuck"));
        assert!(words.contains("блять"));
    }

    #[test]
    fn legacy_file_merges_all_guilds() {
        let raw = r#"{
            "guilds": {
                "111": {"words": ["fuck", "damn"]},
                "222": {"words": ["damn", "сука"]}
            }
        }"#;
        let file: WordsFile = serde_json::from_str(raw).unwrap();
        assert!(matches!(file, WordsFile::Legacy { .. }));

        let words = file.into_words();
        assert_eq!(words.len(), 3);
        assert!(words.contains("fuck"));
        assert!(words.contains("damn"));
        assert!(words.contains("сука"));
    }

    #[test]
    fn flat_shape_round_trips() {
        let lex = lexicon(&["damn", "fuck"]);
        let file = WordsFile::Flat {
            words: lex.words().iter().cloned().collect(),
        };
        let raw = serde_json::to_string(&file).unwrap();
        let reparsed: WordsFile = serde_json::from_str(&raw).unwrap();
        assert_eq!(reparsed.into_words(), lex.words().clone());
    }
}
