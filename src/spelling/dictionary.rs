use crate::config::SpellCheckingConfig;
use std::collections::HashSet;
use std::path::Path;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Merged word list the spell checker consults
///
/// Built from a base `<language>.txt` file plus any configured custom
/// dictionaries. All lookups are lowercase. A missing word file is logged
/// and skipped so a partial dictionary still produces a usable run.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads the dictionary described by the spell-checking configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Names the base language, dictionary directory, and any
    ///   custom word-list files
    pub fn load(config: &SpellCheckingConfig) -> Self {
        let mut words = HashSet::new();

        let base = Path::new(&config.dictionary_dir).join(format!("{}.txt", config.language));
        load_word_file(&base, &mut words);

        for custom in &config.custom_dictionaries {
            load_word_file(Path::new(custom), &mut words);
        }

        tracing::info!("Dictionary loaded with {} words", words.len());
        Self { words }
    }

    /// Builds a dictionary directly from words, mainly for tests
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Generates correction candidates for a misspelled word
    ///
    /// Single-edit candidates present in the dictionary are preferred;
    /// two-edit candidates are only generated when no single-edit candidate
    /// exists. Candidates are sorted alphabetically and truncated to `max`.
    /// Words with non-ASCII characters get no suggestions.
    pub fn suggest(&self, word: &str, max: usize) -> Vec<String> {
        let word = word.to_lowercase();
        if !word.is_ascii() {
            return Vec::new();
        }

        let one_edit = edits1(&word);
        let mut candidates: Vec<String> = one_edit
            .iter()
            .filter(|c| self.words.contains(*c))
            .cloned()
            .collect();

        if candidates.is_empty() {
            let mut two_edit: HashSet<String> = HashSet::new();
            for edit in &one_edit {
                for second in edits1(edit) {
                    if self.words.contains(&second) {
                        two_edit.insert(second);
                    }
                }
            }
            candidates = two_edit.into_iter().collect();
        }

        candidates.sort();
        candidates.dedup();
        candidates.truncate(max);
        candidates
    }
}

/// All strings one edit away from a lowercase ASCII word
fn edits1(word: &str) -> HashSet<String> {
    let bytes = word.as_bytes();
    let mut edits = HashSet::new();

    for i in 0..=bytes.len() {
        let (left, right) = word.split_at(i);

        // Deletes
        if !right.is_empty() {
            edits.insert(format!("{}{}", left, &right[1..]));
        }

        // Transposes
        if right.len() > 1 {
            let mut transposed = String::with_capacity(word.len());
            transposed.push_str(left);
            transposed.push(right.as_bytes()[1] as char);
            transposed.push(right.as_bytes()[0] as char);
            transposed.push_str(&right[2..]);
            edits.insert(transposed);
        }

        for &c in ALPHABET {
            // Replaces
            if !right.is_empty() {
                edits.insert(format!("{}{}{}", left, c as char, &right[1..]));
            }

            // Inserts
            edits.insert(format!("{}{}{}", left, c as char, right));
        }
    }

    edits
}

fn load_word_file(path: &Path, words: &mut HashSet<String>) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Could not read dictionary {}: {}", path.display(), e);
            return;
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        words.insert(line.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn config_with_dir(dir: &str) -> SpellCheckingConfig {
        SpellCheckingConfig {
            language: "en".to_string(),
            dictionary_dir: dir.to_string(),
            custom_dictionaries: vec![],
            min_word_length: 4,
            check_proper_nouns: false,
        }
    }

    #[test]
    fn test_load_base_dictionary() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("en.txt")).unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file, "Hello").unwrap();
        writeln!(file, "world").unwrap();
        writeln!(file).unwrap();

        let dict = Dictionary::load(&config_with_dir(dir.path().to_str().unwrap()));

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("hello"));
        assert!(dict.contains("WORLD"));
        assert!(!dict.contains("# comment line"));
    }

    #[test]
    fn test_missing_base_dictionary_is_empty() {
        let dir = TempDir::new().unwrap();
        let dict = Dictionary::load(&config_with_dir(dir.path().to_str().unwrap()));

        assert!(dict.is_empty());
    }

    #[test]
    fn test_custom_dictionaries_merged() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("en.txt"), "base\n").unwrap();
        let custom = dir.path().join("jargon.txt");
        std::fs::write(&custom, "webaudit\n").unwrap();

        let mut config = config_with_dir(dir.path().to_str().unwrap());
        config.custom_dictionaries = vec![custom.to_str().unwrap().to_string()];

        let dict = Dictionary::load(&config);
        assert!(dict.contains("base"));
        assert!(dict.contains("webaudit"));
    }

    #[test]
    fn test_suggest_single_edit() {
        let dict = Dictionary::from_words(["hello", "world", "help"]);
        let suggestions = dict.suggest("helo", 3);

        assert!(suggestions.contains(&"hello".to_string()));
        assert!(suggestions.contains(&"help".to_string()));
    }

    #[test]
    fn test_suggest_two_edits_when_needed() {
        let dict = Dictionary::from_words(["spelling"]);
        let suggestions = dict.suggest("speling", 3);
        assert_eq!(suggestions, vec!["spelling"]);

        // Two edits away
        let suggestions = dict.suggest("spelng", 3);
        assert_eq!(suggestions, vec!["spelling"]);
    }

    #[test]
    fn test_suggest_sorted_and_truncated() {
        let dict = Dictionary::from_words(["cat", "bat", "hat", "mat", "rat"]);
        let suggestions = dict.suggest("zat", 3);

        assert_eq!(suggestions, vec!["bat", "cat", "hat"]);
    }

    #[test]
    fn test_suggest_non_ascii_empty() {
        let dict = Dictionary::from_words(["naive"]);
        assert!(dict.suggest("naïve", 3).is_empty());
    }

    #[test]
    fn test_edits1_covers_edit_forms() {
        let edits = edits1("ab");

        assert!(edits.contains("b")); // delete
        assert!(edits.contains("ba")); // transpose
        assert!(edits.contains("ac")); // replace
        assert!(edits.contains("abc")); // insert
    }
}
