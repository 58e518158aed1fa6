use crate::checker::dictionary::Dictionary;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub struct DictionaryInfo {
    pub language: String,
    pub path: PathBuf,
    pub word_count: usize,
    pub size_bytes: u64,
}

impl DictionaryInfo {
    pub fn read(language: &str, path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to stat dictionary: {}", path.display()))?;
        let dictionary = Dictionary::load_from_path(path)?;

        Ok(Self {
            language: language.to_string(),
            path: path.to_path_buf(),
            word_count: dictionary.len(),
            size_bytes: metadata.len(),
        })
    }
}

fn data_dir() -> Result<PathBuf> {
    crate::config::Config::data_dir().context("Failed to get data directory")
}

/// Installed dictionaries in `dir`, sorted by language
pub fn installed_in(dir: &Path) -> Result<Vec<DictionaryInfo>> {
    let mut found = Vec::new();
    if !dir.exists() {
        return Ok(found);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            if let Some(language) = path.file_stem().and_then(|s| s.to_str()) {
                found.push(DictionaryInfo::read(language, &path)?);
            }
        }
    }

    found.sort_by(|a, b| a.language.cmp(&b.language));
    Ok(found)
}

/// Parse a word list and store it as the dictionary for `language` in `dir`
pub fn install_into(dir: &Path, language: &str, wordlist: &Path) -> Result<PathBuf> {
    if !wordlist.exists() {
        anyhow::bail!("Word list not found: {}", wordlist.display());
    }

    let dictionary = Dictionary::load_from_path(wordlist)?;
    if dictionary.is_empty() {
        anyhow::bail!("Word list contains no words: {}", wordlist.display());
    }

    fs::create_dir_all(dir).context("Failed to create data directory")?;
    let dict_path = dir.join(format!("{}.txt", language));
    dictionary
        .save(&dict_path)
        .with_context(|| format!("Failed to write dictionary: {}", dict_path.display()))?;

    log::info!(
        "Installed {} words for {} at {}",
        dictionary.len(),
        language,
        dict_path.display()
    );

    Ok(dict_path)
}

pub fn list_dictionaries() -> Result<()> {
    let data_dir = data_dir()?;
    let installed = installed_in(&data_dir)?;

    if installed.is_empty() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to install one.",
            "spellcheck dict install en_US <WORDLIST>".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    for info in &installed {
        println!(
            "  {} {} ({})",
            "✓".green(),
            info.language.cyan().bold(),
            format!("{} words, {}KB", info.word_count, info.size_bytes / 1024).dimmed()
        );
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

pub fn install_dictionary(language: &str, wordlist: &Path) -> Result<()> {
    println!(
        "{} dictionary for {} from {}...",
        "Installing".cyan().bold(),
        language.yellow(),
        wordlist.display().to_string().dimmed()
    );

    let dict_path = install_into(&data_dir()?, language, wordlist)?;

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

pub fn show_info(language: &str) -> Result<()> {
    let dict_path = data_dir()?.join(format!("{}.txt", language));

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            language.yellow()
        );
        println!(
            "Run {} to install it.",
            format!("spellcheck dict install {} <WORDLIST>", language).cyan()
        );
        return Ok(());
    }

    let info = DictionaryInfo::read(language, &dict_path)?;

    println!("{}", format!("Dictionary: {}", info.language).bold());
    println!("  Path: {}", info.path.display());
    println!("  Size: {} KB", info.size_bytes / 1024);
    println!("  Words: {}", info.word_count);
    println!("  Format: plain word list");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_install_and_list() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        let wordlist = dir.path().join("words.txt");
        fs::write(&wordlist, "zebra\napple\napple\n# comment\n").unwrap();

        let path = install_into(&data, "en_TEST", &wordlist).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "apple\nzebra\n");

        let installed = installed_in(&data).unwrap();
        assert_eq!(installed.len(), 1);
        assert_eq!(installed[0].language, "en_TEST");
        assert_eq!(installed[0].word_count, 2);
    }

    #[test]
    fn test_install_rejects_missing_or_empty_wordlist() {
        let dir = tempdir().unwrap();
        assert!(install_into(dir.path(), "xx", &dir.path().join("nope.txt")).is_err());

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "# nothing here\n\n").unwrap();
        assert!(install_into(dir.path(), "xx", &empty).is_err());
    }

    #[test]
    fn test_missing_data_dir_lists_nothing() {
        let dir = tempdir().unwrap();
        assert!(installed_in(&dir.path().join("absent")).unwrap().is_empty());
    }
}
