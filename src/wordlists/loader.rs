//! Word bank loading and secret selection
//!
//! A word bank is any text: prose, a comma-separated list, one word per line.
//! Only tokens that reduce to exactly 5 ASCII letters become candidates.

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::Path;

/// Read a word bank from a file
///
/// # Errors
///
/// Returns `GameError::Io` if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_corpus;
///
/// let corpus = load_corpus("words.txt").unwrap();
/// println!("Read {} bytes", corpus.len());
/// ```
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String, GameError> {
    let path = path.as_ref();
    let corpus = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Strip leading and trailing ASCII punctuation from a token
fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// All qualifying words in a corpus, in order of appearance
///
/// Tokens are split on whitespace and stripped of surrounding punctuation.
/// Repeated words are kept, so they weigh more when a secret is drawn.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::candidate_words;
///
/// let words = candidate_words("\"Crane,\" said the slate. Hello world!");
/// let texts: Vec<_> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "SLATE", "HELLO", "WORLD"]);
/// ```
#[must_use]
pub fn candidate_words(corpus: &str) -> Vec<Word> {
    corpus
        .split_whitespace()
        .map(strip_punctuation)
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

/// Choose the secret word uniformly at random from the corpus candidates
///
/// The random source is injected so callers can seed it.
///
/// # Errors
///
/// Returns `GameError::EmptyCorpus` if no token qualifies.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::loader::choose_secret;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = choose_secret("only crane qualifies here", &mut rng).unwrap();
/// assert_eq!(secret.text(), "CRANE");
/// ```
pub fn choose_secret<R: Rng + ?Sized>(corpus: &str, rng: &mut R) -> Result<Word, GameError> {
    let candidates = candidate_words(corpus);
    log::debug!("word bank has {} candidate words", candidates.len());

    let secret = candidates.choose(rng).ok_or(GameError::EmptyCorpus)?;
    log::trace!("secret word is {secret}");
    Ok(secret.clone())
}
