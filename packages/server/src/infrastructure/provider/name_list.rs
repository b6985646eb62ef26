//! Display names derived from connection tokens.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    path::Path,
};

use crate::domain::{ConnectionToken, NameProvider, PlayerName};

use super::ProviderError;

const EMBEDDED_NAMES: &str = include_str!("../../../assets/animal_names.txt");

/// Maps a token to `names[hash(token) % names.len()]`.
///
/// Distinct tokens may share a name; that is accepted.
#[derive(Debug, Clone)]
pub struct NameListProvider {
    names: Vec<PlayerName>,
}

impl NameListProvider {
    /// The built-in animal names.
    pub fn embedded() -> Self {
        Self {
            names: parse_names(EMBEDDED_NAMES),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_names(parse_names(&contents))
            .map_err(|_| ProviderError::EmptyCorpus(path.display().to_string()))
    }

    pub fn from_names(names: Vec<PlayerName>) -> Result<Self, ProviderError> {
        if names.is_empty() {
            return Err(ProviderError::EmptyCorpus("name list".to_string()));
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameProvider for NameListProvider {
    fn name_for(&self, token: &ConnectionToken) -> PlayerName {
        let mut hasher = DefaultHasher::new();
        token.as_str().hash(&mut hasher);
        let index = (hasher.finish() % self.names.len() as u64) as usize;
        self.names[index].clone()
    }
}

fn parse_names(contents: &str) -> Vec<PlayerName> {
    contents
        .lines()
        .filter_map(|line| PlayerName::new(line.trim_end().to_string()).ok())
        .collect()
}
