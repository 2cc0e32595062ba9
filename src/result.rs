use serde::Serialize;

use crate::playback::Playback;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    pub visited: Vec<String>,
    pub path: Vec<String>,
    pub cost: f64,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn not_found(visited: Vec<&str>) -> Self {
        Self {
            visited: to_owned_ids(visited),
            path: Vec::new(),
            cost: 0.0,
        }
    }

    pub(crate) fn found(visited: Vec<&str>, path: Vec<&str>, cost: f64) -> Self {
        if path.is_empty() {
            return Self::not_found(visited);
        }
        Self {
            visited: to_owned_ids(visited),
            path: to_owned_ids(path),
            cost,
        }
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn events(&self) -> Playback<'_> {
        Playback::new(self)
    }
}

fn to_owned_ids(ids: Vec<&str>) -> Vec<String> {
    ids.into_iter().map(str::to_string).collect()
}
