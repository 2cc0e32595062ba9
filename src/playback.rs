use ahash::AHashSet;
use serde::Serialize;

use crate::result::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchEvent<'a> {
    pub node: &'a str,
    pub visited_count: usize,
    pub on_path: bool,
}

#[derive(Debug, Clone)]
pub struct Playback<'a> {
    visited: &'a [String],
    on_path: AHashSet<&'a str>,
    cursor: usize,
}

impl<'a> Playback<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self {
            visited: &result.visited,
            on_path: result.path.iter().map(String::as_str).collect(),
            cursor: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = SearchEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.visited.get(self.cursor)?.as_str();
        self.cursor += 1;
        Some(SearchEvent {
            node,
            visited_count: self.cursor,
            on_path: self.on_path.contains(node),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback<'_> {}

impl std::iter::FusedIterator for Playback<'_> {}
