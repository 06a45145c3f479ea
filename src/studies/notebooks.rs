use std::ops::{Index, IndexMut};

use crate::core::error::ArgumentError;

/// A fixed number of notebook slots, addressed by position.
///
/// `notebooks[i]` reads and writes like a slice and panics out of range;
/// `get` and `set` are the non-panicking forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebooks {
    titles: Vec<String>,
}

impl Notebooks {
    /// Creates `count` empty slots.
    pub fn new(count: usize) -> Self {
        Self {
            titles: vec![String::new(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    pub fn set(&mut self, index: usize, title: impl Into<String>) -> Result<(), ArgumentError> {
        let len = self.titles.len();
        let slot = self
            .titles
            .get_mut(index)
            .ok_or(ArgumentError::IndexOutOfRange { index, len })?;
        *slot = title.into();
        Ok(())
    }
}

impl Index<usize> for Notebooks {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.titles[index]
    }
}

impl IndexMut<usize> for Notebooks {
    fn index_mut(&mut self, index: usize) -> &mut String {
        &mut self.titles[index]
    }
}
