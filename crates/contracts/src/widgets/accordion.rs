use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A group of accordion items of which at most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionGroup {
    open: Option<usize>,
}

impl AccordionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header click: closes `index` if it was open, otherwise opens it and
    /// closes every other item.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_one_closes_the_rest() {
        let mut group = AccordionGroup::new();
        group.toggle(0);
        assert!(group.is_open(0));
        group.toggle(2);
        assert!(!group.is_open(0));
        assert!(group.is_open(2));
        assert_eq!(group.open_index(), Some(2));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let mut group = AccordionGroup::new();
        group.toggle(1);
        group.toggle(1);
        assert_eq!(group.open_index(), None);
    }
}
