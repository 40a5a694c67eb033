/// Most institutes that can be compared side by side.
pub const MAX_COMPARE: usize = 3;

/// Ordered set of institute ids picked on the compare page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSelection {
    ids: Vec<String>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the selection is full or already holds `id`.
    pub fn add(&mut self, id: &str) -> bool {
        if self.is_full() || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|x| x != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_respects_limit_and_duplicates() {
        let mut sel = CompareSelection::new();
        assert!(sel.add("nust"));
        assert!(!sel.add("nust"));
        assert!(sel.add("lums"));
        assert!(sel.add("aku"));
        assert!(sel.is_full());
        assert!(!sel.add("giki"));
        assert_eq!(sel.ids(), ["nust", "lums", "aku"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut sel = CompareSelection::new();
        sel.add("nust");
        sel.add("lums");
        sel.add("aku");
        sel.remove("lums");
        assert_eq!(sel.ids(), ["nust", "aku"]);
        assert!(sel.add("giki"));
        assert_eq!(sel.len(), 3);
    }
}
