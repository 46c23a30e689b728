/// Stable descending sort by `key`, truncated to `n` entries.
///
/// Entries with equal keys keep their relative input order.
pub fn top_n_by<T, K, F>(mut items: Vec<T>, n: usize, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items.truncate(n);
    items
}

/// Counts in order of first appearance.
#[derive(Debug, Default)]
pub struct FirstSeenCounter {
    entries: Vec<(String, u32)>,
}

impl FirstSeenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    pub fn into_entries(self) -> Vec<(String, u32)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_keeps_input_order_on_ties() {
        let items = vec![("a", 1), ("b", 3), ("c", 1), ("d", 3), ("e", 2)];
        let top = top_n_by(items, 4, |(_, score)| *score);
        assert_eq!(top, vec![("b", 3), ("d", 3), ("e", 2), ("a", 1)]);
    }

    #[test]
    fn test_top_n_shorter_than_limit() {
        let top = top_n_by(vec![2, 7], 5, |v| *v);
        assert_eq!(top, vec![7, 2]);
        assert!(top_n_by(Vec::<u32>::new(), 5, |v| *v).is_empty());
    }

    #[test]
    fn test_counter_preserves_first_appearance() {
        let mut counter = FirstSeenCounter::new();
        for key in ["Rust", "Go", "Rust", "Python", "Go", "Rust"] {
            counter.add(key);
        }
        assert_eq!(
            counter.into_entries(),
            vec![
                ("Rust".to_string(), 3),
                ("Go".to_string(), 2),
                ("Python".to_string(), 1)
            ]
        );
    }
}
