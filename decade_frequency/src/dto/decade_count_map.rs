use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DecadeCount {
    pub decade: i32,
    /* None: no count could be obtained, distinct from Some(0) */
    pub count: Option<u64>,
}

#[doc = r#"
    Ordered decade → item count mapping.

    Entries are kept in an explicit list in ascending decade order. `insert` rejects a
    decade that does not come after the last one, so iteration order always matches the
    time axis the histogram is drawn on.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecadeCountMap {
    entries: Vec<DecadeCount>,
}

impl DecadeCountMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, decade: i32, count: Option<u64>) -> anyhow::Result<()> {
        if let Some(last) = self.entries.last() {
            if decade <= last.decade {
                return Err(anyhow!(
                    "[DecadeCountMap->insert] decade {} is not after the last entry {}",
                    decade,
                    last.decade
                ));
            }
        }

        self.entries.push(DecadeCount::new(decade, count));
        Ok(())
    }

    pub fn entries(&self) -> &[DecadeCount] {
        &self.entries
    }

    #[cfg(test)]
    pub fn get(&self, decade: i32) -> Option<Option<u64>> {
        self.entries
            .iter()
            .find(|entry| entry.decade == decade)
            .map(|entry| entry.count)
    }

    #[cfg(test)]
    pub fn decades(&self) -> Vec<i32> {
        self.entries.iter().map(|entry| entry.decade).collect()
    }

    pub fn missing_decades(&self) -> Vec<i32> {
        self.entries
            .iter()
            .filter(|entry| entry.count.is_none())
            .map(|entry| entry.decade)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut map: DecadeCountMap = DecadeCountMap::default();
        map.insert(1920, Some(3)).unwrap();
        map.insert(1930, None).unwrap();
        map.insert(1940, Some(0)).unwrap();

        assert_eq!(map.decades(), vec![1920, 1930, 1940]);
        assert_eq!(map.get(1920), Some(Some(3)));
        assert_eq!(map.get(1930), Some(None));
        assert_eq!(map.get(1940), Some(Some(0)));
        assert_eq!(map.get(1950), None);
        assert_eq!(map.missing_decades(), vec![1930]);
    }

    #[test]
    fn rejects_out_of_order_or_duplicate_decades() {
        let mut map: DecadeCountMap = DecadeCountMap::default();
        map.insert(1900, Some(1)).unwrap();

        assert!(map.insert(1900, Some(2)).is_err());
        assert!(map.insert(1890, Some(2)).is_err());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn serializes_as_ordered_entries() {
        let mut map: DecadeCountMap = DecadeCountMap::default();
        map.insert(1800, None).unwrap();
        map.insert(1810, Some(7)).unwrap();

        let value: Value = serde_json::to_value(&map).unwrap();

        assert_eq!(
            value,
            json!({ "entries": [
                { "decade": 1800, "count": null },
                { "decade": 1810, "count": 7 }
            ]})
        );
    }
}
