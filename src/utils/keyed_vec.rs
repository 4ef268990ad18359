/// Insertion-ordered map backed by two vectors
#[derive(Clone, Debug)]
pub struct KeyedVec<K, V>
where
    K: PartialEq,
{
    keys: Vec<K>,
    values: Vec<V>,
}
impl<K, V> KeyedVec<K, V>
where
    K: PartialEq,
{
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }
    pub fn add(&mut self, key: K, value: V) {
        if self.keys.contains(&key) {
            panic!("Key already exists!");
        }
        self.keys.push(key);
        self.values.push(value);
    }
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.keys.iter().position(|k| *k == *key)?;
        Some(&self.values[idx])
    }
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.keys.iter().position(|k| *k == *key)?;
        Some(&mut self.values[idx])
    }
    pub fn keys(&self) -> &Vec<K> {
        &self.keys
    }
    pub fn len(&self) -> usize {
        self.keys.len()
    }
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().zip(self.values.iter())
    }
}

impl<K: PartialEq, V> Default for KeyedVec<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut kv = KeyedVec::new();
        kv.add("b", 2);
        kv.add("a", 1);
        assert_eq!(kv.keys(), &vec!["b", "a"]);
        assert_eq!(kv.get(&"a"), Some(&1));
        assert_eq!(kv.get(&"c"), None);
        *kv.get_mut(&"b").unwrap() += 10;
        assert_eq!(kv.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec![12, 1]);
    }

    #[test]
    #[should_panic(expected = "Key already exists!")]
    fn rejects_duplicate_keys() {
        let mut kv = KeyedVec::new();
        kv.add(1, "x");
        kv.add(1, "y");
    }
}
