/// A named, append-only sequence of per-step values
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
}
impl Series {
    pub fn new(name: &str) -> Self {
        Self::with_capacity(name, 0)
    }
    pub fn with_capacity(name: &str, capacity: usize) -> Self {
        Self {
            name: String::from(name),
            values: Vec::with_capacity(capacity),
        }
    }
    pub fn from_values(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: String::from(name),
            values,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }
}
