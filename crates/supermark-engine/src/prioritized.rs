/// A value paired with a priority. Higher priorities are consulted first.
#[derive(Debug, Clone)]
pub struct Prioritized<T> {
    pub value: T,
    pub priority: i32,
}

impl<T> Prioritized<T> {
    pub fn new(value: T, priority: i32) -> Self {
        Self { value, priority }
    }
}

/// Sorts highest priority first. Stable, so equal priorities keep
/// registration order.
pub fn sort_by_priority<T>(items: &mut [Prioritized<T>]) {
    items.sort_by(|a, b| b.priority.cmp(&a.priority));
}
