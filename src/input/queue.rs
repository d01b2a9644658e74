//! Ordering of concurrently active pointers.
//!
//! Pointers are kept in registration order, oldest first. When one is released
//! the older ones are force-released (phantom-up) so they cannot emit later.

use super::events::PointerId;

#[derive(Debug, Default, Clone)]
pub struct PointerQueue {
    order: Vec<PointerId>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` as the newest pointer. A pointer already queued moves to the back.
    pub fn add(&mut self, id: PointerId) {
        self.remove(id);
        self.order.push(id);
    }

    pub fn remove(&mut self, id: PointerId) -> bool {
        let before = self.order.len();
        self.order.retain(|queued| *queued != id);
        self.order.len() != before
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.order.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Queued ids, oldest first.
    pub fn ids(&self) -> &[PointerId] {
        &self.order
    }

    /// Removes and returns every pointer registered before `id`, oldest first.
    ///
    /// Pointers for which `is_modifier` holds stay queued.
    pub fn release_all_older_than<F>(&mut self, id: PointerId, is_modifier: F) -> Vec<PointerId>
    where
        F: Fn(PointerId) -> bool,
    {
        let Some(position) = self.order.iter().position(|queued| *queued == id) else {
            return Vec::new();
        };
        let newer = self.order.split_off(position);
        let (kept, released): (Vec<_>, Vec<_>) =
            self.order.drain(..).partition(|older| is_modifier(*older));
        self.order = kept;
        self.order.extend(newer);
        released
    }

    /// Removes and returns every pointer except `id`, oldest first.
    pub fn release_all_except(&mut self, id: PointerId) -> Vec<PointerId> {
        let (kept, released): (Vec<_>, Vec<_>) =
            self.order.drain(..).partition(|queued| *queued == id);
        self.order = kept;
        released
    }

    /// Empties the queue, returning what it held.
    pub fn drain(&mut self) -> Vec<PointerId> {
        std::mem::take(&mut self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PointerId = 0;
    const B: PointerId = 1;
    const C: PointerId = 2;

    fn abc() -> PointerQueue {
        let mut queue = PointerQueue::new();
        queue.add(A);
        queue.add(B);
        queue.add(C);
        queue
    }

    #[test]
    fn test_add_keeps_registration_order() {
        let mut queue = abc();
        assert_eq!(queue.ids(), &[A, B, C]);
        queue.add(A);
        assert_eq!(queue.ids(), &[B, C, A]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_releasing_middle_only_touches_older() {
        let mut queue = abc();
        assert_eq!(queue.release_all_older_than(B, |_| false), vec![A]);
        assert_eq!(queue.ids(), &[B, C]);
    }

    #[test]
    fn test_releasing_newest_releases_all_older() {
        let mut queue = abc();
        assert_eq!(queue.release_all_older_than(C, |_| false), vec![A, B]);
        assert_eq!(queue.ids(), &[C]);
    }

    #[test]
    fn test_releasing_oldest_releases_nothing() {
        let mut queue = abc();
        assert!(queue.release_all_older_than(A, |_| false).is_empty());
        assert_eq!(queue.ids(), &[A, B, C]);
    }

    #[test]
    fn test_older_modifiers_survive() {
        let mut queue = abc();
        assert_eq!(queue.release_all_older_than(C, |id| id == A), vec![B]);
        assert_eq!(queue.ids(), &[A, C]);
    }

    #[test]
    fn test_release_all_except() {
        let mut queue = abc();
        assert_eq!(queue.release_all_except(B), vec![A, C]);
        assert_eq!(queue.ids(), &[B]);
    }

    #[test]
    fn test_unknown_pointer_releases_nothing() {
        let mut queue = abc();
        assert!(queue.release_all_older_than(9, |_| false).is_empty());
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_drain_and_remove() {
        let mut queue = abc();
        assert!(queue.remove(B));
        assert!(!queue.remove(B));
        assert_eq!(queue.drain(), vec![A, C]);
        assert!(queue.is_empty());
    }
}
