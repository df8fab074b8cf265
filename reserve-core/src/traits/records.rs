use crate::record::user::User;

/// Ordered source of records committed by a reserve tree.
///
/// `records` order is leaf order, so it must be stable for the root to be
/// reproducible.
pub trait RecordStore {
    fn records(&self) -> &[User];

    fn get(&self, id: u32) -> Option<&User> {
        self.records().iter().find(|user| user.id == id)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
