use super::user::User;
use crate::traits::records::RecordStore;

/// Fixed, ordered list of users held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Eight sample users, `(1,1111)` through `(8,8888)`.
    pub fn sample() -> Self {
        Self::new((1..=8).map(|id| User::new(id, u64::from(id) * 1111)).collect())
    }
}

impl RecordStore for InMemoryUserStore {
    fn records(&self) -> &[User] {
        &self.users
    }
}

impl FromIterator<User> for InMemoryUserStore {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
