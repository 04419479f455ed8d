use crate::engine::structs::online_sessions::OnlineSessions;
use crate::engine::traits::session_provider::SessionProvider;
use crate::statistics::enums::category::Category;
use crate::statistics::structs::subject_id::SubjectId;

impl OnlineSessions {
    pub fn new() -> OnlineSessions {
        OnlineSessions::default()
    }

    pub fn join(&self, subject: SubjectId) {
        self.online.write().insert(subject);
    }

    pub fn leave(&self, subject: SubjectId) {
        self.online.write().remove(&subject);
    }

    /// Excludes `subject` from `category` until [`allow`](Self::allow) is called.
    pub fn restrict(&self, subject: SubjectId, category: Category) {
        self.restricted.write().insert((subject, category));
    }

    pub fn allow(&self, subject: SubjectId, category: Category) {
        self.restricted.write().remove(&(subject, category));
    }

    pub fn online_amount(&self) -> usize {
        self.online.read_recursive().len()
    }
}

impl SessionProvider for OnlineSessions {
    fn is_online(&self, subject: SubjectId) -> bool {
        self.online.read_recursive().contains(&subject)
    }

    fn is_eligible(&self, subject: SubjectId, category: Category) -> bool {
        !self.restricted.read_recursive().contains(&(subject, category))
    }
}
