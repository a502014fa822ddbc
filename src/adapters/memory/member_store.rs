use crate::domain::Member;
use crate::ports::member_store::{MemberStore as MemberStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// MemberStoreのインメモリ実装
pub struct MemberStore {
    members: Mutex<HashMap<String, Member>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }

    /// 初期データ付きで作成
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let members = members
            .into_iter()
            .map(|m| (m.email.clone(), m))
            .collect();
        Self {
            members: Mutex::new(members),
        }
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberStoreTrait for MemberStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>> {
        Ok(self.members.lock().unwrap().get(email).cloned())
    }

    async fn save(&self, member: Member) -> Result<()> {
        self.members
            .lock()
            .unwrap()
            .insert(member.email.clone(), member);
        Ok(())
    }
}
