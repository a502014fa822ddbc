use serde::{Deserialize, Serialize};

use super::MembershipTier;

/// 会員 - メールアドレスで一意に識別される
///
/// `books_checked_out` はこの会員が借りている書籍数と一致する。
/// 整合性は構造ではなく貸出ワークフローが維持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub email: String,
    pub name: String,
    pub tier: MembershipTier,
    #[serde(default)]
    pub books_checked_out: u32,
}

impl Member {
    pub fn new(name: impl Into<String>, email: impl Into<String>, tier: MembershipTier) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            tier,
            books_checked_out: 0,
        }
    }

    /// 貸出冊数を1増やす
    pub fn increment_checkout_count(&mut self) {
        self.books_checked_out += 1;
    }

    /// 貸出冊数を1減らす（0未満にはならない）
    pub fn decrement_checkout_count(&mut self) {
        if self.books_checked_out == 0 {
            tracing::warn!(member = %self.email, "checkout count already zero on return");
            return;
        }
        self.books_checked_out -= 1;
    }
}
