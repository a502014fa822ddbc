use crate::domain::Member;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員ストアポート
///
/// 会員レコードの永続化を抽象化する。
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// メールアドレスで会員を検索する
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>>;

    /// 会員を保存する（メールアドレスが既存なら上書き）
    async fn save(&self, member: Member) -> Result<()>;
}
