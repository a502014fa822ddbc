use std::collections::HashMap;
use std::sync::Arc;

use super::{Member, MembershipTier, UnsupportedTier};

/// 会員種別ごとの貸出ポリシー
///
/// 貸出可否と貸出期間を決定する。実装は不変かつ副作用なし。
pub trait MembershipPolicy: Send + Sync {
    /// 同時に借りられる最大冊数
    fn max_books(&self) -> u32;

    /// 貸出期間（日数）
    fn loan_period_days(&self) -> u32;

    /// 会員が新たに1冊借りられるか
    fn can_checkout(&self, member: &Member) -> bool {
        member.books_checked_out < self.max_books()
    }
}

/// 一般会員：3冊まで、14日間
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularPolicy;

impl MembershipPolicy for RegularPolicy {
    fn max_books(&self) -> u32 {
        3
    }

    fn loan_period_days(&self) -> u32 {
        14
    }
}

/// プレミアム会員：10冊まで、30日間
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumPolicy;

impl MembershipPolicy for PremiumPolicy {
    fn max_books(&self) -> u32 {
        10
    }

    fn loan_period_days(&self) -> u32 {
        30
    }
}

/// 学生会員：5冊まで、21日間
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentPolicy;

impl MembershipPolicy for StudentPolicy {
    fn max_books(&self) -> u32 {
        5
    }

    fn loan_period_days(&self) -> u32 {
        21
    }
}

/// 会員種別から貸出ポリシーを引くリゾルバ
///
/// 新しい種別を追加する場合はポリシー実装を1つ書き、ここに登録するだけでよい。
/// 貸出ワークフローとレポートは変更不要。
#[derive(Clone, Default)]
pub struct PolicyResolver {
    policies: HashMap<MembershipTier, Arc<dyn MembershipPolicy>>,
}

impl PolicyResolver {
    /// 何も登録されていないリゾルバ
    pub fn empty() -> Self {
        Self::default()
    }

    /// 標準の3種別を登録したリゾルバ
    pub fn standard() -> Self {
        Self::empty()
            .register(MembershipTier::Regular, Arc::new(RegularPolicy))
            .register(MembershipTier::Premium, Arc::new(PremiumPolicy))
            .register(MembershipTier::Student, Arc::new(StudentPolicy))
    }

    pub fn register(mut self, tier: MembershipTier, policy: Arc<dyn MembershipPolicy>) -> Self {
        self.policies.insert(tier, policy);
        self
    }

    /// # エラー
    /// 未登録の種別は`UnsupportedTier`（既定値へのフォールバックはしない）
    pub fn resolve(&self, tier: MembershipTier) -> Result<Arc<dyn MembershipPolicy>, UnsupportedTier> {
        self.policies
            .get(&tier)
            .cloned()
            .ok_or_else(|| UnsupportedTier(tier.to_string()))
    }
}
