use std::collections::HashMap;
use std::sync::Arc;

use super::{MembershipTier, UnsupportedTier};

/// 会員種別ごとの延滞料金計算
pub trait LateFeeCalculator: Send + Sync {
    /// 延滞日数から延滞料金（ドル）を計算する。延滞0日なら0.0。
    fn calculate_late_fee(&self, days_late: u64) -> f64;
}

/// 一般会員：1日あたり$0.50
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularLateFeeCalculator;

impl RegularLateFeeCalculator {
    const FEE_PER_DAY: f64 = 0.50;
}

impl LateFeeCalculator for RegularLateFeeCalculator {
    fn calculate_late_fee(&self, days_late: u64) -> f64 {
        days_late as f64 * Self::FEE_PER_DAY
    }
}

/// プレミアム会員：延滞料金免除
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumLateFeeCalculator;

impl LateFeeCalculator for PremiumLateFeeCalculator {
    fn calculate_late_fee(&self, _days_late: u64) -> f64 {
        0.0
    }
}

/// 学生会員：1日あたり$0.25
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentLateFeeCalculator;

impl StudentLateFeeCalculator {
    const FEE_PER_DAY: f64 = 0.25;
}

impl LateFeeCalculator for StudentLateFeeCalculator {
    fn calculate_late_fee(&self, days_late: u64) -> f64 {
        days_late as f64 * Self::FEE_PER_DAY
    }
}

/// 会員種別から延滞料金計算を引くリゾルバ
#[derive(Clone, Default)]
pub struct FeeResolver {
    calculators: HashMap<MembershipTier, Arc<dyn LateFeeCalculator>>,
}

impl FeeResolver {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 標準の3種別を登録したリゾルバ
    pub fn standard() -> Self {
        Self::empty()
            .register(MembershipTier::Regular, Arc::new(RegularLateFeeCalculator))
            .register(MembershipTier::Premium, Arc::new(PremiumLateFeeCalculator))
            .register(MembershipTier::Student, Arc::new(StudentLateFeeCalculator))
    }

    pub fn register(
        mut self,
        tier: MembershipTier,
        calculator: Arc<dyn LateFeeCalculator>,
    ) -> Self {
        self.calculators.insert(tier, calculator);
        self
    }

    /// # エラー
    /// 未登録の種別は`UnsupportedTier`
    pub fn resolve(
        &self,
        tier: MembershipTier,
    ) -> Result<Arc<dyn LateFeeCalculator>, UnsupportedTier> {
        self.calculators
            .get(&tier)
            .cloned()
            .ok_or_else(|| UnsupportedTier(tier.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [MembershipTier; 3] = [
        MembershipTier::Regular,
        MembershipTier::Premium,
        MembershipTier::Student,
    ];

    #[test]
    fn test_zero_days_late_is_free_for_every_tier() {
        let resolver = FeeResolver::standard();
        for tier in TIERS {
            let calculator = resolver.resolve(tier).unwrap();
            assert_eq!(calculator.calculate_late_fee(0), 0.0, "tier {tier}");
        }
    }

    #[test]
    fn test_regular_charges_fifty_cents_per_day() {
        let calculator = RegularLateFeeCalculator;
        assert_eq!(calculator.calculate_late_fee(1), 0.5);
        assert_eq!(calculator.calculate_late_fee(5), 2.5);
        assert_eq!(calculator.calculate_late_fee(30), 15.0);
    }

    #[test]
    fn test_student_charges_quarter_per_day() {
        let calculator = StudentLateFeeCalculator;
        assert_eq!(calculator.calculate_late_fee(1), 0.25);
        assert_eq!(calculator.calculate_late_fee(5), 1.25);
        assert_eq!(calculator.calculate_late_fee(30), 7.5);
    }

    #[test]
    fn test_premium_is_always_waived() {
        let calculator = PremiumLateFeeCalculator;
        for days in [1, 5, 365, 10_000] {
            assert_eq!(calculator.calculate_late_fee(days), 0.0);
        }
    }

    #[test]
    fn test_resolver_maps_tier_to_rate() {
        let resolver = FeeResolver::standard();
        let fee = |tier| resolver.resolve(tier).unwrap().calculate_late_fee(4);
        assert_eq!(fee(MembershipTier::Regular), 2.0);
        assert_eq!(fee(MembershipTier::Premium), 0.0);
        assert_eq!(fee(MembershipTier::Student), 1.0);
    }

    #[test]
    fn test_empty_resolver_reports_unsupported_tier() {
        let err = FeeResolver::empty()
            .resolve(MembershipTier::Regular)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Unsupported membership tier: REGULAR");
    }
}
