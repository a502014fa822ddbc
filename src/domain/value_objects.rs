use serde::{Deserialize, Serialize};

use super::errors::UnsupportedTier;

/// 書籍の貸出状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    /// 貸出可能
    Available,
    /// 貸出中
    CheckedOut,
}

impl BookStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "AVAILABLE",
            BookStatus::CheckedOut => "CHECKED_OUT",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 会員種別
///
/// 貸出上限・貸出期間・延滞料金の単価を決定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipTier {
    Regular,
    Premium,
    Student,
}

impl MembershipTier {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Regular => "REGULAR",
            MembershipTier::Premium => "PREMIUM",
            MembershipTier::Student => "STUDENT",
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MembershipTier {
    type Err = UnsupportedTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Ok(MembershipTier::Regular),
            "PREMIUM" => Ok(MembershipTier::Premium),
            "STUDENT" => Ok(MembershipTier::Student),
            _ => Err(UnsupportedTier(s.to_string())),
        }
    }
}
