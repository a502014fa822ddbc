use crate::domain::{Book, FeeResolver, Member, PolicyResolver};
use crate::ports::*;
use chrono::Duration;
use std::sync::Arc;

use super::errors::{LendingError, Result};
use super::outcomes::{CheckoutResult, DeclineReason, ReturnResult};

/// 貸出ワークフローの依存関係
///
/// 振る舞いは持たず、純粋な関数に依存関係を渡すためのデータ構造。
/// ワークフロー自身は状態を持たず、すべての状態はポート経由でやり取りする。
///
/// 同一書籍・同一会員への並行リクエストの直列化は呼び出し側の責務。
/// 書籍と会員の保存は別々に行われ、まとめて取り消されることはない。
/// 両者を原子的に更新する必要があれば、それも呼び出し側で扱う。
#[derive(Clone)]
pub struct LendingDependencies {
    pub book_store: Arc<dyn BookStore>,
    pub member_store: Arc<dyn MemberStore>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
    pub policies: Arc<PolicyResolver>,
    pub fees: Arc<FeeResolver>,
}

async fn find_book(book_store: &Arc<dyn BookStore>, isbn: &str) -> Result<Book> {
    book_store
        .find_by_isbn(isbn)
        .await
        .map_err(LendingError::BookStore)?
        .ok_or_else(|| LendingError::BookNotFound(isbn.to_string()))
}

async fn find_member(member_store: &Arc<dyn MemberStore>, email: &str) -> Result<Member> {
    member_store
        .find_by_email(email)
        .await
        .map_err(LendingError::MemberStore)?
        .ok_or_else(|| LendingError::MemberNotFound(email.to_string()))
}

/// 書籍を会員に貸し出す
///
/// ビジネスルール：
/// - 書籍が貸出可能であること（そうでなければ拒否）
/// - 会員の貸出冊数が種別ごとの上限未満であること（そうでなければ拒否）
/// - 返却期限は 今日 + 種別ごとの貸出期間
///
/// 通知の失敗は貸出を取り消さない。
///
/// # エラー
/// - BookNotFound / MemberNotFound: 識別子に該当するレコードがない
/// - UnsupportedTier: 会員種別のポリシーが未登録
#[tracing::instrument(skip(deps))]
pub async fn checkout(
    deps: &LendingDependencies,
    isbn: &str,
    member_email: &str,
) -> Result<CheckoutResult> {
    let mut book = find_book(&deps.book_store, isbn).await?;
    let mut member = find_member(&deps.member_store, member_email).await?;

    if !book.is_available() {
        tracing::debug!(status = %book.status, "checkout declined: book not available");
        return Ok(CheckoutResult::declined(DeclineReason::BookNotAvailable));
    }

    let policy = deps.policies.resolve(member.tier)?;
    if !policy.can_checkout(&member) {
        tracing::debug!(
            checked_out = member.books_checked_out,
            max_books = policy.max_books(),
            "checkout declined: limit reached"
        );
        return Ok(CheckoutResult::declined(DeclineReason::CheckoutLimitReached));
    }

    let due_date = deps.clock.today() + Duration::days(i64::from(policy.loan_period_days()));
    book.check_out(member.email.clone(), due_date)?;
    member.increment_checkout_count();

    deps.book_store
        .save(book.clone())
        .await
        .map_err(LendingError::BookStore)?;
    deps.member_store
        .save(member.clone())
        .await
        .map_err(LendingError::MemberStore)?;

    if let Err(e) = deps
        .notifier
        .notify_checkout(&member, &book, due_date)
        .await
    {
        tracing::warn!(error = %e, "checkout notification failed");
    }

    tracing::info!(%due_date, "book checked out");
    Ok(CheckoutResult::checked_out(due_date))
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が貸出中であること（そうでなければ拒否）
/// - 今日が返却期限より後なら、延滞日数 × 会員種別の料金を課す
///
/// 料金計算は返却時点の会員種別で行う（貸出時の種別ではない）。
///
/// # エラー
/// - BookNotFound / MemberNotFound: 書籍または借り手のレコードがない
/// - UnsupportedTier: 会員種別の料金計算が未登録
/// - InconsistentBook: 貸出中なのに借り手か返却期限が欠けている
#[tracing::instrument(skip(deps))]
pub async fn return_book(deps: &LendingDependencies, isbn: &str) -> Result<ReturnResult> {
    let mut book = find_book(&deps.book_store, isbn).await?;

    if !book.is_checked_out() {
        tracing::debug!("return declined: book not checked out");
        return Ok(ReturnResult::declined(DeclineReason::BookNotCheckedOut));
    }

    let (borrower, due_date) = book.current_loan()?;
    let mut member = find_member(&deps.member_store, borrower).await?;
    let calculator = deps.fees.resolve(member.tier)?;

    let today = deps.clock.today();
    let late_fee = if today > due_date {
        let days_late = (today - due_date).num_days().unsigned_abs();
        calculator.calculate_late_fee(days_late)
    } else {
        0.0
    };

    book.mark_returned()?;
    member.decrement_checkout_count();

    deps.book_store
        .save(book.clone())
        .await
        .map_err(LendingError::BookStore)?;
    deps.member_store
        .save(member.clone())
        .await
        .map_err(LendingError::MemberStore)?;

    if let Err(e) = deps.notifier.notify_return(&member, &book, late_fee).await {
        tracing::warn!(error = %e, "return notification failed");
    }

    tracing::info!(late_fee, "book returned");
    Ok(ReturnResult::returned(late_fee))
}
