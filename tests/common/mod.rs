#![allow(dead_code)]

use chrono::NaiveDate;
use rusty_library_lending::adapters::FixedClock;
use rusty_library_lending::adapters::memory::{BookStore, MemberStore};
use rusty_library_lending::application::lending::LendingDependencies;
use rusty_library_lending::application::report::ReportDependencies;
use rusty_library_lending::domain::{Book, FeeResolver, Member, MembershipTier, PolicyResolver};
use rusty_library_lending::ports::{self, BookStore as _, MemberStore as _, Notifier};
use std::sync::{Arc, Mutex};

// ============================================================================
// テスト用の通知実装
// ============================================================================

/// 送信された通知
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Checkout {
        email: String,
        isbn: String,
        due_date: NaiveDate,
    },
    Return {
        email: String,
        isbn: String,
        late_fee: f64,
    },
}

/// 送信内容を記録する通知実装
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_checkout(
        &self,
        member: &Member,
        book: &Book,
        due_date: NaiveDate,
    ) -> ports::notifier::Result<()> {
        self.sent.lock().unwrap().push(Sent::Checkout {
            email: member.email.clone(),
            isbn: book.isbn.clone(),
            due_date,
        });
        Ok(())
    }

    async fn notify_return(
        &self,
        member: &Member,
        book: &Book,
        late_fee: f64,
    ) -> ports::notifier::Result<()> {
        self.sent.lock().unwrap().push(Sent::Return {
            email: member.email.clone(),
            isbn: book.isbn.clone(),
            late_fee,
        });
        Ok(())
    }
}

/// 常に失敗する通知実装
pub struct FailingNotifier;

#[async_trait::async_trait]
impl Notifier for FailingNotifier {
    async fn notify_checkout(
        &self,
        _member: &Member,
        _book: &Book,
        _due_date: NaiveDate,
    ) -> ports::notifier::Result<()> {
        Err("smtp relay unreachable".into())
    }

    async fn notify_return(
        &self,
        _member: &Member,
        _book: &Book,
        _late_fee: f64,
    ) -> ports::notifier::Result<()> {
        Err("smtp relay unreachable".into())
    }
}

// ============================================================================
// フィクスチャ
// ============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// テストの「今日」
pub fn today() -> NaiveDate {
    date(2024, 3, 15)
}

pub const CLEAN_CODE: &str = "978-0-13-235088-4";
pub const REGULAR_EMAIL: &str = "john@example.com";
pub const PREMIUM_EMAIL: &str = "jane@example.com";
pub const STUDENT_EMAIL: &str = "bob@example.com";

pub fn clean_code() -> Book {
    Book::new(CLEAN_CODE, "Clean Code", "Robert Martin")
}

pub fn members() -> Vec<Member> {
    vec![
        Member::new("John Doe", REGULAR_EMAIL, MembershipTier::Regular),
        Member::new("Jane Smith", PREMIUM_EMAIL, MembershipTier::Premium),
        Member::new("Bob Student", STUDENT_EMAIL, MembershipTier::Student),
    ]
}

/// インメモリストア・固定時計・記録用通知を束ねたテスト用ライブラリ
pub struct TestLibrary {
    pub book_store: Arc<BookStore>,
    pub member_store: Arc<MemberStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: Arc<FixedClock>,
}

impl TestLibrary {
    pub fn new(books: Vec<Book>, members: Vec<Member>) -> Self {
        Self {
            book_store: Arc::new(BookStore::with_books(books)),
            member_store: Arc::new(MemberStore::with_members(members)),
            notifier: Arc::new(RecordingNotifier::default()),
            clock: Arc::new(FixedClock::new(today())),
        }
    }

    /// 書籍1冊と3種別の会員
    pub fn standard() -> Self {
        Self::new(vec![clean_code()], members())
    }

    pub fn lending(&self) -> LendingDependencies {
        LendingDependencies {
            book_store: self.book_store.clone(),
            member_store: self.member_store.clone(),
            notifier: self.notifier.clone(),
            clock: self.clock.clone(),
            policies: Arc::new(PolicyResolver::standard()),
            fees: Arc::new(FeeResolver::standard()),
        }
    }

    pub fn reports(&self) -> ReportDependencies {
        ReportDependencies {
            book_store: self.book_store.clone(),
            clock: self.clock.clone(),
        }
    }

    pub async fn book(&self, isbn: &str) -> Book {
        self.book_store.find_by_isbn(isbn).await.unwrap().unwrap()
    }

    pub async fn member(&self, email: &str) -> Member {
        self.member_store.find_by_email(email).await.unwrap().unwrap()
    }

    /// 会員の貸出冊数を直接設定する
    pub async fn set_checked_out_count(&self, email: &str, count: u32) {
        let mut member = self.member(email).await;
        member.books_checked_out = count;
        self.member_store.save(member).await.unwrap();
    }

    /// 書籍を指定の返却期限で貸出中にする
    pub async fn lend(&self, isbn: &str, email: &str, due_date: NaiveDate) {
        let mut book = self.book(isbn).await;
        book.check_out(email, due_date).unwrap();
        self.book_store.save(book).await.unwrap();

        let mut member = self.member(email).await;
        member.increment_checkout_count();
        self.member_store.save(member).await.unwrap();
    }
}
