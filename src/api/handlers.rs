use crate::application::{
    lending::{self, CheckoutResult, LendingDependencies, ReturnResult},
    report::{self, ReportDependencies, ReportKind},
    search::{SearchCriterion, search_books},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{
    error::ApiError,
    types::{BookResponse, CheckoutRequest, ReturnRequest, SearchQuery},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
pub struct AppState {
    pub lending: LendingDependencies,
    pub reports: ReportDependencies,
    /// 貸出・返却を1件ずつ実行するためのロック
    transactions: Mutex<()>,
}

impl AppState {
    pub fn new(lending: LendingDependencies, reports: ReportDependencies) -> Self {
        Self {
            lending,
            reports,
            transactions: Mutex::new(()),
        }
    }
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /checkouts - 書籍を貸し出す
///
/// 拒否（貸出不可・上限到達）は`success: false`の200レスポンスで返す。
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResult>, ApiError> {
    let _guard = state.transactions.lock().await;
    let result = lending::checkout(&state.lending, &req.isbn, &req.member_email).await?;
    Ok(Json(result))
}

/// POST /returns - 書籍を返却する
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReturnRequest>,
) -> Result<Json<ReturnResult>, ApiError> {
    let _guard = state.transactions.lock().await;
    let result = lending::return_book(&state.lending, &req.isbn).await?;
    Ok(Json(result))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /reports/:kind - レポートをプレーンテキストで返す
///
/// kind: availability | overdue
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<String, ApiError> {
    let kind: ReportKind = kind.parse()?;
    Ok(report::generate_report(&state.reports, kind).await?)
}

/// GET /books/search?by=title&q=dune - 書籍を検索する
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let criterion: SearchCriterion = query.by.parse()?;
    let books = search_books(&state.lending.book_store, criterion, &query.q).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}
