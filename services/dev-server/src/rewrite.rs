//! SPAフォールバック
//!
//! ルートパス、またはクエリ文字列付きのGETリクエストを`/index.html`に書き換える。
//! クライアントサイドルーターのディープリンク（`/app?id=1`など）で
//! ディレクトリやファイルが解決されてしまうのを防ぐ。

use axum::{
    body::Body,
    http::{Method, Request, Uri},
};

/// フォールバック先のエントリードキュメント
pub const SPA_ENTRY: &str = "/index.html";

/// 書き換え先を判定する
///
/// パスが`/`、または空でないクエリ文字列がある場合に`Some(SPA_ENTRY)`を返す。
pub fn spa_rewrite_target(path: &str, query: Option<&str>) -> Option<&'static str> {
    let has_query = query.is_some_and(|q| !q.is_empty());
    if path == "/" || has_query {
        Some(SPA_ENTRY)
    } else {
        None
    }
}

/// リクエストURIを書き換えるミドルウェア
///
/// `axum::middleware::map_request`で使用する。GET以外のメソッドはそのまま通す。
pub async fn rewrite_spa_request(mut request: Request<Body>) -> Request<Body> {
    if request.method() != Method::GET {
        return request;
    }

    let uri = request.uri();
    if let Some(target) = spa_rewrite_target(uri.path(), uri.query()) {
        tracing::debug!(original = %uri, rewritten = target, "SPAエントリーに書き換え");
        *request.uri_mut() = Uri::from_static(target);
    }

    request
}
