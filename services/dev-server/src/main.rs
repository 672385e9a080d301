//! SPA開発用の静的ファイルサーバー
//!
//! カレントディレクトリを`http://localhost:8080/`で配信する。
//! - `GET /` → `index.html`
//! - `GET /<path>?<query>` → `index.html`（クエリ付きURLはSPAのエントリーに固定）
//! - `GET /<path>` → `<path>`をそのまま配信（存在しなければ404）
//!
//! `--no-cache`を指定すると、すべてのレスポンスにキャッシュ無効化ヘッダーを付与する。

mod config;
mod error;
mod rewrite;

pub use config::{Args, ServerConfig};
pub use error::DevServerError;
pub use rewrite::rewrite_spa_request;

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
};
use clap::Parser;
use tokio::signal;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

/// キャッシュ無効化時のCache-Control
const NO_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, max-age=0";

/// ルーターを構築する
///
/// 全リクエストをServeDirで処理する。ServeDirに渡る前にSPAフォールバックの
/// 書き換えを行い、`disable_caching`が有効な場合は404を含むすべてのレスポンスに
/// キャッシュ無効化ヘッダーを付与する。
pub fn create_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .fallback_service(ServeDir::new(&config.root_dir))
        .layer(middleware::map_request(rewrite_spa_request));

    let router = if config.disable_caching {
        router
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static(NO_CACHE_CONTROL),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::PRAGMA,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::EXPIRES,
                HeaderValue::from_static("0"),
            ))
    } else {
        router
    };

    // リクエストトレーシングレイヤー（method, path, status, latencyを自動記録）
    router.layer(TraceLayer::new_for_http())
}

/// シャットダウンシグナルを待機する
///
/// SIGTERMまたはCtrl+C (SIGINT) を待機し、いずれかを受信したらリターンする。
///
/// # Panics
/// シグナルハンドラーの登録に失敗した場合はパニックする。
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Ctrl+C シグナルハンドラーの登録に失敗しました");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM シグナルハンドラーの登録に失敗しました")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C (SIGINT) を受信しました。graceful shutdownを開始します");
        }
        _ = terminate => {
            tracing::info!("SIGTERM を受信しました。graceful shutdownを開始します");
        }
    }
}

/// 構造化ログ（JSON形式）のレイヤー
fn json_log_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer().json().with_writer(make_writer)
}

/// サーバーを起動し、`shutdown`が完了したらgraceful shutdownする
///
/// 新規コネクションの受付を停止し、処理中のリクエストの完了を待ってから返る。
async fn run_server(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DevServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("サーバーが正常に停止しました");
    Ok(())
}

/// メイン関数
///
/// # 環境変数
/// - `RUST_LOG`: ログレベル（デフォルト: info）
#[tokio::main]
async fn main() -> Result<(), DevServerError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(json_log_layer(std::io::stdout))
        .init();

    let config = ServerConfig::from(Args::parse());
    let app = create_router(&config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| DevServerError::Bind { addr, source })?;

    tracing::info!(
        root_dir = %config.root_dir.display(),
        disable_caching = config.disable_caching,
        "Server running at http://localhost:{}/",
        config.port
    );
    tracing::info!("Press Ctrl+C to stop");

    run_server(listener, app, shutdown_signal()).await
}
