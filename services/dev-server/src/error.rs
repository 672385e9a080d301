//! サーバー起動エラー
//!
//! リクエスト単位のエラー（404等）はServeDirがレスポンスとして返すため、
//! ここではプロセスを終了させるエラーのみを扱う。

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevServerError {
    /// ポートのバインドに失敗
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// サーバー実行中のI/Oエラー
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
