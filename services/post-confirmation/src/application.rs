// アプリケーション層モジュール
pub mod post_confirmation_handler;

// 再エクスポート
pub use post_confirmation_handler::PostConfirmationHandler;
