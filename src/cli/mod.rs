// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとパイプラインの橋渡し

pub mod args;
pub mod commands;
pub mod logging;

// 公開API
pub use args::*;
pub use commands::*;
pub use logging::init_tracing;
