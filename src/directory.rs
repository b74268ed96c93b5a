//! 国一覧のビューコントローラ
//!
//! - `filter`: 地域・テキストによる純粋な絞り込み
//! - `state`: ViewState と ViewEvent（イベントごとに丸ごと置き換える値）
//! - `loading`: ローディング表示用のワンショットタイマー
//! - `controller`: 上記をまとめる ListViewController

mod controller;
mod filter;
mod loading;
mod state;

pub use controller::{CardList, ListViewController};
pub use filter::derive_visible;
pub use state::{MenuState, ViewEvent, ViewState};
