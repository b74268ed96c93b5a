//! ローディング表示用のワンショットタイマー
//!
//! 遅延後に `ViewEvent::LoadingElapsed` をチャネルへ送る。
//! drop 時にタスクを中断するため、ビュー破棄後に発火しても何も起きない。

use super::state::ViewEvent;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// データ取得後にプレースホルダーを表示し続ける時間
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

/// キャンセル可能なワンショットタイマー
#[derive(Debug)]
pub struct LoadingTimer {
    handle: Option<JoinHandle<()>>,
}

impl LoadingTimer {
    /// タイマーを開始
    pub fn start(runtime: &Handle, delay: Duration, events: UnboundedSender<ViewEvent>) -> Self {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(?delay, "loading timer fired");
            // 受信側が既に破棄されていれば送信失敗は無視
            let _ = events.send(ViewEvent::LoadingElapsed);
        });

        Self {
            handle: Some(handle),
        }
    }

    /// 発火待ちかどうか
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// 未発火ならタスクを中断
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                tracing::debug!("loading timer cancelled");
            }
            handle.abort();
        }
    }
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
