//! ListViewController
//!
//! レコード列（不変）と ViewState を保持し、表示対象を都度導出する。
//! タイマー由来のイベントはチャネル経由で受け取り、`pump` で取り込む。

use super::filter::derive_visible;
use super::loading::{LoadingTimer, LOADING_DELAY};
use super::state::{ViewEvent, ViewState};
use crate::country::CountryRecord;
use std::collections::HashSet;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 描画層へ渡すカード列
#[derive(Debug, PartialEq, Eq)]
pub enum CardList<'a> {
    /// ローディング中：レコード件数ぶんのプレースホルダー
    Placeholders(usize),
    /// 表示対象のレコード
    Cards(Vec<&'a CountryRecord>),
}

/// 国一覧のビューコントローラ
pub struct ListViewController {
    records: Vec<CountryRecord>,
    state: ViewState,
    runtime: Handle,
    delay: Duration,
    timer: Option<LoadingTimer>,
    events_tx: UnboundedSender<ViewEvent>,
    events_rx: UnboundedReceiver<ViewEvent>,
}

impl ListViewController {
    /// レコード未到着の状態でマウント
    pub fn new(runtime: Handle, initial: ViewState) -> Self {
        Self::with_delay(runtime, initial, LOADING_DELAY)
    }

    /// 遅延時間を指定してマウント
    pub fn with_delay(runtime: Handle, initial: ViewState, delay: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            records: Vec::new(),
            state: initial,
            runtime,
            delay,
            timer: None,
            events_tx,
            events_rx,
        }
    }

    /// レコードを渡してマウント
    pub fn mount(runtime: Handle, initial: ViewState, records: Vec<CountryRecord>) -> Self {
        let mut controller = Self::new(runtime, initial);
        controller.on_records_available(records);
        controller
    }

    /// レコード到着時の処理
    ///
    /// タイマーは最初の到着時に 1 度だけ開始し、以降は再開始しない。
    pub fn on_records_available(&mut self, records: Vec<CountryRecord>) {
        tracing::debug!(count = records.len(), "records available");

        let mut keys = HashSet::new();
        let duplicates = records.iter().filter(|r| !keys.insert(r.list_key())).count();
        if duplicates > 0 {
            tracing::warn!(duplicates, "records share a list key");
        }
        self.records = records;

        if self.timer.is_none() {
            self.timer = Some(LoadingTimer::start(
                &self.runtime,
                self.delay,
                self.events_tx.clone(),
            ));
        }
    }

    /// イベントを適用
    pub fn dispatch(&mut self, event: ViewEvent) {
        tracing::trace!(?event, "dispatch");
        let before = self.state.clone();
        self.state = std::mem::take(&mut self.state).apply(event);

        if before.filter_menu != self.state.filter_menu {
            tracing::debug!(from = ?before.filter_menu, to = ?self.state.filter_menu, "filter menu");
        }
        if before.region_filter != self.state.region_filter {
            tracing::debug!(region = ?self.state.region_filter, "region filter changed");
        }
        if before.loading && !self.state.loading {
            tracing::debug!("loading finished");
        }
    }

    /// 到着済みの非同期イベントを取り込む（取り込んだら true）
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch(event);
            changed = true;
        }
        changed
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// 現在の表示対象
    pub fn visible(&self) -> Vec<&CountryRecord> {
        derive_visible(
            &self.records,
            self.state.region_filter,
            &self.state.search_query,
        )
    }

    /// ローディング中に表示するプレースホルダー数
    pub fn placeholder_count(&self) -> usize {
        self.records.len()
    }

    /// 描画層へ渡すカード列
    pub fn card_list(&self) -> CardList<'_> {
        if self.state.loading {
            CardList::Placeholders(self.placeholder_count())
        } else {
            CardList::Cards(self.visible())
        }
    }

    /// ビューを破棄（未発火のタイマーを中断）
    pub fn unmount(mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
