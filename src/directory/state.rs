//! ViewState と ViewEvent
//!
//! ViewState は不変値として扱い、イベントごとに `apply` で新しい値に置き換える。

use crate::country::{Region, RegionOption};

/// 地域メニューの開閉状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// ビューへのイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// 検索テキストの変更（変更後の全文）
    SearchChanged(String),
    /// フィルタコントロールの操作
    ActivateFilterControl,
    /// コントロール領域外での操作
    ClickAway,
    /// メニュー項目の選択
    SelectRegion(RegionOption),
    /// ローディング遅延の経過
    LoadingElapsed,
}

/// ビューの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 検索テキスト（空なら絞り込まない）
    pub search_query: String,
    /// 地域フィルタ（None は未設定）
    pub region_filter: Option<Region>,
    pub filter_menu: MenuState,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::mounted()
    }
}

impl ViewState {
    /// マウント直後の状態
    pub fn mounted() -> Self {
        Self {
            search_query: String::new(),
            region_filter: None,
            filter_menu: MenuState::Closed,
            loading: true,
        }
    }

    /// 初期検索テキストを設定
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// 初期地域フィルタを設定
    pub fn with_region_filter(mut self, region: Option<Region>) -> Self {
        self.region_filter = region;
        self
    }

    pub fn is_menu_open(&self) -> bool {
        self.filter_menu == MenuState::Open
    }

    /// フィルタボタンの表示ラベル
    pub fn filter_label(&self) -> &'static str {
        self.region_filter
            .map(|r| r.as_str())
            .unwrap_or("filter by region")
    }

    /// イベントを適用した新しい状態を返す
    pub fn apply(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::SearchChanged(query) => Self {
                search_query: query,
                ..self
            },
            ViewEvent::ActivateFilterControl => match self.filter_menu {
                MenuState::Closed => Self {
                    filter_menu: MenuState::Open,
                    ..self
                },
                // 開いている間の再操作では遷移しない
                MenuState::Open => self,
            },
            ViewEvent::ClickAway => Self {
                filter_menu: MenuState::Closed,
                ..self
            },
            ViewEvent::SelectRegion(option) => match self.filter_menu {
                MenuState::Open => Self {
                    region_filter: option.region(),
                    filter_menu: MenuState::Closed,
                    ..self
                },
                MenuState::Closed => self,
            },
            ViewEvent::LoadingElapsed => Self {
                loading: false,
                ..self
            },
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
