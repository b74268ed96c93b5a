//! 国一覧 TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: コントローラ + 画面ローカルな状態（メニューカーソル・スクロール位置）
//! - `Msg`: 入力から変換されたメッセージ
//! - `update`: メッセージを `ViewEvent` に翻訳してコントローラへ渡す

use super::hit::HitMap;
use crate::country::RegionOption;
use crate::directory::{ListViewController, ViewEvent};

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// フィルタコントロールの操作
    ActivateFilter,
    /// メニューカーソルを上へ
    MenuUp,
    /// メニューカーソルを下へ
    MenuDown,
    /// カーソル位置の項目を選択
    MenuConfirm,
    /// 項目を直接選択（マウス）
    SelectRegion(RegionOption),
    /// コントロール外の操作
    ClickAway,
    /// グリッドを行単位でスクロール
    Scroll(isize),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub controller: ListViewController,
    /// メニュー内のカーソル位置（`RegionOption::all()` のインデックス）
    pub menu_cursor: usize,
    /// グリッドの先頭行
    pub scroll: usize,
    /// 描画時に確定するスクロール上限
    pub max_scroll: usize,
    /// 終了フラグ
    pub should_quit: bool,
    /// 直近フレームの当たり判定
    pub hit: HitMap,
}

impl Model {
    pub fn new(controller: ListViewController) -> Self {
        Self {
            controller,
            menu_cursor: 0,
            scroll: 0,
            max_scroll: 0,
            should_quit: false,
            hit: HitMap::default(),
        }
    }

    /// 現在の地域フィルタに対応するメニュー項目のインデックス
    fn current_option_index(&self) -> usize {
        let current = self.controller.state().region_filter;
        RegionOption::all()
            .iter()
            .position(|o| o.region() == current)
            .unwrap_or(0)
    }

    /// カーソル位置の選択肢
    pub fn cursor_option(&self) -> RegionOption {
        RegionOption::all()
            .get(self.menu_cursor)
            .copied()
            .unwrap_or_default()
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::SearchInput(c) => {
            let mut query = model.controller.state().search_query.clone();
            query.push(c);
            change_search(model, query);
        }
        Msg::SearchBackspace => {
            let mut query = model.controller.state().search_query.clone();
            if query.pop().is_some() {
                change_search(model, query);
            }
        }
        Msg::SearchClear => {
            if !model.controller.state().search_query.is_empty() {
                change_search(model, String::new());
            }
        }
        Msg::ActivateFilter => {
            if !model.controller.state().is_menu_open() {
                model.menu_cursor = model.current_option_index();
            }
            model.controller.dispatch(ViewEvent::ActivateFilterControl);
        }
        Msg::MenuUp => {
            let len = RegionOption::all().len();
            model.menu_cursor = (model.menu_cursor + len - 1) % len;
        }
        Msg::MenuDown => {
            model.menu_cursor = (model.menu_cursor + 1) % RegionOption::all().len();
        }
        Msg::MenuConfirm => {
            let option = model.cursor_option();
            select_region(model, option);
        }
        Msg::SelectRegion(option) => {
            select_region(model, option);
        }
        Msg::ClickAway => {
            model.controller.dispatch(ViewEvent::ClickAway);
        }
        Msg::Scroll(delta) => {
            model.scroll = model
                .scroll
                .saturating_add_signed(delta)
                .min(model.max_scroll);
        }
    }
}

/// 検索テキストを置き換え、先頭へ戻す
fn change_search(model: &mut Model, query: String) {
    model.controller.dispatch(ViewEvent::SearchChanged(query));
    model.scroll = 0;
}

fn select_region(model: &mut Model, option: RegionOption) {
    let before = model.controller.state().region_filter;
    model.controller.dispatch(ViewEvent::SelectRegion(option));
    if model.controller.state().region_filter != before {
        model.scroll = 0;
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
