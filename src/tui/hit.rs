//! クリック判定
//!
//! 描画層が毎フレーム、フィルタコントロール（ボタン＋開いているメニュー）の領域を記録する。
//! 入力層はこれに問い合わせて、領域外のクリックを ClickAway として扱う。

use crate::country::RegionOption;
use ratatui::layout::{Position, Rect};

/// クリック位置の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// フィルタボタン
    FilterButton,
    /// メニュー項目
    MenuItem(RegionOption),
    /// メニュー内だが項目以外（枠線など）
    MenuChrome,
    /// コントロール領域外
    Outside,
}

/// フィルタコントロールの当たり判定領域
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    button: Rect,
    menu: Option<Rect>,
    items: Vec<(Rect, RegionOption)>,
}

impl HitMap {
    /// フレーム開始時にリセット
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_button(&mut self, area: Rect) {
        self.button = area;
    }

    pub fn set_menu(&mut self, area: Rect, items: Vec<(Rect, RegionOption)>) {
        self.menu = Some(area);
        self.items = items;
    }

    /// 座標を分類
    pub fn classify(&self, column: u16, row: u16) -> ClickTarget {
        let pos = Position::new(column, row);

        if self.button.contains(pos) {
            return ClickTarget::FilterButton;
        }

        if let Some(menu) = self.menu {
            if menu.contains(pos) {
                return self
                    .items
                    .iter()
                    .find(|(rect, _)| rect.contains(pos))
                    .map(|(_, option)| ClickTarget::MenuItem(*option))
                    .unwrap_or(ClickTarget::MenuChrome);
            }
        }

        ClickTarget::Outside
    }
}
