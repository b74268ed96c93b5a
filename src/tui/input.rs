//! 入力イベントをメッセージに変換

use super::app::{Model, Msg};
use super::hit::ClickTarget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// PageUp / PageDown のスクロール行数
const PAGE_ROWS: isize = 3;

/// キー入力をメッセージに変換
pub fn key_to_msg(model: &Model, key: KeyEvent) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }

    if model.controller.state().is_menu_open() {
        // メニュー表示中は文字入力を受け付けない
        match key.code {
            KeyCode::Up => Some(Msg::MenuUp),
            KeyCode::Down => Some(Msg::MenuDown),
            KeyCode::Enter => Some(Msg::MenuConfirm),
            KeyCode::Esc => Some(Msg::ClickAway),
            KeyCode::Tab => Some(Msg::ActivateFilter),
            _ => None,
        }
    } else {
        match key.code {
            KeyCode::Esc if !model.controller.state().search_query.is_empty() => {
                Some(Msg::SearchClear)
            }
            KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Tab => Some(Msg::ActivateFilter),
            KeyCode::Backspace => Some(Msg::SearchBackspace),
            KeyCode::Char('u') if ctrl => Some(Msg::SearchClear),
            KeyCode::Char(c) if !ctrl => Some(Msg::SearchInput(c)),
            KeyCode::Up => Some(Msg::Scroll(-1)),
            KeyCode::Down => Some(Msg::Scroll(1)),
            KeyCode::PageUp => Some(Msg::Scroll(-PAGE_ROWS)),
            KeyCode::PageDown => Some(Msg::Scroll(PAGE_ROWS)),
            _ => None,
        }
    }
}

/// マウス入力をメッセージに変換
pub fn mouse_to_msg(model: &Model, mouse: MouseEvent) -> Option<Msg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match model.hit.classify(mouse.column, mouse.row) {
                ClickTarget::FilterButton => Some(Msg::ActivateFilter),
                ClickTarget::MenuItem(option) => Some(Msg::SelectRegion(option)),
                ClickTarget::MenuChrome => None,
                ClickTarget::Outside => Some(Msg::ClickAway),
            }
        }
        MouseEventKind::ScrollUp => Some(Msg::Scroll(-1)),
        MouseEventKind::ScrollDown => Some(Msg::Scroll(1)),
        _ => None,
    }
}
