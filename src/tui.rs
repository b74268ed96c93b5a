//! 国一覧 TUI
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update
//! - `input`: キー・マウス入力の変換
//! - `hit`: フィルタコントロールのクリック判定
//! - `layout`: カードグリッドの配置計算
//! - `render`: 画面描画

mod app;
mod hit;
mod input;
mod layout;
mod render;

use crate::directory::ListViewController;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;

/// 入力待ちの間隔（タイマー由来のイベントを取り込む周期）
const TICK: Duration = Duration::from_millis(100);

/// TUI を実行
///
/// 終了時はコントローラを破棄し、未発火のタイマーを止める。
pub fn run(controller: ListViewController) -> io::Result<()> {
    let mut model = app::Model::new(controller);
    let result = with_terminal(enter, || main_loop(&mut model), restore);
    model.controller.unmount();
    result
}

/// 端末設定 → 本体 → 復元
///
/// 設定の途中で失敗しても、本体が失敗しても `leave` は必ず呼ばれる。
fn with_terminal<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = enter().and_then(|()| body());
    let restored = leave();
    result.and_then(|value| restored.map(|()| value))
}

fn enter() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    Ok(())
}

fn main_loop(model: &mut app::Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    while !model.should_quit {
        terminal.draw(|f| render::view(f, model))?;

        if event::poll(TICK)? {
            let msg = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::key_to_msg(model, key),
                Event::Mouse(mouse) => input::mouse_to_msg(model, mouse),
                _ => None,
            };
            if let Some(msg) = msg {
                tracing::trace!(?msg, "tui message");
                app::update(model, msg);
            }
        }

        model.controller.pump();
    }

    Ok(())
}

/// 全手順を試み、最初のエラーを返す
fn restore() -> io::Result<()> {
    let mouse = stdout().execute(DisableMouseCapture).map(|_| ());
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    let raw = terminal::disable_raw_mode();
    mouse.and(screen).and(raw)
}
