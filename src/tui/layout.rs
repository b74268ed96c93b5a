//! カードグリッドの配置計算

use ratatui::layout::Rect;

/// 1 列あたりの最小幅
pub const CARD_MIN_WIDTH: u16 = 30;
/// カードの高さ（枠線込み）
pub const CARD_HEIGHT: u16 = 5;
/// 列数の上限
pub const MAX_COLUMNS: u16 = 4;

/// 領域幅に収まる列数（1..=MAX_COLUMNS）
pub fn columns_for(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS) as usize
}

/// カード数から必要な行数
pub fn rows_for(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// 領域の高さに収まる行数（最低 1）
pub fn visible_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// スクロール可能な最大の先頭行
pub fn max_scroll(count: usize, area: Rect) -> usize {
    rows_for(count, columns_for(area.width)).saturating_sub(visible_rows(area.height))
}

/// 表示範囲内で `slot` 番目のカードの領域
pub fn cell_rect(area: Rect, columns: usize, slot: usize) -> Rect {
    let columns = columns.max(1);
    let col = (slot % columns) as u16;
    let row = (slot / columns) as u16;
    let width = area.width / columns as u16;

    // 最終列は端数を吸収
    let w = if col as usize == columns - 1 {
        area.width - width * col
    } else {
        width
    };

    Rect::new(area.x + width * col, area.y + CARD_HEIGHT * row, w, CARD_HEIGHT)
        .intersection(area)
}
