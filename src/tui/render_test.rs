use super::*;
use crate::country::Flags;
use crate::directory::{ListViewController, ViewEvent, ViewState};
use crate::tui::app::{update, Msg};
use crate::tui::hit::ClickTarget;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::runtime::Handle;

fn make_country(name: &str, region: &str, capital: Option<&str>, population: u64) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        region: region.to_string(),
        alpha3_code: name[..3].to_uppercase(),
        flags: Flags::default(),
        population,
        capital: capital.map(str::to_string),
    }
}

fn sample_records() -> Vec<CountryRecord> {
    vec![
        make_country("Fiji", "Oceania", Some("Suva"), 896_444),
        make_country("Finland", "Europe", Some("Helsinki"), 5_491_817),
        make_country("Antarctica", "Polar", None, 1_000),
    ]
}

fn model_with(records: Vec<CountryRecord>, loaded: bool) -> Model {
    let mut controller =
        ListViewController::mount(Handle::current(), ViewState::mounted(), records);
    if loaded {
        controller.dispatch(ViewEvent::LoadingElapsed);
    }
    Model::new(controller)
}

fn draw(model: &mut Model, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| view(f, model)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn cards_show_name_population_region_and_capital() {
    let mut model = model_with(sample_records(), true);
    let screen = draw(&mut model, 120, 30);

    assert!(screen.contains("Know Your Country"));
    assert!(screen.contains("Finland"));
    assert!(screen.contains("5,491,817"));
    assert!(screen.contains("Helsinki"));
    assert!(screen.contains("Oceania"));
    assert!(screen.contains("3 of 3 countries"));
}

#[tokio::test]
async fn missing_capital_renders_dash() {
    let mut model = model_with(sample_records(), true);
    update(&mut model, Msg::SearchInput('a'));
    update(&mut model, Msg::SearchInput('n'));
    update(&mut model, Msg::SearchInput('t'));
    let screen = draw(&mut model, 120, 30);

    assert!(screen.contains("Antarctica"));
    assert!(screen.contains("Capital: -"));
    assert!(!screen.contains("Helsinki"));
}

#[tokio::test]
async fn loading_renders_placeholders_not_cards() {
    let mut model = model_with(sample_records(), false);
    let screen = draw(&mut model, 120, 30);

    assert!(screen.contains("Loading 3 countries..."));
    assert!(screen.contains("░"));
    assert!(!screen.contains("Helsinki"));
}

#[tokio::test]
async fn empty_result_message() {
    let mut model = model_with(sample_records(), true);
    update(&mut model, Msg::SearchInput('z'));
    let screen = draw(&mut model, 120, 30);

    assert!(screen.contains("No countries matched"));
    assert!(screen.contains("0 of 3 countries"));
}

#[tokio::test]
async fn filter_button_shows_label() {
    let mut model = model_with(sample_records(), true);
    assert!(draw(&mut model, 120, 30).contains("filter by region"));

    update(&mut model, Msg::ActivateFilter);
    update(&mut model, Msg::SelectRegion(RegionOption::Europe));
    let screen = draw(&mut model, 120, 30);
    assert!(screen.contains("europe"));
    assert!(!screen.contains("Fiji"));
}

#[tokio::test]
async fn open_menu_lists_options_and_records_hit_regions() {
    let mut model = model_with(sample_records(), true);
    update(&mut model, Msg::ActivateFilter);
    let screen = draw(&mut model, 120, 30);

    for option in RegionOption::all() {
        assert!(screen.contains(option.label()));
    }

    // ボタンは右端 FILTER_WIDTH 幅、タイトル行の直下
    assert_eq!(model.hit.classify(110, 2), ClickTarget::FilterButton);
    // メニューの 1 行目は枠線、2 行目から項目
    assert_eq!(
        model.hit.classify(110, 5),
        ClickTarget::MenuItem(RegionOption::All)
    );
    assert_eq!(
        model.hit.classify(110, 8),
        ClickTarget::MenuItem(RegionOption::Asia)
    );
    assert_eq!(model.hit.classify(5, 20), ClickTarget::Outside);
}

#[tokio::test]
async fn closed_menu_has_no_item_hit_regions() {
    let mut model = model_with(sample_records(), true);
    draw(&mut model, 120, 30);
    assert_eq!(model.hit.classify(110, 8), ClickTarget::Outside);
}

#[tokio::test]
async fn scroll_is_clamped_to_content() {
    let records: Vec<CountryRecord> = (0..40)
        .map(|i| make_country(&format!("Country{i:02}"), "Asia", None, i))
        .collect();
    let mut model = model_with(records, true);
    model.scroll = 1_000;
    draw(&mut model, 120, 30);

    // グリッド高さ 24 → 4 行表示、40 件 / 4 列 = 10 行
    assert_eq!(model.max_scroll, 6);
    assert_eq!(model.scroll, 6);
}

#[tokio::test]
async fn tiny_terminal_does_not_panic() {
    let mut model = model_with(sample_records(), true);
    update(&mut model, Msg::ActivateFilter);
    draw(&mut model, 10, 4);
}

#[test]
fn cursor_counts_display_width() {
    let area = Rect::new(0, 1, 40, 3);
    assert_eq!(search_cursor(area, ""), Position::new(1, 2));
    assert_eq!(search_cursor(area, "fi"), Position::new(3, 2));
    // 全角 2 文字は 4 セル
    assert_eq!(search_cursor(area, "日本"), Position::new(5, 2));
}

#[test]
fn cursor_stays_inside_box_for_long_query() {
    let area = Rect::new(10, 1, 12, 3);
    let query = "x".repeat(500);
    assert_eq!(search_cursor(area, &query), Position::new(20, 2));
}

#[test]
fn cursor_near_coordinate_limit_does_not_overflow() {
    let area = Rect::new(u16::MAX - 5, 0, 5, 3);
    let query = "ü".repeat(70_000);
    let pos = search_cursor(area, &query);
    assert!(pos.x >= area.x);
    assert!(pos.x < area.right());
}
