//! Tests for the listing.

use super::*;
use crate::error::Error;
use crate::table::Column;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;

fn table_of(names: &[&str]) -> table::Model {
    let rows = names
        .iter()
        .enumerate()
        .map(|(i, n)| Row::new(vec![i.to_string(), n.to_string()]).with_key(i.to_string()))
        .collect();
    table::Model::new(vec![Column::new("ID"), Column::new("Name")], rows)
}

fn listing(names: &[&str]) -> Model {
    Model::new(table_of(names), Config::default()).unwrap()
}

fn visible_names(model: &Model) -> Vec<String> {
    model
        .visible_rows()
        .iter()
        .map(|r| r.cells[1].clone())
        .collect()
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

async fn deleted(cmd: Cmd) -> DeleteAction {
    let msg = cmd.await.expect("delete command yields a message");
    let DeleteMsg(action) = msg
        .downcast_ref::<DeleteMsg>()
        .expect("message is a DeleteMsg")
        .clone();
    action
}

fn type_term(model: &mut Model, term: &str) {
    for c in term.chars() {
        model.update(&key(KeyCode::Char(c)));
    }
}

const SIX: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

#[test]
fn test_six_rows_two_pages() {
    let mut model = listing(&SIX);
    assert_eq!(model.total_pages(), 2);
    assert_eq!(model.current_page(), Some(1));
    assert_eq!(visible_names(&model), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(model.indicator(), "Page 1 of 2");
    assert!(model.prev_disabled());
    assert!(!model.next_disabled());

    model.on_next();
    assert_eq!(model.current_page(), Some(2));
    assert_eq!(visible_names(&model), vec!["F"]);
    assert_eq!(model.indicator(), "Page 2 of 2");
    assert!(!model.prev_disabled());
    assert!(model.next_disabled());
}

#[test]
fn test_navigation_guards_at_ends() {
    let mut model = listing(&SIX);
    model.on_previous();
    assert_eq!(model.current_page(), Some(1));

    model.on_next();
    model.on_next();
    assert_eq!(model.current_page(), Some(2));

    model.on_previous();
    assert_eq!(model.current_page(), Some(1));
}

#[test]
fn test_no_match_shows_no_results() {
    let mut model = listing(&SIX);
    model.on_search_changed("zzz");
    assert_eq!(model.total_pages(), 0);
    assert_eq!(model.current_page(), None);
    assert_eq!(model.indicator(), "No products found");
    assert!(model.prev_disabled());
    assert!(model.next_disabled());
    assert!(model.visible_rows().is_empty());

    model.on_next();
    model.on_previous();
    assert_eq!(model.current_page(), None);
    assert!(model.visible_rows().is_empty());
}

#[test]
fn test_empty_row_set() {
    let model = listing(&[]);
    assert_eq!(model.total_pages(), 0);
    assert_eq!(model.indicator(), "No products found");
    assert!(model.selected_row().is_none());
}

#[test]
fn test_search_resets_to_first_page() {
    let names: Vec<String> = (0..12).map(|i| format!("Item {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut model = listing(&refs);
    model.on_next();
    model.on_next();
    assert_eq!(model.current_page(), Some(3));

    model.on_search_changed("item");
    assert_eq!(model.current_page(), Some(1));
    assert_eq!(model.total_pages(), 3);
    assert_eq!(visible_names(&model), refs[..5].to_vec());
}

#[test]
fn test_filter_keeps_order_and_hides_others() {
    let mut model = listing(&["Apple", "Kiwi", "banana", "Avocado", "Plum"]);
    model.on_search_changed("A");
    assert_eq!(model.search_term(), "A");
    assert_eq!(
        model
            .filtered_rows()
            .iter()
            .map(|r| r.cells[1].as_str())
            .collect::<Vec<_>>(),
        vec!["Apple", "banana", "Avocado"]
    );
    assert_eq!(visible_names(&model), vec!["Apple", "banana", "Avocado"]);
    assert!(!model.table().is_visible(1));
    assert!(!model.table().is_visible(4));

    model.on_search_changed("");
    assert_eq!(model.filtered_indices(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_row_without_name_matches_only_empty_term() {
    let rows = vec![
        Row::new(vec!["1".into(), "Apple".into()]),
        Row::new(vec!["2".into()]),
    ];
    let table = table::Model::new(vec![Column::new("ID"), Column::new("Name")], rows);
    let mut model = Model::new(table, Config::default()).unwrap();
    assert_eq!(model.filtered_indices(), &[0, 1]);
    model.on_search_changed("a");
    assert_eq!(model.filtered_indices(), &[0]);
}

#[test]
fn test_page_window_sizes() {
    let names: Vec<String> = (0..13).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut model = listing(&refs);
    let total = model.total_pages();
    assert_eq!(total, 3);
    for page in 1..=total {
        model.render_page(page);
        let expected = model.page_size().min(refs.len() - (page - 1) * model.page_size());
        let start = (page - 1) * model.page_size();
        assert_eq!(visible_names(&model), refs[start..start + expected].to_vec());
        assert_eq!(model.prev_disabled(), page == 1);
        assert_eq!(model.next_disabled(), page == total);
    }
}

#[test]
fn test_render_page_is_idempotent() {
    let mut model = listing(&SIX);
    model.render_page(2);
    let first = visible_names(&model);
    model.render_page(2);
    assert_eq!(visible_names(&model), first);
}

#[test]
fn test_out_of_range_page_is_clamped() {
    let mut model = listing(&SIX);
    model.render_page(9);
    assert_eq!(model.current_page(), Some(2));
    model.render_page(0);
    assert_eq!(model.current_page(), Some(1));
}

#[test]
fn test_custom_page_size() {
    let config = Config::default().with_page_size(2);
    let model = Model::new(table_of(&SIX), config).unwrap();
    assert_eq!(model.total_pages(), 3);
    assert_eq!(visible_names(&model), vec!["A", "B"]);
}

#[test]
fn test_configured_name_column() {
    let rows = vec![
        Row::new(vec!["Kiwi".into()]),
        Row::new(vec!["Plum".into()]),
    ];
    let table = table::Model::new(vec![Column::new("Title")], rows);
    let mut model = Model::new(table, Config::default().with_name_column("Title")).unwrap();
    model.on_search_changed("ki");
    assert_eq!(model.filtered_indices(), &[0]);
}

#[test]
fn test_missing_name_column_is_fatal() {
    let table = table::Model::new(vec![Column::new("Title")], vec![]);
    let err = Model::new(table, Config::default()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn(_)));
}

#[test]
fn test_keys_drive_search_and_paging() {
    let mut model = listing(&["Apple", "Apricot", "Avocado", "Banana", "Almond", "Acai"]);
    model.update(&key(KeyCode::Right));
    assert_eq!(model.current_page(), Some(2));

    model.update(&key(KeyCode::Char('/')));
    assert!(model.focused());
    type_term(&mut model, "ap");
    assert_eq!(model.search_term(), "ap");
    assert_eq!(model.current_page(), Some(1));
    assert_eq!(visible_names(&model), vec!["Apple", "Apricot"]);

    // Arrow keys edit the search box while it has focus.
    model.update(&key(KeyCode::Left));
    assert_eq!(model.search_term(), "ap");

    model.update(&key(KeyCode::Esc));
    assert!(!model.focused());
    model.update(&key(KeyCode::Char('j')));
    assert_eq!(model.selected_row().unwrap().cells[1], "Apricot");
    model.update(&key(KeyCode::Char('j')));
    assert_eq!(model.selected_row().unwrap().cells[1], "Apricot");
    model.update(&key(KeyCode::Char('k')));
    assert_eq!(model.selected_row().unwrap().cells[1], "Apple");
}

#[test]
fn test_request_delete_uses_confirm() {
    let mut model = listing(&SIX);
    model.cursor_down();

    let mut asked = 0;
    let mut decline = |_: &str| {
        asked += 1;
        false
    };
    assert_eq!(model.request_delete(&mut decline), Activation::Cancelled);
    assert_eq!(asked, 1);

    let mut accept = |_: &str| true;
    match model.request_delete(&mut accept) {
        Activation::Proceed(action) => {
            assert_eq!(action.row, 1);
            assert_eq!(action.key.as_deref(), Some("1"));
            assert_eq!(action.name, "B");
        }
        Activation::Cancelled => panic!("expected the delete to proceed"),
    }
    assert_eq!(model.table().len(), 6);
}

#[test]
fn test_delete_key_declined_yields_no_command() {
    let mut model = listing(&SIX).with_confirm(|_: &str| false);
    assert!(model.update(&key(KeyCode::Char('d'))).is_none());
}

#[tokio::test]
async fn test_delete_key_confirmed_yields_delete_msg() {
    let mut model = listing(&SIX).with_confirm(|message: &str| {
        message == "Are you sure you want to delete this product?"
    });
    model.update(&key(KeyCode::Down));
    let cmd = model.update(&key(KeyCode::Char('d'))).expect("confirmed delete");
    let action = deleted(cmd).await;
    assert_eq!(action.row, 1);
    assert_eq!(action.key.as_deref(), Some("1"));
    assert_eq!(action.name, "B");
    assert!(model.pending_delete().is_none());
}

#[tokio::test]
async fn test_delete_prompt_answered_with_yes() {
    let mut model = listing(&SIX);
    model.on_next();
    assert!(model.update(&key(KeyCode::Char('d'))).is_none());
    assert_eq!(model.pending_delete().map(|a| a.name.as_str()), Some("F"));

    let view = lipgloss::strip_ansi(&model.view());
    assert!(view.contains("Are you sure you want to delete this product? [y/N]"));
    assert!(!view.contains("d delete"));

    let cmd = model.update(&key(KeyCode::Char('y'))).expect("confirmed delete");
    assert!(model.pending_delete().is_none());
    let action = deleted(cmd).await;
    assert_eq!(action.row, 5);
    assert_eq!(action.key.as_deref(), Some("5"));
    assert_eq!(model.table().len(), 6);
}

#[test]
fn test_delete_prompt_declined_by_any_other_key() {
    let mut model = listing(&SIX);
    model.update(&key(KeyCode::Char('d')));
    assert!(model.pending_delete().is_some());

    // The answer is consumed; it does not also turn the page.
    assert!(model.update(&key(KeyCode::Right)).is_none());
    assert!(model.pending_delete().is_none());
    assert_eq!(model.current_page(), Some(1));
    assert!(!lipgloss::strip_ansi(&model.view()).contains("[y/N]"));

    model.update(&key(KeyCode::Char('d')));
    assert!(model.update(&key(KeyCode::Char('n'))).is_none());
    assert!(model.pending_delete().is_none());
}

#[test]
fn test_custom_delete_prompt() {
    let config = Config {
        delete_prompt: "Remove it?".into(),
        ..Config::default()
    };
    let mut model = Model::new(table_of(&SIX), config).unwrap();
    assert_eq!(model.delete_guard().prompt(), "Remove it?");
    model.update(&key(KeyCode::Char('d')));
    assert!(lipgloss::strip_ansi(&model.view()).contains("Remove it? [y/N]"));
}

#[test]
fn test_delete_without_rows_is_cancelled() {
    let mut model = listing(&SIX);
    model.on_search_changed("nothing");
    let mut accept = |_: &str| true;
    assert_eq!(model.request_delete(&mut accept), Activation::Cancelled);
}

#[test]
fn test_view_lists_page_and_indicator() {
    let mut model = listing(&SIX);
    model.on_next();
    let view = lipgloss::strip_ansi(&model.view());
    assert!(view.contains("Search: "));
    assert!(view.contains("> 5  | F"));
    assert!(!view.contains("| A"));
    assert!(view.contains("‹ Prev  Page 2 of 2  Next ›"));
    assert!(view.contains("d delete"));
}

#[test]
fn test_view_while_searching_shows_only_done_help() {
    let mut model = listing(&SIX);
    model.update(&key(KeyCode::Char('/')));
    type_term(&mut model, "b");
    let view = lipgloss::strip_ansi(&model.view());
    assert!(view.contains("Search: b"));
    assert!(view.contains("esc done"));
    assert!(!view.contains("d delete"));
    assert!(view.contains("Page 1 of 1"));
}
