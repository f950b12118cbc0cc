use std::time::Duration;

use recipe_book::RecipeError;
use recipe_book::config::BasicConfig;
use recipe_book::recipes::RecipeForm;
use recipe_book::session::view::{BookView, BrowseQuery, Page};
use recipe_book::session::{
    Action, NoticeLevel, Password, PasswordGate, SessionId, SessionState, actor, reduce,
};

fn login(password: &str) -> Action {
    Action::Login {
        password: Password::new(password),
    }
}

fn pancake_form() -> RecipeForm {
    RecipeForm {
        name: "Pancakes".into(),
        ingredients: "flour\nmilk".into(),
        instructions: "mix\nfry".into(),
        tags: "breakfast".into(),
        ..Default::default()
    }
}

#[test]
fn authenticate_is_exact_and_case_sensitive() {
    let gate = PasswordGate::new("Secret");
    assert!(gate.authenticate(&Password::new("Secret")));
    assert!(!gate.authenticate(&Password::new("secret")));
    assert!(!gate.authenticate(&Password::new(" Secret")));
    assert!(!gate.authenticate(&Password::new("Secret ")));
    assert!(!gate.authenticate(&Password::new("")));
    assert!(!gate.is_fallback());
}

#[test]
fn missing_password_falls_back_to_default() {
    let gate = PasswordGate::from_config(&BasicConfig::default());
    assert!(gate.is_fallback());
    assert!(gate.authenticate(&Password::new("1234")));
}

#[test]
fn password_debug_is_redacted() {
    let action = login("hunter2");
    assert!(!format!("{action:?}").contains("hunter2"));
}

#[test]
fn wrong_password_leaves_state_logged_out() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();

    let err = reduce(&mut state, &gate, login("nope")).expect_err("rejected");
    assert!(matches!(err, RecipeError::Authentication));
    assert!(!state.password_correct);
    assert!(state.store().is_empty());
}

#[test]
fn login_seeds_store_and_logout_resets_flag() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();

    let notice = reduce(&mut state, &gate, login("pwd")).expect("login");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert!(state.password_correct);
    assert_eq!(state.store().len(), 3);

    reduce(&mut state, &gate, Action::Logout).expect("logout");
    assert!(!state.password_correct);
    assert_eq!(state.store().len(), 3);
}

#[test]
fn seed_runs_once_per_session() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    for name in ["계란찜", "김치찌개", "알리오 올리오"] {
        reduce(&mut state, &gate, Action::DeleteRecipe { name: name.into() }).expect("delete");
    }
    reduce(&mut state, &gate, Action::Logout).expect("logout");
    reduce(&mut state, &gate, login("pwd")).expect("login again");

    assert!(state.store().is_empty());
}

#[test]
fn mutations_require_login() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();

    let err = reduce(&mut state, &gate, Action::AddRecipe(pancake_form()))
        .expect_err("logged out");
    assert!(matches!(err, RecipeError::LoginRequired));
    assert!(state.store().is_empty());
}

#[test]
fn add_twice_keeps_one_entry() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    reduce(&mut state, &gate, Action::AddRecipe(pancake_form())).expect("first add");
    let before = state.store().clone();
    let err = reduce(&mut state, &gate, Action::AddRecipe(pancake_form()))
        .expect_err("duplicate");

    assert!(matches!(err, RecipeError::DuplicateName(_)));
    assert_eq!(state.store(), &before);
    assert_eq!(state.store().len(), 4);
}

#[test]
fn delete_absent_recipe_is_not_found() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");
    let before = state.store().clone();

    let err = reduce(&mut state, &gate, Action::DeleteRecipe { name: "Ghost".into() })
        .expect_err("absent");
    assert!(matches!(err, RecipeError::NotFound(_)));
    assert_eq!(state.store(), &before);
}

#[test]
fn book_view_selects_first_result_and_numbers_steps() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    let view = BookView::build(&state, &BrowseQuery::default(), None);
    assert_eq!(view.result_count, 3);
    assert!(!view.filters_active);
    let detail = view.detail.expect("first recipe selected");
    assert_eq!(detail.name, "계란찜");
    assert_eq!(detail.steps.first().map(|s| s.number), Some(1));
    assert_eq!(detail.steps.len(), 5);
    assert!(view.results[0].checked);
}

#[test]
fn book_view_has_no_detail_when_nothing_matches() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    let query = BrowseQuery {
        q: "nothing-like-this".into(),
        ..Default::default()
    };
    let view = BookView::build(&state, &query, None);
    assert!(view.results.is_empty());
    assert!(view.detail.is_none());
    assert!(view.filters_active);
}

#[test]
fn book_view_keeps_explicit_pick_only_while_listed() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    let picked = BrowseQuery {
        selected: Some("알리오 올리오".into()),
        ..Default::default()
    };
    let view = BookView::build(&state, &picked, None);
    assert_eq!(view.detail.map(|d| d.name).as_deref(), Some("알리오 올리오"));

    let filtered_out = BrowseQuery {
        tag: vec!["한식".into()],
        selected: Some("알리오 올리오".into()),
        ..Default::default()
    };
    let view = BookView::build(&state, &filtered_out, None);
    assert_eq!(view.detail.map(|d| d.name).as_deref(), Some("계란찜"));
}

#[test]
fn result_links_keep_filter_and_pick_one_recipe() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    let query = BrowseQuery {
        q: "마늘".into(),
        tag: vec!["매콤".into()],
        ..Default::default()
    };
    let view = BookView::build(&state, &query, None);
    let links: Vec<&str> = view.results.iter().map(|r| r.href.as_str()).collect();
    assert_eq!(
        links,
        vec!["/?q=%EB%A7%88%EB%8A%98&tag=%EB%A7%A4%EC%BD%A4&selected=%EC%95%8C%EB%A6%AC%EC%98%A4+%EC%98%AC%EB%A6%AC%EC%98%A4"]
    );
}

#[test]
fn tags_no_recipe_carries_are_not_applied() {
    let gate = PasswordGate::new("pwd");
    let mut state = SessionState::new();
    reduce(&mut state, &gate, login("pwd")).expect("login");

    let query = BrowseQuery {
        tag: vec!["breakfast".into(), "한식".into()],
        ..Default::default()
    };
    let view = BookView::build(&state, &query, None);
    assert_eq!(view.result_count, 2);
    assert!(view.filters_active);
    let checked: Vec<&str> = view
        .tag_options
        .iter()
        .filter(|t| t.checked)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(checked, vec!["한식"]);

    let stale_only = BrowseQuery {
        tag: vec!["breakfast".into()],
        ..Default::default()
    };
    let view = BookView::build(&state, &stale_only, None);
    assert_eq!(view.result_count, 3);
    assert!(!view.filters_active);
}

#[tokio::test]
async fn actor_isolates_sessions_and_consumes_notices() {
    let handle = actor::spawn(PasswordGate::new("pwd"), Duration::from_secs(60))
        .await
        .expect("spawn actor");
    let alice = SessionId::new();
    let bob = SessionId::new();

    handle.dispatch(alice, login("pwd")).await.expect("alice logs in");
    handle
        .dispatch(alice, Action::DeleteRecipe { name: "계란찜".into() })
        .await
        .expect("alice deletes");

    let page = handle.render(alice, BrowseQuery::default()).await.expect("render");
    let Page::Book(view) = page else {
        panic!("alice should be logged in");
    };
    assert_eq!(view.result_count, 2);
    assert_eq!(view.notice.map(|n| n.level), Some(NoticeLevel::Success));

    let again = handle.render(alice, BrowseQuery::default()).await.expect("render");
    let Page::Book(view) = again else {
        panic!("alice should be logged in");
    };
    assert!(view.notice.is_none());

    let err = handle
        .dispatch(bob, Action::DeleteRecipe { name: "김치찌개".into() })
        .await
        .expect_err("bob is logged out");
    assert!(matches!(err, RecipeError::LoginRequired));
    assert!(matches!(
        handle.render(bob, BrowseQuery::default()).await.expect("render"),
        Page::Login(_)
    ));
    assert_eq!(handle.active_sessions().await.expect("count"), 2);
}

#[tokio::test]
async fn idle_sessions_are_discarded() {
    let handle = actor::spawn(PasswordGate::new("pwd"), Duration::from_millis(50))
        .await
        .expect("spawn actor");
    let id = SessionId::new();
    handle.dispatch(id, login("pwd")).await.expect("login");

    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(matches!(
        handle.render(id, BrowseQuery::default()).await.expect("render"),
        Page::Login(_)
    ));
    assert_eq!(handle.active_sessions().await.expect("count"), 0);
}
