//! Integration tests for the file list view-model over the bundled fixture.

mod helpers;

use filedesk_core::types::FilterCriteria;
use filedesk_view::{FileListViewModel, UiState, status_badge_class, status_icon, StatusIcon};

fn criteria_grid() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::none(),
        FilterCriteria::none().with_name_query("options"),
        FilterCriteria::none().with_name_query("   "),
        FilterCriteria::none().with_status("Approved"),
        FilterCriteria::none().with_status("Draft"),
        FilterCriteria::none().with_uploader("Akash Parwani, Sama..."),
        FilterCriteria::none()
            .with_name_query("gf")
            .with_uploader("Rushal Sohail, Smart..."),
        FilterCriteria::none().with_status("Unknown"),
    ]
}

#[tokio::test]
async fn test_visible_records_is_ordered_subsequence() {
    let mut vm = helpers::fixture_view(UiState::new()).await;
    let all = helpers::ids(vm.records());

    for criteria in criteria_grid() {
        vm.set_filter(criteria);
        let visible = helpers::ids(vm.visible_records());
        let mut cursor = all.iter();
        for id in &visible {
            assert!(
                cursor.any(|candidate| candidate == id),
                "{id} out of order or not in collection"
            );
        }
    }
}

#[tokio::test]
async fn test_tree_is_within_visible_records() {
    let mut vm = helpers::fixture_view(UiState::new()).await;

    for criteria in criteria_grid() {
        vm.set_filter(criteria);
        let visible = helpers::ids(vm.visible_records());
        let mut rendered = helpers::ids(vm.root_records());
        for root in vm.root_records() {
            rendered.extend(helpers::ids(vm.child_records_of(root.id.as_str())));
        }
        assert!(rendered.iter().all(|id| visible.contains(id)));

        // Every fixture child points at file-1, so the tree covers all
        // visible records whenever file-1 itself is visible.
        if visible.iter().any(|id| id == "file-1") {
            let mut sorted_rendered = rendered.clone();
            sorted_rendered.sort();
            let mut sorted_visible = visible.clone();
            sorted_visible.sort();
            assert_eq!(sorted_rendered, sorted_visible);
        }
    }
}

#[tokio::test]
async fn test_draft_child_of_filtered_out_parent() {
    let records = vec![
        helpers::record("f1", "A", "Approved", None),
        helpers::record("f2", "A", "Approved", Some("f1")),
        helpers::record("f3", "A", "Draft", Some("f1")),
    ];
    let mut vm = FileListViewModel::new(records);
    vm.set_filter(FilterCriteria::none().with_status("Draft"));

    assert!(vm.root_records().is_empty());
    assert_eq!(helpers::ids(vm.child_records_of("f1")), vec!["f3"]);
    assert!(vm.version_tree().is_empty());
}

#[tokio::test]
async fn test_scheme_query_matches_one_record() {
    let mut vm = helpers::fixture_view(UiState::new()).await;
    vm.set_filter(FilterCriteria::none().with_name_query("scheme"));
    let visible = vm.visible_records();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "EUPHORIA - SCHEME PLAN");
}

#[tokio::test]
async fn test_dangling_parent_is_silently_dropped() {
    let mut records = helpers::fixture_records().await;
    records.push(helpers::record("file-8", "EUPHORIA - LOST", "Draft", Some("file-99")));
    let vm = FileListViewModel::new(records);

    assert_eq!(vm.visible_records().len(), 8);
    assert!(!helpers::ids(vm.root_records()).contains(&"file-8".to_string()));
    for record in vm.records() {
        let children = helpers::ids(vm.child_records_of(record.id.as_str()));
        assert!(!children.contains(&"file-8".to_string()));
    }
    assert!(vm.child_records_of("file-99").iter().any(|r| r.id.as_str() == "file-8"));
}

#[tokio::test]
async fn test_selection_unaffected_by_filter() {
    let mut vm = helpers::fixture_view(UiState::new()).await;
    vm.toggle_selected("file-3");
    vm.toggle_selected("file-7");

    for criteria in criteria_grid() {
        vm.set_filter(criteria);
        assert!(vm.is_selected("file-3"));
        assert!(vm.is_selected("file-7"));
        assert!(!vm.is_selected("file-1"));
    }

    vm.toggle_selected("file-7");
    vm.toggle_selected("file-7");
    assert!(vm.is_selected("file-7"));
}

#[tokio::test]
async fn test_expansion_round_trip() {
    let mut vm = helpers::fixture_view(UiState::expanded_at("file-1")).await;
    assert!(vm.version_tree()[0].expanded);

    vm.toggle_expanded("file-1");
    assert!(vm.version_tree().iter().all(|g| !g.expanded));
    vm.toggle_expanded("file-1");
    assert!(vm.is_expanded("file-1"));

    let state = vm.into_state();
    assert_eq!(state.expanded().map(|id| id.as_str()), Some("file-1"));
}

#[tokio::test]
async fn test_filter_options_ignore_active_filter() {
    let mut vm = helpers::fixture_view(UiState::new()).await;
    let before = vm.filter_options();
    vm.set_filter(FilterCriteria::none().with_status("Rejected"));
    assert_eq!(vm.filter_options(), before);
    assert_eq!(before.statuses, vec!["Approved", "Draft", "Rejected", "Reviewed"]);
    assert_eq!(
        before.uploaders,
        vec![
            "Rushal Sohail, Smart...",
            "Akash Parwani, Sama...",
            "System User, Smart..."
        ]
    );
}

#[tokio::test]
async fn test_status_helpers_cover_fixture_and_unknowns() {
    let records = helpers::fixture_records().await;
    for record in &records {
        assert_ne!(status_badge_class(record.status.as_str()), "status-badge-default");
        assert_ne!(status_icon(record.status.as_str()), StatusIcon::None);
    }
    assert_eq!(status_badge_class("Superseded"), "status-badge-default");
}
