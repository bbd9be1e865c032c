// Integration tests for the dashboard screen: search, follow and the
// follow request queue.

mod common;

use linguaconnect::FollowStatus;

#[test]
fn test_accept_request_adds_connected_user() {
    let mut dashboard = common::seeded_dashboard();
    let before = dashboard.directory().len();

    assert!(dashboard.accept_request(101));

    assert!(dashboard.requests().iter().all(|r| r.id != 101));
    assert_eq!(dashboard.requests().len(), 1);
    assert_eq!(dashboard.directory().len(), before + 1);

    let john = dashboard.directory().get(101).expect("John Doe should be listed");
    assert_eq!(john.name, "John Doe");
    assert_eq!(john.country, "USA");
    assert_eq!(john.learning, "Spanish");
    assert_eq!(john.follow_status, FollowStatus::Accepted);
    assert!(john.online);

    assert_eq!(dashboard.progress().global_friends, 4);
    assert_eq!(dashboard.online_now(), 7);
}

#[test]
fn test_decline_request_leaves_directory_alone() {
    let mut dashboard = common::seeded_dashboard();
    let before = dashboard.directory().len();

    assert!(dashboard.decline_request(102));
    assert_eq!(dashboard.requests().len(), 1);
    assert_eq!(dashboard.requests()[0].id, 101);
    assert_eq!(dashboard.directory().len(), before);
    assert!(dashboard.directory().get(102).is_none());

    // Already gone
    assert!(!dashboard.decline_request(102));
    assert!(!dashboard.accept_request(102));
}

#[test]
fn test_empty_request_queue() {
    let mut dashboard = common::seeded_dashboard();
    assert!(dashboard.accept_request(101));
    assert!(dashboard.decline_request(102));
    assert!(dashboard.requests().is_empty());
}

#[test]
fn test_search_for_spanish() {
    let mut dashboard = common::seeded_dashboard();
    dashboard.set_search("Spanish");

    let names: Vec<&str> = dashboard.filtered_users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Maria Santos", "Carlos Rodriguez"]);

    // Case does not matter, and the empty query shows everyone again
    dashboard.set_search("sPaNiSh");
    assert_eq!(dashboard.filtered_users().len(), 2);
    dashboard.set_search("");
    assert_eq!(dashboard.filtered_users().len(), 8);
}

#[test]
fn test_search_by_country_and_no_match() {
    let mut dashboard = common::seeded_dashboard();
    dashboard.set_search("norway");
    let ids: Vec<u32> = dashboard.filtered_users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![8]);

    dashboard.set_search("klingon");
    assert!(dashboard.filtered_users().is_empty());
}

#[test]
fn test_follow_transitions() {
    let mut dashboard = common::seeded_dashboard();

    // Emma Johnson starts not followed
    assert!(dashboard.select(3));
    assert!(dashboard.follow(3));
    assert_eq!(dashboard.selected_user().unwrap().follow_status, FollowStatus::Pending);

    // Following again changes nothing
    assert!(!dashboard.follow(3));
    assert_eq!(dashboard.selected_user().unwrap().follow_status, FollowStatus::Pending);

    // Hiroshi is pending and Maria is accepted
    assert!(!dashboard.follow(2));
    assert!(!dashboard.follow(1));
    assert_eq!(dashboard.directory().get(1).unwrap().follow_status, FollowStatus::Accepted);

    // Unknown user
    assert!(!dashboard.follow(999));
}

#[test]
fn test_follow_does_not_change_friend_count() {
    let mut dashboard = common::seeded_dashboard();
    assert_eq!(dashboard.progress().global_friends, 3);
    assert!(dashboard.follow(5));
    assert_eq!(dashboard.progress().global_friends, 3);
}

#[test]
fn test_selection_survives_search() {
    let mut dashboard = common::seeded_dashboard();
    assert!(dashboard.select(6));
    dashboard.set_search("japan");

    // Carlos is filtered out of the list but stays selected
    assert!(dashboard.filtered_users().iter().all(|u| u.id != 6));
    assert_eq!(dashboard.selected_user().unwrap().name, "Carlos Rodriguez");

    dashboard.clear_selection();
    assert!(dashboard.selected_user().is_none());
    assert!(!dashboard.select(42));
}
