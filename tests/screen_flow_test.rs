use std::sync::Arc;

use college_guide::models::{Role, format_lakhs};
use college_guide::screens::{AdminDashboard, ExploreScreen, HomeScreen};
use college_guide::session::Session;
use college_guide::store::{CollegeStore, MemoryStore};
use college_guide::store::memory::{college_fixture, course_fixture, profile_fixture};

fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_colleges(vec![
        college_fixture("A", "Pune", None),
        college_fixture("B", "Mumbai", Some(5)),
        college_fixture("C", "Pune", Some(2)),
    ]))
}

#[tokio::test]
async fn home_orders_ranked_colleges_before_unranked() {
    let mut home = HomeScreen::new(seeded_store());
    home.load().await;

    let names: Vec<&str> = home.colleges().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn explore_search_keeps_original_relative_order() {
    let mut explore = ExploreScreen::new(seeded_store());
    explore.load().await;

    explore.set_query("pune");
    let names: Vec<&str> = explore.results().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[tokio::test]
async fn admin_creates_a_course_priced_in_lakhs() {
    let college = college_fixture("COEP Technological University", "Pune", Some(2));
    let college_id = college.id;
    let store = Arc::new(MemoryStore::with_colleges(vec![college]));

    let admin = profile_fixture(Role::CollegeAdmin, Some(college_id));
    let admin_id = admin.id;
    store.add_profile(admin);

    let mut session = Session::new(store.clone());
    session.load_profile(admin_id).await.unwrap();

    let mut dashboard = AdminDashboard::new(store, session.admin_college_id());
    dashboard.load().await;

    assert!(dashboard.open_form());
    {
        let draft = dashboard.draft_mut().unwrap();
        draft.name = "Bachelor of Engineering".to_string();
        draft.total_seats = "60".to_string();
        draft.fees_lakhs = "1.5".to_string();
    }
    dashboard.submit_course().await;

    let course = &dashboard.courses()[0];
    assert_eq!(course.fees_per_year, 150_000);
    assert_eq!(format_lakhs(course.fees_per_year), "₹1.50L");
}

#[tokio::test]
async fn admin_without_assigned_college_never_reaches_the_form() {
    let store = Arc::new(MemoryStore::new());
    let admin = profile_fixture(Role::CollegeAdmin, None);
    let admin_id = admin.id;
    store.add_profile(admin);

    let mut session = Session::new(store.clone());
    session.load_profile(admin_id).await.unwrap();
    assert!(session.admin_college_id().is_none());

    let mut dashboard = AdminDashboard::new(store, session.admin_college_id());
    dashboard.load().await;
    assert!(!dashboard.open_form());
    assert!(dashboard.draft_mut().is_none());
}

#[tokio::test]
async fn deleting_a_missing_course_surfaces_an_error() {
    let college = college_fixture("COEP Technological University", "Pune", Some(2));
    let college_id = college.id;
    let store = Arc::new(MemoryStore::with_colleges(vec![college]));
    let surviving = course_fixture(college_id, "BSc");
    let surviving_id = surviving.id;
    store.add_course(surviving);

    let mut dashboard = AdminDashboard::new(store.clone(), Some(college_id));
    dashboard.load().await;

    // Another admin removes the course between our fetch and the confirm.
    dashboard.request_delete(surviving_id);
    store.delete_course(surviving_id).await.unwrap();
    assert_eq!(store.course_count(), 0);

    dashboard.confirm_delete().await;

    // The flow survives, surfaces the store error, and leaves the stale
    // snapshot in place instead of silently succeeding.
    assert!(dashboard.notice().is_some());
    assert_eq!(dashboard.courses().len(), 1);
}
