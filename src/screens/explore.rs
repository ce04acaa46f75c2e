use std::sync::Arc;

use tracing::error;

use crate::models::College;
use crate::search::filter_colleges;
use crate::store::{CollegeStore, Order};
use crate::view::DataBound;

/// Search screen: colleges ordered by name, narrowed client-side by the live
/// query. The filtered view is recomputed on every query change and on every
/// refetch, so it always reflects the latest of both.
pub struct ExploreScreen {
    store: Arc<dyn CollegeStore>,
    colleges: DataBound<Vec<College>>,
    query: String,
    filtered: Vec<College>,
}

impl ExploreScreen {
    pub fn new(store: Arc<dyn CollegeStore>) -> Self {
        Self {
            store,
            colleges: DataBound::new(),
            query: String::new(),
            filtered: Vec::new(),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.colleges.begin();
        let result = self.store.fetch_colleges(Order::by("name")).await;
        if let Err(err) = &result {
            error!("error fetching colleges: {err}");
        }
        self.colleges.resolve(ticket, result);
        self.refilter();
    }

    /// Called on every keystroke of the search box.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        let source = self.colleges.data().map(Vec::as_slice).unwrap_or(&[]);
        self.filtered = filter_colleges(source, &self.query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rows to render, already narrowed by the query.
    pub fn results(&self) -> &[College] {
        &self.filtered
    }

    pub fn is_loading(&self) -> bool {
        self.colleges.is_loading()
    }

    pub fn detach(&mut self) {
        self.colleges.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::memory::college_fixture;

    fn store_with_three() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::with_colleges(vec![
            college_fixture("A", "Pune", None),
            college_fixture("B", "Mumbai", Some(5)),
            college_fixture("C", "Pune", Some(2)),
        ]))
    }

    #[tokio::test]
    async fn search_narrows_by_location_keeping_relative_order() {
        let mut screen = ExploreScreen::new(store_with_three());
        screen.load().await;
        assert_eq!(screen.results().len(), 3);

        screen.set_query("pune");
        let names: Vec<&str> = screen.results().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[tokio::test]
    async fn clearing_the_query_restores_the_full_list() {
        let mut screen = ExploreScreen::new(store_with_three());
        screen.load().await;

        screen.set_query("mumbai");
        assert_eq!(screen.results().len(), 1);

        screen.set_query("");
        assert_eq!(screen.results().len(), 3);
    }

    #[tokio::test]
    async fn refetch_reapplies_the_standing_query() {
        let store = store_with_three();
        let mut screen = ExploreScreen::new(store.clone());
        screen.load().await;

        screen.set_query("pune");
        assert_eq!(screen.results().len(), 2);

        store.add_college(college_fixture("D", "Pune", Some(9)));
        screen.load().await;
        assert_eq!(screen.results().len(), 3);
    }
}
