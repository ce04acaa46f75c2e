use std::sync::Arc;

use tracing::error;

use crate::models::College;
use crate::store::{CollegeStore, Order};
use crate::view::DataBound;

/// Featured-colleges screen: the full list ordered by NIRF ranking,
/// unranked colleges last.
pub struct HomeScreen {
    store: Arc<dyn CollegeStore>,
    colleges: DataBound<Vec<College>>,
    refreshing: bool,
}

impl HomeScreen {
    pub fn new(store: Arc<dyn CollegeStore>) -> Self {
        Self {
            store,
            colleges: DataBound::new(),
            refreshing: false,
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.colleges.begin();
        let result = self
            .store
            .fetch_colleges(Order::by("nirf_ranking").nulls_last())
            .await;
        if let Err(err) = &result {
            error!("error fetching colleges: {err}");
        }
        self.colleges.resolve(ticket, result);
        self.refreshing = false;
    }

    /// Pull-to-refresh: same full fetch, flagged so the list stays rendered.
    pub async fn refresh(&mut self) {
        self.refreshing = true;
        self.load().await;
    }

    /// Rows to render; empty when nothing has loaded (the empty-state view).
    pub fn colleges(&self) -> &[College] {
        self.colleges.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.colleges.is_loading()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn detach(&mut self) {
        self.colleges.detach();
    }
}
