//! The fetch-on-load state machine every screen shares: one loading flag,
//! the last successfully fetched data, and the last error notice. A failed
//! fetch keeps the previous data in place so a screen can keep rendering a
//! stale snapshot while showing the notice.

use crate::error::AppError;

/// Handed out by [`DataBound::begin`]; a resolution carrying a ticket older
/// than the latest fetch (or arriving after [`DataBound::detach`]) is
/// discarded, so responses landing after a refresh or an unmount have no
/// observable effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct DataBound<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    epoch: u64,
    detached: bool,
}

impl<T> Default for DataBound<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DataBound<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            epoch: 0,
            detached: false,
        }
    }

    /// Starts a fetch: raises the loading flag, clears any stale notice, and
    /// returns the ticket the resolution must present.
    pub fn begin(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.epoch)
    }

    /// Applies a fetch result. Success replaces the data; failure records the
    /// notice and leaves the previous data untouched. Either way the loading
    /// flag drops. Stale or post-detach resolutions are ignored.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, AppError>) {
        if self.detached || ticket.0 != self.epoch {
            return;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = Some(data),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Marks the owning view as gone; every later resolution is discarded.
    pub fn detach(&mut self) {
        self.detached = true;
        self.loading = false;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_error() -> AppError {
        AppError::Store {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn success_replaces_data_and_stops_loading() {
        let mut state: DataBound<Vec<u32>> = DataBound::new();
        let ticket = state.begin();
        assert!(state.is_loading());

        state.resolve(ticket, Ok(vec![1, 2]));
        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_keeps_previous_data_and_records_notice() {
        let mut state: DataBound<Vec<u32>> = DataBound::new();
        let ticket = state.begin();
        state.resolve(ticket, Ok(vec![1]));

        let ticket = state.begin();
        state.resolve(ticket, Err(store_error()));

        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&vec![1]));
        assert!(state.error().unwrap().contains("500"));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut state: DataBound<u32> = DataBound::new();
        let stale = state.begin();
        let fresh = state.begin();

        state.resolve(fresh, Ok(2));
        state.resolve(stale, Ok(1));

        assert_eq!(state.data(), Some(&2));
    }

    #[test]
    fn resolutions_after_detach_have_no_effect() {
        let mut state: DataBound<u32> = DataBound::new();
        let ticket = state.begin();
        state.detach();

        state.resolve(ticket, Ok(7));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
    }
}
