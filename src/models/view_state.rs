use serde::{Deserialize, Serialize};

use crate::ordering::RouteGroups;

/// Open route tabs and the active one.
///
/// Transitions take `&self` and return the next state; a value is never
/// mutated after the view has been rendered from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub open_tabs: Vec<String>,
    pub active: Option<String>,
}

/// Totals shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub station_count: usize,
    pub route_count: usize,
}

impl ViewState {
    /// Initial state once data is available: every route open, the first one active
    #[must_use]
    pub fn open_all<I, S>(route_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let open_tabs: Vec<String> = route_ids.into_iter().map(Into::into).collect();
        let active = open_tabs.first().cloned();
        Self { open_tabs, active }
    }

    #[must_use]
    pub fn is_open(&self, route_id: &str) -> bool {
        self.open_tabs.iter().any(|id| id == route_id)
    }

    #[must_use]
    pub fn is_active(&self, route_id: &str) -> bool {
        self.active.as_deref() == Some(route_id)
    }

    /// Open a tab (if not open yet) and make it active
    #[must_use]
    pub fn open_tab(&self, route_id: &str) -> Self {
        let mut open_tabs = self.open_tabs.clone();
        if !self.is_open(route_id) {
            open_tabs.push(route_id.to_string());
        }
        Self {
            open_tabs,
            active: Some(route_id.to_string()),
        }
    }

    /// Close a tab. Closing the active tab activates the last remaining one.
    #[must_use]
    pub fn close_tab(&self, route_id: &str) -> Self {
        let open_tabs: Vec<String> = self
            .open_tabs
            .iter()
            .filter(|id| id.as_str() != route_id)
            .cloned()
            .collect();

        let active = if self.is_active(route_id) {
            open_tabs.last().cloned()
        } else {
            self.active.clone()
        };

        Self { open_tabs, active }
    }

    #[must_use]
    pub fn select(&self, route_id: &str) -> Self {
        Self {
            open_tabs: self.open_tabs.clone(),
            active: Some(route_id.to_string()),
        }
    }

    #[must_use]
    pub fn status(&self, routes: &RouteGroups) -> StatusSummary {
        let station_count = self
            .open_tabs
            .iter()
            .filter_map(|id| routes.get(id))
            .map(Vec::len)
            .sum();

        StatusSummary {
            station_count,
            route_count: self.open_tabs.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;
    use indexmap::IndexMap;

    fn station(route_id: &str, name: &str) -> Station {
        Station {
            name: name.to_string(),
            code: name.to_string(),
            route_id: route_id.to_string(),
            route_name: String::new(),
            lon: 127.0,
            lat: 37.0,
        }
    }

    #[test]
    fn test_open_all_activates_first() {
        let state = ViewState::open_all(["001", "015", "050"]);
        assert_eq!(state.open_tabs, vec!["001", "015", "050"]);
        assert_eq!(state.active.as_deref(), Some("001"));
    }

    #[test]
    fn test_open_tab_does_not_duplicate() {
        let state = ViewState::open_all(["001"]).open_tab("015").open_tab("001");
        assert_eq!(state.open_tabs, vec!["001", "015"]);
        assert!(state.is_active("001"));
    }

    #[test]
    fn test_close_active_tab_falls_back_to_last() {
        let state = ViewState::open_all(["001", "015", "050"]).select("015");
        let closed = state.close_tab("015");
        assert_eq!(closed.open_tabs, vec!["001", "050"]);
        assert_eq!(closed.active.as_deref(), Some("050"));

        // The previous value is untouched
        assert_eq!(state.open_tabs.len(), 3);
        assert!(state.is_active("015"));
    }

    #[test]
    fn test_close_inactive_tab_keeps_active() {
        let state = ViewState::open_all(["001", "015"]).close_tab("015");
        assert_eq!(state.active.as_deref(), Some("001"));
    }

    #[test]
    fn test_close_last_tab_clears_active() {
        let state = ViewState::open_all(["001"]).close_tab("001");
        assert!(state.open_tabs.is_empty());
        assert_eq!(state.active, None);
    }

    #[test]
    fn test_status_counts_open_routes_only() {
        let mut routes: RouteGroups = IndexMap::new();
        routes.insert("001".into(), vec![station("001", "서울"), station("001", "부산")]);
        routes.insert("015".into(), vec![station("015", "서평택")]);

        let state = ViewState::open_all(["001"]).open_tab("999");
        let status = state.status(&routes);
        assert_eq!(status.station_count, 2);
        assert_eq!(status.route_count, 2);
    }
}
