//! Departure board normalization.
//!
//! Turns a flat list of raw departures into one entry per route, each with
//! its upcoming departures sorted soonest first, and the routes themselves
//! ordered so the next bus to leave is at the top.

use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta};

use super::departure::RawDeparture;
use super::time::ParseError;

/// One route on a departure board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// `"{line} to {direction}"`
    pub label: String,

    /// Time until each departure, ascending.
    pub durations: Vec<TimeDelta>,
}

/// Routes at a stop, ordered by soonest departure.
///
/// Routes compare by their whole duration list, so two routes whose next
/// departures tie are ordered by the one after that, and so on. Routes that
/// compare equal keep the order they were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureBoard {
    routes: Vec<Route>,
}

impl DepartureBoard {
    /// Build a board from raw departures, measuring every departure against
    /// the same `now`.
    pub fn from_departures<'a, I>(departures: I, now: NaiveDateTime) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a RawDeparture>,
    {
        let entries = departures
            .into_iter()
            .map(|d| Ok((d.route_label(), d.duration_until(now)?)))
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Self::from_durations(entries))
    }

    /// Build a board from `(label, duration)` pairs.
    ///
    /// Pairs sharing a label are merged into a single route.
    pub fn from_durations<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, TimeDelta)>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut routes: Vec<Route> = Vec::new();

        for (label, duration) in entries {
            match index.get(&label) {
                Some(&i) => routes[i].durations.push(duration),
                None => {
                    index.insert(label.clone(), routes.len());
                    routes.push(Route {
                        label,
                        durations: vec![duration],
                    });
                }
            }
        }

        Self { routes }.sorted()
    }

    /// Re-apply the board ordering. A board that is already ordered comes
    /// back unchanged.
    pub fn sorted(mut self) -> Self {
        for route in &mut self.routes {
            route.durations.sort();
        }
        // Stable, so equal routes keep first-seen order
        self.routes.sort_by(|a, b| a.durations.cmp(&b.durations));
        self
    }

    /// Routes in board order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Look up a route by label.
    pub fn route(&self, label: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.label == label)
    }

    /// Number of distinct routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
