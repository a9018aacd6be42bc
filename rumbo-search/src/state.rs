use crate::matcher::{match_flights, PriceOrder};
use crate::params::SearchParams;
use chrono::NaiveDate;
use rumbo_shared::Flight;

/// Navigation intent produced by submitting the search form. The shell
/// either routes to the results view with this query string or hands it to
/// a caller-supplied callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSubmit {
    pub query: String,
    pub generation: u64,
}

/// Single source of truth for the search screen: the criteria, the airline
/// sub-filter, the sort direction, and the last accepted flight collection.
///
/// Every submitted search bumps a generation counter; responses that arrive
/// for a superseded generation are dropped so a slow fetch can never
/// overwrite newer results.
#[derive(Debug)]
pub struct SearchState {
    params: SearchParams,
    chosen_airlines: Vec<String>,
    price_order: PriceOrder,
    flights: Vec<Flight>,
    generation: u64,
}

impl SearchState {
    /// Rebuild state from the address bar.
    pub fn from_location(query: &str, today: NaiveDate) -> Self {
        Self::with_params(SearchParams::parse_query(query, today))
    }

    pub fn with_params(params: SearchParams) -> Self {
        Self {
            params,
            chosen_airlines: Vec::new(),
            price_order: PriceOrder::LowToHigh,
            flights: Vec::new(),
            generation: 0,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the criteria wholesale. Resets the airline sub-filter and
    /// supersedes any fetch still in flight.
    pub fn apply_search(&mut self, params: SearchParams) -> SearchSubmit {
        self.params = params;
        self.chosen_airlines.clear();
        self.generation += 1;
        tracing::debug!(generation = self.generation, "Search applied");
        SearchSubmit {
            query: self.params.to_query(),
            generation: self.generation,
        }
    }

    pub fn swap_route(&mut self) {
        self.params.swap_route();
    }

    /// Accept a fetched flight collection, unless it answers a search that
    /// has since been superseded.
    pub fn accept_results(&mut self, generation: u64, flights: Vec<Flight>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Dropping stale search response"
            );
            return false;
        }
        self.flights = flights;
        true
    }

    pub fn toggle_airline(&mut self, airline: &str) {
        if let Some(position) = self.chosen_airlines.iter().position(|a| a == airline) {
            self.chosen_airlines.remove(position);
        } else {
            self.chosen_airlines.push(airline.to_string());
        }
    }

    pub fn chosen_airlines(&self) -> &[String] {
        &self.chosen_airlines
    }

    pub fn set_price_order(&mut self, order: PriceOrder) {
        self.price_order = order;
    }

    /// The filtered, sorted flights the results view renders.
    pub fn visible_flights(&self) -> Vec<Flight> {
        match_flights(&self.flights, &self.params, &self.chosen_airlines, self.price_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
    }

    fn flight(airline: &str, price: f64) -> Flight {
        Flight {
            id: Uuid::new_v4(),
            airline: airline.to_string(),
            origin: "AEP".to_string(),
            destination: "MDZ".to_string(),
            date: today(),
            departure_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            capacity: 150,
            base_price: price,
            is_featured: false,
            image_url: None,
        }
    }

    #[test]
    fn test_apply_search_resets_airline_filter() {
        let mut state = SearchState::from_location("", today());
        state.toggle_airline("Sur");
        assert_eq!(state.chosen_airlines().len(), 1);

        let submit = state.apply_search(SearchParams::defaults(today()));
        assert!(state.chosen_airlines().is_empty());
        assert_eq!(submit.generation, 1);
        assert!(submit.query.contains("passengers=1"));
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = SearchState::from_location("", today());
        let first = state.apply_search(SearchParams::defaults(today()));
        let second = state.apply_search(SearchParams::defaults(today()));

        // The slow response for the first search lands after the second
        // search was applied; it must not overwrite anything.
        assert!(!state.accept_results(first.generation, vec![flight("Sur", 100.0)]));
        assert!(state.visible_flights().is_empty());

        assert!(state.accept_results(second.generation, vec![flight("Norte", 90.0)]));
        assert_eq!(state.visible_flights().len(), 1);
    }

    #[test]
    fn test_visible_flights_follow_filter_and_order() {
        let mut state = SearchState::from_location("", today());
        let submit = state.apply_search(SearchParams::defaults(today()));
        state.accept_results(
            submit.generation,
            vec![flight("Sur", 300.0), flight("Norte", 100.0), flight("Sur", 200.0)],
        );

        let prices: Vec<f64> = state.visible_flights().iter().map(|f| f.base_price).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);

        state.toggle_airline("Sur");
        let airlines: Vec<String> = state
            .visible_flights()
            .into_iter()
            .map(|f| f.airline)
            .collect();
        assert_eq!(airlines, vec!["Sur", "Sur"]);
    }
}
