use crate::params::SearchParams;
use rumbo_shared::Flight;

/// Price sort direction for the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    LowToHigh,
    HighToLow,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Pure filter + sort over a flight collection.
///
/// Route fields match on case-insensitive substrings; dates match on exact
/// calendar equality (the return date also admits a flight when one is set);
/// a non-empty `chosen_airlines` restricts to exact membership. The price
/// sort is stable, so repeated calls with the same inputs always yield the
/// same ordered output.
pub fn match_flights(
    all: &[Flight],
    params: &SearchParams,
    chosen_airlines: &[String],
    order: PriceOrder,
) -> Vec<Flight> {
    let mut matched: Vec<Flight> = all
        .iter()
        .filter(|flight| contains_ci(&flight.origin, &params.origin))
        .filter(|flight| contains_ci(&flight.destination, &params.destination))
        .filter(|flight| {
            flight.date == params.departure_date || params.return_date == Some(flight.date)
        })
        .filter(|flight| chosen_airlines.is_empty() || chosen_airlines.contains(&flight.airline))
        .cloned()
        .collect();

    match order {
        PriceOrder::LowToHigh => matched.sort_by(|a, b| a.base_price.total_cmp(&b.base_price)),
        PriceOrder::HighToLow => matched.sort_by(|a, b| b.base_price.total_cmp(&a.base_price)),
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flight(airline: &str, origin: &str, destination: &str, on: NaiveDate, price: f64) -> Flight {
        Flight {
            id: Uuid::new_v4(),
            airline: airline.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: on,
            departure_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            capacity: 150,
            base_price: price,
            is_featured: false,
            image_url: None,
        }
    }

    fn params_for(on: NaiveDate) -> SearchParams {
        SearchParams {
            origin: String::new(),
            destination: String::new(),
            departure_date: on,
            return_date: None,
            passengers: 1,
        }
    }

    #[test]
    fn test_price_ascending_example() {
        let on = date(2025, 12, 1);
        let all = vec![
            flight("Sur", "AEP", "MDZ", on, 500.0),
            flight("Sur", "AEP", "MDZ", on, 100.0),
            flight("Sur", "AEP", "MDZ", on, 300.0),
        ];

        let result = match_flights(&all, &params_for(on), &[], PriceOrder::LowToHigh);
        let prices: Vec<f64> = result.iter().map(|f| f.base_price).collect();
        assert_eq!(prices, vec![100.0, 300.0, 500.0]);

        let result = match_flights(&all, &params_for(on), &[], PriceOrder::HighToLow);
        let prices: Vec<f64> = result.iter().map(|f| f.base_price).collect();
        assert_eq!(prices, vec![500.0, 300.0, 100.0]);
    }

    #[test]
    fn test_sort_is_stable_on_price_ties() {
        let on = date(2025, 12, 1);
        let first = flight("Sur", "AEP", "MDZ", on, 200.0);
        let second = flight("Norte", "AEP", "MDZ", on, 200.0);
        let all = vec![first.clone(), second.clone()];

        for _ in 0..3 {
            let result = match_flights(&all, &params_for(on), &[], PriceOrder::LowToHigh);
            assert_eq!(result[0].id, first.id);
            assert_eq!(result[1].id, second.id);
        }
    }

    #[test]
    fn test_route_match_is_case_insensitive_substring() {
        let on = date(2025, 12, 1);
        let all = vec![flight("Sur", "Buenos Aires", "Mendoza", on, 100.0)];

        let mut params = params_for(on);
        params.origin = "buenos".to_string();
        params.destination = "MENDO".to_string();
        assert_eq!(match_flights(&all, &params, &[], PriceOrder::LowToHigh).len(), 1);

        params.origin = "cordoba".to_string();
        assert!(match_flights(&all, &params, &[], PriceOrder::LowToHigh).is_empty());
    }

    #[test]
    fn test_date_must_match_exactly() {
        let all = vec![flight("Sur", "AEP", "MDZ", date(2025, 12, 1), 100.0)];

        assert!(match_flights(&all, &params_for(date(2025, 12, 2)), &[], PriceOrder::LowToHigh)
            .is_empty());
    }

    #[test]
    fn test_return_date_admits_return_leg() {
        let outbound = flight("Sur", "AEP", "MDZ", date(2025, 12, 1), 100.0);
        let inbound = flight("Sur", "MDZ", "AEP", date(2025, 12, 10), 120.0);
        let all = vec![outbound, inbound];

        let mut params = params_for(date(2025, 12, 1));
        params.return_date = Some(date(2025, 12, 10));
        assert_eq!(match_flights(&all, &params, &[], PriceOrder::LowToHigh).len(), 2);

        params.return_date = None;
        assert_eq!(match_flights(&all, &params, &[], PriceOrder::LowToHigh).len(), 1);
    }

    #[test]
    fn test_airline_filter_is_exact_membership() {
        let on = date(2025, 12, 1);
        let all = vec![
            flight("Sur", "AEP", "MDZ", on, 100.0),
            flight("Norte", "AEP", "MDZ", on, 120.0),
        ];

        let chosen = vec!["Norte".to_string()];
        let result = match_flights(&all, &params_for(on), &chosen, PriceOrder::LowToHigh);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].airline, "Norte");
    }
}
