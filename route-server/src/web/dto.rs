//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Departure, DepartureId, TimeInput};
use crate::planner::FoundRoute;

/// A stored departure, in the same camelCase shape it is created with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureResponse {
    /// Departure id
    pub id: DepartureId,

    /// Station the departure leaves from
    pub departing_station: String,

    /// Departure time (epoch milliseconds)
    pub departing_time: i64,

    /// Station the departure arrives at
    pub arrival_station: String,

    /// Arrival time (epoch milliseconds)
    pub arrival_time: i64,

    /// Ticket price
    pub ticket_price: f64,

    /// Number of seats
    pub number_of_seats: u32,
}

impl DepartureResponse {
    /// Create from a domain departure.
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            id: departure.id(),
            departing_station: departure.from().to_string(),
            departing_time: departure.depart_time().as_millis(),
            arrival_station: departure.to().to_string(),
            arrival_time: departure.arrive_time().as_millis(),
            ticket_price: departure.price().value(),
            number_of_seats: departure.seats(),
        }
    }
}

/// Request to search for a route.
#[derive(Debug, Deserialize)]
pub struct SearchRouteRequest {
    /// Earliest departure time: epoch milliseconds or RFC 3339
    pub time: TimeInput,

    /// Start station
    pub start: Option<String>,

    /// Destination station
    pub destination: Option<String>,
}

/// A route that reaches the destination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRouteResponse {
    /// Departure ids to take, in order
    pub departures: Vec<DepartureId>,

    /// Sum of ticket prices
    pub total_cost: f64,

    /// Arrival time at the destination (epoch milliseconds)
    pub final_arrival_time: i64,
}

impl SearchRouteResponse {
    /// Create from a found route.
    pub fn from_route(route: &FoundRoute) -> Self {
        Self {
            departures: route.departures.clone(),
            total_cost: route.total_cost.value(),
            final_arrival_time: route.final_arrival_time.as_millis(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewDeparture, Price, Station, Timestamp};

    #[test]
    fn departure_response_fields() {
        let departure = NewDeparture::new(
            Station::parse("A").unwrap(),
            Timestamp::from_millis(0),
            Station::parse("B").unwrap(),
            Timestamp::from_millis(10),
            Price::new(100.0).unwrap(),
            5,
        )
        .unwrap()
        .with_id(DepartureId::new(3));

        let json = serde_json::to_value(DepartureResponse::from_departure(&departure)).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["departingStation"], "A");
        assert_eq!(json["departingTime"], 0);
        assert_eq!(json["arrivalStation"], "B");
        assert_eq!(json["arrivalTime"], 10);
        assert_eq!(json["ticketPrice"], 100.0);
        assert_eq!(json["numberOfSeats"], 5);
    }

    #[test]
    fn search_request_allows_missing_stations() {
        let req: SearchRouteRequest = serde_json::from_str(r#"{"time": 0}"#).unwrap();
        assert!(req.start.is_none());
        assert!(req.destination.is_none());
    }

    #[test]
    fn search_request_needs_time() {
        let result: Result<SearchRouteRequest, _> =
            serde_json::from_str(r#"{"start": "A", "destination": "B"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn search_response_fields() {
        let route = FoundRoute {
            departures: vec![DepartureId::new(4), DepartureId::new(9)],
            total_cost: Price::new(200.0).unwrap(),
            final_arrival_time: Timestamp::from_millis(60),
        };

        let json = serde_json::to_value(SearchRouteResponse::from_route(&route)).unwrap();

        assert_eq!(json["departures"], serde_json::json!([4, 9]));
        assert_eq!(json["totalCost"], 200.0);
        assert_eq!(json["finalArrivalTime"], 60);
    }
}
