//! Scheduled departures: the edges of the connection graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::{Price, Station, TimeInput, Timestamp};

/// Error returned when parsing an invalid departure id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure id: {0:?}")]
pub struct InvalidDepartureId(String);

/// Identifier of a stored departure.
///
/// Ids are assigned by the store in creation order, so a smaller id always
/// belongs to an older record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartureId(u64);

impl DepartureId {
    /// Create an id from its numeric value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for DepartureId {
    type Err = InvalidDepartureId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(DepartureId)
            .map_err(|_| InvalidDepartureId(s.to_string()))
    }
}

impl fmt::Debug for DepartureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureId({})", self.0)
    }
}

impl fmt::Display for DepartureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored, immutable scheduled connection between two stations.
///
/// Invariant: `depart_time <= arrive_time` and `from != to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    id: DepartureId,
    from: Station,
    depart_time: Timestamp,
    to: Station,
    arrive_time: Timestamp,
    price: Price,
    seats: u32,
}

impl Departure {
    pub fn id(&self) -> DepartureId {
        self.id
    }

    /// Station the departure leaves from.
    pub fn from(&self) -> &Station {
        &self.from
    }

    pub fn depart_time(&self) -> Timestamp {
        self.depart_time
    }

    /// Station the departure arrives at.
    pub fn to(&self) -> &Station {
        &self.to
    }

    pub fn arrive_time(&self) -> Timestamp {
        self.arrive_time
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Number of seats on the departure.
    ///
    /// Recorded for clients; route search never looks at it.
    pub fn seats(&self) -> u32 {
        self.seats
    }
}

/// A validated departure that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeparture {
    from: Station,
    depart_time: Timestamp,
    to: Station,
    arrive_time: Timestamp,
    price: Price,
    seats: u32,
}

impl NewDeparture {
    /// Create a new departure, checking it leaves before it arrives and
    /// actually goes somewhere.
    pub fn new(
        from: Station,
        depart_time: Timestamp,
        to: Station,
        arrive_time: Timestamp,
        price: Price,
        seats: u32,
    ) -> Result<Self, DomainError> {
        if arrive_time < depart_time {
            return Err(DomainError::ArrivesBeforeDeparture);
        }
        if from == to {
            return Err(DomainError::SelfLoop(from));
        }

        Ok(Self {
            from,
            depart_time,
            to,
            arrive_time,
            price,
            seats,
        })
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: DepartureId) -> Departure {
        Departure {
            id,
            from: self.from,
            depart_time: self.depart_time,
            to: self.to,
            arrive_time: self.arrive_time,
            price: self.price,
            seats: self.seats,
        }
    }
}

/// Unvalidated departure as it arrives over the wire or from a seed file.
///
/// Field names on the wire are camelCase: `departingStation`,
/// `departingTime`, `arrivalStation`, `arrivalTime`, `ticketPrice`,
/// `numberOfSeats`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureInput {
    pub departing_station: String,
    pub departing_time: TimeInput,
    pub arrival_station: String,
    pub arrival_time: TimeInput,
    pub ticket_price: f64,
    pub number_of_seats: u32,
}

impl TryFrom<DepartureInput> for NewDeparture {
    type Error = DomainError;

    fn try_from(input: DepartureInput) -> Result<Self, Self::Error> {
        NewDeparture::new(
            Station::parse(&input.departing_station)?,
            input.departing_time.resolve()?,
            Station::parse(&input.arrival_station)?,
            input.arrival_time.resolve()?,
            Price::new(input.ticket_price)?,
            input.number_of_seats,
        )
    }
}
