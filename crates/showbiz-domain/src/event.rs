//! Events with ticket inventory and artist rosters.

use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::*,
    error::{EventError, ParseError, ValidationError},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Concert,
    Sports,
    Theater,
    Conference,
    Exhibition,
    Festival,
    Workshop,
    MoviePremiere,
    Charity,
    Esports,
    Lecture,
    Meetup,
    OpenAir,
    Carnival,
    BusinessForum,
}

impl EventType {
    pub const ALL: [EventType; 15] = [
        EventType::Concert,
        EventType::Sports,
        EventType::Theater,
        EventType::Conference,
        EventType::Exhibition,
        EventType::Festival,
        EventType::Workshop,
        EventType::MoviePremiere,
        EventType::Charity,
        EventType::Esports,
        EventType::Lecture,
        EventType::Meetup,
        EventType::OpenAir,
        EventType::Carnival,
        EventType::BusinessForum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Concert => "CONCERT",
            EventType::Sports => "SPORTS",
            EventType::Theater => "THEATER",
            EventType::Conference => "CONFERENCE",
            EventType::Exhibition => "EXHIBITION",
            EventType::Festival => "FESTIVAL",
            EventType::Workshop => "WORKSHOP",
            EventType::MoviePremiere => "MOVIE_PREMIERE",
            EventType::Charity => "CHARITY",
            EventType::Esports => "ESPORTS",
            EventType::Lecture => "LECTURE",
            EventType::Meetup => "MEETUP",
            EventType::OpenAir => "OPEN_AIR",
            EventType::Carnival => "CARNIVAL",
            EventType::BusinessForum => "BUSINESS_FORUM",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownEventType(value.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitOutcome {
    Profit,
    BreakEven,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Ticket revenue set against the supplied expenses.
pub struct ProfitReport {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub outcome: ProfitOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: Uuid,
    name: String,
    event_type: EventType,
    date: NaiveDate,
    location: String,
    total_tickets: u32,
    sold_tickets: u32,
    ticket_price: f64,
    artists: BTreeSet<String>,
}

impl Event {
    /// Creates an event with no tickets sold and an empty roster.
    pub fn new(
        name: impl Into<String>,
        event_type: EventType,
        date: NaiveDate,
        location: impl Into<String>,
        total_tickets: u32,
        ticket_price: f64,
    ) -> Result<Self, ValidationError> {
        let (name, location) = (name.into(), location.into());
        require_text(&name, ValidationError::InvalidName("event name"))?;
        require_text(&location, ValidationError::InvalidLocation)?;
        if total_tickets == 0 {
            return Err(ValidationError::InvalidTicketCount(
                "ticket count must be greater than zero".into(),
            ));
        }
        // NaN fails the comparison as well.
        if !(ticket_price >= 0.0) || !ticket_price.is_finite() {
            return Err(ValidationError::InvalidTicketPrice);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            event_type,
            date,
            location,
            total_tickets,
            sold_tickets: 0,
            ticket_price,
            artists: BTreeSet::new(),
        })
    }

    /// Seeds the number of tickets already sold.
    pub fn with_sold_tickets(mut self, sold: u32) -> Result<Self, ValidationError> {
        if sold > self.total_tickets {
            return Err(ValidationError::InvalidTicketCount(
                "sold ticket count cannot exceed the total number".into(),
            ));
        }
        self.sold_tickets = sold;
        Ok(self)
    }

    /// Seeds the artist roster; duplicates collapse.
    pub fn with_artists<I, S>(mut self, artists: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for artist in artists {
            let artist = artist.into();
            require_text(&artist, ValidationError::InvalidArtist)?;
            self.artists.insert(artist.trim().to_string());
        }
        Ok(self)
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn total_tickets(&self) -> u32 {
        self.total_tickets
    }

    pub fn sold_tickets(&self) -> u32 {
        self.sold_tickets
    }

    pub fn ticket_price(&self) -> f64 {
        self.ticket_price
    }

    pub fn tickets_remaining(&self) -> u32 {
        self.total_tickets - self.sold_tickets
    }

    pub fn artists(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(String::as_str)
    }

    pub fn sell_tickets(&mut self, count: u32) -> Result<u32, EventError> {
        if count == 0 {
            return Err(ValidationError::InvalidTicketCount(
                "the number of tickets must be greater than 0".into(),
            )
            .into());
        }
        let available = self.tickets_remaining();
        if count > available {
            tracing::warn!(event = %self.name, requested = count, available, "not enough tickets");
            return Err(EventError::InsufficientTickets {
                requested: count,
                available,
            });
        }
        self.sold_tickets += count;
        tracing::info!(event = %self.name, sold = count, remaining = self.tickets_remaining(), "tickets sold");
        Ok(self.tickets_remaining())
    }

    pub fn add_artist(&mut self, artist: &str) -> Result<(), EventError> {
        require_text(artist, ValidationError::InvalidArtist)?;
        let artist = artist.trim();
        if !self.artists.insert(artist.to_string()) {
            return Err(EventError::DuplicateArtist(artist.to_string()));
        }
        tracing::info!(event = %self.name, artist, "artist added");
        Ok(())
    }

    pub fn remove_artist(&mut self, artist: &str) -> Result<(), EventError> {
        if !self.artists.remove(artist.trim()) {
            return Err(EventError::ArtistNotFound(artist.trim().to_string()));
        }
        tracing::info!(event = %self.name, artist, "artist removed");
        Ok(())
    }

    pub fn ticket_revenue(&self) -> f64 {
        self.sold_tickets as f64 * self.ticket_price
    }

    pub fn calculate_profit(&self, expenses: f64) -> ProfitReport {
        let revenue = self.ticket_revenue();
        let profit = revenue - expenses;
        let outcome = if profit > 0.0 {
            ProfitOutcome::Profit
        } else if profit == 0.0 {
            ProfitOutcome::BreakEven
        } else {
            ProfitOutcome::Loss
        };
        tracing::info!(event = %self.name, profit, ?outcome, "profit calculated");
        ProfitReport {
            revenue,
            expenses,
            profit,
            outcome,
        }
    }
}

impl Identifiable for Event {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Event {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Event {
    fn display_label(&self) -> String {
        format!(
            "{} [{}] {} @ {} ({}/{} sold)",
            self.name, self.event_type, self.date, self.location, self.sold_tickets, self.total_tickets
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concert() -> Event {
        Event::new(
            "Summer Gala",
            EventType::Concert,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            "Hamburg",
            100,
            25.0,
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_inventory() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert!(matches!(
            Event::new("Gala", EventType::Concert, date, "Hamburg", 0, 10.0),
            Err(ValidationError::InvalidTicketCount(_))
        ));
        assert_eq!(
            Event::new("Gala", EventType::Concert, date, "Hamburg", 10, -1.0),
            Err(ValidationError::InvalidTicketPrice)
        );
        assert!(concert().with_sold_tickets(101).is_err());
    }

    #[test]
    fn ticket_price_must_be_finite() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        for price in [f64::INFINITY, f64::NAN] {
            assert_eq!(
                Event::new("Gala", EventType::Concert, date, "Hamburg", 10, price),
                Err(ValidationError::InvalidTicketPrice)
            );
        }
        assert!(Event::new("Open air", EventType::Festival, date, "Kiel", 10, 0.0).is_ok());
    }

    #[test]
    fn selling_tickets_respects_inventory() {
        let mut event = concert().with_sold_tickets(90).unwrap();
        assert_eq!(event.sell_tickets(5).unwrap(), 5);
        assert_eq!(
            event.sell_tickets(6),
            Err(EventError::InsufficientTickets {
                requested: 6,
                available: 5
            })
        );
        assert!(event.sell_tickets(0).is_err());
        assert_eq!(event.sold_tickets(), 95);
    }

    #[test]
    fn roster_rejects_duplicates_and_unknown_removals() {
        let mut event = concert();
        event.add_artist("Nina").unwrap();
        assert_eq!(
            event.add_artist("Nina"),
            Err(EventError::DuplicateArtist("Nina".into()))
        );
        assert!(event.add_artist(" ").is_err());
        event.remove_artist("Nina").unwrap();
        assert_eq!(
            event.remove_artist("Nina"),
            Err(EventError::ArtistNotFound("Nina".into()))
        );
    }

    #[test]
    fn profit_reports_outcome() {
        let event = concert().with_sold_tickets(40).unwrap();
        let report = event.calculate_profit(500.0);
        assert_eq!(report.revenue, 1000.0);
        assert_eq!(report.profit, 500.0);
        assert_eq!(report.outcome, ProfitOutcome::Profit);
        assert_eq!(event.calculate_profit(1000.0).outcome, ProfitOutcome::BreakEven);
        assert_eq!(event.calculate_profit(1500.0).outcome, ProfitOutcome::Loss);
    }

    #[test]
    fn event_type_parses_loose_spelling() {
        assert_eq!("open air".parse(), Ok(EventType::OpenAir));
        assert_eq!("movie-premiere".parse(), Ok(EventType::MoviePremiere));
        assert!("rave".parse::<EventType>().is_err());
    }
}
