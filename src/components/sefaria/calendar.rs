use super::models::{CalendarItem, CalendarResponse, ContentCategory, ResolvedReference};
use super::SefariaClient;
use crate::error::{calendar_error, from_reqwest, DigestResult, Error};
use crate::utils::time::{next_day, tomorrow_in};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, info};

/// Reference of the first item whose English title matches exactly
pub fn find_reference<'a>(items: &'a [CalendarItem], title: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.title.en == title)
        .and_then(|item| item.url.as_deref())
}

/// Pick the reference(s) for a category from today's and tomorrow's calendars
pub fn select_reference(
    category: ContentCategory,
    today: &[CalendarItem],
    tomorrow: &[CalendarItem],
) -> DigestResult<ResolvedReference> {
    let title = category.calendar_title();
    let today_ref = find_reference(today, title);
    let tomorrow_ref = find_reference(tomorrow, title);

    match (today_ref, tomorrow_ref) {
        (Some(start), Some(end)) if category.is_ranged() && start != end => {
            Ok(ResolvedReference::Range(start.to_string(), end.to_string()))
        }
        (Some(reference), _) | (None, Some(reference)) => {
            Ok(ResolvedReference::Single(reference.to_string()))
        }
        (None, None) => Err(Error::NotFound(title.to_string())),
    }
}

/// Day after the one the upstream served; the local clock is only a fallback
pub fn tomorrow_for(
    today: &CalendarResponse,
    now: DateTime<Utc>,
    tz: Tz,
) -> DigestResult<NaiveDate> {
    match today.served_date() {
        Some(date) => next_day(date),
        None => {
            debug!("Calendar response carries no date, using the local clock");
            tomorrow_in(now, tz)
        }
    }
}

impl SefariaClient {
    /// Fetch the calendar for a date, or the upstream default day when `None`
    pub async fn calendar(&self, date: Option<NaiveDate>) -> DigestResult<CalendarResponse> {
        let mut request = self.client.get(&self.config.calendar_url);
        if let Some(date) = date {
            request = request.query(&[
                ("year", date.year().to_string()),
                ("month", date.month().to_string()),
                ("day", date.day().to_string()),
            ]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| from_reqwest("Error fetching calendar", e, calendar_error))?;

        if !response.status().is_success() {
            return Err(calendar_error(&format!(
                "Error fetching calendar: HTTP {}",
                response.status().as_u16()
            )));
        }

        let calendar: CalendarResponse = response
            .json()
            .await
            .map_err(|e| from_reqwest("Failed to parse calendar response", e, calendar_error))?;

        debug!("Calendar response: {:?}", calendar);
        Ok(calendar)
    }

    /// Resolve a category against today's and tomorrow's calendars
    pub async fn resolve(&self, category: ContentCategory) -> DigestResult<ResolvedReference> {
        let today = self.calendar(None).await?;
        let tomorrow_date = tomorrow_for(&today, Utc::now(), self.config.tz())?;
        let tomorrow = self.calendar(Some(tomorrow_date)).await?;

        let reference =
            select_reference(category, &today.calendar_items, &tomorrow.calendar_items)?;
        info!("Resolved {} to '{}'", category, reference);
        Ok(reference)
    }
}
