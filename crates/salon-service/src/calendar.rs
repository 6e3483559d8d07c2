//! Calendar façade.
//!
//! ## Summary
//! Combines the weekly schedule, the day-view grid and an appointment store
//! into the views a presentation layer renders. Every call fetches a fresh
//! snapshot; store failures propagate instead of rendering an empty day.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use salon_core::config::Settings;
use salon_core::error::CoreResult;
use salon_core::model::Appointment;
use salon_core::types::ServiceCategory;
use salon_schedule::hours::{WeeklySchedule, WorkingHours};
use salon_schedule::layout::{DayLayout, Geometry, TimeGrid, layout_day};
use salon_schedule::slots::{SlotView, day_grid};
use salon_schedule::week::{appointments_by_day, is_today, week_days};

use crate::clock::Clock;
use crate::error::ServiceResult;
use crate::store::{AppointmentFilter, AppointmentStore};

/// One rendered day column.
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub is_today: bool,
    pub hours: WorkingHours,
    pub appointments: Vec<Appointment>,
    pub layout: DayLayout,
    pub geometry: HashMap<Uuid, Geometry>,
}

#[derive(Debug)]
pub struct CalendarService<S, C> {
    store: S,
    clock: C,
    schedule: WeeklySchedule,
    grid: TimeGrid,
}

impl<S: AppointmentStore, C: Clock> CalendarService<S, C> {
    #[must_use]
    pub const fn new(store: S, clock: C, schedule: WeeklySchedule, grid: TimeGrid) -> Self {
        Self {
            store,
            clock,
            schedule,
            grid,
        }
    }

    /// ## Summary
    /// Builds the service from loaded settings.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the shift table or layout
    /// section is malformed.
    pub fn from_settings(store: S, clock: C, settings: &Settings) -> CoreResult<Self> {
        Ok(Self::new(
            store,
            clock,
            WeeklySchedule::from_config(&settings.schedule)?,
            TimeGrid::from_config(&settings.layout)?,
        ))
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    #[must_use]
    pub const fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    #[must_use]
    pub fn working_hours(&self, date: NaiveDate) -> WorkingHours {
        self.schedule.working_hours(date)
    }

    /// ## Summary
    /// Bookable slots for one category on `date`, each marked free or occupied.
    ///
    /// ## Errors
    /// Returns the store's error if the appointments cannot be fetched.
    #[tracing::instrument(skip(self))]
    pub async fn slot_grid(&self, date: NaiveDate, category: ServiceCategory) -> ServiceResult<Vec<SlotView>> {
        if !self.schedule.working_hours(date).is_open() {
            return Ok(Vec::new());
        }
        let appointments = self.store.list(&AppointmentFilter::partition(date, category)).await?;
        Ok(day_grid(&self.schedule, &appointments, date, category))
    }

    /// Slot grid for today according to the clock.
    ///
    /// ## Errors
    /// Same as [`Self::slot_grid`].
    pub async fn today_grid(&self, category: ServiceCategory) -> ServiceResult<Vec<SlotView>> {
        self.slot_grid(self.today(), category).await
    }

    /// ## Summary
    /// Laid-out appointments for one day, optionally narrowed to a category.
    ///
    /// ## Errors
    /// Returns the store's error if fetching fails and a schedule error if a
    /// stored appointment is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn day_view(&self, date: NaiveDate, category: Option<ServiceCategory>) -> ServiceResult<DayView> {
        let filter = AppointmentFilter {
            date: Some(date),
            through: None,
            category,
        };
        let appointments = self.store.list(&filter).await?;
        self.build_day(date, appointments)
    }

    /// ## Summary
    /// Monday through Saturday of the week containing `date`, optionally
    /// narrowed to a category. One fetch bounded to those days covers the
    /// whole week.
    ///
    /// ## Errors
    /// Same as [`Self::day_view`].
    #[tracing::instrument(skip(self))]
    pub async fn week(&self, date: NaiveDate, category: Option<ServiceCategory>) -> ServiceResult<Vec<DayView>> {
        let days = week_days(date);
        let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
            return Ok(Vec::new());
        };
        let appointments = self
            .store
            .list(&AppointmentFilter::between(first, last, category))
            .await?;
        appointments_by_day(&appointments, &days)
            .into_iter()
            .map(|(day, list)| self.build_day(day, list.into_iter().cloned().collect()))
            .collect()
    }

    fn build_day(&self, date: NaiveDate, appointments: Vec<Appointment>) -> ServiceResult<DayView> {
        let layout = layout_day(&appointments)?;
        let geometry = appointments
            .iter()
            .map(|a| (a.id, self.grid.geometry(a)))
            .collect();
        Ok(DayView {
            date,
            is_today: is_today(date, self.clock.today()),
            hours: self.schedule.working_hours(date),
            appointments,
            layout,
            geometry,
        })
    }
}
