//! Calendar view state.
//!
//! The calendar shows one month at a time around a cursor date. Moving the
//! cursor across a month boundary changes the displayed month.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Cursor and reference date for the calendar overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    /// The highlighted date.
    pub cursor: NaiveDate,
    /// Today's date, drawn distinctly.
    pub today: NaiveDate,
}

impl CalendarView {
    /// Opens the calendar with the cursor on `today`.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            cursor: today,
            today,
        }
    }

    /// Moves the cursor by a number of days. Out-of-range moves are ignored.
    pub fn move_days(&mut self, days: i32) {
        let step = Days::new(u64::from(days.unsigned_abs()));
        let moved = if days < 0 {
            self.cursor.checked_sub_days(step)
        } else {
            self.cursor.checked_add_days(step)
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Moves the cursor by whole months, clamping the day to the month's end.
    pub fn move_months(&mut self, months: i32) {
        let step = Months::new(months.unsigned_abs());
        let moved = if months < 0 {
            self.cursor.checked_sub_months(step)
        } else {
            self.cursor.checked_add_months(step)
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Puts the cursor back on today.
    pub fn jump_to_today(&mut self) {
        self.cursor = self.today;
    }

    /// Returns the first day of the displayed month.
    #[must_use]
    pub fn month_start(&self) -> NaiveDate {
        self.cursor.with_day(1).unwrap_or(self.cursor)
    }

    /// Returns the displayed month's title, e.g. `March 2025`.
    #[must_use]
    pub fn month_title(&self) -> String {
        self.cursor.format("%B %Y").to_string()
    }

    /// Returns the displayed month as Monday-first weeks.
    ///
    /// Days outside the month are `None`.
    #[must_use]
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.month_start();
        let leading = first.weekday().num_days_from_monday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = leading;
        let mut day = Some(first);

        while let Some(date) = day.filter(|d| d.month() == first.month()) {
            week[slot] = Some(date);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            day = date.succ_opt();
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_and_week_moves_cross_months() {
        let mut view = CalendarView::new(date(2025, 1, 30));
        view.move_days(7);
        assert_eq!(view.cursor, date(2025, 2, 6));
        view.move_days(-1);
        assert_eq!(view.cursor, date(2025, 2, 5));
        assert_eq!(view.today, date(2025, 1, 30));
    }

    #[test]
    fn month_moves_clamp_day() {
        let mut view = CalendarView::new(date(2025, 1, 31));
        view.move_months(1);
        assert_eq!(view.cursor, date(2025, 2, 28));
        view.move_months(-13);
        assert_eq!(view.cursor, date(2024, 1, 28));
    }

    #[test]
    fn jump_to_today_resets_cursor() {
        let mut view = CalendarView::new(date(2025, 6, 15));
        view.move_months(4);
        view.jump_to_today();
        assert_eq!(view.cursor, date(2025, 6, 15));
    }

    #[test]
    fn weeks_are_monday_first() {
        // March 2025 starts on a Saturday and has 31 days.
        let view = CalendarView::new(date(2025, 3, 12));
        let weeks = view.weeks();

        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..5], [None; 5]);
        assert_eq!(weeks[0][5], Some(date(2025, 3, 1)));
        assert_eq!(weeks[5][0], Some(date(2025, 3, 31)));
        assert_eq!(weeks[5][1], None);
        assert_eq!(weeks.iter().flatten().flatten().count(), 31);
    }

    #[test]
    fn month_title_names_month() {
        let view = CalendarView::new(date(2025, 3, 12));
        assert_eq!(view.month_title(), "March 2025");
        assert_eq!(view.month_start(), date(2025, 3, 1));
    }
}
