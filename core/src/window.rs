//! Date window evaluation.
//!
//! Effects are active when forced, or on a December day inside the
//! configured inclusive day range. Day values are compared as plain numbers:
//! an inverted range is simply empty, and days past the end of the month are
//! never reached.

use chrono::{Datelike, NaiveDate};
use festive_types::ActiveWindow;

/// Whether `today` falls in December.
pub fn is_december(today: NaiveDate) -> bool {
    today.month() == 12
}

/// Whether seasonal effects should be shown.
///
/// `today` is `None` in environments without a definable "now"; that is
/// treated as inactive unless the window is forced.
pub fn is_active(today: Option<NaiveDate>, window: &ActiveWindow) -> bool {
    if window.force {
        return true;
    }
    let Some(today) = today else {
        return false;
    };
    let day = today.day();
    is_december(today) && day >= window.start_day && day <= window.end_day
}
