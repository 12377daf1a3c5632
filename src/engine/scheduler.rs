/// Cutoff rules deciding whether a day/shift pair may still be booked today.
///
/// Future dates carry no cutoff. For today, the shift's start hour decides
/// which cutoff applies: shifts starting at 18:00 or later are night shifts
/// gated by the evening cutoff, everything else by the morning cutoff. The
/// comparison is strict — at the cutoff minute the date is already closed.

/// Minute-of-day at which a shift start counts as a night shift.
const NIGHT_SHIFT_START_MIN: u32 = 18 * 60;

/// Parses "HH:MM" into minutes since midnight.
pub fn parse_clock_minutes(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Start minutes of a shift range "HH:MM–HH:MM" (en dash, as the target app
/// renders its ranges).
fn shift_start_minutes(shift_time: &str) -> Option<u32> {
    let start = shift_time.split('–').next()?;
    parse_clock_minutes(start)
}

/// Whether `day` with `shift_time` may still be acted on, given the current
/// local day and minute. Unparseable inputs for a today-date fail closed.
pub fn is_date_allowed(
    day: u32,
    shift_time: &str,
    cutoff_morning: &str,
    cutoff_evening: &str,
    today: u32,
    now_minutes: u32,
) -> bool {
    if day != today {
        return true;
    }

    let Some(start_min) = shift_start_minutes(shift_time) else {
        tracing::warn!(shift_time, "unparseable shift time, treating today-date as closed");
        return false;
    };

    let cutoff = if start_min >= NIGHT_SHIFT_START_MIN {
        parse_clock_minutes(cutoff_evening)
    } else {
        parse_clock_minutes(cutoff_morning)
    };

    match cutoff {
        Some(cutoff_min) => now_minutes < cutoff_min,
        None => {
            tracing::warn!(cutoff_morning, cutoff_evening, "unparseable cutoff, treating today-date as closed");
            false
        }
    }
}
