/// Private mutable state of one navigator instance.
///
/// Mutated only inside a tick; ticks never overlap. Reset piecewise on the
/// transitions that invalidate each piece, wholesale by the watchdog.
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct NavigationMemory {
    /// Process labels already clicked this cycle; prevents re-clicking a row
    /// that scrolls back into view.
    pub tried_processes: HashSet<String>,
    /// Set after a process click until the calendar shows up or times out.
    pub waiting_for_calendar: bool,
    /// Timestamp of the click that set `waiting_for_calendar`.
    pub last_process_click_at: i64,
    /// Guards against re-issuing the warehouse-tab navigation every tick.
    pub going_to_warehouses: bool,
    /// Last state-changing action; the watchdog measures idleness from here.
    pub last_action_at: i64,
    /// Last processed notification, for the minimum tick interval gate.
    pub last_tick_at: i64,
    /// Last relaunch attempt, for the relaunch cooldown.
    pub last_launch_attempt_at: i64,
}

impl NavigationMemory {
    pub fn new(now: i64) -> Self {
        Self {
            last_action_at: now,
            ..Default::default()
        }
    }

    /// Watchdog reset: forget transient progress, keep the launch cooldown.
    pub fn clear_transient(&mut self) {
        self.tried_processes.clear();
        self.waiting_for_calendar = false;
        self.last_process_click_at = 0;
        self.going_to_warehouses = false;
    }
}
