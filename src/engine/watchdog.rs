/// No-progress detection and forced relaunch of the target application.
use std::sync::Arc;

use crate::engine::memory::NavigationMemory;
use crate::host::{LaunchIntent, UiHost};

/// Declares the automation stuck once no action has been recorded for longer
/// than the threshold. Checked before any classification on every tick.
pub struct Watchdog {
    threshold_ms: i64,
}

impl Watchdog {
    pub fn new(threshold_ms: i64) -> Self {
        Self { threshold_ms }
    }

    /// True if the tick should be spent on recovery instead of navigation.
    /// Clears transient memory; the caller relaunches and resets the action
    /// timestamp.
    pub fn check(&self, memory: &mut NavigationMemory, now: i64) -> bool {
        let idle = now - memory.last_action_at;
        if idle <= self.threshold_ms {
            return false;
        }
        tracing::warn!(idle_ms = idle, "stuck detected, forcing target app relaunch");
        memory.clear_transient();
        true
    }
}

/// Relaunches the target application, at most once per cooldown window.
///
/// Prefers the platform-resolved launch intent; falls back to the explicit
/// activity component known to work for the installed version. Failures are
/// logged and swallowed — the watchdog retries on its own cadence.
pub struct Relauncher {
    package: String,
    fallback_activity: String,
    cooldown_ms: i64,
}

impl Relauncher {
    pub fn new(package: String, fallback_activity: String, cooldown_ms: i64) -> Self {
        Self { package, fallback_activity, cooldown_ms }
    }

    pub async fn attempt(&self, host: &Arc<dyn UiHost>, memory: &mut NavigationMemory, now: i64) {
        if now - memory.last_launch_attempt_at < self.cooldown_ms {
            tracing::debug!("skipping relaunch: cooldown");
            return;
        }
        memory.last_launch_attempt_at = now;

        let intent = host
            .launch_intent_for(&self.package)
            .unwrap_or_else(|| LaunchIntent::Component {
                package: self.package.clone(),
                activity: self.fallback_activity.clone(),
            });

        tracing::info!(package = %self.package, ?intent, "attempting relaunch of target app");
        if let Err(e) = host.start_activity(intent).await {
            tracing::error!(error = %e, "failed to relaunch target app");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_past_threshold_and_clears_transient_memory() {
        let wd = Watchdog::new(120_000);
        let mut mem = NavigationMemory::new(1_000_000);
        mem.tried_processes.insert("Приемка".into());
        mem.waiting_for_calendar = true;
        mem.going_to_warehouses = true;

        assert!(!wd.check(&mut mem, 1_000_000 + 120_000));
        assert!(mem.waiting_for_calendar);

        assert!(wd.check(&mut mem, 1_000_000 + 120_001));
        assert!(mem.tried_processes.is_empty());
        assert!(!mem.waiting_for_calendar);
        assert!(!mem.going_to_warehouses);
        assert_eq!(mem.last_process_click_at, 0);
    }
}
