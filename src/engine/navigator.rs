/// The orchestrator: one tick per UI-change notification.
///
/// Screen state is never stored — it is reconstructed from tree content on
/// every tick, so a missed click or a lagging screen self-corrects on the
/// next notification. The only carried state is `NavigationMemory`.
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::clock::Clock;
use crate::config::BotConfig;
use crate::engine::classifier;
use crate::engine::memory::NavigationMemory;
use crate::engine::runstate::RunControl;
use crate::engine::scheduler;
use crate::engine::watchdog::{Relauncher, Watchdog};
use crate::executor::input::InputDispatcher;
use crate::host::{HostEvent, UiHost};
use crate::settings::{self, SettingsStore};
use crate::tree::query;
use crate::tree::UiTree;

pub struct Navigator {
    host: Arc<dyn UiHost>,
    settings: Arc<dyn SettingsStore>,
    run: Arc<RunControl>,
    clock: Arc<dyn Clock>,
    config: BotConfig,
    dispatcher: InputDispatcher,
    watchdog: Watchdog,
    relauncher: Relauncher,
    memory: NavigationMemory,
    event_rx: mpsc::Receiver<HostEvent>,
}

impl Navigator {
    pub fn new(
        host: Arc<dyn UiHost>,
        settings: Arc<dyn SettingsStore>,
        run: Arc<RunControl>,
        clock: Arc<dyn Clock>,
        config: BotConfig,
        event_rx: mpsc::Receiver<HostEvent>,
    ) -> Self {
        let dispatcher = InputDispatcher::new(host.clone(), config.timing.tap_duration_ms);
        let watchdog = Watchdog::new(config.timing.stuck_threshold_ms);
        let relauncher = Relauncher::new(
            config.target.package.clone(),
            config.target.fallback_activity.clone(),
            config.timing.relaunch_cooldown_ms,
        );
        let memory = NavigationMemory::new(clock.now_millis());
        Self {
            host,
            settings,
            run,
            clock,
            config,
            dispatcher,
            watchdog,
            relauncher,
            memory,
            event_rx,
        }
    }

    /// Consumes host notifications serially until a `Stop` arrives or the
    /// channel closes. Notifications landing mid-tick are coalesced by the
    /// minimum tick interval, not queued up as extra work.
    pub async fn run_loop(&mut self) {
        while let Some(event) = self.event_rx.recv().await {
            match event {
                HostEvent::TreeChanged => self.tick().await,
                HostEvent::Stop => break,
            }
        }
        tracing::info!("navigator loop ended");
    }

    pub async fn tick(&mut self) {
        if !self.run.snapshot().should_tick() {
            return;
        }

        let now = self.clock.now_millis();

        // Recovery outranks classification.
        if self.watchdog.check(&mut self.memory, now) {
            self.relauncher.attempt(&self.host, &mut self.memory, now).await;
            self.memory.last_action_at = self.clock.now_millis();
            return;
        }

        if now - self.memory.last_tick_at < self.config.timing.min_tick_interval_ms {
            return;
        }
        self.memory.last_tick_at = now;

        let Some(tree) = self.host.current_tree().await else {
            return;
        };

        if tree.package_name.as_deref() != Some(self.config.target.package.as_str()) {
            tracing::debug!(
                foreground = tree.package_name.as_deref().unwrap_or("<none>"),
                "not in target app, launching it"
            );
            self.relauncher.attempt(&self.host, &mut self.memory, now).await;
            self.memory.last_action_at = now + self.config.timing.foreground_grace_ms;
            return;
        }

        if now - self.memory.last_action_at < self.config.timing.action_delay_ms {
            return;
        }

        if classifier::is_calendar_screen(&tree, &self.config.target) {
            self.handle_calendar(&tree).await;
            return;
        }

        if self.memory.waiting_for_calendar {
            let waited = self.clock.now_millis() - self.memory.last_process_click_at;
            if waited > self.config.timing.calendar_open_timeout_ms {
                tracing::debug!(waited_ms = waited, "calendar did not open, resetting to warehouses");
                self.memory.waiting_for_calendar = false;
                self.memory.tried_processes.clear();
                self.go_to_warehouses(&tree).await;
                self.memory.last_action_at = self.clock.now_millis();
            } else {
                tracing::debug!("waiting for calendar to open");
            }
            return;
        }

        if classifier::is_process_list_screen(&tree, &self.config.target) {
            self.handle_process_list(&tree).await;
            return;
        }

        if classifier::is_warehouse_picker(&tree, &self.config.target) {
            self.memory.going_to_warehouses = false;
            self.click_first_signup(&tree).await;
            return;
        }

        self.go_to_warehouses(&tree).await;
    }

    // ── Calendar flow ─────────────────────────────────────────────────────

    async fn handle_calendar(&mut self, tree: &UiTree) {
        if classifier::is_time_picker_open(tree, &self.config.target) {
            self.handle_time_picker(tree).await;
            return;
        }

        if query::contains_text(tree, tree.root(), &self.config.target.signup_label) {
            if self.click_confirm(tree).await {
                self.memory.tried_processes.clear();
                self.memory.waiting_for_calendar = false;
            }
            return;
        }

        self.handle_date_picker(tree).await;
    }

    async fn handle_date_picker(&mut self, tree: &UiTree) {
        let snap = settings::load(self.settings.as_ref());
        if snap.dates.is_empty() || snap.times.is_empty() {
            self.go_to_warehouses(tree).await;
            self.memory.last_action_at = self.clock.now_millis();
            return;
        }

        // Only a single shift range is ever active in this design.
        let shift = snap.times[0].clone();
        let today = self.clock.today_day();
        let now_min = self.clock.minutes_into_day();

        for date in snap.dates.iter().filter(|d| {
            d.parse::<u32>().is_ok_and(|day| {
                scheduler::is_date_allowed(
                    day,
                    &shift,
                    &snap.cutoff_morning,
                    &snap.cutoff_evening,
                    today,
                    now_min,
                )
            })
        }) {
            for node in query::find_all_by_text(tree, tree.root(), date) {
                let Some(cell) = query::nearest_clickable_ancestor(tree, node) else {
                    continue;
                };
                let has_slot = tree
                    .node(cell)
                    .resource_id
                    .as_deref()
                    .is_some_and(|id| id.contains(&self.config.target.available_shift_id));
                if !has_slot {
                    continue;
                }

                tracing::info!(date = %date, "picking date with available shift");
                self.dispatcher.tap(tree, cell).await;
                self.memory.last_action_at =
                    self.clock.now_millis() + self.config.timing.after_pick_date_ms;
                return;
            }
        }

        self.go_to_warehouses(tree).await;
        self.memory.last_action_at = self.clock.now_millis();
    }

    async fn handle_time_picker(&mut self, tree: &UiTree) {
        let snap = settings::load(self.settings.as_ref());
        for time in &snap.times {
            for node in query::find_all_by_text(tree, tree.root(), time) {
                let Some(row) = query::nearest_clickable_ancestor(tree, node) else {
                    continue;
                };
                tracing::info!(time = %time, "picking shift time");
                self.dispatcher.tap(tree, row).await;
                self.memory.last_action_at =
                    self.clock.now_millis() + self.config.timing.after_pick_time_ms;
                return;
            }
        }
    }

    async fn click_confirm(&mut self, tree: &UiTree) -> bool {
        let nodes = query::find_all_by_text(tree, tree.root(), &self.config.target.signup_label);
        let Some(&first) = nodes.first() else {
            return false;
        };
        let Some(btn) = query::nearest_clickable_ancestor(tree, first) else {
            return false;
        };
        tracing::info!("confirming booking");
        self.dispatcher.tap(tree, btn).await;
        self.memory.last_action_at = self.clock.now_millis() + self.config.timing.after_click_ms;
        true
    }

    // ── Process list ──────────────────────────────────────────────────────

    async fn handle_process_list(&mut self, tree: &UiTree) {
        let snap = settings::load(self.settings.as_ref());
        let Some(target) = snap.process else {
            tracing::debug!("no selected process in settings");
            self.go_to_warehouses(tree).await;
            self.memory.last_action_at = self.clock.now_millis();
            return;
        };

        tracing::debug!(process = %target, "looking for selected process");

        for node in query::find_all_by_text(tree, tree.root(), &target) {
            let Some(label) = tree.node(node).text.clone() else {
                continue;
            };
            if self.memory.tried_processes.contains(&label) {
                continue;
            }
            let Some(row) = query::nearest_clickable_ancestor(tree, node) else {
                continue;
            };

            tracing::info!(label = %label, "clicking selected process");
            self.memory.waiting_for_calendar = true;
            self.memory.last_process_click_at = self.clock.now_millis();

            if !self.dispatcher.click(tree, row).await {
                self.dispatcher.tap(tree, row).await;
            }

            self.memory.tried_processes.insert(label);
            self.memory.last_action_at =
                self.clock.now_millis() + self.config.timing.after_click_ms;
            return;
        }

        if let Some(scrollable) = query::find_scrollable(tree, tree.root()) {
            tracing::debug!("selected process not visible, scrolling");
            self.dispatcher.scroll_forward(scrollable).await;
            self.memory.last_action_at =
                self.clock.now_millis() + self.config.timing.after_scroll_ms;
            return;
        }

        tracing::debug!("selected process not found, resetting");
        self.memory.tried_processes.clear();
        self.go_to_warehouses(tree).await;
        self.memory.last_action_at = self.clock.now_millis();
    }

    // ── Warehouse navigation ──────────────────────────────────────────────

    async fn click_first_signup(&mut self, tree: &UiTree) {
        let nodes = query::find_all_by_text(tree, tree.root(), &self.config.target.signup_label);
        if let Some(&first) = nodes.first() {
            if let Some(row) = query::nearest_clickable_ancestor(tree, first) {
                tracing::info!("signing up at first warehouse");
                self.dispatcher.tap(tree, row).await;
                self.memory.last_action_at =
                    self.clock.now_millis() + self.config.timing.after_click_ms;
            }
        }
    }

    async fn go_to_warehouses(&mut self, tree: &UiTree) {
        if self.memory.going_to_warehouses {
            return;
        }

        if let Some(tab) = query::find_by_desc_substring(
            tree,
            tree.root(),
            &self.config.target.warehouse_tab_desc,
        ) {
            tracing::debug!("navigating to warehouse tab");
            self.memory.going_to_warehouses = true;
            self.dispatcher.tap(tree, tab).await;
            self.memory.last_action_at =
                self.clock.now_millis() + self.config.timing.after_open_warehouses_ms;
        }
    }
}
