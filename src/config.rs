use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{BotError, BotResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BotConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Identity and recognized content of the application being driven.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Foreground package the automation expects to be in.
    #[serde(default = "default_package")]
    pub package: String,
    /// Explicit activity component used when the platform cannot resolve a
    /// standard launch intent for `package`.
    #[serde(default = "default_fallback_activity")]
    pub fallback_activity: String,
    /// Labels whose presence marks the process-category list screen.
    #[serde(default = "default_process_labels")]
    pub process_labels: Vec<String>,
    /// Labels whose presence marks any step of the booking calendar flow.
    #[serde(default = "default_calendar_labels")]
    pub calendar_labels: Vec<String>,
    /// Label shown while the time picker sheet is open.
    #[serde(default = "default_time_picker_label")]
    pub time_picker_label: String,
    /// Label on the final confirm button (and on warehouse sign-up rows).
    #[serde(default = "default_signup_label")]
    pub signup_label: String,
    /// Heading of the warehouse picker screen.
    #[serde(default = "default_warehouse_prompt")]
    pub warehouse_prompt: String,
    /// Accessibility description of the warehouses tab in the tab bar.
    #[serde(default = "default_warehouse_tab_desc")]
    pub warehouse_tab_desc: String,
    /// Resource-id fragment marking a calendar day cell with open slots.
    #[serde(default = "default_available_shift_id")]
    pub available_shift_id: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            fallback_activity: default_fallback_activity(),
            process_labels: default_process_labels(),
            calendar_labels: default_calendar_labels(),
            time_picker_label: default_time_picker_label(),
            signup_label: default_signup_label(),
            warehouse_prompt: default_warehouse_prompt(),
            warehouse_tab_desc: default_warehouse_tab_desc(),
            available_shift_id: default_available_shift_id(),
        }
    }
}

/// Anti-thrash and recovery timings, all wall-clock milliseconds.
/// Each serves one purpose; none is derived from another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Minimum spacing between ticks under rapid UI-change notifications.
    #[serde(default = "default_min_tick_interval_ms")]
    pub min_tick_interval_ms: i64,
    /// Floor on time since the last action before any new action is issued.
    #[serde(default = "default_action_delay_ms")]
    pub action_delay_ms: i64,
    /// Post-delays recorded after specific actions, pushing the next action out.
    #[serde(default = "default_after_click_ms")]
    pub after_click_ms: i64,
    #[serde(default = "default_after_scroll_ms")]
    pub after_scroll_ms: i64,
    #[serde(default = "default_after_open_warehouses_ms")]
    pub after_open_warehouses_ms: i64,
    #[serde(default = "default_after_pick_date_ms")]
    pub after_pick_date_ms: i64,
    #[serde(default = "default_after_pick_time_ms")]
    pub after_pick_time_ms: i64,
    /// How long a process click may go unanswered before we assume the
    /// calendar failed to open.
    #[serde(default = "default_calendar_open_timeout_ms")]
    pub calendar_open_timeout_ms: i64,
    /// Grace period recorded after a foreground-mismatch relaunch.
    #[serde(default = "default_foreground_grace_ms")]
    pub foreground_grace_ms: i64,
    /// Minimum spacing between relaunch attempts.
    #[serde(default = "default_relaunch_cooldown_ms")]
    pub relaunch_cooldown_ms: i64,
    /// Idle time after which the watchdog declares the automation stuck.
    #[serde(default = "default_stuck_threshold_ms")]
    pub stuck_threshold_ms: i64,
    /// Press-and-release duration of a synthesized tap gesture.
    #[serde(default = "default_tap_duration_ms")]
    pub tap_duration_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_tick_interval_ms: default_min_tick_interval_ms(),
            action_delay_ms: default_action_delay_ms(),
            after_click_ms: default_after_click_ms(),
            after_scroll_ms: default_after_scroll_ms(),
            after_open_warehouses_ms: default_after_open_warehouses_ms(),
            after_pick_date_ms: default_after_pick_date_ms(),
            after_pick_time_ms: default_after_pick_time_ms(),
            calendar_open_timeout_ms: default_calendar_open_timeout_ms(),
            foreground_grace_ms: default_foreground_grace_ms(),
            relaunch_cooldown_ms: default_relaunch_cooldown_ms(),
            stuck_threshold_ms: default_stuck_threshold_ms(),
            tap_duration_ms: default_tap_duration_ms(),
        }
    }
}

fn default_package() -> String {
    "ru.ozon.hire".into()
}

fn default_fallback_activity() -> String {
    "ru.ozon.android.inAppUpdateFacade.activity.InAppUpdateLauncherActivity".into()
}

fn default_process_labels() -> Vec<String> {
    ["Инвентаризация", "Приемка", "Размещение", "Производство"]
        .map(String::from)
        .to_vec()
}

fn default_calendar_labels() -> Vec<String> {
    ["Записывайтесь", "Выберите время", "Записаться"]
        .map(String::from)
        .to_vec()
}

fn default_time_picker_label() -> String {
    "Выберите время".into()
}

fn default_signup_label() -> String {
    "Записаться".into()
}

fn default_warehouse_prompt() -> String {
    "Выберите склад".into()
}

fn default_warehouse_tab_desc() -> String {
    "warehouseTab".into()
}

fn default_available_shift_id() -> String {
    "availableShift".into()
}

fn default_min_tick_interval_ms() -> i64 {
    300
}

fn default_action_delay_ms() -> i64 {
    600
}

fn default_after_click_ms() -> i64 {
    1200
}

fn default_after_scroll_ms() -> i64 {
    800
}

fn default_after_open_warehouses_ms() -> i64 {
    1500
}

fn default_after_pick_date_ms() -> i64 {
    1200
}

fn default_after_pick_time_ms() -> i64 {
    1200
}

fn default_calendar_open_timeout_ms() -> i64 {
    800
}

fn default_foreground_grace_ms() -> i64 {
    800
}

fn default_relaunch_cooldown_ms() -> i64 {
    800
}

fn default_stuck_threshold_ms() -> i64 {
    120_000
}

fn default_tap_duration_ms() -> u32 {
    80
}

fn resolve_config_path() -> BotResult<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join("config.toml");
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Ok(candidate);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    let candidate = cwd.join("config.toml");
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in working directory");
        return Ok(candidate);
    }

    Err(BotError::Config(
        "config.toml not found next to executable or in working directory".into(),
    ))
}

/// Loads `config.toml`, or the built-in defaults when no file exists.
pub fn load_config() -> BotResult<BotConfig> {
    let path = match resolve_config_path() {
        Ok(p) => p,
        Err(_) => {
            tracing::info!("no config.toml found, using built-in defaults");
            return Ok(BotConfig::default());
        }
    };
    let content = std::fs::read_to_string(&path)?;
    let config: BotConfig = toml::from_str(&content)?;
    tracing::info!(path = %path.display(), package = %config.target.package, "config loaded");
    Ok(config)
}
