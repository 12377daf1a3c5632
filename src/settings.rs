/// Flat key→string settings surface owned by the external control panel.
///
/// The engine only reads it, once per tick, into an `AutomationSettings`
/// snapshot. Recognized keys: `process`, `time`, `dates`, `cutoff_morning`,
/// `cutoff_evening`.
use std::collections::HashMap;
use std::sync::Mutex;

pub const KEY_PROCESS: &str = "process";
pub const KEY_TIME: &str = "time";
pub const KEY_DATES: &str = "dates";
pub const KEY_CUTOFF_MORNING: &str = "cutoff_morning";
pub const KEY_CUTOFF_EVENING: &str = "cutoff_evening";

pub const DEFAULT_CUTOFF_MORNING: &str = "06:00";
pub const DEFAULT_CUTOFF_EVENING: &str = "18:00";

/// Process names and shift ranges the control panel offers. The engine never
/// reads these; they pin the vocabulary shared with the target app.
pub const KNOWN_PROCESSES: [&str; 5] = [
    "Инвентаризация",
    "Приемка",
    "Сортировка непрофиль",
    "Производство непрофиль",
    "Размещение",
];

pub const KNOWN_SHIFT_TIMES: [&str; 6] = [
    "08:00–20:00",
    "20:00–08:00",
    "12:00–20:00",
    "20:00–05:00",
    "10:00–22:00",
    "09:00–21:00",
];

pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Per-tick read-only snapshot of the automation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutomationSettings {
    pub process: Option<String>,
    /// Day-of-month digit strings, e.g. ["15", "16"].
    pub dates: Vec<String>,
    /// Shift ranges "HH:MM–HH:MM". At most one is active in this design.
    pub times: Vec<String>,
    pub cutoff_morning: String,
    pub cutoff_evening: String,
}

/// Reads the store into a snapshot, seeding cutoff defaults on first read.
pub fn load(store: &dyn SettingsStore) -> AutomationSettings {
    if store.get(KEY_CUTOFF_MORNING).is_none() {
        store.set(KEY_CUTOFF_MORNING, DEFAULT_CUTOFF_MORNING);
    }
    if store.get(KEY_CUTOFF_EVENING).is_none() {
        store.set(KEY_CUTOFF_EVENING, DEFAULT_CUTOFF_EVENING);
    }

    let dates = store
        .get(KEY_DATES)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect();

    let times = match store.get(KEY_TIME) {
        Some(t) if !t.is_empty() => vec![t],
        _ => Vec::new(),
    };

    AutomationSettings {
        process: store.get(KEY_PROCESS).filter(|p| !p.is_empty()),
        dates,
        times,
        cutoff_morning: store
            .get(KEY_CUTOFF_MORNING)
            .unwrap_or_else(|| DEFAULT_CUTOFF_MORNING.into()),
        cutoff_evening: store
            .get(KEY_CUTOFF_EVENING)
            .unwrap_or_else(|| DEFAULT_CUTOFF_EVENING.into()),
    }
}

/// In-process store used by the control panel seam and by tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("settings lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("settings lock")
            .insert(key.to_string(), value.to_string());
    }
}
