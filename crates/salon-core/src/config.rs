use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
    pub layout: LayoutConfig,
    pub booking: BookingConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Weekly shift table. A missing day is closed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub monday: Option<DayShiftConfig>,
    pub tuesday: Option<DayShiftConfig>,
    pub wednesday: Option<DayShiftConfig>,
    pub thursday: Option<DayShiftConfig>,
    pub friday: Option<DayShiftConfig>,
    pub saturday: Option<DayShiftConfig>,
    pub sunday: Option<DayShiftConfig>,
}

impl ScheduleConfig {
    /// Entry for a weekday, indexed from Sunday = 0.
    #[must_use]
    pub const fn day(&self, days_from_sunday: u32) -> Option<&DayShiftConfig> {
        match days_from_sunday {
            0 => self.sunday.as_ref(),
            1 => self.monday.as_ref(),
            2 => self.tuesday.as_ref(),
            3 => self.wednesday.as_ref(),
            4 => self.thursday.as_ref(),
            5 => self.friday.as_ref(),
            6 => self.saturday.as_ref(),
            _ => None,
        }
    }
}

/// One day's shift as written in configuration (`HH:MM` strings).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayShiftConfig {
    #[serde(default)]
    pub closed: bool,
    pub open: Option<String>,
    pub close: Option<String>,
}

/// Presentation constants for the day view.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// First displayable time-of-day; vertical offsets are measured from here.
    pub origin: String,
    /// Time-of-day at which the day view stops.
    pub display_end: String,
    pub slot_height_px: u32,
    pub min_height_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Conflicts are shown to the operator, who may book anyway.
    SoftWarning,
    /// Conflicts (and unverifiable checks) reject the booking.
    HardBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub policy: OverlapPolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON file of appointments loaded into the in-memory store at startup.
    pub seed_file: Option<String>,
}

impl Settings {
    /// ## Summary
    /// Builder pre-populated with defaults, including the salon's weekly shift table.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "debug")?
            .set_default("layout.origin", "08:00")?
            .set_default("layout.display_end", "20:00")?
            .set_default("layout.slot_height_px", 16)?
            .set_default("layout.min_height_px", 16)?
            .set_default("booking.policy", "soft_warning")?
            // Second shift
            .set_default("schedule.monday.open", "14:00")?
            .set_default("schedule.monday.close", "20:00")?
            .set_default("schedule.wednesday.open", "14:00")?
            .set_default("schedule.wednesday.close", "20:00")?
            .set_default("schedule.friday.open", "14:00")?
            .set_default("schedule.friday.close", "20:00")?
            // First shift
            .set_default("schedule.tuesday.open", "09:00")?
            .set_default("schedule.tuesday.close", "16:00")?
            .set_default("schedule.thursday.open", "09:00")?
            .set_default("schedule.thursday.close", "16:00")?
            .set_default("schedule.saturday.open", "09:00")?
            .set_default("schedule.saturday.close", "16:00")?)
    }

    /// ## Summary
    /// Loads configuration from defaults, environment variables and `config.toml`.
    /// Environment variables (`SALON__SECTION__KEY`) take precedence over defaults;
    /// the TOML file takes precedence over both.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(
                config::Environment::with_prefix("SALON")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from defaults overlaid with an inline TOML document.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or deserialization fails.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
