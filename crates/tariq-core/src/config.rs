use crate::error::{Result, TariqError};
use crate::paths;
use crate::shift::{Shift, ShiftCatalog};
use crate::types::ShiftKey;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// DistributionConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Residents never handed out as individual sessions, whatever the shift.
    #[serde(default = "default_excluded_residents")]
    pub excluded_residents: Vec<String>,
    #[serde(default = "default_sessions_per_supervisor")]
    pub sessions_per_supervisor: usize,
    #[serde(default = "default_min_tasks")]
    pub min_tasks: usize,
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

fn default_excluded_residents() -> Vec<String> {
    vec!["شيحة".to_string(), "محمد عباس".to_string()]
}

fn default_sessions_per_supervisor() -> usize {
    3
}

fn default_min_tasks() -> usize {
    4
}

fn default_max_tasks() -> usize {
    5
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            excluded_residents: default_excluded_residents(),
            sessions_per_supervisor: default_sessions_per_supervisor(),
            min_tasks: default_min_tasks(),
            max_tasks: default_max_tasks(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// First line of every prompt; the session summary follows on the next line.
    #[serde(default = "default_prompt_prefix")]
    pub prompt_prefix: String,
}

fn default_endpoint() -> String {
    "https://openrouter.ai/api/analyze".to_string()
}

fn default_model() -> String {
    "mistral".to_string()
}

fn default_prompt_prefix() -> String {
    "حلل باللهجة المصرية:".to_string()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            prompt_prefix: default_prompt_prefix(),
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub project: ProjectConfig,
    #[serde(default)]
    pub shifts: ShiftCatalog,
    #[serde(default)]
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            project: ProjectConfig {
                name: project_name.into(),
            },
            shifts: ShiftCatalog::default(),
            distribution: DistributionConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }

    pub fn shift(&self, key: ShiftKey) -> &Shift {
        self.shifts.get(key)
    }

    pub fn load(root: &Path) -> Result<Self> {
        crate::io::read_yaml(&paths::config_path(root))?.ok_or(TariqError::NotInitialized)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::config_path(root), self)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for key in ShiftKey::all() {
            let shift = self.shift(*key);
            if shift.manager.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "shift '{key}' has no manager; every supervisor will be assigned"
                    ),
                });
            }
            if shift.label.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("shift '{key}' has an empty label"),
                });
            }
            if self
                .distribution
                .excluded_residents
                .iter()
                .any(|r| r == &shift.manager)
            {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "manager '{}' of shift '{key}' is listed in excluded_residents",
                        shift.manager
                    ),
                });
            }
        }

        let d = &self.distribution;
        if d.min_tasks > d.max_tasks {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "distribution.min_tasks ({}) is greater than max_tasks ({})",
                    d.min_tasks, d.max_tasks
                ),
            });
        }
        if d.sessions_per_supervisor == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "distribution.sessions_per_supervisor is 0; no sessions will be assigned"
                    .to_string(),
            });
        }

        let endpoint = self.analysis.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("analysis.endpoint '{endpoint}' is not an http(s) URL"),
            });
        }
        if self.analysis.model.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "analysis.model is empty".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
