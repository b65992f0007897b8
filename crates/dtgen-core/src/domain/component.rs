//! Component kinds and their closed option sets.
//!
//! Each kind of digitaltwin-core component has its own stub and its own
//! recognised options. [`ComponentOptions`] enumerates them explicitly so an
//! option either has a documented effect on the template data or does not
//! exist at all.
//!
//! | Option         | Kinds            | Effect                                               |
//! |----------------|------------------|------------------------------------------------------|
//! | `description`  | all              | `description` field (default: "<phrase> for <name>") |
//! | `tags`         | all              | `tags` list (default depends on kind)                |
//! | `endpoint`     | all              | `route` field, overrides the kebab-case name         |
//! | `schedule`     | collector        | `schedule` cron expression                           |
//! | `method`       | handler          | `method` (lower-case HTTP verb)                      |
//! | `source`       | harvester        | `sourceCollector` (required)                         |
//! | `dependencies` | harvester        | `dependencies` list                                  |
//! | `source_range` | harvester        | `sourceRange` (omitted when unset)                   |
//! | `trigger_mode` | harvester        | `triggerMode`                                        |
//! | `content_type` | assets manager   | `contentType` MIME type                              |

use serde::Serialize;

use crate::domain::{
    data_bag::TemplateValue, error::DomainError, generation::DerivedFact, naming::NamingVariants,
};

/// Default cron expression for collectors: every five minutes.
pub const DEFAULT_SCHEDULE: &str = "0 */5 * * * *";

/// Default MIME type for assets managers.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension of every generated component file.
pub const COMPONENT_EXTENSION: &str = "ts";

/// The kinds of component the engine can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Collector,
    Handler,
    Harvester,
    AssetsManager,
    TilesetManager,
    MapManager,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        Self::Collector,
        Self::Handler,
        Self::Harvester,
        Self::AssetsManager,
        Self::TilesetManager,
        Self::MapManager,
    ];

    /// Name of the stub template (and the file name suffix).
    pub const fn stub_name(self) -> &'static str {
        match self {
            Self::Collector => "collector",
            Self::Handler => "handler",
            Self::Harvester => "harvester",
            Self::AssetsManager => "assets_manager",
            Self::TilesetManager => "tileset_manager",
            Self::MapManager => "map_manager",
        }
    }

    /// Human-readable name, e.g. "assets manager".
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Collector => "collector",
            Self::Handler => "handler",
            Self::Harvester => "harvester",
            Self::AssetsManager => "assets manager",
            Self::TilesetManager => "tileset manager",
            Self::MapManager => "map manager",
        }
    }

    const fn description_phrase(self) -> &'static str {
        match self {
            Self::Collector => "Data collector",
            Self::Handler => "HTTP handler",
            Self::Harvester => "Data harvester",
            Self::AssetsManager => "Assets manager",
            Self::TilesetManager => "Tileset manager",
            Self::MapManager => "Map manager",
        }
    }

    /// Tags used when the caller supplies none.
    pub fn default_tags(self) -> Vec<String> {
        let tags: &[&str] = match self {
            Self::TilesetManager => &["tileset", "assets", "zip"],
            Self::MapManager => &["map", "layer", "geojson", "assets"],
            _ => &[],
        };
        tags.iter().map(|t| (*t).to_string()).collect()
    }

    /// Description used when the caller supplies none.
    pub fn default_description(self, name: &str) -> String {
        format!("{} for {}", self.description_phrase(), name)
    }

    /// File name of the generated component: `<snake name>_<kind>.ts`.
    pub fn file_name(self, naming: &NamingVariants) -> String {
        format!(
            "{}_{}.{}",
            naming.file_name,
            self.stub_name(),
            COMPONENT_EXTENSION
        )
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// HTTP verbs a handler can answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Lower-case form used in templates.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// When a harvester runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerMode {
    /// Whenever its source collector produces new data.
    #[default]
    OnSource,
    /// On its own schedule.
    Scheduled,
}

impl TriggerMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSource => "on-source",
            Self::Scheduled => "scheduled",
        }
    }
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options every component kind accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonOptions {
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Overrides the endpoint derived from the component name.
    pub endpoint: Option<String>,
}

/// Closed per-kind option sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentOptions {
    Collector {
        common: CommonOptions,
        schedule: Option<String>,
    },
    Handler {
        common: CommonOptions,
        method: HttpMethod,
    },
    Harvester {
        common: CommonOptions,
        /// Collector to harvest from. Required; `Option` so that its absence
        /// is reported as a domain error rather than a parse failure.
        source: Option<String>,
        dependencies: Vec<String>,
        source_range: Option<String>,
        trigger_mode: TriggerMode,
    },
    AssetsManager {
        common: CommonOptions,
        content_type: Option<String>,
    },
    TilesetManager {
        common: CommonOptions,
    },
    MapManager {
        common: CommonOptions,
    },
}

impl ComponentOptions {
    /// Default options for a kind (harvesters still need a source).
    pub fn defaults(kind: ComponentKind) -> Self {
        let common = CommonOptions::default();
        match kind {
            ComponentKind::Collector => Self::Collector {
                common,
                schedule: None,
            },
            ComponentKind::Handler => Self::Handler {
                common,
                method: HttpMethod::default(),
            },
            ComponentKind::Harvester => Self::Harvester {
                common,
                source: None,
                dependencies: Vec::new(),
                source_range: None,
                trigger_mode: TriggerMode::default(),
            },
            ComponentKind::AssetsManager => Self::AssetsManager {
                common,
                content_type: None,
            },
            ComponentKind::TilesetManager => Self::TilesetManager { common },
            ComponentKind::MapManager => Self::MapManager { common },
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Collector { .. } => ComponentKind::Collector,
            Self::Handler { .. } => ComponentKind::Handler,
            Self::Harvester { .. } => ComponentKind::Harvester,
            Self::AssetsManager { .. } => ComponentKind::AssetsManager,
            Self::TilesetManager { .. } => ComponentKind::TilesetManager,
            Self::MapManager { .. } => ComponentKind::MapManager,
        }
    }

    pub fn common(&self) -> &CommonOptions {
        match self {
            Self::Collector { common, .. }
            | Self::Handler { common, .. }
            | Self::Harvester { common, .. }
            | Self::AssetsManager { common, .. }
            | Self::TilesetManager { common }
            | Self::MapManager { common } => common,
        }
    }

    /// Check required options and option values.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(endpoint) = &self.common().endpoint {
            let trimmed = endpoint.trim().trim_matches('/');
            if trimmed.is_empty() {
                return Err(DomainError::InvalidOption {
                    option: "endpoint",
                    reason: "endpoint cannot be empty".into(),
                });
            }
            if trimmed.chars().any(char::is_whitespace) {
                return Err(DomainError::InvalidOption {
                    option: "endpoint",
                    reason: format!("'{}' contains whitespace", endpoint),
                });
            }
        }

        if let Self::Harvester { source, .. } = self {
            let present = source.as_deref().is_some_and(|s| !s.trim().is_empty());
            if !present {
                return Err(DomainError::MissingRequiredOption {
                    option: "source",
                    component: "harvester",
                    hint: "Specify which collector to harvest from",
                });
            }
        }

        Ok(())
    }

    /// The endpoint the component is served under: the caller's override
    /// when given, else the kebab-case name.
    pub fn route(&self, naming: &NamingVariants) -> String {
        match &self.common().endpoint {
            Some(endpoint) => endpoint.trim().trim_matches('/').to_string(),
            None => naming.endpoint.clone(),
        }
    }

    /// Template fields contributed by the options, defaults applied.
    ///
    /// Unset optional values are left out entirely; templates render them as
    /// empty strings.
    pub fn template_fields(&self, naming: &NamingVariants) -> Vec<(&'static str, TemplateValue)> {
        let kind = self.kind();
        let common = self.common();

        let description = common
            .description
            .clone()
            .unwrap_or_else(|| kind.default_description(&naming.original));
        let tags = common
            .tags
            .as_ref()
            .map(|tags| clean_list(tags))
            .unwrap_or_else(|| kind.default_tags());

        let mut fields = vec![
            ("name", TemplateValue::from(naming.original.as_str())),
            ("description", TemplateValue::from(description)),
            ("tags", TemplateValue::List(tags)),
            ("route", TemplateValue::from(self.route(naming))),
        ];

        match self {
            Self::Collector { schedule, .. } => {
                let schedule = schedule.as_deref().unwrap_or(DEFAULT_SCHEDULE);
                fields.push(("schedule", TemplateValue::from(schedule)));
            }
            Self::Handler { method, .. } => {
                fields.push(("method", TemplateValue::from(method.as_str())));
            }
            Self::Harvester {
                source,
                dependencies,
                source_range,
                trigger_mode,
                ..
            } => {
                if let Some(source) = source {
                    fields.push(("sourceCollector", TemplateValue::from(source.trim())));
                }
                fields.push(("dependencies", TemplateValue::List(clean_list(dependencies))));
                if let Some(range) = source_range {
                    fields.push(("sourceRange", TemplateValue::from(range.as_str())));
                }
                fields.push(("triggerMode", TemplateValue::from(trigger_mode.as_str())));
            }
            Self::AssetsManager { content_type, .. } => {
                let content_type = content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
                fields.push(("contentType", TemplateValue::from(content_type)));
            }
            Self::TilesetManager { .. } | Self::MapManager { .. } => {}
        }

        fields
    }

    /// Caller-relevant facts about the generated component.
    pub fn facts(&self, route: &str) -> Vec<DerivedFact> {
        match self {
            Self::Collector { schedule, .. } => vec![
                DerivedFact::new("Endpoint", format!("GET /{route}")),
                DerivedFact::new("Schedule", schedule.as_deref().unwrap_or(DEFAULT_SCHEDULE)),
            ],
            Self::Handler { method, .. } => {
                vec![DerivedFact::new("Endpoint", format!("{method} /api/{route}"))]
            }
            Self::Harvester {
                source,
                dependencies,
                trigger_mode,
                ..
            } => {
                let mut facts = vec![
                    DerivedFact::new("Endpoint", format!("GET /{route}")),
                    DerivedFact::new("Harvests from", source.as_deref().unwrap_or_default().trim()),
                    DerivedFact::new("Trigger mode", trigger_mode.as_str()),
                ];
                let deps = clean_list(dependencies);
                if !deps.is_empty() {
                    facts.push(DerivedFact::new("Dependencies", deps.join(", ")));
                }
                facts
            }
            Self::AssetsManager { content_type, .. } => vec![
                DerivedFact::new(
                    "Content type",
                    content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
                ),
                DerivedFact::new("Endpoint", format!("GET /{route}")),
                DerivedFact::new("Upload endpoint", format!("POST /{route}/upload")),
            ],
            Self::TilesetManager { .. } | Self::MapManager { .. } => vec![
                DerivedFact::new("Endpoint", format!("GET /{route}")),
                DerivedFact::new("Upload endpoint", format!("POST /{route}/upload")),
            ],
        }
    }
}

/// Trim list entries and drop empty ones (`"a, ,b"` -> `[a, b]`).
fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
