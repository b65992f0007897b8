//! Naming conventions for a single component identifier.
//!
//! Every generated file derives its class name, variable name, file name and
//! endpoint from one raw identifier. The conversions here are pure functions:
//! the same input always yields the same output, and none of them can fail.
//!
//! | Input                | Pascal             | camel              | snake                | kebab                |
//! |----------------------|--------------------|--------------------|----------------------|----------------------|
//! | `api-collector`      | `ApiCollector`     | `apiCollector`     | `api_collector`      | `api-collector`      |
//! | `TestCliCollector`   | `TestCliCollector` | `testCliCollector` | `test_cli_collector` | `test-cli-collector` |
//! | `weather station 2`  | `WeatherStation2`  | `weatherStation2`  | `weather_station_2`  | `weather-station-2`  |

use serde::Serialize;

/// Convert to PascalCase (class names).
///
/// Splits on `-`, `_`, whitespace and before every upper-case character,
/// lower-cases each segment and capitalises its first character. Splitting
/// before *every* upper-case character keeps the function idempotent: a
/// second pass recovers exactly the segments produced by the first.
pub fn to_pascal_case(input: &str) -> String {
    split_segments(input)
        .into_iter()
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(segment.len());
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Convert to camelCase (variable names): PascalCase with the first
/// character lower-cased.
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(pascal.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Convert to snake_case (file names).
///
/// ## Rules
///
/// 1. Insert `_` before every upper-case character
/// 2. Lower-case everything
/// 3. Collapse each run of `-` / whitespace into a single `_`
/// 4. Strip leading underscores
///
/// Existing underscores are kept as they are, so `a__b` stays `a__b`.
pub fn to_snake_case(input: &str) -> String {
    let mut marked = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_uppercase() {
            marked.push('_');
        }
        marked.push(c);
    }

    let lowered = marked.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_separator_run = false;
    for c in lowered.chars() {
        if c == '-' || c.is_whitespace() {
            if !in_separator_run {
                out.push('_');
                in_separator_run = true;
            }
        } else {
            out.push(c);
            in_separator_run = false;
        }
    }

    out.trim_start_matches('_').to_string()
}

/// Convert to kebab-case (endpoints): snake_case with `_` replaced by `-`.
pub fn to_kebab_case(input: &str) -> String {
    to_snake_case(input).replace('_', "-")
}

/// Split an identifier into lower-cased word segments.
///
/// Separators never appear in the output; empty segments (leading, trailing
/// or doubled separators) are dropped. Digits are ordinary word characters.
fn split_segments(input: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                segments.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            segments.push(current.to_lowercase());
            current.clear();
        }

        current.push(c);
    }

    if !current.is_empty() {
        segments.push(current.to_lowercase());
    }

    segments
}

// ============================================================================
// Naming variants
// ============================================================================

/// The four standard casings of one identifier, plus the identifier itself.
///
/// Field names are serialised in camelCase because that is how stub
/// templates refer to them (`{{ className }}`, `{{ fileName }}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingVariants {
    /// The identifier exactly as supplied.
    pub original: String,
    /// PascalCase form.
    pub class_name: String,
    /// camelCase form.
    pub variable_name: String,
    /// snake_case form.
    pub file_name: String,
    /// kebab-case form.
    pub endpoint: String,
}

impl NamingVariants {
    /// Template keys owned by the naming variants. Caller options may never
    /// shadow these.
    pub const KEYS: [&'static str; 5] = [
        "original",
        "className",
        "variableName",
        "fileName",
        "endpoint",
    ];

    /// Derive every variant from a raw identifier.
    pub fn derive(name: impl Into<String>) -> Self {
        let original = name.into();
        Self {
            class_name: to_pascal_case(&original),
            variable_name: to_camel_case(&original),
            file_name: to_snake_case(&original),
            endpoint: to_kebab_case(&original),
            original,
        }
    }

    /// `(template key, value)` pairs in [`Self::KEYS`] order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("original", self.original.as_str()),
            ("className", self.class_name.as_str()),
            ("variableName", self.variable_name.as_str()),
            ("fileName", self.file_name.as_str()),
            ("endpoint", self.endpoint.as_str()),
        ]
    }
}

// ============================================================================
// Template helpers
// ============================================================================

/// Case-conversion helpers exposed to stub templates.
///
/// Templates call them by name, e.g. `{{ helpers.snakeCase(sourceCollector) }}`,
/// to derive variants of fields other than the component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseHelper {
    Pascal,
    Camel,
    Snake,
    Kebab,
}

impl CaseHelper {
    /// Every helper, in a stable order.
    pub const ALL: [CaseHelper; 4] = [Self::Pascal, Self::Camel, Self::Snake, Self::Kebab];

    /// Name under which the helper is callable from templates.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pascal => "pascalCase",
            Self::Camel => "camelCase",
            Self::Snake => "snakeCase",
            Self::Kebab => "kebabCase",
        }
    }

    /// Look a helper up by its template name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.name() == name)
    }

    /// Apply the conversion.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Pascal => to_pascal_case(input),
            Self::Camel => to_camel_case(input),
            Self::Snake => to_snake_case(input),
            Self::Kebab => to_kebab_case(input),
        }
    }
}

impl std::fmt::Display for CaseHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
