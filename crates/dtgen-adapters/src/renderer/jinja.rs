//! minijinja-backed stub renderer.
//!
//! Stubs use `{{ field }}` placeholders and ordinary Jinja control flow
//! (`{% for tag in tags %}`, `{% if sourceRange %}`). Fields the data bag does
//! not define render as the empty string. The case helpers are available both
//! as globals (`{{ snakeCase(x) }}`) and under the `helpers` namespace
//! (`{{ helpers.snakeCase(x) }}`). User text placed inside single-quoted
//! TypeScript strings goes through the `jsString` filter.

use std::sync::Arc;

use dtgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{CaseHelper, TemplateDataBag},
    error::{DtgenError, DtgenResult},
};
use minijinja::{
    Environment, Error, ErrorKind, State, UndefinedBehavior,
    value::{Object, Value, from_args},
};
use tracing::{debug, instrument};

/// Renders stubs with minijinja in lenient ("chainable undefined") mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct JinjaRenderer;

impl JinjaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn environment<'source>(&self, bag: &TemplateDataBag) -> Environment<'source> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_keep_trailing_newline(true);

        for helper in bag.helpers().iter().copied() {
            env.add_function(helper.name(), move |value: Value| {
                helper.apply(&value_to_text(&value))
            });
        }
        env.add_global("helpers", Value::from_object(CaseHelpers));
        env.add_filter("jsString", |value: Value| js_string(&value_to_text(&value)));

        env
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip(self, source, bag), fields(bytes = source.len()))]
    fn render(&self, stub_name: &str, source: &str, bag: &TemplateDataBag) -> DtgenResult<String> {
        let mut env = self.environment(bag);
        env.add_template(stub_name, source)
            .map_err(|e| rendering_failed(stub_name, &e))?;
        let template = env
            .get_template(stub_name)
            .map_err(|e| rendering_failed(stub_name, &e))?;

        let rendered = template
            .render(Value::from_serialize(bag))
            .map_err(|e| rendering_failed(stub_name, &e))?;

        debug!(output_bytes = rendered.len(), "Stub rendered");
        Ok(rendered)
    }
}

/// The `helpers` namespace object.
#[derive(Debug)]
struct CaseHelpers;

impl Object for CaseHelpers {
    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        let helper = CaseHelper::from_name(method).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("unknown helper '{method}'"),
            )
        })?;
        let (value,): (Value,) = from_args(args)?;
        Ok(Value::from(helper.apply(&value_to_text(&value))))
    }
}

/// Undefined and none become the empty string; everything else its display
/// form.
fn value_to_text(value: &Value) -> String {
    if value.is_undefined() || value.is_none() {
        String::new()
    } else if let Some(s) = value.as_str() {
        s.to_string()
    } else {
        value.to_string()
    }
}

/// Escape text for a single-quoted JavaScript string literal.
fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn rendering_failed(stub_name: &str, e: &Error) -> DtgenError {
    let mut reason = e.to_string();
    if let Some(detail) = e.detail() {
        if !reason.contains(detail) {
            reason = format!("{reason} ({detail})");
        }
    }
    ApplicationError::RenderingFailed {
        stub: stub_name.to_string(),
        reason,
    }
    .into()
}
