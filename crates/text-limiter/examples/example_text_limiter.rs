//! text-limiter crate example
//!
//! Shows how a host form framework wires the limiter into its own pipeline:
//! one `TextLimiter` held by the host, called while rendering and while reading values.

use text_limiter::logging::init_logging;
use text_limiter::{FieldDescriptor, LimiterConfig, TextLimiter};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
  let config = LimiterConfig::from_env()?;
  init_logging(config.log_level());

  let limiter = TextLimiter::new(config)?;

  let fields = [
    FieldDescriptor::from_json_str(r#"{ "id": "title", "type": "text", "limit": 12 }"#)?,
    FieldDescriptor::from_json_str(
      r#"{ "id": "summary", "type": "textarea", "limit": 5, "limit_type": "word" }"#,
    )?,
    FieldDescriptor::new("textarea").with_id("notes"),
  ];

  let input = "The quick   brown fox jumps over the lazy dog";

  for field in &fields {
    let id = field.id.as_deref().unwrap_or("-");

    match limiter.badge(field) {
      Some(badge) => println!("[{id}] {}: 0/{} ({})", badge.label, badge.maximum, badge.unit),
      None => println!("[{id}] no counter"),
    }

    println!("[{id}] stored value: {:?}", limiter.filter_value(input, field));
  }

  Ok(())
}
