//! Configuration validation for plugin settings.
//!
//! Every plugin receives its settings as a raw TOML table. Before a plugin is
//! configured, the host checks that table against the plugin's [`Schema`], so
//! type errors surface with the field name instead of deep inside the plugin.

use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
	/// A required field is absent.
	#[error("Missing required field: {0}")]
	MissingField(String),
	/// A field has the right type but an unacceptable value.
	#[error("Invalid value for field '{field}': {message}")]
	InvalidValue { field: String, message: String },
	/// A field has the wrong type.
	#[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
	TypeMismatch {
		field: String,
		expected: &'static str,
		actual: String,
	},
	/// A field is not declared by the schema.
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

/// The type a configuration field must have.
#[derive(Debug, Clone)]
pub enum FieldType {
	String,
	/// An integer with optional inclusive bounds.
	Integer { min: Option<i64>, max: Option<i64> },
	Boolean,
	/// An array whose elements all have the inner type.
	Array(Box<FieldType>),
}

impl FieldType {
	fn name(&self) -> &'static str {
		match self {
			FieldType::String => "string",
			FieldType::Integer { .. } => "integer",
			FieldType::Boolean => "boolean",
			FieldType::Array(_) => "array",
		}
	}

	fn check(&self, field: &str, value: &toml::Value) -> Result<(), ValidationError> {
		let mismatch = || ValidationError::TypeMismatch {
			field: field.to_string(),
			expected: self.name(),
			actual: value.type_str().to_string(),
		};

		match self {
			FieldType::String if value.is_str() => Ok(()),
			FieldType::Boolean if value.is_bool() => Ok(()),
			FieldType::Integer { min, max } => {
				let n = value.as_integer().ok_or_else(mismatch)?;
				if let Some(min) = min.filter(|min| n < *min) {
					return Err(ValidationError::InvalidValue {
						field: field.to_string(),
						message: format!("{} is below the minimum {}", n, min),
					});
				}
				if let Some(max) = max.filter(|max| n > *max) {
					return Err(ValidationError::InvalidValue {
						field: field.to_string(),
						message: format!("{} is above the maximum {}", n, max),
					});
				}
				Ok(())
			},
			FieldType::Array(inner) => {
				let items = value.as_array().ok_or_else(mismatch)?;
				items
					.iter()
					.enumerate()
					.try_for_each(|(i, item)| inner.check(&format!("{}[{}]", field, i), item))
			},
			_ => Err(mismatch()),
		}
	}
}

/// Custom check run after the type check passes.
pub type FieldValidator = Box<dyn Fn(&toml::Value) -> Result<(), String> + Send + Sync>;

/// A named field of a [`Schema`].
pub struct Field {
	pub name: String,
	pub field_type: FieldType,
	pub validator: Option<FieldValidator>,
}

impl std::fmt::Debug for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("field_type", &self.field_type)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl Field {
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		Self {
			name: name.into(),
			field_type,
			validator: None,
		}
	}

	/// Attaches a custom check that returns an error message on failure.
	pub fn with_validator<F>(mut self, validator: F) -> Self
	where
		F: Fn(&toml::Value) -> Result<(), String> + Send + Sync + 'static,
	{
		self.validator = Some(Box::new(validator));
		self
	}

	fn check(&self, value: &toml::Value) -> Result<(), ValidationError> {
		self.field_type.check(&self.name, value)?;
		match &self.validator {
			Some(validator) => validator(value).map_err(|message| ValidationError::InvalidValue {
				field: self.name.clone(),
				message,
			}),
			None => Ok(()),
		}
	}
}

/// Required and optional fields of a plugin's settings table.
///
/// Fields not declared in either list are rejected, which catches typos in
/// configuration files early.
#[derive(Debug)]
pub struct Schema {
	pub required: Vec<Field>,
	pub optional: Vec<Field>,
}

impl Schema {
	pub fn new(required: Vec<Field>, optional: Vec<Field>) -> Self {
		Self { required, optional }
	}

	/// Validates a TOML value against this schema.
	///
	/// # Errors
	///
	/// Returns the first problem found: a non-table root, a missing
	/// required field, an undeclared field, a wrong type or a failed custom
	/// check.
	pub fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		let table = config
			.as_table()
			.ok_or_else(|| ValidationError::TypeMismatch {
				field: "root".to_string(),
				expected: "table",
				actual: config.type_str().to_string(),
			})?;

		for field in &self.required {
			let value = table
				.get(&field.name)
				.ok_or_else(|| ValidationError::MissingField(field.name.clone()))?;
			field.check(value)?;
		}

		for field in &self.optional {
			if let Some(value) = table.get(&field.name) {
				field.check(value)?;
			}
		}

		let declared = |key: &str| {
			self.required
				.iter()
				.chain(&self.optional)
				.any(|field| field.name == key)
		};
		if let Some(unknown) = table.keys().find(|key| !declared(key)) {
			return Err(ValidationError::UnknownField(unknown.clone()));
		}

		Ok(())
	}
}

/// Something that can validate a plugin's settings table.
pub trait ConfigSchema: Send + Sync {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError>;
}

impl ConfigSchema for Schema {
	fn validate(&self, config: &toml::Value) -> Result<(), ValidationError> {
		Schema::validate(self, config)
	}
}
