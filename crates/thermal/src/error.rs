//! Error types for flux, geometry and equilibrium calculations.
//!
//! Domain errors are physical-input violations detected by a single
//! calculation. Configuration errors are malformed descriptors or constant
//! sets rejected before any calculation runs.

/// A physical input that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("dimension `{name}` must be strictly positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("area `{name}` must be finite and non-negative, got {value} m²")]
    NegativeArea { name: &'static str, value: f64 },

    #[error("optical property `{name}` must lie in [0, 1], got {value}")]
    OpticalPropertyOutOfRange { name: &'static str, value: f64 },

    #[error("flux component `{name}` must be finite and non-negative, got {value} W/m²")]
    NegativeFlux { name: &'static str, value: f64 },

    #[error("altitude must be finite and non-negative, got {0} m")]
    InvalidAltitude(f64),

    #[error("heat dissipation must be finite and non-negative, got {0} W")]
    InvalidDissipation(f64),

    #[error("emitting coefficient must be strictly positive, got {0} W/K⁴")]
    NonPositiveEmission(f64),

    #[error("absorbed power must be non-negative, got {0} W")]
    NegativeAbsorbedPower(f64),

    #[error("`{0}` evaluated to a non-finite value")]
    NonFinite(&'static str),
}

/// A descriptor or constant set that is structurally invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("body `{body}` is missing `{field}` required by the {model} property model")]
    MissingField {
        body: String,
        field: &'static str,
        model: &'static str,
    },

    #[error("a panel assembly needs at least one panel")]
    EmptyAssembly,

    #[error("physical constant `{name}` is invalid: {value}")]
    InvalidConstant { name: &'static str, value: f64 },
}

/// Any failure raised by the thermal engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThermalError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("body `{id}`: {source}")]
    Body {
        id: String,
        #[source]
        source: Box<ThermalError>,
    },
}

impl ThermalError {
    /// Attach the id of the body whose evaluation failed
    pub fn for_body(self, id: &str) -> Self {
        match self {
            already @ ThermalError::Body { .. } => already,
            other => ThermalError::Body {
                id: id.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost domain error, if this failure is one
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ThermalError::Domain(e) => Some(e),
            ThermalError::Body { source, .. } => source.domain(),
            ThermalError::Configuration(_) => None,
        }
    }

    /// The innermost configuration error, if this failure is one
    pub fn configuration(&self) -> Option<&ConfigurationError> {
        match self {
            ThermalError::Configuration(e) => Some(e),
            ThermalError::Body { source, .. } => source.configuration(),
            ThermalError::Domain(_) => None,
        }
    }
}

pub type Result<T, E = ThermalError> = std::result::Result<T, E>;
