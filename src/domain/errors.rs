use derive_more::Display;
use wasm_bindgen::JsValue;

/// Root error type for the whole crate
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(RenderingError),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(ConfigurationError),
    #[display(fmt = "Presentation Error: {}", _0)]
    Presentation(PresentationError),
}

/// Shader stage, used to label compilation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShaderStage {
    #[display(fmt = "vertex")]
    Vertex,
    #[display(fmt = "fragment")]
    Fragment,
}

/// WebGL setup and drawing failures
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderingError {
    #[display(fmt = "canvas with id '{}' not found", _0)]
    CanvasNotFound(String),
    #[display(fmt = "element '{}' is not a canvas", _0)]
    NotACanvas(String),
    #[display(fmt = "unable to initialize WebGL, your browser or machine may not support it")]
    WebGlUnsupported,
    #[display(fmt = "could not create {} shader", _0)]
    ShaderCreationFailed(ShaderStage),
    #[display(fmt = "error compiling the {} shader: {}", stage, log)]
    ShaderCompilationFailed { stage: ShaderStage, log: String },
    #[display(fmt = "failed to create shader program")]
    ProgramCreationFailed,
    #[display(fmt = "failed to link shader program: {}", _0)]
    ProgramLinkFailed(String),
    #[display(fmt = "attribute '{}' not found in program", _0)]
    AttributeNotFound(&'static str),
    #[display(fmt = "failed to allocate {} buffer", _0)]
    BufferAllocationFailed(&'static str),
}

/// Invalid demo configuration
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigurationError {
    #[display(fmt = "malformed configuration: {}", _0)]
    Malformed(String),
    #[display(fmt = "invalid parameter '{}': {}", name, reason)]
    InvalidParameter { name: &'static str, reason: String },
    #[display(fmt = "unknown demo '{}'", _0)]
    UnknownDemo(String),
}

/// Browser integration failures
#[derive(Debug, Clone, PartialEq, Display)]
pub enum PresentationError {
    #[display(fmt = "window not available")]
    WindowUnavailable,
    #[display(fmt = "document not available")]
    DocumentUnavailable,
}

impl std::error::Error for AppError {}
impl std::error::Error for RenderingError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for PresentationError {}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Rendering(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Configuration(error)
    }
}

impl From<PresentationError> for AppError {
    fn from(error: PresentationError) -> Self {
        AppError::Presentation(error)
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, RenderingError>;
