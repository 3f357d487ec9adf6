//! TypeScript interface generation from OpenAPI/Swagger schema definitions

pub mod assembler;
pub mod config;
pub mod document;
pub mod emitter;
pub mod naming;
pub mod reference;
pub mod registry;
pub mod render;
pub mod result;
pub mod schema;
pub mod synth;

pub use assembler::{AssemblyReport, ModuleAssembler};
pub use config::OutputConfig;
pub use document::{DocumentFormat, DocumentVersion, SchemaDocument};
pub use emitter::{EmitReport, FileEmitter};
pub use naming::{to_identifier, to_slug};
pub use reference::{resolve_ref, type_name_from_ref, PlaceholderKind, ResolvedRef};
pub use registry::{InterfaceRegistry, RegistryOutcome};
pub use result::{GenerationResult, GenerationStatistics, SourceResult};
pub use schema::{Schema, SchemaKind};
pub use synth::{Field, InterfaceModel, Synthesizer, TypeExpr};
