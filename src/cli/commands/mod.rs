pub mod annotate;
pub mod context;
pub mod hover;
pub mod init;
pub mod lookup;

pub use context::AnnotationContext;
