pub mod diagram;
pub mod input;
pub mod model;
pub mod report;

pub use diagram::scale::AxisScale;
pub use diagram::state::{DiagramController, DiagramEvent, DiagramEventKind};
pub use model::config::{ConfigError, DiagramConfig, FillStyle, MainTypePalette};
pub use model::mutation::MutationRecord;
pub use model::pileup::Pileup;
