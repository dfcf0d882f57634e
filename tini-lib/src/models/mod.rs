mod document;
mod parameter;
mod section;

pub use document::Document;
pub use parameter::Parameter;
pub use section::Section;
