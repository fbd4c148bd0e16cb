pub mod button;
pub mod section;

pub use button::Button;
pub use section::Section;
