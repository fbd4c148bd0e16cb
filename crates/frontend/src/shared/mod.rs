pub mod active_section;
pub mod components;
pub mod icons;
pub mod language;
pub mod theme;
