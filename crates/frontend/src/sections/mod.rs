pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod technologies;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use technologies::Technologies;
