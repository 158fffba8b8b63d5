pub mod layout;
pub mod reservation;
pub mod selection;
pub mod pricing;
