pub mod case;
pub mod device;
pub mod finding;
pub mod power;
pub mod rules;
pub mod selection;
