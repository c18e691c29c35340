pub mod cases;
pub mod devices;
pub mod evaluate;
pub mod health;
pub mod power;
pub mod validate;
