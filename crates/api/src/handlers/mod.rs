pub mod calculations;
