pub mod fish;
pub mod poi;
