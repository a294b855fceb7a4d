pub mod idea;
pub mod record;
