pub mod id;
pub mod playlist;
pub mod track;
