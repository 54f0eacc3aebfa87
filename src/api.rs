pub mod envertec;
