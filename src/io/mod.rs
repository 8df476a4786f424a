pub mod atomic;
pub mod basis_file;
