mod pdb;

pub use pdb::validate;
