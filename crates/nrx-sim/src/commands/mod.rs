pub mod loops;
pub mod psi4;
