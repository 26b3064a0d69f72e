// Utils compartidos

pub mod constants;
