pub mod line;
pub mod reassemble;
pub mod record;
