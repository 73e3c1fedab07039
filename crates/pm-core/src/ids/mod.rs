#[macro_use]
mod id_macro;

mod timer_id;

pub use timer_id::TimerId;
