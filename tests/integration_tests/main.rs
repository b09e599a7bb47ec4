
#[cfg(feature = "cli")]
mod cmdline;
mod end_to_end;
mod error_handling;
mod ffi;
mod shapes;
mod transforms;
