pub mod install;

pub use install::run;
