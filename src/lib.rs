pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod logger;
pub mod path;
pub mod process;

#[cfg(test)]
mod test_support;
